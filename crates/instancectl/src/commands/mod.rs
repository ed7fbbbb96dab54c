pub mod add_instance;
pub mod list_instances;
pub mod list_states;
pub mod perform_action;
pub mod show_instance;

#[cfg(test)]
pub(crate) mod test_support;
