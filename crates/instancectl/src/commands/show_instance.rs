//! instancectl show-instance コマンドハンドラ

use colored::Colorize;
use instancectl_cloud::InstanceRegistry;
use std::io::Write;

pub async fn handle(
    registry: &InstanceRegistry,
    key: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let Some(instance) = registry.get(key) else {
        writeln!(out, "{}", "Key not found".yellow())?;
        return Ok(());
    };

    let details = instance.details().await?;

    writeln!(out, "{}", key.bold())?;
    writeln!(
        out,
        "  Provider:     {} ({})",
        instance.slug(),
        instance.provider().display_name()
    )?;
    writeln!(out, "  Remote id:    {}", instance.remote_id())?;
    writeln!(out, "  Display name: {}", details.display_name)?;
    writeln!(out, "  State:        {}", details.state)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{FakeProvider, output, registry};

    #[tokio::test]
    async fn test_show_instance() {
        let temp_dir = tempfile::tempdir().unwrap();
        let provider = FakeProvider::new(&[("id-1", "RUNNING")]);
        let mut registry = registry(&temp_dir.path().join("store.json"), provider);
        registry.add_instance("fake", "id-1", "db").unwrap();
        let mut out = Vec::new();

        handle(&registry, "db", &mut out).await.unwrap();

        let out = output(out);
        assert!(out.contains("Provider:     fake (Fake)"));
        assert!(out.contains("Remote id:    id-1"));
        assert!(out.contains("State:        RUNNING"));
    }

    #[tokio::test]
    async fn test_show_instance_missing_key() {
        let temp_dir = tempfile::tempdir().unwrap();
        let registry = registry(&temp_dir.path().join("store.json"), FakeProvider::new(&[]));
        let mut out = Vec::new();

        handle(&registry, "nope", &mut out).await.unwrap();

        assert!(output(out).contains("Key not found"));
    }
}
