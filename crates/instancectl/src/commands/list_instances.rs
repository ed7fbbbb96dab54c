//! instancectl list-instances コマンドハンドラ

use instancectl_cloud::InstanceRegistry;
use std::io::Write;

/// `key (slug, remote_id)` を1行ずつ表示
pub fn handle(registry: &InstanceRegistry, out: &mut impl Write) -> anyhow::Result<()> {
    for (key, instance) in registry.list() {
        writeln!(out, "{} ({}, {})", key, instance.slug(), instance.remote_id())?;
    }
    Ok(())
}
