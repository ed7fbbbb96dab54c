//! instancectl list-states コマンドハンドラ

use instancectl_cloud::InstanceRegistry;
use std::io::Write;

/// `key: state` を1行ずつ表示
///
/// バックエンドへの問い合わせは1件ずつ順番に行い、最初のエラーで中断する。
pub async fn handle(registry: &InstanceRegistry, out: &mut impl Write) -> anyhow::Result<()> {
    for (key, instance) in registry.list() {
        let state = instance.state().await?;
        writeln!(out, "{}: {}", key, state)?;
    }
    Ok(())
}
