//! instancectl perform-action コマンドハンドラ

use crate::utils::value_or_prompt;
use colored::Colorize;
use instancectl_cloud::{CloudError, InstanceRegistry};
use std::io::{BufRead, Write};

pub async fn handle(
    registry: &InstanceRegistry,
    key: Option<String>,
    action: Option<String>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let key = value_or_prompt(key, "Key", input, out)?;
    let action = value_or_prompt(action, "Action", input, out)?;

    // アクション名はそのままプロバイダーに渡す（検証はバックエンド側）
    match registry.perform_action(&key, &action).await {
        Ok(()) => {
            writeln!(out, "{} {} on {}", "Performed".green(), action, key)?;
        }
        Err(CloudError::KeyNotFound(_)) => {
            writeln!(out, "{}", "Key not found".yellow())?;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
