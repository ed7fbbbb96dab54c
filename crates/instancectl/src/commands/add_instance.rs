//! instancectl add-instance コマンドハンドラ

use crate::utils::value_or_prompt;
use colored::Colorize;
use instancectl_cloud::{CloudError, InstanceRegistry};
use std::io::{BufRead, Write};

pub async fn handle(
    registry: &mut InstanceRegistry,
    provider: Option<String>,
    instance_id: Option<String>,
    key: Option<String>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let provider = value_or_prompt(provider, "Provider", input, out)?;
    let instance_id = value_or_prompt(instance_id, "Instance id", input, out)?;
    let key = value_or_prompt(key, "Key", input, out)?;

    match registry
        .add_instance(&provider, &instance_id, &key)
        .map(|_| ())
    {
        Ok(()) => {}
        Err(CloudError::UnknownProvider(slug)) => {
            anyhow::bail!(
                "Unknown provider: {} (available: {})",
                slug,
                registry.factory().slugs().join(", ")
            );
        }
        Err(e) => return Err(e.into()),
    }

    // 追加したらすぐに保存
    registry.write_to_storage().await?;

    writeln!(
        out,
        "{} {} ({}, {})",
        "Added instance".green(),
        key,
        provider,
        instance_id
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{FakeProvider, output, registry};
    use std::io::Cursor;

    #[tokio::test]
    async fn test_add_instance_with_args() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = temp_dir.path().join("store.json");
        let mut registry = registry(&store, FakeProvider::new(&[]));
        let mut out = Vec::new();

        handle(
            &mut registry,
            Some("fake".to_string()),
            Some("ocid1.instance.abc".to_string()),
            Some("web1".to_string()),
            &mut Cursor::new(""),
            &mut out,
        )
        .await
        .unwrap();

        assert!(output(out).contains("web1 (fake, ocid1.instance.abc)"));
        assert_eq!(registry.get("web1").unwrap().remote_id(), "ocid1.instance.abc");

        // 保存されている
        let saved: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&store).unwrap()).unwrap();
        assert_eq!(saved["instances"]["web1"]["provider"], "fake");
    }

    #[tokio::test]
    async fn test_add_instance_prompts() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut registry = registry(&temp_dir.path().join("store.json"), FakeProvider::new(&[]));
        let mut out = Vec::new();

        handle(
            &mut registry,
            None,
            None,
            None,
            &mut Cursor::new("fake\nocid1.instance.abc\nweb1\n"),
            &mut out,
        )
        .await
        .unwrap();

        let out = output(out);
        assert!(out.starts_with("Provider: Instance id: Key: "));
        assert!(registry.contains_key("web1"));
    }

    #[tokio::test]
    async fn test_add_instance_duplicate_key_keeps_store() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = temp_dir.path().join("store.json");
        let mut registry = registry(&store, FakeProvider::new(&[]));
        registry.add_instance("fake", "first", "a").unwrap();
        registry.write_to_storage().await.unwrap();
        let before = std::fs::read(&store).unwrap();

        let result = handle(
            &mut registry,
            Some("fake".to_string()),
            Some("second".to_string()),
            Some("a".to_string()),
            &mut Cursor::new(""),
            &mut Vec::<u8>::new(),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(registry.len(), 1);
        assert_eq!(std::fs::read(&store).unwrap(), before);
    }

    #[tokio::test]
    async fn test_add_instance_unknown_provider() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = temp_dir.path().join("store.json");
        let mut registry = registry(&store, FakeProvider::new(&[]));

        let err = handle(
            &mut registry,
            Some("aws".to_string()),
            Some("i-0123".to_string()),
            Some("web1".to_string()),
            &mut Cursor::new(""),
            &mut Vec::<u8>::new(),
        )
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), "Unknown provider: aws (available: fake)");
        assert!(!store.exists());
    }
}
