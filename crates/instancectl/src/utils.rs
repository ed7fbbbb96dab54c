use anyhow::Context;
use instancectl_cloud::{
    FileSystemDriver, InstanceFactory, InstanceRegistry, Provider, RegistryConfig,
};
use instancectl_cloud_oci::{OciOptions, OciProvider};
use instancectl_config::Settings;
use std::io::{BufRead, Write};
use std::sync::Arc;

/// 設定からプロバイダー一覧を組み立てる（起動時に一度だけ）
pub fn build_providers(settings: &Settings) -> anyhow::Result<Vec<Arc<dyn Provider>>> {
    let oci: Arc<dyn Provider> = Arc::new(OciProvider::new(OciOptions {
        profile: settings.oci.profile.clone(),
        config_file: settings.resolved_oci_config_file()?,
        region: settings.oci.region.clone(),
    }));

    Ok(vec![oci])
}

/// ストアを読み込んでレジストリを開く
pub async fn open_registry(settings: &Settings) -> anyhow::Result<InstanceRegistry> {
    let store_path = settings.resolved_store_path()?;
    tracing::debug!("Using store {}", store_path.display());

    let factory = InstanceFactory::new(build_providers(settings)?)?;
    let config = RegistryConfig::new(FileSystemDriver::new(&store_path), factory);

    InstanceRegistry::open(config)
        .await
        .with_context(|| format!("Failed to load {}", store_path.display()))
}

/// 値が指定されていなければ対話的に入力させる
pub fn value_or_prompt(
    value: Option<String>,
    label: &str,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => prompt(label, input, out),
    }
}

/// `label: ` を表示して1行読み込む（空行の場合は再入力）
pub fn prompt(label: &str, input: &mut impl BufRead, out: &mut impl Write) -> anyhow::Result<String> {
    loop {
        write!(out, "{}: ", label)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("No input for {}", label);
        }

        let value = line.trim();
        if !value.is_empty() {
            return Ok(value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_reads_line() {
        let mut input = Cursor::new("oci\n");
        let mut out = Vec::new();

        let value = prompt("Provider", &mut input, &mut out).unwrap();

        assert_eq!(value, "oci");
        assert_eq!(String::from_utf8(out).unwrap(), "Provider: ");
    }

    #[test]
    fn test_prompt_repeats_on_empty_line() {
        let mut input = Cursor::new("\n  \nweb1\n");
        let mut out = Vec::new();

        let value = prompt("Key", &mut input, &mut out).unwrap();

        assert_eq!(value, "web1");
        assert_eq!(String::from_utf8(out).unwrap(), "Key: Key: Key: ");
    }

    #[test]
    fn test_prompt_eof() {
        let mut input = Cursor::new("");
        let mut out: Vec<u8> = Vec::new();

        assert!(prompt("Key", &mut input, &mut out).is_err());
    }

    #[test]
    fn test_value_or_prompt_skips_prompt() {
        let mut input = Cursor::new("");
        let mut out: Vec<u8> = Vec::new();

        let value =
            value_or_prompt(Some("web1".to_string()), "Key", &mut input, &mut out).unwrap();

        assert_eq!(value, "web1");
        assert!(out.is_empty());
    }

    #[test]
    fn test_build_providers() {
        let providers = build_providers(&Settings::default()).unwrap();
        let slugs: Vec<&str> = providers.iter().map(|p| p.slug()).collect();
        assert_eq!(slugs, vec!["oci"]);
    }
}
