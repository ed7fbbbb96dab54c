mod commands;
mod utils;

use clap::{Parser, Subcommand};
use instancectl_config::{Overrides, load_settings};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "instancectl")]
#[command(about = "Track cloud compute instances by key and drive their lifecycle", long_about = None)]
struct Cli {
    /// Store file (default: ~/.instancectl)
    #[arg(long, global = true, env = "INSTANCECTL_STORE")]
    store: Option<PathBuf>,

    /// Config file (default: ~/.config/instancectl/config.yaml)
    #[arg(long, global = true, env = "INSTANCECTL_CONFIG_PATH")]
    config: Option<PathBuf>,

    /// OCI config profile
    #[arg(long, global = true, env = "OCI_CLI_PROFILE")]
    oci_profile: Option<String>,

    /// OCI config file
    #[arg(long, global = true, env = "OCI_CLI_CONFIG_FILE")]
    oci_config_file: Option<PathBuf>,

    /// OCI region
    #[arg(long, global = true, env = "OCI_CLI_REGION")]
    oci_region: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            store_path: self.store.clone(),
            oci_profile: self.oci_profile.clone(),
            oci_config_file: self.oci_config_file.clone(),
            oci_region: self.oci_region.clone(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Track an instance under a key (prompts for missing values)
    AddInstance {
        /// Provider slug (e.g. oci)
        #[arg(short = 'p', long)]
        provider: Option<String>,
        /// Remote instance id (e.g. an OCID)
        #[arg(short = 'i', long)]
        instance_id: Option<String>,
        /// Key to track the instance under
        #[arg(short = 'k', long)]
        key: Option<String>,
    },
    /// List tracked instances
    ListInstances,
    /// Query and list the state of every tracked instance
    ListStates,
    /// Perform a lifecycle action on an instance (prompts for missing values)
    PerformAction {
        /// Key of the instance
        #[arg(short = 'k', long)]
        key: Option<String>,
        /// Action passed to the provider (e.g. START, STOP, SOFTRESET)
        #[arg(short = 'a', long)]
        action: Option<String>,
    },
    /// Show provider details of an instance
    ShowInstance {
        /// Key of the instance
        key: String,
    },
    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ログはstderrへ（stdoutはコマンド出力用）
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Versionコマンドはストア不要
    if matches!(cli.command, Commands::Version) {
        println!("instancectl {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let settings = load_settings(cli.config.as_deref(), cli.overrides())?;

    // 起動時に一度だけストアを読み込む
    let mut registry = utils::open_registry(&settings).await?;

    let mut out = std::io::stdout();
    let mut input = std::io::stdin().lock();

    // コマンドディスパッチ
    match cli.command {
        Commands::AddInstance {
            provider,
            instance_id,
            key,
        } => {
            commands::add_instance::handle(
                &mut registry,
                provider,
                instance_id,
                key,
                &mut input,
                &mut out,
            )
            .await?;
        }
        Commands::ListInstances => {
            commands::list_instances::handle(&registry, &mut out)?;
        }
        Commands::ListStates => {
            commands::list_states::handle(&registry, &mut out).await?;
        }
        Commands::PerformAction { key, action } => {
            commands::perform_action::handle(&registry, key, action, &mut input, &mut out)
                .await?;
        }
        Commands::ShowInstance { key } => {
            commands::show_instance::handle(&registry, &key, &mut out).await?;
        }
        Commands::Version => {
            unreachable!("Version is handled before loading the store");
        }
    }

    Ok(())
}
