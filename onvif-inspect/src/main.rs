use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::time::Duration;
use tracing::{info, warn};

use onvif_sdk::{DeviceConfig, OnvifDevice};

mod summary;

/// Inspect and configure an ONVIF camera
///
/// Connection settings fall back to the ONVIF_ADDRESS, ONVIF_USERNAME and
/// ONVIF_PASSWORD environment variables.
#[derive(Parser, Debug)]
#[command(name = "onvif-inspect")]
#[command(about = "Inspect and configure an ONVIF camera")]
#[command(version)]
pub struct Args {
    /// Camera host, host:port, or device service URL
    #[arg(short, long, env = "ONVIF_ADDRESS")]
    pub address: String,

    #[arg(short, long, env = "ONVIF_USERNAME")]
    pub username: Option<String>,

    #[arg(short, long, env = "ONVIF_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Read timeout in seconds
    #[arg(short, long, default_value = "10")]
    pub timeout: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", env = "ONVIF_LOG_LEVEL")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Refresh every area and print the snapshot
    Snapshot {
        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set the name and location scopes
    SetScopes {
        #[arg(long)]
        name: String,
        #[arg(long)]
        location: String,
    },
    /// Set the camera clock to this host's UTC time
    SyncTime,
    /// Reboot the camera
    Reboot,
}

impl Args {
    /// Validate command line arguments
    pub fn validate(&self) -> Result<()> {
        if self.timeout == 0 {
            return Err(anyhow::anyhow!("Timeout must be positive"));
        }

        match self.log_level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => {
                return Err(anyhow::anyhow!(
                    "Invalid log level '{}'. Valid levels: error, warn, info, debug, trace",
                    self.log_level
                ));
            }
        }

        Ok(())
    }

    pub fn device_config(&self) -> DeviceConfig {
        let mut config =
            DeviceConfig::new(self.address.clone()).with_read_timeout(Duration::from_secs(self.timeout));
        if let Some(username) = &self.username {
            config = config.with_credentials(username.clone(), self.password.clone().unwrap_or_default());
        }
        config
    }
}

/// `ONVIF_LOG_MODE` selects a mode from the state crate; otherwise plain
/// stderr output at `log_level`
fn init_tracing(log_level: &str) -> Result<()> {
    if std::env::var("ONVIF_LOG_MODE").is_ok() {
        return onvif_state::init_logging_from_env().context("Failed to initialize logging");
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.to_lowercase())),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

fn run(args: Args) -> Result<()> {
    let config = args.device_config();
    let mut camera = OnvifDevice::connect(config).context("Invalid connection settings")?;

    match args.command {
        Command::Snapshot { json } => {
            let report = camera.refresh_all();
            for (area, error) in &report.failed {
                warn!(area = %area, error = %error, "area not refreshed");
            }

            if json {
                let out = serde_json::to_string_pretty(camera.snapshot())
                    .context("Failed to serialize snapshot")?;
                println!("{}", out);
            } else {
                print!("{}", summary::render(camera.snapshot()));
                print!("{}", summary::render_failures(&report));
            }
        }
        Command::SetScopes { name, location } => {
            camera
                .set_scopes(&name, &location)
                .context("SetScopes failed")?;
            println!("Scopes updated");
        }
        Command::SyncTime => {
            // Keep the camera's zone settings
            if let Err(e) = camera.refresh_date_time() {
                warn!(error = %e, "could not read current clock settings");
            }
            camera.sync_time().context("SetSystemDateAndTime failed")?;
            println!("Clock set");
        }
        Command::Reboot => {
            let message = camera.reboot().context("SystemReboot failed")?;
            println!("{}", message);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    args.validate()?;
    init_tracing(&args.log_level)?;

    info!(address = %args.address, command = ?args.command, "starting");
    run(args)
}
