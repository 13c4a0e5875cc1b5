use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use snsdesk::core::config::{self, ResolvedConfig, SnsDeskConfig};
use std::fs::File;

#[derive(Parser)]
#[command(name = "snsdesk", about = "Terminal console for a notification topic service")]
struct Args {
    /// Base URL of the notification service (overrides config and env)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Log file path
    #[arg(long, default_value = "snsdesk.log")]
    log_file: String,
}

/// Level used until the config file has been read.
const BOOTSTRAP_LEVEL: LevelFilter = LevelFilter::Debug;

/// Initialize file logger - writes to `path`, Trace-capable so the configured
/// level can be applied later with `log::set_max_level`.
fn init_logging(path: &str) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }
    log::set_max_level(BOOTSTRAP_LEVEL);
}

/// Loads and resolves settings, then narrows logging to the configured level.
fn load_settings(cli_base_url: Option<&str>) -> ResolvedConfig {
    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        SnsDeskConfig::default()
    });
    apply_settings(config::resolve(&file_config, cli_base_url))
}

fn apply_settings(resolved: ResolvedConfig) -> ResolvedConfig {
    log::set_max_level(resolved.log_level);
    resolved
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    init_logging(&args.log_file);
    let resolved = load_settings(args.base_url.as_deref());

    log::info!("snsdesk starting up against {}", resolved.base_url);

    snsdesk::tui::run(resolved)
}
