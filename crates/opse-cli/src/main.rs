mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use opse_core::{Profile, ToolRegistry};
use opse_facebook::FacebookTool;

#[derive(Debug, Parser)]
#[command(name = "opse-cli")]
#[command(about = "Discover online accounts for a person")]
struct Cli {
    /// First name of the person to look up.
    #[arg(long)]
    firstname: String,

    /// Last name of the person to look up.
    #[arg(long)]
    lastname: String,

    /// Only keep accounts whose name exactly matches (overrides OPSE_STRICT).
    #[arg(long)]
    strict: bool,

    /// Print discovered profiles as a JSON array.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = opse_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if cli.strict {
        config.strict = true;
    }
    tracing::debug!(env = %config.env, strict = config.strict, "configuration loaded");

    let mut registry = ToolRegistry::new();
    registry.register(Box::new(FacebookTool::from_config(&config)?));

    let default_profile = Profile::new(cli.firstname, cli.lastname);
    let profiles = registry.run(&default_profile).await;

    let rendered = if cli.json {
        output::render_json(&profiles)?
    } else {
        output::render_text(&profiles)
    };
    println!("{rendered}");

    Ok(())
}
