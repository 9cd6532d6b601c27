use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use linkdesk::cli::{Cli, Commands};
use linkdesk::client::HttpLinkApi;
use linkdesk::config::{get_config, init_config, update_config};
use linkdesk::interfaces::cli::run_cli_command;
use linkdesk::system::{ConsoleSink, init_logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_config(cli.config.as_deref());
    if let Some(base_url) = cli.base_url {
        update_config(|config| config.api.base_url = base_url.clone());
        get_config()
            .validate()
            .context("Invalid --base-url")?;
    }
    let config = get_config();

    let command = match cli.command {
        Some(command) => command,
        #[cfg(feature = "tui")]
        None => Commands::Tui,
        #[cfg(not(feature = "tui"))]
        None => {
            <Cli as clap::CommandFactory>::command().print_help()?;
            return Ok(());
        }
    };

    // 终端被 TUI 占用时控制台日志只能丢弃
    #[cfg(feature = "tui")]
    let sink = if command == Commands::Tui {
        ConsoleSink::Discard
    } else {
        ConsoleSink::Stderr
    };
    #[cfg(not(feature = "tui"))]
    let sink = ConsoleSink::Stderr;

    let _guard =
        init_logging(&config.logging, sink).context("Failed to initialize logging")?;
    debug!("API base URL: {}", config.api.base_url);

    let api = HttpLinkApi::new(&config.api).context("Failed to create API client")?;

    #[cfg(feature = "tui")]
    if command == Commands::Tui {
        color_eyre::install().map_err(|e| anyhow::anyhow!("{}", e))?;
        linkdesk::interfaces::tui::run_tui(std::sync::Arc::new(api))
            .await
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        return Ok(());
    }

    if let Err(e) = run_cli_command(command, &api).await {
        eprintln!("{}", e.format_colored());
        process::exit(1);
    }
    Ok(())
}
