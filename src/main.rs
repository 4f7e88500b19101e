use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use diagram_chat::agent::OpenAiClient;
use diagram_chat::web::{run_server, ServerConfig, WebAppState};
use diagram_chat::{util, Config};

/// Co-edit PlantUML diagrams with an AI chat assistant in the browser.
#[derive(Debug, Parser)]
#[command(name = "diagram-chat", version, about)]
struct Cli {
    /// Address to bind the web server to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long, short)]
    port: Option<u16>,

    /// Directory for config and logs (default: ~/.diagram-chat)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Chat model to use
    #[arg(long)]
    model: Option<String>,

    /// Base URL of the OpenAI-compatible completion API
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// PlantUML image endpoint
    #[arg(long, value_name = "URL")]
    render_url: Option<String>,

    /// Allow cross-origin requests from any origin
    #[arg(long)]
    cors_permissive: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    util::init_data_dir(cli.data_dir.clone());

    // Initialize logging to file (~/.diagram-chat/logs/diagram-chat.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "diagram_chat=info,tower_http=info,warn".into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let mut config = Config::load();
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(model) = cli.model {
        config.llm.model = model;
    }
    if let Some(base_url) = cli.base_url {
        config.llm.base_url = base_url;
    }
    if let Some(render_url) = cli.render_url {
        config.render.base_url = render_url;
    }

    let llm = OpenAiClient::from_env(config.llm.base_url.clone(), &config.llm.api_key_env);
    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        cors_permissive: cli.cors_permissive,
    };
    tracing::info!(
        model = %config.llm.model,
        llm = %config.llm.base_url,
        render = %config.render.base_url,
        "Configuration loaded"
    );

    println!(
        "diagram-chat listening on http://{}:{}",
        server_config.host, server_config.port
    );
    let state = WebAppState::new(config, Arc::new(llm));
    run_server(state, server_config).await
}
