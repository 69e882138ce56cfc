use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use banner_compositor::{
    composition::Composer,
    config::Config,
    web::{self, AppState},
};

#[derive(Parser)]
#[command(
    name = "banner-compositor",
    version,
    about = "Composite a logo, a caption and a photo into one banner image",
    long_about = "Banner-Compositor stacks a header band (logo plus caption) above a photo and renders the result as a 1200px wide PNG, either through a small web form or once from the command line."
)]
struct Cli {
    /// Configuration file (optional)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the upload form
    Serve {
        /// Address to bind to (overrides the configuration)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides the configuration)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Compose a single banner and write it to disk
    Compose {
        /// Logo image
        #[arg(short, long)]
        logo: PathBuf,

        /// Main photo
        #[arg(short, long)]
        main_image: PathBuf,

        /// Caption; use a literal newline for multiple lines
        #[arg(short, long)]
        text: String,

        /// Caption font size in pixels (defaults to the configured size)
        #[arg(short, long)]
        font_size: Option<u32>,

        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(log_level.into())
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    info!("Starting Banner-Compositor v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = match &cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(config_path)?
        }
        None => {
            info!("Using default configuration");
            Config::default()
        }
    };

    match cli.command {
        Command::Serve { host, port } => serve(config, host, port).await,
        Command::Compose { logo, main_image, text, font_size, output } => {
            let font_size = font_size.unwrap_or(config.compose.font_size);
            compose_once(&config, &logo, &main_image, &text, font_size, &output).await
        }
    }
}

async fn serve(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config.validate()?;

    info!("Font: {:?}", config.font.path);
    info!("Default font size: {}", config.compose.font_size);

    let app = web::router(AppState::new(&config), config.server.max_upload_bytes);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn compose_once(
    config: &Config,
    logo: &Path,
    main_image: &Path,
    text: &str,
    font_size: u32,
    output: &Path,
) -> Result<()> {
    config.validate()?;

    info!("Logo: {:?}", logo);
    info!("Main image: {:?}", main_image);
    info!("Output: {:?}", output);

    let logo = tokio::fs::read(logo)
        .await
        .with_context(|| format!("Failed to read logo {:?}", logo))?;
    let main_image = tokio::fs::read(main_image)
        .await
        .with_context(|| format!("Failed to read main image {:?}", main_image))?;

    let composer = Composer::new(config.font.clone());
    let text = text.to_string();
    let png = tokio::task::spawn_blocking(move || composer.compose(&logo, &main_image, &text, font_size))
        .await??;

    tokio::fs::write(output, &png).await?;

    info!("Banner saved to: {:?}", output);
    Ok(())
}
