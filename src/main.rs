//! CLI entry point for content-loader

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use content_loader::Site;

#[derive(Parser)]
#[command(name = "content-loader")]
#[command(version)]
#[command(about = "Populates a static page from markdown front-matter content", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Load content and write the rendered page
    #[command(alias = "r")]
    Render {
        /// Output file (defaults to `output` from _config.yml)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Start a local server that renders the page on every request
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Enable static mode (no file watching)
        #[arg(long)]
        r#static: bool,
    },

    /// List loaded content
    List {
        /// Print the whole content store as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "content_loader=debug,info"
    } else {
        "content_loader=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            content_loader::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::Render { output } => {
            let site = Site::new(&base_dir)?;
            let output = match output {
                Some(path) => {
                    let path = if path.is_absolute() {
                        path
                    } else {
                        base_dir.join(path)
                    };
                    content_loader::commands::render::run_to(&site, &path).await?;
                    path
                }
                None => site.render().await?,
            };
            println!("Rendered {}", output.display());
        }

        Commands::Server {
            port,
            ip,
            open,
            r#static,
        } => {
            let site = Site::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            content_loader::server::start(&site, &ip, port, !r#static, open).await?;
        }

        Commands::List { json } => {
            let site = Site::new(&base_dir)?;
            content_loader::commands::list::run(&site, json).await?;
        }

        Commands::Version => {
            println!("content-loader version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
