mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, item::ItemSubcommand, list::ListSubcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sitodo",
    about = "Todo lists that tell you how far along you are",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .sitodo/)
    #[arg(long, global = true, env = "SITODO_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize sitodo in the current directory
    Init,

    /// Run the HTTP API server
    Serve {
        /// Port to listen on (default: server.port from config)
        #[arg(long)]
        port: Option<u16>,

        /// Open the landing page in a browser
        #[arg(long)]
        open: bool,
    },

    /// Create, show, and extend todo lists
    List {
        #[command(subcommand)]
        subcommand: ListSubcommand,
    },

    /// Change todo items
    Item {
        #[command(subcommand)]
        subcommand: ItemSubcommand,
    },

    /// Compute the motivation message for the given counts
    Message { total: usize, finished: usize },

    /// Show or validate the configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Serve { port, open } => cmd::serve::run(&root, port, open),
        Commands::List { subcommand } => cmd::list::run(&root, subcommand, cli.json),
        Commands::Item { subcommand } => cmd::item::run(&root, subcommand, cli.json),
        Commands::Message { total, finished } => {
            cmd::message::run(&root, total, finished, cli.json)
        }
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
