use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ml_app::ItemAction;
use ml_core::catalog::CatalogEntry;
use ml_core::ids::ModelId;
use ml_core::{CategoryFacet, LifecycleFacet};
use modelist::bootstrap::tracing::init_tracing_subscriber;
use modelist::{load_config, spawn_lifecycle_forwarder, wire_model_list, TracingView};

#[derive(Parser)]
#[command(name = "modelist")]
#[command(about = "Browse and filter the model catalog", long_about = None)]
struct Cli {
    /// Config file (defaults to modelist.toml in the app data directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory for downloaded models
    #[arg(long, global = true)]
    downloads_dir: Option<PathBuf>,

    /// Also write logs to this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current view of the catalog
    List {
        /// Case-insensitive text query
        #[arg(short, long)]
        query: Option<String>,
        /// all | downloading | downloaded | not_downloaded
        #[arg(short, long)]
        lifecycle: Option<LifecycleFacet>,
        /// all | multimodal | text_only
        #[arg(short = 'm', long)]
        category: Option<CategoryFacet>,
    },
    /// Act on a catalog entry as if it were tapped
    Open {
        /// Model id
        id: String,
    },
    /// Restart every unfinished download
    Resume,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing_subscriber(cli.log_dir.as_deref())?;

    let config = load_config(cli.config).await?;
    let downloads_dir = match cli.downloads_dir {
        Some(dir) => dir,
        None => ml_infra::fs::downloads_dir().context("Failed to resolve downloads directory")?,
    };

    let view = Arc::new(TracingView::new());
    let runtime = wire_model_list(&config, downloads_dir, view.clone());
    let forwarder = spawn_lifecycle_forwarder(&runtime);
    let presenter = runtime.presenter.clone();

    presenter.load().await?;

    match cli.command {
        Commands::List {
            query,
            lifecycle,
            category,
        } => {
            let mut state = presenter.filter_state();
            if let Some(facet) = lifecycle {
                state.lifecycle = facet;
            }
            if let Some(facet) = category {
                state.category = facet;
            }
            if let Some(query) = query {
                state.text_query = query;
            }
            presenter.apply_filter(state.clone());

            println!(
                "lifecycle: {}  category: {}  query: {:?}",
                state.lifecycle, state.category, state.text_query
            );
            for entry in presenter.current_view() {
                print_entry(&entry);
            }
        }
        Commands::Open { id } => {
            match presenter.on_item_clicked(&ModelId::new(id)).await? {
                ItemAction::RunLocal { .. } | ItemAction::RunDownloaded { .. } => {
                    for (path, id) in view.take_run_requests() {
                        println!("run {id} from {}", path.display());
                    }
                }
                ItemAction::StartedDownload => println!("download started"),
                ItemAction::AlreadyDownloading => println!("already downloading"),
            }
        }
        Commands::Resume => {
            let pending = presenter.unfinished_download_count();
            let started = presenter.resume_all_downloads().await;
            println!("resumed {started} of {pending} unfinished downloads");
        }
    }

    drop(runtime);
    drop(presenter);
    forwarder.abort();
    Ok(())
}

fn print_entry(entry: &CatalogEntry) {
    let marker = if entry.is_category_flagged() { "M" } else { " " };
    let local = if entry.is_local() { "local" } else { "" };
    println!(
        "{marker} {:<40} {:<50} {local} [{}]",
        entry.display_name(),
        entry.id().as_str(),
        entry.derived_tags().join(", ")
    );
}
