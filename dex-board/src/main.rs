use actix_web::{web, App, HttpServer};
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use dex_board::board::render_board;
use dex_board::handlers::default_handler;
use dex_board::routes::board;
use dex_board::utils::app_config::AppConfig;
use dex_screener::{BoostRecord, HttpJsonSource, ProfileRecord};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

// Default alocator change
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Server-rendered DexScreener token boosts and token profiles
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// YAML configuration file
    #[arg(short, long)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the boards over HTTP (default)
    Serve,
    /// Fetch one board once and print the page to stdout
    Render {
        #[arg(value_enum)]
        board: Board,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Board {
    Boosts,
    Profiles,
}

/// Initializes the logging, ensuring that the `RUST_LOG` environment
/// variable is always considered first.
/// Logs go to stderr so `render` output stays a clean document.
fn init_logging(default_filter: &str) -> Result<()> {
    tracing::subscriber::set_global_default(
        fmt::Subscriber::builder()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_from_default_env().or(EnvFilter::try_new(default_filter))?,
            )
            .finish(),
    )?;
    Ok(())
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    let config = AppConfig::load(args.config_path.as_deref())?;
    init_logging(&config.rust_log)?;

    let source = HttpJsonSource::new(config.request_timeout())?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config, source).await?,
        Command::Render { board: which } => {
            let source = Arc::new(source);
            let html = match which {
                Board::Boosts => {
                    render_board::<BoostRecord, _>(source, &config.api_base_url).await
                }
                Board::Profiles => {
                    render_board::<ProfileRecord, _>(source, &config.api_base_url).await
                }
            };
            println!("{}", html);
        }
    }

    Ok(())
}

async fn serve(config: AppConfig, source: HttpJsonSource) -> std::io::Result<()> {
    let bind_addr = (config.host.clone(), config.port);
    info!(
        host = %bind_addr.0,
        port = bind_addr.1,
        upstream = %config.api_base_url,
        "starting dex board"
    );

    let source = web::Data::new(source);
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(source.clone())
            .app_data(config.clone())
            .configure(board::config::<HttpJsonSource>)
            .configure(default_handler::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
