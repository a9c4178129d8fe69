mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use velour_client::BackendClient;
use velour_core::{BackendConfig, ColumnId, GridState, ModelName, SortDirection};

#[derive(Parser)]
#[command(name = "velour")]
#[command(about = "Velour - browse model evaluation settings", long_about = None)]
struct Cli {
    /// Backend base URL (overrides BACKEND_URL)
    #[arg(long, global = true)]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the evaluation settings of a model
    Settings {
        /// Model name
        model: String,

        /// Page to show, starting at 1
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Column to sort by (dataset_name, model_pred_task_type, ...)
        #[arg(short, long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Filter as FIELD=TEXT (case-insensitive substring)
        #[arg(short, long)]
        filter: Option<String>,

        /// Column to leave out; repeatable
        #[arg(long = "hide", value_name = "FIELD")]
        hide: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Show backend status
    Status,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

fn backend_config(flag: Option<String>) -> Result<BackendConfig> {
    let config = match flag {
        Some(url) => BackendConfig::new(url)?,
        None => BackendConfig::from_env()?,
    };
    Ok(config)
}

fn parse_column(field: &str) -> Result<ColumnId> {
    ColumnId::from_field(field).with_context(|| format!("Unknown column: {}", field))
}

fn grid_state(
    sort: Option<&str>,
    desc: bool,
    filter: Option<&str>,
    hide: &[String],
) -> Result<GridState> {
    let mut state = GridState::new();

    if let Some(field) = sort {
        let direction = if desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        state.set_sort(parse_column(field)?, direction)?;
    }

    if let Some(spec) = filter {
        let (field, text) = spec
            .split_once('=')
            .with_context(|| format!("Filter must be FIELD=TEXT, got {}", spec))?;
        state.set_filter(parse_column(field)?, text)?;
    }

    for field in hide {
        let column = parse_column(field)?;
        if !state.is_hidden(column) {
            state.toggle_hidden(column)?;
        }
    }

    Ok(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = backend_config(cli.backend_url)?;
    tracing::debug!(backend = %config.base_url(), "using backend");
    let client = BackendClient::from_config(&config);

    match cli.command {
        Commands::Settings {
            model,
            page,
            sort,
            desc,
            filter,
            hide,
            output,
        } => {
            cmd_settings(
                &client,
                &model,
                page,
                sort.as_deref(),
                desc,
                filter.as_deref(),
                &hide,
                output,
            )
            .await?
        }
        Commands::Status => cmd_status(&client).await,
    }

    Ok(())
}

async fn cmd_settings(
    client: &BackendClient,
    model: &str,
    page: usize,
    sort: Option<&str>,
    desc: bool,
    filter: Option<&str>,
    hide: &[String],
    output: OutputFormat,
) -> Result<()> {
    let name = ModelName::parse(model)?;
    let mut state = grid_state(sort, desc, filter, hide)?;

    let settings = client
        .evaluation_settings(&name)
        .await
        .with_context(|| format!("Failed to fetch evaluation settings for {}", name))?;

    let page_count = state.view(&settings).page_count;
    state.set_page(page.saturating_sub(1), page_count);
    let grid = state.view(&settings);

    match output {
        OutputFormat::Json => println!("{}", render::json(&grid, &settings)?),
        OutputFormat::Csv => print!("{}", render::csv(&grid)),
        OutputFormat::Table => {
            println!();
            println!("Evaluation settings for {}:", name);
            print!("{}", render::table(&grid));
            println!();
        }
    }

    Ok(())
}

async fn cmd_status(client: &BackendClient) {
    println!("System Status:");
    println!("{:-<40}", "");
    println!("  Backend URL: {}", client.base_url());

    match client.health().await {
        Ok(()) => println!("  Backend: connected"),
        Err(e) => println!("  Backend: disconnected ({})", e),
    }
}
