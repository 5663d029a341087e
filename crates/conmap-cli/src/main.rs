mod search;
mod show;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use conmap_grid::RenderMode;

#[derive(Debug, Parser)]
#[command(name = "conmap")]
#[command(about = "Consumer store-density map toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Circles,
    Grid,
}

impl From<Mode> for RenderMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Circles => RenderMode::Circles,
            Mode::Grid => RenderMode::Grid,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the selected store categories and print the derived render plan
    Show {
        /// Include food and dining outlets
        #[arg(long)]
        food: bool,

        /// Include lifestyle stores
        #[arg(long)]
        lifestyle: bool,

        /// Render as one circle per store or as aggregated density cells
        #[arg(long, value_enum, default_value_t = Mode::Circles)]
        mode: Mode,

        // Viewport bounds in degrees; defaults frame Mumbai at city zoom.
        #[arg(long, default_value_t = 19.121)]
        north: f64,
        #[arg(long, default_value_t = 19.031)]
        south: f64,
        #[arg(long, default_value_t = 72.968)]
        east: f64,
        #[arg(long, default_value_t = 72.787)]
        west: f64,
    },
    /// Search the city lookup table (case-insensitive, top 5 matches)
    Search { query: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = conmap_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Commands::Show {
            food,
            lifestyle,
            mode,
            north,
            south,
            east,
            west,
        } => {
            let viewport = conmap_core::GeoBounds {
                north,
                south,
                east,
                west,
            };
            show::run(&config, food, lifestyle, mode.into(), viewport).await
        }
        Commands::Search { query } => search::run(&config, &query),
    }
}
