mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "titlefit")]
#[command(about = "Channel-aware video title suggestions")]
struct Cli {
    /// Profile snapshot to read or write (overrides `TITLEFIT_PROFILES_PATH`)
    #[arg(long, global = true)]
    profiles: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build channel profiles from the historical dataset and save a snapshot
    Build {
        /// Historical CSV (overrides `TITLEFIT_DATASET_PATH`)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Snapshot destination (defaults to the profiles path)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print one channel's profile as JSON
    Inspect {
        #[arg(long)]
        channel: String,
    },
    /// Print the generator prompt for a channel and video summary
    Prompt {
        #[arg(long)]
        channel: String,
        #[arg(long)]
        summary: String,
        /// Candidates to ask for (defaults to `TITLEFIT_MAX_CANDIDATES`)
        #[arg(long)]
        num: Option<usize>,
    },
    /// Rank a saved generator response and print the best titles as JSON
    Rank {
        #[arg(long)]
        channel: String,
        /// File holding the raw generator output, or `-` for stdin
        #[arg(long)]
        response: PathBuf,
        #[arg(long, default_value = "")]
        summary: String,
        /// Titles to return (defaults to `TITLEFIT_DEFAULT_NUM_TITLES`)
        #[arg(long)]
        num: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = titlefit_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let profiles_path = cli
        .profiles
        .unwrap_or_else(|| config.profiles_path.clone());

    match cli.command {
        Commands::Build { input, output } => {
            let input = input.unwrap_or_else(|| config.dataset_path.clone());
            commands::run_build(&input, &output.unwrap_or(profiles_path))
        }
        Commands::Inspect { channel } => commands::run_inspect(&profiles_path, &channel),
        Commands::Prompt {
            channel,
            summary,
            num,
        } => commands::run_prompt(
            &profiles_path,
            &channel,
            &summary,
            num.unwrap_or(config.max_candidates),
        ),
        Commands::Rank {
            channel,
            response,
            summary,
            num,
        } => commands::run_rank(
            &config,
            &profiles_path,
            &commands::RankArgs {
                channel,
                response,
                summary,
                num: num.unwrap_or(config.default_num_titles),
            },
        ),
    }
}
