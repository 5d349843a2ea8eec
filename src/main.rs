//! Scoreboard - Command Line Entry Point
//!
//! Reads a contest snapshot, computes the scoreboard and prints it as JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scoreboard::{Scoreboard, config::CONFIG, models::ContestSnapshot};

#[derive(Parser, Debug)]
#[command(name = "scoreboard")]
#[command(about = "Compute a ranked contest scoreboard from a JSON snapshot")]
struct Args {
    /// Contest snapshot (teams, categories, problems, score cache) as JSON
    snapshot: PathBuf,

    /// Use the restricted (jury) figures instead of the public ones
    #[arg(long)]
    jury: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.logging.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Loading contest snapshot from {}", args.snapshot.display());
    let snapshot = ContestSnapshot::from_path(&args.snapshot)
        .with_context(|| format!("Failed to load snapshot {}", args.snapshot.display()))?;

    let scoreboard = Scoreboard::from_snapshot(snapshot, CONFIG.scoring.options(args.jury))?;
    tracing::info!(
        "Ranked {} teams across {} categories",
        scoreboard.scores().len(),
        scoreboard.categories().len()
    );

    println!("{}", serde_json::to_string_pretty(&scoreboard.report())?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_snapshot_and_jury() {
        let args = Args::try_parse_from(["scoreboard", "contest.json", "--jury"]).unwrap();
        assert_eq!(args.snapshot, PathBuf::from("contest.json"));
        assert!(args.jury);

        let args = Args::try_parse_from(["scoreboard", "contest.json"]).unwrap();
        assert!(!args.jury);
    }

    #[test]
    fn test_help_is_not_a_snapshot_path() {
        let err = Args::try_parse_from(["scoreboard", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);

        assert!(Args::try_parse_from(["scoreboard"]).is_err());
        assert!(Args::try_parse_from(["scoreboard", "a.json", "b.json"]).is_err());
    }
}
