//! Command handlers for the CLI.
//!
//! Each handler reads configuration already resolved by `main`, logs through
//! `tracing` on stderr, and writes its result to stdout.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use titlefit_core::AppConfig;
use titlefit_profiler::{build_profiles_from_csv, save_snapshot, ProfileStore};
use titlefit_ranker::{
    compose_prompt, suggest_titles, GeneratorError, RankRequest, SuggestOptions,
};

/// Arguments of the `rank` sub-command after defaults are applied.
#[derive(Debug)]
pub(crate) struct RankArgs {
    pub channel: String,
    pub response: PathBuf,
    pub summary: String,
    pub num: usize,
}

pub(crate) fn run_build(input: &Path, output: &Path) -> anyhow::Result<()> {
    let profiles = build_profiles_from_csv(input)
        .with_context(|| format!("failed to build profiles from {}", input.display()))?;
    save_snapshot(&profiles, output)?;

    tracing::info!(
        channels = profiles.len(),
        output = %output.display(),
        "profile snapshot written"
    );
    println!(
        "built {} channel profiles -> {}",
        profiles.len(),
        output.display()
    );
    Ok(())
}

pub(crate) fn run_inspect(profiles_path: &Path, channel: &str) -> anyhow::Result<()> {
    let store = open_store(profiles_path)?;
    let profile = store
        .profile(channel)
        .with_context(|| format!("no profile for channel {channel}"))?;
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

pub(crate) fn run_prompt(
    profiles_path: &Path,
    channel: &str,
    summary: &str,
    num_candidates: usize,
) -> anyhow::Result<()> {
    let store = open_store(profiles_path)?;
    let profile = store
        .profile(channel)
        .with_context(|| format!("no profile for channel {channel}"))?;
    println!(
        "{}",
        compose_prompt(channel, summary, &profile, num_candidates)
    );
    Ok(())
}

pub(crate) fn run_rank(
    config: &AppConfig,
    profiles_path: &Path,
    args: &RankArgs,
) -> anyhow::Result<()> {
    let store = open_store(profiles_path)?;
    let raw = read_response(&args.response)?;

    // The generator ran out of band; replay its saved output.
    let replay = |_: &str| -> Result<String, GeneratorError> { Ok(raw.clone()) };
    let request = RankRequest {
        channel_id: args.channel.clone(),
        summary: args.summary.clone(),
        requested_count: args.num,
        candidates: Vec::new(),
    };
    let options = SuggestOptions {
        weights: config.weights,
        max_candidates: config.max_candidates,
    };

    let suggestions = suggest_titles(&store.current(), &replay, &request, &options)?;
    println!("{}", serde_json::to_string_pretty(&suggestions)?);
    Ok(())
}

fn open_store(profiles_path: &Path) -> anyhow::Result<ProfileStore> {
    ProfileStore::open(profiles_path).with_context(|| {
        format!(
            "failed to load profiles from {}; run `titlefit build` first",
            profiles_path.display()
        )
    })
}

fn read_response(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read generator response from stdin")?;
        return Ok(raw);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read generator response {}", path.display()))
}
