//! build_report - Print a build's stats, resistances and skill damage

mod report;

use anyhow::{Context, Result};
use build_core::config::{
    default_build_config, default_skill_tags, load_build_config, load_skill_tags,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "build_report", version, about = "Damage and survivability report for a character build")]
struct Args {
    /// Build TOML file (defaults to the shipped void smite build)
    #[arg(long)]
    build: Option<PathBuf>,

    /// Skill tags TOML file (defaults to the shipped skills)
    #[arg(long)]
    skills: Option<PathBuf>,

    /// Skill to report damage for
    #[arg(long, default_value = "smite")]
    skill: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also report block and armour
    #[arg(long)]
    additional: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.build {
        Some(path) => load_build_config(path)
            .with_context(|| format!("loading build from {}", path.display()))?,
        None => default_build_config().context("loading default build")?,
    };
    let skills = match &args.skills {
        Some(path) => load_skill_tags(path)
            .with_context(|| format!("loading skills from {}", path.display()))?,
        None => default_skill_tags().context("loading default skills")?,
    };

    let build = config.to_build()?;
    let damage = build.damage_report(&args.skill, &skills)?;
    tracing::info!(skill = %args.skill, final_damage = damage.final_damage, "damage calculated");

    let output = match args.format {
        OutputFormat::Text => report::render_text(&build, &damage, args.additional),
        OutputFormat::Json => report::render_json(&build, &damage, args.additional)?,
    };
    println!("{}", output);

    Ok(())
}
