use std::fs;
use std::path::PathBuf;

use anyhow::{bail, ensure, Context, Result};
use clap::{Parser, ValueEnum};
use storyboard::config::AppConfig;
use storyboard::{DurationBudget, SceneInfo, Storyboard, StoryboardPlanner};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Storyboard - story-to-scene planner
///
/// Splits a story description into scenes and gives each scene a share of the
/// total running time.
#[derive(Parser, Debug)]
#[command(name = "storyboard")]
#[command(version)]
#[command(about = "Plan storyboard scenes and durations from a story description", long_about = None)]
struct Args {
    /// Story description text
    #[arg(short, long, value_name = "TEXT", conflicts_with = "file")]
    text: Option<String>,

    /// Path to a file containing the story description
    #[arg(short, long, value_name = "PATH", conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Total storyboard duration in minutes
    #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
    minutes: f64,

    /// JSON planner configuration (defaults to $STORYBOARD_CONFIG, then built-ins)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Identifier the scenes are stored under
    #[arg(long, default_value = "story")]
    story_id: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Log planning details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

impl Args {
    /// Validate CLI arguments
    fn validate(&self) -> Result<()> {
        if self.text.is_none() && self.file.is_none() {
            bail!("Provide a story via --text or --file");
        }
        if let Some(path) = &self.file {
            ensure!(path.is_file(), "Story path is not a file: {:?}", path);
        }
        ensure!(
            !self.story_id.trim().is_empty(),
            "Story id must not be empty"
        );
        Ok(())
    }

    fn story(&self) -> Result<String> {
        match (&self.text, &self.file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read story file {:?}", path)),
            (None, None) => bail!("No story source provided"), // Should not happen due to validation
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    args.validate()
        .context("Failed to validate command-line arguments")?;

    let app_config = AppConfig::from_override(args.config.clone())
        .context("Failed to load planner configuration")?;
    if let Some(source) = &app_config.source {
        info!(path = %source.display(), "using planner config");
    }

    let story = args.story()?;
    let budget = DurationBudget::from_minutes(args.minutes)?;
    info!(
        characters = story.chars().count(),
        total_seconds = budget.seconds(),
        "planning storyboard"
    );

    let planner = StoryboardPlanner::new(app_config.planner);
    info!(
        scene_char_limit = planner.config().segmenter.scene_char_limit,
        min_scene_seconds = planner.config().allocator.min_scene_seconds,
        "planner ready"
    );
    let mut board = Storyboard::new();
    board.plan_story(&planner, &args.story_id, &story, budget);

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&board)?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            let scenes = board.scenes(&args.story_id);
            print!("{}", render_text(&args.story_id, scenes));
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("storyboard=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn render_text(story_id: &str, scenes: &[SceneInfo]) -> String {
    let total: u32 = scenes.iter().map(|scene| scene.duration_in_seconds).sum();
    let mut out = format!("{} - {} scenes, {}s\n", story_id, scenes.len(), total);
    for (idx, scene) in scenes.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. [{:>4}s] {}\n",
            idx + 1,
            scene.duration_in_seconds,
            scene.description
        ));
    }
    out
}
