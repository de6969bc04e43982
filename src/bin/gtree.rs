//! Command-line front end: validate or render an analysis document.
//!
//! ```text
//! gtree validate analysis.json --strict
//! gtree render analysis.json --format dot --output tree.dot
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use gametree::analysis::{AnalysisReport, GameTheoryAnalysis};
use gametree::model::collapse_forced_moves;
use gametree::render::{GraphAttributes, RenderConfig};
use gametree::validation::ValidationConfig;

#[derive(Parser)]
#[command(name = "gtree", about = "Validate and render extensive-form game trees")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report structural violations of the document's game tree.
    Validate {
        /// Analysis JSON document.
        file: PathBuf,
        /// Allowed deviation of chance probabilities from 1.0.
        #[arg(long, default_value_t = 1e-3)]
        tolerance: f64,
        /// Exit with an error if any violation is found.
        #[arg(long)]
        strict: bool,
    },
    /// Render the document's game tree.
    Render {
        /// Analysis JSON document.
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Dot)]
        format: Format,
        /// Collapse single-action decision nodes before rendering.
        #[arg(long)]
        repair: bool,
        /// Layout direction passed to Graphviz.
        #[arg(long, value_enum, default_value_t = RankDir::Tb)]
        rankdir: RankDir,
        /// Write to this file instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Dot,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum RankDir {
    #[value(name = "TB")]
    Tb,
    #[value(name = "LR")]
    Lr,
    #[value(name = "BT")]
    Bt,
    #[value(name = "RL")]
    Rl,
}

impl RankDir {
    fn as_str(self) -> &'static str {
        match self {
            RankDir::Tb => "TB",
            RankDir::Lr => "LR",
            RankDir::Bt => "BT",
            RankDir::Rl => "RL",
        }
    }
}

fn load(file: &Path) -> Result<GameTheoryAnalysis> {
    let json = std::fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let analysis =
        GameTheoryAnalysis::from_json(&json).with_context(|| format!("parsing {}", file.display()))?;
    log::info!("loaded '{}' ({} players)", analysis.title, analysis.players.len());
    Ok(analysis)
}

fn validate(file: &Path, tolerance: f64, strict: bool) -> Result<()> {
    let analysis = load(file)?;
    let config = ValidationConfig::default().with_tolerance(tolerance);
    let report = AnalysisReport::build_with(&analysis, config, &RenderConfig::default())?;

    for violation in &report.violations {
        println!("{}", violation);
    }
    if report.is_well_formed() {
        log::info!("game tree is well-formed");
    } else if strict {
        bail!("{} structural violation(s)", report.violations.len());
    }
    Ok(())
}

fn render(file: &Path, format: Format, repair: bool, rankdir: RankDir, output: Option<PathBuf>) -> Result<()> {
    let analysis = load(file)?;
    let roster = analysis.roster();
    let mut tree = analysis.tree()?;
    if repair {
        let before = tree.len();
        tree = collapse_forced_moves(&tree, &roster)?;
        log::info!("collapsed forced moves: {} -> {} nodes", before, tree.len());
    }

    let report = AnalysisReport::from_tree(&tree, &roster, ValidationConfig::default(), &RenderConfig::default())?;
    let text = match format {
        Format::Dot => report.graph.to_dot(&GraphAttributes::default().with_rankdir(rankdir.as_str())),
        Format::Json => serde_json::to_string_pretty(&report.graph)?,
    };

    match output {
        Some(path) => {
            std::fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Validate {
            file,
            tolerance,
            strict,
        } => validate(&file, tolerance, strict),
        Command::Render {
            file,
            format,
            repair,
            rankdir,
            output,
        } => render(&file, format, repair, rankdir, output),
    }
}
