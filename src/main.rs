//! # trainadd
//!
//! Writes the addition corpora for the digit-count generalization experiments and inspects the
//! causal training tensors built from them.
//!
//! ```text
//! trainadd all                         # both profiles + drill under ./dataset
//! trainadd interpolation --seed 7
//! trainadd generate --digit1 4 --digit2 2 --rate1 0.01 --rate2 0.1
//! trainadd drill --limit 10 --marked
//! trainadd inspect dataset/足し算ドリル.txt --count 3
//! ```
//!
//! Settings come from `TRAINADD_*` environment variables; flags override them.

use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use trainadd_data::config::{from_env, Config};
use trainadd_data::data::{load_from_path, CurriculumDataset};
use trainadd_data::dataset::{DatasetWriter, DrillStyle, Profile};
use trainadd_data::problem::AdditionSpec;
use trainadd_data::store::FsStore;
use trainadd_data::tokenizer::Tokenizer;

#[derive(Parser)]
#[command(name = "trainadd", about = "Generate addition corpora for causal LM training")]
struct Args {
    /// RNG seed (overrides TRAINADD_SEED)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output root (overrides TRAINADD_OUTPUT_DIR)
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Train on 1/2/4/6-digit operands, test on 3/5
    Interpolation,
    /// Train on 1-4 digit operands, test on 5
    Extrapolation,
    /// Both profiles and the drill corpus
    All,
    /// Every i+j for i, j below the limit
    Drill {
        /// Operands range over 0..limit (overrides TRAINADD_DRILL_LIMIT)
        #[arg(short, long)]
        limit: Option<u64>,
        /// Wrap answers in markers so the drill can be expanded into a curriculum
        #[arg(long, default_value = "false")]
        marked: bool,
    },
    /// One corpus file for a single digit pair
    Generate {
        #[arg(long)]
        digit1: u32,
        #[arg(long)]
        digit2: u32,
        #[arg(long)]
        rate1: f64,
        #[arg(long)]
        rate2: f64,
        /// Target directory (defaults to the output root)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Print curriculum tensors for a corpus as JSON lines
    Inspect {
        corpus: PathBuf,
        /// Tensor width (overrides TRAINADD_SEQ_LEN)
        #[arg(long)]
        seq_len: Option<usize>,
        /// First item to print
        #[arg(long, default_value = "0")]
        index: usize,
        /// Number of items to print
        #[arg(long, default_value = "1")]
        count: usize,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut cfg = from_env().context("reading TRAINADD_* environment")?;
    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }
    if let Some(dir) = args.output_dir {
        cfg.output_dir = dir;
    }
    if let Command::Drill {
        limit: Some(limit), ..
    } = args.command
    {
        cfg.drill_limit = limit;
    }
    if let Command::Inspect {
        seq_len: Some(seq_len),
        ..
    } = args.command
    {
        cfg.seq_len = seq_len;
    }
    cfg.validate()?;

    match args.command {
        Command::Interpolation => write_profiles(&cfg, &[Profile::Interpolation]),
        Command::Extrapolation => write_profiles(&cfg, &[Profile::Extrapolation]),
        Command::All => {
            write_profiles(&cfg, &Profile::ALL)?;
            write_drill(&cfg, DrillStyle::Bare)
        }
        Command::Drill { marked, .. } => {
            let style = if marked {
                DrillStyle::Marked
            } else {
                DrillStyle::Bare
            };
            write_drill(&cfg, style)
        }
        Command::Generate {
            digit1,
            digit2,
            rate1,
            rate2,
            dir,
        } => {
            let spec = AdditionSpec::new(digit1, digit2, rate1, rate2);
            let dir = dir.unwrap_or_else(|| cfg.output_dir.clone());
            let mut rng = StdRng::seed_from_u64(cfg.seed);
            let file = cfg
                .generator()
                .write_corpus(&mut FsStore::new(), &mut rng, &dir, &spec)
                .with_context(|| format!("generating {spec}"))?;
            println!("{} ({} lines)", file.path.display(), file.lines);
            Ok(())
        }
        Command::Inspect {
            corpus,
            index,
            count,
            ..
        } => inspect(&cfg, &corpus, index, count),
    }
}

fn write_profiles(cfg: &Config, profiles: &[Profile]) -> anyhow::Result<()> {
    let mut store = FsStore::new();
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut writer = DatasetWriter::new(&mut store, cfg.generator());
    for &profile in profiles {
        let report = writer
            .write_profile(&mut rng, &cfg.output_dir, profile)
            .with_context(|| format!("writing {profile} profile"))?;
        println!(
            "{profile}: {} files, {} lines under {}",
            report.train.len() + report.test.len(),
            report.total_lines(),
            report.dir.display()
        );
    }
    Ok(())
}

fn write_drill(cfg: &Config, style: DrillStyle) -> anyhow::Result<()> {
    let mut store = FsStore::new();
    let file = DatasetWriter::new(&mut store, cfg.generator())
        .write_drill(&cfg.output_dir, cfg.drill_limit, style)
        .context("writing drill corpus")?;
    println!("{} ({} lines)", file.path.display(), file.lines);
    Ok(())
}

/// Items `index..index + count`, clipped to `len`.
fn item_range(index: usize, count: usize, len: usize) -> Range<usize> {
    index..index.saturating_add(count).min(len)
}

fn inspect(cfg: &Config, corpus: &Path, index: usize, count: usize) -> anyhow::Result<()> {
    let data = load_from_path(corpus).with_context(|| format!("loading {}", corpus.display()))?;
    let ds = CurriculumDataset::new(&data, cfg.markers(), cfg.pad, cfg.seq_len)?;
    info!(
        "{} steps, vocab {:?}",
        ds.len(),
        ds.tokenizer().vocab().symbols()
    );
    for i in item_range(index, count, ds.len()) {
        let item = ds.get(i)?;
        let text = ds.tokenizer().decode(&item.token_ids)?;
        let line = serde_json::json!({
            "index": i,
            "step": ds.step(i),
            "inputs": text,
            "tensor": item,
        });
        println!("{line}");
    }
    Ok(())
}
