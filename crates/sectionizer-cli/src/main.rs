use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sectionizer_config::Config;
use sectionizer_engine::{DocNode, StructureOptions, flatten, segment, structure};
use serde::Serialize;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// Main group plus items
    Structure,
    /// Flattened element sequence
    Sequence,
    /// Segmentation mode and raw group boundaries
    Groups,
}

#[derive(Debug, Parser)]
#[command(name = "sectionizer")]
#[command(about = "Split a rich-text document tree into a main section and repeated items")]
struct Args {
    /// JSON document to read; `-` or absent reads stdin
    input: Option<PathBuf>,

    /// Config file to use instead of ~/.config/sectionizer/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Parse code block text as structured data
    #[arg(long)]
    parse_code_blocks: bool,

    /// Nesting depth for lists and blockquotes before content is truncated
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// What to print
    #[arg(long, value_enum, default_value_t = Emit::Structure)]
    emit: Emit,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,
}

impl Args {
    /// Command-line flags take precedence over the config file.
    fn options(&self, config: &Config) -> StructureOptions {
        let mut options = config.structure.clone();
        if self.parse_code_blocks {
            options.parse_code_blocks = true;
        }
        if let Some(max_depth) = self.max_depth {
            options.max_depth = max_depth;
        }
        options
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.to_path_buf());
            let config = Config::load_from_path(&path)?;
            if config.is_none() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            config
        }
        None => Config::load()?,
    };
    Ok(loaded.unwrap_or_default())
}

fn init_logging(config: &Config) {
    let default_filter = config.log_level.as_deref().unwrap_or("warn");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read document from stdin")?;
            Ok(buffer)
        }
    }
}

fn to_json<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}

fn render(
    document: &DocNode,
    options: &StructureOptions,
    emit: Emit,
    compact: bool,
) -> Result<String> {
    match emit {
        Emit::Structure => to_json(&structure(document, options), compact),
        Emit::Sequence => to_json(&flatten(document, options), compact),
        Emit::Groups => {
            let sequence = flatten(document, options);
            to_json(&segment(&sequence), compact)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    init_logging(&config);

    let options = args.options(&config);
    log::debug!("structuring with {options:?}");

    let source = read_input(args.input.as_deref())?;
    let document = DocNode::from_json(&source).context("Invalid document JSON")?;

    println!("{}", render(&document, &options, args.emit, args.compact)?);
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
