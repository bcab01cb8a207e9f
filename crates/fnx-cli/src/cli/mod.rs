//! CLI for the fnx filename extraction utility.

use anyhow::{bail, Context, Result};
use clap::Parser;
use fnx_core::extract::extract_filename;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Top-level CLI for the fnx filename extraction utility.
#[derive(Debug, Parser)]
#[command(name = "fnx")]
#[command(about = "fnx: extract display filenames from source URLs and paths", long_about = None)]
pub struct Cli {
    /// Source URLs or paths to extract filenames from.
    pub sources: Vec<String>,

    /// Read additional sources from a file, one per line (blank lines ignored).
    #[arg(short = 'f', long = "from-file", value_name = "PATH")]
    pub from_file: Option<PathBuf>,

    /// Warn and continue when a source yields no filename, instead of aborting.
    #[arg(long)]
    pub skip_invalid: bool,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.run(&mut std::io::stdout().lock())
    }

    /// Prints one extracted filename per source, in input order
    /// (positional sources first, then file entries).
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        let sources = self.collect_sources()?;
        if sources.is_empty() {
            bail!("no sources given; pass them as arguments or via --from-file");
        }

        for source in &sources {
            match extract_filename(source) {
                Ok(name) => {
                    tracing::debug!("extracted {:?} from {:?}", name, source);
                    writeln!(out, "{}", name)?;
                }
                Err(err) if self.skip_invalid => {
                    tracing::warn!("skipping source: {}", err);
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }

    fn collect_sources(&self) -> Result<Vec<String>> {
        let mut sources = self.sources.clone();
        if let Some(path) = &self.from_file {
            let data = fs::read_to_string(path)
                .with_context(|| format!("failed to read source list {}", path.display()))?;
            sources.extend(
                data.lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string),
            );
        }
        Ok(sources)
    }
}
