use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use docsim::TextDirectory;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "docsim=info,compare=info,rank=info";

#[derive(Args, Debug)]
pub struct DataArgs {
    /// Directory of extracted plain-text documents, one `<id>.txt` per document.
    #[clap(short = 'd', long, env = "DOCSIM_DATA_ROOT", default_value = "./data/texts")]
    pub data_root: PathBuf,
}

impl DataArgs {
    pub fn provider(&self) -> anyhow::Result<TextDirectory> {
        if !self.data_root.is_dir() {
            anyhow::bail!("{} is not a directory", self.data_root.display());
        }
        Ok(TextDirectory::new(&self.data_root))
    }
}

/// Logs go to stderr so that stdout carries only JSON.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(io::stderr)
        .init();
}

pub fn print_json(value: &Value) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}
