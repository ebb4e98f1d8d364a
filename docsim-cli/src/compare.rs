mod common;

use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use docsim::{Comparator, CompareRequest};

use common::DataArgs;

#[derive(Parser, Debug)]
#[clap(
    name = "docsim-compare",
    about = "A program to compare two documents for near-duplicate and topic similarity."
)]
struct Args {
    #[clap(flatten)]
    data: DataArgs,

    /// Id of the first document.
    id1: String,

    /// Id of the second document.
    id2: String,
}

fn main() -> anyhow::Result<()> {
    common::init_tracing();
    let args = Args::parse();

    let comparator = Comparator::new(args.data.provider()?);
    let request = CompareRequest {
        id1: args.id1,
        id2: args.id2,
    };

    let start = Instant::now();
    let result = comparator
        .compare(&request)
        .with_context(|| format!("failed to compare {} and {}", request.id1, request.id2))?;
    tracing::info!(elapsed_sec = start.elapsed().as_secs_f64(), "done");

    common::print_json(&serde_json::to_value(&result)?)
}
