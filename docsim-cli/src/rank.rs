mod common;

use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use docsim::rank::{resolve_top_k, MAX_TOP_K};
use docsim::{Comparator, RankRequest, RankRow};

use common::DataArgs;

#[derive(Parser, Debug)]
#[clap(
    name = "docsim-rank",
    about = "A program to rank the documents most similar to a target document."
)]
struct Args {
    #[clap(flatten)]
    data: DataArgs,

    /// Id of the target document.
    target_id: String,

    /// Number of results in the range of [1,100].
    /// Values out of the range fall back to 10.
    #[clap(short = 'k', long, allow_hyphen_values = true)]
    top_k: Option<i64>,

    /// Number of worker threads (0 uses one per CPU).
    #[clap(short = 't', long, env = "DOCSIM_NUM_THREADS", default_value = "0")]
    num_threads: usize,

    /// Disables parallel comparison.
    #[clap(short = 'p', long)]
    disable_parallel: bool,

    /// Prints raw scores in [0,1] instead of percentages.
    #[clap(short = 'r', long)]
    raw_scores: bool,
}

fn main() -> anyhow::Result<()> {
    common::init_tracing();
    let args = Args::parse();

    rayon::ThreadPoolBuilder::new()
        .num_threads(args.num_threads)
        .build_global()
        .context("failed to build the worker pool")?;

    if let Some(k) = args.top_k {
        if resolve_top_k(Some(k)) as i64 != k {
            tracing::warn!(top_k = k, max = MAX_TOP_K, "top-k out of range, using the default");
        }
    }

    let comparator = Comparator::new(args.data.provider()?);
    let request = RankRequest {
        target_id: args.target_id,
        top_k: args.top_k,
    };

    let start = Instant::now();
    let ranked = if args.disable_parallel {
        comparator.rank_against_all(&request.target_id, request.top_k)
    } else {
        comparator.rank_against_all_in_parallel(&request.target_id, request.top_k)
    };
    let ranked = ranked.context("failed to list documents")?;
    tracing::info!(
        elapsed_sec = start.elapsed().as_secs_f64(),
        results = ranked.len(),
        "done"
    );

    let value = if args.raw_scores {
        serde_json::to_value(&ranked)?
    } else {
        let rows: Vec<RankRow> = ranked.iter().map(RankRow::from).collect();
        serde_json::to_value(&rows)?
    };
    common::print_json(&value)
}
