//! Contract harness: replays HTTP fixtures against a running boxops API.
//!
//! ```bash
//! cargo run -p contract-harness -- --base-url http://localhost:3000
//! cargo run -p contract-harness -- --base-url http://localhost:3000 --filter unknown-user
//! ```
//!
//! Fixtures run in id order and share the server's database, so point it at
//! a freshly migrated schema. Exits 1 when any assertion fails.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod fixture;
mod reporter;
mod runner;

use reporter::Reporter;
use runner::Runner;

#[derive(Parser)]
#[command(about = "Replay HTTP contract fixtures against a running API")]
struct Args {
    /// API base URL, e.g. http://localhost:3000
    #[arg(long)]
    base_url: String,

    /// Only fixtures under contracts/http/<SERVICE>
    #[arg(long)]
    service: Option<String>,

    /// Only fixtures whose id contains this text
    #[arg(long)]
    filter: Option<String>,

    /// Stop after the first failing fixture
    #[arg(long)]
    fail_fast: bool,

    /// Directory holding contracts/; defaults to the nearest ancestor that has one
    #[arg(long)]
    root: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let root = args
        .root
        .unwrap_or_else(|| contracts_root(Path::new(env!("CARGO_MANIFEST_DIR"))));
    let mut fixtures = fixture::load_all(&root, args.service.as_deref())?;
    if let Some(needle) = &args.filter {
        fixtures.retain(|f| f.id.contains(needle.as_str()));
    }

    if fixtures.is_empty() {
        eprintln!("no fixtures under {}", root.join("contracts/http").display());
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} fixture(s) -> {}\n", fixtures.len(), args.base_url);

    let runner = Runner::new(&args.base_url);
    let mut reporter = Reporter::new();
    for f in &fixtures {
        let passed = reporter.record(f, runner.run(f).await);
        if !passed && args.fail_fast {
            break;
        }
    }
    reporter.print_summary(fixtures.len());

    Ok(if reporter.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Nearest ancestor of `start` that holds a `contracts/` directory.
fn contracts_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|p| p.join("contracts").is_dir())
        .unwrap_or(start)
        .to_path_buf()
}
