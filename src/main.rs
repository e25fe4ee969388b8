//! repo-collector - Topic Repository Collector
//!
//! トピックごとの人気リポジトリを GitHub から収集し、README を更新する

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use repo_collector::adapter::auth::load_dotenv;
use repo_collector::driver::{Args, CollectWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    // .env は RUST_LOG も含みうるので、ロガー初期化より前に読み込む
    let dotenv = load_dotenv();

    env_logger::init();

    if let Err(e) = dotenv {
        log::warn!("{:#}", e);
    }

    let args = Args::parse();

    // Load configuration (file or defaults, then CLI overrides)
    let config = args.resolve_config()?;

    // Create workflow with injected dependencies
    let workflow = CollectWorkflow::new(config)?;

    workflow.execute(args.dry_run).await?;

    Ok(())
}
