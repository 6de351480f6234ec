use crate::reports;
use clap::Args;
use keyload::config::AnalysisConfig;
use keyload::corpus::FsTextProvider;
use keyload::runner::{self, RunOptions};
use keyload::KlResult;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: AnalysisConfig,

    /// Write every record as JSON (`-` for stdout).
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write every record as CSV (`-` for stdout).
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Print per-finger tables for every record.
    #[arg(long, default_value_t = false)]
    pub detail: bool,

    /// Skip the summary tables.
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

pub fn run(args: AnalyzeArgs) -> KlResult<()> {
    args.config.validate()?;

    let layouts = args.config.layout_names();
    let sources = args.config.sources();
    let provider = FsTextProvider::new(&args.config.data_dir);
    let opts = RunOptions::from(&args.config);

    info!(
        "📂 {} texts from {} | {} layouts",
        sources.len(),
        provider.root().display(),
        layouts.len()
    );
    if let Some(filter) = &opts.filter {
        info!("🔤 Restricting texts to {} common characters", filter.len());
    }

    let results = runner::run_all(layouts.as_slice(), &sources, &provider, &opts)?;
    let ordered = reports::in_catalog_order(&results);

    if ordered.iter().all(|(_, records)| records.is_empty()) {
        warn!("⚠️  Nothing was analyzed. Check --data-dir and --text.");
    }

    if !args.quiet {
        reports::print_summary(&ordered, &sources);
        if args.detail {
            for (_, records) in &ordered {
                for stats in records.iter() {
                    reports::print_finger_report(stats);
                }
            }
        }
    }

    if let Some(path) = &args.json {
        reports::export::write_json(path, &ordered)?;
        info!("💾 JSON written to {}", path.display());
    }
    if let Some(path) = &args.csv {
        reports::export::write_csv(path, &ordered)?;
        info!("💾 CSV written to {}", path.display());
    }

    Ok(())
}
