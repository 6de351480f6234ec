use crate::config::AnalysisConfig;
use crate::corpus::{CharFilter, TextProvider, TextSource};
use crate::error::{KeyLoadError, KlResult};
use crate::layouts::KnownLayout;
use crate::scorer::{Analyzer, TypingStats};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, info};

/// Layout -> one record per analyzed source, in source order.
pub type LayoutResults = HashMap<KnownLayout, Vec<TypingStats>>;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub parallel: bool,
    /// Size of a dedicated rayon pool. `None` uses the global pool.
    pub threads: Option<usize>,
    pub filter: Option<CharFilter>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
            filter: None,
        }
    }
}

impl From<&AnalysisConfig> for RunOptions {
    fn from(cfg: &AnalysisConfig) -> Self {
        Self {
            parallel: !cfg.sequential,
            threads: cfg.threads,
            filter: cfg.common_only.then(CharFilter::common),
        }
    }
}

/// Analyzes every source with one analyzer. Unavailable, empty, and fully
/// unresolvable sources are dropped; the rest keep their order.
pub fn analyze_sources<P>(
    analyzer: &Analyzer,
    sources: &[TextSource],
    provider: &P,
    filter: Option<&CharFilter>,
) -> Vec<TypingStats>
where
    P: TextProvider + ?Sized,
{
    let layout = analyzer.layout().layout();
    let mut results = Vec::with_capacity(sources.len());

    for source in sources {
        let Some(text) = provider.load(&source.id) else {
            debug!("{}: skipping '{}' (unavailable)", layout, source.id);
            continue;
        };

        match analyzer.analyze_with(&text, &source.name, filter) {
            Some(stats) if stats.characters_analyzed > 0 => results.push(stats),
            Some(_) => debug!("{}: skipping '{}' (nothing typeable)", layout, source.id),
            None => debug!("{}: skipping '{}' (empty)", layout, source.id),
        }
    }

    results
}

/// Batch run for one layout identifier.
pub fn run_for_layout<P>(
    layout: &str,
    sources: &[TextSource],
    provider: &P,
    opts: &RunOptions,
) -> KlResult<Vec<TypingStats>>
where
    P: TextProvider + ?Sized,
{
    let analyzer = Analyzer::from_name(layout)?;
    Ok(analyze_sources(&analyzer, sources, provider, opts.filter.as_ref()))
}

/// Runs the batch once per distinct layout, each with its own analyzer.
/// Identifiers are resolved up front: any unknown layout aborts the whole
/// run, and repeated identifiers (in any case) are analyzed once.
pub fn run_all<L, P>(
    layouts: &[L],
    sources: &[TextSource],
    provider: &P,
    opts: &RunOptions,
) -> KlResult<LayoutResults>
where
    L: AsRef<str>,
    P: TextProvider + ?Sized,
{
    if opts.threads == Some(0) {
        return Err(KeyLoadError::Config(
            "Thread count must be at least 1".to_string(),
        ));
    }

    let mut unique: Vec<KnownLayout> = Vec::with_capacity(layouts.len());
    for name in layouts {
        let layout = KnownLayout::parse(name.as_ref())?;
        if unique.contains(&layout) {
            debug!("{}: duplicate identifier '{}' ignored", layout, name.as_ref());
        } else {
            unique.push(layout);
        }
    }

    let start = Instant::now();
    let job = |layout: &KnownLayout| -> (KnownLayout, Vec<TypingStats>) {
        let analyzer = Analyzer::new(*layout);
        let results = analyze_sources(&analyzer, sources, provider, opts.filter.as_ref());
        info!(
            "{}: {}/{} texts analyzed",
            layout,
            results.len(),
            sources.len()
        );
        (*layout, results)
    };

    let pairs: Vec<(KnownLayout, Vec<TypingStats>)> = match (opts.parallel, opts.threads) {
        (false, _) => unique.iter().map(job).collect(),
        (true, None) => unique.par_iter().map(job).collect(),
        (true, Some(n)) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
            pool.install(|| unique.par_iter().map(job).collect())
        }
    };

    info!(
        "Analyzed {} layouts x {} texts in {:.2?}",
        pairs.len(),
        sources.len(),
        start.elapsed()
    );

    Ok(pairs.into_iter().collect())
}
