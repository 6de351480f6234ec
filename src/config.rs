use crate::corpus::{default_sources, TextSource};
use crate::error::{KeyLoadError, KlResult};
use crate::layouts::KnownLayout;
use clap::Args;
use std::collections::HashSet;
use std::path::PathBuf;
use strum::IntoEnumIterator;

#[derive(Args, Debug, Clone)]
pub struct AnalysisConfig {
    /// Layouts to compare, comma separated. Defaults to the whole catalog.
    #[arg(long, value_delimiter = ',')]
    pub layouts: Vec<String>,

    /// Text to analyze as `path` or `path=Display Name`. Repeatable.
    #[arg(long = "text")]
    pub texts: Vec<TextSource>,

    /// Directory the text paths are resolved against.
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Lowercase texts and keep only characters every layout can type.
    #[arg(long, default_value_t = false)]
    pub common_only: bool,

    /// Analyze layouts one after another instead of in parallel.
    #[arg(long, default_value_t = false)]
    pub sequential: bool,

    #[arg(long)]
    pub threads: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            layouts: Vec::new(),
            texts: Vec::new(),
            data_dir: PathBuf::from("."),
            common_only: false,
            sequential: false,
            threads: None,
        }
    }
}

impl AnalysisConfig {
    pub fn layout_names(&self) -> Vec<String> {
        if self.layouts.is_empty() {
            KnownLayout::iter().map(|l| l.to_string()).collect()
        } else {
            self.layouts.iter().map(|s| s.trim().to_string()).collect()
        }
    }

    pub fn sources(&self) -> Vec<TextSource> {
        if self.texts.is_empty() {
            default_sources()
        } else {
            self.texts.clone()
        }
    }

    /// Records are matched to sources by display name, so names must be unique.
    pub fn validate(&self) -> KlResult<()> {
        let mut seen = HashSet::new();
        for source in self.sources() {
            if !seen.insert(source.name.clone()) {
                return Err(KeyLoadError::Validation(format!(
                    "Text name '{}' is used by more than one source",
                    source.name
                )));
            }
        }
        Ok(())
    }
}
