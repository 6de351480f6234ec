use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

/// Characters every catalogued layout can type at comparable cost:
/// the Russian alphabet, space, and a handful of shared punctuation.
pub fn common_chars() -> HashSet<char> {
    let basic_russian = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя ";
    let common_shift = "!№;%*()+/,.";
    basic_russian.chars().chain(common_shift.chars()).collect()
}

/// Restricts analysis to a fixed character set, applied before resolution.
#[derive(Debug, Clone)]
pub struct CharFilter {
    chars: HashSet<char>,
    lowercase: bool,
}

impl CharFilter {
    /// Lowercases the text first, then keeps members of `chars`.
    pub fn new(chars: HashSet<char>) -> Self {
        Self {
            chars,
            lowercase: true,
        }
    }

    /// Keeps members of `chars` with case preserved.
    pub fn exact(chars: HashSet<char>) -> Self {
        Self {
            chars,
            lowercase: false,
        }
    }

    pub fn common() -> Self {
        Self::new(common_chars())
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn apply<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = char> + 'a> {
        if self.lowercase {
            Box::new(
                text.chars()
                    .flat_map(char::to_lowercase)
                    .filter(move |c| self.chars.contains(c)),
            )
        } else {
            Box::new(text.chars().filter(move |c| self.chars.contains(c)))
        }
    }
}

/// One text to analyze: where to fetch it, and what to call it in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSource {
    pub id: String,
    pub name: String,
}

impl TextSource {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl FromStr for TextSource {
    type Err = String;

    /// `path` or `path=Display Name`. Without a name the file stem is used.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Text source cannot be empty".to_string());
        }

        match s.split_once('=') {
            Some((id, name)) => {
                let (id, name) = (id.trim(), name.trim());
                if id.is_empty() || name.is_empty() {
                    return Err(format!("Malformed text source '{}'", s));
                }
                Ok(Self::new(id, name))
            }
            None => {
                let name = Path::new(s)
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_else(|| s.to_string());
                Ok(Self::new(s, name))
            }
        }
    }
}

/// Corpus used when no texts are given.
pub fn default_sources() -> Vec<TextSource> {
    vec![
        TextSource::new("voina-i-mir.txt", "Война и мир"),
        TextSource::new("digramms.txt", "Диграммы"),
        TextSource::new("1grams-3.txt", "1-граммы"),
    ]
}

/// Supplies whole texts by identifier. `None` means the source is
/// unavailable; callers skip it.
pub trait TextProvider: Sync {
    fn load(&self, id: &str) -> Option<String>;
}

/// Reads UTF-8 files relative to a root directory.
#[derive(Debug, Clone)]
pub struct FsTextProvider {
    root: PathBuf,
}

impl FsTextProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for FsTextProvider {
    fn default() -> Self {
        Self::new(".")
    }
}

impl TextProvider for FsTextProvider {
    fn load(&self, id: &str) -> Option<String> {
        let path = self.root.join(id);
        match fs::read_to_string(&path) {
            Ok(text) => {
                debug!("Loaded {} ({} bytes)", path.display(), text.len());
                Some(text)
            }
            Err(e) => {
                warn!("Text source '{}' unavailable: {}", path.display(), e);
                None
            }
        }
    }
}

impl TextProvider for HashMap<String, String> {
    fn load(&self, id: &str) -> Option<String> {
        self.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_set_has_alphabet_space_and_punctuation() {
        let set = common_chars();
        assert_eq!(set.len(), 33 + 1 + 11);
        assert!(set.contains(&'ё'));
        assert!(set.contains(&' '));
        assert!(set.contains(&'№'));
        assert!(!set.contains(&'А'));
    }

    #[test]
    fn filter_lowercases_before_matching() {
        let filter = CharFilter::common();
        let kept: String = filter.apply("Привет, Мир! abc").collect();
        assert_eq!(kept, "привет, мир! ");
    }

    #[test]
    fn exact_filter_keeps_case() {
        let filter = CharFilter::exact("аб".chars().collect());
        let kept: String = filter.apply("АаБб").collect();
        assert_eq!(kept, "аб");
    }

    #[test]
    fn text_source_parsing() {
        let src: TextSource = "texts/war.txt=War".parse().unwrap();
        assert_eq!(src, TextSource::new("texts/war.txt", "War"));

        let src: TextSource = "texts/war.txt".parse().unwrap();
        assert_eq!(src.name, "war");

        assert!("=War".parse::<TextSource>().is_err());
        assert!("   ".parse::<TextSource>().is_err());
    }
}
