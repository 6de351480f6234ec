#![allow(dead_code)]

use keyload::corpus::TextSource;
use std::collections::HashMap;

/// Mixed-case prose with punctuation, digits and a few Latin letters.
pub const PROSE: &str = "Ещё в начале 1805 года, в Петербурге, Анна Павловна Шерер \
    говорила: «Ну что, князь? Генуя и Лукка стали поместьями фамилии Бонапарте!» \
    Rest of the line is Latin.";

/// Letters that only the Alt layer of Вызов produces.
pub const RARE: &str = "цщъэ";

pub fn memory_provider() -> HashMap<String, String> {
    let mut texts = HashMap::new();
    texts.insert("prose.txt".to_string(), PROSE.to_string());
    texts.insert("rare.txt".to_string(), RARE.to_string());
    texts.insert("empty.txt".to_string(), String::new());
    texts.insert("latin.txt".to_string(), "just latin".to_string());
    texts.insert("untypeable.txt".to_string(), "QWE\n".to_string());
    texts
}

pub fn source(id: &str, name: &str) -> TextSource {
    TextSource::new(id, name)
}
