use std::{collections::HashMap, sync::LazyLock};

use super::token::TokenType;

static SYMBOLS: LazyLock<HashMap<&'static str, TokenType>> = LazyLock::new(|| {
    TokenType::SYMBOLS
        .iter()
        .filter_map(|kind| kind.spelling().map(|text| (text, *kind)))
        .collect()
});

static KEYWORDS: LazyLock<HashMap<&'static str, TokenType>> = LazyLock::new(|| {
    TokenType::KEYWORDS
        .iter()
        .filter_map(|kind| kind.spelling().map(|text| (text, *kind)))
        .collect()
});

/// Symbols match exactly, keywords case-insensitively.
pub fn lookup(text: &str) -> Option<TokenType> {
    if let Some(kind) = SYMBOLS.get(text) {
        return Some(*kind);
    }
    let keyword = text.to_uppercase();
    KEYWORDS.get(keyword.as_str()).copied()
}
