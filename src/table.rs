use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::token::Kind;

lazy_static! {
    /// Reserved words of the language, keyed by the full word.
    static ref KEYWORDS: HashMap<&'static str, Kind> = {
        let mut table = HashMap::new();
        table.insert("if", Kind::If);
        table.insert("then", Kind::Then);
        table.insert("end", Kind::End);
        table.insert("repeat", Kind::Repeat);
        table.insert("until", Kind::Until);
        table.insert("read", Kind::Read);
        table.insert("write", Kind::Write);
        table
    };

    /// Operators and punctuation, keyed by the exact symbol text.
    static ref SYMBOLS: HashMap<&'static str, Kind> = {
        let mut table = HashMap::new();
        table.insert(";", Kind::Semicolon);
        table.insert(":=", Kind::Assign);
        table.insert("<", Kind::LessThan);
        table.insert("=", Kind::Equal);
        table.insert("+", Kind::Plus);
        table.insert("-", Kind::Minus);
        table.insert("*", Kind::Mult);
        table.insert("/", Kind::Div);
        table.insert("(", Kind::OpenBracket);
        table.insert(")", Kind::ClosedBracket);
        table
    };
}

/// Exact-match lookup of a completed letter run. No prefix matching.
pub fn keyword_kind(word: &str) -> Option<Kind> {
    KEYWORDS.get(word).copied()
}

/// Exact-match lookup of an operator lexeme. No prefix matching.
pub fn symbol_kind(symbol: &str) -> Option<Kind> {
    SYMBOLS.get(symbol).copied()
}
