use crate::table::{keyword_kind, symbol_kind};
use crate::token::{Kind, Token};

/// Pull scanner over a source string. Each call to [`Scanner::next_token`]
/// consumes zero or more characters and returns exactly one token; the only
/// state carried between calls is the cursor position, so scanning may
/// resume after an error token.
pub struct Scanner {
    chars: Vec<char>,
    current: usize,
}

impl Scanner {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            current: 0,
        }
    }

    /// One-character lookahead without consuming. '\0' at end of stream.
    fn at(&self) -> char {
        if self.current >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn advance(&mut self) {
        self.current += 1;
    }

    fn is_eof(&self) -> bool {
        self.current >= self.chars.len()
    }

    pub fn next_token(&mut self) -> Token {
        // Skip state: whitespace and { ... } comments, interleaved freely.
        loop {
            if self.is_eof() {
                return Token::end_of_input();
            }
            let ch = self.at();
            if ch.is_whitespace() {
                self.advance();
                continue;
            }
            if ch == '{' {
                self.advance();
                loop {
                    if self.is_eof() {
                        return Token::new(Kind::Error, "Unclosed comment".to_string());
                    }
                    let c = self.at();
                    self.advance();
                    // Comments do not nest; the first } always closes.
                    if c == '}' {
                        break;
                    }
                }
                continue;
            }
            break;
        }

        let ch = self.at();

        if ch.is_ascii_alphabetic() {
            let mut lexeme = String::new();
            while !self.is_eof() && self.at().is_ascii_alphabetic() {
                lexeme.push(self.at());
                self.advance();
            }
            // Identifiers are letters-only; a trailing digit invalidates the
            // lexeme and exactly one offending digit is absorbed.
            if !self.is_eof() && self.at().is_ascii_digit() {
                lexeme.push(self.at());
                self.advance();
                return Token::new(Kind::Error, lexeme);
            }
            return match keyword_kind(&lexeme) {
                Some(kind) => Token::new(kind, lexeme),
                None => Token::new(Kind::Identifier, lexeme),
            };
        }

        if ch.is_ascii_digit() {
            let mut lexeme = String::new();
            while !self.is_eof() && self.at().is_ascii_digit() {
                lexeme.push(self.at());
                self.advance();
            }
            if !self.is_eof() && self.at().is_ascii_alphabetic() {
                lexeme.push(self.at());
                self.advance();
                return Token::new(Kind::Error, lexeme);
            }
            return Token::new(Kind::Number, lexeme);
        }

        if ch == ':' {
            self.advance();
            if self.at() == '=' {
                self.advance();
                return match symbol_kind(":=") {
                    Some(kind) => Token::new(kind, ":=".to_string()),
                    None => Token::new(Kind::Error, ":=".to_string()),
                };
            }
            // Lone colon falls through to symbol lookup, which misses.
            return match symbol_kind(":") {
                Some(kind) => Token::new(kind, ":".to_string()),
                None => Token::new(Kind::Error, ":".to_string()),
            };
        }

        self.advance();
        let lexeme = ch.to_string();
        match symbol_kind(&lexeme) {
            Some(kind) => Token::new(kind, lexeme),
            None => Token::new(Kind::Error, lexeme),
        }
    }
}
