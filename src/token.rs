#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub value: String,
    pub kind: Kind,
}

impl Token {
    pub fn new(kind: Kind, value: String) -> Self {
        Self { value, kind }
    }

    /// The end-of-input marker is the only token with an empty value.
    pub fn end_of_input() -> Self {
        Self {
            value: String::new(),
            kind: Kind::EndOfInput,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Kind {
    // Punctuation and operators
    Semicolon,     // ;
    Assign,        // :=
    LessThan,      // <
    Equal,         // =
    Plus,          // +
    Minus,         // -
    Mult,          // *
    Div,           // /
    OpenBracket,   // (
    ClosedBracket, // )

    // Reserved words
    If,
    Then,
    End,
    Repeat,
    Until,
    Read,
    Write,

    // Identifiers and literals
    Identifier,
    Number,

    Error,      // malformed lexeme, unknown symbol, or unclosed comment
    EndOfInput, // end of stream marker
}

impl Kind {
    /// Name printed in the first column of the token table.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Semicolon => "Semicolon",
            Kind::If => "If",
            Kind::Then => "Then",
            Kind::End => "End",
            Kind::Repeat => "Repeat",
            Kind::Until => "Until",
            Kind::Identifier => "Identifier",
            Kind::Assign => "Assign",
            Kind::Read => "Read",
            Kind::Write => "Write",
            Kind::LessThan => "LessThan",
            Kind::Equal => "Equal",
            Kind::Plus => "Plus",
            Kind::Minus => "Minus",
            Kind::Mult => "Mult",
            Kind::Div => "Div",
            Kind::OpenBracket => "OpenBracket",
            Kind::ClosedBracket => "ClosedBracket",
            Kind::Number => "Number",
            Kind::Error => "Error",
            Kind::EndOfInput => "EndOfInput",
        }
    }
}
