use std::io::{self, Write};

use crate::token::Token;

const KIND_WIDTH: usize = 18;
const VALUE_WIDTH: usize = 13;

fn rule() -> String {
    format!(
        "+{}+{}+",
        "-".repeat(KIND_WIDTH + 2),
        "-".repeat(VALUE_WIDTH + 2)
    )
}

/// Render the token sequence as a fixed-width two-column table. The same
/// routine serves the terminal and the output file so the two stay
/// byte-identical.
pub fn render_tokens<W: Write>(out: &mut W, tokens: &[Token]) -> io::Result<()> {
    let rule = rule();
    writeln!(out, "{}", rule)?;
    writeln!(
        out,
        "| {:<kind$} | {:<value$} |",
        "Token",
        "Value",
        kind = KIND_WIDTH,
        value = VALUE_WIDTH
    )?;
    writeln!(out, "{}", rule)?;
    for token in tokens {
        writeln!(
            out,
            "| {:<kind$} | {:<value$} |",
            token.kind.name(),
            token.value,
            kind = KIND_WIDTH,
            value = VALUE_WIDTH
        )?;
    }
    writeln!(out, "{}", rule)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Kind;

    #[test]
    fn renders_fixed_width_rows() {
        let tokens = vec![
            Token::new(Kind::If, "if".to_string()),
            Token::new(Kind::Assign, ":=".to_string()),
            Token::new(Kind::Number, "10".to_string()),
        ];
        let mut buffer = Vec::new();
        render_tokens(&mut buffer, &tokens).unwrap();
        let rendered = String::from_utf8(buffer).unwrap();
        let expected = "\
+--------------------+---------------+
| Token              | Value         |
+--------------------+---------------+
| If                 | if            |
| Assign             | :=            |
| Number             | 10            |
+--------------------+---------------+
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn renders_empty_sequence_as_header_only() {
        let mut buffer = Vec::new();
        render_tokens(&mut buffer, &[]).unwrap();
        let rendered = String::from_utf8(buffer).unwrap();
        assert_eq!(rendered.lines().count(), 4);
    }

    #[test]
    fn widest_kind_name_fits_the_column() {
        let tokens = vec![Token::new(Kind::ClosedBracket, ")".to_string())];
        let mut buffer = Vec::new();
        render_tokens(&mut buffer, &tokens).unwrap();
        let rendered = String::from_utf8(buffer).unwrap();
        for line in rendered.lines() {
            assert_eq!(line.len(), KIND_WIDTH + VALUE_WIDTH + 7);
        }
    }
}
