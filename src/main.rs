use std::fs::File;
use std::io;
use std::process;

use clap::Parser;

use crate::config::Config;
use crate::error::DriverError;
use crate::report::render_tokens;
use crate::scanner::Scanner;
use crate::token::{Kind, Token};

mod config;
mod error;
mod report;
mod scanner;
mod table;
mod token;

#[derive(Parser)]
#[command(version, about = "Lexical scanner for the TINY language")]
struct Cli {}

/// Drive the scanner to completion. Returns the tokens collected in source
/// order, plus the error token that stopped the scan, if any. The erroring
/// token is not part of the sequence.
fn scan_tokens(scanner: &mut Scanner) -> (Vec<Token>, Option<Token>) {
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        match token.kind {
            Kind::EndOfInput => return (tokens, None),
            Kind::Error => return (tokens, Some(token)),
            _ => tokens.push(token),
        }
    }
}

fn main() -> Result<(), DriverError> {
    let _cli = Cli::parse();
    let config = Config::load();

    let source = match std::fs::read_to_string(&config.input_path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{}", DriverError::InputNotFound(config.input_path, err));
            process::exit(1);
        }
    };

    let mut scanner = Scanner::new(&source);
    let (tokens, error) = scan_tokens(&mut scanner);

    if let Some(error) = &error {
        eprintln!("Lexical error: {}", error.value);
    }

    let stdout = io::stdout();
    render_tokens(&mut stdout.lock(), &tokens)?;

    match File::create(&config.output_path) {
        Ok(mut file) => render_tokens(&mut file, &tokens)?,
        Err(err) => {
            eprintln!(
                "Warning: cannot open output file {}: {}",
                config.output_path.display(),
                err
            );
        }
    }

    Ok(())
}
