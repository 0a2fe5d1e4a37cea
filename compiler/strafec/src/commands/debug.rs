//! Debug commands: `lex` and `parse` for inspecting the front end.

use strafe_parse::{ParseError, Parser};

use super::read_file;
use crate::RunError;

/// Lex a file and print the token stream.
pub fn lex_file(path: &str) -> Result<(), RunError> {
    let source = read_file(path)?;
    print!("{}", dump_tokens(path, &source));
    Ok(())
}

/// Parse a file and print a summary followed by the AST.
pub fn parse_file(path: &str) -> Result<(), RunError> {
    let source = read_file(path)?;
    print!("{}", dump_ast(path, &source)?);
    Ok(())
}

pub fn dump_tokens(path: &str, source: &str) -> String {
    let tokens = strafe_lexer::lex(source);
    let mut out = format!("Tokens for '{path}' ({} tokens):\n", tokens.len());
    for token in &tokens {
        out.push_str(&format!(
            "  {:?} {:?} @ {}\n",
            token.kind, token.text, token.span
        ));
    }
    out
}

pub fn dump_ast(path: &str, source: &str) -> Result<String, ParseError> {
    let mut parser = Parser::new(source);
    let script = parser.scan()?;
    Ok(format!(
        "Parse result for '{path}':\n  Statements: {}\n  Functions: {}\n\n{script:#?}\n",
        script.stmts.len(),
        parser.functions().len()
    ))
}
