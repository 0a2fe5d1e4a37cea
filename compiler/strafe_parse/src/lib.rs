//! Parser for strafe scripts.
//!
//! Statements are parsed by recursive descent, expressions by precedence
//! climbing. The parser pulls tokens lazily from the lexer and keeps a
//! table of user function arities so that a bare name can be recognised as
//! a call and its trailing arguments counted.

mod cursor;
mod error;
mod functions;
mod grammar;

use strafe_ir::Block;

use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};
pub use functions::FunctionTable;

/// Parser state.
pub struct Parser<'src> {
    cursor: Cursor<'src>,
    functions: FunctionTable,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Parser {
            cursor: Cursor::new(source),
            functions: FunctionTable::new(),
        }
    }

    /// Functions declared so far.
    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }
}

/// Parse a whole script into its top-level block.
pub fn parse(source: &str) -> Result<Block, ParseError> {
    Parser::new(source).scan()
}
