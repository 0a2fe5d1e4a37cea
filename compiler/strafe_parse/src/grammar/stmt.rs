//! Statement parsing.

use strafe_ir::{Block, Builtin, CallExpr, Callee, Expr, ExprKind, FuncDecl, Stmt, TokenKind};
use strafe_stack::ensure_sufficient_stack;
use tracing::{debug, warn};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse statements until end of input or an unmatched `}`.
    pub fn scan(&mut self) -> Result<Block, ParseError> {
        let start = self.cursor.current_span();
        let mut stmts = Vec::new();
        while !self.cursor.is_at_end() {
            if self.cursor.check(TokenKind::RBrace) {
                warn!(span = %self.cursor.current_span(), "unmatched `}}` ends the script");
                break;
            }
            stmts.push(self.parse_stmt()?);
        }
        debug!(
            statements = stmts.len(),
            functions = self.functions.len(),
            "parsed script"
        );
        Ok(Block {
            stmts,
            tap: false,
            span: start.merge(self.cursor.previous_span()),
        })
    }

    fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| self.parse_stmt_inner())
    }

    fn parse_stmt_inner(&mut self) -> Result<Stmt, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Let => self.parse_let(),
            TokenKind::For => self.parse_for(),
            TokenKind::While => self.parse_while(),
            TokenKind::If => self.parse_if(),
            TokenKind::Fn => self.parse_fn(),
            TokenKind::LBrace => Ok(Stmt::Block(self.parse_block(false)?)),
            TokenKind::Tap => {
                self.cursor.advance();
                Ok(Stmt::Block(self.parse_block(true)?))
            }
            TokenKind::Pipe => {
                let pipe = self.cursor.advance();
                let reset = CallExpr {
                    name: pipe.text,
                    callee: Callee::Builtin(Builtin::Reset),
                    inputs: None,
                    args: Vec::new(),
                };
                Ok(Stmt::Expr(Expr::new(ExprKind::Call(reset), pipe.span)))
            }
            _ => Ok(Stmt::Expr(self.parse_expr()?)),
        }
    }

    /// `{ stmt* }`; `tap` has already been consumed for tap blocks.
    fn parse_block(&mut self, tap: bool) -> Result<Block, ParseError> {
        let open = self.cursor.expect(TokenKind::LBrace, "`{`")?;
        let mut stmts = Vec::new();
        loop {
            match self.cursor.current_kind() {
                TokenKind::RBrace => break,
                TokenKind::Eof => return Err(ParseError::unterminated_block(open.span)),
                _ => stmts.push(self.parse_stmt()?),
            }
        }
        let close = self.cursor.advance();
        Ok(Block {
            stmts,
            tap,
            span: open.span.merge(close.span),
        })
    }

    fn parse_body(&mut self) -> Result<Box<Stmt>, ParseError> {
        Ok(Box::new(Stmt::Block(self.parse_block(false)?)))
    }

    /// `let name = expr`
    fn parse_let(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.cursor.advance();
        let name = self.cursor.expect(TokenKind::Ident, "variable name after `let`")?;
        self.cursor.expect(TokenKind::Eq, "`=` after variable name")?;
        let init = self.parse_expr()?;
        let span = keyword.span.merge(init.span);
        Ok(Stmt::Let {
            name: name.text,
            init,
            span,
        })
    }

    /// `for count { ... }`
    fn parse_for(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        let count = self.parse_expr()?;
        let body = self.parse_body()?;
        Ok(Stmt::For { count, body })
    }

    /// `while cond { ... }`
    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        let cond = self.parse_expr()?;
        let body = self.parse_body()?;
        Ok(Stmt::While { cond, body })
    }

    /// `if cond { ... } [else { ... } | else if ...]`
    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        let cond = self.parse_expr()?;
        let then_branch = self.parse_body()?;
        let else_branch = if self.cursor.check(TokenKind::Else) {
            self.cursor.advance();
            if self.cursor.check(TokenKind::If) {
                Some(Box::new(self.parse_if()?))
            } else {
                Some(self.parse_body()?)
            }
        } else {
            None
        };
        Ok(Stmt::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    /// `fn name(a b) body`
    ///
    /// The arity is registered before the body is parsed, so the body may
    /// call the function recursively.
    fn parse_fn(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.cursor.advance();
        let name = match self.cursor.current_kind() {
            TokenKind::Ident => self.cursor.advance(),
            TokenKind::Verb | TokenKind::Builtin => {
                return Err(ParseError::redefined_builtin(self.cursor.current()));
            }
            _ => {
                return Err(ParseError::unexpected(
                    "function name after `fn`",
                    self.cursor.current(),
                ));
            }
        };
        self.cursor.expect(TokenKind::LParen, "`(` after function name")?;
        let mut params = Vec::new();
        while self.cursor.check(TokenKind::Ident) {
            params.push(self.cursor.advance().text);
        }
        self.cursor.expect(TokenKind::RParen, "parameter name or `)`")?;

        self.functions.declare(&name.text, params.len());
        debug!(name = %name.text, arity = params.len(), "declared function");

        let body = self.parse_stmt()?;
        Ok(Stmt::Fn(FuncDecl {
            name: name.text,
            params,
            body: Box::new(body),
            span: keyword.span.merge(self.cursor.previous_span()),
        }))
    }
}
