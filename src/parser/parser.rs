//! The main Parser struct and parse entry points.
//!
//! The parser owns its token cursor, the extension table resolved at
//! construction time, and the quotation depth counter. It maintains no AST
//! state across top-level parses: nodes are built bottom-up and handed to the
//! caller immediately.
//!
//! A parser instance is single-threaded and synchronous. Parsing different
//! inputs concurrently requires independent instances.

use std::{cell::Cell, collections::HashMap, rc::Rc};

use crate::{
    ast::expr::Expr,
    errors::errors::{Error, ErrorImpl},
    tokens::{Token, TokenKind},
    Position,
};

use super::{
    expr,
    lookups::{ParseTable, PrefixHandler},
    quote::QuoteScope,
};

/// The parser state: a token cursor over an immutable stream, the prefix
/// strategy table, and the quotation depth gate.
pub struct Parser {
    /// The token stream to parse; must end with an EOF token
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Prefix parsing strategies, keyed by token kind or keyword spelling
    table: ParseTable,
    /// Nesting depth of expression literals; shared with scoped guards so it
    /// stays balanced on error paths
    quote_depth: Rc<Cell<u32>>,
}

impl Parser {
    /// Creates a parser with only the built-in grammar.
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser::with_extensions(tokens, file, HashMap::new())
    }

    /// Creates a parser with caller-supplied keyword strategies layered on
    /// top of the built-ins. Extension entries override built-in entries for
    /// the same keyword.
    pub fn with_extensions(
        tokens: Vec<Token>,
        file: Rc<String>,
        extensions: HashMap<String, PrefixHandler>,
    ) -> Self {
        assert!(!tokens.is_empty(), "token stream must end with EOF");
        Parser {
            tokens,
            pos: 0,
            file,
            table: ParseTable::with_extensions(extensions),
            quote_depth: Rc::new(Cell::new(0)),
        }
    }

    /// Returns the current token without advancing.
    pub fn current(&self) -> &Token {
        self.peek(0)
    }

    /// Returns the kind of the current token.
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Peeks `ahead` tokens past the current one. Reads past the end of the
    /// stream saturate to the final (EOF) token.
    pub fn peek(&self, ahead: usize) -> &Token {
        let index = (self.pos + ahead).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Returns the most recently consumed token.
    pub fn previous(&self) -> &Token {
        &self.tokens[(self.pos - 1).min(self.tokens.len() - 1)]
    }

    /// Advances to the next token and returns the consumed one.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos.min(self.tokens.len() - 1);
        self.pos += 1;
        &self.tokens[index]
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current();
        if token.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::ExpectedToken {
                        expected: expected_kind.to_string(),
                        found: token.value.clone(),
                    },
                    token.span.start.clone(),
                )),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with the default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Expects a Name token with the given reserved spelling.
    pub fn expect_keyword(&mut self, name: &str) -> Result<Token, Error> {
        if self.current().is_name(name) {
            Ok(self.advance().clone())
        } else {
            Err(Error::new(
                ErrorImpl::ExpectedToken {
                    expected: format!("`{}`", name),
                    found: self.current().value.clone(),
                },
                self.get_position(),
            ))
        }
    }

    /// Consumes the current token if it has the given kind.
    pub fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.current_kind() == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current token if it has any of the given kinds.
    pub fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|kind| self.match_kind(*kind))
    }

    /// Consumes the current token if it is the given reserved Name.
    pub fn match_keyword(&mut self, name: &str) -> bool {
        if self.current().is_name(name) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn look_ahead(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    pub fn look_ahead_at(&self, ahead: usize, kind: TokenKind) -> bool {
        self.peek(ahead).kind == kind
    }

    pub fn look_ahead_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|kind| self.look_ahead(*kind))
    }

    pub fn look_ahead_keyword(&self, name: &str) -> bool {
        self.current().is_name(name)
    }

    /// Answers whether a bare name is a reserved word, by membership in the
    /// extension table. This is the single source of truth the rest of the
    /// grammar uses to tell identifiers and structural keywords apart.
    pub fn is_keyword(&self, name: &str) -> bool {
        self.table.is_reserved(name)
    }

    /// Resolves the prefix strategy for a token, if one is registered.
    pub fn prefix_handler(&self, token: &Token) -> Option<PrefixHandler> {
        self.table.get(token)
    }

    /// True while the parser is inside at least one `{ ... }` expression
    /// literal. Gates the legality of unquote syntax.
    pub fn in_quotation(&self) -> bool {
        self.quote_depth.get() > 0
    }

    pub fn quotation_depth(&self) -> u32 {
        self.quote_depth.get()
    }

    /// Enters a quotation. The depth drops back when the returned scope is
    /// dropped, on success and error paths alike.
    pub fn enter_quotation(&self) -> QuoteScope {
        QuoteScope::enter(Rc::clone(&self.quote_depth))
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current().span.start.clone()
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    /// Parses the entire stream: top-level expressions separated by Line
    /// tokens, tolerating a missing trailing line before EOF.
    pub fn parse_program(&mut self) -> Result<Vec<Expr>, Error> {
        let mut expressions = Vec::new();

        if self.match_kind(TokenKind::EOF) {
            return Ok(expressions);
        }

        loop {
            expressions.push(expr::parse_expression(self)?);

            // Allow sources with no trailing newline.
            if self.match_kind(TokenKind::EOF) {
                break;
            }

            self.expect(TokenKind::Line)?;

            if self.match_kind(TokenKind::EOF) {
                break;
            }
        }

        Ok(expressions)
    }
}

/// Parses a stream of tokens into an ordered sequence of top-level
/// expressions.
///
/// This is the main entry point for parsing. The first syntax error aborts
/// the whole parse; there is no recovery or resynchronization.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Vec<Expr>, Error> {
    Parser::new(tokens, file).parse_program()
}

/// Parses a single expression from a token stream. Used by callers that need
/// exactly one expression rather than a whole program.
pub fn parse_expression(tokens: Vec<Token>, file: Rc<String>) -> Result<Expr, Error> {
    expr::parse_expression(&mut Parser::new(tokens, file))
}
