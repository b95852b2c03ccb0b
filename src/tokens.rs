//! Token definitions consumed by the parser.
//!
//! Tokens are produced by an external scanner and handed to the parser as a
//! finished stream ending in an EOF token. The parser never mutates them.
//! Whether a NAME token is a reserved word is not decided here; the parser's
//! extension table is the single source of truth for that.

use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Line,

    // Literals
    Bool,
    Int,
    String,
    Nothing,
    This,

    Name,
    Operator,
    /// A record field marker: the scanner folds `name:` into one token whose
    /// value is the field name.
    Field,

    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    Backtick,
    Comma,
    Equals,
    Arrow,

    And,
    Or,

    // Structural keywords with dedicated kinds. Keywords like `do` and
    // `class` arrive as Name tokens and are resolved through the parser's
    // extension table instead.
    Fn,
    Match,
    For,
    While,
    With,
    Catch,
    Then,
    End,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    /// True if this token is the given reserved word, i.e. a Name token with
    /// exactly that spelling.
    pub fn is_name(&self, name: &str) -> bool {
        self.kind == TokenKind::Name && self.value == name
    }

    fn is_one_of_many(&self, tokens: Vec<TokenKind>) -> bool {
        for token in tokens {
            if token == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![
            TokenKind::String,
            TokenKind::Name,
            TokenKind::Int,
            TokenKind::Operator,
            TokenKind::Field,
        ]) {
            println!("{} ({})", self.kind, self.value);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
