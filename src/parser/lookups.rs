//! The syntax extension table.
//!
//! Every primary-position token resolves to a prefix parsing strategy looked
//! up here, keyed either by token kind or, for reserved words that arrive as
//! Name tokens, by spelling. The built-in entries are seeded once into
//! immutable tables; each parser instance copies them and layers any
//! caller-supplied keyword entries on top, so later registrations shadow
//! earlier ones. After construction the table is never mutated.
//!
//! A name is reserved iff it has a keyword entry in this table. That single
//! fact drives identifier-vs-keyword disambiguation everywhere else in the
//! grammar.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::expr::Expr,
    errors::errors::Error,
    tokens::{Token, TokenKind},
};

use super::{expr, keywords, parser::Parser, quote, signature};

/// A prefix parsing strategy: given the already-consumed leading token, parse
/// the rest of the construct.
pub type PrefixHandler = fn(&mut Parser, Token) -> Result<Expr, Error>;

lazy_static! {
    static ref BUILTIN_KIND_LOOKUP: HashMap<TokenKind, PrefixHandler> = {
        let mut map: HashMap<TokenKind, PrefixHandler> = HashMap::new();

        // All literal kinds and bare names share the single-token strategy.
        map.insert(TokenKind::Bool, expr::parse_single_token);
        map.insert(TokenKind::Int, expr::parse_single_token);
        map.insert(TokenKind::Nothing, expr::parse_single_token);
        map.insert(TokenKind::String, expr::parse_single_token);
        map.insert(TokenKind::This, expr::parse_single_token);
        map.insert(TokenKind::Name, expr::parse_single_token);

        map.insert(TokenKind::OpenParen, expr::parse_group);
        map.insert(TokenKind::OpenBrace, quote::parse_quotation);
        map.insert(TokenKind::Backtick, quote::parse_unquote);
        map.insert(TokenKind::Fn, signature::parse_fn_literal);

        map.insert(TokenKind::Match, keywords::parse_match);
        // `for` is pure sugar over the same loop strategy as `while`.
        map.insert(TokenKind::For, keywords::parse_loop);
        map.insert(TokenKind::While, keywords::parse_loop);

        map
    };
    static ref BUILTIN_KEYWORD_LOOKUP: HashMap<&'static str, PrefixHandler> = {
        let mut map: HashMap<&'static str, PrefixHandler> = HashMap::new();

        map.insert("do", keywords::parse_do);
        map.insert("class", keywords::parse_class);
        map.insert("extend", keywords::parse_extend);
        map.insert("interface", keywords::parse_interface);

        map
    };
}

/// Lookup table mapping tokens to their prefix strategies, private to one
/// parser instance and read-only after construction.
pub struct ParseTable {
    kind_lookup: HashMap<TokenKind, PrefixHandler>,
    keyword_lookup: HashMap<String, PrefixHandler>,
}

impl ParseTable {
    /// Builds a table from the built-in entries plus the given extensions.
    /// Extension entries win over built-ins with the same spelling.
    pub fn with_extensions(extensions: HashMap<String, PrefixHandler>) -> Self {
        let mut keyword_lookup: HashMap<String, PrefixHandler> = BUILTIN_KEYWORD_LOOKUP
            .iter()
            .map(|(name, handler)| (name.to_string(), *handler))
            .collect();

        for (name, handler) in extensions {
            keyword_lookup.insert(name, handler);
        }

        ParseTable {
            kind_lookup: BUILTIN_KIND_LOOKUP.clone(),
            keyword_lookup,
        }
    }

    /// Resolves the strategy for a token. Reserved words shadow the generic
    /// Name entry.
    pub fn get(&self, token: &Token) -> Option<PrefixHandler> {
        if token.kind == TokenKind::Name {
            if let Some(handler) = self.keyword_lookup.get(&token.value) {
                return Some(*handler);
            }
        }

        self.kind_lookup.get(&token.kind).copied()
    }

    /// True if the given spelling has a keyword entry.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.keyword_lookup.contains_key(name)
    }
}
