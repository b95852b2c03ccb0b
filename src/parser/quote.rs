//! Quotation literals, unquotes, and the quotation depth tracker.
//!
//! A `{ ... }` expression literal quotes its contents; a backtick splices a
//! live value back in. Unquotes are only legal at quotation depth > 0. The
//! depth counter is adjusted exclusively through [`QuoteScope`] so that it
//! stays balanced even when a parse fails partway through a quoted region.

use std::{cell::Cell, rc::Rc};

use crate::{
    ast::expr::{Expr, ExprKind},
    errors::errors::{Error, ErrorImpl},
    tokens::{Token, TokenKind},
};

use super::{expr, parser::Parser};

/// A scoped increment of the quotation depth. Dropping the scope decrements
/// it again, on every exit path.
pub struct QuoteScope {
    depth: Rc<Cell<u32>>,
}

impl QuoteScope {
    pub(crate) fn enter(depth: Rc<Cell<u32>>) -> Self {
        depth.set(depth.get() + 1);
        QuoteScope { depth }
    }
}

impl Drop for QuoteScope {
    fn drop(&mut self) {
        self.depth.set(self.depth.get() - 1);
    }
}

/// The `{` strategy: a quoted expression literal.
pub fn parse_quotation(parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    let body = {
        let _scope = parser.enter_quotation();

        let body = expr::parse_expression(parser)?;
        parser.match_kind(TokenKind::Line);
        parser.expect(TokenKind::CloseBrace)?;
        body
    };

    let span = token.span.union(&parser.previous().span);
    Ok(Expr::new(ExprKind::Quote(Box::new(body)), span))
}

/// The backtick strategy: an unquote, legal only inside a quotation. The
/// spliced value is either a bare name or a parenthesized expression.
pub fn parse_unquote(parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    if !parser.in_quotation() {
        return Err(Error::new(
            ErrorImpl::UnquoteOutsideQuotation,
            token.span.start.clone(),
        ));
    }

    let body = if parser.look_ahead(TokenKind::OpenParen) {
        let open = parser.expect(TokenKind::OpenParen)?;
        expr::group_rest(parser, open, TokenKind::CloseParen)?
    } else {
        let name = parser.expect(TokenKind::Name)?;
        Expr::name(name.value.clone(), name.span.clone())
    };

    let span = token.span.union(&parser.previous().span);
    Ok(Expr::new(ExprKind::Unquote(Box::new(body)), span))
}
