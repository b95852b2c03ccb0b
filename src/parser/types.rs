//! The type sub-grammar.
//!
//! Type annotations are ordinary expressions parsed at operator precedence,
//! so plain names (`Int`), generic applications (`List[Int]`), and operator
//! unions (`Int | Nothing`) all work without a second expression grammar.

use crate::{ast::expr::Expr, errors::errors::Error, tokens::TokenKind};

use super::{expr, parser::Parser};

/// Parses one type expression.
pub fn parse_type(parser: &mut Parser) -> Result<Expr, Error> {
    expr::operator(parser)
}

/// Parses the comma-separated type arguments of a bracketed list whose `[`
/// has already been consumed, through the closing `]`.
pub fn parse_type_args(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    let mut args = vec![parse_type(parser)?];

    while parser.match_kind(TokenKind::Comma) {
        args.push(parse_type(parser)?);
    }

    parser.expect(TokenKind::CloseBracket)?;

    Ok(args)
}
