//! The pattern sub-grammar.
//!
//! Patterns appear after `catch`, in match cases, and as function parameter
//! lists. Comma-separated patterns form a tuple pattern; a single pattern is
//! returned unwrapped, mirroring the composite rule for expressions.

use crate::{
    ast::pattern::Pattern,
    errors::errors::{Error, ErrorImpl},
    tokens::TokenKind,
};

use super::{expr, parser::Parser, types};

/// Parses a pattern, including tuple patterns like `a, b Int`.
pub fn parse_pattern(parser: &mut Parser) -> Result<Pattern, Error> {
    let mut fields = vec![primary_pattern(parser)?];

    while parser.match_kind(TokenKind::Comma) {
        fields.push(primary_pattern(parser)?);
    }

    if fields.len() == 1 {
        return Ok(fields.remove(0));
    }

    Ok(Pattern::Tuple(fields))
}

/// Parses a single non-tuple pattern: a literal value, a name with an
/// optional type constraint, or a parenthesized pattern.
fn primary_pattern(parser: &mut Parser) -> Result<Pattern, Error> {
    match parser.current_kind() {
        TokenKind::Bool | TokenKind::Int | TokenKind::String | TokenKind::Nothing => {
            let token = parser.advance().clone();
            Ok(Pattern::Value(expr::literal_expr(&token)?))
        }
        TokenKind::Name if !parser.is_keyword(&parser.current().value) => {
            let name = parser.advance().clone();

            // A non-keyword name directly after the binding is a type
            // constraint, as in `a Int`.
            let constraint = if parser.look_ahead(TokenKind::Name)
                && !parser.is_keyword(&parser.current().value)
            {
                Some(types::parse_type(parser)?)
            } else {
                None
            };

            Ok(Pattern::Variable {
                name: name.value,
                constraint,
            })
        }
        TokenKind::OpenParen => {
            parser.advance();
            let pattern = parse_pattern(parser)?;
            parser.expect(TokenKind::CloseParen)?;
            Ok(pattern)
        }
        _ => Err(Error::new(
            ErrorImpl::ExpectedToken {
                expected: String::from("a pattern"),
                found: parser.current().value.clone(),
            },
            parser.get_position(),
        )),
    }
}
