//! Function literal and function type signature parsing.
//!
//! The compact type notation resolves an ambiguous-looking surface form into
//! generic parameters, a parameter pattern, and a return type, with default
//! inference for each omitted part.

use crate::{
    ast::{
        expr::{Expr, ExprKind, FunctionType},
        pattern::Pattern,
    },
    errors::errors::Error,
    tokens::{Token, TokenKind},
};

use super::{block, parser::Parser, pattern, types};

/// The `fn` strategy: an anonymous function literal with an optional type
/// signature followed by an `end` block.
///
/// `fn (a) a + 1` is also valid: the body may be a single inline expression.
pub fn parse_fn_literal(parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    // Parse the type signature if present.
    let signature = if parser.look_ahead_any(&[TokenKind::OpenParen, TokenKind::OpenBracket]) {
        Some(parse_function_type(parser)?)
    } else {
        None
    };

    // Parse the body.
    let body = block::parse_end_block(parser)?;

    let span = token.span.union(&parser.previous().span);

    // If no signature was provided, infer a dynamic one.
    let signature = signature.unwrap_or_else(FunctionType::nothing_to_dynamic);

    Ok(Expr::new(
        ExprKind::Fn {
            signature: Box::new(signature),
            body: Box::new(body),
        },
        span,
    ))
}

/// Parses a function type declaration. Valid examples include:
///
/// ```text
/// (->)           // takes nothing, returns nothing
/// ()             // takes nothing, returns dynamic
/// (a)            // takes a single dynamic, returns dynamic
/// (a ->)         // takes a single dynamic, returns nothing
/// (a Int -> Int) // takes and returns an int
/// [T](item T)    // generic over T, unconstrained
/// ```
pub fn parse_function_type(parser: &mut Parser) -> Result<FunctionType, Error> {
    // Parse the type parameters, if any.
    let mut type_params = Vec::new();
    if parser.match_kind(TokenKind::OpenBracket) {
        loop {
            let name = parser.expect(TokenKind::Name)?;

            // Infer "Any" if no constraint is given.
            let constraint =
                if parser.look_ahead_any(&[TokenKind::Comma, TokenKind::CloseBracket]) {
                    Expr::name("Any", name.span.clone())
                } else {
                    types::parse_type(parser)?
                };
            type_params.push((name.value, constraint));

            if !parser.match_kind(TokenKind::Comma) {
                break;
            }
        }

        parser.expect(TokenKind::CloseBracket)?;
    }

    // Parse the prototype: (foo Foo, bar Bar -> Bang)
    parser.expect(TokenKind::OpenParen)?;

    // Parse the parameter pattern, if any.
    let pattern = if !parser.look_ahead_any(&[TokenKind::Arrow, TokenKind::CloseParen]) {
        pattern::parse_pattern(parser)?
    } else {
        // No pattern, so expect nothing.
        Pattern::Value(Expr::nothing(parser.current().span.clone()))
    };

    // Parse the return type, if any.
    let return_type;
    if parser.match_kind(TokenKind::CloseParen) {
        // No return type, so infer dynamic.
        return_type = Expr::name("Dynamic", parser.previous().span.clone());
    } else {
        parser.expect(TokenKind::Arrow)?;

        if parser.look_ahead(TokenKind::CloseParen) {
            // An arrow, but no return type, so infer nothing.
            return_type = Expr::name("Nothing", parser.current().span.clone());
        } else {
            return_type = types::parse_type(parser)?;
        }
        parser.expect(TokenKind::CloseParen)?;
    }

    Ok(FunctionType::new(type_params, pattern, return_type))
}
