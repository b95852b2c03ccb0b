//! Block and catch-clause parsing.
//!
//! A block is either a single inline expression (no leading Line token) or a
//! Line-separated statement list terminated by a keyword, an end-token kind,
//! or a `catch`. Trailing `catch <pattern> then <body>` clauses are desugared
//! at parse time into one match expression over a synthetic variable bound to
//! the raised error, with a final wildcard case that re-raises it.

use crate::{
    ast::{
        expr::{Expr, ExprKind, MatchCase},
        pattern::Pattern,
    },
    errors::errors::Error,
    tokens::{Token, TokenKind},
};

use super::{expr, parser::Parser, pattern};

/// The synthetic variable the desugared catch-match binds the raised error
/// value to. Not expressible in source.
pub const ERROR_NAME: &str = "__err__";

/// Parses a block terminated by `end`, discarding the terminator.
pub fn parse_end_block(parser: &mut Parser) -> Result<Expr, Error> {
    let (body, _) = parse_block(parser, &[], &[TokenKind::End])?;
    Ok(body)
}

/// Parses a block with catch clauses enabled. Returns the block expression
/// and the terminating token: `end` terminators are consumed, every other
/// terminator is left for the caller to inspect, and inline blocks have no
/// terminator at all.
pub fn parse_block(
    parser: &mut Parser,
    keywords: &[&str],
    end_kinds: &[TokenKind],
) -> Result<(Expr, Option<Token>), Error> {
    parse_block_with_catch(parser, true, keywords, end_kinds)
}

pub(crate) fn parse_block_with_catch(
    parser: &mut Parser,
    parse_catch: bool,
    keywords: &[&str],
    end_kinds: &[TokenKind],
) -> Result<(Expr, Option<Token>), Error> {
    if !parser.match_kind(TokenKind::Line) {
        // No line break: the block is a single expression and no catch
        // clauses are attempted.
        let body = expr::parse_expression(parser)?;
        return Ok((body, None));
    }

    let start = parser.current().span.clone();
    let mut body = Vec::new();

    loop {
        if keywords.iter().any(|name| parser.look_ahead_keyword(name)) {
            break;
        }
        if end_kinds.iter().any(|kind| parser.look_ahead(*kind)) {
            break;
        }
        if parser.look_ahead(TokenKind::Catch) {
            break;
        }

        body.push(expr::parse_expression(parser)?);
        parser.expect(TokenKind::Line)?;
    }

    let end_token = parser.current().clone();

    // An `end` terminator belongs to the block and is consumed; any other
    // terminator is left for the caller, consistent with the inline case.
    if end_token.kind == TokenKind::End {
        parser.advance();
    }

    // Parse any catch clauses.
    let mut catch_expr = None;
    if parse_catch {
        let catch_start = parser.current().span.clone();
        let mut catches = Vec::new();

        while parser.match_kind(TokenKind::Catch) {
            catches.push(parse_catch_clause(parser, keywords, end_kinds)?);
        }

        if !catches.is_empty() {
            // Synthesize a match over the raised error. The implicit final
            // case rethrows it through the runtime.
            let value = Expr::name(ERROR_NAME, catch_start.clone());
            let runtime = Expr::name("Runtime", catch_start.clone());
            let rethrow = Expr::new(
                ExprKind::Message {
                    receiver: Some(Box::new(runtime)),
                    name: String::from("throw"),
                    arg: Some(Box::new(value.clone())),
                },
                catch_start.clone(),
            );
            catches.push(MatchCase::new(Pattern::wildcard(), rethrow));

            let span = catch_start.union(&parser.previous().span);
            catch_expr = Some(Expr::new(
                ExprKind::Match {
                    value: Box::new(value),
                    cases: catches,
                },
                span,
            ));
        }
    }

    let span = match body.first() {
        Some(first) => first.span.union(&parser.previous().span),
        None => start.union(&parser.previous().span),
    };

    Ok((
        Expr::new(
            ExprKind::Block {
                body,
                catch: catch_expr.map(Box::new),
            },
            span,
        ),
        Some(end_token),
    ))
}

/// Parses one `catch <pattern> then <body>` clause. The body is a block that
/// cannot itself carry catch clauses.
fn parse_catch_clause(
    parser: &mut Parser,
    keywords: &[&str],
    end_kinds: &[TokenKind],
) -> Result<MatchCase, Error> {
    let pattern = pattern::parse_pattern(parser)?;

    parser.expect(TokenKind::Then)?;

    let (body, end_token) = parse_block_with_catch(parser, false, keywords, end_kinds)?;

    // Allow newlines to separate single-line catches.
    if end_token.is_none()
        && parser.look_ahead(TokenKind::Line)
        && parser.look_ahead_at(1, TokenKind::Catch)
    {
        parser.advance();
    }

    Ok(MatchCase::new(pattern, body))
}
