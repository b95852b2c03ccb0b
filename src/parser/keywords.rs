//! Built-in keyword strategies: `do`, `match`, the shared `for`/`while` loop
//! strategy, and the declaration forms `class`, `extend`, `interface`.
//!
//! These are ordinary table entries; caller-supplied registrations may shadow
//! any of the Name-keyed ones.

use crate::{
    ast::expr::{Expr, ExprKind, MatchCase},
    errors::errors::Error,
    tokens::{Token, TokenKind},
    Span,
};

use super::{block, expr, parser::Parser, pattern};

/// The `do` strategy: an explicit block, with catch clauses allowed.
pub fn parse_do(parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    let (mut body, _) = block::parse_block(parser, &[], &[TokenKind::End])?;
    body.span = token.span.union(&body.span);
    Ok(body)
}

/// The `match` strategy: a scrutinee followed by line-separated
/// `<pattern> then <body>` cases, closed by `end`.
pub fn parse_match(parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    let value = expr::parse_expression(parser)?;
    parser.expect(TokenKind::Line)?;

    let mut cases = Vec::new();
    loop {
        if parser.match_kind(TokenKind::End) {
            break;
        }

        let case_pattern = pattern::parse_pattern(parser)?;
        parser.expect(TokenKind::Then)?;

        let (body, end_token) =
            block::parse_block_with_catch(parser, false, &[], &[TokenKind::End])?;
        cases.push(MatchCase::new(case_pattern, body));

        match end_token {
            // A multi-line body ran to the closing `end` and consumed it.
            Some(_) => break,
            // A single-line body: a line separates it from the next case.
            None => {
                parser.expect(TokenKind::Line)?;
            }
        }
    }

    let span = token.span.union(&parser.previous().span);
    Ok(Expr::new(
        ExprKind::Match {
            value: Box::new(value),
            cases,
        },
        span,
    ))
}

/// The strategy shared by `for` and `while`.
///
/// Any mix of `while <condition>` and `for <name> = <generator>` clauses may
/// precede the `do` body. A `for` clause is pure sugar: it desugars into a
/// generator definition before the loop, a `next` send as one more loop
/// condition, and a `current` binding prefixed to the body, so both surface
/// forms produce the same loop node.
pub fn parse_loop(parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    let mut defines = Vec::new();
    let mut conditions = Vec::new();
    let mut body_prefix = Vec::new();

    let mut clause = token.kind;
    loop {
        if clause == TokenKind::While {
            conditions.push(expr::parse_expression(parser)?);
        } else {
            let name = parser.expect(TokenKind::Name)?;
            parser.expect(TokenKind::Equals)?;
            let generator = expr::parse_expression(parser)?;
            let span = name.span.union(&generator.span);

            let generator_name = format!("__{}_gen", name.value);

            // def __x_gen = generator generate
            defines.push(define(
                generator_name.clone(),
                send(generator, "generate", span.clone()),
                span.clone(),
            ));

            // while __x_gen next
            conditions.push(send(
                Expr::name(generator_name.clone(), span.clone()),
                "next",
                span.clone(),
            ));

            // def x = __x_gen current
            body_prefix.push(define(
                name.value,
                send(Expr::name(generator_name, span.clone()), "current", span.clone()),
                span,
            ));
        }

        parser.match_kind(TokenKind::Line);

        if parser.match_kind(TokenKind::While) {
            clause = TokenKind::While;
            continue;
        }
        if parser.match_kind(TokenKind::For) {
            clause = TokenKind::For;
            continue;
        }
        break;
    }

    parser.expect_keyword("do")?;
    let body = block::parse_end_block(parser)?;
    let span = token.span.union(&parser.previous().span);

    let body = if body_prefix.is_empty() {
        body
    } else {
        let body_span = body.span.clone();
        body_prefix.push(body);
        Expr::new(
            ExprKind::Block {
                body: body_prefix,
                catch: None,
            },
            body_span,
        )
    };

    let loop_expr = Expr::new(
        ExprKind::Loop {
            conditions,
            body: Box::new(body),
        },
        span.clone(),
    );

    if defines.is_empty() {
        Ok(loop_expr)
    } else {
        defines.push(loop_expr);
        Ok(Expr::new(
            ExprKind::Block {
                body: defines,
                catch: None,
            },
            span,
        ))
    }
}

/// The `class` strategy: `class Name` followed by a member block.
pub fn parse_class(parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    let (name, body, span) = parse_declaration(parser, &token)?;
    Ok(Expr::new(
        ExprKind::Class {
            name,
            body: Box::new(body),
        },
        span,
    ))
}

/// The `extend` strategy: adds members to an existing class. The `class`
/// keyword after `extend` is optional.
pub fn parse_extend(parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    parser.match_keyword("class");
    let (name, body, span) = parse_declaration(parser, &token)?;
    Ok(Expr::new(
        ExprKind::Extend {
            name,
            body: Box::new(body),
        },
        span,
    ))
}

/// The `interface` strategy.
pub fn parse_interface(parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    let (name, body, span) = parse_declaration(parser, &token)?;
    Ok(Expr::new(
        ExprKind::Interface {
            name,
            body: Box::new(body),
        },
        span,
    ))
}

fn parse_declaration(parser: &mut Parser, token: &Token) -> Result<(String, Expr, Span), Error> {
    let name = parser.expect(TokenKind::Name)?;
    let (body, _) = block::parse_block_with_catch(parser, false, &[], &[TokenKind::End])?;
    let span = token.span.union(&parser.previous().span);
    Ok((name.value, body, span))
}

fn send(receiver: Expr, name: &str, span: Span) -> Expr {
    Expr::new(
        ExprKind::Message {
            receiver: Some(Box::new(receiver)),
            name: String::from(name),
            arg: None,
        },
        span,
    )
}

fn define(name: String, value: Expr, span: Span) -> Expr {
    Expr::new(
        ExprKind::Define {
            name,
            value: Box::new(value),
        },
        span,
    )
}
