//! The expression precedence chain.
//!
//! A strict descending ladder, each level delegating to the next:
//! assignment → composite → conjunction → operator → message → primary.
//! Primary dispatches through the extension table; every registered strategy
//! may recurse back into [`parse_expression`], making the chain and the
//! strategies mutually recursive.

use crate::{
    ast::expr::{Expr, ExprKind, FunctionType},
    errors::errors::{Error, ErrorImpl},
    tokens::{Token, TokenKind},
};

use super::{block, parser::Parser, signature, types};

/// Parses one full expression, starting at the lowest precedence level.
pub fn parse_expression(parser: &mut Parser) -> Result<Expr, Error> {
    assignment(parser)
}

/// Assignment is right-associative by construction: the right-hand side is
/// itself a full expression, so `a = b = c` parses as `a = (b = c)`.
fn assignment(parser: &mut Parser) -> Result<Expr, Error> {
    let expr = composite(parser)?;

    if parser.match_kind(TokenKind::Equals) {
        let value = parse_expression(parser)?;
        return convert_assignment(expr, value);
    }

    Ok(expr)
}

/// Parses a composite literal: a tuple (`a, b`) or a record (`x: 1, y: 2`).
///
/// The first element decides the form. Once committed to field syntax, every
/// element must use it. A composite of exactly one comma-free element is
/// returned unwrapped; there is no one-element tuple.
fn composite(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.look_ahead(TokenKind::Field) {
        let start = parser.current().span.clone();
        let mut fields = Vec::new();

        loop {
            let error = Error::new(
                ErrorImpl::ExpectedRecordField {
                    found: parser.current().value.clone(),
                },
                parser.get_position(),
            );
            let field = parser.expect_error(TokenKind::Field, Some(error))?;
            let value = conjunction(parser)?;
            fields.push((field.value, value));

            if !parser.match_kind(TokenKind::Comma) {
                break;
            }
        }

        let span = start.union(&fields[fields.len() - 1].1.span);
        Ok(Expr::new(ExprKind::Record(fields), span))
    } else {
        let mut elements = vec![conjunction(parser)?];

        while parser.match_kind(TokenKind::Comma) {
            elements.push(conjunction(parser)?);
        }

        if elements.len() == 1 {
            return Ok(elements.remove(0));
        }

        Ok(Expr::tuple(elements))
    }
}

/// Parses `and` and `or` expressions: one left-associative band with no
/// difference in binding strength. Short-circuiting is a runtime concern.
fn conjunction(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = operator(parser)?;

    while parser.match_any(&[TokenKind::And, TokenKind::Or]) {
        let connective = parser.previous().clone();
        let right = operator(parser)?;
        let span = left.span.union(&right.span);

        let kind = if connective.kind == TokenKind::And {
            ExprKind::And {
                left: Box::new(left),
                right: Box::new(right),
            }
        } else {
            ExprKind::Or {
                left: Box::new(left),
                right: Box::new(right),
            }
        };
        left = Expr::new(kind, span);
    }

    Ok(left)
}

/// Parses a series of operator expressions like `a + b - c`. All operators
/// share a single left-associative precedence band; each application is a
/// bare message send whose argument is the 2-tuple of its operands.
pub fn operator(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = message(parser)?;

    while parser.match_kind(TokenKind::Operator) {
        let op = parser.previous().clone();
        let right = message(parser)?;
        let span = left.span.union(&right.span);

        let arg = Expr::tuple(vec![left, right]);
        left = Expr::new(
            ExprKind::Message {
                receiver: None,
                name: op.value,
                arg: Some(Box::new(arg)),
            },
            span,
        );
    }

    Ok(left)
}

/// Parses a series of message sends, calls, and trailing block arguments:
/// everything in the core syntax that extends an expression left to right.
fn message(parser: &mut Parser) -> Result<Expr, Error> {
    let mut message = primary(parser)?;

    loop {
        if parser.look_ahead(TokenKind::Name) && !parser.is_keyword(&parser.current().value) {
            // A bare name: a unary message send to the running expression.
            let name = parser.advance().clone();
            let span = message.span.union(&name.span);
            message = Expr::new(
                ExprKind::Message {
                    receiver: Some(Box::new(message)),
                    name: name.value,
                    arg: None,
                },
                span,
            );
        } else if parser.match_kind(TokenKind::OpenBracket) {
            // A call with explicit type arguments, like `foo[Int](arg)`.
            let type_args = types::parse_type_args(parser)?;

            // See if there is a regular argument too.
            let arg = if parser.match_kind(TokenKind::OpenParen) {
                let arg = parse_expression(parser)?;
                parser.expect(TokenKind::CloseParen)?;
                arg
            } else {
                Expr::nothing(parser.previous().span.clone())
            };

            let span = message.span.union(&parser.previous().span);
            message = Expr::new(
                ExprKind::Call {
                    target: Box::new(message),
                    type_args,
                    arg: Box::new(arg),
                },
                span,
            );
        } else if parser.look_ahead(TokenKind::OpenParen) {
            // A plain call like `foo(123)`. An empty group means `nothing`.
            let open = parser.expect(TokenKind::OpenParen)?;
            let arg = group_rest(parser, open, TokenKind::CloseParen)?;
            let span = message.span.union(&parser.previous().span);
            message = Expr::new(
                ExprKind::Call {
                    target: Box::new(message),
                    type_args: Vec::new(),
                    arg: Box::new(arg),
                },
                span,
            );
        } else if parser.match_kind(TokenKind::With) {
            // A trailing block argument. Parse the parameter signature if
            // given, else assume a single `it` parameter.
            let block_type = if parser.look_ahead(TokenKind::OpenParen) {
                signature::parse_function_type(parser)?
            } else {
                FunctionType::implicit_it()
            };

            // Parse the block and wrap it in a function literal.
            let body = block::parse_end_block(parser)?;
            let fn_span = body.span.clone();
            let function = Expr::new(
                ExprKind::Fn {
                    signature: Box::new(block_type),
                    body: Box::new(body),
                },
                fn_span,
            );

            // Apply the function to the running expression: append it to an
            // existing call's argument tuple, or wrap a fresh call around
            // anything else.
            let span = message.span.union(&function.span);
            let Expr {
                kind,
                span: target_span,
            } = message;
            message = match kind {
                ExprKind::Call {
                    target,
                    type_args,
                    arg,
                } => {
                    let arg = add_tuple_field(*arg, function);
                    Expr::new(
                        ExprKind::Call {
                            target,
                            type_args,
                            arg: Box::new(arg),
                        },
                        span,
                    )
                }
                other => {
                    let target = Expr::new(other, target_span);
                    Expr::new(
                        ExprKind::Call {
                            target: Box::new(target),
                            type_args: Vec::new(),
                            arg: Box::new(function),
                        },
                        span,
                    )
                }
            };
        } else {
            break;
        }
    }

    Ok(message)
}

/// Parses a primary expression by dispatching the current token to the
/// extension table. A token with no registered strategy is a parse failure.
fn primary(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.prefix_handler(parser.current()) {
        Some(handler) => {
            let token = parser.advance().clone();
            handler(parser, token)
        }
        None => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

/// The shared single-token strategy: wraps a literal or bare name token as
/// the corresponding expression.
pub fn parse_single_token(_parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    literal_expr(&token)
}

/// Builds the expression for a single literal or name token.
pub(crate) fn literal_expr(token: &Token) -> Result<Expr, Error> {
    let kind = match token.kind {
        TokenKind::Bool => ExprKind::Bool(token.value == "true"),
        TokenKind::Int => {
            let value = token.value.parse().map_err(|_| {
                Error::new(
                    ErrorImpl::IntParseError {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                )
            })?;
            ExprKind::Int(value)
        }
        TokenKind::String => ExprKind::Str(token.value.clone()),
        TokenKind::Nothing => ExprKind::Nothing,
        TokenKind::This => ExprKind::This,
        TokenKind::Name => ExprKind::Name(token.value.clone()),
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            ))
        }
    };

    Ok(Expr::new(kind, token.span.clone()))
}

/// The parenthesized group strategy. The opening token is already consumed.
pub fn parse_group(parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    group_rest(parser, token, TokenKind::CloseParen)
}

/// Parses the remainder of a delimited group whose opening token has been
/// consumed. An immediately closed group yields `nothing`; otherwise one
/// expression, allowing a newline before the closing delimiter.
pub(crate) fn group_rest(parser: &mut Parser, open: Token, close: TokenKind) -> Result<Expr, Error> {
    if parser.match_kind(close) {
        return Ok(Expr::nothing(open.span.union(&parser.previous().span)));
    }

    let expr = parse_expression(parser)?;

    parser.match_kind(TokenKind::Line);
    parser.expect(close)?;

    Ok(expr)
}

/// Appends a value to a call's argument: `nothing` becomes the value itself,
/// a tuple grows by one field, and anything else pairs up into a 2-tuple.
fn add_tuple_field(expr: Expr, field: Expr) -> Expr {
    match expr.kind {
        ExprKind::Nothing => field,
        ExprKind::Tuple(mut fields) => {
            let span = expr.span.union(&field.span);
            fields.push(field);
            Expr::new(ExprKind::Tuple(fields), span)
        }
        other => {
            let left = Expr::new(other, expr.span);
            Expr::tuple(vec![left, field])
        }
    }
}

/// Converts a parsed left-hand side and a value into an assignment form:
/// a name becomes a variable assignment, a unary message send becomes a
/// setter send, and a call becomes an `assign` send carrying the original
/// argument and the value. Anything else cannot be assigned to.
fn convert_assignment(target: Expr, value: Expr) -> Result<Expr, Error> {
    let span = target.span.union(&value.span);

    match target.kind {
        ExprKind::Name(name) => Ok(Expr::new(
            ExprKind::Assign {
                name,
                value: Box::new(value),
            },
            span,
        )),
        ExprKind::Message {
            receiver,
            name,
            arg: None,
        } => Ok(Expr::new(
            ExprKind::Message {
                receiver,
                name: format!("{}=", name),
                arg: Some(Box::new(value)),
            },
            span,
        )),
        ExprKind::Call { target, arg, .. } => {
            let pair = Expr::tuple(vec![*arg, value]);
            Ok(Expr::new(
                ExprKind::Message {
                    receiver: Some(target),
                    name: String::from("assign"),
                    arg: Some(Box::new(pair)),
                },
                span,
            ))
        }
        _ => Err(Error::new(
            ErrorImpl::InvalidAssignmentTarget,
            target.span.start.clone(),
        )),
    }
}
