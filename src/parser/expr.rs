use crate::{
    ast::expressions::{
        AssignExpr, BinaryExpr, BoolExpr, CallExpr, CharExpr, DoubleExpr, Expr, IntExpr,
        StringExpr, UnaryExpr, VariableExpr,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{
        BindingPower, ASSIGNMENT_OPERATORS, BINARY_BP_LOOKUP, POSTFIX_OPERATORS,
        PREFIX_OPERATORS,
    },
    parser::Parser,
};

/// Every nested expression (groups, arguments, assignment values) enters
/// here, one nesting level deeper.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nested(parse_assignment_expr)
}

/// Right-associative. The left side must be a bare variable.
pub fn parse_assignment_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_binary_expr(parser, BindingPower::Assignment.next())?;

    let operator_position = parser.get_position();
    let Some(operator) = parser.match_any(ASSIGNMENT_OPERATORS) else {
        return Ok(left);
    };

    let value = parse_expr(parser)?;

    match left {
        Expr::Variable(target) => Ok(Expr::Assign(AssignExpr {
            position: target.position.clone(),
            target,
            operator,
            value: Box::new(value),
        })),
        _ => Err(Error::new(
            ErrorImpl::InvalidAssignmentTarget,
            operator_position,
        )),
    }
}

/// Parses every binary level from `bp` down to unary.
///
/// Each level loops over its own operators, so all of them are
/// left-associative.
pub fn parse_binary_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    if bp >= BindingPower::Unary {
        return parse_unary_expr(parser);
    }

    let mut left = parse_binary_expr(parser, bp.next())?;

    while BINARY_BP_LOOKUP.get(&parser.current_token_kind()) == Some(&bp) {
        let operator_token = parser.advance().clone();
        let right = parse_binary_expr(parser, bp.next())?;

        left = Expr::Binary(BinaryExpr {
            left: Box::new(left),
            operator: operator_token.kind,
            right: Box::new(right),
            position: operator_token.position,
        });
    }

    Ok(left)
}

pub fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_position = parser.get_position();
    if let Some(operator) = parser.match_any(PREFIX_OPERATORS) {
        let operand = parser.nested(parse_unary_expr)?;

        return Ok(Expr::Unary(UnaryExpr {
            operator,
            operand: Box::new(operand),
            postfix: false,
            position: operator_position,
        }));
    }

    parse_call_expr(parser)
}

/// A primary, an optional argument list when the primary is a name, then
/// any number of postfix `++`/`--`.
pub fn parse_call_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_primary_expr(parser)?;

    if let Expr::Variable(callee) = &expr {
        if parser.match_kind(TokenKind::OpenParen) {
            let callee = callee.clone();
            let mut arguments = vec![];

            if !parser.check(TokenKind::CloseParen) {
                loop {
                    arguments.push(parse_expr(parser)?);
                    if !parser.match_kind(TokenKind::Comma) {
                        break;
                    }
                }
            }
            parser.expect(
                TokenKind::CloseParen,
                "Expected ')' after function arguments",
            )?;

            expr = Expr::Call(CallExpr {
                callee: callee.name,
                arguments,
                position: callee.position,
            });
        }
    }

    loop {
        let operator_position = parser.get_position();
        let Some(operator) = parser.match_any(POSTFIX_OPERATORS) else {
            break;
        };

        expr = Expr::Unary(UnaryExpr {
            operator,
            operand: Box::new(expr),
            postfix: true,
            position: operator_position,
        });
    }

    Ok(expr)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    let expr = match token.kind {
        TokenKind::Literal if token.lexeme.contains('.') => {
            let value = token.lexeme.parse::<f64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.lexeme.clone(),
                    },
                    token.position.clone(),
                )
            })?;
            Expr::Double(DoubleExpr {
                value,
                position: token.position,
            })
        }
        TokenKind::Literal => {
            let value = token.lexeme.parse::<i64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.lexeme.clone(),
                    },
                    token.position.clone(),
                )
            })?;
            Expr::Int(IntExpr {
                value,
                position: token.position,
            })
        }
        TokenKind::StringLiteral => Expr::String(StringExpr {
            value: decode_escapes(&token.lexeme),
            position: token.position,
        }),
        TokenKind::CharLiteral => {
            let value = decode_escapes(&token.lexeme).chars().next().ok_or_else(|| {
                Error::new(
                    ErrorImpl::ExpectedExpression {
                        found: token.lexeme.clone(),
                    },
                    token.position.clone(),
                )
            })?;
            Expr::Char(CharExpr {
                value,
                position: token.position,
            })
        }
        TokenKind::True | TokenKind::False => Expr::Bool(BoolExpr {
            value: token.kind == TokenKind::True,
            position: token.position,
        }),
        TokenKind::Identifier => Expr::Variable(VariableExpr {
            name: token.lexeme,
            position: token.position,
        }),
        TokenKind::OpenParen => {
            parser.advance();
            let inner = parse_expr(parser)?;
            parser.expect(TokenKind::CloseParen, "Expected ')' after expression")?;
            return Ok(inner);
        }
        _ => {
            return Err(Error::new(
                ErrorImpl::ExpectedExpression {
                    found: token.lexeme,
                },
                token.position,
            ))
        }
    };

    parser.advance();
    Ok(expr)
}

/// Resolves backslash escapes in a string or char lexeme.
/// An unknown escape stands for the escaped character itself.
pub fn decode_escapes(raw: &str) -> String {
    let mut decoded = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }

        match chars.next() {
            Some('n') => decoded.push('\n'),
            Some('t') => decoded.push('\t'),
            Some('r') => decoded.push('\r'),
            Some('0') => decoded.push('\0'),
            Some(other) => decoded.push(other),
            None => decoded.push('\\'),
        }
    }

    decoded
}
