use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, CallExpr, NumberExpr, VariableExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::parser::Parser;

/// expression ::= primary (binop primary)*
pub fn parse_expression(parser: &mut Parser) -> Result<Expr, Error> {
    let lhs = parse_primary(parser)?;
    parse_binary_rhs(parser, 0, lhs)
}

pub fn parse_primary(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier => parse_identifier_expr(parser),
        TokenKind::Number => parse_number_expr(parser),
        TokenKind::Char('(') => parse_paren_expr(parser),
        _ => {
            let error = Error::new(
                ErrorImpl::UnknownToken {
                    token: parser.describe_current(),
                },
                parser.get_position(),
            );
            // The offending token is dropped so a retry starts after it.
            parser.advance();
            Err(error)
        }
    }
}

/// Precedence climbing. Folds `(op primary)` pairs onto `lhs` while the
/// operator binds at least as tightly as `min_precedence`.
pub fn parse_binary_rhs(
    parser: &mut Parser,
    min_precedence: i32,
    mut lhs: Expr,
) -> Result<Expr, Error> {
    loop {
        let token_precedence = parser.current_precedence();
        if token_precedence < min_precedence {
            return Ok(lhs);
        }

        let TokenKind::Char(op) = parser.current_token_kind() else {
            return Ok(lhs);
        };
        parser.advance();

        let mut rhs = parse_primary(parser)?;

        // A tighter operator after rhs takes rhs as its own lhs first.
        if token_precedence < parser.current_precedence() {
            rhs = parse_binary_rhs(parser, token_precedence + 1, rhs)?;
        }

        let span = Span {
            start: lhs.get_span().start.clone(),
            end: rhs.get_span().end.clone(),
        };

        lhs = Expr::Binary(BinaryExpr {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            span,
        });
    }
}

fn parse_number_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let value = parser.numeric_value();
    let span = parser.current_token().span.clone();
    parser.advance();

    Ok(Expr::Number(NumberExpr { value, span }))
}

fn parse_paren_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expression(parser)?;

    if parser.current_token_kind() != TokenKind::Char(')') {
        return Err(Error::new(
            ErrorImpl::ExpectedCloseParen {
                token: parser.describe_current(),
            },
            parser.get_position(),
        ));
    }
    parser.advance();

    Ok(expr)
}

/// identifier | identifier '(' (expression (',' expression)*)? ')'
fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name = parser.identifier_text().to_string();
    let name_span = parser.current_token().span.clone();
    parser.advance();

    if parser.current_token_kind() != TokenKind::Char('(') {
        return Ok(Expr::Variable(VariableExpr {
            name,
            span: name_span,
        }));
    }
    parser.advance();

    let mut args = vec![];
    if parser.current_token_kind() != TokenKind::Char(')') {
        loop {
            args.push(parse_expression(parser)?);

            if parser.current_token_kind() == TokenKind::Char(')') {
                break;
            }

            if parser.current_token_kind() != TokenKind::Char(',') {
                return Err(Error::new(
                    ErrorImpl::ExpectedArgumentListDelimiter {
                        token: parser.describe_current(),
                    },
                    parser.get_position(),
                ));
            }
            parser.advance();
        }
    }

    let end = parser.current_token().span.end.clone();
    parser.advance();

    Ok(Expr::Call(CallExpr {
        callee: name,
        args,
        span: Span {
            start: name_span.start,
            end,
        },
    }))
}
