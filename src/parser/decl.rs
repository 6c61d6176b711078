use crate::{
    ast::declarations::{Function, Item, Prototype, ANONYMOUS_FUNCTION_NAME},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{expr::parse_expression, parser::Parser};

/// Parses the next top-level construct, skipping stray `;` separators.
///
/// Returns `None` at end of input. On failure nothing is skipped beyond
/// what the failing rule consumed; recovery is left to the caller.
pub fn parse_item(parser: &mut Parser) -> Option<Result<Item, Error>> {
    loop {
        match parser.current_token_kind() {
            TokenKind::EOF => return None,
            TokenKind::Char(';') => {
                parser.advance();
            }
            TokenKind::Def => return Some(parse_definition(parser).map(Item::Definition)),
            TokenKind::Extern => return Some(parse_extern(parser).map(Item::Extern)),
            _ => return Some(parse_top_level_expression(parser).map(Item::TopLevelExpr)),
        }
    }
}

/// prototype ::= identifier '(' identifier* ')'
pub fn parse_prototype(parser: &mut Parser) -> Result<Prototype, Error> {
    if parser.current_token_kind() != TokenKind::Identifier {
        return Err(Error::new(
            ErrorImpl::ExpectedFunctionName {
                token: parser.describe_current(),
            },
            parser.get_position(),
        ));
    }

    let name = parser.identifier_text().to_string();
    if name == ANONYMOUS_FUNCTION_NAME {
        return Err(Error::new(
            ErrorImpl::ReservedFunctionName { name },
            parser.get_position(),
        ));
    }

    let start = parser.get_position();
    parser.advance();

    if parser.current_token_kind() != TokenKind::Char('(') {
        return Err(Error::new(
            ErrorImpl::ExpectedPrototypeOpenParen {
                token: parser.describe_current(),
            },
            parser.get_position(),
        ));
    }
    parser.advance();

    let mut params = vec![];
    while parser.current_token_kind() == TokenKind::Identifier {
        params.push(parser.identifier_text().to_string());
        parser.advance();
    }

    if parser.current_token_kind() != TokenKind::Char(')') {
        return Err(Error::new(
            ErrorImpl::ExpectedPrototypeCloseParen {
                token: parser.describe_current(),
            },
            parser.get_position(),
        ));
    }
    let end = parser.current_token().span.end.clone();
    parser.advance();

    Ok(Prototype {
        name,
        params,
        span: Span { start, end },
    })
}

/// definition ::= 'def' prototype expression
pub fn parse_definition(parser: &mut Parser) -> Result<Function, Error> {
    parser.advance();
    let prototype = parse_prototype(parser)?;
    let body = parse_expression(parser)?;

    Ok(Function { prototype, body })
}

/// external ::= 'extern' prototype
pub fn parse_extern(parser: &mut Parser) -> Result<Prototype, Error> {
    parser.advance();
    parse_prototype(parser)
}

/// Wraps a bare expression in a nameless, parameterless function.
pub fn parse_top_level_expression(parser: &mut Parser) -> Result<Function, Error> {
    let body = parse_expression(parser)?;

    let prototype = Prototype {
        name: ANONYMOUS_FUNCTION_NAME.to_string(),
        params: vec![],
        span: body.get_span().clone(),
    };

    Ok(Function { prototype, body })
}
