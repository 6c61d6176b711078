//! Unit tests for the parser module.

use crate::{
    ast::{
        ast::Expr,
        declarations::{Item, ANONYMOUS_FUNCTION_NAME},
    },
    errors::errors::ErrorImpl,
    lexer::{lexer::Lexer, tokens::TokenKind},
};

use super::{
    decl::{parse_definition, parse_extern, parse_item, parse_top_level_expression},
    expr::parse_expression,
    lookups::{parse_precedence_override, PrecedenceTable, NOT_AN_OPERATOR},
    parser::{parse, parse_items, Parser},
};

fn parser_for(source: &str) -> Parser<'_> {
    Parser::new(Lexer::new(source, Some("test.ks".to_string())), PrecedenceTable::default())
}

fn render(source: &str) -> String {
    let mut parser = parser_for(source);
    parse_expression(&mut parser).unwrap().to_string()
}

fn error_kind(source: &str) -> ErrorImpl {
    let mut parser = parser_for(source);
    parse_expression(&mut parser).unwrap_err().get_kind().clone()
}

#[test]
fn test_parse_number_and_variable() {
    assert_eq!(render("42"), "42");
    assert_eq!(render("2.5"), "2.5");
    assert_eq!(render("x"), "x");
}

#[test]
fn test_multiplication_binds_tighter() {
    assert_eq!(render("1 + 2 * 3"), "(+ 1 (* 2 3))");
    assert_eq!(render("1 * 2 + 3"), "(+ (* 1 2) 3)");
}

#[test]
fn test_equal_precedence_is_left_associative() {
    assert_eq!(render("1 - 2 - 3"), "(- (- 1 2) 3)");
    assert_eq!(render("a + b - c + d"), "(+ (- (+ a b) c) d)");
}

#[test]
fn test_mixed_precedence_levels() {
    assert_eq!(render("a < b + c * d - e"), "(< a (- (+ b (* c d)) e))");
    assert_eq!(render("a * b < c"), "(< (* a b) c)");
}

#[test]
fn test_binary_tree_shape() {
    let mut parser = parser_for("1 + 2 * 3");
    let expr = parse_expression(&mut parser).unwrap();

    let Expr::Binary(plus) = expr else {
        panic!("Expected binary expression");
    };
    assert_eq!(plus.op, '+');
    assert!(matches!(*plus.lhs, Expr::Number(ref n) if n.value == 1.0));
    assert!(matches!(*plus.rhs, Expr::Binary(ref times) if times.op == '*'));
}

#[test]
fn test_parentheses_are_transparent() {
    assert_eq!(render("(1 + 2) * 3"), "(* (+ 1 2) 3)");
    assert_eq!(render("((x))"), "x");
    assert_eq!(render("(1)"), render("1"));
}

#[test]
fn test_parse_calls() {
    assert_eq!(render("foo(1, 2+3)"), "foo(1, (+ 2 3))");
    assert_eq!(render("foo()"), "foo()");
    assert_eq!(render("f(g(x), (y))"), "f(g(x), y)");

    let mut parser = parser_for("foo(1, 2+3)");
    match parse_expression(&mut parser).unwrap() {
        Expr::Call(call) => {
            assert_eq!(call.callee, "foo");
            assert_eq!(call.args.len(), 2);
            assert!(matches!(call.args[0], Expr::Number(ref n) if n.value == 1.0));
            assert!(matches!(call.args[1], Expr::Binary(ref b) if b.op == '+'));
        }
        other => panic!("Expected call, got {:?}", other),
    }
}

#[test]
fn test_comments_do_not_change_the_tree() {
    assert_eq!(render("1 + 2 # comment\n+ 3"), render("1 + 2 + 3"));
}

#[test]
fn test_call_span_covers_parentheses() {
    let mut parser = parser_for("  foo(1)");
    let expr = parse_expression(&mut parser).unwrap();

    assert_eq!(expr.get_span().start.0, 2);
    assert_eq!(expr.get_span().end.0, 8);
}

#[test]
fn test_unknown_operator_ends_expression() {
    let mut parser = parser_for("1 % 2");
    assert_eq!(parse_expression(&mut parser).unwrap().to_string(), "1");
    assert_eq!(parser.current_token_kind(), TokenKind::Char('%'));
}

#[test]
fn test_missing_close_paren() {
    assert!(matches!(error_kind("(1 + 2"), ErrorImpl::ExpectedCloseParen { .. }));
}

#[test]
fn test_missing_argument_delimiter() {
    let kind = error_kind("foo(1 2)");
    assert_eq!(kind.to_string(), "expected ')' or ',' in argument list");
    assert_eq!(
        kind,
        ErrorImpl::ExpectedArgumentListDelimiter {
            token: "2".to_string()
        }
    );
}

#[test]
fn test_trailing_comma_in_call() {
    assert!(matches!(error_kind("foo(1,)"), ErrorImpl::UnknownToken { .. }));
}

#[test]
fn test_unknown_token_is_consumed() {
    let mut parser = parser_for(") 4");
    let error = parse_expression(&mut parser).unwrap_err();

    assert_eq!(error.to_string(), "unknown token when expecting an expression");
    assert_eq!(error.get_position().0, 0);
    assert_eq!(parser.current_token_kind(), TokenKind::Number);
}

#[test]
fn test_error_position_points_at_token() {
    let mut parser = parser_for("1 +\n  )");
    let error = parse_expression(&mut parser).unwrap_err();
    assert_eq!(error.get_position().0, 6);
}

#[test]
fn test_current_precedence() {
    let mut parser = parser_for("+ * < - x 1 % ;");

    for expected in [20, 40, 10, 20] {
        assert_eq!(parser.current_precedence(), expected);
        parser.advance();
    }
    for _ in 0..4 {
        assert_eq!(parser.current_precedence(), NOT_AN_OPERATOR);
        parser.advance();
    }
    assert_eq!(parser.current_token_kind(), TokenKind::EOF);
    assert_eq!(parser.current_precedence(), NOT_AN_OPERATOR);
}

#[test]
fn test_empty_precedence_table() {
    let mut parser = Parser::new(Lexer::new("1 + 2", None), PrecedenceTable::empty());

    assert_eq!(parse_expression(&mut parser).unwrap().to_string(), "1");
    assert_eq!(parser.current_token_kind(), TokenKind::Char('+'));
}

#[test]
fn test_custom_precedence() {
    let mut table = PrecedenceTable::default();
    table.insert('/', 40);
    table.insert('^', 0);

    let mut parser = Parser::new(Lexer::new("a / b + c", None), table.clone());
    assert_eq!(parse_expression(&mut parser).unwrap().to_string(), "(+ (/ a b) c)");

    let mut parser = Parser::new(Lexer::new("a ^ b", None), table);
    assert_eq!(parse_expression(&mut parser).unwrap().to_string(), "a");
    assert_eq!(parser.current_token_kind(), TokenKind::Char('^'));
    assert_eq!(parser.current_precedence(), NOT_AN_OPERATOR);
}

#[test]
fn test_precedence_override_parsing() {
    assert_eq!(parse_precedence_override("/=40"), Ok(('/', 40)));
    assert_eq!(parse_precedence_override("==5"), Ok(('=', 5)));

    for bad in ["", "/", "/40", "/=", "/=0", "/=-3", "/=x", "a=10", "(=10", "//=10"] {
        assert!(
            matches!(parse_precedence_override(bad), Err(ErrorImpl::InvalidPrecedence { .. })),
            "{:?} should be rejected",
            bad
        );
    }
}

#[test]
fn test_parse_extern() {
    let mut parser = parser_for("extern foo(a b c)");
    let prototype = parse_extern(&mut parser).unwrap();

    assert_eq!(prototype.name, "foo");
    assert_eq!(prototype.params, vec!["a", "b", "c"]);
    assert_eq!(prototype.to_string(), "foo(a b c)");
    assert_eq!(parser.current_token_kind(), TokenKind::EOF);
}

#[test]
fn test_parse_extern_without_params() {
    let mut parser = parser_for("extern now()");
    let prototype = parse_extern(&mut parser).unwrap();

    assert_eq!(prototype.name, "now");
    assert!(prototype.params.is_empty());
}

#[test]
fn test_duplicate_params_are_kept() {
    let mut parser = parser_for("extern f(x x)");
    assert_eq!(parse_extern(&mut parser).unwrap().params, vec!["x", "x"]);
}

#[test]
fn test_parse_definition() {
    let mut parser = parser_for("def add(x y) x + y * 2");
    let function = parse_definition(&mut parser).unwrap();

    assert_eq!(function.prototype.name, "add");
    assert_eq!(function.prototype.params, vec!["x", "y"]);
    assert_eq!(function.body.to_string(), "(+ x (* y 2))");
    assert_eq!(function.to_string(), "def add(x y) (+ x (* y 2))");
}

#[test]
fn test_prototype_errors() {
    let cases = [
        ("def 1(x) x", "Expected function name in prototype"),
        ("def f x", "Expected '(' in prototype"),
        ("def f(a, b) a", "Expected ')' in prototype"),
        ("def f(a", "Expected ')' in prototype"),
        ("extern", "Expected function name in prototype"),
    ];

    for (source, message) in cases {
        let mut parser = parser_for(source);
        let result = match parser.current_token_kind() {
            TokenKind::Def => parse_definition(&mut parser).map(|_| ()),
            _ => parse_extern(&mut parser).map(|_| ()),
        };
        assert_eq!(result.unwrap_err().to_string(), message, "for {:?}", source);
    }
}

#[test]
fn test_anonymous_name_is_reserved() {
    let mut parser = parser_for("def __anon_expr() 1");
    let error = parse_definition(&mut parser).unwrap_err();

    assert_eq!(error.get_error_name(), "ReservedFunctionName");
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_parse_top_level_expression() {
    let mut parser = parser_for("f(1) * 2");
    let function = parse_top_level_expression(&mut parser).unwrap();

    assert_eq!(function.prototype.name, ANONYMOUS_FUNCTION_NAME);
    assert!(function.prototype.params.is_empty());
    assert!(function.prototype.is_anonymous());
    assert_eq!(function.to_string(), "(* f(1) 2)");
}

#[test]
fn test_parse_item_dispatch() {
    let mut parser = parser_for(";; def f(x) x; extern g(a); f(2) ;");

    assert!(matches!(parse_item(&mut parser), Some(Ok(Item::Definition(_)))));
    assert!(matches!(parse_item(&mut parser), Some(Ok(Item::Extern(_)))));
    assert!(matches!(parse_item(&mut parser), Some(Ok(Item::TopLevelExpr(_)))));
    assert!(parse_item(&mut parser).is_none());
    assert!(parse_item(&mut parser).is_none());
}

#[test]
fn test_parse_recovers_after_stray_paren() {
    let (items, errors) = parse(")", None, PrecedenceTable::default());

    assert!(items.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "unknown token when expecting an expression");

    // The `)` is dropped by the failing rule and `4` by the recovery step.
    let (items, errors) = parse(") 4; 5", None, PrecedenceTable::default());
    assert_eq!(errors.len(), 1);
    let rendered: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    assert_eq!(rendered, vec!["5"]);
}

#[test]
fn test_parse_skips_token_after_failure() {
    let (items, errors) = parse("extern 1; 2 + 3", None, PrecedenceTable::default());

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "ExpectedFunctionName");
    let rendered: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    assert_eq!(rendered, vec!["(+ 2 3)"]);
}

#[test]
fn test_parse_skips_failing_token_in_group() {
    let (items, errors) = parse("(1 2) + 3", None, PrecedenceTable::default());

    let names: Vec<&str> = errors.iter().map(|error| error.get_error_name()).collect();
    assert_eq!(names, vec!["ExpectedCloseParen", "UnknownToken"]);
    let rendered: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    assert_eq!(rendered, vec!["3"]);
}

#[test]
fn test_parse_items_reports_in_source_order() {
    let mut parser = parser_for("1; extern 2; def f(x) x");
    let mut reported = vec![];

    parse_items(&mut parser, |result| {
        reported.push(match result {
            Ok(item) => item.to_string(),
            Err(error) => error.get_error_name().to_string(),
        })
    });

    assert_eq!(reported, vec!["1", "ExpectedFunctionName", "def f(x) x"]);
    assert_eq!(parser.current_token_kind(), TokenKind::EOF);
}

#[test]
fn test_parse_error_at_end_of_input_terminates() {
    let (items, errors) = parse("def f(x)", None, PrecedenceTable::default());

    assert!(items.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "UnknownToken");
}
