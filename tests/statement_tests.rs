use monkey_parse::lexer::Lexer;
use monkey_parse::parser::{Parser, test_helper::*};

/// Parses `input` and fails the test on any parser error.
fn parse_ok(input: &str) -> monkey_parse::ast::Program {
    let lexer = Lexer::new(input.to_string());
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();
    check_parser_errors(&parser);
    program
}

#[test]
fn test_parsing_let_statements() {
    let input = r#"
let x = 5;
let y = 10;
let foobar = 838383;
"#;

    let program = parse_ok(input);

    assert_eq!(
        program.statements.len(),
        3,
        "program.statements does not contain 3 statements. got={}",
        program.statements.len()
    );

    let expected = ["x", "y", "foobar"];
    for (i, name) in expected.iter().enumerate() {
        test_let_statement(&program.statements[i], name);
    }
}

#[test]
fn test_let_statement_values() {
    let tests: Vec<(&str, &str, Expected)> = vec![
        ("let x = 5;", "x", 5.into()),
        ("let y = true;", "y", true.into()),
        ("let foobar = y;", "foobar", "y".into()),
    ];

    for (input, name, value) in tests {
        let program = parse_ok(input);
        assert_eq!(program.statements.len(), 1);

        test_let_statement(&program.statements[0], name);
        let let_stmt = match &program.statements[0] {
            monkey_parse::ast::Statement::Let(let_stmt) => let_stmt,
            other => panic!("not a LetStatement. got={:?}", other),
        };
        let value_expr = let_stmt.value.as_ref().expect("let value parsed");
        test_literal_expression(value_expr, value);
    }
}

#[test]
fn test_parsing_return_statements() {
    let input = r#"
return 5;
return 10;
return 993322;
"#;

    let program = parse_ok(input);

    assert_eq!(
        program.statements.len(),
        3,
        "program.statements does not contain 3 statements. got={}",
        program.statements.len()
    );

    for statement in &program.statements {
        test_return_statement(statement);
    }
}

#[test]
fn test_return_statement_values() {
    let tests: Vec<(&str, Expected)> = vec![
        ("return 5;", 5.into()),
        ("return true;", true.into()),
        ("return foobar;", "foobar".into()),
    ];

    for (input, value) in tests {
        let program = parse_ok(input);
        assert_eq!(program.statements.len(), 1);

        test_return_statement(&program.statements[0]);
        let return_stmt = match &program.statements[0] {
            monkey_parse::ast::Statement::Return(return_stmt) => return_stmt,
            other => panic!("not a ReturnStatement. got={:?}", other),
        };
        let value_expr = return_stmt.value.as_ref().expect("return value parsed");
        test_literal_expression(value_expr, value);
    }
}

#[test]
fn test_statements_render_back_to_source_shape() {
    let tests = vec![
        ("let x = 5;", "let x = 5;"),
        ("let x = 5", "let x = 5;"),
        ("return 2 + 3;", "return (2 + 3);"),
        ("let y = add(1, 2);", "let y = add(1, 2);"),
    ];

    for (input, expected) in tests {
        let program = parse_ok(input);
        assert_eq!(program.to_string(), expected, "input: {:?}", input);
    }
}
