//! Integration tests for complete scanning sessions.
//!
//! These tests drive the public library API end to end: full programs with
//! comments, keywords, identifiers, invalid characters and the symbol table,
//! plus the infix to postfix converter.

use lexico::{
    lexer::{
        scanner::{tokenize, Scanner},
        tokens::{TokenKind, TokenValue},
    },
    postfix::postfix::infix_to_postfix,
};

#[test]
fn test_scan_validation_program() {
    let source = r#"
    /* cabecalho do programa
       em um comentario de bloco
    */

    // declaracao de variaveis
    media_final = 0.0;

    se (nota1 >= 7.5) entao
        contador = contador + 1;
    senao
        valor_invalido = 10 @ 100;

    faca calculo_final;
    "#;

    let (tokens, diagnostics) = tokenize(source);

    // The `@` on line 12 is the only lexical error.
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].get_error_name(), "InvalidCharacter");
    assert_eq!(diagnostics[0].get_line(), 12);

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            // media_final = 0.0;
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Number,
            TokenKind::Semicolon,
            // se (nota1 >= 7.5) entao
            TokenKind::Keyword,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::RelOp,
            TokenKind::Number,
            TokenKind::CloseParen,
            TokenKind::Keyword,
            // contador = contador + 1;
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Identifier,
            TokenKind::ArithOp,
            TokenKind::Number,
            TokenKind::Semicolon,
            // senao
            TokenKind::Keyword,
            // valor_invalido = 10 @ 100;
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Number,
            TokenKind::Number,
            TokenKind::Semicolon,
            // faca calculo_final;
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );

    // The discarded `@` leaves both surrounding numbers intact.
    assert_eq!(tokens[20].value.as_number(), Some(10.0));
    assert_eq!(tokens[21].value.as_number(), Some(100.0));
}

#[test]
fn test_symbol_table_after_session() {
    let source = "se (nota1 >= 7.5) entao contador = contador + 1;";
    let mut scanner = Scanner::new(source);

    while !scanner.next_token().is_eof() {}

    assert_eq!(scanner.symbols().identifiers(), vec!["contador", "nota1"]);

    // Keywords keep their seeded entries.
    let entry = scanner.symbols().lookup("se").unwrap();
    assert_eq!(entry.kind, TokenKind::Keyword);
    assert_eq!(entry.value, TokenValue::Lexeme("se".to_string()));
}

#[test]
fn test_sessions_run_independently() {
    let mut first = Scanner::new("media = 1;");
    let mut second = Scanner::new("soma = 2;");

    while !first.next_token().is_eof() {}
    while !second.next_token().is_eof() {}

    assert_eq!(first.symbols().identifiers(), vec!["media"]);
    assert_eq!(second.symbols().identifiers(), vec!["soma"]);
}

#[test]
fn test_scan_reports_every_invalid_character() {
    let (tokens, diagnostics) = tokenize("a # b $ c");

    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].to_string(), "line 1: invalid character: '#'");
    assert_eq!(diagnostics[1].to_string(), "line 1: invalid character: '$'");

    // Three identifiers plus the sentinel.
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[3].kind, TokenKind::Eof);
}

#[test]
fn test_postfix_conversion_examples() {
    assert_eq!(infix_to_postfix("3 + 4 * 2").output, "3 4 2 * +");
    assert_eq!(infix_to_postfix("(3 + 4) * 2").output, "3 4 + 2 *");
    assert_eq!(
        infix_to_postfix("10 + 3 * 5 / (16 - 4)").output,
        "10 3 5 * 16 4 - / +"
    );
    assert_eq!(
        infix_to_postfix("20 - 5 * 2 + 8 / 4").output,
        "20 5 2 * - 8 4 / +"
    );
}
