use pretty_assertions::assert_eq;
use quill::interpreter::lexer::{Scanner, TokenKind};

fn scan(source: &str) -> Vec<(TokenKind, String)> {
    Scanner::new(source).map(|token| (token.kind, token.literal)).collect()
}

fn tokens(expected: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
    expected.iter().map(|(kind, literal)| (*kind, (*literal).to_string())).collect()
}

#[test]
fn declarations_and_functions() {
    use TokenKind::*;

    let source = "const five = 5;
const add = fn(x, y) {
  x + y;
};
const result = add(five, 10);";

    assert_eq!(scan(source),
               tokens(&[(Const, "const"),
                        (Ident, "five"),
                        (Assign, "="),
                        (Int, "5"),
                        (Semicolon, ";"),
                        (Const, "const"),
                        (Ident, "add"),
                        (Assign, "="),
                        (Function, "fn"),
                        (LParen, "("),
                        (Ident, "x"),
                        (Comma, ","),
                        (Ident, "y"),
                        (RParen, ")"),
                        (LBrace, "{"),
                        (Ident, "x"),
                        (Plus, "+"),
                        (Ident, "y"),
                        (Semicolon, ";"),
                        (RBrace, "}"),
                        (Semicolon, ";"),
                        (Const, "const"),
                        (Ident, "result"),
                        (Assign, "="),
                        (Ident, "add"),
                        (LParen, "("),
                        (Ident, "five"),
                        (Comma, ","),
                        (Int, "10"),
                        (RParen, ")"),
                        (Semicolon, ";")]));
}

#[test]
fn operators_and_keywords() {
    use TokenKind::*;

    let source = "!-/*5; 5 < 10 > 5;
if (5 < 10) { return true; } else { return false; }
10 == 10; 10 != 9;";

    assert_eq!(scan(source),
               tokens(&[(Bang, "!"),
                        (Minus, "-"),
                        (Slash, "/"),
                        (Asterisk, "*"),
                        (Int, "5"),
                        (Semicolon, ";"),
                        (Int, "5"),
                        (Lt, "<"),
                        (Int, "10"),
                        (Gt, ">"),
                        (Int, "5"),
                        (Semicolon, ";"),
                        (If, "if"),
                        (LParen, "("),
                        (Int, "5"),
                        (Lt, "<"),
                        (Int, "10"),
                        (RParen, ")"),
                        (LBrace, "{"),
                        (Return, "return"),
                        (True, "true"),
                        (Semicolon, ";"),
                        (RBrace, "}"),
                        (Else, "else"),
                        (LBrace, "{"),
                        (Return, "return"),
                        (False, "false"),
                        (Semicolon, ";"),
                        (RBrace, "}"),
                        (Int, "10"),
                        (Eq, "=="),
                        (Int, "10"),
                        (Semicolon, ";"),
                        (Int, "10"),
                        (NotEq, "!="),
                        (Int, "9"),
                        (Semicolon, ";")]));
}

#[test]
fn strings_arrays_and_maps() {
    use TokenKind::*;

    assert_eq!(scan(r#""foobar" "foo bar" [1, 2]; {"foo": "bar"}"#),
               tokens(&[(Str, "foobar"),
                        (Str, "foo bar"),
                        (LBracket, "["),
                        (Int, "1"),
                        (Comma, ","),
                        (Int, "2"),
                        (RBracket, "]"),
                        (Semicolon, ";"),
                        (LBrace, "{"),
                        (Str, "foo"),
                        (Colon, ":"),
                        (Str, "bar"),
                        (RBrace, "}")]));
}

#[test]
fn empty_string_literal() {
    assert_eq!(scan(r#""""#), tokens(&[(TokenKind::Str, "")]));
}

#[test]
fn unterminated_string_runs_to_end_of_input() {
    assert_eq!(scan(r#"x = "abc"#),
               tokens(&[(TokenKind::Ident, "x"),
                        (TokenKind::Assign, "="),
                        (TokenKind::Str, "abc")]));
}

#[test]
fn identifiers_are_letters_and_underscores() {
    assert_eq!(scan("new_adder x1 _"),
               tokens(&[(TokenKind::Ident, "new_adder"),
                        (TokenKind::Ident, "x"),
                        (TokenKind::Int, "1"),
                        (TokenKind::Ident, "_")]));
}

#[test]
fn keywords_need_a_word_boundary() {
    assert_eq!(scan("iffy constant fn"),
               tokens(&[(TokenKind::Ident, "iffy"),
                        (TokenKind::Ident, "constant"),
                        (TokenKind::Function, "fn")]));
}

#[test]
fn unknown_characters_are_illegal_tokens() {
    assert_eq!(scan("1 @ 2 & 3"),
               tokens(&[(TokenKind::Int, "1"),
                        (TokenKind::Illegal, "@"),
                        (TokenKind::Int, "2"),
                        (TokenKind::Illegal, "&"),
                        (TokenKind::Int, "3")]));
}

#[test]
fn end_of_input_repeats() {
    let mut scanner = Scanner::new("  x  ");

    assert_eq!(scanner.next_token().kind, TokenKind::Ident);
    for _ in 0..3 {
        let token = scanner.next_token();
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.literal, "");
    }
}

#[test]
fn token_kind_names() {
    assert_eq!(TokenKind::Ident.to_string(), "IDENT");
    assert_eq!(TokenKind::Int.to_string(), "INT");
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
    assert_eq!(TokenKind::RBrace.to_string(), "}");
    assert_eq!(TokenKind::Function.to_string(), "FUNCTION");
}
