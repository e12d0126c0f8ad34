use std::fmt;

use logos::Logos;
use tracing::trace;

/// The closed set of lexical categories.
///
/// Every token the [`Scanner`] produces carries one of these kinds together
/// with the literal source text it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input. Produced forever once the source is exhausted.
    Eof,
    /// A character that does not start any known token.
    Illegal,
    /// Identifier tokens; variable names such as `x` or `new_adder`.
    Ident,
    /// Integer literal tokens, such as `42`.
    Int,
    /// String literal tokens, such as `"hello"`.
    Str,
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `fn`
    Function,
    /// `const`
    Const,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Eof => "EOF",
            Self::Illegal => "ILLEGAL",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Str => "STRING",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Function => "FUNCTION",
            Self::Const => "CONST",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
        };
        f.write_str(name)
    }
}

/// A lexical token: its kind plus the literal text it was scanned from.
///
/// String tokens carry their contents without the surrounding quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The lexical category.
    pub kind:    TokenKind,
    /// The source text of the token.
    pub literal: String,
}

impl Token {
    /// Creates a token from a kind and its literal text.
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self { kind,
               literal: literal.into() }
    }

    /// The end-of-input token.
    #[must_use]
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }
}

/// Raw lexemes recognized by logos. Keywords win over identifiers of the same
/// length; identifiers are letters and underscores only.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum Lexeme {
    #[token("fn")]
    Function,
    #[token("const")]
    Const,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,
    #[regex(r"[a-zA-Z_]+")]
    Ident,
    #[regex(r"[0-9]+")]
    Int,
    // An unterminated string runs to the end of the input.
    #[regex(r#""[^"]*""#)]
    #[regex(r#""[^"]*"#)]
    Str,
    #[token("==")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("!")]
    Bang,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
}

impl From<Lexeme> for TokenKind {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Function => Self::Function,
            Lexeme::Const => Self::Const,
            Lexeme::True => Self::True,
            Lexeme::False => Self::False,
            Lexeme::If => Self::If,
            Lexeme::Else => Self::Else,
            Lexeme::Return => Self::Return,
            Lexeme::Ident => Self::Ident,
            Lexeme::Int => Self::Int,
            Lexeme::Str => Self::Str,
            Lexeme::Eq => Self::Eq,
            Lexeme::NotEq => Self::NotEq,
            Lexeme::Assign => Self::Assign,
            Lexeme::Plus => Self::Plus,
            Lexeme::Minus => Self::Minus,
            Lexeme::Bang => Self::Bang,
            Lexeme::Asterisk => Self::Asterisk,
            Lexeme::Slash => Self::Slash,
            Lexeme::Lt => Self::Lt,
            Lexeme::Gt => Self::Gt,
            Lexeme::Comma => Self::Comma,
            Lexeme::Semicolon => Self::Semicolon,
            Lexeme::Colon => Self::Colon,
            Lexeme::LParen => Self::LParen,
            Lexeme::RParen => Self::RParen,
            Lexeme::LBrace => Self::LBrace,
            Lexeme::RBrace => Self::RBrace,
            Lexeme::LBracket => Self::LBracket,
            Lexeme::RBracket => Self::RBracket,
        }
    }
}

/// Converts raw source text into a restartable stream of tokens.
///
/// The scanner never fails: characters that do not start a known token are
/// reified as [`TokenKind::Illegal`] tokens, and once the input is exhausted
/// every further call yields [`TokenKind::Eof`].
///
/// # Example
/// ```
/// use quill::interpreter::lexer::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("const x = 5;");
/// let kinds: Vec<TokenKind> = (0..6).map(|_| scanner.next_token().kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Const,
///                 TokenKind::Ident,
///                 TokenKind::Assign,
///                 TokenKind::Int,
///                 TokenKind::Semicolon,
///                 TokenKind::Eof]);
/// ```
pub struct Scanner<'src> {
    lexer: logos::Lexer<'src, Lexeme>,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer: Lexeme::lexer(source) }
    }

    /// Produces the next token of the input.
    pub fn next_token(&mut self) -> Token {
        let token = match self.lexer.next() {
            None => Token::eof(),
            Some(Err(())) => Token::new(TokenKind::Illegal, self.lexer.slice()),
            Some(Ok(Lexeme::Str)) => Token::new(TokenKind::Str, string_contents(self.lexer.slice())),
            Some(Ok(lexeme)) => Token::new(lexeme.into(), self.lexer.slice()),
        };
        trace!(kind = %token.kind, literal = %token.literal, "scan");
        token
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, the end of input.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}

/// Strips the opening quote and, when present, the closing quote.
fn string_contents(slice: &str) -> &str {
    let inner = slice.strip_prefix('"').unwrap_or(slice);
    if slice.len() >= 2 {
        inner.strip_suffix('"').unwrap_or(inner)
    } else {
        inner
    }
}
