use tracing::{debug, trace};

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::lexer::{Scanner, Token, TokenKind},
};

/// Result type used by the parse rules.
pub type ParseResult<T> = Result<T, ParseError>;

/// Builds an AST from the token stream of a [`Scanner`].
///
/// The parser keeps the current token and one token of lookahead. Syntax
/// errors do not abort parsing: a statement that fails to parse is dropped,
/// its error is recorded, and parsing resumes after the next `;`.
///
/// # Example
/// ```
/// use quill::interpreter::{lexer::Scanner, parser::core::Parser};
///
/// let mut parser = Parser::new(Scanner::new("const x = 1 + 2 * 3;"));
/// let program = parser.parse_program();
///
/// assert!(parser.errors().is_empty());
/// assert_eq!(program.to_string(), "const x = (1 + (2 * 3))");
/// ```
pub struct Parser<'src> {
    scanner:            Scanner<'src>,
    pub(super) current: Token,
    pub(super) peek:    Token,
    errors:             Vec<ParseError>,
    // Delimiters opened and not yet closed before the current token.
    depth:              usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser and primes the current and lookahead tokens.
    pub fn new(mut scanner: Scanner<'src>) -> Self {
        let current = scanner.next_token();
        let peek = scanner.next_token();
        Self { scanner,
               current,
               peek,
               errors: Vec::new(),
               depth: 0 }
    }

    /// Parses statements until the end of input.
    ///
    /// Failed statements are not part of the returned program; their errors
    /// are available through [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::Eof) {
            let start_depth = self.depth;
            match self.parse_statement() {
                Ok(statement) => program.statements.push(statement),
                Err(error) => {
                    debug!(%error, "syntax error");
                    self.errors.push(error);
                    self.synchronize(start_depth);
                },
            }
            self.advance();
        }

        program
    }

    /// The syntax errors collected so far, in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser, returning the collected syntax errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Shifts the lookahead into the current token and reads a new lookahead.
    pub(super) fn advance(&mut self) {
        match self.current.kind {
            TokenKind::LBrace | TokenKind::LParen | TokenKind::LBracket => self.depth += 1,
            TokenKind::RBrace | TokenKind::RParen | TokenKind::RBracket => {
                self.depth = self.depth.saturating_sub(1);
            },
            _ => {},
        }
        let next = self.scanner.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
        trace!(kind = %self.current.kind, literal = %self.current.literal, "advance");
    }

    pub(super) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(super) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances if the lookahead is `kind`, otherwise fails without
    /// consuming anything.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] naming the expected and the
    /// actual token kind.
    pub(super) fn expect_peek(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.peek_is(kind) {
            self.advance();
            return Ok(());
        }

        Err(ParseError::UnexpectedToken { expected: kind,
                                          found:    self.peek.kind, })
    }

    /// Consumes `;` if it is the lookahead.
    pub(super) fn skip_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }
    }

    /// Skips the rest of a failed statement, stopping on its `;` or at the
    /// end of input.
    ///
    /// Only a `;` at `depth`, the nesting level where the statement began,
    /// ends it; a `;` inside one of its blocks, groups or lists does not.
    fn synchronize(&mut self, depth: usize) {
        while !self.current_is(TokenKind::Eof)
              && !(self.current_is(TokenKind::Semicolon) && self.depth == depth)
        {
            self.advance();
        }
    }
}
