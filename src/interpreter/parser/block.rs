use crate::{
    ast::BlockStatement,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a block delimited by braces.
    ///
    /// The current token must be the opening `{`. Statements are parsed until
    /// the matching `}`, which becomes the current token. An empty block is
    /// valid.
    ///
    /// Grammar: `block := "{" statement* "}"`
    ///
    /// # Errors
    /// Fails if a statement inside the block does not parse, or if the input
    /// ends before the closing brace.
    pub(super) fn parse_block(&mut self) -> ParseResult<BlockStatement> {
        let mut block = BlockStatement::default();
        self.advance();

        while !self.current_is(TokenKind::RBrace) {
            if self.current_is(TokenKind::Eof) {
                return Err(ParseError::UnexpectedToken { expected: TokenKind::RBrace,
                                                         found:    TokenKind::Eof, });
            }

            block.statements.push(self.parse_statement()?);
            self.advance();
        }

        Ok(block)
    }
}
