use crate::{
    ast::{Identifier, Statement},
    interpreter::{
        lexer::TokenKind,
        parser::{
            binary::Precedence,
            core::{ParseResult, Parser},
        },
    },
};

impl Parser<'_> {
    /// Parses a single statement starting at the current token.
    ///
    /// A statement may be one of:
    /// - a const declaration, `const <identifier> = <expression>`;
    /// - a return statement, `return <expression>`;
    /// - an expression used as a statement.
    ///
    /// A trailing `;` is optional in every case. On success the current token
    /// is the last token of the statement.
    pub(super) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current.kind {
            TokenKind::Const => self.parse_const_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `const <identifier> = <expression>`.
    ///
    /// # Errors
    /// Fails if the identifier or the `=` is missing, or if the initializer
    /// does not parse.
    fn parse_const_statement(&mut self) -> ParseResult<Statement> {
        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(self.current.literal.clone());

        self.expect_peek(TokenKind::Assign)?;
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Const { name, value })
    }

    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Return { value })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Expression(expr))
    }
}
