use crate::{
    ast::{Expr, Identifier},
    interpreter::{
        lexer::TokenKind,
        parser::{
            binary::Precedence,
            core::{ParseResult, Parser},
        },
    },
};

impl Parser<'_> {
    /// Parses a comma-separated list of expressions up to `closing`.
    ///
    /// This utility is shared by array literals and call arguments. The
    /// current token is the opening delimiter; on success the closing
    /// delimiter is the current token. An immediately encountered closing
    /// token produces an empty list.
    ///
    /// Grammar (simplified): `list := (expression ("," expression)*)? closing`
    ///
    /// # Errors
    /// Fails if an element does not parse or the closing token is missing.
    pub(super) fn parse_expression_list(&mut self, closing: TokenKind) -> ParseResult<Vec<Expr>> {
        let mut items = Vec::new();

        if self.peek_is(closing) {
            self.advance();
            return Ok(items);
        }

        self.advance();
        items.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.advance();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(closing)?;
        Ok(items)
    }

    /// Parses the parameter list of a function literal; the current token is
    /// `(` and on success it is the closing `)`.
    ///
    /// # Errors
    /// Fails if a parameter is not an identifier or the list is not closed.
    pub(super) fn parse_parameters(&mut self) -> ParseResult<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.advance();
            return Ok(parameters);
        }

        self.expect_peek(TokenKind::Ident)?;
        parameters.push(Identifier::new(self.current.literal.clone()));

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.expect_peek(TokenKind::Ident)?;
            parameters.push(Identifier::new(self.current.literal.clone()));
        }

        self.expect_peek(TokenKind::RParen)?;
        Ok(parameters)
    }
}
