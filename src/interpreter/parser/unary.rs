use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionLiteral, Identifier, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            binary::Precedence,
            core::{ParseResult, Parser},
        },
    },
};

impl Parser<'_> {
    /// Parses the expression that starts at the current token.
    ///
    /// Dispatches on the token kind:
    /// - identifiers and integer, string and boolean literals
    /// - prefix operators `!` and `-`
    /// - parenthesized groups
    /// - `if` expressions
    /// - function literals
    /// - array literals (`[ ... ]`)
    /// - map literals (`{ ... }`)
    ///
    /// # Errors
    /// Returns [`ParseError::NoPrefixRule`] for tokens that cannot begin an
    /// expression.
    pub(super) fn parse_prefix(&mut self) -> ParseResult<Expr> {
        match self.current.kind {
            TokenKind::Ident => Ok(Expr::Identifier(Identifier::new(self.current.literal.clone()))),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::Str => Ok(Expr::Str(self.current.literal.clone())),
            TokenKind::True => Ok(Expr::Boolean(true)),
            TokenKind::False => Ok(Expr::Boolean(false)),
            TokenKind::Bang => self.parse_prefix_operator(UnaryOperator::Not),
            TokenKind::Minus => self.parse_prefix_operator(UnaryOperator::Negate),
            TokenKind::LParen => self.parse_grouped(),
            TokenKind::If => self.parse_if(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::LBracket => {
                let elements = self.parse_expression_list(TokenKind::RBracket)?;
                Ok(Expr::Array(elements))
            },
            TokenKind::LBrace => self.parse_map_literal(),
            kind => Err(ParseError::NoPrefixRule { kind }),
        }
    }

    fn parse_integer_literal(&self) -> ParseResult<Expr> {
        self.current
            .literal
            .parse()
            .map(Expr::Integer)
            .map_err(|_| ParseError::InvalidInteger { literal: self.current.literal.clone() })
    }

    /// Parses `<op><operand>`; the operand binds at prefix precedence, so
    /// `-a * b` is `((-a) * b)`.
    fn parse_prefix_operator(&mut self, op: UnaryOperator) -> ParseResult<Expr> {
        self.advance();
        let operand = self.parse_expression(Precedence::Prefix)?;

        Ok(Expr::Prefix { op,
                          operand: Box::new(operand) })
    }

    fn parse_grouped(&mut self) -> ParseResult<Expr> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        Ok(expr)
    }

    /// Parses an `if` expression with an optional `else` block.
    ///
    /// Syntax:
    /// ```text
    ///     if <condition> { ... }
    ///     if <condition> { ... } else { ... }
    /// ```
    /// The condition may be parenthesized or bare.
    fn parse_if(&mut self) -> ParseResult<Expr> {
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block()?;

        let alternative = if self.peek_is(TokenKind::Else) {
            self.advance();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Expr::If { condition: Box::new(condition),
                      consequence,
                      alternative })
    }

    /// Parses `fn(<params>) { <body> }`.
    fn parse_function_literal(&mut self) -> ParseResult<Expr> {
        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_parameters()?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block()?;

        Ok(Expr::Function(Rc::new(FunctionLiteral { parameters, body })))
    }

    /// Parses `{ <key>: <value>, ... }`; the current token is `{`.
    ///
    /// Pairs keep their source order. An empty map `{}` and a trailing comma
    /// are accepted.
    fn parse_map_literal(&mut self) -> ParseResult<Expr> {
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::RBrace) {
            self.advance();
            let key = self.parse_expression(Precedence::Lowest)?;

            self.expect_peek(TokenKind::Colon)?;
            self.advance();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_is(TokenKind::RBrace) {
                self.expect_peek(TokenKind::Comma)?;
            }
        }
        self.expect_peek(TokenKind::RBrace)?;

        Ok(Expr::Map(pairs))
    }
}
