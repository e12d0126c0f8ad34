use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

/// Binding power of operators, from loosest to tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Anything that is not an infix operator.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Prefix `-` and `!`
    Prefix,
    /// `f(x)`
    Call,
    /// `a[i]`
    Index,
}

/// The infix parse rule a token triggers when it follows an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InfixRule {
    Binary(BinaryOperator),
    Call,
    Index,
}

impl InfixRule {
    fn for_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::LParen => Some(Self::Call),
            TokenKind::LBracket => Some(Self::Index),
            _ => token_to_binary_operator(kind).map(Self::Binary),
        }
    }

    const fn precedence(self) -> Precedence {
        match self {
            Self::Binary(op) => binary_precedence(op),
            Self::Call => Precedence::Call,
            Self::Index => Precedence::Index,
        }
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that do not denote a binary operator.
///
/// # Example
/// ```
/// use quill::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::NotEq), Some(BinaryOperator::NotEqual));
/// assert_eq!(token_to_binary_operator(TokenKind::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Asterisk => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Lt => Some(BinaryOperator::Less),
        TokenKind::Gt => Some(BinaryOperator::Greater),
        TokenKind::Eq => Some(BinaryOperator::Equal),
        TokenKind::NotEq => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}

/// Returns the precedence level of a binary operator.
#[must_use]
pub const fn binary_precedence(op: BinaryOperator) -> Precedence {
    match op {
        BinaryOperator::Equal | BinaryOperator::NotEqual => Precedence::Equals,
        BinaryOperator::Less | BinaryOperator::Greater => Precedence::LessGreater,
        BinaryOperator::Add | BinaryOperator::Sub => Precedence::Sum,
        BinaryOperator::Mul | BinaryOperator::Div => Precedence::Product,
    }
}

impl Parser<'_> {
    /// Parses an expression whose operators bind tighter than `precedence`.
    ///
    /// The current token must start the expression. The prefix rule of that
    /// token produces the left operand; then, while the lookahead is an infix
    /// operator binding tighter than `precedence`, the operator is folded in
    /// left-associatively. On success the current token is the last token of
    /// the expression.
    ///
    /// # Errors
    /// Fails if a token cannot start an expression or a sub-rule fails.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon) {
            let Some(rule) = InfixRule::for_token(self.peek.kind) else {
                break;
            };
            if precedence >= rule.precedence() {
                break;
            }

            self.advance();
            left = match rule {
                InfixRule::Binary(op) => self.parse_infix(left, op)?,
                InfixRule::Call => self.parse_call(left)?,
                InfixRule::Index => self.parse_index(left)?,
            };
        }

        Ok(left)
    }

    /// Parses the right operand of a binary operator; the operator is the
    /// current token.
    fn parse_infix(&mut self, left: Expr, op: BinaryOperator) -> ParseResult<Expr> {
        self.advance();
        let right = self.parse_expression(binary_precedence(op))?;

        Ok(Expr::Infix { left: Box::new(left),
                         op,
                         right: Box::new(right) })
    }

    /// Parses the argument list of a call; the current token is `(`.
    fn parse_call(&mut self, function: Expr) -> ParseResult<Expr> {
        let arguments = self.parse_expression_list(TokenKind::RParen)?;

        Ok(Expr::Call { function: Box::new(function),
                        arguments })
    }

    /// Parses `[index]` after an expression; the current token is `[`.
    fn parse_index(&mut self, left: Expr) -> ParseResult<Expr> {
        self.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RBracket)?;

        Ok(Expr::Index { left:  Box::new(left),
                         index: Box::new(index), })
    }
}
