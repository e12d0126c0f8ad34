use std::{fmt, rc::Rc};

/// Writes `items` separated by `sep`.
fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>,
                                 items: &[T],
                                 sep: &str)
                                 -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// A parsed program: the ordered sequence of top-level statements.
///
/// Rendering a program with `Display` produces its canonical, fully
/// parenthesized form. Re-parsing that rendering yields a program that renders
/// identically.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

impl Program {
    /// The literal of the first token of the program, or an empty string.
    #[must_use]
    pub fn token_literal(&self) -> String {
        self.statements.first().map(Statement::token_literal).unwrap_or_default()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.statements, "; ")
    }
}

/// A name used as a binding or a reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// The identifier text.
    pub name: String,
}

impl Identifier {
    /// Creates an identifier from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A statement node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `const <name> = <value>`
    Const {
        /// The name being bound.
        name:  Identifier,
        /// The initializer.
        value: Expr,
    },
    /// `return <value>`
    Return {
        /// The returned expression.
        value: Expr,
    },
    /// An expression evaluated for its value.
    Expression(Expr),
}

impl Statement {
    /// The literal of the token this statement starts with.
    #[must_use]
    pub fn token_literal(&self) -> String {
        match self {
            Self::Const { .. } => "const".to_string(),
            Self::Return { .. } => "return".to_string(),
            Self::Expression(expr) => expr.token_literal(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Const { name, value } => write!(f, "const {name} = {value}"),
            Self::Return { value } => write!(f, "return {value}"),
            Self::Expression(expr) => write!(f, "{expr}"),
        }
    }
}

/// A brace-delimited sequence of statements, used as the body of functions
/// and the branches of `if` expressions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockStatement {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    /// Always `{`.
    #[must_use]
    pub fn token_literal(&self) -> String {
        "{".to_string()
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return f.write_str("{ }");
        }
        f.write_str("{ ")?;
        write_joined(f, &self.statements, "; ")?;
        f.write_str(" }")
    }
}

/// A function literal: parameters and body.
///
/// Shared behind an `Rc` so that every function value created from the same
/// literal reuses the parsed body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionLiteral {
    /// Parameter names in declaration order.
    pub parameters: Vec<Identifier>,
    /// The function body.
    pub body:       BlockStatement,
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        write_joined(f, &self.parameters, ", ")?;
        write!(f, ") {}", self.body)
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Integer negation (`-`).
    Negate,
    /// Logical not (`!`).
    Not,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Negate => "-",
                        Self::Not => "!",
                    })
    }
}

/// Infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`), also string concatenation.
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`).
    Div,
    /// Less than (`<`).
    Less,
    /// Greater than (`>`).
    Greater,
    /// Equality (`==`).
    Equal,
    /// Inequality (`!=`).
    NotEqual,
}

impl BinaryOperator {
    /// Returns `true` for `==` and `!=`.
    #[must_use]
    pub const fn is_equality(self) -> bool {
        matches!(self, Self::Equal | Self::NotEqual)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Add => "+",
                        Self::Sub => "-",
                        Self::Mul => "*",
                        Self::Div => "/",
                        Self::Less => "<",
                        Self::Greater => ">",
                        Self::Equal => "==",
                        Self::NotEqual => "!=",
                    })
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every variant renders in a canonical form: operator applications are fully
/// parenthesized, so `-a * b` renders as `((-a) * b)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier(Identifier),
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A string literal, without its quotes.
    Str(String),
    /// `true` or `false`.
    Boolean(bool),
    /// A prefix operation such as `!x` or `-x`.
    Prefix {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Self>,
    },
    /// A binary operation such as `a + b`.
    Infix {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// `if <condition> { ... } else { ... }`
    If {
        /// The condition.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Optional block evaluated otherwise.
        alternative: Option<BlockStatement>,
    },
    /// `fn(<params>) { ... }`
    Function(Rc<FunctionLiteral>),
    /// `<callee>(<arguments>)`
    Call {
        /// Expression producing the function to call.
        function:  Box<Self>,
        /// Arguments in source order.
        arguments: Vec<Self>,
    },
    /// `[a, b, c]`
    Array(Vec<Self>),
    /// `{key: value, ...}`; pairs are kept in source order.
    Map(Vec<(Self, Self)>),
    /// `<left>[<index>]`
    Index {
        /// The indexed expression.
        left:  Box<Self>,
        /// The subscript.
        index: Box<Self>,
    },
}

impl Expr {
    /// The literal of the token this expression was built around: the
    /// operator for prefix and infix expressions, `(` for calls, `[` for
    /// arrays and index expressions, `{` for maps.
    #[must_use]
    pub fn token_literal(&self) -> String {
        match self {
            Self::Identifier(ident) => ident.name.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Str(value) => value.clone(),
            Self::Boolean(value) => value.to_string(),
            Self::Prefix { op, .. } => op.to_string(),
            Self::Infix { op, .. } => op.to_string(),
            Self::If { .. } => "if".to_string(),
            Self::Function(_) => "fn".to_string(),
            Self::Call { .. } => "(".to_string(),
            Self::Array(_) | Self::Index { .. } => "[".to_string(),
            Self::Map(_) => "{".to_string(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(ident) => write!(f, "{ident}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "\"{value}\""),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Prefix { op, operand } => write!(f, "({op}{operand})"),
            Self::Infix { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if {condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::Function(literal) => write!(f, "{literal}"),
            Self::Call { function, arguments } => {
                write!(f, "{function}(")?;
                write_joined(f, arguments, ", ")?;
                f.write_str(")")
            },
            Self::Array(elements) => {
                f.write_str("[")?;
                write_joined(f, elements, ", ")?;
                f.write_str("]")
            },
            Self::Map(pairs) => {
                f.write_str("{")?;
                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            },
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
        }
    }
}
