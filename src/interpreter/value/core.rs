use std::{fmt, rc::Rc};

use rustc_hash::FxHashMap;

use crate::{
    ast::FunctionLiteral,
    error::RuntimeError,
    interpreter::value::{
        environment::Environment,
        map_key::{MapKey, Mappable},
    },
};

/// Type tags of runtime objects, rendered in upper case in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// `INTEGER`
    Integer,
    /// `BOOLEAN`
    Boolean,
    /// `STRING`
    Str,
    /// `NULL`
    Null,
    /// `ARRAY`
    Array,
    /// `MAP`
    Map,
    /// `FUNCTION`
    Function,
    /// `BUILTIN`
    Builtin,
    /// `ERROR`
    Error,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Integer => "INTEGER",
                        Self::Boolean => "BOOLEAN",
                        Self::Str => "STRING",
                        Self::Null => "NULL",
                        Self::Array => "ARRAY",
                        Self::Map => "MAP",
                        Self::Function => "FUNCTION",
                        Self::Builtin => "BUILTIN",
                        Self::Error => "ERROR",
                    })
    }
}

/// A user-defined function value: a function literal paired with the
/// environment that was active where it was evaluated.
pub struct Function {
    /// The parsed parameters and body, shared with the AST.
    pub literal: Rc<FunctionLiteral>,
    /// The captured definition environment.
    pub env:     Environment,
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function").field("literal", &self.literal.to_string()).finish()
    }
}

/// Signature of native builtin functions.
///
/// A builtin receives the already-evaluated arguments and either returns a
/// value or a [`RuntimeError`] describing why the arguments were rejected.
pub type BuiltinFn = fn(&[Object]) -> Result<Object, RuntimeError>;

/// A native function from the builtin registry.
#[derive(Clone, Copy)]
pub struct Builtin {
    /// The name the builtin is registered under.
    pub name: &'static str,
    /// The native implementation.
    pub func: BuiltinFn,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Builtin").field(&self.name).finish()
    }
}

/// A key/value pair stored in a map. The original key object is kept so that
/// maps can be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPair {
    /// The key as written by the program.
    pub key:   Object,
    /// The associated value.
    pub value: Object,
}

/// Storage of a map object.
pub type MapPairs = FxHashMap<MapKey, MapPair>;

/// Represents a runtime value in the interpreter.
///
/// This enum models every value an expression can produce. Compound values
/// are reference counted, so cloning an `Object` is cheap and never copies
/// array elements, map pairs or captured environments.
#[derive(Debug, Clone)]
pub enum Object {
    /// A 64-bit signed integer.
    Integer(i64),
    /// `true` or `false`.
    Boolean(bool),
    /// An immutable string.
    Str(Rc<str>),
    /// The absence of a value.
    Null,
    /// An ordered sequence of values.
    Array(Rc<Vec<Self>>),
    /// A mapping from hashable keys to values.
    Map(Rc<MapPairs>),
    /// A closure.
    Function(Rc<Function>),
    /// A native function.
    Builtin(Builtin),
    /// A runtime error travelling as a value.
    Error(RuntimeError),
}

impl From<i64> for Object {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Object {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Object {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<String> for Object {
    fn from(v: String) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<Vec<Self>> for Object {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl From<RuntimeError> for Object {
    fn from(e: RuntimeError) -> Self {
        Self::Error(e)
    }
}

impl Object {
    /// Returns the type tag of the value.
    #[must_use]
    pub const fn kind(&self) -> ObjectType {
        match self {
            Self::Integer(_) => ObjectType::Integer,
            Self::Boolean(_) => ObjectType::Boolean,
            Self::Str(_) => ObjectType::Str,
            Self::Null => ObjectType::Null,
            Self::Array(_) => ObjectType::Array,
            Self::Map(_) => ObjectType::Map,
            Self::Function(_) => ObjectType::Function,
            Self::Builtin(_) => ObjectType::Builtin,
            Self::Error(_) => ObjectType::Error,
        }
    }

    /// Coerces the value to a condition. Only `null` and `false` are falsy;
    /// everything else, including `0` and `""`, is truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Boolean(false))
    }

    /// Returns the map key of the value, or `None` if the value cannot be
    /// used as a map key.
    #[must_use]
    pub fn map_key(&self) -> Option<MapKey> {
        match self {
            Self::Integer(v) => Some(v.map_key()),
            Self::Boolean(v) => Some(v.map_key()),
            Self::Str(v) => Some(v.map_key()),
            _ => None,
        }
    }

    /// Human-readable rendering of the value.
    ///
    /// # Example
    /// ```
    /// use quill::{error::RuntimeError, interpreter::value::core::Object};
    ///
    /// assert_eq!(Object::from(vec![Object::from(1), Object::from("a")]).inspect(), "[1, a]");
    /// assert_eq!(Object::from(RuntimeError::DivisionByZero).inspect(),
    ///            "ERROR: division by zero");
    /// ```
    #[must_use]
    pub fn inspect(&self) -> String {
        self.to_string()
    }

    /// Returns `true` if the value is [`Object::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Object::Error`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl PartialEq for Object {
    /// Structural equality for data, identity for closures.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a.name == b.name,
            (Self::Error(a), Self::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Str(s) => f.write_str(s),
            Self::Null => f.write_str("null"),
            Self::Array(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Map(pairs) => {
                write!(f, "{{")?;

                for (index, pair) in pairs.values().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{}: {}", pair.key, pair.value)?;
                }

                write!(f, "}}")
            },
            Self::Function(function) => write!(f, "{}", function.literal),
            Self::Builtin(_) => f.write_str("builtin function"),
            Self::Error(e) => write!(f, "ERROR: {e}"),
        }
    }
}
