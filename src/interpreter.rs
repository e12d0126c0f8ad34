/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, evaluates expressions and statements,
/// applies operators, calls closures and builtins, and produces a value. It
/// is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates every expression and statement form.
/// - Binds names in lexical environments and captures them in closures.
/// - Reports runtime errors such as type mismatches or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The scanner reads the raw source text and produces a stream of tokens,
/// each carrying its kind and literal text. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Recognizes identifiers, keywords, integer and string literals,
///   operators and delimiters.
/// - Skips whitespace.
/// - Turns unrecognized characters into `ILLEGAL` tokens instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A Pratt parser with one token of lookahead. It records syntax errors and
/// keeps going, so one pass reports every problem it can find.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Resolves operator precedence and associativity.
/// - Collects syntax errors and recovers at statement boundaries.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the `Object` enum for every runtime value, the
/// environments that hold bindings, and the hashing that lets integers,
/// booleans and strings index maps.
pub mod value;
