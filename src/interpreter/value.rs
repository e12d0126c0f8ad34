/// Runtime object representation.
///
/// Declares the `Object` enum with every runtime variant (integers, booleans,
/// strings, arrays, maps, closures, builtins, errors and null), its type tags
/// and its human-readable rendering.
pub mod core;
/// Lexically-scoped binding environments.
///
/// An `Environment` is a shared, chainable scope. Closures capture the
/// environment of their definition site by reference.
pub mod environment;
/// Map key hashing.
///
/// Only integers, booleans and strings can index a map. Each produces a
/// `MapKey` made of its type tag and a 64-bit hash.
pub mod map_key;
