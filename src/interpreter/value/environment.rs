use std::{cell::RefCell, fmt, rc::Rc};

use rustc_hash::FxHashMap;

use crate::{error::RuntimeError, interpreter::value::core::Object};

/// A lexical scope: a binding table plus an optional enclosing scope.
#[derive(Default)]
struct Scope {
    bindings: RefCell<FxHashMap<String, Object>>,
    outer:    Option<Environment>,
}

/// A shared handle to a chain of lexical scopes.
///
/// Cloning an `Environment` clones the handle, not the bindings: a closure
/// and the scope it was defined in observe the same later definitions.
/// Bindings are write-once within a scope; inner scopes may shadow outer ones.
///
/// # Example
/// ```
/// use quill::interpreter::value::{core::Object, environment::Environment};
///
/// let global = Environment::new();
/// global.define("x", Object::Integer(1)).unwrap();
///
/// let local = global.enclosed();
/// assert_eq!(local.get("x"), Some(Object::Integer(1)));
///
/// global.define("y", Object::Integer(2)).unwrap();
/// assert_eq!(local.get("y"), Some(Object::Integer(2)));
/// assert!(global.define("x", Object::Null).is_err());
/// ```
#[derive(Clone, Default)]
pub struct Environment(Rc<Scope>);

impl Environment {
    /// Creates an empty top-level environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh, empty scope whose outer scope is `self`.
    #[must_use]
    pub fn enclosed(&self) -> Self {
        Self(Rc::new(Scope { bindings: RefCell::default(),
                             outer:    Some(self.clone()), }))
    }

    /// Looks `name` up, walking outward through enclosing scopes.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Object> {
        let mut scope = self;
        loop {
            if let Some(value) = scope.0.bindings.borrow().get(name) {
                return Some(value.clone());
            }
            scope = scope.0.outer.as_ref()?;
        }
    }

    /// Introduces a binding in this scope.
    ///
    /// # Errors
    /// Returns [`RuntimeError::AlreadyDeclared`] if `name` is already bound in
    /// this scope.
    pub fn define(&self, name: &str, value: Object) -> Result<(), RuntimeError> {
        let mut bindings = self.0.bindings.borrow_mut();
        if bindings.contains_key(name) {
            return Err(RuntimeError::AlreadyDeclared(name.to_string()));
        }
        bindings.insert(name.to_string(), value);
        Ok(())
    }
}

impl fmt::Debug for Environment {
    // Only names: closures stored in their own scope make the chain cyclic.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bindings = self.0.bindings.borrow();
        let mut names: Vec<&String> = bindings.keys().collect();
        names.sort();
        f.debug_struct("Environment")
         .field("bindings", &names)
         .field("outer", &self.0.outer)
         .finish()
    }
}
