use std::{cell::RefCell, collections::HashMap};

use crate::interpreter::{
    evaluator::function::{builtin::BuiltinFunction, core::register_builtins},
    value::core::Value,
};

/// A table of variable bindings with an optional enclosing scope.
///
/// Lookups walk outward through the parent chain; definitions always go into
/// the scope they are called on. A scope created for a function call borrows
/// its parent, so the borrow checker guarantees the parent outlives the call.
///
/// Bindings sit behind a `RefCell` because a call scope only holds a shared
/// reference to its parent, while assignment may still rebind a name that
/// lives there. Borrows never outlive a single lookup or insertion.
///
/// ## Usage
///
/// The host creates one root scope, registers builtins into it and passes it
/// to every evaluation:
///
/// ```
/// use sprout::interpreter::{scope::Scope, value::core::Value};
///
/// let root = Scope::new();
/// root.define("x", Value::Number(1.0));
///
/// let call = Scope::with_parent(&root);
/// assert_eq!(call.resolve("x"), Some(Value::Number(1.0)));
/// assert_eq!(call.resolve("y"), None);
/// ```
#[derive(Debug, Default)]
pub struct Scope<'p> {
    bindings: RefCell<HashMap<String, Value>>,
    parent:   Option<&'p Scope<'p>>,
}

impl Scope<'static> {
    /// Creates an empty root scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a root scope with the standard builtins (`print`) registered.
    #[must_use]
    pub fn with_builtins() -> Self {
        let scope = Self::new();
        register_builtins(&scope);
        scope
    }
}

impl<'p> Scope<'p> {
    /// Creates an empty scope whose lookups fall back to `parent`.
    #[must_use]
    pub fn with_parent(parent: &'p Scope<'p>) -> Self {
        Self { bindings: RefCell::default(),
               parent:   Some(parent), }
    }

    /// Returns the enclosing scope, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<&'p Scope<'p>> {
        self.parent
    }

    /// Binds `name` in this scope, replacing any binding it already holds.
    ///
    /// No redefinition check is made here; `let` and `function` statements
    /// perform their own.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.bindings.borrow_mut().insert(name.into(), value);
    }

    /// Registers a host function under its own name.
    pub fn define_builtin(&self, builtin: BuiltinFunction) {
        let name = builtin.name().to_string();
        self.define(name, Value::from(builtin));
    }

    /// Looks `name` up in this scope and then in each enclosing scope.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Value> {
        let mut current = Some(self);

        while let Some(scope) = current {
            if let Some(value) = scope.bindings.borrow().get(name) {
                return Some(value.clone());
            }
            current = scope.parent;
        }

        None
    }

    /// Tests whether any scope in the chain binds `name`.
    #[must_use]
    pub fn is_defined(&self, name: &str) -> bool {
        self.holder_of(name).is_some()
    }

    /// Tests whether this scope itself binds `name`.
    #[must_use]
    pub fn is_defined_locally(&self, name: &str) -> bool {
        self.bindings.borrow().contains_key(name)
    }

    /// Rebinds `name` in the nearest scope that holds it.
    ///
    /// Returns `false`, leaving every scope untouched, when no scope in the
    /// chain binds `name`.
    pub fn assign(&self, name: &str, value: Value) -> bool {
        match self.holder_of(name) {
            Some(scope) => {
                scope.bindings.borrow_mut().insert(name.to_string(), value);
                true
            },
            None => false,
        }
    }

    /// Finds the nearest scope binding `name`.
    fn holder_of(&self, name: &str) -> Option<&Scope<'p>> {
        let mut current: Option<&Scope<'p>> = Some(self);

        while let Some(scope) = current {
            if scope.is_defined_locally(name) {
                return Some(scope);
            }
            current = scope.parent;
        }

        None
    }
}
