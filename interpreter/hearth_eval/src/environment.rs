//! Variable environment.

use rustc_hash::FxHashMap;

use crate::Value;

/// Why an assignment failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignError {
    /// The name has never been defined.
    Undefined,
}

/// A single flat scope mapping names to values.
///
/// `define` and `assign` are deliberately distinct: declaration upserts
/// unconditionally (re-declaring a name silently overwrites it), while
/// assignment requires the name to already exist. Lookup returns a clone,
/// giving copy semantics for every value type.
#[derive(Debug, Default)]
pub struct Environment {
    values: FxHashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// Bind `name` to `value`, overwriting any existing binding.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Overwrite an existing binding. Errors if `name` was never defined;
    /// assignment cannot create variables.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), AssignError> {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(AssignError::Undefined),
        }
    }

    /// Current value of `name`, cloned.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.values.get(name).cloned()
    }

    /// Whether `name` is bound.
    pub fn is_defined(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
