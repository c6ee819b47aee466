use crate::logging_backend::BackendOp;
use larder_core::backend::Operation;
use std::sync::{Arc, Mutex};

/// A wrapper around the operations log that provides a clean API for tests
pub struct ExecLog {
    ops: Arc<Mutex<Vec<BackendOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<BackendOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Count operations matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| predicate(&op.operation))
            .count()
    }

    /// Count operations by name, e.g. `"CreateIngredientLink"`
    pub fn count_named(&self, name: &str) -> usize {
        self.count(|op| op.name() == name)
    }

    /// Names of every logged operation, in execution order
    pub fn names(&self) -> Vec<&'static str> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .map(|op| op.operation.name())
            .collect()
    }

    pub fn writes(&self) -> usize {
        self.count(Operation::is_write)
    }

    /// Number of operations whose response was an error
    pub fn failures(&self) -> usize {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| op.response.is_err())
            .count()
    }

    pub fn clear(&mut self) {
        self.ops.lock().unwrap().clear();
    }

    /// Get access to all operations for custom assertions
    pub fn with_ops<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[BackendOp]) -> R,
    {
        let ops = self.ops.lock().unwrap();
        f(&ops)
    }
}
