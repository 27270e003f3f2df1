use anyhow::{anyhow, Result};
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Capability to execute one source fragment against a namespace that
/// persists for the whole run.
///
/// The run loop only needs this seam; anything that can run a fragment and
/// report failure can stand in for the embedded interpreter.
pub trait Evaluator {
    fn execute(&mut self, source: &str) -> Result<()>;
}

/// Evaluator backed by the embedded CPython interpreter.
///
/// The globals dict is created once and reused for every fragment, so names
/// defined by one cell are visible to the cells that follow it within the
/// same run.
pub struct PythonEvaluator {
    globals: Py<PyDict>,
}

impl PythonEvaluator {
    /// Create a fresh top-level namespace for one run
    pub fn new() -> Result<Self> {
        Python::with_gil(|py| {
            let globals = PyDict::new_bound(py);
            globals.set_item("__name__", "__main__")?;
            Ok(Self {
                globals: globals.unbind(),
            })
        })
    }

    /// Read a name out of the namespace, if it is defined
    pub fn global<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: for<'py> FromPyObject<'py>,
    {
        Python::with_gil(|py| {
            let globals = self.globals.bind(py);
            match globals.get_item(name)? {
                Some(value) => Ok(Some(value.extract()?)),
                None => Ok(None),
            }
        })
    }
}

impl Evaluator for PythonEvaluator {
    fn execute(&mut self, source: &str) -> Result<()> {
        Python::with_gil(|py| {
            let globals = self.globals.bind(py);
            py.run_bound(source, Some(globals), None)
                .map_err(|e| anyhow!("Python execution error: {}", e))
        })
    }
}
