use std::collections::HashSet;

use crate::evaluator::Evaluator;
use crate::notebook::{CellType, Notebook};

/// Cell-selection mode chosen on the command line.
///
/// `Cell` and `From` carry the 1-based cell numbers the flags use; `Until`
/// carries a count of cells from the top of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    All,
    Cell(usize),
    Until(usize),
    From(usize),
}

impl RunMode {
    /// Resolve to a set of 0-based cell indices; `None` selects every code
    /// cell in the document
    pub fn resolve(self, total_cells: usize) -> Option<HashSet<usize>> {
        match self {
            RunMode::All => None,
            RunMode::Cell(n) => Some(HashSet::from([n.saturating_sub(1)])),
            RunMode::Until(n) => Some((0..n.min(total_cells)).collect()),
            RunMode::From(n) => Some((n.saturating_sub(1)..total_cells).collect()),
        }
    }
}

/// Runs the code cells of one notebook, in document order, against a single
/// shared namespace.
pub struct CellRunner<E: Evaluator> {
    evaluator: E,
}

impl<E: Evaluator> CellRunner<E> {
    /// Create a runner around a fresh evaluator
    pub fn new(evaluator: E) -> Self {
        Self { evaluator }
    }

    /// Execute every code cell whose index is in `selection`, or every code
    /// cell when `selection` is `None`.
    ///
    /// Cells run strictly in ascending document order. A cell that fails is
    /// reported on stderr with its 1-based number and the run moves on to the
    /// next qualifying cell; the namespace keeps whatever state earlier cells
    /// left in it.
    pub fn run(&mut self, notebook: &Notebook, selection: Option<&HashSet<usize>>) {
        for (index, cell) in notebook.cells().iter().enumerate() {
            if cell.cell_type != CellType::Code {
                continue;
            }
            if selection.is_some_and(|selected| !selected.contains(&index)) {
                continue;
            }

            if let Err(e) = self.evaluator.execute(&cell.source) {
                eprintln!("Error executing cell {}:\n{}", index + 1, e);
            }
        }
    }

    /// The evaluator, with whatever namespace state the run left behind
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }
}
