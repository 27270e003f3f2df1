use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Cell type determines whether a cell is a candidate for execution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellType {
    Code,
    Other,
}

/// One unit of a notebook document
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub cell_type: CellType,
    pub source: String,
}

impl Cell {
    /// Create a new cell with the given type and source
    pub fn new(cell_type: CellType, source: impl Into<String>) -> Self {
        Self {
            cell_type,
            source: source.into(),
        }
    }
}

/// An ordered sequence of cells loaded from a notebook file.
///
/// The document is read once and never written back; cell indices are the
/// positions in this sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Notebook {
    cells: Vec<Cell>,
}

impl Notebook {
    /// Assemble a notebook from already-loaded cells
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Load a notebook document from disk.
    ///
    /// Accepts the v4 interchange format as well as v3 documents, which are
    /// normalized to the v4 shape before cells are exposed.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open notebook file: {}", path.display()))?;
        let reader = BufReader::new(file);

        let raw: RawNotebook = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse notebook from: {}", path.display()))?;

        raw.normalize()
            .with_context(|| format!("Invalid notebook document: {}", path.display()))
    }

    /// Cells in document order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Total number of cells, all types included
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

/// On-disk notebook schema, wide enough to cover both the v4 layout
/// (top-level `cells`) and the v3 layout (`worksheets` holding cells)
#[derive(Debug, Deserialize)]
struct RawNotebook {
    nbformat: Option<u64>,
    cells: Option<Vec<RawCell>>,
    worksheets: Option<Vec<RawWorksheet>>,
}

#[derive(Debug, Deserialize)]
struct RawWorksheet {
    #[serde(default)]
    cells: Vec<RawCell>,
}

#[derive(Debug, Deserialize)]
struct RawCell {
    cell_type: String,
    source: Option<SourceText>,
    /// v3 code cells store their source under `input`
    input: Option<SourceText>,
}

/// Cell source is stored either as one string or as a list of lines
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SourceText {
    Joined(String),
    Lines(Vec<String>),
}

impl SourceText {
    fn into_string(self) -> String {
        match self {
            SourceText::Joined(s) => s,
            // nbformat lines keep their trailing newlines
            SourceText::Lines(lines) => lines.concat(),
        }
    }
}

impl RawNotebook {
    fn normalize(self) -> Result<Notebook> {
        let raw_cells = match (self.nbformat, self.cells, self.worksheets) {
            (Some(4) | None, Some(cells), _) => cells,
            (Some(4) | None, None, _) => return Err(anyhow!("notebook has no cell list")),
            (Some(3), _, Some(worksheets)) => worksheets
                .into_iter()
                .flat_map(|worksheet| worksheet.cells)
                .collect(),
            (Some(3), _, None) => return Err(anyhow!("v3 notebook has no worksheets")),
            (Some(version), _, _) => {
                return Err(anyhow!("unsupported notebook format version: {}", version))
            }
        };

        let cells = raw_cells.into_iter().map(RawCell::normalize).collect();
        Ok(Notebook::from_cells(cells))
    }
}

impl RawCell {
    fn normalize(self) -> Cell {
        let cell_type = if self.cell_type == "code" {
            CellType::Code
        } else {
            CellType::Other
        };

        let source = self
            .source
            .or(self.input)
            .map(SourceText::into_string)
            .unwrap_or_default();

        Cell { cell_type, source }
    }
}
