// Helper functions to generate notebook files with various shapes

use std::fs;
use std::path::PathBuf;

use serde_json::json;
use tempfile::TempDir;

/// Write a v4 notebook built from (cell_type, source) pairs
pub fn write_notebook(dir: &TempDir, name: &str, cells: &[(&str, &str)]) -> PathBuf {
    let cells: Vec<_> = cells
        .iter()
        .map(|(cell_type, source)| {
            json!({"cell_type": cell_type, "source": source, "metadata": {}})
        })
        .collect();
    let document = json!({
        "nbformat": 4,
        "nbformat_minor": 5,
        "metadata": {},
        "cells": cells,
    });

    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string_pretty(&document).unwrap()).unwrap();
    path
}

/// The three-cell chain: define, derive, print
pub fn write_chained_notebook(dir: &TempDir) -> PathBuf {
    write_notebook(
        dir,
        "chained.ipynb",
        &[("code", "x = 1"), ("code", "y = x + 1"), ("code", "print(y)")],
    )
}

/// A v3 notebook with one worksheet and one code cell
pub fn write_v3_notebook(dir: &TempDir, name: &str, input: &str) -> PathBuf {
    let document = json!({
        "nbformat": 3,
        "nbformat_minor": 0,
        "worksheets": [
            {"cells": [{"cell_type": "code", "input": input}]}
        ],
    });

    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string_pretty(&document).unwrap()).unwrap();
    path
}
