//! Grid layout loader.
//!
//! Layouts are rectangular ASCII rows: `#` is wall and `.` is floor. Entity
//! placement lives in scenario files, not in the layout.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tactics_core::{Grid, Position, Tile};

use crate::loaders::{LoadResult, read_file};

/// Layout file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LayoutRon {
    rows: Vec<String>,
}

/// Loader for grid layouts.
pub struct MapLoader;

impl MapLoader {
    /// Load a layout from a RON file of the form `(rows: ["###", "#.#", "###"])`.
    pub fn load(path: &Path) -> LoadResult<Grid> {
        let content = read_file(path)?;
        let layout: LayoutRon = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse layout RON: {}", e))?;
        Self::parse_rows(&layout.rows)
    }

    /// Builds a grid from ASCII rows. Row 0 is `y = 0`.
    pub fn parse_rows<S: AsRef<str>>(rows: &[S]) -> LoadResult<Grid> {
        let Some(first) = rows.first() else {
            anyhow::bail!("Layout has no rows");
        };
        let width = first.as_ref().chars().count();
        if width == 0 {
            anyhow::bail!("Layout rows are empty");
        }

        let mut grid = Grid::new(width as u32, rows.len() as u32);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != width {
                anyhow::bail!(
                    "Layout row {} has {} cells, expected {}",
                    y,
                    row.chars().count(),
                    width
                );
            }
            for (x, cell) in row.chars().enumerate() {
                let tile = match cell {
                    '#' => Tile::Wall,
                    '.' => Tile::Floor,
                    other => anyhow::bail!("Unknown layout cell {:?} at ({}, {})", other, x, y),
                };
                grid.set_tile(Position::new(x as i32, y as i32), tile)?;
            }
        }
        Ok(grid)
    }
}
