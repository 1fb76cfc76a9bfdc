//! Obstacle-map collaborator for the standalone map-editor tool.
//!
//! A fixed rows×cols matrix of 0 (free) and 1 (obstacle), persisted as
//! whitespace-separated integers.  The simulation's collision model does
//! not consult it; it exists for the external editor and its file format.

use std::io::Write;
use std::path::Path;

use log::warn;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObstacleMap {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl ObstacleMap {
    /// An all-free map of the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        ObstacleMap {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Load from `path`, filling row-major.  A missing file is not an
    /// error for the host: the map stays empty and `false` is returned.
    /// Unparsable or missing values read as free cells.
    pub fn load(&mut self, path: &Path) -> bool {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => {
                warn!("map file {} not found; using an empty map", path.display());
                // The host must see an empty map, not whatever was set
                // before the failed load
                self.cells.fill(0);
                return false;
            }
        };

        let mut values = text.split_whitespace().map(|tok| match tok.parse::<u8>() {
            Ok(v) if v <= 1 => v,
            _ => {
                warn!("ignoring invalid map token {:?} in {}", tok, path.display());
                0
            }
        });
        for cell in self.cells.iter_mut() {
            *cell = values.next().unwrap_or(0);
        }
        true
    }

    /// Persist as one whitespace-separated row per line.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let mut out = Vec::with_capacity(self.cells.len() * 2);
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(out, "{} ", self.cells[row * self.cols + col])?;
            }
            writeln!(out)?;
        }
        std::fs::write(path, out)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (col, row) = (x as usize, y as usize);
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Out-of-bounds queries read as free, not as obstacles.
    pub fn is_obstacle(&self, x: i32, y: i32) -> bool {
        self.index(x, y).map_or(false, |i| self.cells[i] == 1)
    }

    pub fn set_obstacle(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = 1;
        }
    }

    pub fn unset_obstacle(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = 0;
        }
    }
}
