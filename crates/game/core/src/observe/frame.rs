use std::ops::{Index, IndexMut};

use crate::state::Position;

/// Dense row-major 2-D buffer.
///
/// Used for wall layouts (`Frame<bool>`), cell grids, color buffers
/// (`Frame<Rgb>`) and visibility masks.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone> Frame<T> {
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![fill; rows * cols],
        }
    }
}

impl<T> Frame<T> {
    /// Wraps row-major `data`. Returns `None` if the length does not match.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Option<Self> {
        (data.len() == rows * cols).then_some(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.col < self.cols
    }

    fn offset(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.row * self.cols + position.col)
    }

    pub fn get(&self, position: Position) -> Option<&T> {
        self.offset(position).map(|i| &self.data[i])
    }

    pub fn get_mut(&mut self, position: Position) -> Option<&mut T> {
        let i = self.offset(position)?;
        Some(&mut self.data[i])
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        (row < self.rows).then(|| &self.data[row * self.cols..(row + 1) * self.cols])
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterates over `(position, value)` pairs row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        let cols = self.cols.max(1);
        self.data
            .iter()
            .enumerate()
            .map(move |(i, value)| (Position::new(i / cols, i % cols), value))
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Frame<U> {
        Frame {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T> Index<Position> for Frame<T> {
    type Output = T;

    fn index(&self, position: Position) -> &T {
        assert!(
            self.contains(position),
            "position {position} outside {}x{} frame",
            self.rows,
            self.cols
        );
        &self.data[position.row * self.cols + position.col]
    }
}

impl<T> IndexMut<Position> for Frame<T> {
    fn index_mut(&mut self, position: Position) -> &mut T {
        assert!(
            self.contains(position),
            "position {position} outside {}x{} frame",
            self.rows,
            self.cols
        );
        &mut self.data[position.row * self.cols + position.col]
    }
}
