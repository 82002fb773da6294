//! Shelf (level) model.
//!
//! A shelf is a horizontal band of the strip. Tasks on one shelf run
//! concurrently, starting at the shelf's `y_offset`. A shelf's height is
//! the tallest task placed on it so far, so it may still grow after
//! later shelves have been stacked above it.

use serde::{Deserialize, Serialize};

/// One packing level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shelf {
    /// Sum of widths of tasks on this shelf.
    pub used_width: i64,
    /// Tallest task on this shelf. Never decreases.
    pub height: i64,
    /// Lower vertical boundary, fixed at creation.
    pub y_offset: i64,
}

impl Shelf {
    /// Opens a shelf at `y_offset` holding one task.
    pub fn open(y_offset: i64, width: i64, height: i64) -> Self {
        Self {
            used_width: width,
            height,
            y_offset,
        }
    }

    /// Upper boundary `y_offset + height`.
    #[inline]
    pub fn end(&self) -> i64 {
        self.y_offset + self.height
    }

    /// Width still free on a strip of width `strip_width`.
    #[inline]
    pub fn free_width(&self, strip_width: i64) -> i64 {
        strip_width - self.used_width
    }

    /// Adds a task, growing width and (possibly) height.
    #[inline]
    pub fn place(&mut self, width: i64, height: i64) {
        self.used_width += width;
        self.height = self.height.max(height);
    }

    /// Whether the vertical bands `[y, y + height)` of two shelves intersect.
    pub fn overlaps(&self, other: &Shelf) -> bool {
        self.y_offset < other.end() && other.y_offset < self.end()
    }
}

/// All shelves opened during one packing run, in creation order.
///
/// The index of a shelf in the table is its identity in the
/// [`FirstFitIndex`](crate::packing::FirstFitIndex).
///
/// Only serializable: a table is built by [`open`](Self::open) and
/// [`place`](Self::place), which keep `top` equal to the highest shelf end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShelfTable {
    shelves: Vec<Shelf>,
    /// Running maximum of `Shelf::end` over all shelves.
    top: i64,
}

impl ShelfTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with room for `capacity` shelves.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            shelves: Vec::with_capacity(capacity),
            top: 0,
        }
    }

    /// Opens a new shelf above everything placed so far and returns its index.
    ///
    /// The new shelf starts at the highest current end coordinate, not at
    /// the end of the previous shelf, because earlier shelves may have grown.
    pub fn open(&mut self, width: i64, height: i64) -> usize {
        let shelf = Shelf::open(self.top, width, height);
        self.top = shelf.end();
        self.shelves.push(shelf);
        self.shelves.len() - 1
    }

    /// Places a task on an existing shelf and returns the updated shelf.
    ///
    /// # Panics
    /// If `index` is out of bounds.
    pub fn place(&mut self, index: usize, width: i64, height: i64) -> &Shelf {
        let shelf = &mut self.shelves[index];
        shelf.place(width, height);
        self.top = self.top.max(shelf.end());
        shelf
    }

    /// Maximum end coordinate over all shelves (0 when empty).
    #[inline]
    pub fn top(&self) -> i64 {
        self.top
    }

    /// Shelf at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Shelf> {
        self.shelves.get(index)
    }

    /// Number of shelves opened.
    #[inline]
    pub fn len(&self) -> usize {
        self.shelves.len()
    }

    /// Whether no shelf has been opened.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shelves.is_empty()
    }

    /// Iterates shelves in creation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Shelf> {
        self.shelves.iter()
    }

    /// Shelves as a slice.
    pub fn as_slice(&self) -> &[Shelf] {
        &self.shelves
    }
}

impl<'a> IntoIterator for &'a ShelfTable {
    type Item = &'a Shelf;
    type IntoIter = std::slice::Iter<'a, Shelf>;

    fn into_iter(self) -> Self::IntoIter {
        self.shelves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shelf_place_grows() {
        let mut shelf = Shelf::open(4, 2, 5);
        shelf.place(1, 3);
        assert_eq!(shelf.used_width, 3);
        assert_eq!(shelf.height, 5);
        shelf.place(1, 7);
        assert_eq!(shelf.height, 7);
        assert_eq!(shelf.end(), 11);
        assert_eq!(shelf.free_width(6), 2);
    }

    #[test]
    fn test_shelf_overlap() {
        let a = Shelf::open(0, 1, 5);
        let b = Shelf::open(5, 1, 4);
        let c = Shelf::open(3, 1, 4);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
    }

    #[test]
    fn test_table_stacks_above_grown_shelf() {
        let mut table = ShelfTable::new();
        assert_eq!(table.top(), 0);
        let first = table.open(2, 3);
        let second = table.open(2, 2);
        assert_eq!(table.get(second).unwrap().y_offset, 3);

        table.place(first, 1, 4);
        table.place(second, 1, 6);
        assert_eq!(table.top(), 9);

        let third = table.open(1, 1);
        assert_eq!(table.get(third).unwrap().y_offset, 9);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_table_iteration() {
        let mut table = ShelfTable::with_capacity(2);
        assert!(table.is_empty());
        table.open(1, 2);
        table.open(1, 1);
        let heights: Vec<i64> = (&table).into_iter().map(|s| s.height).collect();
        assert_eq!(heights, vec![2, 1]);
        assert_eq!(table.as_slice().len(), 2);
        assert_eq!(table.iter().count(), 2);
    }

    #[test]
    fn test_table_serializes_running_top() {
        let mut table = ShelfTable::new();
        let first = table.open(2, 3);
        table.open(1, 1);
        table.place(first, 1, 5);

        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["top"], 5);
        assert_eq!(json["shelves"][1]["y_offset"], 3);
    }
}
