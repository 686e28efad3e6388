//! Layout output: per-item positions and the aggregate layout snapshot.

use glam::DVec2;
use indexmap::IndexMap;
use masonry_core::PostId;
use smallvec::SmallVec;

/// Resolved placement of one post.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemPosition {
    pub id: PostId,
    /// Left offset within the container
    pub x: f64,
    /// Top offset within the container
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Zero-based column index
    pub column: usize,
}

impl ItemPosition {
    /// Top-left corner as a vector.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Size as a vector.
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether the open vertical spans of two items intersect.
    pub fn overlaps_vertically(&self, other: &ItemPosition) -> bool {
        self.y < other.bottom() && other.y < self.bottom()
    }
}

/// Snapshot produced by one layout pass.
///
/// Positions keep the order in which posts were supplied. Container height
/// and column width are derived by the packing pass and cannot be set.
///
/// `column_heights` holds one lane per column that received, or could have
/// received, an item; a feed shorter than the column count leaves the
/// remaining columns out.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutState {
    positions: IndexMap<PostId, ItemPosition>,
    column_count: usize,
    column_heights: SmallVec<[f64; 8]>,
    container_height: f64,
    column_width: f64,
}

impl LayoutState {
    pub(crate) fn new(
        positions: IndexMap<PostId, ItemPosition>,
        column_count: usize,
        column_heights: SmallVec<[f64; 8]>,
        container_height: f64,
        column_width: f64,
    ) -> Self {
        Self {
            positions,
            column_count,
            column_heights,
            container_height,
            column_width,
        }
    }

    /// All positions, keyed by post identifier, in input order.
    pub fn positions(&self) -> &IndexMap<PostId, ItemPosition> {
        &self.positions
    }

    /// Position of one post.
    pub fn get(&self, id: &str) -> Option<&ItemPosition> {
        self.positions.get(id)
    }

    /// Iterate over positions in input order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemPosition> {
        self.positions.values()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Running height of each packed column, trailing gap included.
    pub fn column_heights(&self) -> &[f64] {
        &self.column_heights
    }

    /// Number of columns the container was divided into.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Height of the tallest column without its trailing gap.
    pub fn container_height(&self) -> f64 {
        self.container_height
    }

    pub fn column_width(&self) -> f64 {
        self.column_width
    }

    /// Item identifiers grouped by packed column, in the order they were
    /// placed.
    pub fn columns(&self) -> Vec<Vec<&PostId>> {
        let mut columns = vec![Vec::new(); self.column_heights.len()];
        for item in self.positions.values() {
            if let Some(column) = columns.get_mut(item.column) {
                column.push(&item.id);
            }
        }
        columns
    }
}
