//! Shortest-column packing.

use std::collections::HashMap;

use indexmap::IndexMap;
use masonry_core::{Post, PostId};
use smallvec::{smallvec, SmallVec};
use tracing::{debug, trace, warn};

use crate::columns::{column_width, resolve_column_count};
use crate::config::LayoutConfig;
use crate::position::{ItemPosition, LayoutState};

/// Lay out posts into columns.
///
/// Posts are placed in input order, each into the column with the smallest
/// running height; ties go to the lowest column index. A post's height comes
/// from `known_heights` when present, otherwise from the platform default.
///
/// The result depends only on the arguments. A column count below 1 packs
/// into a single column. Columns past the number of posts can never receive
/// an item, so only `min(columns, posts.len())` lanes are tracked; the column
/// width still divides the container by the full count.
pub fn compute_masonry(
    config: &LayoutConfig,
    posts: &[Post],
    container_width: f64,
    known_heights: &HashMap<PostId, f64>,
) -> LayoutState {
    let columns = resolve_column_count(&config.columns, container_width).max(1) as usize;
    let width = column_width(container_width, config.padding, config.gap, columns);

    if width <= 0.0 && !posts.is_empty() {
        warn!(
            container_width,
            column_width = width,
            columns,
            "container is narrower than its padding and gaps"
        );
    }

    let lanes = columns.min(posts.len().max(1));
    let mut column_heights: SmallVec<[f64; 8]> = smallvec![0.0; lanes];
    let mut positions = IndexMap::with_capacity(posts.len());

    for post in posts {
        let id = post.identifier();
        let height = known_heights
            .get(&id)
            .copied()
            .unwrap_or_else(|| config.default_heights.get(post.platform));

        let column = shortest_column(&column_heights);
        let x = config.padding + column as f64 * (width + config.gap);
        let y = column_heights[column];
        column_heights[column] = y + height + config.gap;

        trace!(id = %id, column, x, y, height, "placed item");

        positions.insert(
            id.clone(),
            ItemPosition {
                id,
                x,
                y,
                width,
                height,
                column,
            },
        );
    }

    let tallest = column_heights.iter().copied().fold(0.0_f64, f64::max);
    let container_height = (tallest - config.gap).max(0.0);

    debug!(
        items = positions.len(),
        columns,
        column_width = width,
        container_height,
        "computed masonry layout"
    );

    LayoutState::new(positions, columns, column_heights, container_height, width)
}

/// Index of the shortest column; the lowest index wins ties.
fn shortest_column(heights: &[f64]) -> usize {
    let mut best = 0;
    for (index, &height) in heights.iter().enumerate().skip(1) {
        if height < heights[best] {
            best = index;
        }
    }
    best
}
