//! Stateful masonry engine.
//!
//! Owns the configuration, the container width, the map of measured item
//! heights, and the last computed [`LayoutState`]. Height reports and
//! recalculation are separate calls so a caller can batch many reports
//! into one layout pass.

use std::collections::HashMap;

use masonry_core::{ColumnSpec, LayoutError, Platform, Post, PostId};
use tracing::{debug, warn};

use crate::columns::{column_width, resolve_column_count};
use crate::compute::compute_masonry;
use crate::config::LayoutConfig;
use crate::position::{ItemPosition, LayoutState};

/// Masonry layout engine for one rendered collection.
#[derive(Debug, Clone, Default)]
pub struct MasonryEngine {
    config: LayoutConfig,
    container_width: f64,
    heights: HashMap<PostId, f64>,
    state: LayoutState,
}

impl MasonryEngine {
    /// Create an engine with the given configuration and no known heights.
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            container_width: 0.0,
            heights: HashMap::new(),
            state: LayoutState::default(),
        }
    }

    /// Set the initial container width.
    pub fn with_container_width(mut self, width: f64) -> Self {
        self.container_width = width;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Lay out `posts` in a container of `container_width` pixels.
    ///
    /// The width is remembered for later calls. The previous state is
    /// replaced, not merged.
    pub fn calculate(&mut self, posts: &[Post], container_width: f64) -> &LayoutState {
        self.container_width = container_width;
        self.state = compute_masonry(&self.config, posts, container_width, &self.heights);
        &self.state
    }

    /// Lay out `posts` at the current container width.
    pub fn recalculate(&mut self, posts: &[Post]) -> &LayoutState {
        self.calculate(posts, self.container_width)
    }

    /// Like [`calculate`](Self::calculate), but rejects container widths that
    /// would produce a degenerate layout. The stored state is left untouched
    /// on error.
    pub fn try_calculate(
        &mut self,
        posts: &[Post],
        container_width: f64,
    ) -> Result<&LayoutState, LayoutError> {
        if !container_width.is_finite() || container_width <= 0.0 {
            return Err(LayoutError::InvalidContainerWidth {
                width: container_width,
            });
        }

        let columns = resolve_column_count(&self.config.columns, container_width);
        let column_width = column_width(
            container_width,
            self.config.padding,
            self.config.gap,
            columns.max(1) as usize,
        );
        if column_width <= 0.0 {
            return Err(LayoutError::ContainerTooNarrow {
                container_width,
                column_width,
                columns,
            });
        }

        Ok(self.calculate(posts, container_width))
    }

    /// Record the measured height of an item.
    ///
    /// Takes effect on the next calculation. Heights that are negative or
    /// not finite are ignored.
    pub fn update_item_height(&mut self, id: impl Into<PostId>, height: f64) {
        let id = id.into();
        if !height.is_finite() || height < 0.0 {
            warn!(id = %id, height, "ignoring invalid item height");
            return;
        }
        debug!(id = %id, height, "item height updated");
        self.heights.insert(id, height);
    }

    /// Known height of an item, if one has been reported.
    pub fn item_height(&self, id: &str) -> Option<f64> {
        self.heights.get(id).copied()
    }

    /// Forget the height of a removed item.
    pub fn remove_item(&mut self, id: &str) -> Option<f64> {
        self.heights.remove(id)
    }

    /// Forget every known height.
    pub fn clear_heights(&mut self) {
        self.heights.clear();
    }

    /// Forget every known height and drop the stored layout.
    pub fn reset(&mut self) {
        self.heights.clear();
        self.state = LayoutState::default();
    }

    /// Set the width used by subsequent calculations.
    pub fn set_container_width(&mut self, width: f64) {
        self.container_width = width;
    }

    /// Column count for the current container width.
    ///
    /// Does not require a layout to have been calculated.
    pub fn column_count(&self) -> i32 {
        resolve_column_count(&self.config.columns, self.container_width)
    }

    pub fn set_gap(&mut self, gap: f64) {
        self.config.gap = gap;
    }

    pub fn set_columns(&mut self, columns: impl Into<ColumnSpec>) {
        self.config.columns = columns.into();
    }

    pub fn set_padding(&mut self, padding: f64) {
        self.config.padding = padding;
    }

    pub fn set_default_height(&mut self, platform: Platform, height: f64) {
        self.config.default_heights.set(platform, height);
    }

    /// The last computed layout.
    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    /// Position of one item in the last computed layout.
    pub fn item_position(&self, id: &str) -> Option<&ItemPosition> {
        self.state.get(id)
    }
}
