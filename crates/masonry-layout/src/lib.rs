//! Masonry layout computation for embedded social-media posts.
//!
//! This crate assigns each post a column and an absolute position inside a
//! container, packing greedily into the shortest column. Post heights are
//! usually unknown until the embedded content loads, so the engine keeps a
//! map of measured heights and falls back to a per-platform estimate.
//!
//! # Architecture
//!
//! 1. **Column resolution**: fixed count or responsive breakpoints
//! 2. **Packing**: shortest-column placement in input order
//! 3. **Reflow**: measured heights are fed back and the layout recomputed
//! 4. **Transitions**: two snapshots are diffed into animation offsets
//!
//! # Example
//!
//! ```
//! use masonry_core::Post;
//! use masonry_layout::{LayoutConfig, MasonryEngine};
//!
//! let mut engine = MasonryEngine::new(LayoutConfig::default().with_columns(2));
//! let posts = vec![
//!     Post::twitter("https://x.com/rustlang/status/1"),
//!     Post::instagram("https://www.instagram.com/p/Cabc123/"),
//! ];
//!
//! engine.calculate(&posts, 1000.0);
//! engine.update_item_height("tw-1", 320.0);
//! let state = engine.calculate(&posts, 1000.0);
//!
//! assert_eq!(state.get("tw-1").map(|p| p.height), Some(320.0));
//! ```

mod columns;
mod compute;
mod config;
mod engine;
mod position;
mod transition;

pub use columns::{column_width, resolve_column_count};
pub use compute::compute_masonry;
pub use config::{DefaultHeights, LayoutConfig};
pub use engine::MasonryEngine;
pub use position::{ItemPosition, LayoutState};
pub use transition::{plan_transitions, AnimationConfig, ItemTransition, TransitionKind};

pub use masonry_core::{
    Breakpoint, ColumnSpec, ConfigError, LayoutError, MasonryError, Platform, Post, PostId,
};
