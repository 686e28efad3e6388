//! Reflow transitions between two layout snapshots.
//!
//! The engine keeps no history, so callers hold on to the previous
//! [`LayoutState`] and diff it against the new one. Each item gets a start
//! offset relative to its final position; animating that offset back to
//! zero plays the reflow. Easing is left to the renderer.

use glam::DVec2;
use masonry_core::PostId;

use crate::position::{ItemPosition, LayoutState};

/// Changes smaller than this, in pixels, are not animated.
const EPSILON: f64 = 0.01;

/// Numeric animation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnimationConfig {
    /// Duration of each item's transition
    pub duration_ms: f64,
    /// Extra delay per animated item, in order
    pub stagger_ms: f64,
    /// Upper bound on the stagger delay
    pub max_stagger_ms: f64,
    /// Vertical distance entering items travel
    pub enter_offset: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 300.0,
            stagger_ms: 30.0,
            max_stagger_ms: 300.0,
            enter_offset: 20.0,
        }
    }
}

/// What happened to an item between two layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionKind {
    /// New in the next layout
    Enter,
    /// Position or size changed
    Move,
    /// Unchanged
    Stay,
    /// Gone from the next layout
    Exit,
}

/// Animation instructions for one item.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTransition {
    pub id: PostId,
    pub kind: TransitionKind,
    /// Position in the previous layout
    pub from: Option<ItemPosition>,
    /// Position in the next layout
    pub to: Option<ItemPosition>,
    /// Translation to apply at the start, relative to the final position
    pub offset: DVec2,
    /// Size change from the previous layout (next minus previous)
    pub size_delta: DVec2,
    pub delay_ms: f64,
    pub duration_ms: f64,
}

impl ItemTransition {
    /// Whether the renderer has anything to animate.
    pub fn is_animated(&self) -> bool {
        self.kind != TransitionKind::Stay
    }
}

/// Diff two layouts into per-item transitions.
///
/// Items of `next` come first, in `next`'s order, followed by exits in
/// `previous`'s order. Entering and moving items are staggered in output
/// order; exits and unchanged items start immediately.
pub fn plan_transitions(
    previous: &LayoutState,
    next: &LayoutState,
    config: &AnimationConfig,
) -> Vec<ItemTransition> {
    let mut transitions = Vec::with_capacity(next.len());
    let mut animated = 0usize;

    for to in next.iter() {
        let from = previous.get(to.id.as_str());

        let (kind, offset, size_delta) = match from {
            None => (
                TransitionKind::Enter,
                DVec2::new(0.0, config.enter_offset),
                DVec2::ZERO,
            ),
            Some(from) => {
                let offset = from.position() - to.position();
                let size_delta = to.size() - from.size();
                if offset.abs().max_element() > EPSILON
                    || size_delta.abs().max_element() > EPSILON
                {
                    (TransitionKind::Move, offset, size_delta)
                } else {
                    (TransitionKind::Stay, DVec2::ZERO, DVec2::ZERO)
                }
            }
        };

        let delay_ms = if kind == TransitionKind::Stay {
            0.0
        } else {
            let delay = stagger_delay(animated, config);
            animated += 1;
            delay
        };

        transitions.push(ItemTransition {
            id: to.id.clone(),
            kind,
            from: from.cloned(),
            to: Some(to.clone()),
            offset,
            size_delta,
            delay_ms,
            duration_ms: config.duration_ms,
        });
    }

    for from in previous.iter() {
        if next.get(from.id.as_str()).is_none() {
            transitions.push(ItemTransition {
                id: from.id.clone(),
                kind: TransitionKind::Exit,
                from: Some(from.clone()),
                to: None,
                offset: DVec2::ZERO,
                size_delta: DVec2::ZERO,
                delay_ms: 0.0,
                duration_ms: config.duration_ms,
            });
        }
    }

    transitions
}

fn stagger_delay(index: usize, config: &AnimationConfig) -> f64 {
    (index as f64 * config.stagger_ms).min(config.max_stagger_ms)
}
