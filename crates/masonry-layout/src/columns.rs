//! Column count and column width resolution.

use masonry_core::{Breakpoint, ColumnSpec};
use smallvec::SmallVec;

/// Resolve the column count for a container width.
///
/// A fixed count is returned as given, including zero or negative values.
/// Breakpoints are tried from the widest minimum down; the first whose
/// minimum width is at most `container_width` wins. If none qualifies the
/// breakpoint with the smallest minimum is used, and an empty list yields 1.
pub fn resolve_column_count(spec: &ColumnSpec, container_width: f64) -> i32 {
    match spec {
        ColumnSpec::Fixed(count) => *count,
        ColumnSpec::Breakpoints(breakpoints) => {
            let mut sorted: SmallVec<[Breakpoint; 8]> = breakpoints.iter().copied().collect();
            sorted.sort_by(|a, b| b.min_width.total_cmp(&a.min_width));

            sorted
                .iter()
                .find(|bp| bp.min_width <= container_width)
                .or_else(|| sorted.last())
                .map_or(1, |bp| bp.columns)
        }
    }
}

/// Width shared by every column.
///
/// `(container_width - 2 * padding - gap * (columns - 1)) / columns`. No
/// clamp is applied, so a container narrower than its padding and gaps
/// produces a zero or negative width.
pub fn column_width(container_width: f64, padding: f64, gap: f64, columns: usize) -> f64 {
    let columns = columns as f64;
    let available = container_width - 2.0 * padding;
    (available - gap * (columns - 1.0)) / columns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakpoints() -> ColumnSpec {
        ColumnSpec::Breakpoints(vec![
            Breakpoint::new(0.0, 1),
            Breakpoint::new(600.0, 2),
            Breakpoint::new(900.0, 3),
            Breakpoint::new(1200.0, 4),
        ])
    }

    #[test]
    fn test_breakpoint_selection() {
        let spec = breakpoints();
        assert_eq!(resolve_column_count(&spec, 320.0), 1);
        assert_eq!(resolve_column_count(&spec, 640.0), 2);
        assert_eq!(resolve_column_count(&spec, 1024.0), 3);
        assert_eq!(resolve_column_count(&spec, 1920.0), 4);
    }

    #[test]
    fn test_breakpoint_lower_bound_is_inclusive() {
        let spec = breakpoints();
        assert_eq!(resolve_column_count(&spec, 600.0), 2);
        assert_eq!(resolve_column_count(&spec, 599.9), 1);
        assert_eq!(resolve_column_count(&spec, 1200.0), 4);
    }

    #[test]
    fn test_breakpoint_order_does_not_matter() {
        let spec = ColumnSpec::Breakpoints(vec![
            Breakpoint::new(900.0, 3),
            Breakpoint::new(0.0, 1),
            Breakpoint::new(1200.0, 4),
            Breakpoint::new(600.0, 2),
        ]);
        assert_eq!(resolve_column_count(&spec, 1000.0), 3);
        assert_eq!(resolve_column_count(&spec, 10.0), 1);
    }

    #[test]
    fn test_no_qualifying_breakpoint_uses_smallest() {
        let spec = ColumnSpec::Breakpoints(vec![
            Breakpoint::new(800.0, 3),
            Breakpoint::new(400.0, 2),
        ]);
        assert_eq!(resolve_column_count(&spec, 100.0), 2);
    }

    #[test]
    fn test_empty_breakpoints_yield_one() {
        assert_eq!(resolve_column_count(&ColumnSpec::Breakpoints(vec![]), 1000.0), 1);
    }

    #[test]
    fn test_fixed_count_passes_through() {
        assert_eq!(resolve_column_count(&ColumnSpec::Fixed(5), 100.0), 5);
        assert_eq!(resolve_column_count(&ColumnSpec::Fixed(0), 100.0), 0);
        assert_eq!(resolve_column_count(&ColumnSpec::Fixed(-3), 100.0), -3);
    }

    #[test]
    fn test_column_width() {
        assert!((column_width(1000.0, 0.0, 16.0, 2) - 492.0).abs() < 0.001);
        // (1000 - 40 - 20) / 3
        assert!((column_width(1000.0, 20.0, 10.0, 3) - 940.0 / 3.0).abs() < 0.001);
        assert!((column_width(1000.0, 20.0, 30.0, 3) - 300.0).abs() < 0.001);
        assert!((column_width(1000.0, 0.0, 16.0, 1) - 1000.0).abs() < 0.001);
    }

    #[test]
    fn test_column_width_is_not_clamped() {
        assert!(column_width(20.0, 0.0, 16.0, 4) < 0.0);
    }
}
