// series-to-polyline mapping for the scrolling graphs
//
// the polyline is rebuilt from scratch on every call against the current
// shared (min, max); there is no cached scale, so a widened range simply
// rescales the whole line next frame.

use eframe::egui::{Pos2, Vec2};

/// guards the vertical mapping when max == min (flat or single-sample series)
const RANGE_EPSILON: f64 = 1e-12;

/// map a value series onto a pixel rectangle.
///
/// index i runs left to right across `size.x`; values map top-down from
/// `max` to `min`. callers draw a line only when at least two points come
/// back - a single sample cannot form a segment.
pub fn polyline(values: &[f64], origin: Pos2, size: Vec2, min: f64, max: f64) -> Vec<Pos2> {
    if values.is_empty() {
        return Vec::new();
    }

    let x_step = size.x / values.len() as f32;
    let span = (max - min) + RANGE_EPSILON;

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = origin.x + i as f32 * x_step;
            let y = origin.y + size.y * (((max - v) / span) as f32);
            Pos2::new(x, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{pos2, vec2};

    #[test]
    fn test_empty_series_draws_nothing() {
        let pts = polyline(&[], pos2(0.0, 0.0), vec2(100.0, 50.0), 0.0, 1.0);
        assert!(pts.is_empty());
    }

    #[test]
    fn test_single_sample_has_no_segment() {
        // one point comes back but there is nothing to connect it to
        let pts = polyline(&[42.0], pos2(0.0, 0.0), vec2(100.0, 50.0), 42.0, 42.0);
        assert_eq!(pts.len(), 1);
        assert!(pts[0].y.is_finite());
    }

    #[test]
    fn test_flat_series_no_division_by_zero() {
        let pts = polyline(&[5.0, 5.0, 5.0], pos2(0.0, 0.0), vec2(90.0, 60.0), 5.0, 5.0);
        assert_eq!(pts.len(), 3);
        for p in &pts {
            assert!(p.y.is_finite());
            // (max - v) is zero, so everything sits at the top edge
            assert!(p.y.abs() < 1.0);
        }
    }

    #[test]
    fn test_vertical_mapping_endpoints() {
        let pts = polyline(
            &[10.0, 20.0],
            pos2(0.0, 100.0),
            vec2(80.0, 50.0),
            10.0,
            20.0,
        );
        // max value at the top of the extent, min at the bottom
        assert!((pts[1].y - 100.0).abs() < 1e-3);
        assert!((pts[0].y - 150.0).abs() < 1e-3);
    }

    #[test]
    fn test_horizontal_spacing() {
        let pts = polyline(
            &[1.0, 2.0, 3.0, 4.0],
            pos2(10.0, 0.0),
            vec2(100.0, 10.0),
            1.0,
            4.0,
        );
        assert_eq!(pts.len(), 4);
        assert!((pts[0].x - 10.0).abs() < 1e-3);
        let step = pts[1].x - pts[0].x;
        assert!((step - 25.0).abs() < 1e-3);
        assert!((pts[3].x - pts[2].x - step).abs() < 1e-3);
    }
}
