// problem-space to canvas-space fitting
//
// the city list comes in problem units with y growing upward; the canvas
// wants pixels with y growing downward. the fit preserves aspect ratio by
// picking the tighter of the two axis ratios and applying it uniformly.

use eframe::egui::{pos2, Pos2};

/// axis-aligned extent of the city set in problem space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// scan the full point set once; None for an empty set
    pub fn from_points(points: &[(f64, f64)]) -> Option<Bounds> {
        let (&(x0, y0), rest) = points.split_first()?;
        let mut b = Bounds {
            x_min: x0,
            x_max: x0,
            y_min: y0,
            y_max: y0,
        };
        for &(x, y) in rest {
            b.x_min = b.x_min.min(x);
            b.x_max = b.x_max.max(x);
            b.y_min = b.y_min.min(y);
            b.y_max = b.y_max.max(y);
        }
        Some(b)
    }

    /// x extent, never zero (degenerate problems fall back to 1)
    pub fn x_range(&self) -> f64 {
        let r = self.x_max - self.x_min;
        if r == 0.0 {
            1.0
        } else {
            r
        }
    }

    /// y extent, never zero
    pub fn y_range(&self) -> f64 {
        let r = self.y_max - self.y_min;
        if r == 0.0 {
            1.0
        } else {
            r
        }
    }
}

/// fixed canvas geometry the fit works against
#[derive(Clone, Copy, Debug)]
pub struct CanvasSpec {
    pub width: f32,
    pub height: f32,
    /// pixel gap between the window edge and the farthest city
    pub margin: f32,
    /// height of the status text strip
    pub text_height: f32,
    /// height of the graph strip (0 when graphs are hidden)
    pub graph_height: f32,
    /// graphs above the map instead of below it
    pub graph_on_top: bool,
}

impl CanvasSpec {
    /// vertical pixel offset of the map area caused by a top graph strip
    pub fn graph_offset(&self) -> f32 {
        if self.graph_on_top {
            self.graph_height
        } else {
            0.0
        }
    }
}

/// result of fitting the city set onto the canvas
#[derive(Clone, Debug)]
pub struct FittedView {
    /// city positions in pixel space, index-aligned with the input list
    pub pixels: Vec<Pos2>,
    /// canvas size that exactly wraps the fitted extent (for window auto-fit)
    pub fitted_size: (f32, f32),
}

/// map every city into pixel space, preserving aspect ratio and flipping y.
///
/// the input list is left untouched so the same problem-space coordinates
/// can be refitted later (e.g. against a different canvas).
pub fn fit(cities: &[(f64, f64)], bounds: &Bounds, spec: &CanvasSpec) -> FittedView {
    let x_range = bounds.x_range();
    let y_range = bounds.y_range();

    let x_ratio = (spec.width as f64 - 2.0 * spec.margin as f64) / x_range;
    let y_ratio = (spec.height as f64 - (spec.margin + spec.text_height) as f64) / y_range;
    let ratio = x_ratio.min(y_ratio);

    let graph_offset = spec.graph_offset();
    let pixels = cities
        .iter()
        .map(|&(x, y)| {
            let px = (x - bounds.x_min) * ratio + spec.margin as f64;
            // problem-space y grows upward, canvas y grows downward
            let py = y_range * ratio - (y - bounds.y_min) * ratio
                + (spec.margin + spec.text_height + graph_offset) as f64;
            pos2(px as f32, py as f32)
        })
        .collect();

    let fitted_size = (
        (x_range * ratio) as f32 + 2.0 * spec.margin,
        (y_range * ratio) as f32 + spec.text_height + 2.0 * spec.margin + spec.graph_height,
    );

    FittedView {
        pixels,
        fitted_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> CanvasSpec {
        CanvasSpec {
            width: 1024.0,
            height: 768.0,
            margin: 10.0,
            text_height: 24.0,
            graph_height: 100.0,
            graph_on_top: false,
        }
    }

    #[test]
    fn test_bounds_from_points() {
        let b = Bounds::from_points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]).unwrap();
        assert_eq!(b.x_min, 0.0);
        assert_eq!(b.x_max, 10.0);
        assert_eq!(b.y_min, 0.0);
        assert_eq!(b.y_max, 10.0);
    }

    #[test]
    fn test_bounds_empty_is_none() {
        assert!(Bounds::from_points(&[]).is_none());
    }

    #[test]
    fn test_degenerate_range_falls_back_to_one() {
        let b = Bounds::from_points(&[(5.0, 7.0), (5.0, 7.0)]).unwrap();
        assert_eq!(b.x_range(), 1.0);
        assert_eq!(b.y_range(), 1.0);
        // and the fit produces finite pixels
        let view = fit(&[(5.0, 7.0), (5.0, 7.0)], &b, &spec());
        assert!(view.pixels.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn test_aspect_ratio_preserved() {
        let cities = [(0.0, 0.0), (30.0, 0.0), (30.0, 10.0), (4.0, 9.0)];
        let b = Bounds::from_points(&cities).unwrap();
        let view = fit(&cities, &b, &spec());
        // pixel-space deltas must keep the problem-space dx/dy ratio
        for (i, j) in [(0, 1), (0, 2), (1, 3), (2, 3)] {
            let dx_p = cities[j].0 - cities[i].0;
            let dy_p = cities[j].1 - cities[i].1;
            if dx_p == 0.0 || dy_p == 0.0 {
                continue;
            }
            let dx_s = (view.pixels[j].x - view.pixels[i].x) as f64;
            let dy_s = (view.pixels[j].y - view.pixels[i].y) as f64;
            assert!(
                ((dx_s / dy_s).abs() - (dx_p / dy_p).abs()).abs() < 1e-3,
                "aspect broken between cities {i} and {j}"
            );
        }
    }

    #[test]
    fn test_y_axis_is_flipped() {
        let cities = [(0.0, 0.0), (0.0, 10.0)];
        let b = Bounds::from_points(&cities).unwrap();
        let view = fit(&cities, &b, &spec());
        // the higher problem-space city lands higher on screen (smaller y)
        assert!(view.pixels[1].y < view.pixels[0].y);
    }

    #[test]
    fn test_min_corner_lands_on_margin() {
        let cities = [(2.0, 3.0), (12.0, 13.0)];
        let b = Bounds::from_points(&cities).unwrap();
        let s = spec();
        let view = fit(&cities, &b, &s);
        assert!((view.pixels[0].x - s.margin).abs() < 1e-3);
        // y_max city sits at the top of the map area
        assert!((view.pixels[1].y - (s.margin + s.text_height)).abs() < 1e-3);
    }

    #[test]
    fn test_top_graph_shifts_map_down() {
        let cities = [(0.0, 0.0), (10.0, 10.0)];
        let b = Bounds::from_points(&cities).unwrap();
        let bottom = fit(&cities, &b, &spec());
        let top = fit(
            &cities,
            &b,
            &CanvasSpec {
                graph_on_top: true,
                ..spec()
            },
        );
        for (a, z) in bottom.pixels.iter().zip(&top.pixels) {
            assert!((z.y - a.y - 100.0).abs() < 1e-3);
            assert_eq!(z.x, a.x);
        }
    }

    #[test]
    fn test_fitted_size_wraps_extent() {
        let cities = [(0.0, 0.0), (100.0, 50.0)];
        let b = Bounds::from_points(&cities).unwrap();
        let s = spec();
        let view = fit(&cities, &b, &s);
        // width-limited problem: ratio = (1024 - 20) / 100
        let ratio = (s.width - 2.0 * s.margin) / 100.0;
        let want_w = 100.0 * ratio + 2.0 * s.margin;
        let want_h = 50.0 * ratio + s.text_height + 2.0 * s.margin + s.graph_height;
        assert!((view.fitted_size.0 - want_w).abs() < 1e-2);
        assert!((view.fitted_size.1 - want_h).abs() < 1e-2);
    }
}
