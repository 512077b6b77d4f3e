use eframe::egui::{self, Align2, FontId, Pos2, Rect, Stroke};

use crate::settings::ViewerSettings;

/// everything the scene needs for one frame, borrowed from the run state
pub struct SceneInput<'a> {
    /// city positions in canvas pixels, index-aligned with tour indices
    pub pixels: &'a [Pos2],
    /// latest tour as city indices
    pub tour: &'a [usize],
    pub problem_name: &'a str,
    /// latest (iteration-best, global-best) pair
    pub latest: Option<(f64, f64)>,
    pub elapsed_secs: f64,
    /// vertical offset of the status text (below a top graph strip)
    pub text_offset: f32,
}

/// map tour indices to drawable pixel points.
///
/// out-of-range indices are skipped, not fatal: the solver may momentarily
/// write a tour against a different city count, and a best-effort render
/// beats a crash mid-run.
pub fn tour_points(tour: &[usize], pixels: &[Pos2]) -> Vec<Pos2> {
    tour.iter().filter_map(|&i| pixels.get(i).copied()).collect()
}

/// draw cities, tour overlay, and the status readout onto the canvas
pub fn draw_scene(
    painter: &egui::Painter,
    canvas: Rect,
    input: &SceneInput<'_>,
    settings: &ViewerSettings,
) {
    let offset = canvas.min.to_vec2();

    if settings.show_cities {
        for &p in input.pixels {
            painter.circle_filled(p + offset, 3.0, super::CITY);
        }
    }

    if settings.show_tour {
        let pts: Vec<Pos2> = tour_points(input.tour, input.pixels)
            .into_iter()
            .map(|p| p + offset)
            .collect();
        if pts.len() > 1 {
            // closed cycle back to the first city
            painter.add(egui::Shape::closed_line(pts, Stroke::new(1.0, super::TOUR)));
        }
    }

    if settings.show_text {
        let strip = Rect::from_min_size(
            canvas.min + egui::vec2(0.0, input.text_offset),
            egui::vec2(canvas.width(), super::TEXT_HEIGHT),
        );
        painter.rect_filled(strip, 0.0, super::TEXT_BG);
        let (iter_best, glob_best) = input.latest.unwrap_or((0.0, 0.0));
        let readout = format!(
            "Problem Name: {}    Iteration Best: {:.3}    Global Best: {:.3}    Time: {:.3}",
            input.problem_name, iter_best, glob_best, input.elapsed_secs
        );
        painter.text(
            strip.left_center() + egui::vec2(4.0, 0.0),
            Align2::LEFT_CENTER,
            readout,
            FontId::proportional(14.0),
            super::TEXT,
        );
    }
}
