use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Stroke};
use eframe::egui::epaint::TextShape;

use crate::graph;
use crate::series::SeriesStore;
use crate::settings::ViewerSettings;

use super::{AXES_TEXT, GLOB_LINE, GRAPH_BG, GRAPH_INK, GRAPH_MARGIN, ITER_LINE, TEXT_HEIGHT};

/// draw the two-graph strip: iteration best on the left, global best on
/// the right, both rescaled every frame against the shared (min, max).
pub fn draw_graph_strip(
    painter: &egui::Painter,
    strip: Rect,
    series: &SeriesStore,
    elapsed_secs: f64,
    settings: &ViewerSettings,
) {
    painter.rect_filled(strip, 0.0, GRAPH_BG);

    // separator between the two graphs
    let mid_x = strip.center().x;
    painter.line_segment(
        [
            Pos2::new(mid_x, strip.top()),
            Pos2::new(mid_x, strip.bottom()),
        ],
        Stroke::new(3.0, GRAPH_INK),
    );

    let left = Rect::from_min_max(strip.min, Pos2::new(mid_x, strip.bottom()));
    let right = Rect::from_min_max(Pos2::new(mid_x, strip.top()), strip.max);

    draw_half(
        painter,
        left,
        "Iteration Best",
        series.iter_best(),
        ITER_LINE,
        series,
        elapsed_secs,
        settings,
    );
    draw_half(
        painter,
        right,
        "Global Best",
        series.glob_best(),
        GLOB_LINE,
        series,
        elapsed_secs,
        settings,
    );
}

#[allow(clippy::too_many_arguments)]
fn draw_half(
    painter: &egui::Painter,
    half: Rect,
    title: &str,
    values: &[f64],
    line_color: Color32,
    series: &SeriesStore,
    elapsed_secs: f64,
    settings: &ViewerSettings,
) {
    let labels = settings.show_graph_labels;
    let bounds = labels && settings.show_graph_bounds;

    // axis labels reserve space along the bottom edge
    let bottom_inset = if bounds { AXES_TEXT } else { GRAPH_MARGIN };
    let top_inset = if labels { TEXT_HEIGHT - 10.0 } else { 0.0 };

    if labels {
        painter.text(
            half.min + egui::vec2(2.0, 0.0),
            Align2::LEFT_TOP,
            title,
            FontId::proportional(14.0),
            GRAPH_INK,
        );
        rotated_label(
            painter,
            Pos2::new(half.left() + 4.0, half.bottom() - bottom_inset),
            "Tour Length",
            11.0,
            GRAPH_INK,
        );

        if bounds && !series.is_empty() {
            // y axis: observed max near the top, min near the bottom
            rotated_label(
                painter,
                Pos2::new(half.left() + AXES_TEXT + 2.0, half.top() + TEXT_HEIGHT + 30.0),
                &format!("{:.0}", series.max()),
                11.0,
                GRAPH_INK,
            );
            rotated_label(
                painter,
                Pos2::new(half.left() + AXES_TEXT + 2.0, half.bottom() - bottom_inset),
                &format!("{:.0}", series.min()),
                11.0,
                GRAPH_INK,
            );
            // x axis: 0 .. elapsed seconds
            painter.text(
                Pos2::new(half.left() + 2.0 * AXES_TEXT, half.bottom()),
                Align2::LEFT_BOTTOM,
                "0",
                FontId::proportional(11.0),
                GRAPH_INK,
            );
            painter.text(
                Pos2::new(half.right() - GRAPH_MARGIN, half.bottom()),
                Align2::RIGHT_BOTTOM,
                format!("{elapsed_secs:.0}"),
                FontId::proportional(11.0),
                GRAPH_INK,
            );
            painter.text(
                Pos2::new(half.center().x, half.bottom()),
                Align2::CENTER_BOTTOM,
                "Time (sec)",
                FontId::proportional(11.0),
                GRAPH_INK,
            );
        }

        // axes
        let corner = Pos2::new(half.left() + 2.0 * AXES_TEXT, half.bottom() - bottom_inset);
        painter.line_segment(
            [Pos2::new(corner.x, half.top() + AXES_TEXT), corner],
            Stroke::new(1.0, GRAPH_INK),
        );
        painter.line_segment(
            [corner, Pos2::new(half.right() - GRAPH_MARGIN, corner.y)],
            Stroke::new(1.0, GRAPH_INK),
        );
    }

    let plot = Rect::from_min_max(
        Pos2::new(
            half.left() + 2.0 * AXES_TEXT + GRAPH_MARGIN,
            half.top() + top_inset + GRAPH_MARGIN,
        ),
        Pos2::new(
            half.right() - GRAPH_MARGIN,
            half.bottom() - bottom_inset - GRAPH_MARGIN,
        ),
    );
    let pts = graph::polyline(values, plot.min, plot.size(), series.min(), series.max());
    if pts.len() > 1 {
        painter.add(egui::Shape::line(pts, Stroke::new(1.0, line_color)));
    }
}

/// vertical text reading bottom-to-top, anchored at the bottom of the run
fn rotated_label(painter: &egui::Painter, anchor: Pos2, text: &str, size: f32, color: Color32) {
    let galley = painter.layout_no_wrap(text.to_owned(), FontId::proportional(size), color);
    let mut shape = TextShape::new(anchor, galley, color);
    shape.angle = -std::f32::consts::FRAC_PI_2;
    painter.add(shape);
}
