// UI module organization
// scene draws the city map + tour + status readout, graphs draws the
// tour-length strip; both paint in fixed canvas pixels like the transform

pub mod graphs;
pub mod scene;

pub use graphs::draw_graph_strip;
pub use scene::{draw_scene, tour_points, SceneInput};

use eframe::egui::Color32;

// palette for the solver output window
pub const BACKGROUND: Color32 = Color32::BLACK;
pub const CITY: Color32 = Color32::from_rgb(0, 255, 0);
pub const TOUR: Color32 = Color32::WHITE;
pub const TEXT: Color32 = Color32::WHITE;
pub const TEXT_BG: Color32 = Color32::BLACK;
pub const GRAPH_BG: Color32 = Color32::WHITE;
pub const ITER_LINE: Color32 = Color32::from_rgb(255, 50, 50);
pub const GLOB_LINE: Color32 = Color32::from_rgb(50, 50, 255);
pub const GRAPH_INK: Color32 = Color32::BLACK;

// fixed canvas geometry (pixels)
pub const WIN_MARGIN: f32 = 10.0;
pub const GRAPH_MARGIN: f32 = 10.0;
pub const TEXT_HEIGHT: f32 = 24.0;
pub const GRAPH_HEIGHT: f32 = 100.0;
pub const AXES_TEXT: f32 = 18.0;
