/// viewer settings
/// persisted to settings.json; command-line flags override the loaded values
use serde::{Deserialize, Serialize};

/// where the graph strip sits relative to the city map
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphPosition {
    Top,
    Bottom,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ViewerSettings {
    /// status file the solver appends to
    pub channel_name: String,
    /// fit the window to the problem extent once, on the first sample
    pub adjust_window: bool,
    /// truncate the channel file at startup so stale runs never show
    pub force_recreate_channel: bool,
    /// delete the channel file when the window closes
    pub delete_channel_on_exit: bool,
    /// visual refresh cap, frames per second
    pub refresh_rate_hz: f32,

    // displayed elements, each independently toggleable
    pub show_cities: bool,
    pub show_tour: bool,
    pub show_text: bool,
    pub show_graphs: bool,
    pub show_graph_labels: bool,
    pub show_graph_bounds: bool,
    pub graph_position: GraphPosition,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            channel_name: "GUIFile".to_owned(),
            adjust_window: true,
            force_recreate_channel: true,
            delete_channel_on_exit: true,
            refresh_rate_hz: 5.0,
            show_cities: true,
            show_tour: true,
            show_text: true,
            show_graphs: true,
            show_graph_labels: true,
            show_graph_bounds: true,
            graph_position: GraphPosition::Bottom,
        }
    }
}

impl ViewerSettings {
    /// save settings to JSON file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write("settings.json", json)?;
        Ok(())
    }

    /// load settings from JSON file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        match std::fs::read_to_string("settings.json") {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("failed to parse settings.json: {e}. using defaults.");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
