use std::path::PathBuf;

use serde::Deserialize;

use crate::data::model::DEFAULT_POSITION_CODES;

/// Fixed location of the dataset, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/nba_data_processed.csv";

/// Everything the dashboard treats as a constant: where the data lives, the
/// slider domain, initial widget values and chart styling.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    /// Inclusive domain of the age slider.
    pub age_slider: (u32, u32),
    pub default_ages: (u32, u32),
    pub default_positions: Vec<String>,
    pub chart_height: f32,
    pub axis_title_size: f32,
    pub legend_label_size: f32,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            age_slider: (18, 40),
            default_ages: (20, 30),
            default_positions: DEFAULT_POSITION_CODES.iter().map(|c| c.to_string()).collect(),
            chart_height: 320.0,
            axis_title_size: 14.0,
            legend_label_size: 12.0,
            window_size: [1100.0, 820.0],
            min_window_size: [640.0, 480.0],
        }
    }
}
