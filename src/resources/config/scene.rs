use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub craft_model: String,
    pub craft_label: String,
    pub obstacle_model: String,
    /// Where the marker obstacle is placed, just above the runway
    pub obstacle_position: Vector3<f64>,
    pub obstacle_label: String,
    pub day_backdrop: String,
    pub night_backdrop: String,
    pub backdrop_label: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            craft_model: "models/jet_wheels_down_PP.wrl".to_string(),
            craft_label: "jet1".to_string(),
            obstacle_model: "models/cube4x4x4redShinyPlastic_pp.wrl".to_string(),
            obstacle_position: Vector3::new(10.0, 0.0, 1.1),
            obstacle_label: "Shiny Red Plastic Cube".to_string(),
            day_backdrop: "images/skyboxes/sky_mountains+6.jpg".to_string(),
            night_backdrop: "images/skyboxes/space_gray_matter+6.jpg".to_string(),
            backdrop_label: "Sky Box".to_string(),
        }
    }
}
