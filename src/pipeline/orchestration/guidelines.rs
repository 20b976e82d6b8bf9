use crate::pipeline::services::image::quality::PHOTO_RECOMMENDATIONS;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct UserGuidelines {
    pub photo_recommendations: Vec<&'static str>,
    pub what_to_wear: Vec<&'static str>,
    pub lighting_tips: Vec<&'static str>,
    pub camera_tips: Vec<&'static str>,
}

const WHAT_TO_WEAR: [&str; 4] = [
    "A plain white or light grey top",
    "No makeup, or as little as possible",
    "No colored contact lenses",
    "Hair down and visible, not covered by a hat",
];

const LIGHTING_TIPS: [&str; 4] = [
    "Stand facing a window in indirect daylight",
    "Avoid direct sun and harsh shadows",
    "Turn off warm indoor bulbs that tint the skin",
    "Avoid overhead lighting that darkens the eyes",
];

const CAMERA_TIPS: [&str; 4] = [
    "Use the rear camera when possible",
    "Disable beauty filters and portrait effects",
    "Keep the camera at eye level, about an arm's length away",
    "Tap the face to focus before taking the photo",
];

impl UserGuidelines {
    pub fn standard() -> Self {
        Self {
            photo_recommendations: PHOTO_RECOMMENDATIONS.to_vec(),
            what_to_wear: WHAT_TO_WEAR.to_vec(),
            lighting_tips: LIGHTING_TIPS.to_vec(),
            camera_tips: CAMERA_TIPS.to_vec(),
        }
    }
}
