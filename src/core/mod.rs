pub mod catalog;
pub mod layout;
pub mod types;

pub use catalog::{SkillCatalog, SkillCategory};
pub use layout::{RadarLayout, RadarPoint, compute_radar_layout};
pub use types::{SkillLevel, Viewport};
