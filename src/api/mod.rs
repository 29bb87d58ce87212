mod engine;
mod engine_config;
mod engine_snapshot;
mod frame_builder;
mod render_style;
mod validation;

pub use engine::RadarEngine;
pub use engine_config::RadarEngineConfig;
pub use engine_snapshot::RadarEngineSnapshot;
pub use frame_builder::build_radar_frame;
pub use render_style::RadarStyle;
