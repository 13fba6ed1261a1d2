pub mod logger;
pub mod swatch_pipeline;
