pub mod image_probe;
pub mod quiz;
pub mod report;
