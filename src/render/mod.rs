pub mod export;
pub mod pipeline;
pub mod raster;
