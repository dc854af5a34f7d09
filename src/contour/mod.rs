pub mod assemble;
pub mod boundary;
pub mod bridge;
pub mod corners;
