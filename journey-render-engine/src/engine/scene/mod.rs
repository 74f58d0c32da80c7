pub mod cosmos;
pub mod galaxy;
pub mod starfield;
