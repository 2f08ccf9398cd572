pub mod generate;
pub mod limit;
