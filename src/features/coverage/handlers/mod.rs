mod coverage_handler;

pub use coverage_handler::*;
