mod coverage_dto;

pub use coverage_dto::{CoverageQuery, CoveredAreaDto};
