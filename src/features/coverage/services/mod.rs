mod coverage_service;

pub use coverage_service::CoverageService;
