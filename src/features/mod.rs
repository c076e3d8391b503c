pub mod auth;
pub mod coverage;
pub mod providers;
pub mod service_areas;
