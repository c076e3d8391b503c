//! Public point-coverage lookup across all providers.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/get_areas/?lat=<f>&lng=<f>` | No | Areas whose polygon contains the point |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::CoverageService;
