//! Service-area CRUD, scoped to the token-authenticated provider.
//!
//! Every operation only ever sees areas owned by the caller. An area owned
//! by another provider is reported as missing, not forbidden, so its
//! existence never leaks.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/areas/` | Token | Create area owned by the caller |
//! | GET | `/api/areas/` | Token | List the caller's areas |
//! | GET | `/api/areas/{id}` | Token | Fetch one of the caller's areas |
//! | PUT | `/api/areas/{id}` | Token | Full update |
//! | PATCH | `/api/areas/{id}` | Token | Partial update |
//! | DELETE | `/api/areas/{id}` | Token | Delete |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ServiceAreaService;
