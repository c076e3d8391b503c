//! Provider directory: registration, CRUD and token issuance.
//!
//! Providers log in with their email; an opaque auth token is minted once
//! at creation and never regenerated.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/providers/` | No | Create provider (mints token) |
//! | GET | `/api/providers/` | No | List providers |
//! | POST | `/api/providers/get_token` | No | Look up a provider's token by email |
//! | GET | `/api/providers/{id}` | No | Fetch one provider |
//! | PUT | `/api/providers/{id}` | No | Full update (token not exposed) |
//! | PATCH | `/api/providers/{id}` | No | Partial update (token not exposed) |
//! | DELETE | `/api/providers/{id}` | No | Delete provider and owned areas |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ProviderService;
