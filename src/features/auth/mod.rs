//! Opaque bearer-token authentication for providers.
//!
//! Every provider receives a token exactly once, at creation. Requests to
//! the service-area endpoints carry it as `Authorization: Token <key>`;
//! the middleware in `core::middleware` resolves it to an
//! [`AuthenticatedProvider`] through [`TokenAuthenticator`].

pub mod model;
pub mod service;
pub mod token;

pub use model::AuthenticatedProvider;
pub use service::TokenAuthenticator;
