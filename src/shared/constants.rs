/// Number of random bytes in a provider auth token (hex-encoded to 40 chars)
pub const AUTH_TOKEN_BYTES: usize = 20;

/// Authorization header scheme for provider tokens
pub const AUTH_SCHEME: &str = "Token";

/// Minimum accepted phone number length
pub const MIN_PHONE_NUMBER_LEN: usize = 8;
