/// Provider identity resolved from an auth token, injected into request
/// extensions by the auth middleware.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct AuthenticatedProvider {
    pub id: i64,
    pub name: String,
    pub email: String,
}
