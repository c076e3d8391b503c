pub mod constants;
pub mod geo;
pub mod test_helpers;
pub mod validation;
