use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Query params for the coverage lookup.
///
/// Both are kept as raw strings so that missing, empty, and non-numeric
/// values all produce the same "Invalid arguments" rejection.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct CoverageQuery {
    /// Latitude of the point
    pub lat: Option<String>,
    /// Longitude of the point
    pub lng: Option<String>,
}

impl CoverageQuery {
    /// Parse into a (lat, lng) pair; any missing or non-numeric value is
    /// an invalid-arguments condition.
    pub fn point(&self) -> Option<(f64, f64)> {
        let lat = self.lat.as_deref().filter(|s| !s.is_empty())?;
        let lng = self.lng.as_deref().filter(|s| !s.is_empty())?;
        Some((lat.parse().ok()?, lng.parse().ok()?))
    }
}

/// A service area covering the queried point, projected to name, price and
/// the owning provider's name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CoveredAreaDto {
    pub name: String,
    pub price: Decimal,
    pub provider: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(lat: Option<&str>, lng: Option<&str>) -> CoverageQuery {
        CoverageQuery {
            lat: lat.map(str::to_string),
            lng: lng.map(str::to_string),
        }
    }

    #[test]
    fn test_point_parses_floats() {
        assert_eq!(
            query(Some("0.5"), Some("100.5")).point(),
            Some((0.5, 100.5))
        );
        assert_eq!(query(Some("-90"), Some("180")).point(), Some((-90.0, 180.0)));
    }

    #[test]
    fn test_point_rejects_missing_or_empty() {
        assert_eq!(query(None, Some("100.5")).point(), None);
        assert_eq!(query(Some("0.5"), None).point(), None);
        assert_eq!(query(Some(""), Some("100.5")).point(), None);
        assert_eq!(query(None, None).point(), None);
    }

    #[test]
    fn test_point_rejects_non_numeric() {
        assert_eq!(query(Some("abc"), Some("100.5")).point(), None);
        assert_eq!(query(Some("0.5"), Some("10,5")).point(), None);
    }
}
