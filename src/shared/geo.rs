use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationError;

/// GeoJSON Polygon geometry as accepted and returned by the API.
///
/// Coordinates are rings of `[longitude, latitude]` positions; the first
/// ring is the exterior. The database side is a PostGIS `geography` column,
/// conversion happens in SQL via `ST_GeomFromGeoJSON` / `ST_AsGeoJSON`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeoJsonPolygon {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<Vec<Vec<f64>>>,
}

impl GeoJsonPolygon {
    /// Parse from the GeoJSON text produced by `ST_AsGeoJSON`.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// GeoJSON text suitable for `ST_GeomFromGeoJSON`.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("polygon serialization is infallible")
    }
}

/// A polygon must declare `"type": "Polygon"` and carry at least one closed
/// ring of four or more `[lng, lat]` positions.
pub fn validate_polygon(polygon: &GeoJsonPolygon) -> Result<(), ValidationError> {
    if polygon.kind != "Polygon" {
        return Err(ValidationError::new("polygon")
            .with_message("Geometry type must be \"Polygon\"".into()));
    }
    if polygon.coordinates.is_empty() {
        return Err(ValidationError::new("polygon")
            .with_message("Polygon must have at least one ring".into()));
    }
    for ring in &polygon.coordinates {
        if ring.len() < 4 {
            return Err(ValidationError::new("polygon")
                .with_message("Each ring must have at least 4 positions".into()));
        }
        if ring.iter().any(|pos| pos.len() != 2) {
            return Err(ValidationError::new("polygon")
                .with_message("Each position must be a [longitude, latitude] pair".into()));
        }
        if ring.first() != ring.last() {
            return Err(ValidationError::new("polygon")
                .with_message("Each ring must be closed (first position == last)".into()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> GeoJsonPolygon {
        GeoJsonPolygon {
            kind: "Polygon".to_string(),
            coordinates: vec![vec![
                vec![100.0, 0.0],
                vec![101.0, 0.0],
                vec![101.0, 1.0],
                vec![100.0, 1.0],
                vec![100.0, 0.0],
            ]],
        }
    }

    #[test]
    fn test_parse_geojson() {
        let raw = r#"{ "type": "Polygon", "coordinates": [ [ [100.0, 0.0], [101.0, 0.0], [101.0, 1.0], [100.0, 1.0], [100.0, 0.0] ]]}"#;
        let polygon = GeoJsonPolygon::from_json(raw).unwrap();
        assert_eq!(polygon, unit_square());
        assert!(validate_polygon(&polygon).is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let polygon = unit_square();
        let parsed = GeoJsonPolygon::from_json(&polygon.to_json()).unwrap();
        assert_eq!(parsed, polygon);
    }

    #[test]
    fn test_rejects_wrong_geometry_type() {
        let mut polygon = unit_square();
        polygon.kind = "Point".to_string();
        assert!(validate_polygon(&polygon).is_err());
    }

    #[test]
    fn test_rejects_empty_coordinates() {
        let mut polygon = unit_square();
        polygon.coordinates.clear();
        assert!(validate_polygon(&polygon).is_err());
    }

    #[test]
    fn test_rejects_open_ring() {
        let mut polygon = unit_square();
        polygon.coordinates[0].pop();
        assert!(validate_polygon(&polygon).is_err());
    }

    #[test]
    fn test_rejects_short_ring() {
        let mut polygon = unit_square();
        polygon.coordinates[0] = vec![vec![100.0, 0.0], vec![101.0, 0.0], vec![100.0, 0.0]];
        assert!(validate_polygon(&polygon).is_err());
    }

    #[test]
    fn test_rejects_malformed_position() {
        let mut polygon = unit_square();
        polygon.coordinates[0][1] = vec![101.0];
        assert!(validate_polygon(&polygon).is_err());
    }
}
