use std::fmt;

use serde::{Deserialize, Serialize};

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A named place on the map. Names are unique within a dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Marks the tour origin. Exactly one location per dataset may carry it.
    #[serde(default)]
    pub start: bool,
}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64, start: bool) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            start,
        }
    }

    /// Great-circle distance in meters (haversine).
    pub fn dist(&self, rhs: &Self) -> f64 {
        let (lat1, lat2) = (self.latitude.to_radians(), rhs.latitude.to_radians());
        let dlat = (rhs.latitude - self.latitude).to_radians();
        let dlng = (rhs.longitude - self.longitude).to_radians();
        let s1 = (dlat / 2.0).sin();
        let s2 = (dlng / 2.0).sin();
        let h = s1 * s1 + lat1.cos() * lat2.cos() * s2 * s2;
        2.0 * EARTH_RADIUS_M * h.sqrt().asin()
    }

    pub(crate) fn has_valid_coords(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lat = ryu::Buffer::new();
        let mut lng = ryu::Buffer::new();
        write!(
            f,
            "{}@{},{}",
            self.name,
            lat.format(self.latitude),
            lng.format(self.longitude)
        )?;
        if self.start {
            f.write_str(" (start)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Location;

    #[test]
    fn finite_coords_are_accepted() {
        assert!(Location::new("sw", -90.0, -180.0, false).has_valid_coords());
        assert!(Location::new("ne", 90.0, 180.0, false).has_valid_coords());
        assert!(Location::new("off-map", 91.0, 181.0, false).has_valid_coords());
    }

    #[test]
    fn non_finite_coords_are_rejected() {
        assert!(!Location::new("x", f64::NAN, 0.0, false).has_valid_coords());
        assert!(!Location::new("x", 0.0, f64::INFINITY, false).has_valid_coords());
    }

    #[test]
    fn dist_is_symmetric_and_zero_for_same_point() {
        let london = Location::new("London", 51.510826, -0.119476, true);
        let paris = Location::new("Paris", 48.860649, 2.351074, false);

        let there = london.dist(&paris);
        let back = paris.dist(&london);

        assert!((there - back).abs() < 1e-6);
        assert!(london.dist(&london).abs() < 1e-12);
        // London to Paris is a little over 340 km.
        assert!((330_000.0..350_000.0).contains(&there), "got {there}");
    }

    #[test]
    fn display_includes_name_coords_and_start_marker() {
        assert_eq!(
            Location::new("A", 1.5, -2.25, true).to_string(),
            "A@1.5,-2.25 (start)"
        );
        assert_eq!(Location::new("B", 0.0, 3.0, false).to_string(), "B@0.0,3.0");
    }

    #[test]
    fn start_defaults_to_false_when_missing_from_json() {
        let loc: Location =
            serde_json::from_value(serde_json::json!({"name": "Oslo", "latitude": 59.9, "longitude": 10.7}))
                .expect("location json");
        assert!(!loc.start);
    }
}
