//! Static nearby-hospital list.
//!
//! The engine does no geography. The list is fixed fictional data placed
//! at constant offsets from a reference point so that a map widget has
//! something to draw.

use triage_contracts::assessment::Facility;

/// `(name, latitude offset, longitude offset)` from the reference point.
const HOSPITALS: &[(&str, f64, f64)] = &[
    ("City Hospital", 0.01, 0.01),
    ("Metro Clinic", -0.01, -0.02),
    ("Green Valley Hospital", 0.015, -0.015),
];

/// Facilities near `(latitude, longitude)`.
pub fn nearby_hospitals(latitude: f64, longitude: f64) -> Vec<Facility> {
    HOSPITALS
        .iter()
        .map(|&(name, dlat, dlon)| Facility {
            name: name.to_string(),
            latitude: latitude + dlat,
            longitude: longitude + dlon,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hospitals_are_offset_from_reference_point() {
        let facilities = nearby_hospitals(28.6139, 77.2090);
        assert_eq!(facilities.len(), 3);

        assert_eq!(facilities[0].name, "City Hospital");
        assert!((facilities[0].latitude - 28.6239).abs() < 1e-9);
        assert!((facilities[0].longitude - 77.2190).abs() < 1e-9);

        assert_eq!(facilities[1].name, "Metro Clinic");
        assert!((facilities[1].latitude - 28.6039).abs() < 1e-9);
        assert!((facilities[1].longitude - 77.1890).abs() < 1e-9);

        assert_eq!(facilities[2].name, "Green Valley Hospital");
        assert!((facilities[2].latitude - 28.6289).abs() < 1e-9);
        assert!((facilities[2].longitude - 77.1940).abs() < 1e-9);
    }
}
