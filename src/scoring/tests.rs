//! Scoring Module Tests
//!
//! Validates both score functions against their reference values and the
//! null-skipping rules.
//!
//! ## Test Scopes
//! - **ESI**: Peak value, monotonicity, clamping, rounding.
//! - **Distance proxy**: Kepler's-law conversion and degenerate periods.
//! - **Habitability**: Factor floors, period penalty, missing attributes.
//! - **Wire shapes**: Similarity request/response JSON contract.

#[cfg(test)]
mod tests {
    use crate::catalog::store::{InMemoryStore, RecordStore};
    use crate::catalog::types::{CelestialRecord, NewRecord};
    use crate::scoring::esi::{esi, orbital_distance_au, record_distance_au, record_esi};
    use crate::scoring::habitability::habitability_score;
    use crate::scoring::handlers::{SimilarityRequest, SimilarityResponse};
    use approx::assert_relative_eq;

    fn stored(record: NewRecord) -> CelestialRecord {
        let store = InMemoryStore::new();
        let id = store.insert(record).unwrap();
        store.find_by_id(id).unwrap().unwrap()
    }

    // ============================================================
    // ESI TESTS
    // ============================================================

    #[test]
    fn test_esi_peaks_at_earth_values() {
        assert_eq!(esi(1.0, 1.0, Some(288.0)), 1.0);
        assert_eq!(esi(1.0, 1.0, None), 1.0);
    }

    #[test]
    fn test_esi_decreases_with_radius_distance() {
        let earth = esi(1.0, 1.0, None);
        let puffy = esi(3.0, 1.0, None);
        let remote = esi(1.0, 5.0, None);

        assert!(puffy < earth);
        assert!(remote < earth);
        assert!(esi(3.0, 5.0, None) < puffy.min(remote));
    }

    #[test]
    fn test_esi_temperature_term() {
        let temperate = esi(1.0, 1.0, Some(288.0));
        let hot = esi(1.0, 1.0, Some(576.0));

        assert!(hot < temperate);
        // Missing temperature skips the term rather than zeroing the score.
        assert_eq!(esi(1.0, 1.0, None), temperate);
    }

    #[test]
    fn test_esi_rounded_to_three_decimals() {
        // exp(-0.5) = 0.6065...
        assert_eq!(esi(1.5, 1.0, None), 0.607);
        assert_eq!(esi(1.0, 1.25, None), 0.779);
    }

    #[test]
    fn test_esi_stays_in_unit_interval() {
        for (radius, distance, temp) in [
            (50.0, 1.0, None),
            (1.0, 100.0, Some(5000.0)),
            (0.0, 0.0, Some(0.0)),
        ] {
            let score = esi(radius, distance, temp);
            assert!((0.0..=1.0).contains(&score), "esi out of range: {}", score);
        }
    }

    // ============================================================
    // DISTANCE PROXY TESTS
    // ============================================================

    #[test]
    fn test_one_year_period_is_one_au() {
        assert_eq!(orbital_distance_au(365.25), Some(1.0));
    }

    #[test]
    fn test_distance_proxy_follows_keplers_law() {
        // 8x the period -> 4x the distance.
        let near = orbital_distance_au(365.25).unwrap();
        let far = orbital_distance_au(8.0 * 365.25).unwrap();
        assert_relative_eq!(far / near, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_distance_proxy_rejects_degenerate_periods() {
        assert_eq!(orbital_distance_au(0.0), None);
        assert_eq!(orbital_distance_au(-10.0), None);
    }

    #[test]
    fn test_record_esi_requires_radius_and_period() {
        let complete = stored(NewRecord {
            radius: Some(1.0),
            orbital_period: Some(365.25),
            equilibrium_temp: Some(288.0),
            ..Default::default()
        });
        assert_eq!(record_esi(&complete), Some(1.0));

        let no_radius = stored(NewRecord {
            orbital_period: Some(365.25),
            ..Default::default()
        });
        assert_eq!(record_esi(&no_radius), None);

        let no_period = stored(NewRecord {
            radius: Some(1.0),
            ..Default::default()
        });
        assert_eq!(record_distance_au(&no_period), None);
        assert_eq!(record_esi(&no_period), None);
    }

    #[test]
    fn test_record_esi_without_temperature() {
        let record = stored(NewRecord {
            radius: Some(1.0),
            orbital_period: Some(365.25),
            ..Default::default()
        });
        assert_eq!(record_esi(&record), Some(1.0));
    }

    // ============================================================
    // HABITABILITY TESTS
    // ============================================================

    #[test]
    fn test_habitability_earth_twin_scores_one() {
        let record = stored(NewRecord {
            radius: Some(1.0),
            equilibrium_temp: Some(288.0),
            orbital_period: Some(365.25),
            ..Default::default()
        });
        assert_eq!(habitability_score(&record), 1.0);
    }

    #[test]
    fn test_habitability_decreases_away_from_earth_radius() {
        let score_of = |radius: f64| {
            habitability_score(&stored(NewRecord {
                radius: Some(radius),
                ..Default::default()
            }))
        };

        assert!(score_of(1.0) > score_of(1.5));
        assert!(score_of(1.5) > score_of(2.5));
    }

    #[test]
    fn test_habitability_factors_floor_at_one_tenth() {
        // Radius factor would be negative without the floor.
        let giant = stored(NewRecord {
            radius: Some(10.0),
            ..Default::default()
        });
        assert_eq!(habitability_score(&giant), 0.1);

        let scorched = stored(NewRecord {
            equilibrium_temp: Some(2000.0),
            ..Default::default()
        });
        assert_eq!(habitability_score(&scorched), 0.1);
    }

    #[test]
    fn test_habitability_period_penalty_edges() {
        let score_of = |period: f64| {
            habitability_score(&stored(NewRecord {
                orbital_period: Some(period),
                ..Default::default()
            }))
        };

        // Inclusive band: 1 and 1000 days escape the penalty.
        assert_eq!(score_of(1.0), 1.0);
        assert_eq!(score_of(1000.0), 1.0);
        assert_eq!(score_of(0.5), 0.5);
        assert_eq!(score_of(1500.0), 0.5);
    }

    #[test]
    fn test_habitability_skips_missing_attributes() {
        // Nothing measured: no term applies, score stays 1.0.
        let bare = stored(NewRecord::default());
        assert_eq!(habitability_score(&bare), 1.0);

        // Only temperature present: radius term must not fire.
        let temp_only = stored(NewRecord {
            equilibrium_temp: Some(288.0),
            ..Default::default()
        });
        assert_eq!(habitability_score(&temp_only), 1.0);
    }

    #[test]
    fn test_habitability_combines_factors() {
        // radius factor 0.75, temp factor 0.75, period penalty 0.5
        let record = stored(NewRecord {
            radius: Some(1.5),
            equilibrium_temp: Some(338.0),
            orbital_period: Some(0.2),
            ..Default::default()
        });
        assert_relative_eq!(habitability_score(&record), 0.281, epsilon = 1e-9);
    }

    // ============================================================
    // SIMILARITY ENDPOINT TESTS - wire shapes
    // ============================================================

    #[test]
    fn test_similarity_request_temperature_is_optional() {
        let with_temp: SimilarityRequest =
            serde_json::from_str(r#"{"radius": 1.0, "distance": 1.0, "temperature": 288.0}"#)
                .unwrap();
        assert_eq!(with_temp.temperature, Some(288.0));

        let without: SimilarityRequest =
            serde_json::from_str(r#"{"radius": 2.0, "distance": 0.5}"#).unwrap();
        assert_eq!(without.temperature, None);
    }

    #[test]
    fn test_similarity_response_uses_upper_case_key() {
        let json = serde_json::to_value(SimilarityResponse { esi: 0.93 }).unwrap();
        assert_eq!(json["ESI"], serde_json::json!(0.93));
        assert!(json.get("esi").is_none());
    }
}
