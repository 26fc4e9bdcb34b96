use super::spec::QuerySpec;
use crate::catalog::types::CelestialRecord;
use crate::scoring::esi::{record_distance_au, record_esi};

type Extractor = fn(&CelestialRecord) -> Option<f64>;

/// One inclusive range test against a single attribute. A record whose
/// attribute is missing fails the test outright; `min > max` can never
/// match, which is exactly the contract for degenerate input.
struct RangeCheck {
    extract: Extractor,
    min: Option<f64>,
    max: Option<f64>,
}

impl RangeCheck {
    fn matches(&self, record: &CelestialRecord) -> bool {
        let Some(value) = (self.extract)(record) else {
            return false;
        };
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

/// Conjunction of every bound a `QuerySpec` carries.
///
/// Built once per query; evaluation is a pure function of the record.
/// Unbounded attributes contribute no check at all, so an empty spec
/// matches everything.
pub struct Predicate {
    checks: Vec<RangeCheck>,
    name_needle: Option<String>,
}

impl Predicate {
    pub fn build(spec: &QuerySpec) -> Self {
        let bounds: [(Extractor, Option<f64>, Option<f64>); 7] = [
            (|r| r.radius, spec.min_radius, spec.max_radius),
            (|r| r.orbital_period, spec.min_period, spec.max_period),
            (|r| r.equilibrium_temp, spec.min_eq_temp, spec.max_eq_temp),
            (|r| r.star_temp, spec.min_star_temp, spec.max_star_temp),
            (|r| r.star_radius, spec.min_star_radius, spec.max_star_radius),
            (record_distance_au, spec.min_distance, spec.max_distance),
            (record_esi, spec.min_esi, spec.max_esi),
        ];

        let checks = bounds
            .into_iter()
            .filter(|(_, min, max)| min.is_some() || max.is_some())
            .map(|(extract, min, max)| RangeCheck { extract, min, max })
            .collect();

        let name_needle = spec
            .search
            .as_deref()
            .filter(|needle| !needle.is_empty())
            .map(str::to_lowercase);

        Self {
            checks,
            name_needle,
        }
    }

    pub fn matches(&self, record: &CelestialRecord) -> bool {
        if let Some(needle) = &self.name_needle {
            // A record without a name never matches a non-empty filter.
            let Some(name) = &record.name else {
                return false;
            };
            if !name.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }

        self.checks.iter().all(|check| check.matches(record))
    }
}
