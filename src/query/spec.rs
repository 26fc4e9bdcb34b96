use serde::Deserialize;

/// Page size applied when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: i64 = 100;
/// Hard cap on a single result page.
pub const MAX_PAGE_SIZE: i64 = 500;

/// One catalog query, as assembled from request parameters.
///
/// Every bound is independently optional and inclusive. `order_by` stays a
/// raw tag here; the engine resolves it against the sortable-field table so
/// an unknown tag is rejected before any work happens. Request-scoped only,
/// never persisted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuerySpec {
    /// Case-insensitive substring filter on the record name.
    pub search: Option<String>,
    pub min_radius: Option<f64>,
    pub max_radius: Option<f64>,
    pub min_period: Option<f64>,
    pub max_period: Option<f64>,
    pub min_eq_temp: Option<f64>,
    pub max_eq_temp: Option<f64>,
    pub min_star_temp: Option<f64>,
    pub max_star_temp: Option<f64>,
    pub min_star_radius: Option<f64>,
    pub max_star_radius: Option<f64>,
    /// Bounds on the orbital-distance proxy (AU), derived from the period.
    pub min_distance: Option<f64>,
    pub max_distance: Option<f64>,
    /// Bounds on the derived Earth Similarity Index.
    pub min_esi: Option<f64>,
    pub max_esi: Option<f64>,
    pub order_by: Option<String>,
    pub order_dir: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// The closed set of sortable attributes. Anything else is an
/// `InvalidSortField` error, not a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Radius,
    OrbitalPeriod,
    EquilibriumTemp,
    StarTemp,
    StarRadius,
    Name,
}

impl SortField {
    /// Resolves a request tag. Both the internal attribute names and their
    /// external aliases are accepted, so every API surface shares one table.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "radius" => Some(Self::Radius),
            "period" | "orbital_period" => Some(Self::OrbitalPeriod),
            "eq_temp" | "equilibrium_temp" => Some(Self::EquilibriumTemp),
            "star_temp" => Some(Self::StarTemp),
            "star_radius" => Some(Self::StarRadius),
            "name" => Some(Self::Name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

impl SortDir {
    /// Lenient by contract: exactly `desc` (any case) is descending, absent
    /// defaults to descending, any other tag means ascending.
    pub fn parse(tag: Option<&str>) -> Self {
        match tag {
            None => Self::Desc,
            Some(tag) if tag.eq_ignore_ascii_case("desc") => Self::Desc,
            Some(_) => Self::Asc,
        }
    }
}
