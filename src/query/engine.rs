use super::predicate::Predicate;
use super::spec::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, QuerySpec, SortDir, SortField};
use crate::catalog::store::{RecordStore, StoreError};
use crate::catalog::types::CelestialRecord;
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    /// The requested sort tag is not in the sortable-field table. Client
    /// input error; the store is never touched.
    #[error("invalid sort field: {tag}")]
    InvalidSortField { tag: String },
    /// The record store could not serve the snapshot. Server-side; the
    /// engine neither retries nor masks it.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result of one query: the page of records plus the match count before
/// pagination, which response metadata reports alongside the page.
#[derive(Debug)]
pub struct QueryOutcome {
    pub total_matched: usize,
    pub records: Vec<CelestialRecord>,
}

/// Runs one query end to end: filter over a store snapshot, stable sort,
/// then pagination. All-or-nothing; a rejected spec produces no partial
/// output.
pub fn run_query(store: &dyn RecordStore, spec: &QuerySpec) -> Result<QueryOutcome, QueryError> {
    let sort_field = match spec.order_by.as_deref() {
        Some(tag) => Some(
            SortField::parse(tag).ok_or_else(|| QueryError::InvalidSortField {
                tag: tag.to_string(),
            })?,
        ),
        None => None,
    };
    let sort_dir = SortDir::parse(spec.order_dir.as_deref());
    let predicate = Predicate::build(spec);

    let mut matched: Vec<CelestialRecord> = store
        .all()?
        .into_iter()
        .filter(|record| predicate.matches(record))
        .collect();
    let total_matched = matched.len();

    if let Some(field) = sort_field {
        // Stable sort: equal keys keep their insertion order.
        matched.sort_by(|a, b| compare_records(a, b, field, sort_dir));
    }

    let limit = spec
        .limit
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE) as usize;
    let offset = spec.offset.unwrap_or(0).max(0) as usize;

    let records: Vec<CelestialRecord> = matched.into_iter().skip(offset).take(limit).collect();

    tracing::debug!(
        "Query matched {} records, returning {} from offset {}",
        total_matched,
        records.len(),
        offset
    );

    Ok(QueryOutcome {
        total_matched,
        records,
    })
}

fn compare_records(
    a: &CelestialRecord,
    b: &CelestialRecord,
    field: SortField,
    dir: SortDir,
) -> Ordering {
    match field {
        SortField::Name => {
            cmp_nullable(a.name.as_deref(), b.name.as_deref(), dir, |x, y| x.cmp(y))
        }
        _ => cmp_nullable(
            numeric_key(a, field),
            numeric_key(b, field),
            dir,
            |x: &f64, y: &f64| x.partial_cmp(y).unwrap_or(Ordering::Equal),
        ),
    }
}

fn numeric_key(record: &CelestialRecord, field: SortField) -> Option<f64> {
    match field {
        SortField::Radius => record.radius,
        SortField::OrbitalPeriod => record.orbital_period,
        SortField::EquilibriumTemp => record.equilibrium_temp,
        SortField::StarTemp => record.star_temp,
        SortField::StarRadius => record.star_radius,
        SortField::Name => None,
    }
}

/// Missing keys sort to the end in both directions, so a null can never
/// masquerade as the maximum under `desc` or the minimum under `asc`.
fn cmp_nullable<T, F>(a: Option<T>, b: Option<T>, dir: SortDir, cmp: F) -> Ordering
where
    F: Fn(&T, &T) -> Ordering,
{
    match (a, b) {
        (Some(x), Some(y)) => match dir {
            SortDir::Asc => cmp(&x, &y),
            SortDir::Desc => cmp(&x, &y).reverse(),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
