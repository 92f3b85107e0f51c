//! Filter, sort and page specifications shared by every storage backend

use std::cmp::Ordering;
use std::fmt::Debug;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

use super::entity::StorageEntity;

/// Predicate over one entity type
///
/// Absent conditions are wildcards, so an all-empty filter matches every row.
pub trait EntityFilter<E>: Debug + Send + Sync {
    /// Returns true if the entity satisfies every set condition
    fn matches(&self, entity: &E) -> bool;

    /// Stable serialization of the filter, used to build cache keys
    fn fingerprint(&self) -> Result<String, DomainError>;
}

/// Serializes a filter for [`EntityFilter::fingerprint`]
pub fn fingerprint_of<T: Serialize>(filter: &T) -> Result<String, DomainError> {
    serde_json::to_string(filter)
        .map_err(|e| DomainError::internal(format!("Failed to serialize filter: {}", e)))
}

/// Serializes an optional float bound, writing non-finite values as strings
///
/// `serde_json` writes NaN and infinities as `null`, which would make such a
/// bound share a fingerprint with an absent one.
pub fn serialize_float_bound<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match value {
        Some(v) if !v.is_finite() => serializer.serialize_str(&v.to_string()),
        Some(v) => serializer.serialize_some(v),
        None => serializer.serialize_none(),
    }
}

/// Case-insensitive substring match; an absent or empty needle matches anything
pub fn text_contains(value: Option<&str>, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(n) if n.is_empty() => true,
        Some(n) => value
            .map(|v| v.to_lowercase().contains(&n.to_lowercase()))
            .unwrap_or(false),
    }
}

/// Equality match; an absent condition matches anything
pub fn equals<T: PartialEq>(value: &T, condition: Option<&T>) -> bool {
    condition.is_none_or(|c| value == c)
}

/// Inclusive range match on an optional value; a missing value fails any set bound
pub fn within<T: PartialOrd>(value: Option<&T>, min: Option<&T>, max: Option<&T>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }

    match value {
        Some(v) => min.is_none_or(|m| v >= m) && max.is_none_or(|m| v <= m),
        None => false,
    }
}

/// Sortable column value
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
}

impl SortValue {
    /// Total order used for sorting; nulls sort first, text compares case-insensitively
    pub fn compare(&self, other: &Self) -> Ordering {
        use SortValue::*;

        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Null, _) => Ordering::Less,
            (_, Null) => Ordering::Greater,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Int(a), Float(b)) => (*a as f64).total_cmp(b),
            (Float(a), Int(b)) => a.total_cmp(&(*b as f64)),
            (Text(a), Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)),
            (Date(a), Date(b)) => a.cmp(b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortValue::Null => 0,
            SortValue::Bool(_) => 1,
            SortValue::Int(_) | SortValue::Float(_) => 2,
            SortValue::Text(_) => 3,
            SortValue::Date(_) => 4,
        }
    }
}

impl From<Option<&str>> for SortValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(SortValue::Null, |v| SortValue::Text(v.to_string()))
    }
}

impl From<Option<NaiveDate>> for SortValue {
    fn from(value: Option<NaiveDate>) -> Self {
        value.map_or(SortValue::Null, SortValue::Date)
    }
}

impl From<Option<f64>> for SortValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(SortValue::Null, SortValue::Float)
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Lenient parse: `desc`/`descending` in any case is descending, anything else ascending
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()) {
            Some(v) if v == "desc" || v == "descending" => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Sort specification; no field means key order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    field: Option<String>,
    direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: Option<&str>, direction: SortDirection) -> Self {
        let field = field
            .map(normalize_field_name)
            .filter(|f| !f.is_empty());

        Self { field, direction }
    }

    /// Ascending by key
    pub fn by_key() -> Self {
        Self::default()
    }

    /// Normalized field name, if any
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }
}

/// Lowercases a column name and drops separators
pub fn normalize_field_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Default page size when none (or an invalid one) is requested
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Normalized 1-based page specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    page: u64,
    page_size: u64,
}

impl PageSpec {
    /// Normalizes raw inputs: page < 1 becomes 1, page size < 1 becomes `default_size`
    pub fn new(page: Option<i64>, page_size: Option<i64>, default_size: u64) -> Self {
        let default_size = default_size.max(1);
        let page = page.filter(|p| *p >= 1).map_or(1, |p| p as u64);
        let page_size = page_size
            .filter(|s| *s >= 1)
            .map_or(default_size, |s| s as u64);

        Self { page, page_size }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Rows skipped before this page
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Number of pages needed for `total` rows
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.page_size)
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self::new(None, None, DEFAULT_PAGE_SIZE)
    }
}

/// Filters, sorts and pages rows in memory
///
/// Ties on the sort column are broken by key ascending so that pages are stable.
pub fn select<'a, E, I>(
    rows: I,
    filter: Option<&dyn EntityFilter<E>>,
    sort: &SortSpec,
    page: &PageSpec,
) -> Vec<E>
where
    E: StorageEntity,
    I: IntoIterator<Item = &'a E>,
{
    let mut matched: Vec<&E> = rows
        .into_iter()
        .filter(|e| filter.is_none_or(|f| f.matches(e)))
        .collect();

    matched.sort_by(|a, b| {
        let by_field = match sort.field() {
            Some(field) => match (a.sort_value(field), b.sort_value(field)) {
                (Some(x), Some(y)) => x.compare(&y),
                _ => Ordering::Equal,
            },
            None => Ordering::Equal,
        };

        let ordered = by_field.then_with(|| a.key().cmp(b.key()));

        match sort.direction() {
            SortDirection::Asc => ordered,
            SortDirection::Desc => ordered.reverse(),
        }
    });

    matched
        .into_iter()
        .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
        .take(usize::try_from(page.page_size()).unwrap_or(usize::MAX))
        .cloned()
        .collect()
}

/// Counts rows matching the filter
pub fn count_matching<'a, E, I>(rows: I, filter: Option<&dyn EntityFilter<E>>) -> u64
where
    E: StorageEntity,
    I: IntoIterator<Item = &'a E>,
{
    rows.into_iter()
        .filter(|e| filter.is_none_or(|f| f.matches(e)))
        .count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_contains_is_case_insensitive() {
        assert!(text_contains(Some("Chef Anton's Cajun"), Some("cajun")));
        assert!(!text_contains(Some("Chai"), Some("chang")));
        assert!(!text_contains(None, Some("x")));
    }

    #[test]
    fn test_empty_conditions_are_wildcards() {
        assert!(text_contains(Some("Chai"), None));
        assert!(text_contains(None, Some("")));
        assert!(equals(&5, None));
        assert!(within::<f64>(None, None, None));
    }

    #[test]
    fn test_within_bounds() {
        assert!(within(Some(&18.0), Some(&10.0), Some(&20.0)));
        assert!(within(Some(&10.0), Some(&10.0), None));
        assert!(!within(Some(&25.0), None, Some(&20.0)));
        assert!(!within::<f64>(None, Some(&1.0), None));
    }

    #[test]
    fn test_sort_direction_parse() {
        assert_eq!(SortDirection::parse(Some("DESC")), SortDirection::Desc);
        assert_eq!(SortDirection::parse(Some("descending")), SortDirection::Desc);
        assert_eq!(SortDirection::parse(Some("asc")), SortDirection::Asc);
        assert_eq!(SortDirection::parse(Some("sideways")), SortDirection::Asc);
        assert_eq!(SortDirection::parse(None), SortDirection::Asc);
    }

    #[test]
    fn test_sort_field_normalization() {
        assert_eq!(SortSpec::new(Some("UnitPrice"), SortDirection::Asc).field(), Some("unitprice"));
        assert_eq!(SortSpec::new(Some("unit_price"), SortDirection::Asc).field(), Some("unitprice"));
        assert_eq!(SortSpec::new(Some(""), SortDirection::Asc).field(), None);
    }

    #[test]
    fn test_page_spec_normalization() {
        let page = PageSpec::new(Some(0), Some(-5), 10);
        assert_eq!(page.page(), 1);
        assert_eq!(page.page_size(), 10);
        assert_eq!(page.offset(), 0);

        let page = PageSpec::new(Some(3), Some(25), 10);
        assert_eq!(page.offset(), 50);
    }

    #[test]
    fn test_total_pages() {
        let page = PageSpec::new(Some(1), Some(10), 10);
        assert_eq!(page.total_pages(0), 0);
        assert_eq!(page.total_pages(10), 1);
        assert_eq!(page.total_pages(11), 2);
        assert_eq!(page.total_pages(95), 10);
    }

    #[test]
    fn test_sort_value_ordering() {
        assert_eq!(SortValue::Null.compare(&SortValue::Int(1)), Ordering::Less);
        assert_eq!(
            SortValue::Text("apple".into()).compare(&SortValue::Text("Banana".into())),
            Ordering::Less
        );
        assert_eq!(SortValue::Float(2.5).compare(&SortValue::Int(2)), Ordering::Greater);
    }
}
