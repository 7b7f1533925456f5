//! Pure aggregate views over a record snapshot, for chart adapters.
//!
//! Both functions are total over any input, including empty, and never
//! fail: sparse records degrade into a sentinel bucket or pass-through
//! grouping instead of erroring.

use crate::model::CaseRecord;
use std::collections::BTreeMap;

/// Bucket for records whose date is empty.
pub const UNKNOWN_BUCKET: &str = "Unknown";

/// Count records per `YYYY-MM` month bucket, taken as the first seven
/// characters of the date. Dateless records land in [`UNKNOWN_BUCKET`]
/// rather than being dropped.
///
/// Keys iterate in ascending lexicographic order, which is chronological
/// for this format; the sentinel sorts after every date bucket.
pub fn counts_by_month(records: &[CaseRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        let bucket = if record.fields.date.is_empty() {
            UNKNOWN_BUCKET.to_string()
        } else {
            record.fields.date.chars().take(7).collect()
        };
        *counts.entry(bucket).or_insert(0) += 1;
    }
    counts
}

/// Count records per specialty, grouped by exact string equality.
///
/// No normalization: case and whitespace are significant. "ENT" and "ent"
/// are different buckets.
pub fn counts_by_specialty(records: &[CaseRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.fields.specialty.clone()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CaseFields;

    fn with_date(date: &str) -> CaseRecord {
        CaseRecord {
            id: "x".to_string(),
            fields: CaseFields {
                date: date.to_string(),
                ..Default::default()
            },
        }
    }

    fn with_specialty(specialty: &str) -> CaseRecord {
        CaseRecord {
            id: "x".to_string(),
            fields: CaseFields {
                specialty: specialty.to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_counts_by_month_groups_and_sentinels() {
        let records = vec![
            with_date("2024-01-05"),
            with_date("2024-01-20"),
            with_date(""),
        ];

        let counts = counts_by_month(&records);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["2024-01"], 2);
        assert_eq!(counts[UNKNOWN_BUCKET], 1);
    }

    #[test]
    fn test_counts_by_month_keys_ascend_chronologically() {
        let records = vec![
            with_date("2024-03-01"),
            with_date("2023-11-09"),
            with_date(""),
            with_date("2024-01-15"),
        ];

        let keys: Vec<_> = counts_by_month(&records).into_keys().collect();
        assert_eq!(keys, vec!["2023-11", "2024-01", "2024-03", UNKNOWN_BUCKET]);
    }

    #[test]
    fn test_counts_by_month_short_date_passes_through() {
        // Malformed but non-empty dates group under their own prefix.
        let counts = counts_by_month(&[with_date("2024")]);
        assert_eq!(counts["2024"], 1);
    }

    #[test]
    fn test_counts_by_specialty() {
        let records = vec![
            with_specialty("ENT"),
            with_specialty("ENT"),
            with_specialty("General Surgery"),
        ];

        let counts = counts_by_specialty(&records);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["ENT"], 2);
        assert_eq!(counts["General Surgery"], 1);
    }

    #[test]
    fn test_counts_by_specialty_is_exact_match() {
        let records = vec![
            with_specialty("ENT"),
            with_specialty("ent"),
            with_specialty("ENT "),
        ];

        let counts = counts_by_specialty(&records);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts["ENT"], 1);
    }

    #[test]
    fn test_empty_specialty_groups_under_empty_string() {
        let counts = counts_by_specialty(&[with_specialty("")]);
        assert_eq!(counts[""], 1);
    }

    #[test]
    fn test_empty_input_yields_empty_maps() {
        assert!(counts_by_month(&[]).is_empty());
        assert!(counts_by_specialty(&[]).is_empty());
    }
}
