//! CSV encoding and decoding for bulk export and import.
//!
//! Column order is stable and mirrors the record schema, so an export from
//! one session imports cleanly into another. List-valued fields (regional,
//! procedures) occupy one column each, joined with `;`; values therefore
//! must not themselves contain the separator.
//!
//! Decoding maps header names to fields, defaulting anything missing to
//! empty: a sheet with only a `date` column still yields importable rows.
//! Unknown columns are ignored.

use crate::error::{LogbookError, Result};
use crate::model::{CaseFields, CaseRecord};
use std::io::{Read, Write};

/// Exported column order. Stable across releases.
pub const HEADERS: &[&str] = &[
    "id",
    "date",
    "session",
    "specialty",
    "operation",
    "priority",
    "asa",
    "age",
    "anaesthetic",
    "airway",
    "regional",
    "procedures",
    "teaching",
    "location",
    "incidents",
];

const LIST_SEPARATOR: &str = ";";

/// Encode records, one row per record, with a leading header row.
pub fn write_records<W: Write>(writer: W, records: &[CaseRecord]) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(HEADERS)?;

    for record in records {
        let f = &record.fields;
        let row = vec![
            record.id.clone(),
            f.date.clone(),
            f.session.clone(),
            f.specialty.clone(),
            f.operation.clone(),
            f.priority.clone(),
            f.asa.clone(),
            f.age.clone(),
            f.anaesthetic.clone(),
            f.airway.clone(),
            join_list(&f.regional),
            join_list(&f.procedures),
            f.teaching.clone(),
            f.location.clone(),
            f.incidents.clone(),
        ];
        out.write_record(&row)?;
    }

    out.flush().map_err(LogbookError::Io)?;
    Ok(())
}

/// Decode rows into record-shaped values for `import_batch`.
///
/// Rows the CSV reader cannot parse are skipped and logged; decoding never
/// fails on row content, only when the header row itself is unreadable.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<CaseRecord>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable row");
                continue;
            }
        };

        let field = |name: &str| -> String {
            headers
                .iter()
                .position(|h| h == name)
                .and_then(|i| row.get(i))
                .unwrap_or("")
                .to_string()
        };

        records.push(CaseRecord {
            id: field("id"),
            fields: CaseFields {
                date: field("date"),
                session: field("session"),
                specialty: field("specialty"),
                operation: field("operation"),
                priority: field("priority"),
                asa: field("asa"),
                age: field("age"),
                anaesthetic: field("anaesthetic"),
                airway: field("airway"),
                regional: split_list(&field("regional")),
                procedures: split_list(&field("procedures")),
                teaching: field("teaching"),
                location: field("location"),
                incidents: field("incidents"),
            },
        });
    }

    Ok(records)
}

fn join_list(values: &[String]) -> String {
    values.join(LIST_SEPARATOR)
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
