//! Core data types: [`CaseRecord`], [`CaseFields`], and id generation.
//!
//! A record is the unit of persisted data. Every field except `id` is
//! opaque to the core: values pass through unvalidated, and a stored entry
//! missing fields still deserializes (everything defaults to empty). Only
//! a missing or empty `id` disqualifies an entry.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Suggested specialty vocabulary for form adapters. Free text is equally
/// valid; the core never validates against this list.
pub const SPECIALTIES: &[&str] = &[
    "ENT",
    "General Surgery",
    "Orthopaedics",
    "Ophthalmology",
    "Urology",
    "Plastic",
    "Neurosurgery",
    "Maxillofacial",
    "Obstetrics",
    "Gynaecology",
    "Cardiac",
    "Thoracic",
    "Vascular",
    "Other",
];

/// Suggested regional technique vocabulary for form adapters.
pub const REGIONAL_TECHNIQUES: &[&str] = &[
    "Spinal",
    "Epidural",
    "Supraclavicular",
    "Interscalene",
    "Adductor canal",
    "Femoral",
    "Popliteal",
    "Transversus abdominis plane (TAP)",
    "Wound infiltration",
];

/// The structured fields of a case, without identity.
///
/// This is the shape a form adapter produces. List-valued fields keep
/// insertion order; duplicates are permitted but discouraged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFields {
    /// Calendar date, `YYYY-MM-DD`. May be empty on legacy records.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub session: String,
    /// Primary classification, used by the aggregate views.
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub operation: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub asa: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub anaesthetic: String,
    #[serde(default)]
    pub airway: String,
    #[serde(default)]
    pub regional: Vec<String>,
    /// Procedures performed during the case.
    #[serde(default)]
    pub procedures: Vec<String>,
    #[serde(default)]
    pub teaching: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub incidents: String,
}

/// One logged case: a unique id plus its fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Unique, stable identifier. Empty only on values not yet admitted by
    /// the repository, such as rows arriving through an import decoder.
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub fields: CaseFields,
}

impl CaseRecord {
    /// Build a record from form fields, assigning a fresh id.
    pub fn new(fields: CaseFields) -> Self {
        Self {
            id: new_case_id(),
            fields,
        }
    }
}

/// Generate a process-unique case id: a base36 millisecond timestamp
/// followed by a fixed-width base36 random suffix.
///
/// Collisions are treated as negligible, not impossible; the repository
/// does not re-check uniqueness before writing. The timestamp prefix keeps
/// ids of the same length lexicographically ordered by creation time, so
/// the descending-id tie break in listings favours newer records.
pub fn new_case_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u128;
    let entropy = Uuid::new_v4().as_u128() & 0x000f_ffff;
    format!("{}{:0>4}", to_base36(millis), to_base36(entropy))
}

fn to_base36(mut value: u128) -> String {
    const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % 36) as usize] as char);
        value /= 36;
    }
    digits.iter().rev().collect()
}
