//! The persisted RSVP entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical attendance state, independent of the wire vocabulary used to
/// submit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "particip")]
    Attending,
    #[serde(rename = "nu_particip")]
    NotAttending,
}

impl Status {
    pub fn is_attending(self) -> bool {
        matches!(self, Status::Attending)
    }
}

/// Normalized submission, before an id and timestamp are assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub name: String,
    pub status: Status,
    pub party_size: u32,
    pub phone: String,
    pub note: String,
}

/// One guest's RSVP record. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpEntry {
    pub id: Uuid,
    #[serde(rename = "nume")]
    pub name: String,
    pub status: Status,
    #[serde(rename = "persoane")]
    pub party_size: u32,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub note: String,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl RsvpEntry {
    /// Stamp a draft with a fresh id and the current time.
    pub fn from_draft(draft: EntryDraft) -> Self {
        Self::with_identity(draft, Uuid::new_v4(), Utc::now())
    }

    pub fn with_identity(draft: EntryDraft, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            status: draft.status,
            party_size: draft.party_size,
            phone: draft.phone,
            note: draft.note,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape() {
        let id = Uuid::new_v4();
        let created_at = DateTime::parse_from_rfc3339("2025-06-01T18:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let entry = RsvpEntry::with_identity(
            EntryDraft {
                name: "Ana".into(),
                status: Status::Attending,
                party_size: 2,
                phone: String::new(),
                note: "vegetarian".into(),
            },
            id,
            created_at,
        );

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["id"], json!(id.to_string()));
        assert_eq!(value["nume"], "Ana");
        assert_eq!(value["status"], "particip");
        assert_eq!(value["persoane"], 2);
        assert_eq!(value["note"], "vegetarian");
        assert_eq!(value["timestamp"], "2025-06-01T18:30:00Z");
    }

    #[test]
    fn test_missing_optional_fields_default_to_empty() {
        let entry: RsvpEntry = serde_json::from_value(json!({
            "id": Uuid::new_v4(),
            "nume": "Ion",
            "status": "nu_particip",
            "persoane": 0,
            "timestamp": "2025-06-01T18:30:00Z",
        }))
        .unwrap();

        assert_eq!(entry.status, Status::NotAttending);
        assert!(entry.phone.is_empty());
        assert!(entry.note.is_empty());
    }
}
