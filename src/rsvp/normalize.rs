//! Tolerant input normalization.
//!
//! Guests have submitted through several revisions of the invitation page,
//! each with its own field names and value encodings. Every accepted key is
//! listed in [`FIELD_ALIASES`]; resolution walks that table instead of
//! branching per key.

use serde_json::{Map, Value};

use crate::error::RsvpError;
use crate::rsvp::entry::{EntryDraft, Status};

/// Canonical field a submitted key maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    /// Boolean or numeric attendance flag.
    StatusFlag,
    /// Free-text attendance token.
    StatusText,
    PartySize,
    Phone,
    Note,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::StatusFlag => "status_flag",
            Field::StatusText => "status_text",
            Field::PartySize => "party_size",
            Field::Phone => "phone",
            Field::Note => "note",
        }
    }
}

/// Accepted keys per canonical field, in resolution order.
pub const FIELD_ALIASES: &[(Field, &[&str])] = &[
    (Field::Name, &["nume", "name"]),
    (Field::StatusFlag, &["particip", "participare"]),
    (Field::StatusText, &["status", "prezenta"]),
    (Field::PartySize, &["persoane", "persons"]),
    (Field::Phone, &["phone", "telefon"]),
    (Field::Note, &["note", "mesaj"]),
];

pub const AFFIRMATIVE: &[&str] = &["true", "1", "y", "yes", "da", "particip", "vin"];
pub const NEGATIVE: &[&str] = &["false", "0", "n", "no", "nu", "nu_particip", "nu_vin"];

/// Party size used when a submitted value cannot be read as a number.
const DEFAULT_PARTY_SIZE: u32 = 1;

/// Map an arbitrary submission onto a canonical draft.
pub fn normalize(input: &Map<String, Value>) -> Result<EntryDraft, RsvpError> {
    let name = text(input, Field::Name);
    if name.is_empty() {
        return Err(RsvpError::InvalidInput("name is required".into()));
    }

    let status = resolve_status(input).ok_or_else(|| {
        RsvpError::InvalidInput("attendance status is missing or not recognized".into())
    })?;

    let party_size = resolve_party_size(input, status);

    Ok(EntryDraft {
        name,
        status,
        party_size,
        phone: text(input, Field::Phone),
        note: text(input, Field::Note),
    })
}

fn aliases(field: Field) -> &'static [&'static str] {
    FIELD_ALIASES
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, keys)| *keys)
        .unwrap_or(&[])
}

/// Present, non-null values for a field, in alias order.
fn values<'a>(input: &'a Map<String, Value>, field: Field) -> impl Iterator<Item = &'a Value> {
    aliases(field)
        .iter()
        .filter_map(move |key| input.get(*key))
        .filter(|value| !value.is_null())
}

/// First string-like value of a field, trimmed. Numbers are accepted so a
/// phone typed into a numeric input survives.
fn text(input: &Map<String, Value>, field: Field) -> String {
    values(input, field)
        .find_map(|value| match value {
            Value::String(s) => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .unwrap_or_default()
}

fn resolve_status(input: &Map<String, Value>) -> Option<Status> {
    values(input, Field::StatusFlag)
        .find_map(flag_status)
        .or_else(|| values(input, Field::StatusText).find_map(token_status))
}

fn flag_status(value: &Value) -> Option<Status> {
    match value {
        Value::Bool(true) => Some(Status::Attending),
        Value::Bool(false) => Some(Status::NotAttending),
        Value::Number(n) => n.as_f64().map(|n| {
            if n != 0.0 {
                Status::Attending
            } else {
                Status::NotAttending
            }
        }),
        Value::String(_) => token_status(value),
        _ => None,
    }
}

fn token_status(value: &Value) -> Option<Status> {
    let token = value.as_str()?.trim().to_lowercase();
    if AFFIRMATIVE.contains(&token.as_str()) {
        Some(Status::Attending)
    } else if NEGATIVE.contains(&token.as_str()) {
        Some(Status::NotAttending)
    } else {
        None
    }
}

fn resolve_party_size(input: &Map<String, Value>, status: Status) -> u32 {
    let raw = values(input, Field::PartySize)
        .find(|value| !matches!(value, Value::String(s) if s.trim().is_empty()));

    match raw {
        None if status.is_attending() => DEFAULT_PARTY_SIZE,
        None => 0,
        Some(value) => coerce_count(value).map_or(DEFAULT_PARTY_SIZE, clamp),
    }
}

fn coerce_count(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
        }
        _ => None,
    }
}

fn clamp(n: i64) -> u32 {
    u32::try_from(n.max(0)).unwrap_or(u32::MAX)
}
