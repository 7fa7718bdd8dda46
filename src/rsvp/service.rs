//! RSVP service operations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::admin::{AdminGate, AdminGrant, RequestAuth, SessionId};
use crate::error::{Result, RsvpError};
use crate::rsvp::entry::RsvpEntry;
use crate::rsvp::normalize::normalize;
use crate::store::RecordStore;

/// Attendance tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Entries marked attending.
    #[serde(rename = "confirmari")]
    pub attending: usize,
    /// Entries marked not attending.
    #[serde(rename = "refuzuri")]
    pub declining: usize,
    /// Sum of party sizes over attending entries.
    #[serde(rename = "total_persoane")]
    pub total_party_size: u64,
    #[serde(rename = "total_inregistrari")]
    pub total_entries: usize,
}

impl Stats {
    pub fn tally(entries: &[RsvpEntry]) -> Self {
        entries.iter().fold(
            Stats {
                total_entries: entries.len(),
                ..Stats::default()
            },
            |mut stats, entry| {
                if entry.status.is_attending() {
                    stats.attending += 1;
                    stats.total_party_size += u64::from(entry.party_size);
                } else {
                    stats.declining += 1;
                }
                stats
            },
        )
    }
}

/// Submit, list, delete and tally RSVP entries.
pub struct RsvpService {
    store: RecordStore,
    gate: AdminGate,
}

impl RsvpService {
    pub fn new(store: RecordStore, gate: AdminGate) -> Self {
        Self { store, gate }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn gate(&self) -> &AdminGate {
        &self.gate
    }

    fn authorize(&self, auth: &RequestAuth) -> Result<AdminGrant> {
        self.gate.authorize(auth)
    }

    /// Normalize and persist a submission.
    pub async fn submit(&self, input: &Map<String, Value>) -> Result<RsvpEntry> {
        let draft = normalize(input)?;
        let entry = RsvpEntry::from_draft(draft);

        self.store.append(entry.clone()).await?;

        tracing::info!(
            id = %entry.id,
            status = ?entry.status,
            party_size = entry.party_size,
            "RSVP recorded"
        );
        Ok(entry)
    }

    /// Every entry in stored order.
    pub async fn list(&self, auth: &RequestAuth) -> Result<Vec<RsvpEntry>> {
        self.authorize(auth)?;
        self.store.list().await
    }

    /// Remove the entry with `id`.
    pub async fn delete(&self, auth: &RequestAuth, id: &str) -> Result<RsvpEntry> {
        self.authorize(auth)?;

        let not_found = || RsvpError::NotFound(id.to_string());
        let uuid = Uuid::parse_str(id).map_err(|_| not_found())?;
        let removed = self.store.remove_by_id(uuid).await?.ok_or_else(not_found)?;

        tracing::info!(id = %removed.id, "RSVP deleted");
        Ok(removed)
    }

    pub async fn stats(&self, auth: &RequestAuth) -> Result<Stats> {
        self.authorize(auth)?;
        let entries = self.store.list().await?;
        Ok(Stats::tally(&entries))
    }

    pub fn login(&self, key: &str) -> Result<SessionId> {
        self.gate.login(key)
    }

    pub fn logout(&self, session: Option<&SessionId>) {
        self.gate.logout(session);
    }
}
