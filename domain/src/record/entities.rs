//! Generated name record entities

use crate::request::entities::GenerationRequest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of a generated record
///
/// Two records with identical content still get different ids, which is what
/// keeps History free of implicit deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fields extracted from the provider's free-form answer
///
/// Missing sections are empty rather than absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedName {
    pub name: String,
    pub explanation: String,
    pub fun_fact: String,
    pub nicknames: Vec<String>,
}

impl ParsedName {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.explanation.is_empty()
            && self.fun_fact.is_empty()
            && self.nicknames.is_empty()
    }
}

/// A generated pet name plus its supporting text (Entity)
#[derive(Debug, Clone, Serialize)]
pub struct NameRecord {
    pub id: RecordId,
    pub name: String,
    pub explanation: String,
    pub fun_fact: String,
    pub nicknames: Vec<String>,
    pub source_request: GenerationRequest,
    pub created_at: DateTime<Utc>,
}

impl NameRecord {
    /// Attach identity, provenance and timestamp to parsed provider output
    pub fn from_parsed(parsed: ParsedName, source_request: GenerationRequest) -> Self {
        Self {
            id: RecordId::new(),
            name: parsed.name,
            explanation: parsed.explanation,
            fun_fact: parsed.fun_fact,
            nicknames: parsed.nicknames,
            source_request,
            created_at: Utc::now(),
        }
    }
}
