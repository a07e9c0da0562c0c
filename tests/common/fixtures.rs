//! Static inputs shared across harnesses.
//!
//! `CODEBASE_*` is one JSON:API document in three states: as produced, with
//! UUIDs normalized, and with timestamps normalized.

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A codebase resource carrying two distinct UUIDs (one repeated in links)
/// and one RFC3339 timestamp with microseconds.
pub const CODEBASE_INPUT: &str = r#"
{
  "data": {
    "attributes": {
      "createdAt": "2017-04-21T04:38:26.777609Z",
      "last_used_workspace": "my-last-used-workspace",
      "type": "git",
      "url": "https://github.com/fabric8-services/fabric8-wit.git"
    },
    "id": "d7a282f6-1c10-459e-bb44-55a1a6d48bdd",
    "links": {
      "edit": "http:///api/codebases/d7a282f6-1c10-459e-bb44-55a1a6d48bdd/edit",
      "related": "http:///api/codebases/d7a282f6-1c10-459e-bb44-55a1a6d48bdd",
      "self": "http:///api/codebases/d7a282f6-1c10-459e-bb44-55a1a6d48bdd"
    },
    "relationships": {
      "space": {
        "data": {
          "id": "a8bee527-12d2-4aff-9823-3511c1c8e6b9",
          "type": "spaces"
        },
        "links": {
          "related": "http:///api/spaces/a8bee527-12d2-4aff-9823-3511c1c8e6b9",
          "self": "http:///api/spaces/a8bee527-12d2-4aff-9823-3511c1c8e6b9"
        }
      }
    },
    "type": "codebases"
  }
}"#;

/// [`CODEBASE_INPUT`] after UUID normalization.
pub const CODEBASE_UUIDS_NORMALIZED: &str = r#"
{
  "data": {
    "attributes": {
      "createdAt": "2017-04-21T04:38:26.777609Z",
      "last_used_workspace": "my-last-used-workspace",
      "type": "git",
      "url": "https://github.com/fabric8-services/fabric8-wit.git"
    },
    "id": "00000000-0000-0000-0000-000000000001",
    "links": {
      "edit": "http:///api/codebases/00000000-0000-0000-0000-000000000001/edit",
      "related": "http:///api/codebases/00000000-0000-0000-0000-000000000001",
      "self": "http:///api/codebases/00000000-0000-0000-0000-000000000001"
    },
    "relationships": {
      "space": {
        "data": {
          "id": "00000000-0000-0000-0000-000000000002",
          "type": "spaces"
        },
        "links": {
          "related": "http:///api/spaces/00000000-0000-0000-0000-000000000002",
          "self": "http:///api/spaces/00000000-0000-0000-0000-000000000002"
        }
      }
    },
    "type": "codebases"
  }
}"#;

/// [`CODEBASE_INPUT`] after timestamp normalization.
pub const CODEBASE_TIMES_NORMALIZED: &str = r#"
{
  "data": {
    "attributes": {
      "createdAt": "0001-01-01T00:00:00Z",
      "last_used_workspace": "my-last-used-workspace",
      "type": "git",
      "url": "https://github.com/fabric8-services/fabric8-wit.git"
    },
    "id": "d7a282f6-1c10-459e-bb44-55a1a6d48bdd",
    "links": {
      "edit": "http:///api/codebases/d7a282f6-1c10-459e-bb44-55a1a6d48bdd/edit",
      "related": "http:///api/codebases/d7a282f6-1c10-459e-bb44-55a1a6d48bdd",
      "self": "http:///api/codebases/d7a282f6-1c10-459e-bb44-55a1a6d48bdd"
    },
    "relationships": {
      "space": {
        "data": {
          "id": "a8bee527-12d2-4aff-9823-3511c1c8e6b9",
          "type": "spaces"
        },
        "links": {
          "related": "http:///api/spaces/a8bee527-12d2-4aff-9823-3511c1c8e6b9",
          "self": "http:///api/spaces/a8bee527-12d2-4aff-9823-3511c1c8e6b9"
        }
      }
    },
    "type": "codebases"
  }
}"#;

/// The two UUIDs of [`CODEBASE_INPUT`], in order of first appearance.
pub const CODEBASE_UUIDS: [&str; 2] = [
    "d7a282f6-1c10-459e-bb44-55a1a6d48bdd",
    "a8bee527-12d2-4aff-9823-3511c1c8e6b9",
];

// ---------------------------------------------------------------------------
// Structured fixtures
// ---------------------------------------------------------------------------

/// A record with one UUID and one timestamp, as an API would return it.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub id: Uuid,
    pub bar: String,
    pub created_at: DateTime<Utc>,
}

impl Record {
    /// A record with a fresh random id and a fixed creation time.
    pub fn sample() -> Self {
        Self {
            id: Uuid::new_v4(),
            bar: "hello world".to_string(),
            created_at: fixed_time(),
        }
    }
}

/// 2017-04-21T04:38:26Z, serialized by chrono without fractional seconds.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2017, 4, 21, 4, 38, 26).unwrap()
}
