use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgment returned by every create endpoint.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq)]
pub struct InsertAck {
    pub inserted_id: String,
}

impl InsertAck {
    pub fn new(inserted_id: impl Into<String>) -> Self {
        Self {
            inserted_id: inserted_id.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema, Clone, PartialEq)]
pub struct InsertManyAck {
    pub inserted_ids: Vec<String>,
}

/// Acknowledgment returned by every PATCH (upsert) endpoint.
///
/// Exactly one of `modified_count` / `upserted_count` is 1: either the
/// record existed and was rewritten, or it was inserted under the requested id.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq)]
pub struct UpdateAck {
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    pub upserted_id: Option<String>,
}

impl UpdateAck {
    pub fn modified() -> Self {
        Self {
            matched_count: 1,
            modified_count: 1,
            upserted_count: 0,
            upserted_id: None,
        }
    }

    pub fn upserted(id: impl Into<String>) -> Self {
        Self {
            matched_count: 0,
            modified_count: 0,
            upserted_count: 1,
            upserted_id: Some(id.into()),
        }
    }
}
