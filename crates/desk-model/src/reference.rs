//! Static reference lists
use crate::id::EntityId;
use serde::{Deserialize, Serialize};

/// Section of the company a requester belongs to. Read-only reference data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompanySection {
    pub id: EntityId,
    pub name: String,
}

/// Channel a ticket arrived through. Read-only reference data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TicketSource {
    pub id: EntityId,
    pub name: String,
}
