//! Tickets
use crate::id::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Core work item: a support request filed on behalf of a requester,
/// routed to a department and optionally assigned to a sub-admin there.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: EntityId,
    /// Requester name.
    pub name: String,
    pub phone: String,
    pub email: String,
    pub company_section: String,
    pub source: String,
    pub date_filed: DateTime<Utc>,
    pub subject: String,
    pub message: String,
    pub recommendation: Option<String>,
    pub level: TicketLevel,
    pub status: TicketStatus,
    pub department_id: EntityId,
    pub assigned_user_id: Option<EntityId>,
    /// User who filed the ticket into the system.
    pub created_by: EntityId,
    /// Whether an acknowledgement email is sent to the requester.
    pub auto_email: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Priority level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketLevel {
    Urgent,
    High,
    #[default]
    Medium,
    Casual,
}

impl fmt::Display for TicketLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Urgent => write!(f, "urgent"),
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Casual => write!(f, "casual"),
        }
    }
}

/// Workflow status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    #[default]
    New,
    InProgress,
    Paused,
    Completed,
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Paused => write!(f, "paused"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&TicketStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(TicketStatus::InProgress.to_string(), "in-progress");
        let back: TicketStatus = serde_json::from_str("\"paused\"").unwrap();
        assert_eq!(back, TicketStatus::Paused);
    }

    #[test]
    fn test_level_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&TicketLevel::Casual).unwrap(),
            "\"casual\""
        );
        assert_eq!(TicketLevel::Urgent.to_string(), "urgent");
    }
}
