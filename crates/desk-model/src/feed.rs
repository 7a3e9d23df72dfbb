//! Activity log, email threads and notifications
use crate::id::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Append-only audit entry describing something a user did to a ticket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TicketActivity {
    pub id: EntityId,
    pub ticket_id: EntityId,
    pub user_id: EntityId,
    /// Short action label, e.g. "Status Updated".
    pub action: String,
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

/// One message in the email conversation attached to a ticket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmailThread {
    pub id: EntityId,
    pub ticket_id: EntityId,
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
}

/// In-app notification shown in the header feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: EntityId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub related_id: Option<EntityId>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Email,
    Ticket,
    #[default]
    System,
}
