//! OpenDesk Domain Model
//!
//! Entity types for a self-hosted support-ticketing admin platform.
//!
//! ## Entities
//! - Tickets with priority levels and workflow status
//! - Users (admins and department sub-admins) and departments
//! - Append-only ticket activity log
//! - Email threads and notifications
//! - Static reference lists (company sections, ticket sources)

pub mod directory;
pub mod feed;
pub mod id;
pub mod reference;
pub mod seed;
pub mod ticket;

pub use directory::{Department, User, UserRole};
pub use feed::{EmailThread, Notification, NotificationKind, TicketActivity};
pub use id::EntityId;
pub use reference::{CompanySection, TicketSource};
pub use seed::SeedData;
pub use ticket::{Ticket, TicketLevel, TicketStatus};
