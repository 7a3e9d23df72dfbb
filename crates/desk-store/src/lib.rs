//! OpenDesk State Store
//!
//! Single source of truth for all domain collections of the admin
//! dashboard: tickets, users, departments, the activity log, email
//! threads, notifications and the static reference lists, plus the
//! transient UI state (sidebar, current view).
//!
//! All operations are synchronous and complete within the caller's
//! invocation. Consumers receive cloned snapshots and must never assume
//! a snapshot reflects later mutations.

pub mod query;
pub mod store;

pub use query::{TicketFilter, TicketStats};
pub use store::{
    DepartmentUpdate, DeskStore, NewActivity, NewDepartment, NewEmailThread, NewNotification,
    NewTicket, NewUser, StoreError, TicketUpdate, UserUpdate,
};
