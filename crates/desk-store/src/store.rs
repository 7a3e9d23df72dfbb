//! Domain collections and their state transitions
use chrono::{DateTime, Utc};
use desk_model::{
    CompanySection, Department, EmailThread, EntityId, Notification, NotificationKind, SeedData,
    Ticket, TicketActivity, TicketLevel, TicketSource, TicketStatus, User, UserRole,
};
use parking_lot::RwLock;

/// Central state store.
///
/// Collections keep insertion order; any chronological or priority
/// ordering is applied by read-side consumers. Interior locking makes
/// every operation a single atomic state transition.
pub struct DeskStore {
    state: RwLock<DeskState>,
}

#[derive(Debug)]
struct DeskState {
    departments: Vec<Department>,
    tickets: Vec<Ticket>,
    users: Vec<User>,
    activities: Vec<TicketActivity>,
    email_threads: Vec<EmailThread>,
    notifications: Vec<Notification>,
    company_sections: Vec<CompanySection>,
    ticket_sources: Vec<TicketSource>,
    sidebar_open: bool,
    current_view: String,
}

impl Default for DeskState {
    fn default() -> Self {
        Self {
            departments: Vec::new(),
            tickets: Vec::new(),
            users: Vec::new(),
            activities: Vec::new(),
            email_threads: Vec::new(),
            notifications: Vec::new(),
            company_sections: Vec::new(),
            ticket_sources: Vec::new(),
            sidebar_open: false,
            current_view: "dashboard".to_string(),
        }
    }
}

/// Store-level failures.
///
/// Mutations that fail leave the state exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("ticket not found")]
    TicketNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("department not found")]
    DepartmentNotFound,
    #[error("notification not found")]
    NotificationNotFound,
    #[error("email thread not found")]
    EmailThreadNotFound,
    #[error("department still referenced by {users} user(s) and {tickets} ticket(s)")]
    DepartmentInUse { users: usize, tickets: usize },
}

/// Fields for a new ticket. Identifier and timestamps are assigned by
/// the store.
#[derive(Debug, Clone)]
pub struct NewTicket {
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
    pub created_by: EntityId,
    pub auto_email: bool,
}

/// Partial ticket update; only the provided fields change.
#[derive(Debug, Clone, Default)]
pub struct TicketUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub company_section: Option<String>,
    pub source: Option<String>,
    pub date_filed: Option<DateTime<Utc>>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub recommendation: Option<String>,
    pub level: Option<TicketLevel>,
    pub status: Option<TicketStatus>,
    pub department_id: Option<EntityId>,
    pub assigned_user_id: Option<EntityId>,
    pub auto_email: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub department_id: Option<EntityId>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub department_id: Option<EntityId>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct NewDepartment {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DepartmentUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct NewActivity {
    pub ticket_id: EntityId,
    pub user_id: EntityId,
    pub action: String,
    pub details: String,
}

#[derive(Debug, Clone)]
pub struct NewNotification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub related_id: Option<EntityId>,
}

#[derive(Debug, Clone)]
pub struct NewEmailThread {
    pub ticket_id: EntityId,
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl DeskStore {
    /// Empty store.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(DeskState::default()),
        }
    }

    /// Store pre-populated with the demo data set.
    pub fn seeded() -> Self {
        Self::with_seed(SeedData::demo())
    }

    /// Store pre-populated with the given collections.
    pub fn with_seed(seed: SeedData) -> Self {
        Self {
            state: RwLock::new(DeskState {
                departments: seed.departments,
                tickets: seed.tickets,
                users: seed.users,
                email_threads: seed.email_threads,
                company_sections: seed.company_sections,
                ticket_sources: seed.ticket_sources,
                ..DeskState::default()
            }),
        }
    }

    // ---- tickets ----

    /// Create a ticket and the matching unread notification.
    ///
    /// The notification is appended in the same state transition, so no
    /// reader can ever observe the ticket without it.
    pub fn create_ticket(&self, new: NewTicket) -> Ticket {
        let now = Utc::now();
        let ticket = Ticket {
            id: EntityId::new(),
            name: new.name,
            phone: new.phone,
            email: new.email,
            company_section: new.company_section,
            source: new.source,
            date_filed: new.date_filed,
            subject: new.subject,
            message: new.message,
            recommendation: new.recommendation,
            level: new.level,
            status: new.status,
            department_id: new.department_id,
            assigned_user_id: new.assigned_user_id,
            created_by: new.created_by,
            auto_email: new.auto_email,
            created_at: now,
            updated_at: now,
        };

        let notification = Notification {
            id: EntityId::new(),
            kind: NotificationKind::Ticket,
            title: "New Ticket Created".to_string(),
            message: format!("Ticket \"{}\" has been created", ticket.subject),
            is_read: false,
            created_at: now,
            related_id: Some(ticket.id.clone()),
        };

        let mut state = self.state.write();
        state.tickets.push(ticket.clone());
        state.notifications.push(notification);
        tracing::debug!("ticket {} created: {}", ticket.id, ticket.subject);
        ticket
    }

    /// Merge the provided fields into the matching ticket and refresh
    /// `updated_at`.
    pub fn update_ticket(&self, id: &EntityId, update: TicketUpdate) -> Result<Ticket, StoreError> {
        let mut state = self.state.write();
        let ticket = state
            .tickets
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or(StoreError::TicketNotFound)?;

        if let Some(name) = update.name {
            ticket.name = name;
        }
        if let Some(phone) = update.phone {
            ticket.phone = phone;
        }
        if let Some(email) = update.email {
            ticket.email = email;
        }
        if let Some(company_section) = update.company_section {
            ticket.company_section = company_section;
        }
        if let Some(source) = update.source {
            ticket.source = source;
        }
        if let Some(date_filed) = update.date_filed {
            ticket.date_filed = date_filed;
        }
        if let Some(subject) = update.subject {
            ticket.subject = subject;
        }
        if let Some(message) = update.message {
            ticket.message = message;
        }
        if let Some(recommendation) = update.recommendation {
            ticket.recommendation = Some(recommendation);
        }
        if let Some(level) = update.level {
            ticket.level = level;
        }
        if let Some(status) = update.status {
            ticket.status = status;
        }
        if let Some(department_id) = update.department_id {
            ticket.department_id = department_id;
        }
        if let Some(assigned_user_id) = update.assigned_user_id {
            ticket.assigned_user_id = Some(assigned_user_id);
        }
        if let Some(auto_email) = update.auto_email {
            ticket.auto_email = auto_email;
        }
        ticket.updated_at = Utc::now();

        Ok(ticket.clone())
    }

    pub fn delete_ticket(&self, id: &EntityId) -> Result<(), StoreError> {
        let mut state = self.state.write();
        let pos = state
            .tickets
            .iter()
            .position(|t| &t.id == id)
            .ok_or(StoreError::TicketNotFound)?;
        state.tickets.remove(pos);
        Ok(())
    }

    /// Move a ticket to a new status and record the change in the
    /// activity log, attributed to `actor`.
    pub fn change_status(
        &self,
        id: &EntityId,
        status: TicketStatus,
        actor: &EntityId,
    ) -> Result<Ticket, StoreError> {
        let mut state = self.state.write();
        let ticket = state
            .tickets
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or(StoreError::TicketNotFound)?;

        let previous = ticket.status;
        ticket.status = status;
        ticket.updated_at = Utc::now();
        let updated = ticket.clone();

        state.activities.push(TicketActivity {
            id: EntityId::new(),
            ticket_id: id.clone(),
            user_id: actor.clone(),
            action: "Status Updated".to_string(),
            details: format!("Status changed from {previous} to {status}"),
            timestamp: updated.updated_at,
        });

        Ok(updated)
    }

    // ---- users ----

    pub fn create_user(&self, new: NewUser) -> User {
        let user = User {
            id: EntityId::new(),
            name: new.name,
            email: new.email,
            role: new.role,
            department_id: new.department_id,
            is_active: new.is_active,
            created_at: Utc::now(),
        };
        self.state.write().users.push(user.clone());
        user
    }

    pub fn update_user(&self, id: &EntityId, update: UserUpdate) -> Result<User, StoreError> {
        let mut state = self.state.write();
        let user = state
            .users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or(StoreError::UserNotFound)?;

        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(department_id) = update.department_id {
            user.department_id = Some(department_id);
        }
        if let Some(is_active) = update.is_active {
            user.is_active = is_active;
        }

        Ok(user.clone())
    }

    pub fn delete_user(&self, id: &EntityId) -> Result<(), StoreError> {
        let mut state = self.state.write();
        let pos = state
            .users
            .iter()
            .position(|u| &u.id == id)
            .ok_or(StoreError::UserNotFound)?;
        state.users.remove(pos);
        Ok(())
    }

    // ---- departments ----

    pub fn create_department(&self, new: NewDepartment) -> Department {
        let department = Department {
            id: EntityId::new(),
            name: new.name,
            description: new.description,
            is_active: new.is_active,
            created_at: Utc::now(),
        };
        self.state.write().departments.push(department.clone());
        department
    }

    pub fn update_department(
        &self,
        id: &EntityId,
        update: DepartmentUpdate,
    ) -> Result<Department, StoreError> {
        let mut state = self.state.write();
        let department = state
            .departments
            .iter_mut()
            .find(|d| &d.id == id)
            .ok_or(StoreError::DepartmentNotFound)?;

        if let Some(name) = update.name {
            department.name = name;
        }
        if let Some(description) = update.description {
            department.description = Some(description);
        }
        if let Some(is_active) = update.is_active {
            department.is_active = is_active;
        }

        Ok(department.clone())
    }

    /// Remove a department, refusing while users or tickets still
    /// reference it. Never cascades into other collections.
    pub fn delete_department(&self, id: &EntityId) -> Result<(), StoreError> {
        let mut state = self.state.write();
        let pos = state
            .departments
            .iter()
            .position(|d| &d.id == id)
            .ok_or(StoreError::DepartmentNotFound)?;

        let users = state
            .users
            .iter()
            .filter(|u| u.department_id.as_ref() == Some(id))
            .count();
        let tickets = state.tickets.iter().filter(|t| &t.department_id == id).count();
        if users > 0 || tickets > 0 {
            tracing::debug!(
                "refusing to delete department {id}: {users} user(s), {tickets} ticket(s)"
            );
            return Err(StoreError::DepartmentInUse { users, tickets });
        }

        state.departments.remove(pos);
        Ok(())
    }

    // ---- activity log ----

    /// Append an audit entry. Entries are never updated or removed.
    pub fn record_activity(&self, new: NewActivity) -> TicketActivity {
        let activity = TicketActivity {
            id: EntityId::new(),
            ticket_id: new.ticket_id,
            user_id: new.user_id,
            action: new.action,
            details: new.details,
            timestamp: Utc::now(),
        };
        self.state.write().activities.push(activity.clone());
        activity
    }

    // ---- notifications ----

    pub fn push_notification(&self, new: NewNotification) -> Notification {
        let notification = Notification {
            id: EntityId::new(),
            kind: new.kind,
            title: new.title,
            message: new.message,
            is_read: false,
            created_at: Utc::now(),
            related_id: new.related_id,
        };
        self.state.write().notifications.push(notification.clone());
        notification
    }

    pub fn mark_notification_read(&self, id: &EntityId) -> Result<(), StoreError> {
        let mut state = self.state.write();
        let notification = state
            .notifications
            .iter_mut()
            .find(|n| &n.id == id)
            .ok_or(StoreError::NotificationNotFound)?;
        notification.is_read = true;
        Ok(())
    }

    // ---- email threads ----

    pub fn add_email_thread(&self, new: NewEmailThread) -> EmailThread {
        let thread = EmailThread {
            id: EntityId::new(),
            ticket_id: new.ticket_id,
            from: new.from,
            to: new.to,
            subject: new.subject,
            body: new.body,
            timestamp: Utc::now(),
            is_read: false,
        };
        self.state.write().email_threads.push(thread.clone());
        thread
    }

    pub fn mark_email_read(&self, id: &EntityId) -> Result<(), StoreError> {
        let mut state = self.state.write();
        let thread = state
            .email_threads
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or(StoreError::EmailThreadNotFound)?;
        thread.is_read = true;
        Ok(())
    }

    // ---- UI state ----

    pub fn set_sidebar_open(&self, open: bool) {
        self.state.write().sidebar_open = open;
    }

    pub fn sidebar_open(&self) -> bool {
        self.state.read().sidebar_open
    }

    pub fn set_current_view(&self, view: impl Into<String>) {
        self.state.write().current_view = view.into();
    }

    pub fn current_view(&self) -> String {
        self.state.read().current_view.clone()
    }

    // ---- snapshots ----

    pub fn tickets(&self) -> Vec<Ticket> {
        self.state.read().tickets.clone()
    }

    pub fn users(&self) -> Vec<User> {
        self.state.read().users.clone()
    }

    pub fn departments(&self) -> Vec<Department> {
        self.state.read().departments.clone()
    }

    pub fn activities(&self) -> Vec<TicketActivity> {
        self.state.read().activities.clone()
    }

    pub fn email_threads(&self) -> Vec<EmailThread> {
        self.state.read().email_threads.clone()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.state.read().notifications.clone()
    }

    pub fn company_sections(&self) -> Vec<CompanySection> {
        self.state.read().company_sections.clone()
    }

    pub fn ticket_sources(&self) -> Vec<TicketSource> {
        self.state.read().ticket_sources.clone()
    }
}

impl Default for DeskStore {
    fn default() -> Self {
        Self::new()
    }
}
