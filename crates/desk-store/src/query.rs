//! Read-side helpers
//!
//! Pure functions over collection snapshots. These mirror what the
//! dashboard views compute per render: nothing here is authoritative and
//! nothing here mutates store state.

use desk_model::{Department, EntityId, Notification, Ticket, TicketLevel, TicketStatus, User, UserRole};

/// Display filter for the ticket list.
///
/// `search` matches case-insensitively against subject, requester name
/// and email; the remaining fields are exact filters. Empty filter
/// matches everything.
#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    pub search: Option<String>,
    pub department_id: Option<EntityId>,
    pub status: Option<TicketStatus>,
    pub level: Option<TicketLevel>,
}

impl TicketFilter {
    pub fn matches(&self, ticket: &Ticket) -> bool {
        let matches_search = match &self.search {
            None => true,
            Some(term) => {
                let term = term.to_lowercase();
                ticket.subject.to_lowercase().contains(&term)
                    || ticket.name.to_lowercase().contains(&term)
                    || ticket.email.to_lowercase().contains(&term)
            }
        };

        matches_search
            && self
                .department_id
                .as_ref()
                .map(|d| &ticket.department_id == d)
                .unwrap_or(true)
            && self.status.map(|s| ticket.status == s).unwrap_or(true)
            && self.level.map(|l| ticket.level == l).unwrap_or(true)
    }
}

/// Tickets matching the filter, in store order.
pub fn filter_tickets(tickets: &[Ticket], filter: &TicketFilter) -> Vec<Ticket> {
    tickets.iter().filter(|t| filter.matches(t)).cloned().collect()
}

/// Most recently created tickets first, capped at `limit`.
pub fn recent_tickets(tickets: &[Ticket], limit: usize) -> Vec<Ticket> {
    let mut sorted = tickets.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

/// Dashboard stat-card counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketStats {
    pub total: usize,
    pub new: usize,
    pub in_progress: usize,
    pub paused: usize,
    pub completed: usize,
    pub urgent: usize,
}

impl TicketStats {
    pub fn compute(tickets: &[Ticket]) -> Self {
        let count = |status| tickets.iter().filter(|t| t.status == status).count();
        Self {
            total: tickets.len(),
            new: count(TicketStatus::New),
            in_progress: count(TicketStatus::InProgress),
            paused: count(TicketStatus::Paused),
            completed: count(TicketStatus::Completed),
            urgent: tickets
                .iter()
                .filter(|t| t.level == TicketLevel::Urgent)
                .count(),
        }
    }
}

/// Users eligible for assignment to a ticket in the given department:
/// sub-admins attached to that same department.
pub fn assignable_users<'a>(users: &'a [User], department_id: &EntityId) -> Vec<&'a User> {
    users
        .iter()
        .filter(|u| u.role == UserRole::SubAdmin && u.department_id.as_ref() == Some(department_id))
        .collect()
}

/// Unread notification count for the header badge.
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}

/// Departments whose name or description contains the term,
/// case-insensitively.
pub fn search_departments(departments: &[Department], term: &str) -> Vec<Department> {
    let term = term.to_lowercase();
    departments
        .iter()
        .filter(|d| {
            d.name.to_lowercase().contains(&term)
                || d.description
                    .as_ref()
                    .map(|desc| desc.to_lowercase().contains(&term))
                    .unwrap_or(false)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DeskStore, NewDepartment, NewTicket, NewUser};
    use chrono::Utc;

    fn seeded_tickets() -> (DeskStore, EntityId, EntityId) {
        let store = DeskStore::new();
        let it = store.create_department(NewDepartment {
            name: "IT Support".into(),
            description: Some("Technical support and maintenance".into()),
            is_active: true,
        });
        let hr = store.create_department(NewDepartment {
            name: "HR".into(),
            description: Some("Human Resources".into()),
            is_active: true,
        });
        let admin = store.create_user(NewUser {
            name: "John Admin".into(),
            email: "admin@company.com".into(),
            role: UserRole::Admin,
            department_id: None,
            is_active: true,
        });

        for (subject, status, level, dept) in [
            ("Login Issues", TicketStatus::New, TicketLevel::High, &it),
            ("Payroll Question", TicketStatus::InProgress, TicketLevel::Medium, &hr),
            ("Server down", TicketStatus::New, TicketLevel::Urgent, &it),
        ] {
            store.create_ticket(NewTicket {
                name: "John Doe".into(),
                phone: "+1-555-0123".into(),
                email: "john.doe@email.com".into(),
                company_section: "Sales".into(),
                source: "Email".into(),
                date_filed: Utc::now(),
                subject: subject.into(),
                message: "details".into(),
                recommendation: None,
                level,
                status,
                department_id: dept.id.clone(),
                assigned_user_id: None,
                created_by: admin.id.clone(),
                auto_email: false,
            });
        }
        (store, it.id, hr.id)
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let (store, _, _) = seeded_tickets();
        let tickets = store.tickets();
        assert_eq!(filter_tickets(&tickets, &TicketFilter::default()).len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let (store, _, _) = seeded_tickets();
        let tickets = store.tickets();
        let filter = TicketFilter {
            search: Some("LOGIN".into()),
            ..Default::default()
        };
        let hits = filter_tickets(&tickets, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].subject, "Login Issues");
    }

    #[test]
    fn test_filters_combine_conjunctively() {
        let (store, it, _) = seeded_tickets();
        let tickets = store.tickets();
        let filter = TicketFilter {
            department_id: Some(it),
            status: Some(TicketStatus::New),
            level: Some(TicketLevel::Urgent),
            ..Default::default()
        };
        let hits = filter_tickets(&tickets, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].subject, "Server down");
    }

    #[test]
    fn test_stats_count_by_status_and_urgency() {
        let (store, _, _) = seeded_tickets();
        let stats = TicketStats::compute(&store.tickets());
        assert_eq!(
            stats,
            TicketStats {
                total: 3,
                new: 2,
                in_progress: 1,
                paused: 0,
                completed: 0,
                urgent: 1,
            }
        );
    }

    #[test]
    fn test_assignable_users_are_same_department_sub_admins() {
        let (store, it, hr) = seeded_tickets();
        let bob = store.create_user(NewUser {
            name: "Bob Smith".into(),
            email: "bob@company.com".into(),
            role: UserRole::SubAdmin,
            department_id: Some(it.clone()),
            is_active: true,
        });
        store.create_user(NewUser {
            name: "Alice Johnson".into(),
            email: "alice@company.com".into(),
            role: UserRole::SubAdmin,
            department_id: Some(hr),
            is_active: true,
        });

        let users = store.users();
        let eligible = assignable_users(&users, &it);
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].id, bob.id);
    }

    #[test]
    fn test_recent_tickets_newest_first() {
        let (store, _, _) = seeded_tickets();
        let recent = recent_tickets(&store.tickets(), 2);
        assert_eq!(recent.len(), 2);
        assert!(recent[0].created_at >= recent[1].created_at);
    }

    #[test]
    fn test_unread_count_tracks_reads() {
        let (store, _, _) = seeded_tickets();
        // One notification per created ticket.
        assert_eq!(unread_count(&store.notifications()), 3);
        let first = store.notifications()[0].id.clone();
        store.mark_notification_read(&first).unwrap();
        assert_eq!(unread_count(&store.notifications()), 2);
    }

    #[test]
    fn test_department_search_matches_description() {
        let (store, _, _) = seeded_tickets();
        let hits = search_departments(&store.departments(), "human");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "HR");
    }
}
