//! Demo data set
//!
//! The platform ships with a small seeded data set so the dashboard is
//! usable out of the box. Identifiers are generated fresh on every call;
//! cross references are wired programmatically.

use crate::directory::{Department, User, UserRole};
use crate::feed::EmailThread;
use crate::id::EntityId;
use crate::reference::{CompanySection, TicketSource};
use crate::ticket::{Ticket, TicketLevel, TicketStatus};
use chrono::{Duration, Utc};

/// Fully cross-linked demo collections.
#[derive(Clone, Debug)]
pub struct SeedData {
    pub departments: Vec<Department>,
    pub users: Vec<User>,
    pub tickets: Vec<Ticket>,
    pub company_sections: Vec<CompanySection>,
    pub ticket_sources: Vec<TicketSource>,
    pub email_threads: Vec<EmailThread>,
}

impl SeedData {
    /// Build the demo data set.
    pub fn demo() -> Self {
        let now = Utc::now();

        let departments: Vec<Department> = [
            ("IT Support", "Technical support and maintenance"),
            ("HR", "Human Resources"),
            ("Finance", "Financial operations"),
        ]
        .into_iter()
        .map(|(name, description)| Department {
            id: EntityId::new(),
            name: name.to_string(),
            description: Some(description.to_string()),
            is_active: true,
            created_at: now,
        })
        .collect();

        let it = departments[0].id.clone();
        let hr = departments[1].id.clone();

        let users = vec![
            User {
                id: EntityId::new(),
                name: "John Admin".to_string(),
                email: "admin@company.com".to_string(),
                role: UserRole::Admin,
                department_id: None,
                is_active: true,
                created_at: now,
            },
            User {
                id: EntityId::new(),
                name: "Jane SubAdmin".to_string(),
                email: "subadmin@company.com".to_string(),
                role: UserRole::SubAdmin,
                department_id: Some(it.clone()),
                is_active: true,
                created_at: now,
            },
            User {
                id: EntityId::new(),
                name: "Bob Smith".to_string(),
                email: "bob@company.com".to_string(),
                role: UserRole::SubAdmin,
                department_id: Some(it.clone()),
                is_active: true,
                created_at: now,
            },
            User {
                id: EntityId::new(),
                name: "Alice Johnson".to_string(),
                email: "alice@company.com".to_string(),
                role: UserRole::SubAdmin,
                department_id: Some(hr.clone()),
                is_active: true,
                created_at: now,
            },
        ];
        let admin = users[0].id.clone();

        let tickets = vec![
            Ticket {
                id: EntityId::new(),
                name: "John Doe".to_string(),
                phone: "+1-555-0123".to_string(),
                email: "john.doe@email.com".to_string(),
                company_section: "Marketing".to_string(),
                source: "Tawk.to".to_string(),
                date_filed: now,
                subject: "Login Issues".to_string(),
                message: "Unable to log into the system".to_string(),
                recommendation: None,
                level: TicketLevel::High,
                status: TicketStatus::New,
                department_id: it,
                assigned_user_id: Some(users[2].id.clone()),
                created_by: admin.clone(),
                auto_email: true,
                created_at: now,
                updated_at: now,
            },
            Ticket {
                id: EntityId::new(),
                name: "Jane Smith".to_string(),
                phone: "+1-555-0124".to_string(),
                email: "jane.smith@email.com".to_string(),
                company_section: "Sales".to_string(),
                source: "Walk-in".to_string(),
                date_filed: now,
                subject: "Payroll Question".to_string(),
                message: "Question about overtime calculation".to_string(),
                recommendation: None,
                level: TicketLevel::Medium,
                status: TicketStatus::InProgress,
                department_id: hr,
                assigned_user_id: Some(users[3].id.clone()),
                created_by: admin,
                auto_email: false,
                created_at: now,
                updated_at: now,
            },
        ];

        let email_threads = vec![
            EmailThread {
                id: EntityId::new(),
                ticket_id: tickets[0].id.clone(),
                from: "john.doe@email.com".to_string(),
                to: "support@company.com".to_string(),
                subject: "Re: Login Issues".to_string(),
                body: "Thank you for creating the ticket. I am still experiencing login issues."
                    .to_string(),
                timestamp: now,
                is_read: false,
            },
            EmailThread {
                id: EntityId::new(),
                ticket_id: tickets[1].id.clone(),
                from: "jane.smith@email.com".to_string(),
                to: "support@company.com".to_string(),
                subject: "Re: Payroll Question".to_string(),
                body: "I received your response about overtime calculations. Could you provide more details?"
                    .to_string(),
                timestamp: now - Duration::hours(1),
                is_read: true,
            },
        ];

        let company_sections = ["Marketing", "Sales", "Operations", "Finance"]
            .into_iter()
            .map(|name| CompanySection {
                id: EntityId::new(),
                name: name.to_string(),
            })
            .collect();

        let ticket_sources = ["Tawk.to", "Walk-in", "Email", "Phone"]
            .into_iter()
            .map(|name| TicketSource {
                id: EntityId::new(),
                name: name.to_string(),
            })
            .collect();

        Self {
            departments,
            users,
            tickets,
            company_sections,
            ticket_sources,
            email_threads,
        }
    }
}
