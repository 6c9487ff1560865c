//! Users view (Admin only)

use haven_common::{Document, Role};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersView {
    pub rows: Vec<UserRow>,
}

/// Every user in document order
///
/// Access is checked on navigation, not here.
pub fn render(doc: &Document) -> UsersView {
    UsersView {
        rows: doc
            .users
            .iter()
            .map(|u| UserRow {
                name: u.name.clone(),
                role: u.role,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haven_common::seed::default_document;

    #[test]
    fn test_seed_users() {
        let view = render(&default_document());
        assert_eq!(
            view.rows,
            vec![
                UserRow {
                    name: "Admin".to_string(),
                    role: Role::Admin
                },
                UserRow {
                    name: "Case Worker".to_string(),
                    role: Role::Counsellor
                },
                UserRow {
                    name: "Legal Advisor".to_string(),
                    role: Role::LegalAdvisor
                },
            ]
        );
    }

    #[test]
    fn test_no_users() {
        let mut doc = default_document();
        doc.users.clear();
        assert!(render(&doc).rows.is_empty());
    }
}
