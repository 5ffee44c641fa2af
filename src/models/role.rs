use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::envelope::Validate;

/// A named permission set assignable to staff users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Flat permission flags, e.g. "finance.read", "properties.write"
    pub permissions: Vec<String>,
}

impl Validate for Role {}

impl Role {
    pub fn has_permission(&self, flag: &str) -> bool {
        self.permissions.iter().any(|p| p == flag)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AssignRole {
    pub user_id: Uuid,
    pub role_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_lookup_is_exact() {
        let role = Role {
            id: Uuid::new_v4(),
            name: "accountant".to_string(),
            description: None,
            permissions: vec!["finance.read".to_string(), "finance.write".to_string()],
        };
        assert!(role.has_permission("finance.read"));
        assert!(!role.has_permission("finance"));
    }
}
