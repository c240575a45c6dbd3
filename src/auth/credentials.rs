//! Credential Validator
//! Mission: Check submitted role/password pairs against the fixed table

use std::collections::HashMap;

/// Fixed role -> password table, seeded at startup and immutable for the
/// life of the process. Passwords are plain-text by design of the demo
/// data set; there is no registration or password management.
#[derive(Debug, Clone)]
pub struct CredentialTable {
    entries: HashMap<String, String>,
}

impl CredentialTable {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// True iff the role exists and the password matches exactly.
    ///
    /// Unknown role and wrong password collapse into the same `false`
    /// so a caller cannot probe which roles exist.
    pub fn validate(&self, role: &str, password: &str) -> bool {
        match self.entries.get(role) {
            Some(stored) => stored == password,
            None => false,
        }
    }
}

impl Default for CredentialTable {
    /// The demo credential set: admin, tester, dev.
    fn default() -> Self {
        let entries = [("admin", "admin"), ("tester", "tester"), ("dev", "dev")]
            .into_iter()
            .map(|(r, p)| (r.to_string(), p.to_string()))
            .collect();
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_credentials_accepted() {
        let table = CredentialTable::default();

        assert!(table.validate("admin", "admin"));
        assert!(table.validate("tester", "tester"));
        assert!(table.validate("dev", "dev"));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let table = CredentialTable::default();

        assert!(!table.validate("admin", "wrong"));
        assert!(!table.validate("admin", ""));
        assert!(!table.validate("admin", "Admin"));
    }

    #[test]
    fn test_unknown_role_rejected() {
        let table = CredentialTable::default();

        assert!(!table.validate("root", "root"));
        assert!(!table.validate("", ""));
    }
}
