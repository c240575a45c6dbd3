//! Static Resource Directory
//! Mission: Serve the fixed admin and customer records behind the token gate

use serde::{Deserialize, Serialize};

/// Admin record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    pub id: String,
    pub name: String,
}

/// Customer record (structurally identical to [`Admin`])
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
}

/// Read-only directory of admins and customers, seeded once at startup.
/// There are no create/update/delete operations.
#[derive(Debug, Clone)]
pub struct Directory {
    admins: Vec<Admin>,
    customers: Vec<Customer>,
}

impl Directory {
    /// Seed the fixed demo data set.
    pub fn seed() -> Self {
        let admins = [("1", "John"), ("2", "Doe"), ("3", "Anna"), ("4", "Peter")]
            .into_iter()
            .map(|(id, name)| Admin {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect();

        let customers = [
            ("5", "Lucy"),
            ("6", "Michael"),
            ("7", "Sarah"),
            ("8", "David"),
        ]
        .into_iter()
        .map(|(id, name)| Customer {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect();

        Self { admins, customers }
    }

    pub fn admins(&self) -> &[Admin] {
        &self.admins
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Look up an admin by id. Linear scan; the collection is tiny.
    pub fn admin(&self, id: &str) -> Option<&Admin> {
        self.admins.iter().find(|a| a.id == id)
    }

    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }
}
