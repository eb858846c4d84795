//! In-memory backend for tests: persists snapshots into a plain `Vec`.

use super::{Roster, StoreBackend};
use crate::error::Result;
use crate::model::Employee;

#[derive(Debug, Default)]
pub struct MemBackend {
    snapshot: Vec<Employee>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self {
            snapshot: employees,
        }
    }

    /// The last persisted collection.
    pub fn snapshot(&self) -> &[Employee] {
        &self.snapshot
    }
}

impl StoreBackend for MemBackend {
    fn load(&mut self) -> Result<Vec<Employee>> {
        Ok(self.snapshot.clone())
    }

    fn persist(&mut self, employees: &[Employee]) -> Result<()> {
        self.snapshot = employees.to_vec();
        Ok(())
    }
}

pub type InMemoryStore = Roster<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Roster {
            employees: Vec::new(),
            backend: MemBackend::new(),
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::Employee;

    pub fn employee(id: u32) -> Employee {
        Employee::new(
            id,
            format!("Employee {id}"),
            "Engineer",
            50_000.0,
            format!("employee{id}@example.com"),
        )
    }

    pub fn ada() -> Employee {
        Employee::new(1, "Ada", "Engineer", 90_000.0, "ada@x.com")
    }
}
