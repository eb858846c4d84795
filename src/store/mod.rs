//! Storage layer.
//!
//! [`Roster`] owns the in-memory collection and is generic over a
//! [`StoreBackend`] that loads and persists full snapshots:
//!
//! - [`csv::CsvBackend`]: production flat-file storage, full rewrite after
//!   every mutation.
//! - [`memory::MemBackend`]: in-memory snapshots for fast, isolated tests.
//!
//! The invariant the backends uphold: after every successful mutation the
//! persisted snapshot holds exactly the in-memory collection.

use crate::error::{Result, RosterError};
use crate::model::{Employee, EmployeeUpdate};
use crate::validate;

pub mod csv;
pub mod memory;

/// Snapshot persistence for the employee collection.
pub trait StoreBackend {
    /// Load the persisted collection; an absent backing store yields an
    /// empty collection.
    fn load(&mut self) -> Result<Vec<Employee>>;

    /// Replace the persisted collection with `employees`.
    fn persist(&mut self, employees: &[Employee]) -> Result<()>;
}

/// The employee collection, kept in insertion order.
#[derive(Debug)]
pub struct Roster<B: StoreBackend> {
    employees: Vec<Employee>,
    backend: B,
}

impl<B: StoreBackend> Roster<B> {
    pub fn open(mut backend: B) -> Result<Self> {
        let employees = backend.load()?;
        Ok(Self { employees, backend })
    }

    /// Insert a new employee. Fails on a duplicate ID, an empty name, a
    /// negative salary, or a malformed email, leaving the collection
    /// untouched.
    pub fn add(&mut self, employee: Employee) -> Result<()> {
        if self.contains(employee.id) {
            return Err(RosterError::DuplicateId(employee.id));
        }
        validate::check_name(&employee.name)?;
        validate::check_salary(employee.salary)?;
        validate::check_email(&employee.email)?;
        self.employees.push(employee);
        self.backend.persist(&self.employees)
    }

    /// Overwrite the provided fields of an existing employee; `None` fields
    /// keep their prior values. The ID itself is immutable.
    pub fn update(&mut self, id: u32, update: EmployeeUpdate) -> Result<Employee> {
        let index = self
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or(RosterError::NotFound(id))?;

        // Validate everything before touching the record.
        if let Some(name) = &update.name {
            validate::check_name(name)?;
        }
        if let Some(salary) = update.salary {
            validate::check_salary(salary)?;
        }
        if let Some(email) = &update.email {
            validate::check_email(email)?;
        }

        let employee = &mut self.employees[index];
        if let Some(name) = update.name {
            employee.name = name;
        }
        if let Some(position) = update.position {
            employee.position = position;
        }
        if let Some(salary) = update.salary {
            employee.salary = salary;
        }
        if let Some(email) = update.email {
            employee.email = email;
        }
        let updated = employee.clone();
        self.backend.persist(&self.employees)?;
        Ok(updated)
    }

    /// Remove an employee, returning the removed record.
    pub fn delete(&mut self, id: u32) -> Result<Employee> {
        let index = self
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or(RosterError::NotFound(id))?;
        let removed = self.employees.remove(index);
        self.backend.persist(&self.employees)?;
        Ok(removed)
    }

    pub fn get(&self, id: u32) -> Result<&Employee> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .ok_or(RosterError::NotFound(id))
    }

    pub fn contains(&self, id: u32) -> bool {
        self.employees.iter().any(|e| e.id == id)
    }

    /// All employees in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::memory::{fixtures, InMemoryStore};
    use super::*;

    #[test]
    fn add_persists_to_backend() {
        let mut store = InMemoryStore::new();
        store.add(fixtures::employee(1)).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.backend().snapshot(), store.employees());
    }

    #[test]
    fn add_rejects_duplicate_id_and_leaves_collection_unchanged() {
        let mut store = InMemoryStore::new();
        store.add(fixtures::employee(1)).unwrap();
        let err = store.add(fixtures::employee(1)).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateId(1)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.backend().snapshot(), store.employees());
    }

    #[test]
    fn add_rejects_invalid_fields() {
        let mut store = InMemoryStore::new();
        let err = store
            .add(Employee::new(1, "", "Engineer", 1.0, "a@x.com"))
            .unwrap_err();
        assert!(matches!(err, RosterError::EmptyField("name")));

        let err = store
            .add(Employee::new(1, "Ada", "Engineer", -1.0, "a@x.com"))
            .unwrap_err();
        assert!(matches!(err, RosterError::InvalidNumber(_)));

        let err = store
            .add(Employee::new(1, "Ada", "Engineer", 1.0, "not-an-email"))
            .unwrap_err();
        assert!(matches!(err, RosterError::InvalidEmail(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn update_overwrites_only_provided_fields() {
        let mut store = InMemoryStore::new();
        store
            .add(Employee::new(1, "Ada", "Engineer", 90_000.0, "ada@x.com"))
            .unwrap();

        let updated = store
            .update(
                1,
                EmployeeUpdate {
                    salary: Some(95_000.0),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Ada");
        assert_eq!(updated.position, "Engineer");
        assert_eq!(updated.salary, 95_000.0);
        assert_eq!(store.backend().snapshot()[0].salary, 95_000.0);
    }

    #[test]
    fn update_with_invalid_field_leaves_record_unchanged() {
        let mut store = InMemoryStore::new();
        store.add(fixtures::employee(1)).unwrap();
        let before = store.get(1).unwrap().clone();

        let err = store
            .update(
                1,
                EmployeeUpdate {
                    name: Some("New Name".into()),
                    email: Some("broken".into()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, RosterError::InvalidEmail(_)));
        assert_eq!(store.get(1).unwrap(), &before);
    }

    #[test]
    fn update_absent_id_is_not_found() {
        let mut store = InMemoryStore::new();
        let err = store.update(9, EmployeeUpdate::default()).unwrap_err();
        assert!(matches!(err, RosterError::NotFound(9)));
    }

    #[test]
    fn delete_removes_from_memory_and_backend() {
        let mut store = InMemoryStore::new();
        store.add(fixtures::employee(1)).unwrap();
        store.add(fixtures::employee(2)).unwrap();

        let removed = store.delete(1).unwrap();
        assert_eq!(removed.id, 1);
        assert!(store.get(1).is_err());
        assert_eq!(store.backend().snapshot().len(), 1);

        let err = store.delete(1).unwrap_err();
        assert!(matches!(err, RosterError::NotFound(1)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn employees_keep_insertion_order() {
        let mut store = InMemoryStore::new();
        for id in [3, 1, 2] {
            store.add(fixtures::employee(id)).unwrap();
        }
        let ids: Vec<u32> = store.employees().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
