//! Thin facade over the command layer: the single entry point for every
//! operation, generic over the storage backend so tests can run against
//! [`crate::store::memory::MemBackend`] while the binary uses the CSV file.

use crate::commands;
use crate::error::Result;
use crate::model::{Employee, EmployeeUpdate};
use crate::store::{Roster, StoreBackend};

pub struct RosterApi<B: StoreBackend> {
    store: Roster<B>,
}

impl<B: StoreBackend> RosterApi<B> {
    pub fn new(store: Roster<B>) -> Self {
        Self { store }
    }

    pub fn add_employee(&mut self, employee: Employee) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, employee)
    }

    pub fn update_employee(
        &mut self,
        id: u32,
        update: EmployeeUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn delete_employee(&mut self, id: u32) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn search_employee(&self, id: u32) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, id)
    }

    pub fn list_employees(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.store.contains(id)
    }

    pub fn get(&self, id: u32) -> Result<Employee> {
        self.store.get(id).cloned()
    }

    pub fn store(&self) -> &Roster<B> {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
