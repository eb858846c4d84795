//! The interactive menu: reads a choice, collects field input with bounded
//! retry, dispatches through [`RosterApi`], and prints the outcome. A failed
//! or aborted operation returns control to the menu without mutating the
//! store; only IO errors propagate out.

use crate::api::RosterApi;
use crate::cli::input::Console;
use crate::cli::print;
use crate::commands::CmdResult;
use crate::error::{Result, RosterError};
use crate::model::{Employee, EmployeeUpdate};
use crate::store::StoreBackend;
use crate::validate;
use colored::Colorize;
use std::io::{BufRead, Write};

const MENU: &str = "\nMenu:\n  1. add\n  2. update\n  3. delete\n  4. search\n  5. list\n  6. exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Add,
    Update,
    Delete,
    Search,
    List,
    Exit,
}

impl Choice {
    /// Accepts the menu number or the action name.
    fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" | "add" => Some(Choice::Add),
            "2" | "update" => Some(Choice::Update),
            "3" | "delete" => Some(Choice::Delete),
            "4" | "search" => Some(Choice::Search),
            "5" | "list" => Some(Choice::List),
            "6" | "exit" | "quit" => Some(Choice::Exit),
            _ => None,
        }
    }
}

pub struct Menu<'a, B: StoreBackend, R, W> {
    api: &'a mut RosterApi<B>,
    console: Console<R, W>,
}

impl<'a, B: StoreBackend, R: BufRead, W: Write> Menu<'a, B, R, W> {
    pub fn new(api: &'a mut RosterApi<B>, console: Console<R, W>) -> Self {
        Self { api, console }
    }

    pub fn run(&mut self) -> Result<()> {
        self.console.write_line(&"=".repeat(60))?;
        self.console
            .write_line("Welcome to the employee records manager.")?;
        self.console
            .write_line("Available actions: add, update, delete, search, list, exit")?;
        self.console.write_line(&"=".repeat(60))?;

        loop {
            self.console.write_line(MENU)?;
            let Some(input) = self.console.read_line("Choose an option: ")? else {
                break;
            };
            let Some(choice) = Choice::parse(&input) else {
                self.console
                    .write_line(&"Invalid choice, please try again.".yellow().to_string())?;
                continue;
            };
            if choice == Choice::Exit {
                self.console.write_line("Goodbye.")?;
                break;
            }
            match self.dispatch(choice) {
                Ok(()) => {}
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => self.console.write_line(&err.to_string().red().to_string())?,
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: Choice) -> Result<()> {
        match choice {
            Choice::Add => self.add(),
            Choice::Update => self.update(),
            Choice::Delete => self.delete(),
            Choice::Search => self.search(),
            Choice::List => self.list(),
            Choice::Exit => Ok(()),
        }
    }

    fn print_result(&mut self, result: &CmdResult) -> Result<()> {
        for message in &result.messages {
            self.console.write_line(&print::format_message(message))?;
        }
        Ok(())
    }

    fn add(&mut self) -> Result<()> {
        let Menu { api, console } = self;
        console.write_line("\nAdd a new employee")?;

        let Some(id) = console.prompt_field("ID", "Enter employee ID (numbers only): ", |s| {
            let id = validate::parse_id(s)?;
            if api.contains(id) {
                return Err(RosterError::DuplicateId(id));
            }
            Ok(id)
        })?
        else {
            return Ok(());
        };
        let Some(name) = console.prompt_field("name", "Enter employee name: ", |s| {
            validate::check_name(s)?;
            Ok(s.to_string())
        })?
        else {
            return Ok(());
        };
        let Some(position) = console.prompt_field("position", "Enter position: ", |s| {
            if s.is_empty() {
                Err(RosterError::EmptyField("position"))
            } else {
                Ok(s.to_string())
            }
        })?
        else {
            return Ok(());
        };
        let Some(salary) =
            console.prompt_field("salary", "Enter salary: ", validate::parse_salary)?
        else {
            return Ok(());
        };
        let Some(email) = console.prompt_field("email", "Enter email: ", |s| {
            validate::check_email(s)?;
            Ok(s.to_string())
        })?
        else {
            return Ok(());
        };

        let result = api.add_employee(Employee::new(id, name, position, salary, email))?;
        self.print_result(&result)
    }

    fn update(&mut self) -> Result<()> {
        self.console.write_line("\nUpdate an employee")?;
        let Some(id) = self.prompt_existing_id("Enter employee ID to update: ")? else {
            return Ok(());
        };
        let current = self.api.get(id)?;

        let Menu { api, console } = self;
        console.write_line("Leave a field empty to keep the current value.")?;

        let Some(name) = console.prompt_optional(
            "name",
            &format!("Name [{}]: ", current.name),
            |s| Ok(s.to_string()),
        )?
        else {
            return Ok(());
        };
        let Some(position) = console.prompt_optional(
            "position",
            &format!("Position [{}]: ", current.position),
            |s| Ok(s.to_string()),
        )?
        else {
            return Ok(());
        };
        let Some(salary) = console.prompt_optional(
            "salary",
            &format!("Salary [{}]: ", current.salary),
            validate::parse_salary,
        )?
        else {
            return Ok(());
        };
        let Some(email) = console.prompt_optional(
            "email",
            &format!("Email [{}]: ", current.email),
            |s| {
                validate::check_email(s)?;
                Ok(s.to_string())
            },
        )?
        else {
            return Ok(());
        };

        let update = EmployeeUpdate {
            name,
            position,
            salary,
            email,
        };
        let result = api.update_employee(id, update)?;
        self.print_result(&result)
    }

    fn delete(&mut self) -> Result<()> {
        self.console.write_line("\nDelete an employee")?;
        let Some(id) = self.prompt_existing_id("Enter employee ID to delete: ")? else {
            return Ok(());
        };

        let name = self.api.get(id)?.name;
        let Some(confirmed) = self
            .console
            .confirm(&format!("Are you sure you want to delete {name}? (y/n): "))?
        else {
            return Ok(());
        };
        if confirmed {
            let result = self.api.delete_employee(id)?;
            self.print_result(&result)
        } else {
            self.console
                .write_line(&"Delete cancelled.".yellow().to_string())
        }
    }

    fn search(&mut self) -> Result<()> {
        self.console.write_line("\nSearch for an employee")?;
        let Some(id) = self.prompt_existing_id("Enter employee ID to search: ")? else {
            return Ok(());
        };

        let result = self.api.search_employee(id)?;
        if let Some(employee) = result.listed.first() {
            self.console.write_line("Employee details:")?;
            self.console.write_line(&print::render_details(employee))?;
        }
        self.print_result(&result)
    }

    fn list(&mut self) -> Result<()> {
        let result = self.api.list_employees()?;
        if result.listed.is_empty() {
            self.print_result(&result)
        } else {
            self.console.write_line("\nEmployee list")?;
            self.console.write_line(&print::render_table(&result.listed))
        }
    }

    /// Prompts for an ID that must already exist, retrying on bad or
    /// unknown IDs just like any other field.
    fn prompt_existing_id(&mut self, prompt: &str) -> Result<Option<u32>> {
        let Menu { api, console } = self;
        console.prompt_field("ID", prompt, |s| {
            let id = validate::parse_id(s)?;
            if api.contains(id) {
                Ok(id)
            } else {
                Err(RosterError::NotFound(id))
            }
        })
    }
}
