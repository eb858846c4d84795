//! Flat-file backend: one CSV file holding the whole collection.
//!
//! The file carries a `id,name,position,salary,email` header and one record
//! per row. Fields containing a comma, a quote, or a line break are quoted
//! with embedded quotes doubled. Every persist rewrites the file in full,
//! through a `.tmp` sibling renamed over the target so a crash mid-write
//! never leaves a half-written file behind.

use super::StoreBackend;
use crate::error::{Result, RosterError};
use crate::model::Employee;
use std::ffi::OsString;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const HEADER: &str = "id,name,position,salary,email";
pub const DEFAULT_FILENAME: &str = "employees.csv";

#[derive(Debug)]
pub struct CsvBackend {
    path: PathBuf,
}

impl CsvBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl StoreBackend for CsvBackend {
    fn load(&mut self) -> Result<Vec<Employee>> {
        if !self.path.exists() {
            // First run: leave a header-only file so disk matches memory.
            self.persist(&[])?;
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        decode(&content)
    }

    fn persist(&mut self, employees: &[Employee]) -> Result<()> {
        let tmp = self.tmp_path();
        {
            let file = fs::File::create(&tmp)?;
            let mut writer = BufWriter::new(file);
            writeln!(writer, "{HEADER}")?;
            for employee in employees {
                writeln!(writer, "{}", encode_row(employee))?;
            }
            writer.flush()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn encode_row(employee: &Employee) -> String {
    format!(
        "{},{},{},{},{}",
        employee.id,
        escape(&employee.name),
        escape(&employee.position),
        employee.salary,
        escape(&employee.email)
    )
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn decode(content: &str) -> Result<Vec<Employee>> {
    let mut employees = Vec::new();
    for (line, fields) in parse_rows(content) {
        // Header row, matched loosely so hand-edited files still load.
        if line == 1 && fields.first().map(String::as_str) == Some("id") {
            continue;
        }
        if fields.len() != 5 {
            return Err(RosterError::Parse {
                line,
                message: format!("expected 5 fields, got {}", fields.len()),
            });
        }
        let id = fields[0].trim().parse().map_err(|_| RosterError::Parse {
            line,
            message: format!("bad id {:?}", fields[0]),
        })?;
        let salary = fields[3].trim().parse().map_err(|_| RosterError::Parse {
            line,
            message: format!("bad salary {:?}", fields[3]),
        })?;
        employees.push(Employee {
            id,
            name: fields[1].clone(),
            position: fields[2].clone(),
            salary,
            email: fields[4].clone(),
        });
    }
    Ok(employees)
}

/// Splits CSV content into rows of fields, honoring quoted fields with
/// doubled quotes and embedded separators. Returns each row with the line
/// number it started on; blank rows are skipped.
fn parse_rows(content: &str) -> Vec<(usize, Vec<String>)> {
    let mut rows = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut line = 1;
    let mut row_start = 1;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() && !quoted => {
                in_quotes = true;
                quoted = true;
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
                quoted = false;
            }
            '\r' if !in_quotes => {}
            '\n' if !in_quotes => {
                line += 1;
                if !fields.is_empty() || !field.is_empty() {
                    fields.push(std::mem::take(&mut field));
                    rows.push((row_start, std::mem::take(&mut fields)));
                }
                quoted = false;
                row_start = line;
            }
            _ => {
                if c == '\n' {
                    line += 1;
                }
                field.push(c);
            }
        }
    }
    if !fields.is_empty() || !field.is_empty() {
        fields.push(field);
        rows.push((row_start, fields));
    }
    rows
}
