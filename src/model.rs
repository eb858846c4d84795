#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub salary: f64,
    pub email: String,
}

impl Employee {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        position: impl Into<String>,
        salary: f64,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position: position.into(),
            salary,
            email: email.into(),
        }
    }
}

/// Partial overwrite for an existing employee. `None` keeps the prior value.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub email: Option<String>,
}

impl EmployeeUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.position.is_none()
            && self.salary.is_none()
            && self.email.is_none()
    }
}
