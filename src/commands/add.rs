use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Employee;
use crate::store::{Roster, StoreBackend};

pub fn run<B: StoreBackend>(store: &mut Roster<B>, employee: Employee) -> Result<CmdResult> {
    let name = employee.name.clone();
    store.add(employee.clone())?;

    let mut result = CmdResult::default().with_affected(vec![employee]);
    result.add_message(CmdMessage::success(format!(
        "Employee {name} added successfully."
    )));
    Ok(result)
}
