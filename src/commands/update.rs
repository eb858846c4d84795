use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::EmployeeUpdate;
use crate::store::{Roster, StoreBackend};

pub fn run<B: StoreBackend>(
    store: &mut Roster<B>,
    id: u32,
    update: EmployeeUpdate,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if update.is_empty() {
        // Nothing to change: report without rewriting the file.
        store.get(id)?;
        result.add_message(CmdMessage::info(format!("Employee {id} left unchanged.")));
        return Ok(result);
    }

    let updated = store.update(id, update)?;
    result.add_message(CmdMessage::success(format!(
        "Employee {} updated successfully.",
        updated.name
    )));
    result.affected.push(updated);
    Ok(result)
}
