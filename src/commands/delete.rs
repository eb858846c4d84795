use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{Roster, StoreBackend};

pub fn run<B: StoreBackend>(store: &mut Roster<B>, id: u32) -> Result<CmdResult> {
    let removed = store.delete(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Employee {} deleted.",
        removed.name
    )));
    result.affected.push(removed);
    Ok(result)
}
