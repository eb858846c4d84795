use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{Roster, StoreBackend};

pub fn run<B: StoreBackend>(store: &Roster<B>, id: u32) -> Result<CmdResult> {
    let employee = store.get(id)?;
    Ok(CmdResult::default().with_listed(vec![employee.clone()]))
}
