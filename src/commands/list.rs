use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{Roster, StoreBackend};

pub fn run<B: StoreBackend>(store: &Roster<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed(store.employees().to_vec());
    if result.listed.is_empty() {
        result.add_message(CmdMessage::info("No employees found."));
    }
    Ok(result)
}
