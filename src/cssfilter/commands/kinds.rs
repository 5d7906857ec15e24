use crate::catalog::CATALOG;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run() -> Result<CmdResult> {
    Ok(CmdResult::default().with_kinds(CATALOG.iter().collect()))
}
