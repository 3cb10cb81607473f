use crate::commands::{CmdMessage, CmdResult, LibrisPaths};
use crate::error::Result;
use std::fs;

pub fn run(paths: &LibrisPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized libris store at {}",
        paths.data.display()
    )));
    Ok(result)
}
