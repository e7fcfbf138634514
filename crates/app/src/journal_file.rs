//! The last run's input journal on disk, so a run can be replayed with the tools CLI.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crawl_core::InputJournal;
use directories::ProjectDirs;

use crate::APP_NAME;

pub fn default_journal_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
        let mut path = proj_dirs.data_dir().to_path_buf();
        path.push("last_run_journal.json");
        path
    })
}

pub fn write_journal_atomic(journal: &InputJournal, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let json = journal.to_json_pretty().map_err(io::Error::other)?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
