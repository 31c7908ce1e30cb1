//! Saving reports to disk

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use umbra_core::prelude::*;

/// File name for a report saved at `at`
pub fn report_file_name(at: DateTime<Local>) -> String {
    format!("umbra-informe-{}.txt", at.format("%Y%m%d-%H%M%S"))
}

/// Write `text` into `directory`, creating it if needed
pub fn save_report(directory: &Path, text: &str, at: DateTime<Local>) -> Result<PathBuf> {
    std::fs::create_dir_all(directory)
        .map_err(|e| Error::report_save(directory, e.to_string()))?;

    let path = directory.join(report_file_name(at));
    std::fs::write(&path, text).map_err(|e| Error::report_save(&path, e.to_string()))?;

    debug!("Wrote {} bytes to {:?}", text.len(), path);
    Ok(path)
}
