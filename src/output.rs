//! Where finished sheets go on disk

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::{Result, Sheet};

/// Output file name for a label: spaces and path separators removed,
/// `_image.png` appended. The result never leaves the output directory.
pub fn file_name_for(label: &str) -> String {
    let stem: String = label
        .chars()
        .filter(|c| !matches!(c, ' ' | '/' | '\\'))
        .collect();
    format!("{}_image.png", stem)
}

/// Create `path` and any missing parents. Returns whether anything was
/// created; an existing file in its place is an error.
pub fn ensure_dir(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(false),
        Ok(_) => {
            let msg = format!("{} exists and is not a directory", path.display());
            Err(io::Error::other(msg).into())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(path)?;
            debug!("created {}", path.display());
            Ok(true)
        }
        Err(e) => Err(e.into()),
    }
}

/// Encode `sheet` and write it into `dir`, returning the file's path.
pub fn save_sheet(dir: &Path, label: &str, sheet: &Sheet) -> Result<PathBuf> {
    let path = dir.join(file_name_for(label));
    let png = sheet.to_png()?;
    fs::write(&path, png)?;
    Ok(path)
}
