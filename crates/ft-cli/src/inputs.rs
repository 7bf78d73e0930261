use std::path::{Path, PathBuf};

use ft_core::FormError;
use walkdir::WalkDir;

use crate::map_input_scan;

// Directories are walked recursively for .xml files and must contain at
// least one; plain files must carry the .xml extension. The result keeps
// the command line order, with directory contents sorted by path.
pub(crate) fn collect_workbook_paths(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, FormError> {
    let mut paths = Vec::new();
    for input in inputs {
        if !input.exists() {
            return Err(FormError::new(
                "CLI_INPUT_NOT_FOUND",
                format!("Input does not exist: {}", input.display()),
            ));
        }
        if input.is_dir() {
            let mut found = Vec::new();
            for entry in WalkDir::new(input).follow_links(false) {
                let entry = entry.map_err(map_input_scan)?;
                if entry.file_type().is_file() && is_workbook_path(entry.path()) {
                    found.push(entry.into_path());
                }
            }
            if found.is_empty() {
                return Err(FormError::new(
                    "CLI_INPUT_EMPTY",
                    format!("No .xml workbooks under {}", input.display()),
                ));
            }
            found.sort();
            paths.extend(found);
        } else if is_workbook_path(input) {
            paths.push(input.clone());
        } else {
            return Err(FormError::new(
                "CLI_INPUT_UNSUPPORTED",
                format!("Unsupported input extension: {}", input.display()),
            ));
        }
    }
    Ok(paths)
}

fn is_workbook_path(path: &Path) -> bool {
    path.extension().map(|ext| ext == "xml").unwrap_or(false)
}
