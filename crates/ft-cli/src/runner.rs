use std::fs;
use std::path::{Path, PathBuf};

use ft_compiler::convert;
use ft_core::{FormError, FormTree};
use ft_parser::{decode_workbook, parse_workbook_xml};

use crate::{map_input_read, map_output_encode, map_output_write};

pub(crate) fn convert_workbook(path: &Path) -> Result<FormTree, FormError> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    let source = fs::read_to_string(path).map_err(map_input_read)?;
    let book = parse_workbook_xml(&file_name, &source)?;
    let form = decode_workbook(&book)?;
    convert(form)
}

// The output lands next to the input with a .json extension, or under
// `out_dir` keeping just the file name.
pub(crate) fn output_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let target = input.with_extension("json");
    match out_dir {
        Some(dir) => dir.join(target.file_name().unwrap_or(target.as_os_str())),
        None => target,
    }
}

pub(crate) fn write_form_tree(tree: &FormTree, path: &Path, pretty: bool) -> Result<(), FormError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(map_output_write)?;
    }
    let payload = if pretty {
        serde_json::to_string_pretty(tree)
    } else {
        serde_json::to_string(tree)
    }
    .map_err(map_output_encode)?;
    fs::write(path, payload).map_err(map_output_write)
}
