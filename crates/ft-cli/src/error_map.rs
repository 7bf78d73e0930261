use std::fmt::Display;
use std::path::Path;

use ft_core::FormError;

fn map_error(code: &'static str, error: impl Display) -> FormError {
    FormError::new(code, error.to_string())
}

pub(crate) fn map_input_read(error: std::io::Error) -> FormError {
    map_error("CLI_INPUT_READ", error)
}

pub(crate) fn map_input_scan(error: walkdir::Error) -> FormError {
    map_error("CLI_INPUT_SCAN", error)
}

pub(crate) fn map_output_write(error: std::io::Error) -> FormError {
    map_error("CLI_OUTPUT_WRITE", error)
}

pub(crate) fn map_output_encode(error: serde_json::Error) -> FormError {
    map_error("CLI_OUTPUT_ENCODE", error)
}

pub(crate) fn output_conflict(target: &Path) -> FormError {
    FormError::new(
        "CLI_OUTPUT_CONFLICT",
        format!("Output {} collides with an earlier input", target.display()),
    )
}

pub(crate) fn emit_error(error: FormError) -> i32 {
    eprintln!("error: {}", error);
    1
}

pub(crate) fn report_failure(path: &Path, error: &FormError) {
    eprintln!("error: {}: {}", path.display(), error);
}
