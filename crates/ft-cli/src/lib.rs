use std::collections::BTreeSet;
use std::ffi::OsString;

use clap::Parser;
use ft_core::FormError;

mod cli_args;
mod error_map;
mod inputs;
mod runner;

pub(crate) use cli_args::{CheckArgs, Cli, ConvertArgs, Mode};
pub(crate) use error_map::{
    emit_error, map_input_read, map_input_scan, map_output_encode, map_output_write,
    output_conflict, report_failure,
};
pub(crate) use inputs::collect_workbook_paths;
pub(crate) use runner::{convert_workbook, output_path, write_form_tree};

pub fn run_cli_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => return error.exit_code(),
    };
    match run(cli) {
        Ok(code) => code,
        Err(error) => emit_error(error),
    }
}

fn run(cli: Cli) -> Result<i32, FormError> {
    match cli.command {
        Mode::Convert(args) => run_convert(args),
        Mode::Check(args) => run_check(args),
    }
}

// Conversion keeps going after a bad workbook: every failure is reported
// on stderr and only the exit code says whether the whole batch was clean.
fn run_convert(args: ConvertArgs) -> Result<i32, FormError> {
    let paths = collect_workbook_paths(&args.inputs)?;

    let mut failures = 0;
    let mut claimed = BTreeSet::new();
    for path in &paths {
        // Two inputs may flatten to one target under --out-dir; the first
        // claims it and the rest fail instead of silently overwriting.
        let target = output_path(path, args.out_dir.as_deref());
        if !claimed.insert(target.clone()) {
            report_failure(path, &output_conflict(&target));
            failures += 1;
            continue;
        }
        match convert_workbook(path) {
            Ok(tree) => {
                if let Err(error) = write_form_tree(&tree, &target, args.pretty) {
                    report_failure(path, &error);
                    failures += 1;
                }
            }
            Err(error) => {
                report_failure(path, &error);
                failures += 1;
            }
        }
    }
    Ok(if failures > 0 { 1 } else { 0 })
}

fn run_check(args: CheckArgs) -> Result<i32, FormError> {
    let paths = collect_workbook_paths(&args.inputs)?;

    let mut failures = 0;
    for path in &paths {
        match convert_workbook(path) {
            Ok(_) => println!("ok: {}", path.display()),
            Err(error) => {
                report_failure(path, &error);
                failures += 1;
            }
        }
    }
    Ok(if failures > 0 { 1 } else { 0 })
}
