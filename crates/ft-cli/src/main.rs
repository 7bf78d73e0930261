use std::env;

fn main() {
    std::process::exit(ft_cli::run_cli_from_args(env::args_os()));
}
