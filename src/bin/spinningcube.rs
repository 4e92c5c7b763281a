use std::process::ExitCode;

use spinningcube::{config, demos, logging};

fn main() -> ExitCode {
    logging::init(config::log_level_from_env());
    demos::exit_code(demos::spinning::run(std::env::args_os()))
}
