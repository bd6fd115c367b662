use crate::cli::build_command;
use clap_complete::{Shell, generate};

pub fn cmd_completions(shell: Shell) {
    let mut cmd = build_command();
    generate(shell, &mut cmd, "tmc", &mut std::io::stdout());
}
