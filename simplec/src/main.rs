use std::process::ExitCode;

use simplec_driver::{Argument, Parser};

fn main() -> ExitCode {
    let argument = Argument::parse();
    simplec_driver::run(&argument)
}
