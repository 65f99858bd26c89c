use std::env::args_os;

use lexicode::{run, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match run(&arguments) {
        Ok(_) => println!("Coding successful"),
        Err(e) => {
            eprintln!("Coding failed because of: {}", e);
            std::process::exit(1);
        }
    }
}
