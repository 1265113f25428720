use std::env::args_os;

use pixel_canvas::{convert, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match convert(&arguments) {
        Ok(_) => println!("Conversion successful"),
        Err(e) => eprintln!("Conversion failed because of: {}", e),
    }
}
