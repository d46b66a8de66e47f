use clap::error::ErrorKind;
use clap::Parser;
use repotools::{HeaderStripper, OutputFormatter, StripCli};
use std::process;

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let output = OutputFormatter::new();

    let cli = match StripCli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return 0;
        }
        Err(_) => {
            let program = std::env::args()
                .next()
                .unwrap_or_else(|| "strip-copyright".to_string());
            output.usage(&program);
            return 1;
        }
    };

    // Validate before touching any file.
    if let Err(err) = cli.validate() {
        output.invocation_error(&err);
        return 1;
    }

    match HeaderStripper::new().strip_tree(&cli.directory, &output) {
        Ok(_) => {
            output.processing_complete();
            0
        }
        Err(err) => {
            output.invocation_error(&err);
            1
        }
    }
}
