use std::{
    fs,
    io::{self, Read},
    process::ExitCode,
};

use calcify::{Calculator, Response};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// calcify evaluates arithmetic expressions made of non-negative numbers and
/// the operators + - * /.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calcify to read the expression from the file named by CONTENTS.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Log filter, for example `debug` or `calcify=trace`.
    #[arg(short, long, env = "CALCIFY_LOG", default_value = "warn")]
    log_level: String,

    /// The expression. Read from standard input when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| {
                                                        eprintln!("Ignoring invalid log filter '{}'.",
                                                                  args.log_level);
                                                        EnvFilter::new("warn")
                                                    });
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();

    let expression = match read_expression(&args) {
        Ok(expression) => expression,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        },
    };

    match Calculator::new().handle(&expression) {
        response @ Response::Ok(_) => {
            println!("{response}");
            ExitCode::SUCCESS
        },
        response @ Response::BadRequest(_) => {
            eprintln!("{response}");
            ExitCode::from(1)
        },
        response @ Response::InternalError => {
            eprintln!("{response}");
            ExitCode::from(2)
        },
    }
}

/// Returns the expression named by the arguments.
///
/// A single trailing newline is dropped from file and stdin input, since
/// editors and shells add one.
fn read_expression(args: &Args) -> Result<String, String> {
    let raw = match (&args.contents, args.file) {
        (Some(path), true) => fs::read_to_string(path).map_err(|_| {
                                                           format!("Failed to read the input file '{path}'. Perhaps this file does not exist?")
                                                       })?,
        (Some(contents), false) => return Ok(contents.clone()),
        (None, _) => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)
                       .map_err(|e| format!("Failed to read standard input: {e}"))?;
            buf
        },
    };

    let trimmed = raw.strip_suffix('\n').unwrap_or(&raw);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(trimmed.to_string())
}
