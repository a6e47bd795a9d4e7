use loglook_core::{FileSource, LogSource, write_report};
use loglook_parser::PatternParser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::io;
use std::path::PathBuf;

fn print_usage() {
    eprintln!("Usage: loglook [OPTIONS] <log-file>");
    eprintln!();
    eprintln!("Prints one report block per line of the log file: the raw line,");
    eprintln!("its bracketed timestamp and leading label (if present), and a");
    eprintln!("separator.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --verbose, -v           Enable debug logging on stderr");
    eprintln!("  --help, -h              Print this help message");
}

struct Options {
    path: PathBuf,
    verbose: bool,
}

enum Invocation {
    Run(Options),
    Help,
}

impl Invocation {
    fn from_args(args: &[String]) -> Result<Self, io::Error> {
        let mut path = None;
        let mut verbose = false;

        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Self::Help),
                "--verbose" | "-v" => verbose = true,
                _ if arg.starts_with('-') => {
                    print_usage();
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "Unknown option",
                    ));
                }
                _ => {
                    if path.is_some() {
                        print_usage();
                        return Err(io::Error::new(
                            io::ErrorKind::InvalidInput,
                            "Only one log file is allowed",
                        ));
                    }
                    path = Some(PathBuf::from(arg));
                }
            }
        }

        match path {
            Some(path) => Ok(Self::Run(Options { path, verbose })),
            None => {
                print_usage();
                Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "Missing log file path",
                ))
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    // stdout carries the report; diagnostics stay on stderr
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = match Invocation::from_args(&args)? {
        Invocation::Run(options) => options,
        Invocation::Help => {
            print_usage();
            return Ok(());
        }
    };

    init_logging(options.verbose);

    let source = match FileSource::open(&options.path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error opening log file: {:#}", e);
            std::process::exit(1);
        }
    };

    let parser = PatternParser::new();
    let stdout = io::stdout();

    // a failed scan skips the report but does not fail the run
    if let Err(e) = write_report(&source, &parser, &mut stdout.lock()) {
        log::error!("Error reading log file: {:#}", e);
    }

    if let Err(e) = source.close() {
        log::error!("Error closing log file: {:#}", e);
    }

    Ok(())
}
