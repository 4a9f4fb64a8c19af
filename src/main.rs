use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bmptext::{BmpError, BmpViewer, RenderOptions};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use log::{Level, error, info};

fn create_cmd_args() -> Command {
    Command::new("bmptext")
        .about("Print 24/32-bit BMP images as text")
        .arg(
            Arg::new("spaces")
                .short('s')
                .long("spaces")
                .action(ArgAction::SetTrue)
                .help("Put a space after every character"),
        )
        .arg(
            Arg::new("files")
                .help("BMP files to print, in order. A leading `1` is the same as --spaces")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Append)
                .required(true),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .help_heading("LOGGING")
                .help("Display debug information and higher"),
        )
        .arg(
            Arg::new("trace")
                .long("trace")
                .action(ArgAction::SetTrue)
                .help_heading("LOGGING")
                .help("Display very verbose information"),
        )
        .arg(
            Arg::new("info")
                .long("info")
                .action(ArgAction::SetTrue)
                .help_heading("LOGGING")
                .help("Display information about each file"),
        )
}

fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {e}");
    }
    info!("Log level: {log_level}");
}

fn print_file<W: Write>(viewer: &mut BmpViewer, path: &Path, out: &mut W) -> Result<(), BmpError> {
    viewer.open(path)?;
    let shown = viewer.display(out);
    viewer.close();
    shown
}

fn main() -> ExitCode {
    let options = create_cmd_args().get_matches();
    setup_logger(&options);

    let mut files: Vec<&PathBuf> = options
        .get_many::<PathBuf>("files")
        .map(|v| v.collect())
        .unwrap_or_default();
    let mut spaces = options.get_flag("spaces");
    if files.first().is_some_and(|p| p.as_os_str() == "1") {
        spaces = true;
        files.remove(0);
    }
    if files.is_empty() {
        error!("No input files");
        return ExitCode::from(2);
    }

    let mut viewer = BmpViewer::new(RenderOptions::default().with_spaces(spaces));
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = false;

    for path in files {
        info!("Printing {}", path.display());
        if let Err(e) = print_file(&mut viewer, path, &mut out) {
            error!("{}: {e}", path.display());
            failed = true;
        }
        let separated = viewer
            .append_new_line(&mut out)
            .and_then(|_| viewer.append_new_line(&mut out));
        if let Err(e) = separated {
            error!("Could not write output: {e}");
            return ExitCode::FAILURE;
        }
    }

    if let Err(e) = out.flush() {
        error!("Could not write output: {e}");
        return ExitCode::FAILURE;
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
