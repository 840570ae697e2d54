//! Application startup: argument parsing, configuration, logging and the scan

use std::io::Write;

use super::cli::args::Args;
use super::cli::display::TextReporter;
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::{effective_level, init_logging};
use crate::scanner::Scanner;

/// Run the application and return the process exit code
pub fn startup() -> i32 {
    let argv: Vec<String> = std::env::args().collect();
    run(&argv)
}

/// Run with an explicit argument list (including the program name)
pub fn run(argv: &[String]) -> i32 {
    let mut args = match Args::parse_from_args(argv) {
        Ok(args) => args,
        Err(e) => {
            // Help and version land here too, with exit code 0
            let _ = e.print();
            return e.exit_code();
        }
    };

    // The configuration file may set the log level, so load it before
    // logging starts and report any failure afterwards
    let config_result = args.load_config_file();

    let use_color = args.color_enabled();
    if let Err(e) = init_logging(
        effective_level(args.log_level.as_deref(), args.verbosity()),
        args.log_format.as_deref(),
        args.log_file_path(),
        use_color,
    ) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    log::debug!(
        "{} {} starting",
        super::cli::args::APP_NAME,
        crate::core::version::long_version()
    );

    match config_result {
        Ok(Some(path)) => log::debug!("Loaded configuration from {}", path.display()),
        Ok(None) => log::debug!("No configuration file loaded"),
        Err(e) => {
            log_error_with_context(&e, "Loading configuration");
            return 1;
        }
    }

    if let Err(e) = args.apply_enhanced_parsing().and_then(|_| args.validate()) {
        log_error_with_context(&e, "Validating arguments");
        return 1;
    }

    let scanner = Scanner::new(args.scan_config());
    log::debug!("Scan configuration: {:?}", scanner.config());

    let stdout = std::io::stdout();
    let mut reporter =
        TextReporter::new(stdout.lock(), use_color).report_skipped(args.report_skipped);

    match scanner.scan(&mut reporter) {
        Ok(stats) => {
            log::debug!("Scanned {}", stats);
            0
        }
        Err(e) => {
            let _ = reporter.into_inner().flush();
            log_error_with_context(&e, "Scanning");
            1
        }
    }
}
