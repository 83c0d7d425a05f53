use std::{io::BufWriter, path::PathBuf, process::ExitCode};

use tracing::debug;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use sig_dump::{ScanOptions, Settings, config::LogLevel};

fn init_logging(
    options: &ScanOptions,
    settings: &Settings,
) {
    let level = if options.verbose {
        LogLevel::Debug
    } else {
        settings.logging.level
    };
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()));

    let file_layer = options.log_file.as_ref().map(|log_path| {
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path.file_name().unwrap_or(std::ffi::OsStr::new("sig-dump.log")),
        );
        fmt::layer().with_writer(file_appender).with_ansi(false).with_target(false).with_filter(filter())
    });

    let stderr_layer =
        fmt::layer().with_writer(std::io::stderr).with_ansi(false).with_target(false).with_filter(filter());

    tracing_subscriber::registry().with(file_layer).with(stderr_layer).init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let options = match ScanOptions::try_parse_args(std::env::args_os()) {
        Ok(options) => options,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        },
    };

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let settings = match Settings::discover(options.config.as_deref(), &cwd) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(1);
        },
    };

    init_logging(&options, &settings);
    debug!("sig-dump v{} scanning {} sources", env!("CARGO_PKG_VERSION"), options.sources.len());

    let stdout = BufWriter::new(std::io::stdout());
    match sig_dump::scan(&options, &settings, stdout).await {
        Ok(status) => ExitCode::from(status.exit_code()),
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(1)
        },
    }
}
