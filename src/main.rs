use pyth_solver::utils::logger;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    logger::init_cli_logger();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match pyth_solver::run(std::env::args_os(), &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::warn!("{}", e);
            if e.is_invalid_arguments() {
                // nothing else to report if stdout itself is gone
                let _ = writeln!(out, "{}", e.user_friendly_message());
                let _ = out.flush();
            } else {
                eprintln!("{}", e.user_friendly_message());
            }
            ExitCode::from(e.exit_code())
        }
    }
}
