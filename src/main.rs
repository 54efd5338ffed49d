use keyshift::cli::run_cli;
use keyshift::tf;
use keyshift::utils::constants::EXIT_FAILURE;
use keyshift::utils::logger::Logger;

fn main() {
    if let Err(e) = run_cli() {
        Logger::error(tf!("error.failed", format!("{:#}", e)));
        std::process::exit(EXIT_FAILURE);
    }
}
