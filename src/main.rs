//! tsheet main entrypoint.

use tsheet::run;

fn main() {
    pretty_env_logger::init_custom_env("TSHEET_LOG");

    if let Err(e) = run() {
        log::debug!("{e:?}");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
