use crate::config::Config;
use crate::core::journal;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This creates:
///  - the home directory (if missing)
///  - the configuration file
///  - the `sheets/` directory
pub fn handle(cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing tsheet…");

    let cfg = Config::init_all(&cfg.home)?;

    println!("📄 Config file : {}", cfg.config_file().display());
    println!("🗂️  Sheets     : {}", cfg.sheets_dir().display());

    journal::record(&cfg, "init", "", &format!("Initialized {}", cfg.home.display()));

    println!("🎉 tsheet initialization completed!");
    Ok(())
}
