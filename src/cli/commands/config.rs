use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::core::config::ConfigLogic;
use crate::core::journal;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &mut Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: run_migrate,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", cfg.config_file().display());
            println!("{}", serde_yaml::to_string(&*cfg)?);
        }

        // ---- CHECK ----
        if *check {
            let issues = migrate::check(cfg)?;
            if issues.is_empty() {
                success("Configuration is complete.");
            } else {
                for issue in &issues {
                    warning(issue);
                }
                if issues.iter().any(|i| i.is_fixable()) {
                    info("Run `tsheet config --migrate` to fill missing fields.");
                }
            }
        }

        // ---- MIGRATE ----
        if *run_migrate {
            let changed = migrate::migrate(cfg)?;
            if changed == 0 {
                info("Nothing to migrate.");
            } else {
                success(format!("Filled {changed} missing field(s)."));
                journal::record(cfg, "migrate", "", &format!("Filled {changed} fields"));
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !cfg.config_file().exists() {
                cfg.save()?;
            }
            ConfigLogic::edit(&cfg.config_file(), editor.as_deref())?;
        }
    }

    Ok(())
}
