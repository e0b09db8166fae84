use crate::config::Config;
use crate::core::sheet;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::mark_current;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let names = sheet::list(cfg);

    if names.is_empty() {
        info("There are no timesheets. Use `tsheet new <NAME> --rate <RATE>` to create one.");
        return Ok(());
    }

    for name in names {
        let current = cfg.last.as_deref() == Some(name.as_str());
        println!("{}", mark_current(&name, current));
    }

    Ok(())
}
