use crate::config::Config;
use crate::core::journal;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the config file and every sheet CSV into the directory `dest`, or into a
    /// zip archive `dest` when `compress` is set. Returns the written path.
    pub fn backup(cfg: &Config, dest: &str, compress: bool) -> AppResult<PathBuf> {
        let files = collect_files(cfg)?;
        if files.is_empty() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Nothing to back up in {}", cfg.home.display()),
            )
            .into());
        }

        let dest = expand_tilde(dest);

        let final_path = if compress {
            let zip_path = if dest.extension().is_some_and(|e| e == "zip") {
                dest.clone()
            } else {
                dest.with_extension("zip")
            };
            write_zip(&zip_path, &files)?;
            info(format!("📦 Compressed: {}", zip_path.display()));
            zip_path
        } else {
            let sheets = dest.join("sheets");
            fs::create_dir_all(&sheets)?;
            for (rel, src) in &files {
                fs::copy(src, dest.join(rel))?;
            }
            dest
        };

        success(format!(
            "Backup created: {} ({} files)",
            final_path.display(),
            files.len()
        ));

        journal::record(
            cfg,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_path)
    }
}

/// Files to back up, with their path relative to the home directory.
fn collect_files(cfg: &Config) -> AppResult<Vec<(String, PathBuf)>> {
    let mut files = Vec::new();

    if cfg.config_file().exists() {
        files.push(("tsheet.conf".to_string(), cfg.config_file()));
    }

    for name in cfg.timesheets.keys() {
        let path = cfg.sheet_file(name);
        if path.exists() {
            files.push((format!("sheets/{name}.csv"), path));
        }
    }

    Ok(files)
}

fn write_zip(zip_path: &Path, files: &[(String, PathBuf)]) -> AppResult<()> {
    if let Some(parent) = zip_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for (rel, src) in files {
        let mut f = fs::File::open(src)?;
        zip.start_file(rel.as_str(), options)
            .map_err(std::io::Error::other)?;
        std::io::copy(&mut f, &mut zip)?;
    }

    zip.finish().map_err(std::io::Error::other)?;
    Ok(())
}
