//! Config bundle import.

use std::fs;
use std::path::Path;

use crate::app::AppContext;
use crate::domain::{AppError, store_paths};
use crate::ports::{CommandRunner, Prompt};

/// Extract an externally supplied config bundle into the config store.
///
/// The archive must exist before any target directory is created; its
/// contents are not validated.
pub fn execute<R: CommandRunner, P: Prompt>(
    ctx: &AppContext<R, P>,
    archive: &Path,
) -> Result<(), AppError> {
    if !archive.exists() {
        return Err(AppError::MissingFile {
            label: "Import archive".to_string(),
            path: archive.display().to_string(),
        });
    }
    let archive = fs::canonicalize(archive)?;

    let target = store_paths::project_dir(ctx.home(), ctx.options().project.as_deref());
    fs::create_dir_all(&target)?;

    let archive_arg = archive.display().to_string();
    let target_arg = target.display().to_string();
    ctx.runner().run(
        "tar",
        &["xzf", &archive_arg, "-C", &target_arg],
        ctx.home(),
        ctx.options().quiet,
    )?;

    println!("✅ Imported config bundle into {}", target.display());
    Ok(())
}
