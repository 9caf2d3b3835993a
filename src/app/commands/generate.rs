//! Workspace generation pipeline.
//!
//! A fixed sequence of steps; each step is a hard precondition for the
//! next. The first failure aborts the run and leaves the partial workspace
//! on disk for inspection.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::app::AppContext;
use crate::domain::{AppError, Dependency, store_paths, workspace};
use crate::ports::{CommandRunner, Prompt};
use crate::services::{ConfirmationGate, Decision, source_resolver, tenant_safety};

const LOCAL_ENGINES_INITIALIZER: &str = "\
# Generated by kicks when local engine checkouts are in use.
Rails.application.config.cache_classes = false
";

/// Result of a generate run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Pipeline ran to completion.
    Completed,
    /// Operator declined a confirmation gate.
    Cancelled,
}

/// Drive the full generation pipeline for `app_name`.
pub fn execute<R: CommandRunner, P: Prompt>(
    ctx: &AppContext<R, P>,
    app_name: &str,
) -> Result<GenerateOutcome, AppError> {
    let workspace_dir = ctx.config().workspace_path(app_name);
    let gate = ConfirmationGate::new(ctx.prompt(), ctx.options().force);

    fs::create_dir_all(&ctx.config().kicks_home)?;

    if cleanup_existing(&gate, &workspace_dir)? == Decision::Declined {
        return Ok(GenerateOutcome::Cancelled);
    }

    generate_app(ctx, app_name)?;
    patch_dependencies(ctx, &workspace_dir)?;
    write_local_initializer(ctx, &workspace_dir)?;
    copy_project_configs(ctx, &workspace_dir)?;
    tenant_safety::validate(&workspace_dir)?;
    write_ignore_rules(&workspace_dir)?;
    install_dependencies(ctx, &workspace_dir)?;
    run_scaffold_generator(ctx, &workspace_dir)?;

    if reset_tenant(ctx, &gate, &workspace_dir)? == Decision::Declined {
        return Ok(GenerateOutcome::Cancelled);
    }

    run_migrations(ctx, &workspace_dir)?;

    println!("✅ Workspace ready at {}", workspace_dir.display());
    println!("Next: cd {} && rails server", workspace_dir.display());
    Ok(GenerateOutcome::Completed)
}

/// Warn about a pre-existing workspace and remove it once confirmed.
fn cleanup_existing<P: Prompt>(
    gate: &ConfirmationGate<'_, P>,
    workspace_dir: &Path,
) -> Result<Decision, AppError> {
    if !workspace_dir.exists() {
        return Ok(Decision::Confirmed);
    }

    println!("⚠️  Workspace {} already exists", workspace_dir.display());
    let decision = gate.confirm(&format!("Remove {} and regenerate", workspace_dir.display()))?;
    if decision == Decision::Confirmed {
        fs::remove_dir_all(workspace_dir)?;
    }
    Ok(decision)
}

fn generate_app<R: CommandRunner, P: Prompt>(
    ctx: &AppContext<R, P>,
    app_name: &str,
) -> Result<(), AppError> {
    println!("Generating {} under {}", app_name, ctx.config().kicks_home.display());
    ctx.runner().run(
        "rails",
        &["new", app_name],
        &ctx.config().kicks_home,
        ctx.options().quiet,
    )
}

/// Append dependency declarations to the workspace manifest.
///
/// Both dependencies resolve before anything is written, so a failed
/// resolution never leaves a partially patched manifest.
fn patch_dependencies<R: CommandRunner, P: Prompt>(
    ctx: &AppContext<R, P>,
    workspace_dir: &Path,
) -> Result<(), AppError> {
    let mut lines = Vec::new();
    for dependency in Dependency::ALL {
        let binding = source_resolver::resolve(dependency, ctx.options(), ctx.config())?;
        lines.push(binding.manifest_line(dependency));
    }

    let mut manifest = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(workspace::manifest(workspace_dir))?;
    for line in &lines {
        writeln!(manifest, "{line}")?;
    }

    if ctx.options().any_local() {
        writeln!(manifest)?;
        writeln!(manifest, "# Asset pipeline for local engine development")?;
        for gem in workspace::ASSET_PIPELINE_GEMS {
            writeln!(manifest, "gem \"{gem}\"")?;
        }
    }

    Ok(())
}

/// Write the reload initializer when any local checkout is in use.
fn write_local_initializer<R: CommandRunner, P: Prompt>(
    ctx: &AppContext<R, P>,
    workspace_dir: &Path,
) -> Result<(), AppError> {
    if !ctx.options().any_local() {
        return Ok(());
    }

    let path = workspace::local_engines_initializer(workspace_dir);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, LOCAL_ENGINES_INITIALIZER)?;
    Ok(())
}

/// Copy the project config files from the config store into the workspace.
fn copy_project_configs<R: CommandRunner, P: Prompt>(
    ctx: &AppContext<R, P>,
    workspace_dir: &Path,
) -> Result<(), AppError> {
    let source = store_paths::project_dir(ctx.home(), ctx.options().project.as_deref());
    let target = workspace::config_dir(workspace_dir);
    fs::create_dir_all(&target)?;

    for name in workspace::PROJECT_CONFIG_FILES {
        let file = source.join(name);
        if !file.exists() {
            return Err(AppError::MissingFile {
                label: "Project config file".to_string(),
                path: file.display().to_string(),
            });
        }
        fs::copy(&file, target.join(name))?;
    }

    Ok(())
}

/// Exclude the copied config files from the workspace's version control.
fn write_ignore_rules(workspace_dir: &Path) -> Result<(), AppError> {
    let mut content = String::new();
    for name in workspace::PROJECT_CONFIG_FILES {
        content.push_str(name);
        content.push('\n');
    }
    fs::write(workspace::ignore_rules(workspace_dir), content)?;
    Ok(())
}

fn install_dependencies<R: CommandRunner, P: Prompt>(
    ctx: &AppContext<R, P>,
    workspace_dir: &Path,
) -> Result<(), AppError> {
    println!("Installing dependencies");
    ctx.runner().run("bundle", &["install"], workspace_dir, ctx.options().quiet)
}

fn run_scaffold_generator<R: CommandRunner, P: Prompt>(
    ctx: &AppContext<R, P>,
    workspace_dir: &Path,
) -> Result<(), AppError> {
    println!("Running the kicks:install generator");
    ctx.runner().run(
        "bundle",
        &["exec", "rails", "generate", "kicks:install"],
        workspace_dir,
        ctx.options().quiet,
    )
}

/// Reset the remote tenant once confirmed; a decline stops the run.
fn reset_tenant<R: CommandRunner, P: Prompt>(
    ctx: &AppContext<R, P>,
    gate: &ConfirmationGate<'_, P>,
    workspace_dir: &Path,
) -> Result<Decision, AppError> {
    let decision = gate.confirm("Reset the tenant (destroys remote data)")?;
    if decision == Decision::Confirmed {
        ctx.runner().run(
            "bundle",
            &["exec", "rake", "kicks:tenant:reset"],
            workspace_dir,
            ctx.options().quiet,
        )?;
    }
    Ok(decision)
}

fn run_migrations<R: CommandRunner, P: Prompt>(
    ctx: &AppContext<R, P>,
    workspace_dir: &Path,
) -> Result<(), AppError> {
    println!("Running database migrations");
    ctx.runner().run(
        "bundle",
        &["exec", "rake", "db:migrate"],
        workspace_dir,
        ctx.options().quiet,
    )
}
