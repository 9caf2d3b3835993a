//! CLI adapter.

use std::path::PathBuf;

use clap::Parser;

use crate::app::AppContext;
use crate::app::commands::{generate, import, terminal};
use crate::domain::{AppError, Options};
use crate::ports::CommandRunner;
use crate::services::{ConfigStore, ProcessCommandRunner, StdinPrompt};

#[derive(Parser)]
#[command(name = "kicks")]
#[command(
    about = "Provision kicks application workspaces against disposable platform tenants",
    long_about = None
)]
struct Cli {
    /// Name of the application workspace to generate
    app_name: Option<String>,

    /// Use the local kicks_core checkout
    #[arg(short = 'c', long)]
    local_core: bool,

    /// Use the local kicks_ui checkout
    #[arg(short = 'u', long)]
    local_ui: bool,

    /// Use local checkouts for every dependency
    #[arg(short = 'l', long)]
    local_all: bool,

    /// Answer yes to every confirmation prompt
    #[arg(short = 'f', long)]
    force: bool,

    /// Suppress output of invoked sub-commands
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Open an existing workspace in $EDITOR and exit
    #[arg(short = 'o', long, value_name = "APP_NAME", conflicts_with_all = ["app_name", "edit_config", "import"])]
    open: Option<String>,

    /// Edit ~/.kicks/config.yml in $EDITOR and exit
    #[arg(short = 'e', long, conflicts_with_all = ["app_name", "import"])]
    edit_config: bool,

    /// Import a project config bundle (tar.gz) and exit
    #[arg(short = 'i', long, value_name = "PATH", conflicts_with = "app_name")]
    import: Option<PathBuf>,

    /// Read project config files from ~/.kicks/NAME/
    #[arg(short = 'p', long, value_name = "NAME")]
    project: Option<String>,

    /// Print version and exit
    #[arg(short = 'v', long)]
    version: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    if cli.version {
        println!("kicks {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn dispatch(cli: Cli) -> Result<(), AppError> {
    let home = dirs::home_dir().ok_or_else(|| AppError::Environment("HOME".to_string()))?;
    let store = ConfigStore::new(home.clone());
    store.ensure_exists()?;

    if cli.edit_config {
        return launch_editor(terminal::edit_config(&home)?);
    }

    let config = store.load()?;

    if let Some(app_name) = cli.open.as_deref() {
        return launch_editor(terminal::open_workspace(&config, app_name)?);
    }

    let options = Options {
        local_core: cli.local_core,
        local_ui: cli.local_ui,
        local_all: cli.local_all,
        force: cli.force,
        quiet: cli.quiet,
        project: cli.project,
    };
    let ctx = AppContext::new(home, options, config, ProcessCommandRunner, StdinPrompt);

    if let Some(archive) = cli.import.as_deref() {
        return import::execute(&ctx, archive);
    }

    let app_name = cli.app_name.as_deref().ok_or_else(|| {
        AppError::Usage("Missing application name (try 'kicks my_app', or -h for help)".to_string())
    })?;

    // Both outcomes exit 0; a decline already printed its notice.
    generate::execute(&ctx, app_name).map(|_| ())
}

/// Execute a resolved editor launch as the invocation's final action.
fn launch_editor(launch: terminal::EditorLaunch) -> Result<(), AppError> {
    ProcessCommandRunner.run(&launch.program, &[&launch.target], &launch.cwd, false)
}
