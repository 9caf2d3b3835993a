use crate::domain::Dependency;

/// Flags controlling a generate or import run.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Use the local `kicks_core` checkout.
    pub local_core: bool,
    /// Use the local `kicks_ui` checkout.
    pub local_ui: bool,
    /// Use local checkouts for every dependency.
    pub local_all: bool,
    /// Answer yes to every confirmation prompt.
    pub force: bool,
    /// Suppress output of invoked sub-commands.
    pub quiet: bool,
    /// Read project config files from `~/.kicks/<NAME>/` instead of the store root.
    pub project: Option<String>,
}

impl Options {
    /// Whether `dependency` should resolve to a local checkout.
    ///
    /// The all-local toggle is not merged into the per-dependency toggles at
    /// parse time; any relevant toggle enables local resolution here.
    pub fn wants_local(&self, dependency: Dependency) -> bool {
        self.local_all
            || match dependency {
                Dependency::Core => self.local_core,
                Dependency::Ui => self.local_ui,
            }
    }

    /// Whether any local-source toggle is set.
    pub fn any_local(&self) -> bool {
        self.local_all || self.local_core || self.local_ui
    }
}
