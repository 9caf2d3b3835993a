//! Named dependencies of the generated workspace and their resolved sources.

use std::path::PathBuf;

/// A workspace dependency whose source can be swapped for a local checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    /// The platform engine gem.
    Core,
    /// The admin UI engine gem.
    Ui,
}

impl Dependency {
    /// Every dependency patched into a generated workspace, in manifest order.
    pub const ALL: [Dependency; 2] = [Dependency::Core, Dependency::Ui];

    /// Gem name as declared in the workspace manifest.
    pub fn gem_name(self) -> &'static str {
        match self {
            Dependency::Core => "kicks_core",
            Dependency::Ui => "kicks_ui",
        }
    }

    /// Configuration key holding the local checkout path.
    pub fn config_key(self) -> &'static str {
        match self {
            Dependency::Core => "kicks_core_path",
            Dependency::Ui => "kicks_ui_path",
        }
    }
}

/// Resolved source for a dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceBinding {
    /// Released gem from the default registry.
    Default,
    /// Local checkout at the given path.
    Local(PathBuf),
}

impl SourceBinding {
    /// Manifest line declaring `dependency` with this source.
    pub fn manifest_line(&self, dependency: Dependency) -> String {
        match self {
            SourceBinding::Default => format!("gem \"{}\"", dependency.gem_name()),
            SourceBinding::Local(path) => {
                format!("gem \"{}\", path: \"{}\"", dependency.gem_name(), path.display())
            }
        }
    }
}
