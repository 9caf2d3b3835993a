//! Dependency source resolution.

use crate::domain::{AppError, Config, Dependency, Options, SourceBinding};

/// Decide between the default remote source and a configured local checkout.
///
/// Resolution runs independently per dependency; callers must not write any
/// manifest state until every dependency has resolved.
pub fn resolve(
    dependency: Dependency,
    options: &Options,
    config: &Config,
) -> Result<SourceBinding, AppError> {
    if !options.wants_local(dependency) {
        return Ok(SourceBinding::Default);
    }

    let path = config.local_override(dependency).ok_or_else(|| AppError::Configuration {
        key: dependency.config_key().to_string(),
        path: config.source.display().to_string(),
    })?;

    if !path.exists() {
        return Err(AppError::MissingFile {
            label: format!("Local {} checkout", dependency.gem_name()),
            path: path.display().to_string(),
        });
    }

    println!("Using local {} from {}", dependency.gem_name(), path.display());
    Ok(SourceBinding::Local(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config_with(core: Option<PathBuf>, ui: Option<PathBuf>) -> Config {
        Config {
            kicks_home: PathBuf::from("/work/kicks"),
            kicks_core_path: core,
            kicks_ui_path: ui,
            source: PathBuf::from("/home/op/.kicks/config.yml"),
        }
    }

    #[test]
    fn default_when_no_toggle_is_set() {
        let config = config_with(Some(PathBuf::from("/src/kicks_core")), None);
        let options = Options::default();

        let binding = resolve(Dependency::Core, &options, &config).unwrap();
        assert_eq!(binding, SourceBinding::Default);
    }

    #[test]
    fn local_when_toggle_set_and_path_exists() {
        let checkout = TempDir::new().unwrap();
        let config = config_with(Some(checkout.path().to_path_buf()), None);
        let options = Options { local_core: true, ..Options::default() };

        let binding = resolve(Dependency::Core, &options, &config).unwrap();
        assert_eq!(binding, SourceBinding::Local(checkout.path().to_path_buf()));
    }

    #[test]
    fn all_local_toggle_resolves_every_dependency() {
        let checkout = TempDir::new().unwrap();
        let config = config_with(
            Some(checkout.path().to_path_buf()),
            Some(checkout.path().to_path_buf()),
        );
        let options = Options { local_all: true, ..Options::default() };

        for dependency in Dependency::ALL {
            let binding = resolve(dependency, &options, &config).unwrap();
            assert_eq!(binding, SourceBinding::Local(checkout.path().to_path_buf()));
        }
    }

    #[test]
    fn missing_config_key_is_a_configuration_error() {
        let config = config_with(None, None);
        let options = Options { local_ui: true, ..Options::default() };

        let result = resolve(Dependency::Ui, &options, &config);
        match result {
            Err(AppError::Configuration { key, path }) => {
                assert_eq!(key, "kicks_ui_path");
                assert_eq!(path, "/home/op/.kicks/config.yml");
            }
            other => panic!("expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn nonexistent_path_is_a_missing_file_error() {
        let config = config_with(Some(PathBuf::from("/nonexistent/kicks_core")), None);
        let options = Options { local_core: true, ..Options::default() };

        let result = resolve(Dependency::Core, &options, &config);
        match result {
            Err(AppError::MissingFile { label, path }) => {
                assert_eq!(label, "Local kicks_core checkout");
                assert_eq!(path, "/nonexistent/kicks_core");
            }
            other => panic!("expected MissingFile error, got {:?}", other),
        }
    }
}
