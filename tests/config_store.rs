mod common;

use common::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn first_run_bootstraps_a_commented_template() {
    let ctx = TestContext::new();

    // No project configs exist yet, so the run fails later in the pipeline;
    // the bootstrap itself must still have happened.
    ctx.cli()
        .arg("demo")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Wrote default configuration"));

    let content = fs::read_to_string(ctx.config_file()).unwrap();
    assert!(content.contains("kicks_home: ~/kicks"));
    assert!(content.contains("# kicks_core_path:"));
    assert!(content.contains("# kicks_ui_path:"));
}

#[test]
fn bootstrap_never_overwrites_an_existing_config() {
    let ctx = TestContext::new();
    let custom = format!("# operator-tuned\nkicks_home: {}\n", ctx.kicks_home().display());
    ctx.write_config(&custom);
    ctx.write_project_configs(None, "https://demo.kickme.dev/api");

    ctx.cli().arg("demo").assert().success();

    assert_eq!(fs::read_to_string(ctx.config_file()).unwrap(), custom);
}

#[test]
fn missing_workspace_root_key_names_key_and_path() {
    let ctx = TestContext::new();
    ctx.write_config("kicks_ui_path: /src/kicks_ui\n");

    ctx.cli()
        .arg("demo")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration key 'kicks_home' not set in"))
        .stderr(predicate::str::contains("config.yml"));
}

#[test]
fn malformed_config_is_a_parse_error() {
    let ctx = TestContext::new();
    ctx.write_config("kicks_home: [oops\n");

    ctx.cli()
        .arg("demo")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse"));
}
