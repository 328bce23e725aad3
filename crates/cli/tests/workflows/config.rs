//! Configuration commands and their effect on editing

use crate::common::TestEnv;
use anyhow::Result;

#[test]
fn defaults_without_config_file() -> Result<()> {
    let env = TestEnv::new()?;

    let result = env
        .command(&["config", "--get", "debounce.delay_ms"])
        .assert_success()?;
    assert_eq!(result.stdout.trim(), "1000");
    assert!(!env.config_path().exists());
    Ok(())
}

#[test]
fn set_persists_and_get_reads_back() -> Result<()> {
    let env = TestEnv::new()?;

    env.command(&["config", "--set", "debounce.delay_ms", "150"])
        .assert_success()?;
    assert!(env.config_path().exists());

    let result = env
        .command(&["config", "--get", "debounce.delay_ms"])
        .assert_success()?;
    assert_eq!(result.stdout.trim(), "150");

    let listing = env.command(&["config", "--list"]).assert_success()?;
    assert!(listing.contains_stdout("150"));
    Ok(())
}

#[test]
fn set_rejects_out_of_range_and_unknown_keys() -> Result<()> {
    let env = TestEnv::new()?;

    env.command(&["config", "--set", "debounce.delay_ms", "0"])
        .assert_failure()?;
    env.command(&["config", "--set", "debounce.delay_ms", "soon"])
        .assert_failure()?;
    let result = env
        .command(&["config", "--set", "debounce.jitter", "5"])
        .assert_failure()?;
    assert!(result.contains_stderr("Unknown config key"));

    assert!(!env.config_path().exists());
    Ok(())
}

#[test]
fn path_create_writes_default_file() -> Result<()> {
    let env = TestEnv::new()?;

    env.command(&["config", "--path", "--create"]).assert_success()?;
    let contents = std::fs::read_to_string(env.config_path())?;
    assert!(contents.contains("delay_ms = 1000"));
    Ok(())
}

#[test]
fn example_is_printed() -> Result<()> {
    let env = TestEnv::new()?;
    let result = env.command(&["config", "--example"]).assert_success()?;
    assert!(result.contains_stdout("[debounce]"));
    assert!(result.contains_stdout("[store]"));
    Ok(())
}

#[test]
fn configured_store_and_delay_are_used_by_edit() -> Result<()> {
    let env = TestEnv::new()?;
    let store = env.root().join("configured-store");

    env.command(&["config", "--set", "store.path", store.to_str().expect("utf-8 temp path")])
        .assert_success()?;
    env.command(&["config", "--set", "debounce.delay_ms", "100"])
        .assert_success()?;

    let id = env.create_project("Before")?;
    assert!(store.exists());

    let result = env
        .command(&["edit", &id.to_string()])
        .stdin("title After\n")
        .assert_success()?;
    assert!(result.contains_stdout("1 saves, 0 failed"));
    assert_eq!(env.show_json(id)?["title"], "After");
    Ok(())
}
