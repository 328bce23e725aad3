//! Creating, listing and showing records

use crate::common::TestEnv;
use anyhow::Result;

#[test]
fn create_then_show_round_trips_fields() -> Result<()> {
    let env = TestEnv::new()?;

    let result = env
        .command(&["create", "--title", "Title A", "--subhead", "Sub A"])
        .assert_success()?;
    let id = result.parse_created_id().expect("create prints an id");

    let record = env.show_json(id)?;
    assert_eq!(record["id"], id);
    assert_eq!(record["title"], "Title A");
    assert_eq!(record["subhead"], "Sub A");
    assert_eq!(record["description"], "");
    Ok(())
}

#[test]
fn ids_are_distinct_and_listed() -> Result<()> {
    let env = TestEnv::new()?;

    let first = env.create_project("First")?;
    let second = env.create_project("Second")?;
    assert_ne!(first, second);

    let result = env.command(&["list"]).assert_success()?;
    assert!(result.contains_stdout("First"));
    assert!(result.contains_stdout("Second"));
    Ok(())
}

#[test]
fn list_on_empty_store() -> Result<()> {
    let env = TestEnv::new()?;
    let result = env.command(&["list"]).assert_success()?;
    assert!(result.contains_stdout("No projects yet"));
    Ok(())
}

#[test]
fn show_unknown_project_fails() -> Result<()> {
    let env = TestEnv::new()?;
    let result = env.command(&["show", "77"]).assert_failure()?;
    assert!(result.contains_stderr("Project 77 not found"));
    Ok(())
}

#[test]
fn explicit_store_flag_is_honored() -> Result<()> {
    let env = TestEnv::new()?;
    let store = env.root().join("elsewhere");
    let store = store.to_str().expect("utf-8 temp path");

    let result = env
        .command(&["--store", store, "create", "--title", "Remote"])
        .assert_success()?;
    let id = result.parse_created_id().expect("create prints an id");

    assert!(env.root().join("elsewhere").exists());
    env.command(&["show", &id.to_string()]).assert_failure()?;
    let result = env
        .command(&["--store", store, "show", &id.to_string()])
        .assert_success()?;
    assert!(result.contains_stdout("Remote"));
    Ok(())
}
