use anyhow::Result;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

const EVENTS: &str = concat!(
    r#"{"artist":"Beyonce","auth":"Logged In","firstName":"Ann","gender":"F","itemInSession":0,"lastName":"Lee","length":215.0,"level":"free","location":"Austin, TX","method":"PUT","page":"NextSong","registration":1540919166796.0,"sessionId":10,"song":"Halo","status":200,"ts":1542241826796,"userAgent":"Mozilla/5.0","userId":"7"}"#,
    "\n",
    r#"{"artist":"Beyonce","auth":"Logged In","firstName":"Ann","gender":"F","itemInSession":1,"lastName":"Lee","length":215.0,"level":"paid","location":"Austin, TX","method":"PUT","page":"NextSong","registration":1540919166796.0,"sessionId":10,"song":"Halo","status":200,"ts":1542242041796,"userAgent":"Mozilla/5.0","userId":"7"}"#,
    "\n",
    r#"{"artist":null,"auth":"Logged Out","firstName":null,"gender":null,"itemInSession":2,"lastName":null,"length":null,"level":"free","location":null,"method":"GET","page":"Home","registration":null,"sessionId":11,"song":null,"status":200,"ts":1542242100000,"userAgent":null,"userId":""}"#,
    "\n",
);

const SONG: &str = r#"{"num_songs":1,"artist_id":"A1","artist_latitude":null,"artist_longitude":null,"artist_location":"Houston, TX","artist_name":"Beyonce","song_id":"S1","title":"Halo","duration":215.0,"year":2008}"#;

/// A working directory holding dwh.yaml, a local DuckDB warehouse and a
/// tiny copy of the log/song datasets.
struct SparkifyTestEnv {
    _tmp: TempDir,
    root: PathBuf,
}

impl SparkifyTestEnv {
    fn new() -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        let root = tmp.path().to_path_buf();

        std::fs::create_dir_all(root.join("data/log_data"))?;
        std::fs::create_dir_all(root.join("data/song_data"))?;
        std::fs::write(root.join("data/log_data/2018-11-15-events.json"), EVENTS)?;
        std::fs::write(root.join("data/song_data/S1.json"), SONG)?;

        let env = Self { _tmp: tmp, root };
        env.write_config(&env.root.join("warehouse.duckdb"))?;
        Ok(env)
    }

    fn write_config(&self, warehouse: &Path) -> Result<()> {
        let data = self.root.join("data");
        let yaml = format!(
            "engine: duckdb\n\
             storage:\n  \
               log_data: '{}/log_data/*.json'\n  \
               song_data: '{}/song_data/*.json'\n\
             duckdb:\n  \
               path: '{}'\n",
            data.display(),
            data.display(),
            warehouse.display()
        );
        std::fs::write(self.root.join("dwh.yaml"), yaml)?;
        Ok(())
    }

    fn sparkify(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sparkify"));
        cmd.current_dir(&self.root);
        cmd.env_remove("SPARKIFY_DB_HOST");
        cmd.env_remove("SPARKIFY_DB_PASSWORD");
        cmd
    }
}

#[test]
fn test_full_pipeline_on_local_warehouse() -> Result<()> {
    let env = SparkifyTestEnv::new()?;

    env.sparkify()
        .arg("create-tables")
        .assert()
        .success()
        .stdout(predicate::str::contains("Process succeeded"));

    env.sparkify()
        .arg("etl")
        .assert()
        .success()
        .stdout(predicate::str::contains("Process succeeded"));

    env.sparkify()
        .arg("test")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Test Results - Please investigate differences",
        ))
        .stdout(predicate::str::contains("Record Count songplays"))
        .stdout(predicate::str::contains("Count Distinct user_id"))
        .stdout(predicate::str::contains("Process succeeded"));

    Ok(())
}

#[test]
fn test_create_tables_is_rerunnable() -> Result<()> {
    let env = SparkifyTestEnv::new()?;

    for _ in 0..2 {
        env.sparkify()
            .arg("create-tables")
            .assert()
            .success()
            .stdout(predicate::str::contains("Process succeeded"));
    }
    Ok(())
}

#[test]
fn test_etl_without_schema_reports_failure() -> Result<()> {
    let env = SparkifyTestEnv::new()?;

    // Staging tables do not exist yet: the run fails but the process exits normally.
    env.sparkify()
        .arg("etl")
        .assert()
        .success()
        .stderr(predicate::str::contains("Error: Copying into staging tables"))
        .stdout(predicate::str::contains("stg_events"))
        .stdout(predicate::str::contains("Process failed"))
        .stdout(predicate::str::contains("Process succeeded").not());
    Ok(())
}

#[test]
fn test_unreachable_warehouse_reports_failure() -> Result<()> {
    let env = SparkifyTestEnv::new()?;
    env.write_config(&env.root.join("missing/dir/warehouse.duckdb"))?;

    env.sparkify()
        .arg("test")
        .assert()
        .success()
        .stdout(predicate::str::contains("Process failed"));
    Ok(())
}

#[test]
fn test_missing_config_aborts() -> Result<()> {
    let env = SparkifyTestEnv::new()?;
    std::fs::remove_file(env.root.join("dwh.yaml"))?;

    env.sparkify()
        .arg("create-tables")
        .assert()
        .failure()
        .stderr(predicate::str::contains("dwh.yaml"));
    Ok(())
}

#[test]
fn test_redshift_config_requires_cluster() -> Result<()> {
    let env = SparkifyTestEnv::new()?;
    std::fs::write(
        env.root.join("dwh.yaml"),
        "storage:\n  log_data: s3://udacity-dend/log_data\n  song_data: s3://udacity-dend/song_data\n",
    )?;

    env.sparkify().arg("etl").assert().failure();
    Ok(())
}

#[test]
fn test_unknown_command_is_rejected() {
    let env = SparkifyTestEnv::new().unwrap();
    env.sparkify().arg("deploy").assert().failure();
}
