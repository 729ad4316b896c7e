#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::{Path, PathBuf};
use std::time::Duration;

use presence_analyzer::data::DataStore;

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn csv_fixture() -> String {
    fixture("test_data.csv").to_string_lossy().to_string()
}

pub fn xml_fixture() -> String {
    fixture("test_users.xml").to_string_lossy().to_string()
}

/// Binary under test, with HOME pointed at `home` so no real config is read
/// and the fixture files passed as data sources.
pub fn pa(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("presence-analyzer");
    cmd.env("HOME", home)
        .env("NO_COLOR", "1")
        .args(["--csv", &csv_fixture(), "--xml", &xml_fixture()]);
    cmd
}

/// Binary under test without data overrides.
pub fn pa_bare(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("presence-analyzer");
    cmd.env("HOME", home).env("NO_COLOR", "1");
    cmd
}

pub fn fixture_store() -> DataStore {
    DataStore::new(
        fixture("test_data.csv"),
        fixture("test_users.xml"),
        Duration::from_secs(600),
    )
}
