use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Two-video catalog with a header row
pub const SAMPLE_CSV: &str = "id,tags,views,likes,comments\n\
v1,dance,100,10,1\n\
v2,dance;fun,200,20,2\n";

/// Get a Command for tagcast, isolated from any user config or log env
pub fn tagcast() -> Command {
    let mut cmd = cargo_bin_cmd!("tagcast");
    cmd.env(
        "TAGCAST_CONFIG_DIR",
        Path::new(env!("CARGO_TARGET_TMPDIR")).join("tagcast-no-config"),
    )
    .env_remove("TAGCAST_CONFIG")
    .env_remove("TAGCAST_LOG")
    .env_remove("RUST_LOG");
    cmd
}

/// Write a dataset file into `dir` and return its path
pub fn write_dataset(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
