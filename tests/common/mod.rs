#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn todos_cmd() -> Command {
    let mut cmd = Command::cargo_bin("todos").unwrap();
    cmd.env_remove("TODOS_ROOT");
    cmd.env_remove("TODOS_STORE");
    cmd.env_remove("TODOS_LOG");
    cmd
}

/// Initialize a workspace and replace its collection with `json`
pub fn init_with_collection(root: &Path, json: &str) {
    todos_cmd().arg("init").arg(root).assert().success();
    fs::write(collection_path(root, "todos"), json).unwrap();
}

pub fn collection_path(root: &Path, name: &str) -> std::path::PathBuf {
    root.join(".todos")
        .join("storage")
        .join(format!("{}.json", name))
}

pub fn read_collection(root: &Path, name: &str) -> serde_json::Value {
    let raw = fs::read_to_string(collection_path(root, name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

pub const THREE_TODOS: &str = r#"{"todos":[
    {"id":1,"title":"buy milk","completed":false},
    {"id":2,"title":"call mom","completed":true},
    {"id":3,"title":"write report","completed":false}
]}"#;
