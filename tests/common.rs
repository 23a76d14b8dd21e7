use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Three nodes on a line, undirected unit edges 0-1 and 1-2
#[allow(dead_code)]
pub const PATH_GRAPH: &str = "\
ID: 0 Val: {0, 0} Edges: (1, {1, 0}, 1) 
ID: 1 Val: {1, 0} Edges: (0, {0, 0}, 1) (2, {2, 0}, 1) 
ID: 2 Val: {2, 0} Edges: (1, {1, 0}, 1) 
";

/// A waypoint command isolated from any real config files
pub fn waypoint(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("waypoint");
    cmd.current_dir(dir)
        .env("WAYPOINT_CONFIG_DIR", dir.join("global-config"))
        .env_remove("RUST_LOG")
        .env_remove("WAYPOINT_LOG")
        .env_remove("WAYPOINT_LOG_LEVEL");
    cmd
}

#[allow(dead_code)]
pub fn write_graph(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).expect("write graph file");
    path
}
