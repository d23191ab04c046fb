//! Shared testing utilities for cfobs integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Model-field configuration published with the GEOS-CF matching workflow.
#[allow(dead_code)]
pub const GEOS_CF_CONFIG: &str = r#"met:
  template: 'https://opendap.nccs.nasa.gov/dods/gmao/geos-cf/assim/met_tavg_1hr_g1440x721_x1'
  vars:
    ps:
      name_on_file: 'ps'
    t10m:
      name_on_file: 't10m'
chem:
  template: 'https://opendap.nccs.nasa.gov/dods/gmao/geos-cf/assim/chm_tavg_1hr_g1440x721_v1'
  vars:
    o3:
      name_on_file: 'o3'
      scal: 1.0e+9
"#;

/// Testing harness providing an isolated directory for configuration files.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Write `content` to `relative` under the test root and return its path.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    /// Write the GEOS-CF example configuration and return its path.
    pub fn geos_cf_config(&self) -> PathBuf {
        self.write("cf_config.yml", GEOS_CF_CONFIG)
    }

    /// Build a command for invoking the compiled `cfobs` binary in the test root.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("cfobs").expect("Failed to locate cfobs binary");
        cmd.current_dir(self.root()).env_remove("RUST_LOG");
        cmd
    }
}
