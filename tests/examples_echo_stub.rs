#![cfg(unix)]

mod common;
use crate::common::{init_tracing, plan, with_timeout};

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use spawnbench::exec::{Launcher, TokioProcessBackend};
use spawnbench::token::is_valid_token;
use spawnbench::types::LaunchReport;
use tempfile::TempDir;

/// Write a stub that stores its first argument in `<out_dir>/<second argument>`.
fn write_echo_stub(dir: &Path, out_dir: &Path) -> std::path::PathBuf {
    let stub = dir.join("echo-stub.sh");
    let script = format!(
        "#!/bin/sh\nprintf '%s' \"$1\" > '{}'/\"$2\"\n",
        out_dir.display()
    );
    fs::write(&stub, script).unwrap();

    let mut perms = fs::metadata(&stub).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&stub, perms).unwrap();
    stub
}

#[tokio::test]
async fn three_stub_processes_each_write_their_token() {
    with_timeout(async {
        init_tracing();

        let tmp = TempDir::new().unwrap();
        let out_dir = tmp.path().join("out");
        fs::create_dir(&out_dir).unwrap();
        let stub = write_echo_stub(tmp.path(), &out_dir);

        let mut launcher = Launcher::new(TokioProcessBackend::new());
        let report = launcher
            .launch(&plan(stub.to_str().unwrap(), 3))
            .await
            .unwrap();
        assert_eq!(report, LaunchReport { spawned: 3, waited: 3 });

        let entries: Vec<_> = fs::read_dir(&out_dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(entries.len(), 3);

        for path in entries {
            let name = path.file_name().unwrap().to_str().unwrap().to_string();
            let content = fs::read_to_string(&path).unwrap();

            assert!(is_valid_token(&name), "bad file name {name:?}");
            assert_eq!(content, name);
        }
    })
    .await
}
