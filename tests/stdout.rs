//! Unaddressed writes go to the process stdout, which the test harness does not capture:
//! each test re-runs itself in a child process and inspects the child's stdout.
use std::{env, process::Command};

use condio::io::{ConditionalStreamSet, OpenMode};

const CHILD_VAR: &str = "CONDIO_STDOUT_CHILD";

/// Greet through an acquired set, then through the released one.
fn greet_stdout(std_enabled: bool) {
    let dst = tempfile::tempdir().unwrap();
    let io = ConditionalStreamSet::new(std_enabled)
        .register(true, dst.path().join("hello.txt"), OpenMode::Write, Some("en"))
        .acquire()
        .unwrap();

    io.write("condio-acquired-line", None).unwrap();
    io.write("condio-file-line", Some("en")).unwrap();
    let set = io.release().unwrap();
    set.write("condio-released-line", None).unwrap();
}

/// Run `test` in a child process with the given stdout switch, returning the child's stdout.
fn child_stdout(test: &str, std_enabled: bool) -> String {
    let output = Command::new(env::current_exe().unwrap())
        .args([test, "--exact", "--nocapture", "--quiet", "--test-threads=1"])
        .env(CHILD_VAR, if std_enabled { "1" } else { "0" })
        .output()
        .unwrap();
    assert!(output.status.success(), "child test failed: {:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn unaddressed_writes_reach_stdout() {
    if let Ok(flag) = env::var(CHILD_VAR) {
        greet_stdout(flag == "1");
        return;
    }

    let stdout = child_stdout("unaddressed_writes_reach_stdout", true);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines.contains(&"condio-acquired-line"), "{}", stdout);
    assert!(lines.contains(&"condio-released-line"), "{}", stdout);
    assert!(!stdout.contains("condio-file-line"));
}

#[test]
fn disabled_stdout_stays_silent() {
    if let Ok(flag) = env::var(CHILD_VAR) {
        greet_stdout(flag == "1");
        return;
    }

    let stdout = child_stdout("disabled_stdout_stays_silent", false);
    assert!(!stdout.contains("condio-"), "{}", stdout);
}
