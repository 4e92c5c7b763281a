use std::process::{Command, Output};

fn spinningcube(args: &[&std::ffi::OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_spinningcube"))
        .args(args)
        .env("SPINNINGCUBE_LOG", "off")
        .output()
        .unwrap()
}

#[test]
fn missing_model_argument_prints_usage() {
    let output = spinningcube(&[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage: spinningcube <model file>"), "{stderr}");
}

#[test]
fn extra_arguments_print_usage() {
    let output = spinningcube(&["a.json".as_ref(), "b.json".as_ref()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));
}

#[test]
fn unreadable_model_is_reported() {
    let path = std::env::temp_dir().join("spinningcube-cli-missing-model.json");
    let _ = std::fs::remove_file(&path);

    let output = spinningcube(&[path.as_os_str()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Problem opening '"), "{stderr}");
    assert!(stderr.contains("spinningcube-cli-missing-model.json"), "{stderr}");
}

#[test]
fn unsupported_model_format_is_reported() {
    let path = std::env::temp_dir().join("spinningcube-cli-model.obj");
    std::fs::write(&path, "v 0 0 0\n").unwrap();

    let output = spinningcube(&[path.as_os_str()]);
    let _ = std::fs::remove_file(&path);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Problem opening '"));
}
