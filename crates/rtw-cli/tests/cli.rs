use std::process::Command;

use tempfile::tempdir;

fn rtw() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rtw"))
}

#[test]
fn gradient_writes_reference_image() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("output.ppm");

    let out = rtw()
        .args(["gradient", "--quiet", "-o"])
        .arg(&path)
        .output()
        .expect("run rtw");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Successfully wrote to"));

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("P3\n256 256\n255\n"));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3 + 256 * 256);
    assert_eq!(lines[3], "0 0 255");
    assert_eq!(lines[3 + 255], "255 0 1");
    assert_eq!(*lines.last().unwrap(), "255 255 1");
    for line in &lines[3..] {
        let values: Vec<u32> = line.split(' ').map(|v| v.parse().unwrap()).collect();
        assert_eq!(values.len(), 3);
        assert!(values.iter().all(|v| *v <= 255));
    }
}

#[test]
fn gradient_reports_progress_on_stderr() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("small.ppm");
    let out = rtw()
        .args(["gradient", "-W", "4", "-H", "2", "-o"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Scanlines remaining"));
}

#[test]
fn gradient_unwritable_path_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("out.ppm");
    let out = rtw()
        .args(["gradient", "-q", "-o"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Failed to save"));
}

#[test]
fn info_reads_gradient() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("g.ppm");
    let status = rtw()
        .args(["gradient", "-q", "-W", "8", "-H", "4", "-o"])
        .arg(&path)
        .status()
        .unwrap();
    assert!(status.success());

    let out = rtw().arg("info").arg(&path).output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Resolution: 8x4"));
    assert!(stdout.contains("R: min=  0 max=255"));
}

fn vec_stdout(args: &[&str]) -> String {
    let out = rtw().arg("vec").args(args).output().unwrap();
    assert!(out.status.success(), "{:?}", String::from_utf8_lossy(&out.stderr));
    String::from_utf8(out.stdout).unwrap().trim().to_string()
}

#[test]
fn vec_evaluates_operations() {
    assert_eq!(vec_stdout(&["cross", "1,0,0", "0,1,0"]), "[0.000000 0.000000 1.000000]");
    assert_eq!(vec_stdout(&["len", "3,4,0"]), "5");
    assert_eq!(vec_stdout(&["neg", "-1,2,-3"]), "[1.000000 -2.000000 3.000000]");
    assert_eq!(vec_stdout(&["unit", "0,5,0"]), "[0.000000 1.000000 0.000000]");
}

#[test]
fn vec_checked_division_fails() {
    let out = rtw()
        .args(["vec", "checked-div", "1,1,1", "0"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("division by zero"));
}
