//! Integration tests for fretwork CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn fretwork(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fretwork"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// A scratch path unique to this test process.
fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("fretwork-{}-{name}", std::process::id()))
}

#[test]
fn styles_command_lists_all_styles() {
    let output = fretwork(&["styles"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    for name in [
        "slats", "rectangular", "diamond", "honeycomb", "chevron", "triangle", "circles", "basketweave", "brick",
        "floweroflife", "metatron", "starwars", "sriyantra", "mandala", "fibonacci", "torus",
    ] {
        assert!(stdout.contains(name), "Should list '{name}'");
    }
}

#[test]
fn styles_json_is_parseable() {
    let output = fretwork(&["styles", "--json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let families = value.as_array().unwrap();
    assert_eq!(families.len(), 2);
    assert_eq!(families[0]["styles"].as_array().unwrap().len(), 9);
    assert_eq!(families[1]["styles"].as_array().unwrap().len(), 7);
}

#[test]
fn generate_writes_svg_to_stdout() {
    let output = fretwork(&["generate", "-s", "honeycomb", "-W", "400", "-H", "600", "--seed", "42"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<svg"));
    assert!(stdout.contains(r#"viewBox="0 0 400 600""#));
    assert!(stdout.contains("<line "));
}

#[test]
fn generate_is_deterministic_for_a_seed() {
    let args = ["generate", "-f", "sacred", "-s", "mandala", "-W", "300", "-H", "300", "--seed", "9", "--format", "json"];
    let first = fretwork(&args);
    let second = fretwork(&args);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn generate_dxf_infers_format_from_extension() {
    let path = scratch("panel.dxf");
    let output = fretwork(&[
        "generate", "-s", "brick", "-W", "12", "-H", "18", "--seed", "3", "-o", path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let text = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).ok();

    assert!(text.contains("ENTITIES"));
    assert!(text.contains("FRAME"));
    assert!(text.contains("PATTERN"));
    assert!(text.trim_end().ends_with("EOF"));
}

#[test]
fn generate_json_carries_seed_and_frame() {
    let output = fretwork(&[
        "generate", "-s", "circles", "-W", "200", "-H", "200", "--seed", "5", "--shape", "circle", "--format", "json",
    ]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["seed"], 5);
    assert_eq!(value["shape"], "circle");
    assert_eq!(value["frame"]["circles"].as_array().unwrap().len(), 1);
}

#[test]
fn missing_seed_is_reported() {
    let output = fretwork(&["generate", "-W", "100", "-H", "100"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("seed: "), "stderr: {stderr}");
}

#[test]
fn unknown_family_fails() {
    let output = fretwork(&["generate", "-f", "baroque"]);
    assert!(!output.status.success());
}

#[test]
fn zero_sized_panel_fails() {
    let output = fretwork(&["generate", "-W", "0", "-H", "10", "--seed", "1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("panel"));
}

#[test]
fn yaml_job_with_flag_override() {
    let job = scratch("job.yaml");
    fs::write(
        &job,
        "family: sacred\nwidth: 240\nheight: 240\nseed: 11\nparams:\n  subStyle: metatron\n  layoutMode: tiled\n",
    )
    .unwrap();

    let from_file = fretwork(&["generate", "-c", job.to_str().unwrap(), "--format", "json"]);
    let overridden = fretwork(&["generate", "-c", job.to_str().unwrap(), "-s", "torus", "--format", "json"]);
    fs::remove_file(&job).ok();

    assert!(from_file.status.success(), "stderr: {}", String::from_utf8_lossy(&from_file.stderr));
    let value: serde_json::Value = serde_json::from_slice(&from_file.stdout).unwrap();
    assert_eq!(value["family"], "sacred");
    assert_eq!(value["style"], "metatron");
    assert_eq!(value["params"]["layoutMode"], "tiled");

    let value: serde_json::Value = serde_json::from_slice(&overridden.stdout).unwrap();
    assert_eq!(value["style"], "torus");
    assert_eq!(value["seed"], 11);
}

#[test]
fn preview_writes_png() {
    let path = scratch("preview.png");
    let output = fretwork(&[
        "preview", "-s", "diamond", "-W", "200", "-H", "100", "--seed", "2", "--size", "300", "-o",
        path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let bytes = fs::read(&path).unwrap();
    fs::remove_file(&path).ok();
    assert_eq!(&bytes[1..4], b"PNG");
}

#[test]
fn benchmark_runs_one_family() {
    let output = fretwork(&["benchmark", "-f", "modern", "-n", "1", "-W", "100", "-H", "100"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("basketweave"));
    assert!(!stdout.contains("torus"));
}
