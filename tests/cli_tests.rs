use regex::Regex;
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn ergosurg(args: &[&str]) -> Output {
    let output = Command::new(env!("CARGO_BIN_EXE_ergosurg"))
        .args(args)
        .output()
        .expect("Failed to execute binary");
    assert!(
        output.status.success(),
        "ergosurg {:?} failed:\n{}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn metrics_json(args: &[&str]) -> serde_json::Value {
    let out = ergosurg(args);
    serde_json::from_slice(&out.stdout).expect("stdout was not JSON")
}

#[test]
fn test_evaluate_json_matches_reference_tool() {
    let m = metrics_json(&["evaluate", "--json"]);
    assert_eq!(m["comfort"], 28.0);
    assert_eq!(m["precision"], 82.0);
    assert_eq!(m["stability"], 39.0);
}

#[test]
fn test_evaluate_flags_override_preset() {
    let m = metrics_json(&[
        "evaluate",
        "--json",
        "--preset",
        "laparoscopic_grasper",
        "--diameter",
        "30",
        "--hand",
        "m",
    ]);
    assert_eq!(m["comfort"], 100.0);
}

#[test]
fn test_evaluate_table_output() {
    let out = stdout(&ergosurg(&["evaluate", "--material", "silicone"]));
    assert!(out.contains("Silicone Overmold"));
    let score_row = Regex::new(r"\|\s*default\s*\|\s*\d+\.\d").unwrap();
    assert!(score_row.is_match(&out), "no score row in:\n{}", out);
}

#[test]
fn test_weights_file_and_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("weights.json");
    fs::write(&path, r#"{ "comfort_base": 90.0 }"#).unwrap();
    let path = path.to_str().unwrap();

    let from_file = metrics_json(&["evaluate", "--json", "--weights", path]);
    assert_eq!(from_file["comfort"], 18.0);

    let overridden = metrics_json(&["evaluate", "--json", "--weights", path, "--comfort-base", "100"]);
    assert_eq!(overridden["comfort"], 28.0);
}

#[test]
fn test_bad_weights_file_fails() {
    let out = Command::new(env!("CARGO_BIN_EXE_ergosurg"))
        .args(["evaluate", "--weights", "/definitely/not/here.json"])
        .output()
        .unwrap();
    assert!(!out.status.success());
}

fn ergosurg_fails(args: &[&str]) -> String {
    let out = Command::new(env!("CARGO_BIN_EXE_ergosurg"))
        .args(args)
        .output()
        .expect("Failed to execute binary");
    assert!(!out.status.success(), "ergosurg {:?} unexpectedly succeeded", args);
    String::from_utf8_lossy(&out.stderr).to_string()
}

#[test]
fn test_zero_force_divisor_flag_rejected() {
    ergosurg_fails(&["evaluate", "--json", "--stability-force-divisor", "0", "--force", "0"]);
}

#[test]
fn test_inverted_curve_band_flags_rejected() {
    ergosurg_fails(&[
        "evaluate",
        "--neutral-curve-min",
        "20",
        "--neutral-curve-max",
        "10",
    ]);
}

#[test]
fn test_flags_cannot_break_a_valid_weights_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("weights.json");
    fs::write(&path, r#"{ "comfort_base": 90.0 }"#).unwrap();
    ergosurg_fails(&[
        "evaluate",
        "--weights",
        path.to_str().unwrap(),
        "--stability-force-divisor",
        "0",
    ]);
}

#[test]
fn test_non_finite_tool_values_rejected() {
    let err = ergosurg_fails(&["evaluate", "--json", "--diameter", "NaN"]);
    assert!(err.contains("not a finite number"), "stderr was:\n{}", err);
    ergosurg_fails(&["evaluate", "--force", "inf"]);
}

#[test]
fn test_solve_reports_material() {
    let out = stdout(&ergosurg(&[
        "solve",
        "--strategy",
        "precision",
        "--solver-tick-ms",
        "0",
    ]));
    assert!(out.contains("FINAL RESULT"));
    assert!(out.contains("Material set to Stainless Steel 316L"));
    assert!(out.contains("Steps: 25"));
}

#[test]
fn test_audit_lists_presets() {
    let out = stdout(&ergosurg(&["audit", "--with-solver"]));
    assert!(out.contains("laparoscopic_grasper"));
    assert!(out.contains("default +balanced"));
    assert!(out.contains("forceps_pro_x"));
}

#[test]
fn test_sweep_writes_csv() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sweep.csv");
    ergosurg(&[
        "sweep",
        "--param",
        "force",
        "--steps",
        "5",
        "--output",
        path.to_str().unwrap(),
    ]);

    let csv = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "value,comfort,precision,stability,pressure,score");
    assert!(lines[1].starts_with("10.0,"));
    assert!(lines[5].starts_with("100.0,"));
}

#[test]
fn test_render_writes_svgs() {
    let dir = TempDir::new().unwrap();
    let handle = dir.path().join("handle.svg");
    let radar = dir.path().join("radar.svg");
    ergosurg(&[
        "render",
        "--output",
        handle.to_str().unwrap(),
        "--radar",
        radar.to_str().unwrap(),
        "--baseline",
        "laparoscopic_grasper",
    ]);

    let handle_svg = fs::read_to_string(&handle).unwrap();
    assert!(handle_svg.starts_with("<svg"));
    assert!(handle_svg.contains("stroke-dasharray"));
    assert!(fs::read_to_string(&radar).unwrap().contains("<polygon"));
    // Default tool sits near 22 kPa
    assert!(!handle_svg.contains(r#"class="sensor""#));
}

#[test]
fn test_render_marks_high_pressure() {
    let dir = TempDir::new().unwrap();
    let handle = dir.path().join("handle.svg");
    ergosurg(&[
        "render",
        "--diameter",
        "5",
        "--length",
        "80",
        "--force",
        "100",
        "--output",
        handle.to_str().unwrap(),
    ]);
    let svg = fs::read_to_string(&handle).unwrap();
    assert_eq!(svg.matches(r#"class="sensor""#).count(), 2);
}

#[test]
fn test_report_reference_is_seeded() {
    let re = Regex::new(r"REF: (\d{5})").unwrap();
    let a = stdout(&ergosurg(&["report", "--seed", "7"]));
    let b = stdout(&ergosurg(&["report", "--seed", "7"]));

    let ref_a = re.captures(&a).expect("no REF line")[1].to_string();
    let ref_b = re.captures(&b).expect("no REF line")[1].to_string();
    assert_eq!(ref_a, ref_b);
    assert!(a.contains("Friction Coefficient"));
}
