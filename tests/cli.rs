use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn websketch_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("websketch").expect("binary exists");
    // Keep the host's real config out of the test run.
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

const PEN_SCRIPT: &str = r#"[
    { "type": "tool", "tool": "pen" },
    { "type": "down", "x": 10, "y": 10 },
    { "type": "move", "x": 20, "y": 10 },
    { "type": "move", "x": 20, "y": 20 },
    { "type": "up",   "x": 20, "y": 20 }
]"#;

#[test]
fn help_prints_usage() {
    let temp = TempDir::new().unwrap();
    websketch_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Sketch-to-webpage canvas: replay, export, and generate",
        ));
}

#[test]
fn no_flags_prints_usage_summary() {
    let temp = TempDir::new().unwrap();
    websketch_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("websketch: sketch-to-webpage canvas"));
}

#[test]
fn replay_writes_svg_and_png_outputs() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("sketch.json");
    std::fs::write(&script, PEN_SCRIPT).unwrap();
    let svg_out = temp.path().join("out.svg");
    let png_out = temp.path().join("out.png");

    websketch_cmd(&temp)
        .args(["--replay", script.to_str().unwrap()])
        .args(["--svg", svg_out.to_str().unwrap()])
        .args(["--png", png_out.to_str().unwrap()])
        .assert()
        .success();

    let svg = std::fs::read_to_string(&svg_out).unwrap();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains("<path d=\"M 10,10 L 20,10 L 20,20\""));

    let png = std::fs::read(&png_out).unwrap();
    assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
}

#[test]
fn replay_without_outputs_prints_vector_document() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("sketch.json");
    std::fs::write(&script, PEN_SCRIPT).unwrap();

    websketch_cmd(&temp)
        .args(["--replay", script.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("M 10,10 L 20,10 L 20,20"));
}

#[test]
fn replay_rejects_an_invalid_script() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("broken.json");
    std::fs::write(&script, "this is not a script").unwrap();

    websketch_cmd(&temp)
        .args(["--replay", script.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse replay script"));
}

#[test]
fn replay_reports_a_missing_script_file() {
    let temp = TempDir::new().unwrap();

    websketch_cmd(&temp)
        .args(["--replay", "/nonexistent/sketch.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read replay script"));
}

#[test]
fn generate_surfaces_transport_failures_without_writing_outputs() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("sketch.json");
    std::fs::write(&script, PEN_SCRIPT).unwrap();
    let html_out = temp.path().join("page.html");

    // Reserved port: connection is refused immediately, no service runs there.
    websketch_cmd(&temp)
        .args(["--replay", script.to_str().unwrap()])
        .arg("--generate")
        .args(["--endpoint", "http://127.0.0.1:1/"])
        .args(["--html", html_out.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("generation from drawing failed"));

    assert!(!html_out.exists());
}

#[test]
fn print_config_dumps_effective_settings() {
    let temp = TempDir::new().unwrap();
    websketch_cmd(&temp)
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[canvas]"))
        .stdout(predicate::str::contains("base_url"));
}

#[test]
fn config_file_overrides_are_honored() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("websketch");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[canvas]\nwidth = 400\nheight = 300\n",
    )
    .unwrap();

    let script = temp.path().join("sketch.json");
    std::fs::write(&script, PEN_SCRIPT).unwrap();

    websketch_cmd(&temp)
        .args(["--replay", script.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("width=\"400\" height=\"300\""));
}
