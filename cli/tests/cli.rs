use assert_cmd::Command;
use predicates::str::{contains, diff};
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("qrkit").unwrap()
}

#[test]
fn wifi_payload() {
    cmd()
        .args(["--payload-only", "wifi", "--ssid", "Home Net", "--password", "p@ss;1", "--security", "WPA2"])
        .assert()
        .success()
        .stdout("WIFI:T:WPA;S:Home%20Net;P:p%40ss%3B1;;\n");
}

#[test]
fn open_wifi_hidden_after_subcommand() {
    cmd()
        .args(["wifi", "--ssid", "cafe", "--password", "ignored", "--security", "nopass", "--hidden", "--payload-only"])
        .assert()
        .success()
        .stdout("WIFI:T:nopass;S:cafe;H:true;;\n");
}

#[test]
fn email_payload() {
    cmd()
        .args(["--payload-only", "email", "--to", "a@b.com", "--subject", "Hi"])
        .assert()
        .success()
        .stdout("mailto:a@b.com?subject=Hi\n");
}

#[test]
fn sms_payload() {
    cmd()
        .args(["--payload-only", "sms", "--number", "555"])
        .assert()
        .success()
        .stdout("smsto:555\n");
}

#[test]
fn vcard_payload() {
    cmd()
        .args(["--payload-only", "vcard", "--first-name", "Jan"])
        .assert()
        .success()
        .stdout("BEGIN:VCARD\nVERSION:3.0\nFN:Jan \nEND:VCARD\n");
}

#[test]
fn url_gets_scheme() {
    cmd()
        .args(["--payload-only", "url", "example.com"])
        .assert()
        .success()
        .stdout("http://example.com\n");
}

#[test]
fn text_from_stdin() {
    cmd()
        .args(["--payload-only", "text", "-"])
        .write_stdin("  from stdin \n")
        .assert()
        .success()
        .stdout("from stdin\n");
}

#[test]
fn blank_input_exits_with_2() {
    cmd()
        .args(["url", "   "])
        .assert()
        .code(2)
        .stderr(contains("no data to encode"));
}

#[test]
fn terminal_preview_by_default() {
    cmd()
        .args(["text", "hello"])
        .assert()
        .success()
        .stdout(contains("█"))
        .stdout(contains("37x37 modules"));
}

#[test]
fn writes_svg() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("qr.svg");

    cmd()
        .args(["--style", "dot", "--svg"])
        .arg(&path)
        .args(["text", "hello"])
        .assert()
        .success();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"370\""));
    assert!(svg.contains("<circle"));
}

#[test]
fn writes_png() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("qr.png");

    cmd()
        .args(["--style", "rounded", "--fg", "#4a6fa5", "--png"])
        .arg(&path)
        .args(["url", "https://example.com"])
        .assert()
        .success();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn missing_logo_still_writes_png() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("qr.png");

    cmd()
        .arg("--png")
        .arg(&path)
        .args(["--logo", "/nonexistent/logo.png", "text", "hello"])
        .assert()
        .success()
        .stderr(contains("saved without logo"));

    assert!(path.exists());
}

#[test]
fn json_vector_document() {
    let output = cmd().args(["--json", "--module-size", "5", "text", "hi"]).output().unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["width"], 185);
    assert_eq!(doc["shapes"][0]["kind"], "rect");
    assert_eq!(doc["shapes"][0]["width"], 185);
}

#[test]
fn config_file_with_override() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("style.json");
    std::fs::write(&config, r#"{"module_size": 20, "style": "dot"}"#).unwrap();

    let output = cmd()
        .arg("--config")
        .arg(&config)
        .args(["--module-size", "8", "--json", "text", "hi"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["width"], 37 * 8);
    assert_eq!(doc["shapes"][1]["kind"], "circle");
}

#[test]
fn module_size_out_of_range() {
    cmd()
        .args(["--module-size", "3", "text", "hello"])
        .assert()
        .failure()
        .stderr(contains("out of range"));
}

#[test]
fn bad_color_rejected() {
    cmd()
        .args(["--fg", "not-a-color", "text", "hello"])
        .assert()
        .failure()
        .stderr(contains("invalid color"));
}

#[test]
fn long_text_truncated_before_encoding() {
    let long = "x".repeat(3000);
    cmd()
        .args(["--ec", "H", "--json", "text"])
        .arg(&long)
        .assert()
        .success();

    cmd()
        .args(["--payload-only", "text"])
        .arg(&long)
        .assert()
        .success()
        .stdout(diff(format!("{}\n", "x".repeat(500))));
}

#[test]
fn styles_listed() {
    cmd()
        .arg("styles")
        .assert()
        .success()
        .stdout(contains("gapped-square"))
        .stdout(contains("horizontal-bars"));
}
