use std::process::Command;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Binary with an isolated config: no user config file, no env overrides.
fn cargo_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_repo-persona"));
    cmd.args(["--config", "tests/fixtures/no-such-config.toml"])
        .env_remove("REPO_PERSONA_THRESHOLD")
        .env_remove("REPO_PERSONA_INACTIVE_YEARS")
        .env_remove("REPO_PERSONA_WORKSPACE");
    cmd
}

fn json_stdout(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("invalid JSON")
}

#[test]
fn doctor_returns_json() {
    let output = cargo_bin().arg("doctor").output().expect("failed to run");
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["version"], PKG_VERSION);
    assert_eq!(json["categories"], 220);
    assert_eq!(json["legacy_templates"], 10);
    assert_eq!(json["healthy"], true);
    assert_eq!(json["groups"].as_array().unwrap().len(), 20);
}

#[test]
fn profile_from_bundle() {
    let output = cargo_bin()
        .args(["profile", "--input", "tests/fixtures/octo.json"])
        .output()
        .expect("failed to run");
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["login"], "octo");
    assert_eq!(json["fingerprint"].as_str().unwrap().len(), 64);

    let personas = json["personas"].as_array().unwrap();
    assert_eq!(personas[0]["persona_id"], "rust");
    assert_eq!(personas[0]["confidence"], 1.0);
    assert_eq!(personas[0]["sort_order"], 0);
    let confidences: Vec<f64> = personas
        .iter()
        .map(|p| p["confidence"].as_f64().unwrap())
        .collect();
    assert!(confidences.windows(2).all(|w| w[0] >= w[1]));
    assert!(confidences.iter().all(|c| *c >= 0.45));

    // Fork and archived repos never become projects
    let projects = json["projects"].as_array().unwrap();
    assert_eq!(projects[0]["name"], "engine");
    assert!(projects.iter().all(|p| p["name"] != "linux" && p["name"] != "old-site"));

    let interests = json["interests"].as_array().unwrap();
    assert!(interests.iter().any(|c| c["category_id"] == "rust"));

    let radar = json["radar"].as_array().unwrap();
    assert!(!radar.is_empty() && radar.len() <= 8);

    let aggregates = json["aggregates"].as_array().unwrap();
    let rust = aggregates
        .iter()
        .find(|a| a["type"] == "language" && a["item"] == "Rust")
        .expect("Rust language row");
    assert_eq!(rust["from_owned"], 3);
    assert_eq!(rust["from_starred"], 2);
}

#[test]
fn profile_is_deterministic() {
    let run = || {
        cargo_bin()
            .args(["profile", "--input", "tests/fixtures/octo.json"])
            .output()
            .expect("failed to run")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn profile_threshold_override() {
    let output = cargo_bin()
        .args([
            "profile",
            "--input",
            "tests/fixtures/octo.json",
            "--threshold",
            "100",
        ])
        .output()
        .expect("failed to run");
    assert!(output.status.success());

    let json = json_stdout(&output);
    let personas = json["personas"].as_array().unwrap();
    assert!(!personas.is_empty());
    assert!(personas.iter().all(|p| p["confidence"] == 1.0));
}

#[test]
fn profile_empty_account() {
    let output = cargo_bin()
        .args(["profile", "--input", "tests/fixtures/empty.json"])
        .output()
        .expect("failed to run");
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["login"], "ghost");
    for key in ["personas", "projects", "radar", "interests", "aggregates"] {
        assert!(json[key].as_array().unwrap().is_empty(), "{key} not empty");
    }
}

#[test]
fn profile_from_split_inputs() {
    let output = cargo_bin()
        .args(["profile", "--owned", "tests/fixtures/owned.json", "--as-of", "2026-05-01"])
        .output()
        .expect("failed to run");
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["personas"][0]["persona_id"], "go");
    assert_eq!(json["projects"].as_array().unwrap().len(), 2);
}

#[test]
fn profile_file_not_found() {
    let output = cargo_bin()
        .args(["profile", "--input", "nonexistent.json"])
        .output()
        .expect("failed to run");
    assert!(!output.status.success());

    // Error should be JSON on stdout
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("error should be JSON");
    assert_eq!(json["error"]["code"], "FILE_NOT_FOUND");
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("nonexistent.json")
    );
}

#[test]
fn profile_bad_as_of() {
    let output = cargo_bin()
        .args([
            "profile",
            "--input",
            "tests/fixtures/octo.json",
            "--as-of",
            "yesterday",
        ])
        .output()
        .expect("failed to run");
    assert!(!output.status.success());
    assert_eq!(json_stdout(&output)["error"]["code"], "INVALID_INPUT");
}

#[test]
fn profile_requires_an_input() {
    let output = cargo_bin().arg("profile").output().expect("failed to run");
    assert!(!output.status.success());
    assert_eq!(json_stdout(&output)["error"]["code"], "INVALID_REQUEST");
}

#[test]
fn score_repo_file() {
    let output = cargo_bin()
        .args(["score", "--repo", "tests/fixtures/repo.json"])
        .output()
        .expect("failed to run");
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["repo"], "octo/engine");
    let matches = json["matches"].as_array().unwrap();
    assert_eq!(matches[0]["category_id"], "rust");
    assert!(matches.iter().all(|m| m["evidence"] == true));
}

#[test]
fn taxonomy_group_filter() {
    let output = cargo_bin()
        .args(["taxonomy", "--group", "language"])
        .output()
        .expect("failed to run");
    assert!(output.status.success());

    let json = json_stdout(&output);
    let cats = json.as_array().unwrap();
    assert!(!cats.is_empty());
    assert!(cats.iter().all(|c| c["group"] == "language"));
    assert!(cats.iter().any(|c| c["id"] == "rust"));
}

#[test]
fn taxonomy_unknown_group() {
    let output = cargo_bin()
        .args(["taxonomy", "--group", "astrology"])
        .output()
        .expect("failed to run");
    assert!(!output.status.success());
    assert_eq!(json_stdout(&output)["error"]["code"], "INVALID_REQUEST");
}

#[test]
fn batch_paths_ndjson_in_order() {
    let output = cargo_bin()
        .args([
            "batch",
            "--paths",
            "tests/fixtures/octo.json,missing.json,tests/fixtures/empty.json",
        ])
        .output()
        .expect("failed to run");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["login"], "octo");
    assert_eq!(lines[1]["error"]["code"], "FILE_NOT_FOUND");
    assert_eq!(lines[2]["login"], "ghost");
}

#[test]
fn batch_dir_scan() {
    let dir = tempfile::TempDir::new().unwrap();
    for name in ["octo.json", "empty.json"] {
        std::fs::copy(format!("tests/fixtures/{name}"), dir.path().join(name)).unwrap();
    }
    std::fs::write(dir.path().join("README.md"), "not a bundle").unwrap();

    let output = cargo_bin()
        .args(["batch", "--dir", dir.path().to_str().unwrap()])
        .output()
        .expect("failed to run");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let logins: Vec<String> = stdout
        .lines()
        .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap()["login"].to_string())
        .collect();
    // Sorted by path: empty.json before octo.json
    assert_eq!(logins, vec!["\"ghost\"", "\"octo\""]);
}

#[test]
fn session_ndjson() {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = cargo_bin()
        .arg("session")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn session");

    let stdin = child.stdin.as_mut().unwrap();
    writeln!(
        stdin,
        r#"{{"command":"profile","path":"tests/fixtures/octo.json"}}"#
    )
    .unwrap();
    writeln!(
        stdin,
        r#"{{"command":"score","repo":{{"full_name":"a/b","language":"Go","topics":["golang"]}}}}"#
    )
    .unwrap();
    writeln!(stdin, r#"{{"command":"doctor"}}"#).unwrap();
    writeln!(stdin, "this is not json").unwrap();
    drop(child.stdin.take());

    let output = child.wait_with_output().expect("failed to wait");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .trim()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 4, "Should have 4 NDJSON lines");

    assert_eq!(lines[0]["personas"][0]["persona_id"], "rust");
    assert_eq!(lines[1]["matches"][0]["category_id"], "go");
    assert_eq!(lines[2]["categories"], 220);
    assert_eq!(lines[3]["error"]["code"], "INVALID_REQUEST");
}

#[test]
fn session_inline_bundle() {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = cargo_bin()
        .arg("session")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn session");

    let stdin = child.stdin.as_mut().unwrap();
    writeln!(
        stdin,
        r#"{{"command":"profile","as_of":"2026-01-01","input":{{"profile":{{"login":"inline"}},"owned":[{{"full_name":"i/x","language":"Rust","topics":["rust"]}}],"starred":[]}}}}"#
    )
    .unwrap();
    drop(child.stdin.take());

    let output = child.wait_with_output().expect("failed to wait");
    let line: serde_json::Value =
        serde_json::from_str(String::from_utf8(output.stdout).unwrap().trim()).unwrap();
    assert_eq!(line["login"], "inline");
    assert_eq!(line["personas"][0]["persona_id"], "rust");
}

#[test]
fn init_writes_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let output = cargo_bin()
        .args(["init", "--path", path.to_str().unwrap()])
        .output()
        .expect("failed to run");
    assert!(output.status.success());

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("persona_threshold = 45"));
}

#[test]
fn config_threshold_is_applied() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "persona_threshold = 100\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_repo-persona"))
        .args(["--config", path.to_str().unwrap()])
        .args(["profile", "--input", "tests/fixtures/octo.json"])
        .env_remove("REPO_PERSONA_THRESHOLD")
        .output()
        .expect("failed to run");
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert!(
        json["personas"]
            .as_array()
            .unwrap()
            .iter()
            .all(|p| p["confidence"] == 1.0)
    );
}
