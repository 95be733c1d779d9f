mod common;

use common::TestContext;
use predicates::prelude::*;
use serde_json::Value;

const FULL_SELECTION: &str = r#"{
  "pose": "waving_hello",
  "orientation": "front_facing",
  "scene": "forest_clearing",
  "lighting": "lighting_001",
  "film_type": "stop_motion",
  "film_stock": "kodak_portra_400",
  "camera": "camera_001",
  "tenner": { "mode": "single", "dimensions": ["T1", "T2"], "choices": { "T1": 0, "T2": 0 } }
}"#;

fn bundle_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout should be bundle JSON")
}

#[test]
fn assemble_prints_bundle_json_in_pipeline_order() {
    let ctx = TestContext::new();
    let selection = ctx.write("selection.json", FULL_SELECTION);

    let output = ctx.cli().arg("assemble").arg(&selection).output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let bundle = bundle_json(&output.stdout);
    let prompt = bundle["prompt"].as_str().unwrap();
    assert!(prompt.starts_with("A plucky red fox in a tiny waistcoat waving hello"));

    let order = [
        "waving hello",
        "facing the camera",
        "forest clearing",
        "Soft key light",
        "in stop motion style",
        "Portra 400",
        "1 meter",
        "a knitted bobble hat",
        "Handcrafted miniature",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|needle| prompt.find(needle).unwrap_or_else(|| panic!("missing '{}' in {}", needle, prompt)))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "out of order: {}", prompt);

    assert!(!prompt.contains("Tenner mode"));
    assert_eq!(bundle["chunk_id"], "CUSTOM_T1_T2");
    assert_eq!(bundle["permutation_count"], 1);
    assert_eq!(bundle["version"], "1.0.0");
    assert_eq!(bundle["metadata"]["tenner"], "Tenner mode: single | Dimensions: T1, T2 | Permutations: 1");
    assert_eq!(bundle["selection"]["tripod_height"], "1");
}

#[test]
fn assemble_is_deterministic_apart_from_timestamp() {
    let ctx = TestContext::new();
    let selection = ctx.write("selection.yaml", "pose: polite_bow\nscene: cozy_kitchen\n");

    let first = bundle_json(&ctx.cli().arg("assemble").arg(&selection).output().unwrap().stdout);
    let second = bundle_json(&ctx.cli().arg("assemble").arg(&selection).output().unwrap().stdout);
    assert_eq!(first["prompt"], second["prompt"]);
    assert_eq!(first["metadata"]["seed"], second["metadata"]["seed"]);
    assert_eq!(first["metadata"]["inputs_checksum"], second["metadata"]["inputs_checksum"]);
}

#[test]
fn assemble_writes_bundle_file() {
    let ctx = TestContext::new();
    let selection = ctx.write("selection.json", FULL_SELECTION);

    ctx.cli()
        .args(["assemble", "selection.json", "--out", "out/bundle.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Wrote bundle CUSTOM_T1_T2_t1_00_t2_00"));
    assert!(selection.exists());
    let bundle: Value = serde_json::from_str(&ctx.read("out/bundle.json")).unwrap();
    assert_eq!(bundle["id"], "CUSTOM_T1_T2_t1_00_t2_00");
}

#[test]
fn incomplete_single_plan_is_reported_not_composed() {
    let ctx = TestContext::new();
    ctx.write("partial.json", r#"{"tenner":{"dimensions":["T6","T7"],"choices":{"T6":1}}}"#);

    ctx.cli()
        .args(["assemble", "partial.json"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("incomplete (missing T7)"));

    let output = ctx.cli().args(["assemble", "partial.json", "--preview"]).output().unwrap();
    assert!(output.status.success());
    let bundle = bundle_json(&output.stdout);
    assert_eq!(bundle["permutation_count"], Value::Null);
    assert_eq!(bundle["metadata"]["complete"], false);
}

#[test]
fn config_can_allow_partial_assembly() {
    let ctx = TestContext::new();
    ctx.write_config("[assemble]\nallow_partial = true\n");
    ctx.write("partial.json", r#"{"tenner":{"dimensions":["T6"]}}"#);
    ctx.cli()
        .args(["assemble", "partial.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"prompt\""));
}

#[test]
fn malformed_config_is_an_error() {
    let ctx = TestContext::new();
    ctx.write_config("[batch]\nmax_permutations = 0\n");
    ctx.write("s.json", "{}");
    ctx.cli().args(["assemble", "s.json"]).assert().failure().stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn invalid_selection_fails_with_error_message() {
    let ctx = TestContext::new();
    ctx.write("bad.json", r#"{"tenner":{"dimensions":["T1","T2","T3","T4"]}}"#);
    ctx.cli()
        .args(["assemble", "bad.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid selection"));

    ctx.write("unknown.json", r#"{"posture":"x"}"#);
    ctx.cli().args(["assemble", "unknown.json"]).assert().failure();
}

#[test]
fn missing_dataset_degrades_but_still_assembles() {
    let ctx = TestContext::new();
    ctx.write("s.json", r#"{"pose":"jumping_joy","tenner":{"dimensions":["T1"],"choices":{"T1":0}}}"#);

    let output = ctx.cli().args(["--dataset", "nowhere.json", "assemble", "s.json"]).output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Tenner dataset unavailable"));
    let bundle = bundle_json(&output.stdout);
    assert!(bundle["prompt"].as_str().unwrap().starts_with("The Anamalia character leaping"));
    assert_eq!(bundle["metadata"]["skipped"][0]["slot"], "tenner_descriptors");
}

#[test]
fn validate_reports_advisories_and_suggestions() {
    let ctx = TestContext::new();
    ctx.write("s.json", r#"{"film_stock":"ilford_hp5_plus","camera":"camera_007"}"#);

    ctx.cli()
        .args(["validate", "s.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tripod height: 0.8 meters (set by camera)"))
        .stdout(predicate::str::contains("warning: ilford_hp5_plus is a black and white stock"))
        .stdout(predicate::str::contains(
            "Compatible camera for ilford_hp5_plus: camera_002, camera_004, camera_006, camera_010",
        ))
        .stdout(predicate::str::contains("Selection has compatibility warnings"));
}

#[test]
fn validate_without_warnings_has_no_warning_summary() {
    let ctx = TestContext::new();
    ctx.write("s.json", r#"{"pose":"waving_hello"}"#);

    ctx.cli()
        .args(["validate", "s.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No advisories"))
        .stdout(predicate::str::contains("compatibility warnings").not());
}

#[test]
fn validate_json_output() {
    let ctx = TestContext::new();
    ctx.write("s.json", r#"{"output":{"width":1024,"height":768,"aspect_ratio":"16:9"}}"#);

    let output = ctx.cli().args(["validate", "s.json", "--json"]).output().unwrap();
    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["inferred_aspect"], "4:3");
    assert_eq!(report["advisories"][0]["severity"], "info");
}

#[test]
fn plan_counts_permutations() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["plan", "--mode", "batch", "T1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Permutations: 10"));
    ctx.cli()
        .args(["plan", "--mode", "batch", "T1", "T2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Permutations: 100"));
    ctx.cli()
        .args(["plan", "--mode", "batch", "T1", "T2", "T3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Permutations: 1000"));
    ctx.cli()
        .args(["plan", "T4=1", "T1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dimensions: T4, T1 | Permutations: incomplete (missing T1)"));
}

#[test]
fn classify_resolves_chunks_order_independently() {
    let ctx = TestContext::new();
    ctx.cli().args(["classify", "T4", "T1", "T2"]).assert().success().stdout("CHUNK1\n");
    ctx.cli().args(["classify", "T5"]).assert().success().stdout("CUSTOM_T5\n");
    ctx.cli().args(["classify", "T10", "T2"]).assert().success().stdout("CUSTOM_T2_T10\n");
    ctx.cli().args(["classify", "T33"]).assert().failure().stderr(predicate::str::contains("T33"));
}

#[test]
fn options_lists_ten_entries() {
    let ctx = TestContext::new();
    let output = ctx.cli().args(["options", "T1"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("T1 (character)"));
    assert_eq!(stdout.lines().filter(|line| line.trim_start().starts_with("t1_")).count(), 10);
    assert!(stdout.contains("t1_00  a plucky red fox in a tiny waistcoat"));

    ctx.cli().args(["options", "T32"]).assert().success().stdout(predicate::str::contains("t32_09  (empty)"));
}

#[test]
fn chunks_lists_catalog() {
    let ctx = TestContext::new();
    let output = ctx.cli().arg("chunks").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 20);
    assert!(stdout.lines().next().unwrap().starts_with("CHUNK1"));
}

#[test]
fn chunks_shows_one_chunk_by_id() {
    let ctx = TestContext::new();
    let output = ctx.cli().args(["chunks", "chunk3"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.starts_with("CHUNK3"));

    ctx.cli()
        .args(["chunks", "CHUNK42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Unknown chunk 'CHUNK42'"));
}

#[test]
fn batch_writes_one_file_per_permutation() {
    let ctx = TestContext::new();
    ctx.write("batch.json", r#"{"pose":"standing_neutral","tenner":{"mode":"batch","dimensions":["T12"]}}"#);

    ctx.cli()
        .args(["batch", "batch.json", "--out-dir", "runs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Wrote 10 bundle(s)"));

    let files = ctx.list("runs");
    assert_eq!(files.len(), 10);
    assert_eq!(files[0], "CHUNK5_00000.json");
    assert_eq!(files[9], "CHUNK5_00009.json");

    let last: Value = serde_json::from_str(&ctx.read("runs/CHUNK5_00009.json")).unwrap();
    assert_eq!(last["selection"]["tenner"]["choices"]["T12"], 9);
    assert_eq!(last["selection"]["tenner"]["mode"], "single");
}

#[test]
fn batch_uses_configured_output_dir_and_limit() {
    let ctx = TestContext::new();
    ctx.write("batch.json", r#"{"tenner":{"mode":"batch","dimensions":["T6","T7"]}}"#);

    ctx.write_config("[batch]\nmax_permutations = 99\n");
    ctx.cli()
        .args(["batch", "batch.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("100 permutations exceeds the configured limit of 99"));

    ctx.write_config("[output]\ndir = \"generated\"\n");
    ctx.cli().args(["batch", "batch.json"]).assert().success();
    assert_eq!(ctx.list("generated").len(), 100);
}

#[test]
fn batch_rejects_single_mode_selection() {
    let ctx = TestContext::new();
    ctx.write("single.json", r#"{"tenner":{"dimensions":["T6"],"choices":{"T6":0}}}"#);
    ctx.cli()
        .args(["batch", "single.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in batch mode"));
}

#[test]
fn export_md_renders_bundle() {
    let ctx = TestContext::new();
    ctx.write("selection.json", FULL_SELECTION);
    ctx.cli().args(["assemble", "selection.json", "--out", "bundle.json"]).assert().success();

    ctx.cli()
        .args(["export-md", "bundle.json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Bundle CUSTOM_T1_T2_t1_00_t2_00"))
        .stdout(predicate::str::contains("## Prompt"))
        .stdout(predicate::str::contains("Tenner mode: single"));

    ctx.cli().args(["export-md", "bundle.json", "--out", "bundle.md"]).assert().success();
    assert!(ctx.read("bundle.md").contains("## Statistics"));
}
