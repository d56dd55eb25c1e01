//! End-to-end pipeline tests: author, take, analyze, export, import.
//!
//! These exercise the full flow through the real binary against a real
//! JSON data directory, including the cascade and round-trip invariants.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizmith(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quizmith").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

const MIXED_QUIZ: &str = r#"{
    "id": "mixed-1",
    "title": "Mixed Types",
    "questions": [
        {
            "id": "q-mc",
            "text": "Pick the even number.",
            "type": "multiple-choice",
            "answers": [
                {"id": "a-2", "text": "2", "is_correct": true, "points": 2},
                {"id": "a-3", "text": "3"}
            ]
        },
        {
            "id": "q-cb",
            "text": "Select all primes.",
            "type": "checkbox",
            "answers": [
                {"id": "a-p2", "text": "2", "is_correct": true, "points": 2},
                {"id": "a-p3", "text": "3", "is_correct": true, "points": 3},
                {"id": "a-p4", "text": "4"}
            ]
        },
        {
            "id": "q-open",
            "text": "Capital of France?",
            "type": "open-ended",
            "points": 4,
            "correct_answer": "Paris"
        },
        {
            "id": "q-sat",
            "text": "Rate this quiz.",
            "type": "satisfaction",
            "answers": [
                {"id": "a-good", "text": "Good"},
                {"id": "a-bad", "text": "Bad"}
            ]
        }
    ]
}"#;

// q-mc right (2), q-cb partial {A only} (2 of 5), q-open wrong, survey answered.
const PARTIAL_ANSWERS: &str = r#"{
    "selected": {
        "q-mc": ["a-2"],
        "q-cb": ["a-p2"],
        "q-sat": ["a-good"]
    },
    "text_answers": {"q-open": "Paris, France"}
}"#;

// Everything right: 2 + 5 + 4 = 11 of 11.
const PERFECT_ANSWERS: &str = r#"{
    "selected": {
        "q-mc": ["a-2"],
        "q-cb": ["a-p2", "a-p3"],
        "q-sat": ["a-bad"]
    },
    "text_answers": {"q-open": "  paris "}
}"#;

fn setup(dir: &TempDir) {
    quizmith(dir).arg("init").assert().success();
    std::fs::write(dir.path().join("quiz.json"), MIXED_QUIZ).unwrap();
    quizmith(dir)
        .arg("add")
        .arg("--file")
        .arg(dir.path().join("quiz.json"))
        .assert()
        .success();
}

fn take(dir: &TempDir, answers: &str, name: &str) -> assert_cmd::assert::Assert {
    let answers_path = dir.path().join(format!("{name}.json"));
    std::fs::write(&answers_path, answers).unwrap();
    quizmith(dir)
        .arg("take")
        .arg("mixed-1")
        .arg("--answers")
        .arg(&answers_path)
        .arg("--name")
        .arg(name)
        .arg("--instructor")
        .arg("Hopper")
        .assert()
}

#[test]
fn scoring_pipeline_totals_match_policy() {
    let dir = TempDir::new().unwrap();
    setup(&dir);

    // 2 + 2 + 0 + 0 of 11.
    take(&dir, PARTIAL_ANSWERS, "Partial")
        .success()
        .stdout(predicate::str::contains("4/11 (36.4%)"))
        .stdout(predicate::str::contains("FAIL"));

    take(&dir, PERFECT_ANSWERS, "Perfect")
        .success()
        .stdout(predicate::str::contains("11/11 (100.0%)"))
        .stdout(predicate::str::contains("PASS"));

    quizmith(&dir)
        .arg("stats")
        .arg("mixed-1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Attempts: 2"))
        .stdout(predicate::str::contains("Best: 100.0%"))
        .stdout(predicate::str::contains("Pass rate: 50.0%"));
}

#[test]
fn export_import_roundtrip_reproduces_store() {
    let dir = TempDir::new().unwrap();
    setup(&dir);
    take(&dir, PERFECT_ANSWERS, "Ada").success();

    let bundle_path = dir.path().join("bundle.json");
    quizmith(&dir)
        .arg("export")
        .arg("--output")
        .arg(&bundle_path)
        .assert()
        .success();

    let exported = std::fs::read_to_string(&bundle_path).unwrap();

    // Import into a fresh store directory.
    let fresh = TempDir::new().unwrap();
    let fresh_bundle = fresh.path().join("bundle.json");
    std::fs::write(&fresh_bundle, &exported).unwrap();
    quizmith(&fresh).arg("init").assert().success();
    quizmith(&fresh)
        .arg("import")
        .arg("--file")
        .arg(&fresh_bundle)
        .arg("--force")
        .assert()
        .success();

    // Re-export and compare byte-for-byte: ids, points, and dates survive.
    let second_bundle = fresh.path().join("bundle2.json");
    quizmith(&fresh)
        .arg("export")
        .arg("--output")
        .arg(&second_bundle)
        .assert()
        .success();
    let reimported = std::fs::read_to_string(&second_bundle).unwrap();
    assert_eq!(exported, reimported);

    quizmith(&fresh)
        .arg("results")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada"));
}

#[test]
fn delete_quiz_cascades_to_results() {
    let dir = TempDir::new().unwrap();
    setup(&dir);
    take(&dir, PERFECT_ANSWERS, "Ada").success();
    take(&dir, PARTIAL_ANSWERS, "Grace").success();

    quizmith(&dir)
        .arg("delete")
        .arg("--quiz")
        .arg("mixed-1")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 associated result(s)"));

    quizmith(&dir)
        .arg("results")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 result(s)"));

    quizmith(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mixed Types").not());
}

#[test]
fn reports_render_csv_and_html() {
    let dir = TempDir::new().unwrap();
    setup(&dir);
    take(&dir, PERFECT_ANSWERS, "Ada").success();

    let csv_path = dir.path().join("out.csv");
    quizmith(&dir)
        .arg("report")
        .arg("mixed-1")
        .arg("--format")
        .arg("csv")
        .arg("--output")
        .arg(&csv_path)
        .assert()
        .success();
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("result_id,participant"));
    assert!(csv.contains("Ada"));
    assert!(csv.contains("100.0"));

    let html_path = dir.path().join("out.html");
    quizmith(&dir)
        .arg("report")
        .arg("mixed-1")
        .arg("--format")
        .arg("html")
        .arg("--output")
        .arg(&html_path)
        .assert()
        .success();
    let html = std::fs::read_to_string(&html_path).unwrap();
    assert!(html.contains("Mixed Types"));
    assert!(html.contains("Certificate of Completion"));
    assert!(html.contains("Ada"));
}

#[test]
fn corrupt_store_surfaces_parse_error() {
    let dir = TempDir::new().unwrap();
    quizmith(&dir).arg("init").assert().success();

    std::fs::write(dir.path().join("quizmith-data/quizzes.json"), "{ nope").unwrap();

    quizmith(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed stored data"));
}
