//! End-to-end tests running the `lessonplan` binary.

mod common;

use std::path::Path;
use std::process::{Command, Output};

use common::PlanFixture;
use serde_json::Value;

fn run(dir: &Path, output: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lessonplan"))
        .arg("--dir")
        .arg(dir)
        .arg("--output")
        .arg(output)
        .env_remove("LESSONPLAN_DIR")
        .env_remove("LESSONPLAN_OUTPUT")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run lessonplan")
}

/// Root titled "Intro" with a loadable `lesson1` and a missing `lesson2`.
fn sample_plan() -> PlanFixture {
    let fixture = PlanFixture::new();
    fixture
        .root_index("Intro", &["lesson1", "lesson2"])
        .lesson("lesson1", "Basics")
        .write("lesson1/explanation.md", "Hello");
    fixture
}

mod file_output {
    use super::*;

    #[test]
    fn writes_the_document_to_the_named_file() {
        let fixture = sample_plan();
        let out_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let out = out_dir.path().join("plan.json");

        let result = run(fixture.root(), out.to_str().expect("utf-8 path"));
        assert!(result.status.success());

        let doc: Value =
            serde_json::from_str(&std::fs::read_to_string(&out).expect("No output file"))
                .expect("Output is not JSON");
        assert_eq!(doc["title"], "Intro");
        assert_eq!(doc["entities"].as_array().map(Vec::len), Some(1));
        assert_eq!(doc["entities"][0]["properties"]["explanation"], "Hello");
    }

    #[test]
    fn warns_about_skipped_lessons_without_failing() {
        let fixture = sample_plan();
        let out_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let out = out_dir.path().join("plan.json");

        let result = run(fixture.root(), out.to_str().expect("utf-8 path"));
        assert!(result.status.success());

        let stderr = String::from_utf8_lossy(&result.stderr);
        assert!(stderr.contains("lesson2"), "stderr: {}", stderr);
    }

    #[test]
    fn fails_without_writing_when_root_index_is_missing() {
        let fixture = PlanFixture::new();
        let out_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let out = out_dir.path().join("plan.json");

        let result = run(fixture.root(), out.to_str().expect("utf-8 path"));
        assert!(!result.status.success());
        assert!(!out.exists());

        let stderr = String::from_utf8_lossy(&result.stderr);
        assert!(
            stderr.contains("did not contain a valid index.json"),
            "stderr: {}",
            stderr
        );
    }
}

mod stdout_output {
    use super::*;

    #[test]
    fn prints_the_document_when_output_is_dash() {
        let fixture = sample_plan();

        let result = run(fixture.root(), "-");
        assert!(result.status.success());

        let doc: Value = serde_json::from_slice(&result.stdout).expect("stdout is not JSON");
        assert_eq!(doc["title"], "Intro");
        assert_eq!(doc["entities"][0]["title"], "Basics");
    }

    #[test]
    fn prints_nothing_on_fatal_error() {
        let fixture = PlanFixture::new();
        fixture.write("index.json", "not json");

        let result = run(fixture.root(), "-");
        assert!(!result.status.success());
        assert!(result.stdout.is_empty());
    }
}
