//! Binary integration tests.
//!
//! Each test runs `neonmint` inside its own temp directory with a private
//! config home so user configuration cannot leak in.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use neonmint_scaffold::models::Report;

fn neonmint(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_neonmint"))
        .args(args)
        .current_dir(cwd)
        .env("XDG_CONFIG_HOME", cwd.join(".config"))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run neonmint")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

mod init {
    use super::*;

    #[test]
    fn creates_default_root_without_arguments() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

        let output = neonmint(temp_dir.path(), &[]);

        assert!(output.status.success());
        let root = temp_dir.path().join("NeonMint");
        assert!(root.join("src/styles/tailwind.css").is_file());
        assert!(root.join("public/images/projects").is_dir());

        let out = stdout(&output);
        assert!(out.contains("Created directory: NeonMint"));
        assert!(out.contains("Created file: package.json"));
        assert!(out.contains("Project structure creation completed (tailwind)"));
    }

    #[test]
    fn second_run_skips_everything() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        assert!(neonmint(temp_dir.path(), &["init"]).status.success());
        fs::write(temp_dir.path().join("NeonMint/README.md"), "mine").unwrap();

        let output = neonmint(temp_dir.path(), &["init"]);

        assert!(output.status.success());
        let out = stdout(&output);
        assert!(out.contains("Directory already exists: NeonMint"));
        assert!(out.contains("File already exists, skipping: README.md"));
        assert!(!out.contains("Created "));
        assert!(out.contains(": 0 created,"));
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("NeonMint/README.md")).unwrap(),
            "mine"
        );
    }

    #[test]
    fn honours_root_and_preset() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

        let output = neonmint(
            temp_dir.path(),
            &["init", "--root", "site", "--preset", "classic"],
        );

        assert!(output.status.success());
        assert!(temp_dir.path().join("site/src/styles/global.css").is_file());
        assert!(!temp_dir.path().join("site/src/styles/tailwind.css").exists());
        assert!(!temp_dir.path().join("NeonMint").exists());
    }

    #[test]
    fn dry_run_writes_nothing() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

        let output = neonmint(temp_dir.path(), &["init", "--dry-run"]);

        assert!(output.status.success());
        assert!(stdout(&output).contains("Would create file: package.json"));
        assert!(!temp_dir.path().join("NeonMint").exists());
    }

    #[test]
    fn prints_json_report() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

        let output = neonmint(temp_dir.path(), &["init", "--json"]);

        assert!(output.status.success());
        let report: Report = serde_json::from_slice(&output.stdout).expect("Invalid JSON report");
        assert_eq!(report.already_existed(), 0);
        assert!(report.created() > 0);
    }

    #[test]
    fn runs_a_manifest_file() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(
            temp_dir.path().join("manifest.json"),
            r#"[{"path": "src", "kind": "directory"}, {"path": "src/a.txt", "kind": "file", "content": "hello"}]"#,
        )
        .unwrap();

        let output = neonmint(temp_dir.path(), &["init", "--manifest", "manifest.json"]);

        assert!(output.status.success());
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("NeonMint/src/a.txt")).unwrap(),
            "hello"
        );
    }

    #[test]
    fn fails_with_nonzero_exit_and_keeps_earlier_entries() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(
            temp_dir.path().join("manifest.json"),
            r#"[
                {"path": "first.txt", "kind": "file", "content": "one"},
                {"path": "blocker", "kind": "file"},
                {"path": "blocker/nested", "kind": "directory"},
                {"path": "last.txt", "kind": "file"}
            ]"#,
        )
        .unwrap();

        let output = neonmint(temp_dir.path(), &["init", "--manifest", "manifest.json"]);

        assert!(!output.status.success());
        assert!(stdout(&output).contains("Created file: first.txt"));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Scaffold aborted at blocker/nested"));
        assert!(temp_dir.path().join("NeonMint/first.txt").is_file());
        assert!(!temp_dir.path().join("NeonMint/last.txt").exists());
    }

    #[test]
    fn dry_run_reports_the_same_failure_without_writing() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(
            temp_dir.path().join("manifest.json"),
            r#"[
                {"path": "blocker", "kind": "file"},
                {"path": "blocker/x", "kind": "file"}
            ]"#,
        )
        .unwrap();

        let output = neonmint(
            temp_dir.path(),
            &["init", "--manifest", "manifest.json", "--dry-run"],
        );

        assert!(!output.status.success());
        assert!(stdout(&output).contains("Would create file: blocker"));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Scaffold aborted at blocker/x"));
        assert!(!temp_dir.path().join("NeonMint").exists());
    }

    #[test]
    fn rejects_preset_with_manifest() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

        let output = neonmint(
            temp_dir.path(),
            &["init", "--preset", "classic", "--manifest", "m.json"],
        );

        assert!(!output.status.success());
    }
}

mod presets {
    use super::*;

    #[test]
    fn lists_every_preset() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

        let output = neonmint(temp_dir.path(), &["presets"]);

        assert!(output.status.success());
        let out = stdout(&output);
        assert!(out.contains("tailwind"));
        assert!(out.contains("classic"));
    }
}

mod export {
    use super::*;
    use neonmint_scaffold::models::Manifest;
    use neonmint_scaffold::presets::Preset;

    #[test]
    fn prints_the_preset_manifest() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

        let output = neonmint(temp_dir.path(), &["export", "--preset", "classic"]);

        assert!(output.status.success());
        let manifest = Manifest::from_json(&stdout(&output)).expect("Invalid manifest JSON");
        assert_eq!(manifest, Preset::Classic.manifest().unwrap());
    }
}
