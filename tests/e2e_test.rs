/// End-to-end tests for the CLI
///
/// The npm executable is replaced with a shell script that prints a fixture
/// report, so these tests run without network access or a real npm.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Test project directory with a fake npm next to it
struct TestProject {
    dir: TempDir,
}

impl TestProject {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"name": "demo"}"#).unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Installs a fake npm that records its arguments, prints `stdout_fixture` and exits with `exit_code`
    #[cfg(unix)]
    fn fake_npm(&self, stdout_fixture: Option<&str>, exit_code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script_path = self.path().join("fake-npm.sh");
        let print = match stdout_fixture {
            Some(name) => format!("cat '{}'", fixture(name).display()),
            None => ":".to_string(),
        };
        let script = format!(
            "#!/bin/sh\necho \"$@\" > '{}'\n{}\nexit {}\n",
            self.args_file().display(),
            print,
            exit_code
        );
        fs::write(&script_path, script).unwrap();
        fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755)).unwrap();
        script_path
    }

    /// Installs a fake npm that prints `stderr_line` to stderr only and exits with `exit_code`
    #[cfg(unix)]
    fn failing_npm(&self, stderr_line: &str, exit_code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script_path = self.path().join("failing-npm.sh");
        let script = format!(
            "#!/bin/sh\necho '{}' >&2\nexit {}\n",
            stderr_line, exit_code
        );
        fs::write(&script_path, script).unwrap();
        fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755)).unwrap();
        script_path
    }

    fn args_file(&self) -> PathBuf {
        self.path().join("npm-args.txt")
    }

    fn recorded_args(&self) -> String {
        fs::read_to_string(self.args_file()).unwrap().trim().to_string()
    }

    fn write_config(&self, content: &str) {
        fs::write(self.path().join("npm-audit-report.config.yml"), content).unwrap();
    }
}

// ============================================================================
// Argument handling
// ============================================================================

mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("npm-audit-report")
            .arg("--help")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("--audit-level"));
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("npm-audit-report")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 1: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("npm-audit-report")
            .arg("--invalid-option")
            .assert()
            .code(1);
    }

    /// Exit code 1: Invalid ignore ID
    #[test]
    fn test_exit_code_invalid_ignore_id() {
        cargo_bin_cmd!("npm-audit-report")
            .args(["--ignore", "12,abc"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid advisory ID to ignore"));
    }

    /// Exit code 1: Invalid severity threshold prints usage
    #[test]
    fn test_exit_code_invalid_audit_level() {
        let project = TestProject::new();
        cargo_bin_cmd!("npm-audit-report")
            .args(["-p", project.path().to_str().unwrap(), "-l", "severe"])
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Invalid severity threshold: 'severe'"))
            .stderr(predicate::str::contains("Usage:"));
    }

    /// Exit code 1: non-existent project path
    #[test]
    fn test_exit_code_nonexistent_path() {
        cargo_bin_cmd!("npm-audit-report")
            .args(["-p", "/nonexistent/path/that/does/not/exist"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Directory does not exist"));
    }

    /// Exit code 1: path is a file, not a directory
    #[test]
    fn test_exit_code_file_not_directory() {
        cargo_bin_cmd!("npm-audit-report")
            .args(["-p", "Cargo.toml"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Not a directory"));
    }

    /// Exit code 1: npm cannot be started
    #[test]
    fn test_exit_code_missing_npm() {
        let project = TestProject::new();
        cargo_bin_cmd!("npm-audit-report")
            .args([
                "-p",
                project.path().to_str().unwrap(),
                "--npm",
                "/nonexistent/bin/npm",
            ])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to run"));
    }
}

// ============================================================================
// Full runs against a fake npm
// ============================================================================

#[cfg(unix)]
mod fake_npm_tests {
    use super::*;

    fn run(project: &TestProject, npm: &Path, extra: &[&str]) -> assert_cmd::assert::Assert {
        let mut cmd = cargo_bin_cmd!("npm-audit-report");
        cmd.args([
            "-p",
            project.path().to_str().unwrap(),
            "--npm",
            npm.to_str().unwrap(),
        ])
        .args(extra);
        cmd.assert()
    }

    #[test]
    fn test_no_advisories_exits_zero() {
        let project = TestProject::new();
        let npm = project.fake_npm(Some("clean-report.json"), 0);

        run(&project, &npm, &[])
            .code(0)
            .stdout(predicate::str::contains("NPM Audit Security Report"))
            .stdout(predicate::str::contains("Advisories: 0"));
    }

    #[test]
    fn test_empty_output_exits_zero() {
        let project = TestProject::new();
        let npm = project.fake_npm(None, 0);

        run(&project, &npm, &["-l", "critical"])
            .code(0)
            .stdout(predicate::str::contains("Advisories: 0"));
        assert_eq!(project.recorded_args(), "audit --json --audit-level=critical");
    }

    #[test]
    fn test_npm_failure_without_output_exits_one() {
        let project = TestProject::new();
        let npm = project.failing_npm("npm ERR! code ENOTFOUND", 1);

        run(&project, &npm, &[])
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("without printing a report"))
            .stderr(predicate::str::contains("npm ERR! code ENOTFOUND"));
    }

    #[test]
    fn test_ignoring_v2_root_advisory_exits_zero() {
        let project = TestProject::new();
        let npm = project.fake_npm(Some("v2-report.json"), 1);

        run(&project, &npm, &["-i", "1179"])
            .code(0)
            .stdout(predicate::str::contains("Advisories: 0"))
            .stdout(predicate::str::contains("Ignored:    2"));
    }

    #[test]
    fn test_legacy_report_exits_one() {
        let project = TestProject::new();
        let npm = project.fake_npm(Some("legacy-report.json"), 1);

        run(&project, &npm, &[])
            .code(1)
            .stdout(predicate::str::contains("Advisories: 2"))
            .stdout(predicate::str::contains("HIGH: 1 - Prototype Pollution Protection Bypass"));
    }

    #[test]
    fn test_ignored_advisory_is_left_out() {
        let project = TestProject::new();
        let npm = project.fake_npm(Some("legacy-report.json"), 1);

        run(&project, &npm, &["-i", "2"])
            .code(1)
            .stdout(predicate::str::contains("Advisories: 1"))
            .stdout(predicate::str::contains("Ignored:    1"))
            .stdout(predicate::str::contains("LOW: 2").not());
    }

    #[test]
    fn test_all_advisories_ignored_exits_zero() {
        let project = TestProject::new();
        let npm = project.fake_npm(Some("legacy-report.json"), 1);

        run(&project, &npm, &["-i", "1,2"])
            .code(0)
            .stdout(predicate::str::contains("Advisories: 0"))
            .stdout(predicate::str::contains("Ignored:    2"));
    }

    #[test]
    fn test_xml_output() {
        let project = TestProject::new();
        let npm = project.fake_npm(Some("v2-report.json"), 1);

        run(&project, &npm, &["--xml"])
            .code(1)
            .stdout(predicate::str::starts_with("<?xml"))
            .stdout(predicate::str::contains(
                "<testcase name=\"CRITICAL: 1179 - Prototype Pollution in minimist\"",
            ))
            .stdout(predicate::str::contains("type=\"CRITICAL\""));
    }

    #[test]
    fn test_flags_are_passed_to_npm() {
        let project = TestProject::new();
        let npm = project.fake_npm(Some("clean-report.json"), 0);

        run(&project, &npm, &["--production", "--audit-level", "HIGH"]).code(0);
        assert_eq!(
            project.recorded_args(),
            "audit --json --production --audit-level=high"
        );
    }

    #[test]
    fn test_unparseable_output_exits_one() {
        let project = TestProject::new();
        let npm = project.fake_npm(Some("../../Cargo.toml"), 1);

        run(&project, &npm, &[])
            .code(1)
            .stderr(predicate::str::contains("Failed to parse npm audit output"))
            .stderr(predicate::str::contains("[package]"));
    }

    #[test]
    fn test_output_file() {
        let project = TestProject::new();
        let npm = project.fake_npm(Some("legacy-report.json"), 1);
        let output = project.path().join("audit.xml");

        run(&project, &npm, &["-x", "-o", output.to_str().unwrap()])
            .code(1)
            .stdout(predicate::str::is_empty());

        let xml = fs::read_to_string(&output).unwrap();
        assert!(xml.contains("<testsuites name=\"npm-audit-report"));
        assert!(xml.contains("type=\"HIGH\""));
    }

    #[test]
    fn test_quiet_suppresses_progress() {
        let project = TestProject::new();
        let npm = project.fake_npm(Some("clean-report.json"), 0);

        run(&project, &npm, &["-q"])
            .code(0)
            .stderr(predicate::str::contains("Auditing dependencies").not());
    }

    #[test]
    fn test_unmatched_ignore_id_warns() {
        let project = TestProject::new();
        let npm = project.fake_npm(Some("legacy-report.json"), 1);

        run(&project, &npm, &["-q", "-i", "999"])
            .code(1)
            .stderr(predicate::str::contains(
                "Ignored advisory 999 was not found in the audit report",
            ));
    }

    // ------------------------------------------------------------------------
    // Config file
    // ------------------------------------------------------------------------

    #[test]
    fn test_config_file_is_discovered() {
        let project = TestProject::new();
        let npm = project.fake_npm(Some("legacy-report.json"), 1);
        project.write_config(
            r#"
xml: true
production: true
ignore_advisories:
  - id: 1
    reason: "not reachable"
"#,
        );

        run(&project, &npm, &["-i", "2"])
            .code(0)
            .stderr(predicate::str::contains("Advisory 1 ignored: not reachable"))
            .stdout(predicate::str::contains("<testsuites"))
            .stdout(predicate::str::contains("<property name=\"ignored\" value=\"2\"/>"));
        assert_eq!(project.recorded_args(), "audit --json --production");
    }

    #[test]
    fn test_cli_audit_level_overrides_config() {
        let project = TestProject::new();
        let npm = project.fake_npm(Some("clean-report.json"), 0);
        project.write_config("audit_level: low\n");

        run(&project, &npm, &["-l", "moderate"]).code(0);
        assert_eq!(project.recorded_args(), "audit --json --audit-level=moderate");
    }

    #[test]
    fn test_explicit_config_path() {
        let project = TestProject::new();
        let npm = project.fake_npm(Some("legacy-report.json"), 1);
        let config_path = project.path().join("custom.yml");
        fs::write(&config_path, "ignore_advisories:\n  - id: 1\n  - id: 2\n").unwrap();

        run(&project, &npm, &["-c", config_path.to_str().unwrap()])
            .code(0)
            .stdout(predicate::str::contains("Advisories: 0"));
    }

    #[test]
    fn test_invalid_config_exits_one() {
        let project = TestProject::new();
        let npm = project.fake_npm(Some("clean-report.json"), 0);
        project.write_config("audit_level: severe\n");

        run(&project, &npm, &[])
            .code(1)
            .stderr(predicate::str::contains("Invalid config file"));
    }

    #[test]
    fn test_unknown_config_field_warns() {
        let project = TestProject::new();
        let npm = project.fake_npm(Some("clean-report.json"), 0);
        project.write_config("format: json\n");

        run(&project, &npm, &[])
            .code(0)
            .stderr(predicate::str::contains(
                "Unknown config field 'format' will be ignored",
            ));
    }
}
