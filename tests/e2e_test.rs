/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const FIXTURES: &str = "tests/fixtures/headers";

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("genealogic")
            .args(["Animal", FIXTURES, "-f", "text"])
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("genealogic")
            .arg("--help")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("--single-class"));
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("genealogic").arg("--version").assert().code(0);
    }

    /// Exit code 0: a known class without descendants is only a warning
    #[test]
    fn test_exit_code_no_descendants() {
        cargo_bin_cmd!("genealogic")
            .args(["FlyingDog", FIXTURES, "-f", "text"])
            .assert()
            .code(0)
            .stderr(predicate::str::contains("No classes inherit from 'FlyingDog'"));
    }

    /// Exit code 1: the class takes part in no relationship
    #[test]
    fn test_exit_code_class_not_found() {
        cargo_bin_cmd!("genealogic")
            .args(["Vehicle", FIXTURES, "-f", "text"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "Class 'Vehicle' not found in any inheritance relationship",
            ));
    }

    /// Exit code 1: no header matches the extension
    #[test]
    fn test_exit_code_no_headers() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("README.md"), "# empty").unwrap();

        cargo_bin_cmd!("genealogic")
            .arg("Animal")
            .arg(temp_dir.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("No *.h files found"));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("genealogic")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Missing positional arguments
    #[test]
    fn test_exit_code_missing_directory() {
        cargo_bin_cmd!("genealogic").arg("Animal").assert().code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("genealogic")
            .args(["Animal", FIXTURES, "-f", "bmp"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - non-existent directory
    #[test]
    fn test_exit_code_application_error_nonexistent_path() {
        cargo_bin_cmd!("genealogic")
            .args(["Animal", "/nonexistent/path/that/does/not/exist"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Directory does not exist"));
    }

    /// Exit code 3: Application error - path is a file, not a directory
    #[test]
    fn test_exit_code_application_error_file_not_directory() {
        cargo_bin_cmd!("genealogic")
            .args(["Animal", "tests/fixtures/headers/Animal.h"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Not a directory"));
    }

    /// Exit code 3: Application error - invalid extension
    #[test]
    fn test_exit_code_invalid_extension() {
        cargo_bin_cmd!("genealogic")
            .args(["Animal", FIXTURES, "-e", "."])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid header extension"));
    }
}

mod output_tests {
    use super::*;

    #[test]
    fn test_text_tree_on_stdout() {
        cargo_bin_cmd!("genealogic")
            .args(["Animal", FIXTURES, "-f", "text"])
            .env("NO_COLOR", "1")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Animal\n"))
            .stdout(predicate::str::contains("│   ├── FlyingDog (+ Flyable)"))
            .stdout(predicate::str::contains(
                "└── Feature (+ Flyable, StaticObjectInterface)",
            ))
            .stderr(predicate::str::contains("Found 9 header files"))
            .stderr(predicate::str::contains(
                "Scanned 9 files, found 12 inheritance relationships",
            ))
            .stderr(predicate::str::contains("Inheritance tree: 7 classes"));
    }

    #[test]
    fn test_json_on_stdout() {
        let output = cargo_bin_cmd!("genealogic")
            .args(["Dog", FIXTURES, "-f", "json"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["root"], "Dog");
        assert_eq!(json["stats"]["classes"], 3);
        assert_eq!(json["tree"]["children"][0]["name"], "FlyingDog");
    }

    #[test]
    fn test_dot_written_to_output_directory() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join("diagrams");

        cargo_bin_cmd!("genealogic")
            .args(["Animal", FIXTURES, "-f", "dot", "-o"])
            .arg(&out_dir)
            .assert()
            .success();

        let dot = fs::read_to_string(out_dir.join("Animal_inheritance.dot")).unwrap();
        assert!(dot.starts_with("digraph InheritanceTree {"));
        assert!(dot.contains("\"Dog\" -> \"MultilineChild\";"));
    }

    #[test]
    fn test_mermaid_on_stdout() {
        cargo_bin_cmd!("genealogic")
            .args(["Flyable", FIXTURES, "--format", "mermaid"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("flowchart TD"))
            .stdout(predicate::str::contains("cls_Flyable --> cls_Feature"));
    }

    #[test]
    fn test_custom_extension() {
        cargo_bin_cmd!("genealogic")
            .args(["Widget", FIXTURES, "-e", "hpp", "-f", "text"])
            .env("NO_COLOR", "1")
            .assert()
            .success()
            .stdout(predicate::str::contains("└── Button"))
            .stderr(predicate::str::contains("Extension:   .hpp"));
    }

    #[test]
    fn test_image_without_graphviz_falls_back_to_console() {
        let temp_dir = TempDir::new().unwrap();

        cargo_bin_cmd!("genealogic")
            .args(["Animal", FIXTURES, "--no-open", "-o"])
            .arg(temp_dir.path())
            .env("PATH", "")
            .assert()
            .success()
            .stderr(predicate::str::contains("Graphviz 'dot' not found in PATH"))
            .stderr(predicate::str::contains("Skipping image rendering"))
            .stderr(predicate::str::contains("MultilineChild"));

        assert!(!temp_dir.path().join("Animal_inheritance.svg").exists());
    }

    #[test]
    fn test_single_class_mode() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("Shapes.h"),
            "class Circle : public Shape {};\n\n\nclass Square : public Shape {};\n",
        )
        .unwrap();

        cargo_bin_cmd!("genealogic")
            .arg("Shape")
            .arg(temp_dir.path())
            .args(["-f", "text", "--single-class", "--max-lines", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Circle"))
            .stdout(predicate::str::contains("Square").not());
    }
}

mod config_file_tests {
    use super::*;

    fn project_with_config(config: &str) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Base.hh"), "class Base {};").unwrap();
        fs::write(
            temp_dir.path().join("Derived.hh"),
            "class Derived : public Base {};\nstruct Other : Derived {};",
        )
        .unwrap();
        fs::write(temp_dir.path().join("genealogic.config.yml"), config).unwrap();
        temp_dir
    }

    #[test]
    fn test_config_discovered_in_scanned_directory() {
        let project = project_with_config("extension: hh\nformat: text\n");

        cargo_bin_cmd!("genealogic")
            .arg("Base")
            .arg(project.path())
            .env("NO_COLOR", "1")
            .assert()
            .success()
            .stdout(predicate::str::contains("Base\n└── Derived\n    └── Other"));
    }

    #[test]
    fn test_cli_flag_overrides_config() {
        let project = project_with_config("extension: hh\nformat: text\n");

        cargo_bin_cmd!("genealogic")
            .arg("Base")
            .arg(project.path())
            .args(["-f", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"root\": \"Base\""));
    }

    #[test]
    fn test_explicit_config_path() {
        let project = project_with_config("format: svg\n");
        let other = TempDir::new().unwrap();
        let config_path = other.path().join("custom.yml");
        fs::write(&config_path, "extension: .hh\nformat: mermaid\n").unwrap();

        cargo_bin_cmd!("genealogic")
            .arg("Base")
            .arg(project.path())
            .arg("--config")
            .arg(&config_path)
            .assert()
            .success()
            .stdout(predicate::str::contains("cls_Base --> cls_Derived"));
    }

    #[test]
    fn test_invalid_config_is_application_error() {
        let project = project_with_config("concurrency: 0\n");

        cargo_bin_cmd!("genealogic")
            .arg("Base")
            .arg(project.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("concurrency must be greater than 0"));
    }

    #[test]
    fn test_unknown_config_field_warns() {
        let project = project_with_config("extension: hh\nformat: text\ntheme: light\n");

        cargo_bin_cmd!("genealogic")
            .arg("Base")
            .arg(project.path())
            .assert()
            .success()
            .stderr(predicate::str::contains("Unknown config field 'theme'"));
    }
}
