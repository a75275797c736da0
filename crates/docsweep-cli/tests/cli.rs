use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn setup_project() -> TempDir {
    let dir = tempdir().unwrap();
    write(dir.path(), ".gitignore", "build\n/dist\n");
    write(dir.path(), "src/a.ts", "/** Hello */\nexport const a = 1;\n");
    write(dir.path(), "src/plain.ts", "export const b = 2;\n");
    write(dir.path(), "build/b.ts", "/** From build */\n");
    write(dir.path(), "dist/c.ts", "/** From dist */\n");
    dir
}

fn docsweep() -> Command {
    Command::cargo_bin("docsweep").unwrap()
}

#[test]
fn test_generates_document() {
    let dir = setup_project();
    let output = dir.path().join("docs.md");

    docsweep()
        .arg("--root")
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .args(["--extensions", ".ts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Documentation generated in"))
        .stdout(predicate::str::contains("Found 1 doc comments in 1 files"))
        .stdout(predicate::str::contains("Total files processed: 2"));

    let doc = fs::read_to_string(&output).unwrap();
    assert!(doc.starts_with("# Project Documentation\n\n## "));
    assert!(doc.contains("a.ts\n\n```\nHello\n```\n\n"));
    assert!(!doc.contains("From build"));
    assert!(!doc.contains("From dist"));
}

#[test]
fn test_verbose_lists_matched_files() {
    let dir = setup_project();
    let output = dir.path().join("docs.md");

    docsweep()
        .arg("-r")
        .arg(dir.path())
        .arg("-o")
        .arg(&output)
        .args(["-e", "ts", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scanning for files in"))
        .stdout(predicate::str::contains("Automatically excluding: node_modules"))
        .stdout(predicate::str::is_match(r"Found 1 comments in .*a\.ts").unwrap());
}

#[test]
fn test_verbose_logs_stay_per_file() {
    let dir = setup_project();
    write(dir.path(), "src/many.ts", "/** one */\n/** two */\n/** three */\n");
    let output = dir.path().join("docs.md");

    docsweep()
        .arg("--root")
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .args(["--extensions", ".ts", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 comments in"))
        .stderr(predicate::str::contains("comment at bytes").not());
}

#[test]
fn test_unsupported_format_writes_nothing() {
    let dir = setup_project();
    let output = dir.path().join("docs.html");

    docsweep()
        .arg("--root")
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .args(["--format", "html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported output format 'html'"));

    assert!(!output.exists());
}

#[test]
fn test_config_file_is_picked_up_from_root() {
    let dir = setup_project();
    write(dir.path(), "lib/util.mjs", "// * Utility notes\n");
    write(dir.path(), "docsweep.json", r#"{ "extensions": [".mjs"] }"#);
    let output = dir.path().join("docs.md");

    docsweep()
        .arg("--root")
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let doc = fs::read_to_string(&output).unwrap();
    assert!(doc.contains("```\nUtility notes\n```"));
    assert!(!doc.contains("Hello"));
}

#[test]
fn test_init_then_run() {
    let dir = setup_project();

    docsweep()
        .arg("init")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("docsweep.json"));

    assert!(dir.path().join("docsweep.json").exists());

    docsweep()
        .current_dir(dir.path())
        .assert()
        .success();

    let doc = fs::read_to_string(dir.path().join("documentation.md")).unwrap();
    assert!(doc.contains("Hello"));
}
