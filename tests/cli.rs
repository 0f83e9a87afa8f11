use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn fileplot() -> Command {
    Command::cargo_bin("fileplot").unwrap()
}

fn write_input(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn assert_png(path: &Path) {
    let bytes = fs::read(path).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "{} is not a PNG", path.display());
}

#[test]
fn scatter_writes_labelled_png() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "pairs.txt", "1,0 2,0\n3,0 4,0\n");
    let out_dir = dir.path().join("pics");

    fileplot()
        .arg("--scatter")
        .arg(&input)
        .arg("run1")
        .arg("--output-dir")
        .arg(&out_dir)
        .args(["--width", "300", "--height", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plot saved to"));

    let png = out_dir.join("run1.png");
    assert_png(&png);
}

#[test]
fn scatter_label_defaults_to_file_stem() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "pairs.txt", "0 0\n1 1\n");
    let out_dir = dir.path().join("out");

    fileplot()
        .args(["-s", "-o"])
        .arg(&out_dir)
        .arg(&input)
        .assert()
        .success();

    assert_png(&out_dir.join("pairs.png"));
}

#[test]
fn line_plot_can_be_saved_instead_of_shown() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "values.txt", "1,5 2.0 3\n4 2 1\n");
    let png = dir.path().join("nested").join("line.png");

    fileplot()
        .arg(&input)
        .arg("--save")
        .arg(&png)
        .assert()
        .success();

    assert_png(&png);
}

#[test]
fn html_export_embeds_data() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "values.txt", "1,5 2.0 3");
    let html = dir.path().join("values.html");

    fileplot()
        .arg(&input)
        .arg("--html")
        .arg(&html)
        .args(["--title", "My values"])
        .assert()
        .success();

    let page = fs::read_to_string(&html).unwrap();
    assert!(page.contains("My values"));
    assert!(page.contains("[[0.0,1.5],[1.0,2.0],[2.0,3.0]]"));
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    fileplot()
        .arg(dir.path().join("absent.txt"))
        .arg("--html")
        .arg(dir.path().join("absent.html"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read input file"));

    assert!(!dir.path().join("absent.html").exists());
}

#[test]
fn invalid_token_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "values.txt", "1 abc 3");

    fileplot()
        .arg(&input)
        .arg("--save")
        .arg(dir.path().join("never.png"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid number 'abc' at position 2"));

    assert!(!dir.path().join("never.png").exists());
}

#[test]
fn short_scatter_line_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "pairs.txt", "1 2\n3\n");

    fileplot()
        .arg("-s")
        .arg(&input)
        .arg("-o")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Line 2 has 1 value(s)"));
}

#[test]
fn prompts_for_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "values.txt", "3 1 2");
    let png = dir.path().join("prompted.png");

    fileplot()
        .arg("--save")
        .arg(&png)
        .write_stdin(format!("{}\n", input.display()))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Enter file path: "));

    assert_png(&png);
}

#[test]
fn empty_prompt_answer_plots_nothing() {
    fileplot()
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter file path: "));
}

#[test]
fn oversized_image_is_rejected() {
    fileplot()
        .args(["-s", "pairs.txt", "--width", "70000"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--width"));
}

#[test]
fn unplottable_span_fails_without_hanging() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "span.txt", "-1e308 0\n1e308 1\n");

    fileplot()
        .arg("-s")
        .arg(&input)
        .arg("-o")
        .arg(dir.path())
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("more than a chart axis can represent"));
}

#[test]
fn failed_png_leaves_no_html() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "pairs.txt", "1 2\n3 4\n");
    let html = dir.path().join("pairs.html");

    // A regular file where the output directory should go
    fileplot()
        .arg("-s")
        .arg(&input)
        .arg("-o")
        .arg(input.join("pics"))
        .arg("--html")
        .arg(&html)
        .assert()
        .code(1);

    assert!(!html.exists());
}

#[test]
fn label_requires_scatter() {
    fileplot().args(["values.txt", "run1"]).assert().code(2);
}
