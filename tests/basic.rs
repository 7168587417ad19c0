// tests/basic.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, files2md_cmd};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_basic_document_shape() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path().join("proj");
    create_file(&root, "src/main.rs", "fn main() {}\n")?;
    create_file(&root, "README.md", "# Readme\n")?;
    let out = temp.path().join("out.md");

    files2md_cmd()
        .arg(&root)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let doc = fs::read_to_string(&out)?;
    assert!(doc.starts_with("# Project: proj\n(generated by files2md v"));
    assert!(doc.contains("## File listing:\n"));
    assert!(doc.contains("`proj/README.md`\n"));
    assert!(doc.contains("`proj/src/main.rs`\n"));
    assert!(doc.contains("\n### proj/src/main.rs\n```rust\nfn main() {}\n```\n"));
    assert!(doc.contains("\n### proj/README.md\n```markdown\n# Readme\n```\n"));
    Ok(())
}

#[test]
fn test_no_dir_defaults_to_current() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("note.txt"), "hello\n")?;

    files2md_cmd()
        .current_dir(temp.path())
        .arg("-o")
        .arg("doc.md")
        .assert()
        .success();

    let doc = fs::read_to_string(temp.path().join("doc.md"))?;
    assert!(doc.contains("note.txt"));
    assert!(doc.contains("hello"));
    Ok(())
}

#[test]
fn test_sections_in_sorted_order() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path().join("proj");
    create_file(&root, "zeta.txt", "z\n")?;
    create_file(&root, "alpha.txt", "a\n")?;
    create_file(&root, "mid/nested.txt", "m\n")?;
    let out = temp.path().join("out.md");

    files2md_cmd().arg(&root).arg("-o").arg(&out).assert().success();

    let doc = fs::read_to_string(&out)?;
    let a = doc.find("### proj/alpha.txt").unwrap();
    let m = doc.find("### proj/mid/nested.txt").unwrap();
    let z = doc.find("### proj/zeta.txt").unwrap();
    assert!(a < m && m < z);
    Ok(())
}

#[test]
fn test_multiple_roots() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let one = temp.path().join("one");
    let two = temp.path().join("two");
    create_file(&one, "a.txt", "from one\n")?;
    create_file(&two, "b.txt", "from two\n")?;
    let out = temp.path().join("out.md");

    files2md_cmd()
        .arg(&one)
        .arg(&two)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let doc = fs::read_to_string(&out)?;
    assert!(doc.starts_with("# Project: one, two\n"));
    assert!(doc.contains("### one/a.txt"));
    assert!(doc.contains("### two/b.txt"));
    Ok(())
}

#[test]
fn test_summary_printed_at_default_verbosity() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path().join("proj");
    create_file(&root, "a.txt", "content\n")?;
    let out = temp.path().join("out.md");

    files2md_cmd()
        .arg(&root)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("1 files rendered"));
    Ok(())
}

#[test]
fn test_quiet_silences_summary() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path().join("proj");
    create_file(&root, "a.txt", "content\n")?;
    let out = temp.path().join("out.md");

    files2md_cmd()
        .arg(&root)
        .arg("-o")
        .arg(&out)
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}
