// tests/content_processing.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, files2md_cmd};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_binary_file_placeholder() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path().join("proj");
    fs::create_dir_all(&root)?;
    // No extension: the MIME gate passes and the byte sample decides.
    fs::write(root.join("blob"), [0u8, 1, 2, 3, 0, 255])?;
    create_file(&root, "ok.txt", "text\n")?;
    let out = temp.path().join("out.md");

    files2md_cmd().arg(&root).arg("-o").arg(&out).assert().success();

    let doc = fs::read_to_string(&out)?;
    assert!(doc.contains("### proj/blob\n(likely a binary file)\n"));
    assert!(doc.contains("### proj/ok.txt"));
    Ok(())
}

#[test]
fn test_image_skipped_by_mime_type() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path().join("proj");
    create_file(&root, "logo.png", "not really a png\n")?;
    let out = temp.path().join("out.md");

    files2md_cmd()
        .arg(&root)
        .arg("-o")
        .arg(&out)
        .arg("-D")
        .assert()
        .success();

    let doc = fs::read_to_string(&out)?;
    assert!(doc.contains("### proj/logo.png\n(skipped due to MIME type `image/png`)\n"));
    Ok(())
}

#[test]
fn test_empty_files_excluded_unless_requested() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path().join("proj");
    create_file(&root, "blank.txt", " \n\t\n")?;
    create_file(&root, "full.txt", "content\n")?;
    let out = temp.path().join("out.md");

    files2md_cmd().arg(&root).arg("-o").arg(&out).assert().success();
    let doc = fs::read_to_string(&out)?;
    assert!(!doc.contains("### proj/blank.txt"));
    assert!(doc.contains("### proj/full.txt"));

    files2md_cmd()
        .arg(&root)
        .arg("-o")
        .arg(&out)
        .arg("-f")
        .arg("--include-empty")
        .assert()
        .success();
    let doc = fs::read_to_string(&out)?;
    assert!(doc.contains("### proj/blank.txt"));
    Ok(())
}

#[test]
fn test_substitution_rules_applied() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path().join("proj");
    create_file(&root, "conf.ini", "token=s3cr3t\nhost=localhost\n")?;
    let rules = temp.path().join("rules.tsv");
    fs::write(&rules, "# redact credentials\ns3cr3t\tREDACTED\n")?;
    let out = temp.path().join("out.md");

    files2md_cmd()
        .arg(&root)
        .arg("-o")
        .arg(&out)
        .arg("-s")
        .arg(&rules)
        .assert()
        .success();

    let doc = fs::read_to_string(&out)?;
    assert!(doc.contains("token=REDACTED"));
    assert!(!doc.contains("s3cr3t"));
    assert!(doc.contains("host=localhost"));
    Ok(())
}

#[test]
fn test_previous_output_not_rerendered() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path().join("proj");
    create_file(&root, "a.txt", "content\n")?;
    // First run writes the document into the scanned tree itself.
    let first = root.join("first_run.txt");
    files2md_cmd().arg(&root).arg("-o").arg(&first).assert().success();

    // The second run sees first_run.txt but must exclude it: it carries the
    // generator marker.
    let second = temp.path().join("second.md");
    files2md_cmd().arg(&root).arg("-o").arg(&second).assert().success();

    let doc = fs::read_to_string(&second)?;
    assert!(doc.contains("### proj/a.txt"));
    assert!(!doc.contains("### proj/first_run.txt"));
    Ok(())
}

#[test]
fn test_rerun_is_byte_identical() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path().join("proj");
    create_file(&root, "a.txt", "alpha\n")?;
    create_file(&root, "b.rs", "fn b() {}\n")?;
    // The output lives inside the scanned tree.
    let out = root.join("doc.txt");

    files2md_cmd().arg(&root).arg("-o").arg(&out).assert().success();
    let first = fs::read(&out)?;

    // The rerun sees its own previous output but must produce identical
    // bytes: the output path is skipped as a self-reference.
    files2md_cmd()
        .arg(&root)
        .arg("-o")
        .arg(&out)
        .arg("-f")
        .assert()
        .success();
    let second = fs::read(&out)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_utf16_file_decodes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path().join("proj");
    fs::create_dir_all(&root)?;
    let mut bytes = vec![0xFF, 0xFE]; // UTF-16LE BOM
    for unit in "wide text\n".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(root.join("wide.txt"), &bytes)?;
    let out = temp.path().join("out.md");

    files2md_cmd().arg(&root).arg("-o").arg(&out).assert().success();

    let doc = fs::read_to_string(&out)?;
    assert!(doc.contains("wide text\n"));
    assert!(!doc.contains('\u{feff}'));
    Ok(())
}

#[test]
fn test_backtick_content_gets_longer_fence() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path().join("proj");
    create_file(&root, "snippet.md", "below:\n```rust\nfn f() {}\n```\n")?;
    let out = temp.path().join("out.md");

    files2md_cmd().arg(&root).arg("-o").arg(&out).assert().success();

    let doc = fs::read_to_string(&out)?;
    // The wrapping fence must be longer than the embedded three-tick run.
    assert!(doc.contains("````markdown\n"));
    assert!(doc.contains("\n````\n"));
    Ok(())
}
