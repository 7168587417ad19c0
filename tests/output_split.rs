// tests/output_split.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, files2md_cmd};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_split_names_start_at_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path().join("proj");
    create_file(&root, "a.txt", "aaa\n")?;
    let out = temp.path().join("doc.md");

    files2md_cmd()
        .arg(&root)
        .arg("-o")
        .arg(&out)
        .arg("-p")
        .arg("64")
        .assert()
        .success();

    // The base name itself is never written; file #1 holds the header.
    assert!(!out.exists());
    let first = fs::read_to_string(temp.path().join("doc-1.md"))?;
    assert!(first.starts_with("# Project: proj\n"));
    assert!(first.contains("## File listing:"));
    assert!(!first.contains("### proj/a.txt"));

    let second = fs::read_to_string(temp.path().join("doc-2.md"))?;
    assert!(second.contains("### proj/a.txt"));
    Ok(())
}

#[test]
fn test_sections_never_split_across_files() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path().join("proj");
    // Each file is ~2 KB, well past a 1 KB threshold on its own.
    for name in ["a.txt", "b.txt", "c.txt"] {
        let body: String = (0..100).map(|i| format!("{name} line {i}\n")).collect();
        create_file(&root, name, &body)?;
    }
    let out = temp.path().join("doc.md");

    files2md_cmd()
        .arg(&root)
        .arg("-o")
        .arg(&out)
        .arg("-p")
        .arg("1")
        .assert()
        .success();

    // Header + one file per section: doc-1 .. doc-4.
    for seq in 1..=4 {
        assert!(temp.path().join(format!("doc-{seq}.md")).exists());
    }
    assert!(!temp.path().join("doc-5.md").exists());
    for name in ["a.txt", "b.txt", "c.txt"] {
        let mut holders = 0;
        for seq in 1..=4 {
            let part = fs::read_to_string(temp.path().join(format!("doc-{seq}.md")))?;
            if part.contains(&format!("### proj/{name}")) {
                holders += 1;
                // The whole section is here: first and last line together.
                assert!(part.contains(&format!("{name} line 0\n")));
                assert!(part.contains(&format!("{name} line 99\n")));
            }
        }
        assert_eq!(holders, 1, "{name} must land in exactly one part");
    }
    Ok(())
}

#[test]
fn test_small_sections_share_a_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path().join("proj");
    create_file(&root, "a.txt", "a\n")?;
    create_file(&root, "b.txt", "b\n")?;
    let out = temp.path().join("doc.md");

    files2md_cmd()
        .arg(&root)
        .arg("-o")
        .arg(&out)
        .arg("-p")
        .arg("512")
        .assert()
        .success();

    // Tiny sections stay together below the threshold.
    let second = fs::read_to_string(temp.path().join("doc-2.md"))?;
    assert!(second.contains("### proj/a.txt"));
    assert!(second.contains("### proj/b.txt"));
    assert!(!temp.path().join("doc-3.md").exists());
    Ok(())
}

#[test]
fn test_split_parts_not_scanned_as_input() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path().join("proj");
    create_file(&root, "a.txt", "content\n")?;
    // Split output lands inside the scanned tree.
    let out = root.join("doc.txt");

    files2md_cmd()
        .arg(&root)
        .arg("-o")
        .arg(&out)
        .arg("-p")
        .arg("1")
        .assert()
        .success();

    let first = fs::read_to_string(root.join("doc-1.txt"))?;
    assert!(!first.contains("`proj/doc-1.txt`"));
    assert!(!first.contains("`proj/doc-2.txt`"));
    Ok(())
}
