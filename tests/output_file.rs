// tests/output_file.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, files2md_cmd};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_autoname_from_root_names() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path().join("myproj");
    create_file(&root, "a.txt", "content\n")?;

    files2md_cmd()
        .current_dir(temp.path())
        .arg("myproj")
        .arg("-O")
        .assert()
        .success();

    let out = temp.path().join("myproj_md.txt");
    assert!(out.exists());
    assert!(fs::read_to_string(&out)?.starts_with("# Project: myproj"));
    Ok(())
}

#[test]
fn test_autoname_joins_multiple_roots() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(&temp.path().join("one"), "a.txt", "a\n")?;
    create_file(&temp.path().join("two"), "b.txt", "b\n")?;

    files2md_cmd()
        .current_dir(temp.path())
        .arg("one")
        .arg("two")
        .arg("-O")
        .assert()
        .success();

    assert!(temp.path().join("one_two_md.txt").exists());
    Ok(())
}

#[test]
fn test_autoname_custom_extension() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path().join("proj");
    create_file(&root, "a.txt", "content\n")?;

    files2md_cmd()
        .current_dir(temp.path())
        .arg("proj")
        .arg("-O")
        .arg("--output-extension")
        .arg("md")
        .assert()
        .success();

    assert!(temp.path().join("proj_md.md").exists());
    Ok(())
}

#[test]
fn test_explicit_out_file_in_subdir() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path().join("proj");
    create_file(&root, "a.txt", "content\n")?;
    fs::create_dir_all(temp.path().join("dist"))?;
    let out = temp.path().join("dist/doc.md");

    files2md_cmd().arg(&root).arg("-o").arg(&out).assert().success();
    assert!(out.exists());
    Ok(())
}
