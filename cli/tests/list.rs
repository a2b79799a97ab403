//! # FrcGen CLI List and Info Integration Tests
//!
//! File: cli/tests/list.rs
//!
//! ## Overview
//!
//! Integration tests for `frcgen list` and `frcgen info` against a fixture
//! resource library.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_list_shows_templates() {
    let library = tempdir().unwrap();
    let workspace = tempdir().unwrap();
    fixture_library(library.path());

    frcgen_cmd()
        .current_dir(workspace.path())
        .args(["list", "--resources", library.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Available templates")
                .and(predicate::str::contains("simple"))
                .and(predicate::str::contains("A simple robot program"))
                .and(predicate::str::contains("Found 1 template(s)")),
        );
}

#[test]
fn test_list_examples_fails_without_example_catalog() {
    // The fixture library ships templates only.
    let library = tempdir().unwrap();
    let workspace = tempdir().unwrap();
    fixture_library(library.path());

    frcgen_cmd()
        .current_dir(workspace.path())
        .args([
            "list",
            "--examples",
            "--resources",
            library.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("examples.json"));
}

#[test]
fn test_info_shows_blueprint_details() {
    let library = tempdir().unwrap();
    let workspace = tempdir().unwrap();
    fixture_library(library.path());

    frcgen_cmd()
        .current_dir(workspace.path())
        .args(["info", "simple", "--resources", library.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Simple (template)")
                .and(predicate::str::contains("A simple robot program"))
                .and(predicate::str::contains("frcgen new --template simple")),
        );
}

#[test]
fn test_info_unknown_blueprint_fails() {
    let library = tempdir().unwrap();
    let workspace = tempdir().unwrap();
    fixture_library(library.path());

    frcgen_cmd()
        .current_dir(workspace.path())
        .args([
            "info",
            "swervebot",
            "--resources",
            library.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Blueprint 'swervebot' not found"));
}
