//! # FrcGen CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! This module provides shared utility functions used across the integration
//! test files (`new.rs`, `list.rs`, `main_tests.rs`). Integration tests live
//! in `cli/tests/`; each `.rs` file there (that isn't a module like this one)
//! is compiled as a separate test crate driving the real `frcgen` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// Creates an `assert_cmd::Command` pointing at the compiled `frcgen`
/// binary for the current test run.
pub fn frcgen_cmd() -> Command {
    Command::cargo_bin("frcgen").expect("Failed to find frcgen binary for testing")
}

/// The preferences file as WPILib distributes it, with the -1 sentinel.
pub const PREFERENCES_JSON: &str = "{\n  \"enableCppIntellisense\": false,\n  \"currentLanguage\": \"java\",\n  \"projectYear\": \"2025\",\n  \"teamNumber\": -1\n}\n";

fn create_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    fs::write(path, content).expect("Failed to write fixture file");
}

/// Builds a minimal but complete WPILib resource library under `root`,
/// containing one template ("simple") with no unit tests, one build variant
/// ("java"), and the standard vendor manifests.
pub fn fixture_library(root: &Path) {
    create_file(
        &root.join("java/src/templates/simple/Main.java"),
        "package edu.wpi.first.wpilibj.templates.simple;\n\npublic final class Main {}\n",
    );
    create_file(
        &root.join("java/src/templates/templates.json"),
        r#"[
            {
                "name": "Simple",
                "description": "A simple robot program",
                "tags": ["simple"],
                "foldername": "simple",
                "gradlebase": "java",
                "mainclass": "Main"
            }
        ]"#,
    );
    create_file(
        &root.join("build/java/build.gradle"),
        "plugins { id \"edu.wpi.first.GradleRIO\" version \"###GRADLERIOREPLACE###\" }\ndef ROBOT_MAIN_CLASS = \"###ROBOTCLASSREPLACE###\"\n",
    );
    create_file(&root.join("build/java/bin/cached.class"), "junk");
    create_file(&root.join("build/shared/gradlew"), "#!/bin/sh\n");
    create_file(&root.join("build/shared/gradlew.bat"), "@rem windows\n");
    create_file(
        &root.join("build/shared/.wpilib/wpilib_preferences.json"),
        PREFERENCES_JSON,
    );
    create_file(&root.join("build/version.txt"), "2025.3.2\n");
    create_file(&root.join("vendordeps/WPILibNewCommands.json"), "{}");
    create_file(&root.join("vendordeps/RomiVendordep.json"), "{}");
    create_file(&root.join("vendordeps/XRPVendordep.json"), "{}");
}
