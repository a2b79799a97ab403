//! # FrcGen Project Generation
//!
//! File: cli/src/core/generator.rs
//!
//! ## Overview
//!
//! This module implements the generation orchestrator: the fixed sequence of
//! steps that turns one resolved blueprint plus the user's parameters into a
//! complete robot project on disk.
//!
//! ## Architecture
//!
//! `generate` runs nine steps in order, with no branching other than the
//! unit-tests flag:
//! 1. Copy the blueprint's main code tree into the project's main-source
//!    location, rewriting package declarations on the way.
//! 2. If the blueprint has unit tests, copy the matching test tree the same
//!    way into the test-source location.
//! 3. Copy the blueprint's build-scaffold variant into the project root.
//! 4. Copy the shared build scaffold into the project root. The two scaffold
//!    trees are disjoint by library contract; if they ever overlap, the later
//!    copy wins.
//! 5. Mark the Gradle wrapper script executable.
//! 6. Patch `build.gradle`, substituting the GradleRIO version and the main
//!    class reference for their placeholders.
//! 7. Create the deploy directory stub.
//! 8. Resolve and copy the vendor dependency manifests.
//! 9. Patch the team number into the WPILib preferences file.
//!
//! Every step is fatal on failure and nothing is retried. Already-written
//! output is not cleaned up when a later step fails, so an aborted run can
//! leave a partial project behind; callers are expected to hand the engine an
//! empty destination.
//!
use crate::common::fs::copy::{self, CopyAction};
use crate::common::fs::patch::{self, Substitution};
use crate::common::fs::{io, paths, perms};
use crate::core::catalog::BlueprintDescriptor;
use crate::core::error::{FrcgenError, Result};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Package path used when the user does not choose one.
pub const DEFAULT_PACKAGE: &str = "frc.robot";

/// Sentinel team number meaning "not configured yet".
///
/// This matches the sentinel WPILib ships in `wpilib_preferences.json`, so an
/// unset team number leaves the file as distributed.
pub const TEAM_NUMBER_UNSET: i32 = -1;

/// Package declarations in library source trees live under this namespace
/// pattern; the final segment is the blueprint's own folder name.
const LIBRARY_PACKAGE_PATTERN: &str =
    r"edu\.wpi\.first\.wpilibj\.(?:examples|templates)\.[^.;]+";

/// Placeholder tokens in the scaffold's `build.gradle`.
const MAIN_CLASS_PLACEHOLDER: &str = "###ROBOTCLASSREPLACE###";
const GRADLERIO_PLACEHOLDER: &str = "###GRADLERIOREPLACE###";

/// End-of-line team number sentinel. The guard on the preceding character
/// keeps a sentinel that is itself preceded by a digit or dash (e.g. a line
/// ending in "-1-1") from being rewritten.
const TEAM_NUMBER_PATTERN: &str = r"(^|[^-\d])-1$";

const DEPLOY_DIR_README: &str = "\
Files placed in this directory will be deployed to the RoboRIO into the
'deploy' directory in the home folder. Use the 'Filesystem.getDeployDirectory' wpilib function
to get a proper path relative to the deploy directory.
";

/// Immutable input to one generation run.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Root of the resource library generation draws from.
    pub resources: PathBuf,
    /// Destination project directory, expected empty or absent.
    pub destination: PathBuf,
    /// The resolved blueprint to generate.
    pub blueprint: BlueprintDescriptor,
    /// Team number, or `TEAM_NUMBER_UNSET`.
    pub team_number: i32,
    /// Dot-separated package path for the generated sources.
    pub package: String,
}

/// Generates one project from a resolved blueprint.
pub fn generate(request: &GenerationRequest) -> Result<()> {
    let blueprint = &request.blueprint;
    info!(
        "Generating {} '{}' into {}",
        blueprint.kind.label(),
        blueprint.name,
        request.destination.display()
    );

    let package_dirs = paths::package_to_path(&request.package);
    let package_substitutions = [Substitution::new(
        LIBRARY_PACKAGE_PATTERN,
        request.package.clone(),
    )?];

    // 1. Main code tree, package declarations rewritten during the copy.
    let code_source = paths::resolve(
        &request.resources,
        ["java", "src", blueprint.kind.code_dir(), blueprint.name.as_str()],
    );
    let code_dest =
        paths::resolve(&request.destination, ["src", "main", "java"]).join(&package_dirs);
    copy::copy_tree(
        &code_source,
        &code_dest,
        code_tree_action,
        &package_substitutions,
    )
    .context("Copying the main code tree")?;

    // 2. Unit-test tree, only when the blueprint ships one.
    if blueprint.has_unit_tests {
        let test_source = paths::resolve(
            &request.resources,
            ["java", "src", blueprint.kind.test_dir(), blueprint.name.as_str()],
        );
        let test_dest =
            paths::resolve(&request.destination, ["src", "test", "java"]).join(&package_dirs);
        copy::copy_tree(
            &test_source,
            &test_dest,
            code_tree_action,
            &package_substitutions,
        )
        .context("Copying the unit-test tree")?;
    }

    // 3. Variant-specific build scaffold.
    let variant_scaffold =
        paths::resolve(&request.resources, ["build", blueprint.build_base.as_str()]);
    copy::copy_tree(
        &variant_scaffold,
        &request.destination,
        scaffold_action,
        &[],
    )
    .context("Copying the build scaffold")?;

    // 4. Shared build scaffold.
    let shared_scaffold = paths::resolve(&request.resources, ["build", "shared"]);
    copy::copy_tree(&shared_scaffold, &request.destination, scaffold_action, &[])
        .context("Copying the shared build scaffold")?;

    // 5. Wrapper script execute bit.
    perms::make_executable(&request.destination.join("gradlew"))
        .context("Marking the Gradle wrapper executable")?;

    // 6. build.gradle placeholder substitution.
    let version = read_gradle_version(&request.resources)?;
    let build_gradle = request.destination.join("build.gradle");
    let build_substitutions = [
        Substitution::literal(GRADLERIO_PLACEHOLDER, &version),
        Substitution::literal(
            MAIN_CLASS_PLACEHOLDER,
            &format!("{}.Main", request.package),
        ),
    ];
    patch::patch_file(&build_gradle, &build_gradle, &build_substitutions)
        .context("Patching build.gradle")?;

    // 7. Deploy directory stub.
    create_deploy_directory(&paths::resolve(
        &request.destination,
        ["src", "main", "deploy"],
    ))?;

    // 8. Vendor dependency manifests.
    let manifests = crate::core::vendordeps::resolve_vendordep_files(&blueprint.extra_vendordeps)?;
    crate::core::vendordeps::copy_vendordep_files(
        &request.resources.join("vendordeps"),
        &request.destination.join("vendordeps"),
        &manifests,
    )
    .context("Copying vendor dependency manifests")?;

    // 9. Team number.
    set_team_number(
        &paths::resolve(&request.destination, [".wpilib", "wpilib_preferences.json"]),
        request.team_number,
    )
    .context("Setting the team number")?;

    info!("Project generation complete");
    Ok(())
}

/// Classification for blueprint code trees: source and build-script files
/// are patched, everything else is copied verbatim, nothing is pruned.
fn code_tree_action(relative: &Path, is_dir: bool) -> CopyAction {
    if is_dir {
        return CopyAction::Verbatim;
    }
    let name = relative
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if name.ends_with(".java") || name.ends_with(".gradle") {
        CopyAction::Patch
    } else {
        CopyAction::Verbatim
    }
}

/// Classification for build scaffolds: `bin` output directories and Eclipse
/// `.project` metadata directories are pruned, surviving files are copied
/// verbatim.
///
/// The `.project` check is a substring match on the directory name, mirroring
/// the upstream generator; it also catches directories like `choreo.project`.
fn scaffold_action(relative: &Path, is_dir: bool) -> CopyAction {
    if !is_dir {
        return CopyAction::Verbatim;
    }
    let name = relative
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if name == "bin" || name.contains(".project") {
        CopyAction::Skip
    } else {
        CopyAction::Verbatim
    }
}

/// Reads the GradleRIO version from the library's version descriptor.
fn read_gradle_version(resources: &Path) -> Result<String> {
    let version_file = paths::resolve(resources, ["build", "version.txt"]);
    if !version_file.is_file() {
        anyhow::bail!(FrcgenError::MissingSourcePath { path: version_file });
    }
    let version = std::fs::read_to_string(&version_file)
        .map_err(|e| FrcgenError::MalformedVersionFile {
            path: version_file.clone(),
            reason: e.to_string(),
        })?
        .trim()
        .to_string();
    if version.is_empty() {
        anyhow::bail!(FrcgenError::MalformedVersionFile {
            path: version_file,
            reason: "the file is empty".to_string(),
        });
    }
    debug!("GradleRIO version: {version}");
    Ok(version)
}

/// Creates `src/main/deploy` with its explanatory stub file.
fn create_deploy_directory(deploy_dir: &Path) -> Result<()> {
    io::ensure_dir_exists(deploy_dir)?;
    io::write_string_to_file(&deploy_dir.join("example.txt"), DEPLOY_DIR_README)
        .context("Creating the deploy directory stub")
}

/// Rewrites the end-of-line `-1` sentinels in the preferences file with the
/// team number. With the team number unset this rewrites `-1` to `-1`, which
/// leaves the file as distributed.
fn set_team_number(preferences: &Path, team_number: i32) -> Result<bool> {
    let substitution = [Substitution::new(
        TEAM_NUMBER_PATTERN,
        format!("${{1}}{team_number}"),
    )?];
    patch::patch_file(preferences, preferences, &substitution)
}
