//! Unit tests for installing the stack resources and the version marker.

#![allow(clippy::expect_used)]

use std::fs;
use std::path::PathBuf;

use stackctl::application::ports::StackAssets;
use stackctl::application::services::install::{
    InstallOutcome, ensure_installed, is_latest_version_installed,
};
use stackctl::domain::{BuildInfo, InstallError};
use stackctl::infra::fs::LocalFs;

use crate::mocks::FixedLocations;

/// Two small resources, one of them nested.
struct TinyAssets;

impl StackAssets for TinyAssets {
    fn files(&self) -> Vec<(PathBuf, &'static [u8])> {
        vec![
            (PathBuf::from("snapshot.yml"), b"services: {}\n".as_slice()),
            (
                PathBuf::from("certs/ca.pem"),
                b"-----BEGIN CERTIFICATE-----\n".as_slice(),
            ),
        ]
    }
}

fn build() -> BuildInfo {
    BuildInfo::new("abc123", "2024-01-01T00:00:00Z")
}

#[test]
fn missing_marker_means_not_installed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let locations = FixedLocations(Some(dir.path().to_path_buf()));

    let installed = is_latest_version_installed(&locations, &LocalFs, &build()).expect("check");
    assert!(!installed);
}

#[test]
fn matching_marker_means_installed() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("version"), "abc123-2024-01-01T00:00:00Z").expect("marker");
    let locations = FixedLocations(Some(dir.path().to_path_buf()));

    assert!(is_latest_version_installed(&locations, &LocalFs, &build()).expect("check"));
}

#[test]
fn marker_comparison_is_exact() {
    let dir = tempfile::tempdir().expect("tempdir");
    let locations = FixedLocations(Some(dir.path().to_path_buf()));

    for stale in [
        "abc123-2024-01-01T00:00:00Z\n",
        "abc124-2024-01-01T00:00:00Z",
        "",
    ] {
        fs::write(dir.path().join("version"), stale).expect("marker");
        assert!(
            !is_latest_version_installed(&locations, &LocalFs, &build()).expect("check"),
            "{stale:?} must not count as installed"
        );
    }
}

#[cfg(unix)]
#[test]
fn unreadable_marker_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    // A directory where the marker file should be cannot be read as text.
    fs::create_dir(dir.path().join("version")).expect("mkdir");
    let locations = FixedLocations(Some(dir.path().to_path_buf()));

    let err = is_latest_version_installed(&locations, &LocalFs, &build()).expect_err("read");
    assert_eq!(
        err.downcast_ref::<InstallError>(),
        Some(&InstallError::ReadVersion)
    );
}

#[test]
fn unresolvable_root_is_an_error() {
    let err = is_latest_version_installed(&FixedLocations(None), &LocalFs, &build())
        .expect_err("no root");
    assert_eq!(
        err.downcast_ref::<InstallError>(),
        Some(&InstallError::LocateRoot)
    );
}

#[test]
fn ensure_installed_writes_resources_config_and_marker() {
    let dir = tempfile::tempdir().expect("tempdir");
    let locations = FixedLocations(Some(dir.path().to_path_buf()));

    let outcome = ensure_installed(&locations, &LocalFs, &TinyAssets, &build()).expect("install");

    assert_eq!(outcome, InstallOutcome::Installed);
    let stack = dir.path().join("stack");
    assert_eq!(
        fs::read_to_string(stack.join("snapshot.yml")).expect("snapshot"),
        "services: {}\n"
    );
    assert!(stack.join("certs").join("ca.pem").is_file());
    assert_eq!(
        fs::read_to_string(dir.path().join("version")).expect("marker"),
        "abc123-2024-01-01T00:00:00Z"
    );
    let config = fs::read_to_string(dir.path().join("config.yml")).expect("config");
    assert!(config.contains("package-spec"), "got: {config}");
}

#[test]
fn second_install_is_a_no_op() {
    let dir = tempfile::tempdir().expect("tempdir");
    let locations = FixedLocations(Some(dir.path().to_path_buf()));

    ensure_installed(&locations, &LocalFs, &TinyAssets, &build()).expect("first");
    fs::write(dir.path().join("stack").join("snapshot.yml"), "edited\n").expect("edit");

    let outcome = ensure_installed(&locations, &LocalFs, &TinyAssets, &build()).expect("second");
    assert_eq!(outcome, InstallOutcome::UpToDate);
    assert_eq!(
        fs::read_to_string(dir.path().join("stack").join("snapshot.yml")).expect("snapshot"),
        "edited\n"
    );
}

#[test]
fn new_build_rewrites_resources_but_keeps_user_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let locations = FixedLocations(Some(dir.path().to_path_buf()));
    ensure_installed(&locations, &LocalFs, &TinyAssets, &build()).expect("first");

    fs::write(dir.path().join("stack").join("snapshot.yml"), "edited\n").expect("edit");
    fs::write(dir.path().join("config.yml"), "lint:\n  validator: [\"true\"]\n").expect("config");

    let next = BuildInfo::new("def456", "2024-02-01T00:00:00Z");
    let outcome = ensure_installed(&locations, &LocalFs, &TinyAssets, &next).expect("upgrade");

    assert_eq!(outcome, InstallOutcome::Installed);
    assert_eq!(
        fs::read_to_string(dir.path().join("stack").join("snapshot.yml")).expect("snapshot"),
        "services: {}\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("config.yml")).expect("config"),
        "lint:\n  validator: [\"true\"]\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("version")).expect("marker"),
        "def456-2024-02-01T00:00:00Z"
    );
}

#[test]
fn failed_install_leaves_no_marker() {
    let dir = tempfile::tempdir().expect("tempdir");
    // A file where the stack directory should be makes every resource write fail.
    fs::write(dir.path().join("stack"), "not a directory").expect("blocker");
    let locations = FixedLocations(Some(dir.path().to_path_buf()));

    let err = ensure_installed(&locations, &LocalFs, &TinyAssets, &build()).expect_err("blocked");

    assert_eq!(
        err.downcast_ref::<InstallError>(),
        Some(&InstallError::WriteResources)
    );
    assert!(!dir.path().join("version").exists());
}
