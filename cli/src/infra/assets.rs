//! Embedded stack resources compiled into the CLI binary.
//!
//! At compile time, `include_dir!` embeds everything under `assets/stack/`:
//!   - `snapshot.yml`                 — the compose definition of the stack
//!   - `kibana.config.yml`            — mounted into the Kibana container
//!   - `Dockerfile.package-registry`  — local package registry image
//!   - `package-registry.config.yml`  — copied into that image

use std::path::PathBuf;

use include_dir::{Dir, include_dir};

use crate::application::ports::StackAssets;

static STACK_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets/stack");

/// Production `StackAssets` backed by the embedded directory.
pub struct EmbeddedAssets;

impl StackAssets for EmbeddedAssets {
    fn files(&self) -> Vec<(PathBuf, &'static [u8])> {
        let mut files = Vec::new();
        collect(&STACK_ASSETS, &mut files);
        files
    }
}

fn collect(dir: &'static Dir<'static>, out: &mut Vec<(PathBuf, &'static [u8])>) {
    for file in dir.files() {
        out.push((file.path().to_path_buf(), file.contents()));
    }
    for sub in dir.dirs() {
        collect(sub, out);
    }
}
