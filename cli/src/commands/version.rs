//! Version command

use crate::domain::BuildInfo;

/// Run the version command.
pub fn run(build: &BuildInfo, json: bool) {
    let version = env!("CARGO_PKG_VERSION");

    if json {
        let out = serde_json::json!({
            "version": version,
            "commit": build.commit_hash,
            "build_time": build.build_time,
        });
        println!("{out}");
    } else {
        println!(
            "stackctl {version} (commit {}, built {})",
            build.commit_hash, build.build_time
        );
    }
}
