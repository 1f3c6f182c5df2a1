/// Rebuild when the build identity changes.
///
/// `STACKCTL_COMMIT_HASH` and `STACKCTL_BUILD_TIME` are read with
/// `option_env!` and decide whether installed stack resources are current,
/// so a stale binary must never keep an old marker baked in.
fn main() {
    println!("cargo::rerun-if-env-changed=STACKCTL_COMMIT_HASH");
    println!("cargo::rerun-if-env-changed=STACKCTL_BUILD_TIME");
    println!("cargo::rerun-if-changed=assets/stack");
}
