//! Stamps the binary with the commit it was built from.
//!
//! A clean checkout of the release tag reports the plain package version.
//! Any other tree reports `<version>+<short sha>`, suffixed `.dirty` when
//! tracked files have local edits. Outside git the package version is used.

use std::path::{Path, PathBuf};
use std::process::Command;

fn git(root: &Path, args: &[&str]) -> Option<String> {
    let output = Command::new("git").arg("-C").arg(root).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn version(root: &Path, package: &str) -> String {
    let Some(sha) = git(root, &["rev-parse", "--short", "HEAD"]) else {
        return package.to_string();
    };
    let on_release_tag = git(root, &["describe", "--tags", "--exact-match"])
        .is_some_and(|tag| tag.trim_start_matches('v') == package);
    let dirty = git(root, &["status", "--porcelain", "--untracked-files=no"]).is_some();

    match (on_release_tag, dirty) {
        (true, false) => package.to_string(),
        (_, true) => format!("{package}+{sha}.dirty"),
        (false, false) => format!("{package}+{sha}"),
    }
}

fn main() {
    let manifest_dir = PathBuf::from(std::env::var_os("CARGO_MANIFEST_DIR").unwrap_or_default());
    let workspace_root = manifest_dir.join("../..");
    for watched in [".git/HEAD", ".git/index", ".git/refs/tags"] {
        println!(
            "cargo:rerun-if-changed={}",
            workspace_root.join(watched).display()
        );
    }

    let package = std::env::var("CARGO_PKG_VERSION").unwrap_or_default();
    println!(
        "cargo:rustc-env=FILMCACHE_VERSION={}",
        version(&workspace_root, &package)
    );
}
