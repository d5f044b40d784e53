// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed documentation tree and a fluent
// builder so each integration test can set up an isolated environment
// without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// An isolated documentation tree backed by a [`tempfile::TempDir`].
///
/// The tree is a git repository with one commit, so version-token
/// resolution works. The directory is automatically deleted when dropped.
pub struct DocsTree {
    /// Temporary directory containing the documentation root.
    pub root: tempfile::TempDir,
}

impl DocsTree {
    /// Path to the documentation root.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Path of an output directory inside the tree (not created).
    pub fn out_dir(&self) -> PathBuf {
        self.root.path().join("out")
    }

    /// The abbreviated commit id of the tree's repository.
    pub fn short_id(&self) -> String {
        mangen_cli::vcs::head_short_id(self.root.path()).expect("resolve short id")
    }
}

/// Initialise a git repository at `path` with a single empty commit.
fn init_git_repo(path: &Path) {
    let repo = git2::Repository::init(path).expect("init git repo");
    let sig = git2::Signature::now("test", "test@example.com").expect("signature");
    let tree_id = {
        let mut index = repo.index().expect("index");
        index.write_tree().expect("write tree")
    };
    let tree = repo.find_tree(tree_id).expect("find tree");
    repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
        .expect("commit");
}

/// Fluent builder for [`DocsTree`].
pub struct DocsTreeBuilder {
    tree: DocsTree,
}

impl DocsTreeBuilder {
    /// Begin building a new tree backed by a fresh git repository.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        init_git_repo(root.path());
        Self {
            tree: DocsTree { root },
        }
    }

    /// Write a markdown source under `man/<name>`.
    pub fn with_source(self, name: &str, content: &str) -> Self {
        self.with_file(&format!("man/{name}"), content)
    }

    /// Write an arbitrary file under the root, creating parent directories.
    pub fn with_file(self, rel_path: &str, content: &str) -> Self {
        let path = self.tree.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write file");
        self
    }

    /// Write `mangen.toml` at the root.
    pub fn with_manifest(self, content: &str) -> Self {
        self.with_file("mangen.toml", content)
    }

    /// Finish building and return the configured tree.
    pub fn build(self) -> DocsTree {
        self.tree
    }
}
