//! Common test utilities for podcast-dl CLI tests

#[allow(dead_code)]
pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::*;

use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

/// A throwaway home directory with a media dir and optional config file
pub struct TestHome {
    pub home: TempDir,
    pub media_dir: PathBuf,
}

impl TestHome {
    /// Create a home directory without any config file
    pub fn empty() -> Self {
        let home = TempDir::new().expect("Failed to create temp home");
        let media_dir = home.path().join("media");
        std::fs::create_dir(&media_dir).expect("Failed to create media dir");
        Self { home, media_dir }
    }

    /// Create a home directory whose `.podcasts.toml` maps each id to its feed
    pub fn with_podcasts(podcasts: &[(&str, &str)]) -> Self {
        let test_home = Self::empty();
        let mut toml = format!(
            "[config]\nmedia_dir = {:?}\n\n[podcasts]\n",
            test_home.media_dir.to_str().expect("non-UTF-8 temp path")
        );
        for (id, url) in podcasts {
            toml.push_str(&format!("{id} = {url:?}\n"));
        }
        std::fs::write(test_home.home.path().join(".podcasts.toml"), toml)
            .expect("Failed to write config");
        test_home
    }

    /// Create `media_dir/<id>` so downloads for that podcast can land
    pub fn create_podcast_dir(&self, id: &str) -> PathBuf {
        let dir = self.media_dir.join(id);
        std::fs::create_dir(&dir).expect("Failed to create podcast dir");
        dir
    }

    pub fn path(&self) -> &Path {
        self.home.path()
    }
}

/// Run the compiled binary with `HOME` pointed at `home`
pub async fn run_cli(home: &Path, args: &[&str]) -> Output {
    tokio::process::Command::new(env!("CARGO_BIN_EXE_podcast-dl"))
        .args(args)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .await
        .expect("Failed to run podcast-dl")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
