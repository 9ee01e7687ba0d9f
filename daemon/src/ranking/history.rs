//! Shell history sources.
//!
//! Which files are consulted depends on the platform:
//! - Unix: `~/.zsh_history`, then `~/.bash_history`
//! - Windows: the PSReadLine `ConsoleHost_history.txt`
//!
//! Every file is best effort. Unreadable ones are skipped.

use std::future::Future;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Something that can produce raw shell history text
pub trait HistorySource: Send + Sync + 'static {
    /// Concatenated history text, or `None` if nothing could be read
    fn read_history(&self) -> impl Future<Output = Option<String>> + Send;
}

/// Platform family for history file selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// History files relative to the home directory, in read order
    pub fn history_files(self) -> &'static [&'static [&'static str]] {
        HISTORY_FILES
            .iter()
            .find(|(platform, _)| *platform == self)
            .map(|(_, files)| *files)
            .unwrap_or(&[])
    }
}

/// Home-relative path components per platform
const HISTORY_FILES: &[(Platform, &[&[&str]])] = &[
    (Platform::Unix, &[&[".zsh_history"], &[".bash_history"]]),
    (
        Platform::Windows,
        &[&[
            "AppData",
            "Roaming",
            "Microsoft",
            "Windows",
            "PowerShell",
            "PSReadLine",
            "ConsoleHost_history.txt",
        ]],
    ),
];

/// Reads the user's interactive shell history from disk
#[derive(Debug, Clone)]
pub struct ShellHistory {
    files: Vec<PathBuf>,
}

impl ShellHistory {
    /// Files from the platform table under `home`
    pub fn for_platform(platform: Platform, home: &Path) -> Self {
        let files = platform
            .history_files()
            .iter()
            .map(|components| components.iter().fold(home.to_path_buf(), |p, c| p.join(c)))
            .collect();
        Self { files }
    }

    /// Current platform and home directory
    pub fn detect() -> Self {
        match directories::BaseDirs::new() {
            Some(dirs) => Self::for_platform(Platform::current(), dirs.home_dir()),
            None => {
                debug!("No home directory, shell history unavailable");
                Self { files: Vec::new() }
            }
        }
    }

    /// Explicit file list
    pub fn from_files(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

impl HistorySource for ShellHistory {
    fn read_history(&self) -> impl Future<Output = Option<String>> + Send {
        async move {
            let mut content = String::new();

            for path in &self.files {
                match tokio::fs::read(path).await {
                    Ok(bytes) => {
                        // zsh metafies non-ASCII bytes, so the file is not always UTF-8
                        content.push_str(&String::from_utf8_lossy(&bytes));
                        content.push('\n');
                    }
                    Err(e) => {
                        debug!("Skipping history file {}: {}", path.display(), e);
                    }
                }
            }

            if content.is_empty() { None } else { Some(content) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_table() {
        let history = ShellHistory::for_platform(Platform::Unix, Path::new("/home/me"));
        assert_eq!(
            history.files(),
            &[
                PathBuf::from("/home/me/.zsh_history"),
                PathBuf::from("/home/me/.bash_history")
            ]
        );
    }

    #[test]
    fn test_windows_table() {
        let history = ShellHistory::for_platform(Platform::Windows, Path::new("home"));
        assert_eq!(history.files().len(), 1);
        assert!(history.files()[0].ends_with("ConsoleHost_history.txt"));
        assert!(history.files()[0].starts_with("home"));
    }

    #[tokio::test]
    async fn test_read_skips_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let bash = dir.path().join(".bash_history");
        std::fs::write(&bash, "git status").unwrap();

        let history = ShellHistory::from_files(vec![dir.path().join(".zsh_history"), bash]);
        let content = history.read_history().await.unwrap();
        assert_eq!(content, "git status\n");
    }

    #[tokio::test]
    async fn test_read_concatenates_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let zsh = dir.path().join(".zsh_history");
        let bash = dir.path().join(".bash_history");
        std::fs::write(&zsh, ": 1700000000:0;git push").unwrap();
        std::fs::write(&bash, "git pull").unwrap();

        let history = ShellHistory::from_files(vec![zsh, bash]);
        let content = history.read_history().await.unwrap();
        assert_eq!(content, ": 1700000000:0;git push\ngit pull\n");
    }

    #[tokio::test]
    async fn test_read_nothing_available() {
        let dir = tempfile::tempdir().unwrap();
        let history = ShellHistory::from_files(vec![dir.path().join("missing")]);
        assert!(history.read_history().await.is_none());
    }

    #[tokio::test]
    async fn test_read_lossy_on_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let zsh = dir.path().join(".zsh_history");
        std::fs::write(&zsh, b"git st\x83atus\ngit log\n").unwrap();

        let history = ShellHistory::from_files(vec![zsh]);
        let content = history.read_history().await.unwrap();
        assert!(content.contains("git log"));
    }
}
