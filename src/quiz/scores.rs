//! Best-score persistence.
//!
//! Scores are kept in a small key-value store: one integer per level, keyed
//! by [`Level::storage_key`]. The store is an injected collaborator so the
//! session layer stays pure; production uses [`FileScoreStore`] (a TOML file
//! in the platform config directory), tests use [`MemoryScoreStore`].

use crate::config::paths::get_scores_path;
use crate::error::AppError;
use crate::quiz::bank::Level;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// The persistence collaborator for best scores.
///
/// Keys are strings, values are non-negative integers; absent keys read as
/// zero. Implementations must survive process restarts to be useful in
/// production, but the contract doesn't require it (the in-memory fake
/// deliberately doesn't).
#[allow(async_fn_in_trait)]
pub trait ScoreStore {
    /// Reads the stored value for `key`. Absent keys read as 0.
    async fn get(&self, key: &str) -> Result<u32, AppError>;

    /// Writes `value` for `key`, replacing any previous value.
    async fn set(&self, key: &str, value: u32) -> Result<(), AppError>;
}

/// Compares a completed session's score against the stored best for the
/// level and overwrites the stored value only when strictly greater.
///
/// Returns the updated best (which is the previous best when the new score
/// didn't beat it). The only failure mode is the store itself; callers treat
/// that as non-fatal and still report the session score to the player.
pub async fn reconcile<S: ScoreStore>(
    store: &S,
    level: Level,
    score: u32,
) -> Result<u32, AppError> {
    let key = level.storage_key();
    let previous = store.get(&key).await?;
    if score > previous {
        store.set(&key, score).await?;
        tracing::info!(
            "New best score for {}: {} (was {})",
            level.display_name(),
            score,
            previous
        );
        Ok(score)
    } else {
        Ok(previous)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ScoresFile {
    #[serde(default)]
    best_scores: BTreeMap<String, u32>,
}

/// File-backed score store: a TOML table in the platform config directory.
///
/// Reads tolerate a missing file (all keys 0); writes create the parent
/// directory on demand and rewrite the whole file, which stays tiny.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    /// Store at the default platform location
    /// (e.g. `~/.config/footy_trivia/scores.toml` on Linux).
    pub fn new() -> Self {
        Self::at_path(get_scores_path())
    }

    /// Store at a custom file path (used by tests).
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        FileScoreStore { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_file(&self) -> Result<ScoresFile, AppError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(ScoresFile::default()),
            Err(e) => {
                return Err(AppError::score_store_error(
                    format!("failed to read scores: {e}"),
                    self.path.to_string_lossy(),
                ));
            }
        };
        toml::from_str(&content).map_err(|e| {
            AppError::score_store_error(
                format!("scores file is not valid TOML: {e}"),
                self.path.to_string_lossy(),
            )
        })
    }

    async fn write_file(&self, scores: &ScoresFile) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent).await?;
        }
        let content = toml::to_string_pretty(scores)?;
        let mut file = fs::File::create(&self.path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

impl Default for FileScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreStore for FileScoreStore {
    async fn get(&self, key: &str) -> Result<u32, AppError> {
        let scores = self.read_file().await?;
        Ok(scores.best_scores.get(key).copied().unwrap_or(0))
    }

    async fn set(&self, key: &str, value: u32) -> Result<(), AppError> {
        let mut scores = self.read_file().await?;
        scores.best_scores.insert(key.to_string(), value);
        self.write_file(&scores).await
    }
}

/// In-process score store for tests and as a degraded fallback when no
/// config directory is available. Contents die with the process.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    scores: tokio::sync::Mutex<BTreeMap<String, u32>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    async fn get(&self, key: &str) -> Result<u32, AppError> {
        Ok(self.scores.lock().await.get(key).copied().unwrap_or(0))
    }

    async fn set(&self, key: &str, value: u32) -> Result<(), AppError> {
        self.scores.lock().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Store whose every operation fails, for the warning path.
    struct BrokenStore;

    impl ScoreStore for BrokenStore {
        async fn get(&self, _key: &str) -> Result<u32, AppError> {
            Err(AppError::score_store_error("store offline", "<none>"))
        }

        async fn set(&self, _key: &str, _value: u32) -> Result<(), AppError> {
            Err(AppError::score_store_error("store offline", "<none>"))
        }
    }

    #[tokio::test]
    async fn test_memory_store_reads_absent_keys_as_zero() {
        let store = MemoryScoreStore::new();
        assert_eq!(store.get("quizResult_easylevel").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryScoreStore::new();
        store.set("quizResult_hardlevel", 9).await.unwrap();
        assert_eq!(store.get("quizResult_hardlevel").await.unwrap(), 9);
        // Other keys are untouched
        assert_eq!(store.get("quizResult_easylevel").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_reconcile_updates_only_on_improvement() {
        let store = MemoryScoreStore::new();
        store
            .set(&Level::Easy.storage_key(), 5)
            .await
            .unwrap();

        let best = reconcile(&store, Level::Easy, 7).await.unwrap();
        assert_eq!(best, 7);
        assert_eq!(store.get(&Level::Easy.storage_key()).await.unwrap(), 7);

        // A worse run leaves the stored best alone
        let best = reconcile(&store, Level::Easy, 3).await.unwrap();
        assert_eq!(best, 7);
        assert_eq!(store.get(&Level::Easy.storage_key()).await.unwrap(), 7);

        // An equal run is not an improvement either
        let best = reconcile(&store, Level::Easy, 7).await.unwrap();
        assert_eq!(best, 7);
    }

    #[tokio::test]
    async fn test_reconcile_starts_from_zero_for_unknown_levels() {
        let store = MemoryScoreStore::new();
        let best = reconcile(&store, Level::Medium, 1).await.unwrap();
        assert_eq!(best, 1);
    }

    #[tokio::test]
    async fn test_reconcile_surfaces_store_failures() {
        let err = reconcile(&BrokenStore, Level::Easy, 10).await.unwrap_err();
        assert!(matches!(err, AppError::ScoreStore { .. }));
    }

    #[tokio::test]
    async fn test_file_store_reads_zero_without_a_file() {
        let temp_dir = tempdir().unwrap();
        let store = FileScoreStore::at_path(temp_dir.path().join("scores.toml"));
        assert_eq!(store.get("quizResult_easylevel").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("scores.toml");
        let store = FileScoreStore::at_path(&path);

        store.set("quizResult_easylevel", 7).await.unwrap();
        store.set("quizResult_hardlevel", 4).await.unwrap();
        assert_eq!(store.get("quizResult_easylevel").await.unwrap(), 7);
        assert_eq!(store.get("quizResult_hardlevel").await.unwrap(), 4);

        // A second write keeps unrelated keys
        store.set("quizResult_easylevel", 9).await.unwrap();
        assert_eq!(store.get("quizResult_hardlevel").await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_file_store_survives_a_new_instance() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("scores.toml");

        FileScoreStore::at_path(&path)
            .set("quizResult_mediumlevel", 6)
            .await
            .unwrap();

        let reopened = FileScoreStore::at_path(&path);
        assert_eq!(reopened.get("quizResult_mediumlevel").await.unwrap(), 6);
    }

    #[tokio::test]
    async fn test_file_store_creates_parent_directories() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("scores.toml");
        let store = FileScoreStore::at_path(&path);
        store.set("quizResult_easylevel", 2).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_file_store_rejects_corrupt_files() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("scores.toml");
        tokio::fs::write(&path, "best_scores = [not toml")
            .await
            .unwrap();

        let store = FileScoreStore::at_path(&path);
        let err = store.get("quizResult_easylevel").await.unwrap_err();
        assert!(matches!(err, AppError::ScoreStore { .. }));
    }

    #[tokio::test]
    async fn test_file_store_ignores_unknown_keys_in_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("scores.toml");
        tokio::fs::write(
            &path,
            "[best_scores]\nquizResult_easylevel = 8\nsomething_else = 3\n",
        )
        .await
        .unwrap();

        let store = FileScoreStore::at_path(&path);
        assert_eq!(store.get("quizResult_easylevel").await.unwrap(), 8);
        assert_eq!(store.get("quizResult_hardlevel").await.unwrap(), 0);
    }
}
