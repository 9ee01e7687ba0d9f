//! Alias usage ranking backed by shell history.
//!
//! Usage counts are mined from history files and cached for a short
//! freshness window. When the cache is stale the first caller starts a
//! refresh and every concurrent caller awaits that same refresh, so at most
//! one history scan runs at a time.
//!
//! Ranking is cosmetic: nothing here returns an error. Unreadable history
//! leaves the cache as it was and unknown usage scores 0.

mod history;
mod scan;

pub use history::{HistorySource, Platform, ShellHistory};
pub use scan::{UsageCounts, scan_usage, score_alias, top_usage, usage_key};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use tracing::{debug, warn};

use crate::alias::AliasRef;
use crate::config::Config;

type PendingRefresh = Shared<BoxFuture<'static, ()>>;

/// Process-wide usage cache
struct CacheState {
    counts: Arc<UsageCounts>,
    last_refresh: Option<Instant>,
    in_flight: Option<PendingRefresh>,
}

impl CacheState {
    fn is_stale(&self, ttl: Duration) -> bool {
        self.counts.is_empty() || self.last_refresh.is_none_or(|t| t.elapsed() > ttl)
    }
}

fn lock(state: &Mutex<CacheState>) -> MutexGuard<'_, CacheState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clears the in-flight marker when a refresh settles, even by panic
struct InFlightGuard(Arc<Mutex<CacheState>>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let mut state = lock(&self.0);
        state.last_refresh = Some(Instant::now());
        state.in_flight = None;
    }
}

/// Scores aliases by how often their invocations appear in shell history
pub struct RankingService<S: HistorySource = ShellHistory> {
    source: Arc<S>,
    state: Arc<Mutex<CacheState>>,
    ttl: Duration,
    base_weight: f64,
    read_timeout: Duration,
}

impl RankingService<ShellHistory> {
    /// Ranking over the configured or platform-default history files
    pub fn new(config: &Config) -> Self {
        let source = match &config.history_files {
            Some(files) => ShellHistory::from_files(files.clone()),
            None => ShellHistory::detect(),
        };
        debug!("Ranking history files: {:?}", source.files());
        Self::with_source(source, config)
    }
}

impl<S: HistorySource> RankingService<S> {
    pub fn with_source(source: S, config: &Config) -> Self {
        Self {
            source: Arc::new(source),
            state: Arc::new(Mutex::new(CacheState {
                counts: Arc::new(UsageCounts::new()),
                last_refresh: None,
                in_flight: None,
            })),
            ttl: config.cache_ttl(),
            base_weight: config.base_command_weight,
            read_timeout: config.read_timeout(),
        }
    }

    /// Usage score per alias name
    ///
    /// Every input name is present in the result; names never seen in
    /// history score 0.
    pub async fn get_scores(&self, aliases: &[AliasRef]) -> HashMap<String, u64> {
        let counts = self.fresh_counts().await;

        aliases
            .iter()
            .map(|alias| (alias.name.clone(), score_alias(&counts, alias, self.base_weight)))
            .collect()
    }

    /// Most used `git <word>` keys
    pub async fn usage(&self, limit: usize) -> Vec<(String, u64)> {
        let counts = self.fresh_counts().await;
        top_usage(&counts, limit)
    }

    /// Current counts, refreshing first if stale
    async fn fresh_counts(&self) -> Arc<UsageCounts> {
        let pending = {
            let mut state = lock(&self.state);
            if !state.is_stale(self.ttl) {
                return Arc::clone(&state.counts);
            }

            match &state.in_flight {
                Some(pending) => {
                    debug!("Joining in-flight history refresh");
                    pending.clone()
                }
                None => {
                    let pending = self.refresh().shared();
                    state.in_flight = Some(pending.clone());
                    pending
                }
            }
        };

        pending.await;
        Arc::clone(&lock(&self.state).counts)
    }

    /// One history scan; replaces the counts wholesale on success
    fn refresh(&self) -> BoxFuture<'static, ()> {
        let source = Arc::clone(&self.source);
        let state = Arc::clone(&self.state);
        let read_timeout = self.read_timeout;

        async move {
            let _guard = InFlightGuard(Arc::clone(&state));
            let started = Instant::now();

            let text = match tokio::time::timeout(read_timeout, source.read_history()).await {
                Ok(text) => text,
                Err(_) => {
                    warn!("History read timed out after {:?}, keeping cached counts", read_timeout);
                    None
                }
            };

            let Some(text) = text else {
                debug!("No shell history available");
                return;
            };

            let counts = scan_usage(&text);
            debug!(
                "Scanned {} bytes of history into {} usage keys in {:?}",
                text.len(),
                counts.len(),
                started.elapsed()
            );
            lock(&state).counts = Arc::new(counts);
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serves canned history texts in order and counts reads
    struct ScriptedHistory {
        texts: Mutex<Vec<Option<String>>>,
        reads: Arc<AtomicUsize>,
        delay: Duration,
    }

    impl ScriptedHistory {
        fn new(texts: &[Option<&str>], delay: Duration) -> (Self, Arc<AtomicUsize>) {
            let reads = Arc::new(AtomicUsize::new(0));
            let mut texts: Vec<Option<String>> =
                texts.iter().map(|t| t.map(str::to_string)).collect();
            texts.reverse();
            let source = Self {
                texts: Mutex::new(texts),
                reads: Arc::clone(&reads),
                delay,
            };
            (source, reads)
        }
    }

    impl HistorySource for ScriptedHistory {
        fn read_history(&self) -> impl Future<Output = Option<String>> + Send {
            async move {
                self.reads.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(self.delay).await;
                let mut texts = self.texts.lock().unwrap();
                // The last entry repeats once the script runs out
                if texts.len() > 1 {
                    texts.pop().flatten()
                } else {
                    texts.last().cloned().flatten()
                }
            }
        }
    }

    fn config(ttl_ms: u64) -> Config {
        Config {
            cache_ttl_ms: ttl_ms,
            ..Config::default()
        }
    }

    const HISTORY: &str = "git checkout main\ngit co feature\ngit co bugfix\n";

    #[tokio::test]
    async fn test_scores_from_history() {
        let (source, _) = ScriptedHistory::new(&[Some(HISTORY)], Duration::ZERO);
        let service = RankingService::with_source(source, &config(5_000));

        let scores = service
            .get_scores(&[
                AliasRef::new("co", "checkout"),
                AliasRef::new("st", "status"),
            ])
            .await;

        assert_eq!(scores["co"], 2);
        assert_eq!(scores["st"], 0);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let (source, _) = ScriptedHistory::new(&[Some(HISTORY)], Duration::ZERO);
        let service = RankingService::with_source(source, &config(5_000));
        assert!(service.get_scores(&[]).await.is_empty());
    }

    #[tokio::test]
    async fn test_no_history_scores_zero() {
        let (source, reads) = ScriptedHistory::new(&[None], Duration::ZERO);
        let service = RankingService::with_source(source, &config(5_000));

        let scores = service.get_scores(&[AliasRef::new("co", "checkout")]).await;
        assert_eq!(scores["co"], 0);
        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cache_reused_within_ttl() {
        let (source, reads) = ScriptedHistory::new(&[Some(HISTORY)], Duration::ZERO);
        let service = RankingService::with_source(source, &config(60_000));
        let aliases = [AliasRef::new("co", "checkout")];

        let first = service.get_scores(&aliases).await;
        let second = service.get_scores(&aliases).await;

        assert_eq!(first, second);
        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_scan() {
        let (source, reads) =
            ScriptedHistory::new(&[Some(HISTORY)], Duration::from_millis(50));
        let service = RankingService::with_source(source, &config(60_000));
        let aliases = [AliasRef::new("co", "checkout")];

        let results = futures::future::join_all((0..8).map(|_| service.get_scores(&aliases))).await;

        assert_eq!(reads.load(Ordering::SeqCst), 1);
        assert!(results.iter().all(|scores| scores["co"] == 2));
    }

    #[tokio::test]
    async fn test_concurrent_callers_across_tasks() {
        let (source, reads) =
            ScriptedHistory::new(&[Some(HISTORY)], Duration::from_millis(50));
        let service = Arc::new(RankingService::with_source(source, &config(60_000)));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let service = Arc::clone(&service);
                tokio::spawn(async move {
                    service.get_scores(&[AliasRef::new("co", "checkout")]).await
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap()["co"], 2);
        }
        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_last_scan_wins() {
        let (source, reads) = ScriptedHistory::new(
            &[Some(HISTORY), Some("git status\n")],
            Duration::ZERO,
        );
        let service = RankingService::with_source(source, &config(0));
        let aliases = [AliasRef::new("co", "checkout"), AliasRef::new("st", "status")];

        let first = service.get_scores(&aliases).await;
        assert_eq!(first["co"], 2);

        tokio::time::sleep(Duration::from_millis(5)).await;
        let second = service.get_scores(&aliases).await;

        assert_eq!(reads.load(Ordering::SeqCst), 2);
        assert_eq!(second["co"], 0);
        assert_eq!(second["st"], 0);
        assert_eq!(service.usage(10).await, vec![("git status".to_string(), 1)]);
    }

    #[tokio::test]
    async fn test_unreadable_refresh_keeps_counts() {
        let (source, _) = ScriptedHistory::new(&[Some(HISTORY), None], Duration::ZERO);
        let service = RankingService::with_source(source, &config(0));
        let aliases = [AliasRef::new("co", "checkout")];

        assert_eq!(service.get_scores(&aliases).await["co"], 2);
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert_eq!(service.get_scores(&aliases).await["co"], 2);
    }

    #[tokio::test]
    async fn test_read_timeout_is_soft() {
        let (source, reads) =
            ScriptedHistory::new(&[Some(HISTORY)], Duration::from_millis(500));
        let config = Config {
            read_timeout_ms: 20,
            ..Config::default()
        };
        let service = RankingService::with_source(source, &config);

        let scores = service.get_scores(&[AliasRef::new("co", "checkout")]).await;
        assert_eq!(scores["co"], 0);
        assert_eq!(reads.load(Ordering::SeqCst), 1);

        // The marker is cleared, so the next stale call scans again
        service.get_scores(&[]).await;
        assert_eq!(reads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_configurable_weight() {
        let text = "git checkout a\n".repeat(10);
        let (source, _) = ScriptedHistory::new(&[Some(text.as_str())], Duration::ZERO);
        let config = Config {
            base_command_weight: 0.5,
            ..Config::default()
        };
        let service = RankingService::with_source(source, &config);

        let scores = service.get_scores(&[AliasRef::new("co", "checkout")]).await;
        assert_eq!(scores["co"], 5);
    }

    #[tokio::test]
    async fn test_reads_configured_files() {
        let dir = tempfile::tempdir().unwrap();
        let bash = dir.path().join(".bash_history");
        std::fs::write(&bash, HISTORY).unwrap();
        let config = Config {
            history_files: Some(vec![dir.path().join(".zsh_history"), bash]),
            ..Config::default()
        };

        let service = RankingService::new(&config);
        let scores = service.get_scores(&[AliasRef::new("co", "checkout")]).await;
        assert_eq!(scores["co"], 2);
    }
}
