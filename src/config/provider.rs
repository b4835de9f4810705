//! ConfigProvider - loads the configuration once and hands out the cached copy.

use once_cell::sync::OnceCell;
use std::path::Path;

use super::{AppConfig, ConfigError};

type Loader = fn(&Path) -> Result<AppConfig, ConfigError>;

/// Lazily loaded configuration.
///
/// The entry point owns the provider and passes the loaded [`AppConfig`]
/// down explicitly. Concurrent first calls block on the same cell, so the
/// loader runs exactly once on success. A failed load leaves the cell empty
/// and the next call retries.
pub struct ConfigProvider {
    cell: OnceCell<AppConfig>,
    loader: Loader,
}

impl ConfigProvider {
    /// Provider backed by [`AppConfig::load_from`].
    pub fn new() -> Self {
        Self::with_loader(AppConfig::load_from)
    }

    /// Provider backed by a custom loader.
    pub fn with_loader(loader: Loader) -> Self {
        Self {
            cell: OnceCell::new(),
            loader,
        }
    }

    /// Returns the configuration, loading it from `base_path` on first use.
    ///
    /// `base_path` only matters for the call that performs the load.
    pub fn get(&self, base_path: impl AsRef<Path>) -> Result<&AppConfig, ConfigError> {
        self.cell.get_or_try_init(|| {
            let base_path = base_path.as_ref();
            tracing::debug!(base_path = %base_path.display(), "Loading configuration");
            (self.loader)(base_path)
        })
    }

}

impl Default for ConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    // Each test uses its own counter since loaders are plain fn pointers
    static SINGLE_LOADS: AtomicUsize = AtomicUsize::new(0);
    static CONCURRENT_LOADS: AtomicUsize = AtomicUsize::new(0);
    static FAILING_LOADS: AtomicUsize = AtomicUsize::new(0);
    static FAIL_NEXT: Mutex<bool> = Mutex::new(true);

    fn counting_loader(_: &Path) -> Result<AppConfig, ConfigError> {
        SINGLE_LOADS.fetch_add(1, Ordering::SeqCst);
        Ok(AppConfig::default())
    }

    fn slow_loader(_: &Path) -> Result<AppConfig, ConfigError> {
        CONCURRENT_LOADS.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(50));
        Ok(AppConfig::default())
    }

    fn flaky_loader(_: &Path) -> Result<AppConfig, ConfigError> {
        FAILING_LOADS.fetch_add(1, Ordering::SeqCst);
        let mut fail = FAIL_NEXT.lock().unwrap();
        if *fail {
            *fail = false;
            return Err(ConfigError::ValidationFailed(
                super::super::ValidationError::InvalidPort,
            ));
        }
        Ok(AppConfig::default())
    }

    #[test]
    fn get_loads_once_and_caches() {
        let provider = ConfigProvider::with_loader(counting_loader);

        let first = provider.get("/first").unwrap() as *const AppConfig;
        let second = provider.get("/second").unwrap() as *const AppConfig;

        assert_eq!(SINGLE_LOADS.load(Ordering::SeqCst), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn concurrent_first_calls_initialize_once() {
        let provider = ConfigProvider::with_loader(slow_loader);

        let addrs: Vec<usize> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| provider.get(".").unwrap() as *const AppConfig as usize)
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(CONCURRENT_LOADS.load(Ordering::SeqCst), 1);
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn failed_load_is_retried() {
        let provider = ConfigProvider::with_loader(flaky_loader);

        assert!(provider.get(".").is_err());
        assert_eq!(FAILING_LOADS.load(Ordering::SeqCst), 1);
        assert!(provider.get(".").is_ok());
        assert_eq!(FAILING_LOADS.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn default_provider_reads_settings_file() {
        let _guard = super::super::ENV_MUTEX
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        std::env::remove_var("VOICE_TASK__VOICE__SKIP_REQUEST_VALIDATION");
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(super::super::SETTINGS_FILE),
            r#"{"voice": {"skip_request_validation": true}}"#,
        )
        .unwrap();

        let provider = ConfigProvider::new();
        let config = provider.get(dir.path()).unwrap();

        assert!(config.voice.skip_request_validation);
    }
}
