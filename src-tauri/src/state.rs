//! Application state management
use parking_lot::RwLock;
use std::sync::Arc;
use tally_core::{App, Config, Result};

/// Thread-safe application state wrapper
pub struct AppState {
    app: Arc<RwLock<Option<App>>>,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let config = Config::default();
        let app = App::new(config)?;

        Ok(Self {
            app: Arc::new(RwLock::new(Some(app))),
        })
    }

    pub fn initialize(&self) -> Result<()> {
        if let Some(app) = self.app.write().as_ref() {
            app.initialize()?;
        }
        Ok(())
    }

    pub fn with_app<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&App) -> Result<T>,
    {
        let guard = self.app.read();
        match guard.as_ref() {
            Some(app) => f(app),
            None => Err(tally_core::CoreError::NotInitialized),
        }
    }
}
