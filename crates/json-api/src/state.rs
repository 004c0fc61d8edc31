//! Shared server state, injected into every request's depot.

use std::{sync::Arc, time::Instant};

use tiffin_app::context::AppContext;

pub(crate) struct State {
    pub(crate) app: AppContext,
    started_at: Instant,
}

impl State {
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self {
            app,
            started_at: Instant::now(),
        })
    }

    /// Whole seconds since the server state was built.
    pub(crate) fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
