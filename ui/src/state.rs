use roster_business::{DirectoryConfig, DirectoryState, FetcherHandle, ScrollMonitor};
use roster_states::StateCtx;

/// The main application state: a context object holding every piece of
/// component state (collection, cursor, sort/filter, scroll monitor,
/// transport handle). Nothing lives in module-level globals.
pub struct State {
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(DirectoryConfig::default())
    }
}

impl State {
    pub fn with_config(config: DirectoryConfig) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(config);
        ctx.add_state(FetcherHandle::default());
        ctx.add_state(DirectoryState::new());
        ctx.add_state(ScrollMonitor::new());

        Self { ctx }
    }

    /// State pointed at a test server.
    pub fn test(base_url: String) -> Self {
        Self::with_config(DirectoryConfig::new(base_url))
    }
}
