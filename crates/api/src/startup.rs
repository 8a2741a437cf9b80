//! Startup sequencing: run the schema bootstrap and record its outcome.

use std::sync::Arc;

use msru_content::bootstrap;
use msru_core::lifecycle::{Lifecycle, LifecycleHandle};
use msru_directus::ContentApi;
use tokio::task::JoinHandle;

/// Run the bootstrap once and move `lifecycle` to its terminal state.
///
/// Returns the state reached. If the lifecycle had already settled the
/// transition is refused and logged, and the existing state is returned.
pub async fn run_bootstrap(content: &dyn ContentApi, lifecycle: &LifecycleHandle) -> Lifecycle {
    let succeeded = bootstrap(content).await;
    let next = Lifecycle::from_bootstrap(succeeded);

    if let Err(e) = lifecycle.transition(next) {
        tracing::warn!(error = %e, "Bootstrap outcome not recorded");
    }
    lifecycle.current()
}

/// Spawn [`run_bootstrap`] so the server can start accepting requests
/// (and answering 503) while it runs.
pub fn spawn_bootstrap(
    content: Arc<dyn ContentApi>,
    lifecycle: LifecycleHandle,
) -> JoinHandle<Lifecycle> {
    tokio::spawn(async move { run_bootstrap(content.as_ref(), &lifecycle).await })
}
