use std::future::Future;

use tracing::{error, Instrument};

use crate::domain::DomainError;

/// Runs one remote call on its own task and waits for its outcome.
///
/// The task is never cancelled: if the caller goes away the call runs to
/// completion in the background and its result is dropped.
pub(crate) async fn run_detached<F, T>(call: F) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, DomainError>> + Send + 'static,
    T: Send + 'static,
{
    let handle = tokio::spawn(call.in_current_span());

    match handle.await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Remote call task failed: {e}");
            Err(DomainError::internal(format!("remote call task failed: {e}")))
        }
    }
}
