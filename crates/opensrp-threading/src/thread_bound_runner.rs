use std::{future::Future, pin::Pin, rc::Rc};

use thiserror::Error;
use tokio::{sync::mpsc, task::spawn_local};
use tracing::warn;

type LocalCall<ThreadState> =
    Box<dyn FnOnce(Rc<ThreadState>) -> Pin<Box<dyn Future<Output = ()>>> + Send>;

struct CallRequest<ThreadState> {
    function: LocalCall<ThreadState>,
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum CallError {
    #[error("The thread-bound context is no longer running")]
    ChannelClosed,
    #[error("The call failed before it could return a value (it probably panicked): {0}")]
    CallFailed(String),
}

/// A runner that takes a non-`Send`, non-`Sync` state and makes it reachable from other tasks.
///
/// `ThreadBoundRunner` pins a `!Send + !Sync` state object (typically a presenter owned by a
/// UI thread) to the thread that created the runner, using `spawn_local`. The runner itself is
/// `Send + Sync` and cheap to clone, so background tasks can submit closures that operate on the
/// thread-bound state.
///
/// Calls are executed one at a time, in the order they were submitted. A call never starts
/// before the previous one has finished, and a call that panics does not prevent later calls
/// from running.
///
/// The runner must be created inside a local task context (a `tokio::task::LocalSet`).
///
/// # Example
/// ```ignore
/// let runner = ThreadBoundRunner::new(Rc::new(presenter));
///
/// tokio::spawn(async move {
///     runner
///         .run_in_thread(|presenter| async move { presenter.show_progress(false) })
///         .await
/// });
/// ```
pub struct ThreadBoundRunner<ThreadState> {
    call_channel_tx: mpsc::Sender<CallRequest<ThreadState>>,
}

impl<ThreadState> Clone for ThreadBoundRunner<ThreadState> {
    fn clone(&self) -> Self {
        Self {
            call_channel_tx: self.call_channel_tx.clone(),
        }
    }
}

impl<ThreadState> ThreadBoundRunner<ThreadState>
where
    ThreadState: 'static,
{
    /// Binds `state` to the current local task context.
    pub fn new(state: Rc<ThreadState>) -> Self {
        let (call_channel_tx, mut call_channel_rx) =
            mpsc::channel::<CallRequest<ThreadState>>(1);

        spawn_local(async move {
            while let Some(request) = call_channel_rx.recv().await {
                // Each call gets its own local task so a panic stays contained, and it is
                // awaited before the next request is taken.
                if let Err(e) = spawn_local((request.function)(state.clone())).await {
                    warn!("Thread-bound call did not complete: {e}");
                }
            }
        });

        ThreadBoundRunner { call_channel_tx }
    }

    /// Runs `function` against the thread-bound state and returns its output.
    pub async fn run_in_thread<F, Fut, Output>(&self, function: F) -> Result<Output, CallError>
    where
        F: FnOnce(Rc<ThreadState>) -> Fut + Send + 'static,
        Fut: Future<Output = Output> + 'static,
        Output: Send + 'static,
    {
        let (return_channel_tx, return_channel_rx) = tokio::sync::oneshot::channel();
        let request = CallRequest {
            function: Box::new(|state| {
                Box::pin(async move {
                    let result = function(state).await;
                    if return_channel_tx.send(result).is_err() {
                        warn!("ThreadBoundRunner failed to send result back to the caller");
                    }
                })
            }),
        };

        self.call_channel_tx
            .send(request)
            .await
            .map_err(|_| CallError::ChannelClosed)?;
        return_channel_rx
            .await
            .map_err(|e| CallError::CallFailed(e.to_string()))
    }
}
