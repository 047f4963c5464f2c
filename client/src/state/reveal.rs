//! Reply reveal timing for one submission.
//!
//! DESIGN
//! ======
//! The thinking timer and the assist request run together. The reply is
//! revealed only once both have finished; a failed request appends the
//! network fallback straight away and the timer then has nothing to do.
//! Both futures are parameters so the ordering can be driven by hand in
//! tests instead of by `gloo_timers` and `gloo_net`.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[cfg(any(test, feature = "hydrate"))]
use std::future::Future;

use leptos::prelude::*;

use super::chat::ChatState;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::AssistResponse;

/// Somewhere a [`ChatState`] can be updated from async code.
///
/// `apply` returns `None` once the state is gone (e.g. the owning signal
/// was disposed on unmount).
pub trait ChatCell {
    fn apply<R>(&self, f: impl FnOnce(&mut ChatState) -> R) -> Option<R>;
}

impl ChatCell for RwSignal<ChatState> {
    fn apply<R>(&self, f: impl FnOnce(&mut ChatState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Run the timer and request for `ticket` and apply their results.
///
/// Stale tickets are ignored by [`ChatState`], so a superseded or cancelled
/// submission leaves the conversation untouched.
#[cfg(any(test, feature = "hydrate"))]
pub async fn reveal_when_ready<C, T, Q>(chat: C, ticket: u64, timer: T, request: Q)
where
    C: ChatCell,
    T: Future<Output = ()>,
    Q: Future<Output = Result<AssistResponse, String>>,
{
    let request = async {
        match request.await {
            Ok(response) => chat.apply(|c| c.receive_response(ticket, response)).unwrap_or(false),
            Err(e) => {
                #[cfg(feature = "hydrate")]
                log::warn!("assist request failed: {e}");
                #[cfg(not(feature = "hydrate"))]
                let _ = e;
                let _ = chat.apply(|c| c.fail_submission(ticket));
                false
            }
        }
    };
    let ((), received) = futures::join!(timer, request);

    if received {
        let _ = chat.apply(|c| c.finish_thinking(ticket));
    }
}
