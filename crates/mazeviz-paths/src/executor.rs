//! Minimal executor: block on a future without pulling in a runtime.

use std::future::Future;
use std::task::{Context, Poll, Waker};

/// Drive `f` to completion on the current thread.
///
/// The future is spin-polled with a no-op waker, yielding the thread
/// between polls. This is enough for observers that only suspend briefly
/// (a timer, a channel hand-off); real applications with their own
/// runtime should `.await` [`search_async`](crate::search_async) instead.
pub fn block_on<F: Future>(f: F) -> F::Output {
    let mut f = std::pin::pin!(f);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        match f.as_mut().poll(&mut cx) {
            Poll::Ready(v) => return v,
            Poll::Pending => std::thread::yield_now(),
        }
    }
}
