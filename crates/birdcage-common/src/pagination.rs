//! Cursor pagination as a lazy stream of pages.
//!
//! [`paginate`] wraps a single-page fetch into a [`Stream`] that requests the
//! next page only when polled. Each step sends the most recent `next` cursor
//! (or the caller's initial cursor before any was seen) and records the
//! cursor the new page returns.
//!
//! The stream ends when either
//! - [`MAX_TIMELINE_ITERATIONS`] pages have been fetched, or
//! - the two most recently recorded cursors are equal: upstream has reached
//!   the end and keeps handing back the same token. The page that repeated
//!   the cursor is dropped rather than yielded.
//!
//! Every page is yielded as the full envelope, errors included, so callers see
//! failures without the stream ending early. Dropping the stream between pages
//! is always fine: nothing is held open across steps.

use std::future::Future;

use futures::Stream;
use futures::stream;
use smol_str::SmolStr;

use crate::response::ApiResponse;
use crate::types::Slice;


/// Hard ceiling on pages fetched by one pagination stream.
pub const MAX_TIMELINE_ITERATIONS: usize = 100;

/// Arguments of a paginated operation: anything with a replaceable cursor.
pub trait Paginated: Clone {
    /// The cursor these arguments currently request.
    fn cursor(&self) -> Option<&str>;

    /// Replace the cursor.
    fn set_cursor(&mut self, cursor: Option<SmolStr>);
}

/// Cursors recorded so far and the number of pages fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorHistory {
    seen: Vec<SmolStr>,
    iterations: usize,
}

impl CursorHistory {
    /// Record one fetched page and the `next` cursor it carried.
    pub fn record(&mut self, next: Option<SmolStr>) {
        self.iterations += 1;
        if let Some(next) = next {
            self.seen.push(next);
        }
    }

    /// The last two recorded cursors are the same.
    pub fn converged(&self) -> bool {
        matches!(self.seen.as_slice(), [.., a, b] if a == b)
    }

    /// No further page should be requested.
    pub fn exhausted(&self) -> bool {
        self.iterations >= MAX_TIMELINE_ITERATIONS || self.converged()
    }

    /// Most recently recorded cursor.
    pub fn latest(&self) -> Option<&SmolStr> {
        self.seen.last()
    }

    /// Pages fetched so far.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Cursors recorded so far, oldest first.
    pub fn seen(&self) -> &[SmolStr] {
        &self.seen
    }
}

struct State<A, F> {
    args: A,
    initial: Option<SmolStr>,
    fetch: F,
    history: CursorHistory,
}

/// Turn a single-page fetch into a stream of pages.
///
/// `args` supplies the initial cursor (if any) and every other argument;
/// `fetch` is called once per step with a copy whose cursor has been
/// replaced. Only one fetch is in flight at a time.
pub fn paginate<A, T, F, Fut>(args: A, fetch: F) -> impl Stream<Item = ApiResponse<Slice<T>>>
where
    A: Paginated,
    F: FnMut(A) -> Fut,
    Fut: Future<Output = ApiResponse<Slice<T>>>,
{
    let state = State {
        initial: args.cursor().map(SmolStr::new),
        args,
        fetch,
        history: CursorHistory::default(),
    };

    stream::unfold(state, |mut state| async move {
        if state.history.exhausted() {
            #[cfg(feature = "tracing")]
            tracing::debug!(pages = state.history.iterations(), "pagination limit reached");
            return None;
        }

        let mut args = state.args.clone();
        args.set_cursor(state.history.latest().cloned().or_else(|| state.initial.clone()));
        let page = (state.fetch)(args).await;

        state
            .history
            .record(page.data.as_ref().and_then(|slice| slice.cursors.next.clone()));
        if state.history.converged() {
            #[cfg(feature = "tracing")]
            tracing::debug!(pages = state.history.iterations(), "cursor repeated, end of timeline");
            return None;
        }
        Some((page, state))
    })
}
