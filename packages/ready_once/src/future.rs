use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::mem;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{self, Poll, Waker};

use crate::{LoadableResource, Settlement};

/// A one-shot handle to the eventual completion of a loadable resource.
///
/// The outcome becomes determined exactly once: either fulfilled (the
/// resource loaded) or rejected (the failure channel delivered a payload of
/// type `E`). Once settled, the future never changes its mind - later
/// notifications from the underlying resource are discarded.
///
/// Consumption works two ways, freely mixed:
///
/// * [`on_settled`][Self::on_settled] registers a continuation pair that runs
///   at settlement, or immediately if the future has already settled;
/// * the type is a [`Future`] with `Output = Result<(), E>`, so it can be
///   awaited.
///
/// Handles are cheap to clone and clones share the same settlement.
/// Everything is single-threaded; the type is neither `Send` nor `Sync`.
///
/// # Example
///
/// ```rust
/// use ready_once::{CompletionFuture, ResourceLoadFailure, SimulatedResource};
///
/// let image = SimulatedResource::<ResourceLoadFailure>::new();
/// let ready = CompletionFuture::wrap(&image);
/// assert!(!ready.is_settled());
///
/// image.fire_load();
/// assert!(ready.is_settled());
/// ```
pub struct CompletionFuture<E> {
    shared: Rc<RefCell<Shared<E>>>,
}

struct Shared<E> {
    settlement: Settlement<E>,

    /// Continuation pairs registered while still pending, in registration
    /// order. Drained exactly once, at settlement.
    continuations: Vec<ContinuationPair<E>>,

    /// The waker of whoever most recently polled the future while pending.
    awaiter: Option<Waker>,
}

struct ContinuationPair<E> {
    on_success: Box<dyn FnOnce()>,
    on_failure: Box<dyn FnOnce(E)>,
}

impl<E> ContinuationPair<E> {
    /// Runs the side of the pair matching the outcome, consuming the pair.
    fn run(self, outcome: Result<(), E>) {
        match outcome {
            Ok(()) => (self.on_success)(),
            Err(failure) => (self.on_failure)(failure),
        }
    }
}

impl<E> Shared<E>
where
    E: Clone,
{
    /// Settles the future, if it is still pending.
    ///
    /// The first settlement wins; any later call is a no-op, never an error.
    /// This is what absorbs a misbehaving resource firing both channels, or a
    /// stale failure arriving after the synchronous completion check already
    /// fulfilled the future.
    fn settle(shared: &Rc<RefCell<Self>>, outcome: Result<(), E>) {
        let (continuations, awaiter) = {
            let mut inner = shared.borrow_mut();

            if inner.settlement.is_settled() {
                return;
            }

            inner.settlement = match &outcome {
                Ok(()) => Settlement::Fulfilled,
                Err(failure) => Settlement::Rejected(failure.clone()),
            };

            (mem::take(&mut inner.continuations), inner.awaiter.take())
        };

        // The borrow is released before anything caller-provided runs, so a
        // continuation may re-enter the future (e.g. register another pair).
        for pair in continuations {
            pair.run(outcome.clone());
        }

        if let Some(waker) = awaiter {
            waker.wake();
        }
    }
}

impl<E> CompletionFuture<E> {
    /// Whether the outcome has been determined yet.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.shared.borrow().settlement.is_settled()
    }
}

impl<E> CompletionFuture<E>
where
    E: Clone + 'static,
{
    /// Wraps a resource in a future that settles exactly once.
    ///
    /// If the resource is already complete at call time, the future is
    /// fulfilled immediately and the success channel is never subscribed.
    /// Otherwise a success callback is registered. The failure channel is
    /// subscribed unconditionally either way; a stale failure arriving after
    /// a synchronous completion is discarded.
    ///
    /// Beyond the two subscriptions, the resource is not mutated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ready_once::{CompletionFuture, ResourceLoadFailure, SimulatedResource};
    ///
    /// let image = SimulatedResource::<ResourceLoadFailure>::completed();
    /// let ready = CompletionFuture::wrap(&image);
    ///
    /// // Already complete at wrap time, so already settled.
    /// assert!(ready.is_settled());
    /// ```
    #[must_use]
    pub fn wrap<R>(resource: &R) -> Self
    where
        R: LoadableResource<Error = E> + ?Sized,
    {
        let shared = Rc::new(RefCell::new(Shared {
            settlement: Settlement::Pending,
            continuations: Vec::new(),
            awaiter: None,
        }));

        if resource.is_complete() {
            // Completed before we could listen; the flag check closes the
            // race between registration and the load notification.
            Shared::settle(&shared, Ok(()));
        } else {
            let on_load = Rc::clone(&shared);
            resource.on_load_once(Box::new(move || Shared::settle(&on_load, Ok(()))));
        }

        let on_error = Rc::clone(&shared);
        resource.on_error_once(Box::new(move |failure| {
            Shared::settle(&on_error, Err(failure));
        }));

        Self { shared }
    }

    /// Registers a pair of continuations for the settlement.
    ///
    /// If the future has already settled, the matching continuation runs
    /// immediately, before this method returns. Otherwise the pair is queued
    /// and the matching side runs when the future settles; pairs queued this
    /// way run in registration order. Exactly one side of each pair ever
    /// runs, exactly once.
    ///
    /// The wrapper never raises errors of its own on this path; it only
    /// relays the payload delivered by the resource's failure channel.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ready_once::{CompletionFuture, ResourceLoadFailure, SimulatedResource};
    ///
    /// let image = SimulatedResource::new();
    /// let ready = CompletionFuture::wrap(&image);
    ///
    /// ready.on_settled(
    ///     || println!("image loaded"),
    ///     |failure: ResourceLoadFailure| eprintln!("{failure}"),
    /// );
    ///
    /// image.fire_error(ResourceLoadFailure::new("decode error"));
    /// ```
    pub fn on_settled(
        &self,
        on_success: impl FnOnce() + 'static,
        on_failure: impl FnOnce(E) + 'static,
    ) {
        let pair = ContinuationPair {
            on_success: Box::new(on_success),
            on_failure: Box::new(on_failure),
        };

        let replay = {
            let mut inner = self.shared.borrow_mut();

            match inner.settlement.outcome() {
                None => {
                    inner.continuations.push(pair);
                    None
                }
                Some(outcome) => Some((pair, outcome)),
            }
        };

        // The immediate path still runs outside the borrow, so the
        // continuation may touch this future again.
        if let Some((pair, outcome)) = replay {
            pair.run(outcome);
        }
    }
}

impl<E> Future for CompletionFuture<E>
where
    E: Clone + 'static,
{
    type Output = Result<(), E>;

    fn poll(self: Pin<&mut Self>, cx: &mut task::Context<'_>) -> Poll<Self::Output> {
        let mut inner = self.shared.borrow_mut();

        match inner.settlement.outcome() {
            Some(outcome) => Poll::Ready(outcome),
            None => {
                // Only the most recent waker is kept; re-polling replaces it.
                inner.awaiter = Some(cx.waker().clone());
                Poll::Pending
            }
        }
    }
}

// Clones share the settlement, so no bound on `E` is needed.
impl<E> Clone for CompletionFuture<E> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<E> fmt::Debug for CompletionFuture<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.shared.borrow();

        f.debug_struct("CompletionFuture")
            .field("settlement", &inner.settlement)
            .field("queued_continuations", &inner.continuations.len())
            .field("has_awaiter", &inner.awaiter.is_some())
            .finish()
    }
}
