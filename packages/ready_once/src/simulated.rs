use std::cell::{Cell, RefCell};
use std::fmt;

use crate::LoadableResource;

/// An in-memory [`LoadableResource`] with a settable completion flag and
/// manually fired notification channels.
///
/// This is the crate's own test double and the demo vehicle for its examples.
/// It behaves like the archetypal image element: the completion flag flips to
/// true when the load notification fires, each registered callback is consumed
/// by its first firing, and firing a channel nobody has registered on is a
/// silent no-op — which is precisely the race
/// [`CompletionFuture`][crate::CompletionFuture] exists to close.
///
/// # Example
///
/// ```rust
/// use ready_once::{LoadableResource, ResourceLoadFailure, SimulatedResource};
///
/// let resource = SimulatedResource::<ResourceLoadFailure>::new();
/// assert!(!resource.is_complete());
///
/// resource.fire_load();
/// assert!(resource.is_complete());
/// ```
pub struct SimulatedResource<E> {
    complete: Cell<bool>,
    on_load: RefCell<Option<Box<dyn FnOnce()>>>,
    on_error: RefCell<Option<Box<dyn FnOnce(E)>>>,
}

impl<E> SimulatedResource<E> {
    /// Creates a resource that has not yet completed loading.
    #[must_use]
    pub fn new() -> Self {
        Self {
            complete: Cell::new(false),
            on_load: RefCell::new(None),
            on_error: RefCell::new(None),
        }
    }

    /// Creates a resource that had already completed before anyone could
    /// register a callback.
    #[must_use]
    pub fn completed() -> Self {
        let resource = Self::new();
        resource.complete.set(true);
        resource
    }

    /// Marks the resource complete without firing the success channel.
    ///
    /// This models a resource that finished loading before the observer even
    /// existed.
    pub fn mark_complete(&self) {
        self.complete.set(true);
    }

    /// Fires the success channel.
    ///
    /// Marks the resource complete and invokes the registered load callback,
    /// if any, consuming it. Firing with no registration is a no-op.
    pub fn fire_load(&self) {
        // Take the callback out before invoking it so a callback that
        // re-registers does not hit a borrow conflict.
        let callback = self.on_load.borrow_mut().take();

        self.complete.set(true);

        if let Some(callback) = callback {
            callback();
        }
    }

    /// Fires the failure channel with the given payload.
    ///
    /// Invokes the registered error callback, if any, consuming it. The
    /// payload is dropped if nobody registered.
    pub fn fire_error(&self, failure: E) {
        let callback = self.on_error.borrow_mut().take();

        if let Some(callback) = callback {
            callback(failure);
        }
    }
}

impl<E> LoadableResource for SimulatedResource<E> {
    type Error = E;

    fn is_complete(&self) -> bool {
        self.complete.get()
    }

    fn on_load_once(&self, callback: Box<dyn FnOnce()>) {
        *self.on_load.borrow_mut() = Some(callback);
    }

    fn on_error_once(&self, callback: Box<dyn FnOnce(E)>) {
        *self.on_error.borrow_mut() = Some(callback);
    }
}

impl<E> Default for SimulatedResource<E> {
    fn default() -> Self {
        Self::new()
    }
}

// The callback slots are not `Debug`, so only their presence is shown.
impl<E> fmt::Debug for SimulatedResource<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulatedResource")
            .field("complete", &self.complete.get())
            .field("has_load_callback", &self.on_load.borrow().is_some())
            .field("has_error_callback", &self.on_error.borrow().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use static_assertions::assert_not_impl_any;

    use super::*;
    use crate::ResourceLoadFailure;

    assert_not_impl_any!(SimulatedResource<ResourceLoadFailure>: Send, Sync);

    #[test]
    fn starts_incomplete_and_can_be_marked() {
        let resource = SimulatedResource::<ResourceLoadFailure>::new();
        assert!(!resource.is_complete());

        resource.mark_complete();
        assert!(resource.is_complete());
    }

    #[test]
    fn completed_constructor_starts_complete() {
        let resource = SimulatedResource::<ResourceLoadFailure>::completed();

        assert!(resource.is_complete());
    }

    #[test]
    fn fire_load_without_listener_still_marks_complete() {
        let resource = SimulatedResource::<ResourceLoadFailure>::new();

        // Nobody registered; the firing is lost, as in the original race.
        resource.fire_load();

        assert!(resource.is_complete());
    }

    #[test]
    fn load_callback_fires_at_most_once_per_registration() {
        let resource = SimulatedResource::<ResourceLoadFailure>::new();

        let invocations = Rc::new(Cell::new(0_u32));
        let counter = Rc::clone(&invocations);
        resource.on_load_once(Box::new(move || counter.set(counter.get() + 1)));

        resource.fire_load();
        resource.fire_load();

        assert_eq!(invocations.get(), 1);
    }

    #[test]
    fn error_callback_receives_payload_once() {
        let resource = SimulatedResource::<ResourceLoadFailure>::new();

        let delivered = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&delivered);
        resource.on_error_once(Box::new(move |failure| sink.borrow_mut().push(failure)));

        resource.fire_error(ResourceLoadFailure::new("first"));
        resource.fire_error(ResourceLoadFailure::new("second"));

        assert_eq!(
            *delivered.borrow(),
            vec![ResourceLoadFailure::new("first")]
        );
    }

    #[test]
    fn reregistration_allows_another_delivery() {
        let resource = SimulatedResource::<ResourceLoadFailure>::new();

        let invocations = Rc::new(Cell::new(0_u32));

        let counter = Rc::clone(&invocations);
        resource.on_load_once(Box::new(move || counter.set(counter.get() + 1)));
        resource.fire_load();

        let counter = Rc::clone(&invocations);
        resource.on_load_once(Box::new(move || counter.set(counter.get() + 1)));
        resource.fire_load();

        assert_eq!(invocations.get(), 2);
    }
}
