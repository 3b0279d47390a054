/// A resource whose eventual success or failure can be observed.
///
/// This is the capability set a [`CompletionFuture`][crate::CompletionFuture]
/// consumes: a synchronously readable completion flag plus two one-time
/// notification channels. The archetype is an image element that exposes a
/// `complete` flag and fires `load`/`error` events, but anything with the
/// same shape can implement this.
///
/// # Contract
///
/// * [`is_complete`][Self::is_complete] is a synchronous read and must not
///   block.
/// * Each registered callback fires at most once per registration, and may
///   fire zero times when the other channel fires instead.
/// * The two channels are mutually exclusive for a well-behaved resource.
///   Consumers must nevertheless tolerate a misbehaving resource firing
///   both; [`CompletionFuture`][crate::CompletionFuture] discards whichever
///   notification arrives second.
/// * Registering a callback must not otherwise mutate the resource.
///
/// Everything is single-threaded: callbacks are not required to be `Send`
/// and implementations may use interior mutability freely.
pub trait LoadableResource {
    /// The payload delivered through the failure channel.
    type Error;

    /// Whether the resource has already completed loading.
    fn is_complete(&self) -> bool;

    /// Registers a one-time callback for the success channel.
    ///
    /// The callback is invoked when the resource finishes loading. It is not
    /// invoked retroactively if the resource was already complete at
    /// registration time; checking [`is_complete`][Self::is_complete] first
    /// is the caller's job.
    fn on_load_once(&self, callback: Box<dyn FnOnce()>);

    /// Registers a one-time callback for the failure channel.
    ///
    /// The callback receives whatever payload the resource delivers when
    /// loading fails.
    fn on_error_once(&self, callback: Box<dyn FnOnce(Self::Error)>);
}
