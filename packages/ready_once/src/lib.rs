//! One-shot readiness futures for loadable resources.
//!
//! Event callbacks are the right tool for things that happen many times on the
//! same object. Completion is different: a resource finishes loading exactly
//! once, and it may already have finished before anyone gets around to
//! listening. Registering a "loaded" callback after that point means the
//! callback never runs.
//!
//! This crate wraps any such resource in a [`CompletionFuture`]: a handle
//! whose outcome becomes determined exactly once, whether the resource was
//! already complete at registration time or reaches completion later. The
//! resource only needs to offer the three capabilities captured by the
//! [`LoadableResource`] trait: a synchronous completion flag and one-time
//! success/failure notification channels.
//!
//! Everything here is single-threaded and cooperative. The future type is
//! deliberately neither `Send` nor `Sync`.
//!
//! # Continuation example
//!
//! ```rust
//! use ready_once::{CompletionFuture, ResourceLoadFailure, SimulatedResource};
//!
//! let image = SimulatedResource::<ResourceLoadFailure>::new();
//! let ready = CompletionFuture::wrap(&image);
//!
//! ready.on_settled(
//!     || println!("image loaded"),
//!     |failure| eprintln!("image failed to load: {failure}"),
//! );
//!
//! // Sometime later, the load notification arrives.
//! image.fire_load();
//! assert!(ready.is_settled());
//! ```
//!
//! # Already-complete example
//!
//! The race this crate exists to close: the resource finished before we
//! started listening. The completion flag check inside [`CompletionFuture::wrap`]
//! settles the future immediately and the continuation still runs.
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use ready_once::{CompletionFuture, ResourceLoadFailure, SimulatedResource};
//!
//! let image = SimulatedResource::<ResourceLoadFailure>::completed();
//! let ready = CompletionFuture::wrap(&image);
//!
//! let loaded = Rc::new(Cell::new(false));
//! let flag = Rc::clone(&loaded);
//! ready.on_settled(move || flag.set(true), |_failure| {});
//!
//! // The success continuation ran before `on_settled` returned.
//! assert!(loaded.get());
//! ```
//!
//! # Await example
//!
//! [`CompletionFuture`] is a `Future`, so it can also be awaited.
//!
//! ```rust
//! use futures::executor::block_on;
//! use ready_once::{CompletionFuture, ResourceLoadFailure, SimulatedResource};
//!
//! let image = SimulatedResource::<ResourceLoadFailure>::new();
//! let ready = CompletionFuture::wrap(&image);
//!
//! image.fire_load();
//!
//! assert!(block_on(ready).is_ok());
//! ```

mod failure;
mod future;
mod resource;
mod settlement;
mod simulated;
#[cfg(test)]
mod test_utils;

pub use failure::*;
pub use future::*;
pub use resource::*;
pub use simulated::*;

pub(crate) use settlement::*;
