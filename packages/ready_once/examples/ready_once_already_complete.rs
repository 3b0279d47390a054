//! The resource finished loading before anyone listened.
//!
//! A plain "loaded" callback registered at this point would never run; the
//! completion flag check inside `wrap` closes that race, so the continuation
//! runs anyway - immediately.

use ready_once::{CompletionFuture, ResourceLoadFailure, SimulatedResource};

fn main() {
    let image = SimulatedResource::<ResourceLoadFailure>::completed();

    let ready = CompletionFuture::wrap(&image);

    ready.on_settled(
        || println!("completed before we even started listening"),
        |failure| eprintln!("load failed: {failure}"),
    );
}
