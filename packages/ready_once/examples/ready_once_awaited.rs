//! The completion future can also simply be awaited.

use futures::executor::block_on;
use ready_once::{CompletionFuture, ResourceLoadFailure, SimulatedResource};

fn main() {
    let image = SimulatedResource::<ResourceLoadFailure>::new();
    let ready = CompletionFuture::wrap(&image);

    // Settle before blocking - everything here is single-threaded, so an
    // unsettled future would wait forever.
    image.fire_load();

    match block_on(ready) {
        Ok(()) => println!("image is ready"),
        Err(failure) => eprintln!("load failed: {failure}"),
    }
}
