//! Example for README.md demonstration of basic `ready_once` usage.

use ready_once::{CompletionFuture, ResourceLoadFailure, SimulatedResource};

fn main() {
    let image = SimulatedResource::<ResourceLoadFailure>::new();
    let ready = CompletionFuture::wrap(&image);

    ready.on_settled(
        || println!("image loaded, growing it now"),
        |failure| eprintln!("we will have to live without the image: {failure}"),
    );

    // Sometime later, the load notification arrives and the success
    // continuation above runs.
    image.fire_load();
}
