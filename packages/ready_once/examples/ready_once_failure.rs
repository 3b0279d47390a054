//! A load failure is relayed to the failure continuation, payload and all.

use ready_once::{CompletionFuture, ResourceLoadFailure, SimulatedResource};

fn main() {
    let image = SimulatedResource::new();
    let ready = CompletionFuture::wrap(&image);

    ready.on_settled(
        || println!("image loaded"),
        |failure: ResourceLoadFailure| eprintln!("load failed: {failure}"),
    );

    image.fire_error(ResourceLoadFailure::new("404 image not found"));
}
