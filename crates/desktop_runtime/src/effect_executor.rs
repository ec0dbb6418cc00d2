//! Drains reducer-emitted [`RuntimeEffect`] batches through the desktop host.

use leptos::*;

use crate::{reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext};

/// Runs each queued batch in emission order whenever the reducer appends to the queue.
pub fn install(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        if runtime.effects.with(Vec::is_empty) {
            return;
        }
        // Effects that dispatch synchronously append to a fresh queue, not this batch.
        let batch = runtime
            .effects
            .try_update(std::mem::take)
            .unwrap_or_default();
        run_batch(runtime, batch);
    });
}

fn run_batch(runtime: DesktopRuntimeContext, batch: Vec<RuntimeEffect>) {
    let host = runtime.host.get_value();
    for effect in batch {
        host.run_runtime_effect(runtime, effect);
    }
}
