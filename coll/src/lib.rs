#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Generic collection primitives used by the Warren simulation core.
//!
//! [`BidiMap`] is the two-way unique mapping behind the world's
//! actor-position index; [`MinHeap`] is the priority heap that turn-priority
//! and pathfinding extensions build on.

mod bidimap;
mod heap;

pub use bidimap::BidiMap;
pub use heap::{MinHeap, Prioritized};
