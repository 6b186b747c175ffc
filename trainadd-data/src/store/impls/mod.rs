//! Implementations of [`CorpusStore`](super::CorpusStore).
//!
//! One file per implementation: `fs` for the real filesystem, `memory` for tests and dry runs.

mod fs;
mod memory;

pub use fs::FsStore;
pub use memory::MemoryStore;
