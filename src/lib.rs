//! ## About
//!
//! Two small, independent data structures:
//!
//! * [CircularQueue] – a FIFO queue in a circular array that doubles its capacity when full
//! * [Tree] – a multiway tree with size computation and pre-, post- and in-order traversals
//!   driven by a [Visitor]
//!
//! Neither structure is thread-safe; both own their elements exclusively.
//!
//! ## Logging
//!
//! Operations emit [tracing](https://docs.rs/tracing) spans and events (mostly at `trace` and
//! `debug` level). The crate never installs a subscriber.
//!
//! ## Naming conventions
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms with the exception of getters and factories, which
//!             use substantives (i.e., omit a `get_` prefix) much like the standard library.
//!             Iterator factories have an `iter_` prefix

pub mod errors;
pub mod queue;
pub mod tree;

pub use errors::{Result, StructureError};
pub use queue::{CircularQueue, DEFAULT_CAPACITY};
pub use tree::{InorderIterator, Node, PostorderIterator, PreorderIterator, Tree, Visitor};
