//! # Host Capabilities
//!
//! Capability contracts between the Vigil front-end services and the host
//! editor's view plumbing.
//!
//! ## Philosophy
//!
//! - **Capabilities, not globals**: the selection, caret, and view are
//!   reached only through these traits; implementations are supplied by
//!   the host adapter and injected, never constructed internally
//! - **Narrow surface**: exactly the methods the services need, nothing
//!   speculative
//! - **Single-threaded**: the host delivers every callback on one logical
//!   thread; no locking appears anywhere in these contracts
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A rendering or layout API
//! - Text storage (the host owns the buffer content)
//! - A command grammar (the runner owns that)

pub mod caret;
pub mod location;
pub mod view;

pub use caret::{CaretCap, CaretDescriptor, CaretDisplay};
pub use location::{SelectionSpan, TextLocation};
pub use view::{BufferEvent, CommandRunner, EditorBufferCap, SelectionCap, TextViewCap};
