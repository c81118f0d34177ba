//! Collaborators the store calls out to: clock, id generator, clipboard.

pub mod clipboard;
pub mod clock;
pub mod id_gen;

pub use clipboard::{ClipboardSink, MemoryClipboard};
pub use clock::{Clock, ManualClock, SystemClock};
pub use id_gen::{IdGenerator, SequentialIds, UuidGenerator};
