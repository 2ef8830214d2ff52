//! Capabilities the engine consumes from its host.
//!
//! The engine never moves value or reads time on its own.  It calls a
//! [`TokenTransfer`] implementation to move assets and a [`Clock`] to
//! check deadlines, and optionally reports to an [`EventSink`].
//!
//! In-process implementations are provided for tests and simulations:
//! [`InMemoryBank`], [`SystemClock`], [`ManualClock`], [`RecordingSink`].

mod clock;
mod events;
mod memory;
mod transfer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use events::{EventSink, RecordingSink};
pub use memory::InMemoryBank;
pub use transfer::{TokenTransfer, TransferError};
