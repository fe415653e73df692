//! Result reveal engine
//!
//! - `timer` - single-owner deadline timer shared by every component
//! - `sequencer` - typewriter reveal state machine
//! - `scroll` - auto-scroll versus manual scroll arbitration
//!
//! Every component is driven by explicit `Instant`s: callers feed `tick(now)`
//! and sleep until `next_deadline()`.

pub mod scroll;
pub mod sequencer;
pub mod timer;

pub use scroll::{ScrollCommand, ScrollCoordinator, ScrollState};
pub use sequencer::{RevealEvent, RevealPhase, RevealSequencer, RevealState};
pub use timer::Timer;
