pub mod dispatch;
pub mod input;

pub use dispatch::{Completion, DispatchState, SearchDispatcher, SearchTicket, SubmissionOutcome};
pub use input::{check_length, InputValidator, Keystroke, MAX_LETTERS, MIN_LETTERS};
