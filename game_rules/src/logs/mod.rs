//! Log stores - the estate's record of past events.
//!
//! Three stores are kept side by side:
//! - **Estate logs**: global happenings with no particular owner
//! - **Character logs**: events belonging to a single character
//! - **Relationship logs**: interactions between two characters, stored mirrored
//!   under both participants

mod entry;
mod stores;
mod timeframe;

pub use entry::*;
pub use stores::*;
pub use timeframe::*;
