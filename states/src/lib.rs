//! Typed state container shared by the business and UI crates.

mod basic_state;
mod ctx;
mod error;
mod state;

pub use basic_state::Time;
pub use ctx::StateCtx;
pub use error::Error;
pub use state::State;
