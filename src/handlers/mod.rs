//! HTTP request handlers.

mod health;
mod index;
mod moves;

pub use health::health;
pub use index::index;
pub use moves::suggest_move;
