// Weather-driven work suggestions

pub mod engine;
pub mod model;

pub use engine::{evaluate, MAX_SUGGESTIONS};
pub use model::{Category, Priority, Suggestion};
