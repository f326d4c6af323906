//! Question dataset: CSV loading, image resolution and display label remapping.

pub mod labels;
pub mod loader;
pub mod resolve;

pub use loader::{DroppedRow, LoadOptions, LoadOutcome, load_questions};
pub use resolve::{ImageResolver, Rejection, ResolverChain, StrategyKind};
