mod engine;

pub use engine::{clean_items, run_clean};
