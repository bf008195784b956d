pub mod core;
pub mod level;

// Re-export the main types for convenience
pub use core::{WordList, WordRecord};
pub use level::DifficultyLevel;
