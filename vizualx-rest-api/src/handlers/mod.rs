pub mod health;
pub mod sync;

// Re-export handler functions
pub use health::*;
pub use sync::*;
