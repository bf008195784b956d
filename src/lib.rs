// Library surface for the drill binary and integration tests.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod game;
pub mod selector;
pub mod session;
pub mod store;
pub mod vocab;
