// tests/support/mod.rs
// Shared by several integration test binaries; each binary uses a subset, so
// unused items are allowed at the module level.
#[allow(dead_code, unused_imports)]
pub mod fixtures;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use mocks::*;
