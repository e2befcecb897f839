/* src/config/tests/mod.rs */

pub use super::*;

mod parsing;
