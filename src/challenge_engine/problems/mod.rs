//! Problem families grouped by kind of skill drilled.
//!
//! Every public function follows the same signature:
//!
//! ```ignore
//! pub fn <name><S: UniformSource + ?Sized>(
//!     src: &mut S,
//!     difficulty: Difficulty,
//! ) -> Problem
//! ```
//!
//! The generator dispatches to these via `generator.rs`.

/// add, subtract, multiply, divide
pub mod arithmetic;
/// percent-of-number
pub mod percentage;
/// order of operations
pub mod simplify;
