//! Lexical analysis and statement reconstruction.
//!
//! The pipeline, leaves first:
//! - [`stream`]: pushback character stream (bounded lookahead).
//! - [`token`]: the lexer's output unit, a reusable buffer plus a kind.
//! - [`lexer`]: one token per call, comments discarded, whitespace
//!   optionally skipped.
//! - [`funcs`]: O(1) recognizer for the fixed logging-function names.
//! - [`statement`]: consumes a recognized call through its `;` and
//!   re-serializes it with split string literals folded together.

pub mod funcs;
pub mod lexer;
pub mod statement;
pub mod stream;
pub mod token;
