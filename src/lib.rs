//! # Introduction
//!
//! klogscan scans C source trees for invocations of kernel logging and
//! diagnostic functions (`printk` and friends, the `dev_*` family, ACPI
//! trace macros) and reprints each call as a single line with adjacent
//! string literals concatenated, for cross-referencing emitted log
//! strings against a known-message database.
//!
//! ## Scan pipeline
//!
//! ```text
//! bytes → CharStream → Lexer → Token → FuncTable gate → reconstruct → line
//! ```
//!
//! 1. [`scanner::stream`] — character stream with stack-ordered pushback.
//! 2. [`scanner::lexer`] — tokenizes a C subset: comments, three integer
//!    bases, string/char literals with two escape policies, multi
//!    character operators, preprocessor leaders.
//! 3. [`scanner::funcs`] — collision-free hash table classifying
//!    identifiers as known logging functions in O(1).
//! 4. [`scanner::statement`] — consumes a recognized call through its
//!    terminating `;` and folds split string literals into one message.
//! 5. [`scan`] — per-file driver holding the run's options and counters.
//! 6. [`walk`] — file/directory traversal with the `.c`/`.h`/`.cpp`
//!    allow-list.
//!
//! This is not a C parser: no AST, no macro expansion, no type or scope
//! tracking. The lexer knows just enough syntax to never lose
//! synchronization with the source while hunting call expressions.

pub mod scan;
pub mod scanner;
pub mod walk;
