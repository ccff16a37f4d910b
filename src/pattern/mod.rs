//! Glob pattern engine: compile a pattern to a small instruction program,
//! then run it as an NFA simulation against candidate strings.
//!
//! # Pattern syntax
//!
//! | Token  | Meaning                                      |
//! |--------|----------------------------------------------|
//! | `*`    | Zero or more of any character                |
//! | `\*`   | A literal `*`                                |
//! | `\`    | Before anything but `*`: a literal backslash |
//! | other  | That character, exactly                      |
//!
//! There are no character classes, alternation, or case folding; `*` is the
//! only metacharacter. Every string is a valid pattern, so [`compile`] is
//! infallible.
//!
//! Compile once, match many: a [`Program`] is immutable and can be matched
//! against any number of candidates. A [`Matcher`] keeps its working buffers
//! between calls so a scan over many names allocates only on the first few.

pub mod compiler;
pub mod matcher;
pub mod program;

pub use compiler::compile;
pub use matcher::{Matcher, match_one};
pub use program::{Inst, Program};
