//! Compiled form of a glob pattern.

/// A single instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    /// Consume exactly one character equal to the payload, or fail.
    Char(char),
    /// The wildcard: fork into "consume one character and stay here" and
    /// "consume nothing and move on".
    Split,
    /// Accept iff the candidate is fully consumed at this point.
    Match,
}

/// A compiled pattern: a flat instruction sequence ending in one [`Inst::Match`].
///
/// Programs are immutable once compiled and hold no match state, so one
/// program may be shared read-only across any number of match calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub instructions: Vec<Inst>,
}
