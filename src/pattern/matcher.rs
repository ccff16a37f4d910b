//! NFA simulation of a compiled program against one candidate string.
//!
//! All string positions are **character** (not byte) indices: the candidate
//! is decoded once per call, so each step is O(1) and a whole match is linear
//! in the candidate length, with no backtracking.

use super::program::{Inst, Program};

/// One execution cursor through a program: an instruction index, a position
/// in the decoded candidate, and a liveness flag.
#[derive(Debug, Clone, Copy)]
struct Thread {
    pc: usize,
    sp: usize,
    dead: bool,
}

/// Runs compiled programs against candidate strings.
///
/// The matcher owns the working storage for the thread simulation and reuses
/// it across calls, so matching one program against many names settles into
/// zero allocation. It holds no state between calls other than buffer
/// capacity; every call starts from the single initial thread.
#[derive(Debug, Default)]
pub struct Matcher {
    threads: Vec<Thread>,
    spawned: Vec<Thread>,
    chars: Vec<char>,
}

impl Matcher {
    pub fn new() -> Self {
        Self {
            threads: Vec::with_capacity(64),
            spawned: Vec::with_capacity(16),
            chars: Vec::new(),
        }
    }

    /// Does `candidate` match the compiled pattern?
    ///
    /// Breadth-first simulation: each round steps every live thread once.
    /// The first thread to reach [`Inst::Match`] with the candidate fully
    /// consumed wins and the call returns immediately; when every thread is
    /// dead the candidate is rejected.
    pub fn is_match(&mut self, prog: &Program, candidate: &str) -> bool {
        self.chars.clear();
        self.chars.extend(candidate.chars());

        self.threads.clear();
        self.threads.push(Thread {
            pc: 0,
            sp: 0,
            dead: false,
        });
        let mut num_dead = 0;

        while self.threads.len() > num_dead {
            self.spawned.clear();
            for t in &mut self.threads {
                if t.dead {
                    continue;
                }
                match prog.instructions[t.pc] {
                    Inst::Char(c) => {
                        if t.sp >= self.chars.len() || self.chars[t.sp] != c {
                            t.dead = true;
                            num_dead += 1;
                            continue;
                        }
                        t.pc += 1;
                        t.sp += 1;
                    }
                    Inst::Match => {
                        if t.sp == self.chars.len() {
                            return true;
                        }
                        // Reached the end of the program with input left over.
                        t.dead = true;
                        num_dead += 1;
                    }
                    Inst::Split => {
                        // Zero-width branch continues in place; the consuming
                        // branch re-runs this split one character further in.
                        if t.sp < self.chars.len() {
                            self.spawned.push(Thread {
                                pc: t.pc,
                                sp: t.sp + 1,
                                dead: false,
                            });
                        }
                        t.pc += 1;
                    }
                }
            }
            self.threads.append(&mut self.spawned);
        }
        false
    }
}

/// One-shot match of a single candidate, with no buffer reuse.
///
/// For scans over many candidates, hold a [`Matcher`] instead.
pub fn match_one(prog: &Program, candidate: &str) -> bool {
    Matcher::new().is_match(prog, candidate)
}
