//! Single-pass compiler from pattern strings to instruction programs.

use super::program::{Inst, Program};

/// Compile a glob pattern into a [`Program`].
///
/// Every input is a valid pattern, so compilation cannot fail. The pattern
/// is walked as characters, not bytes, so multi-byte characters compile to a
/// single [`Inst::Char`]. A backslash is special only directly before `*`;
/// before any other character (or at end of pattern) it is emitted as a
/// literal backslash and the following character is processed normally.
pub fn compile(pattern: &str) -> Program {
    let mut instructions = Vec::with_capacity(pattern.len() + 1);
    let mut escape = false;
    for c in pattern.chars() {
        if escape {
            escape = false;
            if c == '*' {
                instructions.push(Inst::Char('*'));
                continue;
            }
            instructions.push(Inst::Char('\\'));
        }
        match c {
            '*' => instructions.push(Inst::Split),
            '\\' => escape = true,
            _ => instructions.push(Inst::Char(c)),
        }
    }
    if escape {
        // Trailing backslash with nothing to escape is a literal.
        instructions.push(Inst::Char('\\'));
    }
    instructions.push(Inst::Match);
    Program { instructions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Inst::*;

    fn prog(instructions: Vec<Inst>) -> Program {
        Program { instructions }
    }

    #[test]
    fn empty_pattern_is_bare_match() {
        assert_eq!(compile(""), prog(vec![Match]));
    }

    #[test]
    fn single_literal() {
        assert_eq!(compile("a"), prog(vec![Char('a'), Match]));
    }

    #[test]
    fn wildcard_between_literals() {
        assert_eq!(compile("a*2"), prog(vec![Char('a'), Split, Char('2'), Match]));
    }

    #[test]
    fn leading_wildcard() {
        assert_eq!(compile("*a"), prog(vec![Split, Char('a'), Match]));
    }

    #[test]
    fn adjacent_wildcards_compile_to_two_splits() {
        assert_eq!(compile("**"), prog(vec![Split, Split, Match]));
    }

    #[test]
    fn escaped_star_is_literal() {
        assert_eq!(compile(r"\*"), prog(vec![Char('*'), Match]));
    }

    #[test]
    fn backslash_before_other_char_is_literal_backslash() {
        // The 'b' is reprocessed normally after the literal backslash.
        assert_eq!(
            compile(r"\b*"),
            prog(vec![Char('\\'), Char('b'), Split, Match])
        );
    }

    #[test]
    fn double_backslash_is_two_literal_backslashes() {
        // Second '\' re-arms the escape, then dangles and flushes as a literal.
        assert_eq!(compile(r"\\"), prog(vec![Char('\\'), Char('\\'), Match]));
    }

    #[test]
    fn dangling_trailing_backslash_is_literal() {
        assert_eq!(compile("a\\"), prog(vec![Char('a'), Char('\\'), Match]));
    }

    #[test]
    fn multibyte_char_is_one_instruction() {
        assert_eq!(compile("γ*"), prog(vec![Char('γ'), Split, Match]));
    }

    #[test]
    fn compile_is_deterministic() {
        for p in ["", "*", r"a\*b*", "/path/to*", r"\\**"] {
            assert_eq!(compile(p), compile(p), "pattern {p:?}");
        }
    }

    #[test]
    fn program_always_ends_in_exactly_one_match() {
        for p in ["", "*", "abc", r"\*", "a\\"] {
            let program = compile(p);
            let (last, rest) = program.instructions.split_last().unwrap();
            assert_eq!(*last, Match, "pattern {p:?}");
            assert!(!rest.contains(&Match), "pattern {p:?}");
        }
    }
}
