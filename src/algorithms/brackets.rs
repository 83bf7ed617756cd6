//! Stack based validation of balanced brackets.

/// What to do with characters that are neither opening nor closing brackets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForeignChars {
    /// skip them -- `"f(x[1])"` is balanced
    #[default]
    Ignore,
    /// any of them invalidates the input -- only `()[]{}` are accepted
    Reject,
}

/// the fixed correspondence between each closing bracket and the opener it must match
fn opener_for(closer: char) -> Option<char> {
    match closer {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _   => None,
    }
}

fn is_opener(c: char) -> bool {
    matches!(c, '(' | '[' | '{')
}

/// Tells if every bracket in `text` is closed by its matching counterpart, in the right order.
/// Non-bracket characters are ignored. See [is_balanced_with()].
pub fn is_balanced(text: &str) -> bool {
    is_balanced_with(text, ForeignChars::Ignore)
}

/// Openers are pushed; each closer pops and must match the popped opener. A mismatch or a pop on an
/// empty stack fails immediately and, once `text` is consumed, the stack must be empty.\
/// `foreign_chars` tells how to treat anything that is not one of `()[]{}`.
pub fn is_balanced_with(text: &str, foreign_chars: ForeignChars) -> bool {
    let mut stack = Vec::with_capacity(text.len() / 2);
    for c in text.chars() {
        if is_opener(c) {
            stack.push(c);
        } else if let Some(expected_opener) = opener_for(c) {
            if stack.pop() != Some(expected_opener) {
                return false;
            }
        } else if foreign_chars == ForeignChars::Reject {
            return false;
        }
    }
    stack.is_empty()
}


#[cfg(test)]
mod tests {

    //! Unit tests for [brackets](super) module

    use super::*;

    #[test]
    fn balanced_and_unbalanced() {
        assert!(is_balanced("({[]})"));
        assert!(is_balanced("()[]{}"));
        assert!(is_balanced(""));
        assert!(!is_balanced("(]"));
        assert!(!is_balanced("([)]"));
        assert!(!is_balanced("(("));
        assert!(!is_balanced("))"));
        assert!(!is_balanced("}"));
    }

    #[test]
    fn foreign_characters_policy() {
        assert!(is_balanced("fn main() { let v = [1, 2]; }"));
        assert!(is_balanced_with("f(x[1])", ForeignChars::Ignore));
        assert!(!is_balanced_with("f(x[1])", ForeignChars::Reject));
        assert!(is_balanced_with("([]{})", ForeignChars::Reject));
        assert!(is_balanced_with("", ForeignChars::Reject));
        assert_eq!(ForeignChars::default(), ForeignChars::Ignore);
    }
}
