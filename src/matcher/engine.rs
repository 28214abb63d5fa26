use tracing::trace;

use super::repetition::find_repetition;
use crate::parser::RegexTree;

/// Decides whether `s` belongs to the language the tree denotes. Never
/// fails: any tree against any string yields a boolean.
pub fn is_match(tree: &RegexTree, s: &str) -> bool {
    match tree {
        RegexTree::Leaf('e') => s.is_empty(),
        RegexTree::Leaf(symbol) => {
            let mut chars = s.chars();
            chars.next() == Some(*symbol) && chars.next().is_none()
        }
        RegexTree::Bar(left, right) => is_match(left, s) || is_match(right, s),
        RegexTree::Dot(left, right) => match_concat(left, right, s),
        RegexTree::Star(child) => match_star(child, s),
    }
}

fn match_concat(left: &RegexTree, right: &RegexTree, s: &str) -> bool {
    if s.chars().count() == 1 {
        let left_star = matches!(left, RegexTree::Star(_));
        let right_star = matches!(right, RegexTree::Star(_));
        // a lone character is never split against a single starred side: the
        // star side takes the empty string and the other side takes the
        // character
        if left_star != right_star {
            return if left_star {
                is_match(left, "") && is_match(right, s)
            } else {
                is_match(left, s) && is_match(right, "")
            };
        }
    }

    // split-point search, left to right, including "left takes everything"
    (0..=s.len()).any(|i| {
        s.is_char_boundary(i) && is_match(left, &s[..i]) && is_match(right, &s[i..])
    })
}

fn match_star(child: &RegexTree, s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    match child {
        // each character must match one of the alternatives on its own;
        // only sound while every alternative is a single base symbol
        RegexTree::Bar(..) => s.chars().all(|c| is_match(child, &c.to_string())),
        _ => {
            let unit = find_repetition(s);
            trace!(unit = %unit, "star repetition unit");
            is_match(child, &unit)
        }
    }
}
