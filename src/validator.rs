use crate::parser::{locate_operator, Policy};

const BASIC_REGEXES: [&str; 8] = ["0", "1", "2", "e", "0*", "1*", "2*", "e*"];

/// Checks whether `s` is a syntactically valid regex. This is the gate in
/// front of `build_tree`: the builder assumes its input already passed here.
pub fn is_regex(s: &str) -> bool {
    let operators = s.matches(['|', '.']).count();
    let brackets = s.matches(['(', ')']).count();
    // every binary operator carries exactly one bracket pair
    if operators * 2 != brackets {
        return false;
    }

    // a close bracket may not precede the first open bracket
    let open = s.find('(').map_or(-1, |i| i as isize);
    let close = s.find(')').map_or(-1, |i| i as isize);
    if open > close {
        return false;
    }

    if s.is_empty() {
        return false;
    }
    if BASIC_REGEXES.contains(&s) {
        return true;
    }
    if let Some(body) = s.strip_suffix('*') {
        return is_regex(body);
    }
    if s.starts_with('(') && s.ends_with(')') {
        return composite_operands(s);
    }
    false
}

/// Both operands of a parenthesized composite must themselves be valid.
fn composite_operands(s: &str) -> bool {
    let Some((_, index)) = locate_operator(s, Policy::Validator) else {
        return false;
    };

    // an operand slice that falls out of range makes the composite invalid
    let in_range = index >= 2
        && index + 2 <= s.len()
        && s.is_char_boundary(index)
        && s.is_char_boundary(index + 1);
    if !in_range {
        return false;
    }

    is_regex(&s[1..index]) && is_regex(&s[index + 1..s.len() - 1])
}
