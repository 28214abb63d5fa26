use std::collections::HashSet;

use itertools::Itertools;

use crate::validator::is_regex;

const REGEX_CHARS: [char; 9] = ['0', '1', '2', 'e', '|', '.', '*', '(', ')'];

/// All permutations of `s` that form valid regexes. The enumeration is
/// factorial in the input length, so anything beyond a dozen characters is
/// impractical.
pub fn regex_permutations(s: &str) -> HashSet<String> {
    if s.chars().any(|c| !REGEX_CHARS.contains(&c)) {
        return HashSet::new();
    }

    let chars: Vec<char> = s.chars().collect();
    chars
        .iter()
        .permutations(chars.len())
        .map(|perm| perm.into_iter().collect::<String>())
        .filter(|candidate| is_regex(candidate))
        .collect()
}
