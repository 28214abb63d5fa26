/// Finds the shortest prefix of `s` that, repeated some whole number of
/// times, rebuilds `s` exactly. Falls back to `s` itself when no shorter
/// prefix works.
///
/// Prefixes grow one character at a time and every repeat count up to the
/// input length is tried before growing again. That scan order is the
/// tie-break the star matcher depends on, so it stays as is.
pub fn find_repetition(s: &str) -> String {
    let length = s.chars().count();
    let mut unit = String::new();
    for c in s.chars() {
        unit.push(c);
        for count in 0..=length {
            if unit.repeat(count) == s {
                return unit;
            }
        }
    }
    unit
}
