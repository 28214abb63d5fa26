// matching rules
//
// '0' | '1' | '2'  match the one-character string of the same symbol
// 'e'              matches the empty string only
// (r1|r2)          matches s when r1 or r2 matches the whole of s
// (r1.r2)          matches s when some split s = s1 + s2 has r1 matching s1
//                  and r2 matching s2
// r*               matches the empty string, or a repetition of strings
//                  matched by r

mod engine;
mod repetition;

pub use engine::is_match;
pub use repetition::find_repetition;
