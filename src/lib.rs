mod matcher;
mod parser;
mod permutations;
mod validator;

pub use matcher::{find_repetition, is_match};
pub use parser::{build_tree, locate_operator, Operator, ParseError, Policy, RegexTree};
pub use permutations::regex_permutations;
pub use validator::is_regex;
