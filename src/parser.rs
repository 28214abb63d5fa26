// syntax (like BNF)
//
// regex = '0' | '1' | '2' | 'e'
//       | regex '*'
//       | '(' regex '|' regex ')'
//       | '(' regex '.' regex ')'
//
// every binary operator is fully parenthesized; the alphabet is {0, 1, 2}
// and 'e' stands for the empty string

pub mod ast;
mod builder;
mod locator;

pub use ast::RegexTree;
pub use builder::{build_tree, ParseError};
pub use locator::{locate_operator, Operator, Policy};
