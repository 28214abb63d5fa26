use thiserror::Error;
use tracing::trace;

use super::ast::RegexTree;
use super::locator::{locate_operator, Operator, Policy};

const BASE_SYMBOLS: [char; 4] = ['0', '1', '2', 'e'];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("no top-level operator in `{0}`")]
    NoOperator(String),
    #[error("operand of `{operator}` is out of range in `{regex}`")]
    BadOperand { regex: String, operator: char },
    #[error("star operator without a trailing star in `{0}`")]
    MissingStar(String),
}

/// Builds the regex tree for a validated regex string. Validity is the
/// caller's responsibility; a malformed string comes back as a `ParseError`
/// instead of a wrong tree.
pub fn build_tree(regex: &str) -> Result<RegexTree, ParseError> {
    if let Some(symbol) = base_symbol(regex) {
        return Ok(RegexTree::Leaf(symbol));
    }

    let located = locate_operator(regex, Policy::Builder);
    trace!(regex, ?located, "building subtree");

    match located {
        Some((Operator::Bar, index)) => {
            let (left, right) = operands(regex, index, '|')?;
            Ok(RegexTree::bar(build_tree(left)?, build_tree(right)?))
        }
        Some((Operator::Dot, index)) => {
            let (left, right) = operands(regex, index, '.')?;
            Ok(RegexTree::dot(build_tree(left)?, build_tree(right)?))
        }
        Some((Operator::Star, _)) => {
            // strip exactly one star; a run of stars nests one node per star
            let child = regex
                .strip_suffix('*')
                .ok_or_else(|| ParseError::MissingStar(regex.to_owned()))?;
            Ok(RegexTree::star(build_tree(child)?))
        }
        None => Err(ParseError::NoOperator(regex.to_owned())),
    }
}

fn base_symbol(regex: &str) -> Option<char> {
    let mut chars = regex.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if BASE_SYMBOLS.contains(&c) => Some(c),
        _ => None,
    }
}

/// The operand slices strictly between the outer parentheses and the
/// operator at `index`.
fn operands(regex: &str, index: usize, operator: char) -> Result<(&str, &str), ParseError> {
    let in_range = index >= 2
        && index + 2 <= regex.len()
        && regex.is_char_boundary(index)
        && regex.is_char_boundary(index + 1)
        && regex.is_char_boundary(regex.len() - 1);
    if !in_range {
        return Err(ParseError::BadOperand {
            regex: regex.to_owned(),
            operator,
        });
    }
    Ok((&regex[1..index], &regex[index + 1..regex.len() - 1]))
}
