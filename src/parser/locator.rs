#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Bar,
    Dot,
    Star,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Prefer the binary operator inside the parentheses over a trailing
    /// star, keeping nested structure visible to the validator.
    Validator,
    /// Report a trailing star on a parenthesized composite as the top-level
    /// operator, so the tree builder wraps one `Star` per star.
    Builder,
}

/// Finds the top-level operator of a structurally valid regex string and its
/// character index. Returns `None` when the string carries no operator at
/// all (a bare base symbol, or anything shorter than two characters).
pub fn locate_operator(regex: &str, policy: Policy) -> Option<(Operator, usize)> {
    let chars: Vec<char> = regex.chars().collect();
    if chars.len() < 2 {
        return None;
    }

    if !chars.contains(&'(') || !chars.contains(&')') {
        // the only operator a parenthesis-free string can carry is '*'
        return chars
            .iter()
            .position(|&c| c == '*')
            .map(|i| (Operator::Star, i));
    }

    let trailing = chars.iter().rev().take_while(|&&c| c == '*').count();
    let body_end = chars.len() - trailing; // body = "(X)"
    let inner = &chars[1..body_end - 1];

    let mut nested = false;
    let mut depth = 0usize;
    let mut found = Vec::new();
    for (i, &c) in inner.iter().enumerate() {
        match c {
            '(' => {
                depth += 1;
                nested = true;
            }
            ')' => depth = depth.saturating_sub(1),
            '|' if depth == 0 => found.push((Operator::Bar, i + 1)),
            '.' if depth == 0 => found.push((Operator::Dot, i + 1)),
            _ => {}
        }
    }

    // a starred composite belongs to the star unless the inner span holds
    // two or more top-level binary operators
    if policy == Policy::Builder && trailing > 0 && found.len() <= 1 {
        return Some((Operator::Star, chars.len() - 1));
    }

    let top = if nested {
        found.first().copied()
    } else {
        // alternation is checked before concatenation when nothing is nested
        found
            .iter()
            .find(|(op, _)| *op == Operator::Bar)
            .or_else(|| found.first())
            .copied()
    };
    if top.is_some() {
        return top;
    }

    // no top-level binary operator: a starred composite, rightmost star wins
    chars
        .iter()
        .rposition(|&c| c == '*')
        .map(|i| (Operator::Star, i))
}
