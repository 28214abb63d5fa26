#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegexTree {
    Leaf(char),
    Star(Box<RegexTree>),
    Bar(Box<RegexTree>, Box<RegexTree>),
    Dot(Box<RegexTree>, Box<RegexTree>),
}

impl RegexTree {
    pub fn star(child: RegexTree) -> RegexTree {
        RegexTree::Star(Box::new(child))
    }

    pub fn bar(left: RegexTree, right: RegexTree) -> RegexTree {
        RegexTree::Bar(Box::new(left), Box::new(right))
    }

    pub fn dot(left: RegexTree, right: RegexTree) -> RegexTree {
        RegexTree::Dot(Box::new(left), Box::new(right))
    }
}
