/// One directory rule of the policy tree.
///
/// `name` is matched against a single path segment, `files` against the declared file
/// names of a unit that resolves to this rule, `dirs` against the next segment.
/// Declaration order of `dirs` is match priority.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolicyNode {
    pub name: String,
    /// Empty means no file restriction.
    pub files: Vec<String>,
    pub dirs: Vec<PolicyNode>,
}

impl PolicyNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
            dirs: Vec::new(),
        }
    }

    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dirs(mut self, dirs: Vec<PolicyNode>) -> Self {
        self.dirs = dirs;
        self
    }

    pub fn restricts_files(&self) -> bool {
        !self.files.is_empty()
    }
}

/// The configured policy: a module prefix plus the top-level rules.
///
/// Built once from configuration and shared read-only for the rest of the run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolicyTree {
    /// Prefix stripped from incoming unit paths.
    pub module: String,
    pub root: Vec<PolicyNode>,
}

impl PolicyTree {
    pub fn new(module: impl Into<String>, root: Vec<PolicyNode>) -> Self {
        Self {
            module: module.into(),
            root,
        }
    }

    /// Visit every rule depth-first, in declaration order.
    pub fn walk(&self, mut visit: impl FnMut(&PolicyNode, usize)) {
        let mut stack: Vec<(&PolicyNode, usize)> =
            self.root.iter().rev().map(|n| (n, 0)).collect();
        while let Some((node, depth)) = stack.pop() {
            visit(node, depth);
            stack.extend(node.dirs.iter().rev().map(|n| (n, depth + 1)));
        }
    }
}

/// A compilation unit as presented by the host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitInput {
    /// Fully-qualified unit path, module prefix included.
    pub path: String,
    /// Declared file base names (no extension).
    pub files: Vec<String>,
}

impl UnitInput {
    pub fn new<I, S>(path: impl Into<String>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_visits_rules_in_declaration_order() {
        let tree = PolicyTree::new(
            "m",
            vec![
                PolicyNode::new("a").with_dirs(vec![PolicyNode::new("a1"), PolicyNode::new("a2")]),
                PolicyNode::new("b"),
            ],
        );
        let mut seen = Vec::new();
        tree.walk(|node, depth| seen.push((node.name.clone(), depth)));
        assert_eq!(
            seen,
            vec![
                ("a".to_string(), 0),
                ("a1".to_string(), 1),
                ("a2".to_string(), 1),
                ("b".to_string(), 0),
            ]
        );
    }
}
