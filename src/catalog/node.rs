use crate::core::profile::Profile;

/// A link to an exclusively owned subtree
pub type Link = Option<Box<TreeNode>>;

/// One entry in the profile tree
#[derive(Debug)]
pub struct TreeNode {
    pub(crate) name: String,
    pub(crate) profile: Profile,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl TreeNode {
    pub fn leaf(name: impl Into<String>, profile: Profile) -> Self {
        Self {
            name: name.into(),
            profile,
            left: None,
            right: None,
        }
    }

    /// Full name in `"Last, First"` form
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }

    /// Number of nodes on the longest root-to-leaf path of this subtree.
    ///
    /// Counted level by level, so a chain-shaped tree does not deepen the stack.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level = vec![self];
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
        }
        height
    }

    /// Leftmost (smallest-keyed) node of this subtree
    pub fn min_node(&self) -> &TreeNode {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// Destructure into name and profile, dropping the child links.
    pub(crate) fn into_entry(self) -> (String, Profile) {
        (self.name, self.profile)
    }
}
