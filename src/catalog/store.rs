use std::cmp::Ordering;
use std::collections::VecDeque;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog::node::{Link, TreeNode};
use crate::core::profile::Profile;
use crate::core::types::TraversalOrder;
use crate::matching::engine::{MatchingEngine, ProfileEvaluation};
use crate::utils::validation::MAX_TREE_HEIGHT;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Profile already exists: {0}")]
    DuplicateName(String),

    #[error("Cannot insert {0}: tree height would exceed {max}", max = MAX_TREE_HEIGHT)]
    TooDeep(String),

    #[error("Failed to read snapshot: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse snapshot: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Failed to write snapshot: {0}")]
    WriteError(std::io::Error),
}

/// Snapshot version for compatibility checking
pub const SNAPSHOT_VERSION: &str = "1.0.0";

/// The two unknown DNA sequences every profile is matched against.
///
/// Set once when the store is built; there are no setters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnknownSequences {
    first: String,
    second: String,
}

impl UnknownSequences {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }
}

/// Serializable snapshot format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreData {
    pub version: String,
    pub created_at: String,
    pub first_unknown: String,
    pub second_unknown: String,
    /// Profiles in level order
    pub profiles: Vec<ProfileEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileEntry {
    pub name: String,
    pub profile: Profile,
}

/// Profiles keyed by full name, held in an unbalanced binary search tree.
///
/// Every key in a node's left subtree sorts strictly before the node's key and
/// every key in its right subtree strictly after. Keys are unique.
#[derive(Debug, Default)]
pub struct ProfileStore {
    root: Link,
    unknowns: UnknownSequences,
    len: usize,
}

impl ProfileStore {
    /// Create an empty store for the given unknown sequences
    pub fn new(unknowns: UnknownSequences) -> Self {
        Self {
            root: None,
            unknowns,
            len: 0,
        }
    }

    pub fn unknowns(&self) -> &UnknownSequences {
        &self.unknowns
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    /// Number of profiles in the store
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree; 0 when empty
    pub fn height(&self) -> usize {
        self.root().map_or(0, TreeNode::height)
    }

    /// Insert a profile under `name`.
    ///
    /// No rebalancing is done, so the shape of the tree follows insertion order.
    /// Names inserted in sorted order build a chain whose height equals the
    /// number of profiles. Insert and remove recurse once per level, so the
    /// height is capped at [`MAX_TREE_HEIGHT`].
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateName` if `name` is already present, or
    /// `CatalogError::TooDeep` if the new node would sit below
    /// `MAX_TREE_HEIGHT`. The tree is left untouched in both cases.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        profile: Profile,
    ) -> Result<(), CatalogError> {
        let name = name.into();

        // Walk down iteratively first, so the recursive insert never sees a
        // duplicate or goes deeper than the limit
        let mut depth = 1;
        let mut node = self.root();
        while let Some(current) = node {
            node = match name.as_str().cmp(current.name()) {
                Ordering::Less => current.left(),
                Ordering::Greater => current.right(),
                Ordering::Equal => return Err(CatalogError::DuplicateName(name)),
            };
            depth += 1;
        }
        if depth > MAX_TREE_HEIGHT {
            return Err(CatalogError::TooDeep(name));
        }

        debug!("Inserting {name} with {} STRs", profile.strs().len());
        self.root = Some(insert_node(self.root.take(), name, profile));
        self.len += 1;
        Ok(())
    }

    /// Look up a profile by full name
    pub fn get(&self, name: &str) -> Option<&Profile> {
        let mut node = self.root();
        while let Some(current) = node {
            node = match name.cmp(current.name()) {
                Ordering::Less => current.left(),
                Ordering::Greater => current.right(),
                Ordering::Equal => return Some(current.profile()),
            };
        }
        None
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Smallest name in the store
    pub fn first_name(&self) -> Option<&str> {
        self.root().map(|root| root.min_node().name())
    }

    /// Breadth-first walk: root, then each level left to right
    pub fn level_order(&self) -> LevelOrder<'_> {
        LevelOrder::new(self.root())
    }

    /// Walk in ascending name order
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder::new(self.root())
    }

    /// All names in the requested order
    pub fn names(&self, order: TraversalOrder) -> Vec<String> {
        match order {
            TraversalOrder::Level => self.level_order().map(|n| n.name().to_string()).collect(),
            TraversalOrder::In => self.in_order().map(|n| n.name().to_string()).collect(),
        }
    }

    /// Count profiles whose flag equals `is_of_interest`
    pub fn count_by_interest(&self, is_of_interest: bool) -> usize {
        self.level_order()
            .filter(|node| node.profile().is_of_interest() == is_of_interest)
            .count()
    }

    /// Names of profiles whose flag equals `is_of_interest`, in level order
    pub fn names_by_interest(&self, is_of_interest: bool) -> Vec<String> {
        self.level_order()
            .filter(|node| node.profile().is_of_interest() == is_of_interest)
            .map(|node| node.name().to_string())
            .collect()
    }

    /// Run the matching engine over every profile and flag the ones of interest.
    ///
    /// Flags are only ever set, never cleared, so repeated calls are stable.
    /// Returns the number of profiles flagged after the pass.
    pub fn flag_profiles_of_interest(&mut self) -> usize {
        let engine = MatchingEngine::new(&self.unknowns);
        let mut newly_flagged = 0;

        for_each_in_order_mut(&mut self.root, |name, profile| {
            if engine.flag(profile) {
                debug!("Flagged {name} as of interest");
                newly_flagged += 1;
            }
        });

        let flagged = self.count_by_interest(true);
        info!(
            "Flagging pass marked {newly_flagged} new profiles ({flagged} of {} of interest)",
            self.len
        );
        flagged
    }

    /// Evaluate every profile against the unknown sequences without touching
    /// any flag. Results are in name order.
    pub fn evaluations(&self) -> Vec<(String, ProfileEvaluation)> {
        let engine = MatchingEngine::new(&self.unknowns);
        self.in_order()
            .map(|node| (node.name().to_string(), engine.evaluate(node.profile())))
            .collect()
    }

    /// Remove the profile stored under `name`.
    ///
    /// A node with two children takes the name and profile of its in-order
    /// successor, which is then spliced out of the right subtree. Removing a
    /// name that is not present is a no-op and returns `None`.
    pub fn remove_by_name(&mut self, name: &str) -> Option<Profile> {
        let mut removed = None;
        self.root = remove_node(self.root.take(), name, &mut removed);

        if removed.is_some() {
            self.len -= 1;
            debug!("Removed {name}");
        }
        removed
    }

    /// Remove every profile that is not flagged of interest.
    ///
    /// The unmarked names are collected before any removal starts. Returns the
    /// removed names in the order they were removed.
    pub fn cleanup_tree(&mut self) -> Vec<String> {
        let unmarked = self.names_by_interest(false);
        for name in &unmarked {
            self.remove_by_name(name);
        }

        info!(
            "Removed {} unmarked profiles, {} remain",
            unmarked.len(),
            self.len
        );
        unmarked
    }

    /// Load a store from a JSON snapshot file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ReadError` if the file cannot be read,
    /// `CatalogError::ParseError` if it is not a valid snapshot, or
    /// `CatalogError::DuplicateName` if it lists a name twice.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a store from a JSON snapshot
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` on malformed JSON or
    /// `CatalogError::DuplicateName` if a name appears twice.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: StoreData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != SNAPSHOT_VERSION {
            warn!(
                "Snapshot version mismatch (expected {}, found {})",
                SNAPSHOT_VERSION, data.version
            );
        }

        let mut store = Self::new(UnknownSequences::new(
            data.first_unknown,
            data.second_unknown,
        ));
        for entry in data.profiles {
            store.insert(entry.name, entry.profile)?;
        }

        info!("Loaded {} profiles from snapshot", store.len());
        Ok(store)
    }

    /// Export the store to JSON
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = StoreData {
            version: SNAPSHOT_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            first_unknown: self.unknowns.first.clone(),
            second_unknown: self.unknowns.second.clone(),
            profiles: self
                .level_order()
                .map(|node| ProfileEntry {
                    name: node.name().to_string(),
                    profile: node.profile().clone(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Write a JSON snapshot to `path`, replacing it atomically
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::WriteError` if the temporary file cannot be
    /// written or moved into place.
    pub fn write_to_file(&self, path: &Path) -> Result<(), CatalogError> {
        let json = self.to_json()?;
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut file = tempfile::NamedTempFile::new_in(dir).map_err(CatalogError::WriteError)?;
        writeln!(file, "{json}").map_err(CatalogError::WriteError)?;
        file.persist(path)
            .map_err(|e| CatalogError::WriteError(e.error))?;
        Ok(())
    }
}

impl Drop for ProfileStore {
    // Drop nodes one at a time; the default drop of a chain-shaped tree would
    // recurse once per level
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Insert below `node` and return the new subtree root
fn insert_node(node: Link, name: String, profile: Profile) -> Box<TreeNode> {
    let Some(mut node) = node else {
        return Box::new(TreeNode::leaf(name, profile));
    };

    match name.cmp(&node.name) {
        Ordering::Less => node.left = Some(insert_node(node.left.take(), name, profile)),
        Ordering::Greater => node.right = Some(insert_node(node.right.take(), name, profile)),
        // Duplicates are rejected before descent
        Ordering::Equal => {}
    }
    node
}

/// Remove `name` below `node` and return the new subtree root
fn remove_node(node: Link, name: &str, removed: &mut Option<Profile>) -> Link {
    let mut node = node?;

    match name.cmp(node.name.as_str()) {
        Ordering::Less => node.left = remove_node(node.left.take(), name, removed),
        Ordering::Greater => node.right = remove_node(node.right.take(), name, removed),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, child) | (child, None) => {
                let (_, profile) = (*node).into_entry();
                *removed = Some(profile);
                return child;
            }
            (Some(left), Some(right)) => {
                let (rest, successor) = remove_min(right);
                let (successor_name, successor_profile) = (*successor).into_entry();
                node.name = successor_name;
                *removed = Some(std::mem::replace(&mut node.profile, successor_profile));
                node.left = Some(left);
                node.right = rest;
            }
        },
    }
    Some(node)
}

/// Splice the leftmost node out of a subtree.
///
/// Returns the new subtree root and the detached minimum node.
fn remove_min(mut node: Box<TreeNode>) -> (Link, Box<TreeNode>) {
    match node.left.take() {
        None => {
            let right = node.right.take();
            (right, node)
        }
        Some(left) => {
            let (rest, min) = remove_min(left);
            node.left = rest;
            (Some(node), min)
        }
    }
}

/// Visit every profile in name order with an explicit stack.
///
/// Each stacked entry holds a node's name, its profile and its still-unvisited
/// right subtree, split out so the left subtree can be borrowed independently.
fn for_each_in_order_mut<F>(link: &mut Link, mut f: F)
where
    F: FnMut(&str, &mut Profile),
{
    let mut stack: Vec<(&str, &mut Profile, Option<&mut TreeNode>)> = Vec::new();
    let mut current = link.as_deref_mut();

    loop {
        while let Some(node) = current {
            let TreeNode {
                name,
                profile,
                left,
                right,
            } = node;
            stack.push((name.as_str(), profile, right.as_deref_mut()));
            current = left.as_deref_mut();
        }

        let Some((name, profile, right)) = stack.pop() else {
            break;
        };
        f(name, profile);
        current = right;
    }
}

/// Level-order iterator backed by a queue; vacant children are never enqueued
pub struct LevelOrder<'a> {
    queue: VecDeque<&'a TreeNode>,
}

impl<'a> LevelOrder<'a> {
    fn new(root: Option<&'a TreeNode>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for LevelOrder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }
}

/// In-order iterator using an explicit stack of pending ancestors
pub struct InOrder<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> InOrder<'a> {
    fn new(root: Option<&'a TreeNode>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a TreeNode>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node)
    }
}
