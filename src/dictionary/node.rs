//! Trie vertices and the handles that address them.

use crate::dictionary::alphabet::ALPHABET_SIZE;

/// Handle to a node inside one [`Trie`](crate::dictionary::trie::Trie).
///
/// Handles are plain arena indices. They stay valid for the lifetime of the
/// trie that produced them because nodes are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root of every trie.
    pub const ROOT: NodeId = NodeId(0);
}

/// A single trie vertex.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) children: [Option<NodeId>; ALPHABET_SIZE],
    pub(crate) parent: Option<NodeId>,
    pub(crate) terminal: bool,
    pub(crate) frequency: u32,
}

impl Node {
    pub(crate) fn root() -> Self {
        Node {
            children: [None; ALPHABET_SIZE],
            parent: None,
            terminal: false,
            frequency: 0,
        }
    }

    pub(crate) fn with_parent(parent: NodeId) -> Self {
        Node {
            parent: Some(parent),
            ..Node::root()
        }
    }

    /// Child in `slot`, if one was ever created.
    pub fn child(&self, slot: usize) -> Option<NodeId> {
        self.children.get(slot).copied().flatten()
    }

    /// Existing children with their slots, in slot order.
    pub fn children(&self) -> impl Iterator<Item = (usize, NodeId)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(slot, child)| child.map(|id| (slot, id)))
    }

    /// Parent node; `None` only for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Whether a stored word ends here.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Insertion count of the word ending here; 0 for non-terminal nodes.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    pub(crate) fn record_occurrence(&mut self) -> bool {
        if self.terminal {
            self.frequency = self.frequency.saturating_add(1);
            false
        } else {
            self.terminal = true;
            self.frequency = 1;
            true
        }
    }
}
