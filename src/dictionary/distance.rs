//! Tree-path distance between two nodes, via parent links.

use crate::dictionary::node::NodeId;
use crate::dictionary::trie::Trie;

impl Trie {
    /// Number of parent steps from `id` up to the root; the root has depth 0.
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        let mut node = self.node(id)?;
        let mut depth = 0;
        while let Some(parent) = node.parent() {
            node = self.node(parent)?;
            depth += 1;
        }
        Some(depth)
    }

    /// Steps from `a` up to the lowest common ancestor plus steps from `b` up
    /// to the same ancestor.
    ///
    /// Returns 0 when either handle is absent or does not belong to this
    /// trie.
    ///
    /// ```
    /// use wordtrie::dictionary::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// for word in ["car", "cart", "part"] {
    ///     trie.insert(word).unwrap();
    /// }
    /// assert_eq!(trie.distance(trie.lookup("car"), trie.lookup("part")), 7);
    /// assert_eq!(trie.distance(trie.lookup("car"), trie.lookup("cart")), 1);
    /// ```
    pub fn distance(&self, a: Option<NodeId>, b: Option<NodeId>) -> usize {
        let (Some(mut a), Some(mut b)) = (a, b) else {
            return 0;
        };
        let (Some(mut depth_a), Some(mut depth_b)) = (self.depth(a), self.depth(b)) else {
            return 0;
        };

        let mut steps = 0;
        while depth_a > depth_b {
            a = self.parent_of(a);
            depth_a -= 1;
            steps += 1;
        }
        while depth_b > depth_a {
            b = self.parent_of(b);
            depth_b -= 1;
            steps += 1;
        }
        while a != b {
            a = self.parent_of(a);
            b = self.parent_of(b);
            steps += 2;
        }
        steps
    }

    // Only called below the root, where a parent always exists.
    fn parent_of(&self, id: NodeId) -> NodeId {
        self.node(id)
            .and_then(|node| node.parent())
            .unwrap_or(NodeId::ROOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie_with(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word).unwrap();
        }
        trie
    }

    #[test]
    fn test_depth() {
        let trie = trie_with(&["part"]);
        assert_eq!(trie.depth(NodeId::ROOT), Some(0));
        assert_eq!(trie.depth(trie.lookup("part").unwrap()), Some(4));
        assert_eq!(trie.depth(NodeId(42)), None);
    }

    #[test]
    fn test_distance_through_root() {
        let trie = trie_with(&["car", "cart", "part"]);
        let car = trie.lookup("car");
        let part = trie.lookup("part");
        assert_eq!(trie.distance(car, part), 7);
        assert_eq!(trie.distance(part, car), 7);
    }

    #[test]
    fn test_distance_below_root() {
        let trie = trie_with(&["cat", "car", "cart"]);
        assert_eq!(trie.distance(trie.lookup("cat"), trie.lookup("car")), 2);
        assert_eq!(trie.distance(trie.lookup("cat"), trie.lookup("cart")), 3);
        assert_eq!(trie.distance(trie.lookup("car"), trie.lookup("cart")), 1);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let trie = trie_with(&["car"]);
        assert_eq!(trie.distance(trie.lookup("car"), trie.lookup("car")), 0);
    }

    #[test]
    fn test_missing_handles() {
        let trie = trie_with(&["car"]);
        assert_eq!(trie.distance(trie.lookup("car"), trie.lookup("dog")), 0);
        assert_eq!(trie.distance(None, trie.lookup("car")), 0);
        assert_eq!(trie.distance(Some(NodeId(99)), trie.lookup("car")), 0);
    }
}
