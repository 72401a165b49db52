//! Best-completion search by frequency.

use crate::dictionary::alphabet::char_for;
use crate::dictionary::node::NodeId;
use crate::dictionary::trie::Trie;

/// Best candidate found so far during a completion scan.
#[derive(Debug, Default)]
struct CompletionSearch {
    suffix: String,
    frequency: u32,
}

impl CompletionSearch {
    fn offer(&mut self, buffer: &str, frequency: u32) {
        // Strictly greater: on a tie the earlier node in slot order wins.
        if frequency > self.frequency {
            self.suffix.clear();
            self.suffix.push_str(buffer);
            self.frequency = frequency;
        }
    }
}

impl Trie {
    /// The most frequent extension of `prefix`, as the characters to append.
    ///
    /// Only words strictly longer than the prefix qualify. The whole subtree
    /// below the prefix is scanned. Returns an empty string when the prefix
    /// contains an invalid character, is not a path in the trie, or has no
    /// stored extension.
    pub fn best_completion(&self, prefix: &str) -> String {
        let Some(start) = self.walk(prefix) else {
            return String::new();
        };

        let mut search = CompletionSearch::default();
        let mut buffer = String::new();
        self.scan_descendants(start, &mut buffer, &mut search);
        search.suffix
    }

    fn scan_descendants(&self, id: NodeId, buffer: &mut String, search: &mut CompletionSearch) {
        let Some(node) = self.node(id) else {
            return;
        };

        for (slot, child) in node.children() {
            buffer.push(char_for(slot));
            if let Some(child_node) = self.node(child)
                && child_node.is_terminal()
            {
                search.offer(buffer, child_node.frequency());
            }
            self.scan_descendants(child, buffer, search);
            buffer.pop();
        }
    }
}
