//! Character trie for dictionary and abbreviation lookup
//!
//! Nodes live in one contiguous vector and refer to their children by
//! index, so lookups never allocate.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child nodes: char -> node index
    children: HashMap<char, u32>,
    /// Whether a stored word ends here
    is_end: bool,
}

/// Word trie with optional case folding
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    case_sensitive: bool,
    words: usize,
}

impl Trie {
    /// Create an empty trie
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            case_sensitive,
            words: 0,
        }
    }

    /// Build a trie from a list of words
    pub fn from_words<I, S>(words: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new(case_sensitive);
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Insert a word; empty words are ignored
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut current = 0u32;
        for ch in word.chars() {
            let ch = self.fold(ch);
            current = match self.nodes[current as usize].children.get(&ch) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::default());
                    self.nodes[current as usize].children.insert(ch, child);
                    child
                }
            };
        }

        let node = &mut self.nodes[current as usize];
        if !node.is_end {
            node.is_end = true;
            self.words += 1;
        }
    }

    /// Whether `word` was inserted
    pub fn contains(&self, word: &str) -> bool {
        self.contains_chars(word.chars())
    }

    /// Whether the characters spell an inserted word
    pub fn contains_chars(&self, chars: impl IntoIterator<Item = char>) -> bool {
        let mut current = 0u32;
        for ch in chars {
            match self.child(current, ch) {
                Some(next) => current = next,
                None => return false,
            }
        }
        current != 0 && self.nodes[current as usize].is_end
    }

    /// Length in chars of the longest stored word that prefixes `chars`
    ///
    /// Returns 0 when no stored word matches.
    pub fn longest_prefix(&self, chars: impl IntoIterator<Item = char>) -> usize {
        let mut current = 0u32;
        let mut longest = 0;

        for (depth, ch) in chars.into_iter().enumerate() {
            match self.child(current, ch) {
                Some(next) => current = next,
                None => break,
            }
            if self.nodes[current as usize].is_end {
                longest = depth + 1;
            }
        }

        longest
    }

    /// Number of distinct words stored
    pub fn len(&self) -> usize {
        self.words
    }

    /// Whether no words are stored
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Whether lookups fold case
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    #[inline]
    fn child(&self, node: u32, ch: char) -> Option<u32> {
        self.nodes[node as usize]
            .children
            .get(&self.fold(ch))
            .copied()
    }

    #[inline]
    fn fold(&self, ch: char) -> char {
        if self.case_sensitive {
            ch
        } else {
            ch.to_lowercase().next().unwrap_or(ch)
        }
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let trie = Trie::from_words(["cat", "catalog", "dog"], true);
        assert!(trie.contains("cat"));
        assert!(trie.contains("catalog"));
        assert!(!trie.contains("cata"));
        assert!(!trie.contains(""));
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn test_case_folding() {
        let trie = Trie::from_words(["Dr", "e.g"], false);
        assert!(trie.contains("dr"));
        assert!(trie.contains("DR"));
        assert!(trie.contains("E.G"));

        let strict = Trie::from_words(["Dr"], true);
        assert!(!strict.contains("dr"));
    }

    #[test]
    fn test_longest_prefix() {
        let trie = Trie::from_words(["吾輩", "吾", "名前"], true);
        assert_eq!(trie.longest_prefix("吾輩は".chars()), 2);
        assert_eq!(trie.longest_prefix("吾は".chars()), 1);
        assert_eq!(trie.longest_prefix("猫".chars()), 0);
        assert_eq!(trie.longest_prefix("".chars()), 0);
    }

    #[test]
    fn test_duplicates_counted_once() {
        let mut trie = Trie::new(true);
        trie.insert("a");
        trie.insert("a");
        trie.insert("");
        assert_eq!(trie.len(), 1);
    }
}
