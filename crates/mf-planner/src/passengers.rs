//! Rider names with case-insensitive prefix search.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: BTreeMap<char, usize>,
    terminal: bool,
}

/// Registered passenger names, stored lowercased in an arena trie.
#[derive(Debug, Clone)]
pub struct PassengerRegistry {
    nodes: Vec<TrieNode>,
    names: usize,
}

impl Default for PassengerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PassengerRegistry {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            names: 0,
        }
    }

    /// Number of distinct names (case-insensitive).
    pub fn len(&self) -> usize {
        self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names == 0
    }

    /// Register a name. Returns `true` if it was not known yet.
    ///
    /// Names are case-insensitive; empty names are ignored.
    pub fn add_passenger(&mut self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }

        let mut current = 0;
        for c in name.chars().flat_map(char::to_lowercase) {
            current = match self.nodes[current].children.get(&c) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children.insert(c, next);
                    next
                }
            };
        }

        let node = &mut self.nodes[current];
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.names += 1;
        true
    }

    pub fn add_passengers<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.add_passenger(name.as_ref());
        }
    }

    /// Every registered name starting with `prefix`, ignoring case.
    ///
    /// Names come back capitalized and sorted. An empty prefix matches
    /// nothing.
    pub fn search(&self, prefix: &str) -> Vec<String> {
        if prefix.is_empty() {
            return Vec::new();
        }

        let lowered: String = prefix.chars().flat_map(char::to_lowercase).collect();
        let mut current = 0;
        for c in lowered.chars() {
            match self.nodes[current].children.get(&c) {
                Some(&next) => current = next,
                None => return Vec::new(),
            }
        }

        let mut found = Vec::new();
        let mut stack = vec![(current, lowered)];
        while let Some((index, word)) = stack.pop() {
            let node = &self.nodes[index];
            if node.terminal {
                found.push(capitalize(&word));
            }
            for (&c, &child) in &node.children {
                let mut next = word.clone();
                next.push(c);
                stack.push((child, next));
            }
        }

        found.sort();
        found
    }
}

/// First character uppercased, the rest lowercased.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
