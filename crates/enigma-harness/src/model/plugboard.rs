//! Model plugboard: a list of pairs.

/// Maximum pairs the model accepts.
const MAX_PAIRS: usize = 10;

/// Plugboard as an ordered list of pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelPlugboard {
    pairs: Vec<(char, char)>,
}

impl ModelPlugboard {
    /// Empty plugboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add each token that is two distinct letters, neither already used,
    /// while fewer than ten pairs are in place. An empty spec clears the
    /// board.
    pub fn configure(&mut self, spec: &str) {
        if spec.is_empty() {
            self.pairs.clear();
            return;
        }
        for token in spec.split(' ') {
            let chars: Vec<char> = token.chars().map(|c| c.to_ascii_uppercase()).collect();
            let &[a, b] = chars.as_slice() else {
                continue;
            };
            if !a.is_ascii_uppercase() || !b.is_ascii_uppercase() || a == b {
                continue;
            }
            if self.uses(a) || self.uses(b) || self.pairs.len() == MAX_PAIRS {
                continue;
            }
            self.pairs.push((a, b));
        }
    }

    fn uses(&self, c: char) -> bool {
        self.pairs.iter().any(|&(a, b)| a == c || b == c)
    }

    /// Partner of `c`, or `c` itself.
    pub fn swap(&self, c: char) -> char {
        for &(a, b) in &self.pairs {
            if c == a {
                return b;
            }
            if c == b {
                return a;
            }
        }
        c
    }

    /// Canonical form: each pair smaller letter first, pairs sorted.
    pub fn canonical(&self) -> String {
        let mut pairs: Vec<String> = self
            .pairs
            .iter()
            .map(|&(a, b)| if a < b { format!("{a}{b}") } else { format!("{b}{a}") })
            .collect();
        pairs.sort();
        pairs.join(" ")
    }
}
