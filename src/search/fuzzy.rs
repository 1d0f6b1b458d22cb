use std::sync::OnceLock;
use levenshtein_automata::{LevenshteinAutomatonBuilder, DFA, Distance};

/// Largest distance compiled into a DFA; wider searches use the dynamic-programming path
pub const MAX_DFA_DISTANCE: usize = 3;

static BUILDERS: [OnceLock<LevenshteinAutomatonBuilder>; MAX_DFA_DISTANCE + 1] =
    [const { OnceLock::new() }; MAX_DFA_DISTANCE + 1];

fn builder(max_distance: usize) -> &'static LevenshteinAutomatonBuilder {
    BUILDERS[max_distance]
        .get_or_init(|| LevenshteinAutomatonBuilder::new(max_distance as u8, false))
}

/// Automaton for fuzzy matching with edit distance
pub struct FuzzyAutomaton {
    /// The target term to match
    term: String,

    /// Maximum allowed edit distance
    max_edit_distance: usize,

    /// Built DFA for matching
    dfa: Option<DFA>,
}

impl FuzzyAutomaton {
    pub fn new(term: String, max_edit_distance: usize) -> Self {
        Self {
            term,
            max_edit_distance,
            dfa: None,
        }
    }

    /// Build the DFA when the distance is small enough to compile one
    pub fn build(&mut self) {
        if self.max_edit_distance <= MAX_DFA_DISTANCE {
            self.dfa = Some(builder(self.max_edit_distance).build_dfa(&self.term));
        }
    }

    /// Edit distance to `candidate` if it is within the maximum
    pub fn distance(&self, candidate: &str) -> Option<usize> {
        if let Some(dfa) = &self.dfa {
            let mut state = dfa.initial_state();

            for &byte in candidate.as_bytes() {
                state = dfa.transition(state, byte);
            }

            match dfa.distance(state) {
                Distance::Exact(d) => Some(d as usize),
                Distance::AtLeast(_) => None,
            }
        } else {
            let d = levenshtein_distance(&self.term, candidate);
            (d <= self.max_edit_distance).then_some(d)
        }
    }
}

/// Character-level Levenshtein distance
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let len_a = a.len();
    let len_b = b.len();

    if len_a == 0 {
        return len_b;
    }
    if len_b == 0 {
        return len_a;
    }

    let mut prev_row: Vec<usize> = (0..=len_b).collect();
    let mut curr_row = vec![0; len_b + 1];

    for i in 1..=len_a {
        curr_row[0] = i;

        for j in 1..=len_b {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };

            curr_row[j] = std::cmp::min(
                std::cmp::min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost,  // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len_b]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("comet", "comet"), 0);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("über", "uber"), 1);
    }

    #[test]
    fn test_transposition_costs_two() {
        assert_eq!(levenshtein_distance("teh", "the"), 2);
        let mut automaton = FuzzyAutomaton::new("teh".to_string(), 2);
        automaton.build();
        assert_eq!(automaton.distance("the"), Some(2));
    }

    #[test]
    fn test_dfa_agrees_with_dynamic_programming() {
        let candidates = ["nebula", "nebulae", "nabula", "fibula", "tabular", "neb", "nebulas"];
        for max in 1..=MAX_DFA_DISTANCE {
            let mut automaton = FuzzyAutomaton::new("nebula".to_string(), max);
            automaton.build();
            for candidate in candidates {
                let expected = levenshtein_distance("nebula", candidate);
                let expected = (expected <= max).then_some(expected);
                assert_eq!(automaton.distance(candidate), expected, "{} at {}", candidate, max);
            }
        }
    }

    #[test]
    fn test_wide_distance_falls_back() {
        let mut automaton = FuzzyAutomaton::new("kitten".to_string(), 5);
        automaton.build();
        assert!(automaton.dfa.is_none());
        assert_eq!(automaton.distance("sitting"), Some(3));
        assert_eq!(automaton.distance("kit"), Some(3));
    }
}
