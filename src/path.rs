//! The linear result of a successful search.

use std::fmt;

/// A chain of configurations from the initial state to a solved one.
///
/// Adjacent states are connected by one legal move. Always holds at least
/// the initial state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolutionPath<P> {
    states: Vec<P>,
}

impl<P> SolutionPath<P> {
    pub(crate) fn from_states(states: Vec<P>) -> Self {
        debug_assert!(!states.is_empty(), "a solution path holds at least one state");
        Self { states }
    }

    /// Number of moves (edges) along the path.
    pub fn moves(&self) -> usize {
        self.states.len() - 1
    }

    /// Number of states along the path, including both ends.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn initial(&self) -> &P {
        &self.states[0]
    }

    pub fn solved(&self) -> &P {
        &self.states[self.states.len() - 1]
    }

    pub fn states(&self) -> &[P] {
        &self.states
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.states.iter()
    }

    pub fn into_states(self) -> Vec<P> {
        self.states
    }
}

impl<'a, P> IntoIterator for &'a SolutionPath<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// States separated by a blank line, initial state first.
impl<P: fmt::Display> fmt::Display for SolutionPath<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, state) in self.states.iter().enumerate() {
            if index > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{}", state)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let path = SolutionPath::from_states(vec!["a", "b", "c"]);
        assert_eq!(path.moves(), 2);
        assert_eq!(path.len(), 3);
        assert_eq!(*path.initial(), "a");
        assert_eq!(*path.solved(), "c");
        assert_eq!(path.iter().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_display_separates_states_with_blank_lines() {
        let path = SolutionPath::from_states(vec!["*2\n13", "12\n*3"]);
        assert_eq!(path.to_string(), "*2\n13\n\n12\n*3");
    }

    #[test]
    fn test_single_state_path() {
        let path = SolutionPath::from_states(vec![7]);
        assert_eq!(path.moves(), 0);
        assert_eq!(path.initial(), path.solved());
        assert_eq!(path.to_string(), "7");
    }
}
