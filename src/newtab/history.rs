use std::collections::VecDeque;

use crate::colour::HexColour;

/// Number of colours kept by the ticker.
pub const HISTORY_LEN: usize = 10;

/// Recent page colours, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourHistory {
    colours: VecDeque<HexColour>,
    capacity: usize,
}

impl ColourHistory {
    /// Empty history holding at most `capacity` colours.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            colours: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records `colour` unless it repeats the newest entry.
    pub fn push(&mut self, colour: HexColour) {
        if self.colours.front() == Some(&colour) || self.capacity == 0 {
            return;
        }

        if self.colours.len() == self.capacity {
            self.colours.pop_back();
        }
        self.colours.push_front(colour);
    }

    /// Colours, newest first.
    pub fn colours(&self) -> impl Iterator<Item = HexColour> + '_ {
        self.colours.iter().copied()
    }

    /// Number of colours held.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Forgets every colour.
    pub fn clear(&mut self) {
        self.colours.clear();
    }
}

impl Default for ColourHistory {
    fn default() -> Self {
        Self::with_capacity(HISTORY_LEN)
    }
}
