use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of Fibonacci squares on the clock face
pub const SQUARE_COUNT: usize = 5;

/// Square values, indexed 0..4. Value 1 appears twice.
pub const FIBONACCI_SEQUENCE: [u32; SQUARE_COUNT] = [1, 1, 2, 3, 5];

/// Set of square indices. Each index is present at most once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexSet {
    mask: u8,
}

impl IndexSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every square selected
    pub fn full() -> Self {
        Self {
            mask: (1 << SQUARE_COUNT) - 1,
        }
    }

    /// Returns false if the index was already present or is out of range.
    pub fn insert(&mut self, index: usize) -> bool {
        if index >= SQUARE_COUNT || self.contains(index) {
            return false;
        }
        self.mask |= 1 << index;
        true
    }

    pub fn contains(&self, index: usize) -> bool {
        index < SQUARE_COUNT && self.mask & (1 << index) != 0
    }

    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..SQUARE_COUNT).filter(move |&i| self.contains(i))
    }

    /// Sum of the Fibonacci values of the selected squares
    pub fn value_sum(&self) -> u32 {
        self.iter().map(|i| FIBONACCI_SEQUENCE[i]).sum()
    }
}

impl FromIterator<usize> for IndexSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = IndexSet::new();
        for index in iter {
            set.insert(index);
        }
        set
    }
}

impl fmt::Display for IndexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indices: Vec<String> = self.iter().map(|i| i.to_string()).collect();
        write!(f, "{{{}}}", indices.join(", "))
    }
}

/// Display category of a single square
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SquareState {
    #[default]
    Inactive,
    HourOnly,
    MinuteOnly,
    Both,
}

impl SquareState {
    pub fn label(&self) -> &'static str {
        match self {
            SquareState::Inactive => "Inactive",
            SquareState::HourOnly => "Hours only",
            SquareState::MinuteOnly => "Minutes only",
            SquareState::Both => "Both hours and minutes",
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, SquareState::Inactive)
    }
}

impl fmt::Display for SquareState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-square states ordered by index
pub type ClockFace = [SquareState; SQUARE_COUNT];

/// Result of one clock tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockReading {
    pub hour_target: u32,
    pub minute_target: u32,
    pub hour_squares: IndexSet,
    pub minute_squares: IndexSet,
    pub face: ClockFace,
    pub time_text: String,
    pub date_text: String,
}
