//! Collection wrapper types for displaying groups of domain objects.
//!
//! The selection-oriented wrappers ([`Snakes`], [`Cages`], [`Matches`])
//! number their entries from 1 so the console can ask the user to pick an
//! entry by the number shown.

use std::fmt;

use crate::models::{BookingSummary, Cage, CageMatch, Snake};

/// Newtype wrapper for displaying a numbered list of snakes.
pub struct Snakes(pub Vec<Snake>);

impl Snakes {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of snakes in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the snake at the given zero-based index.
    pub fn get(&self, index: usize) -> Option<&Snake> {
        self.0.get(index)
    }
}

impl fmt::Display for Snakes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No snakes found.")
        } else {
            for (idx, snake) in self.0.iter().enumerate() {
                write!(f, "{}. {}", idx + 1, snake)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a host's cages with their windows.
pub struct Cages(pub Vec<Cage>);

impl Cages {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of cages in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the cage at the given zero-based index.
    pub fn get(&self, index: usize) -> Option<&Cage> {
        self.0.get(index)
    }
}

impl fmt::Display for Cages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No cages found.")
        } else {
            for cage in &self.0 {
                write!(f, "{}", cage)?;
                writeln!(f)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying availability search results as a numbered
/// selection list.
pub struct Matches(pub Vec<CageMatch>);

impl Matches {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of matches in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the match at the given zero-based index.
    pub fn get(&self, index: usize) -> Option<&CageMatch> {
        self.0.get(index)
    }
}

impl fmt::Display for Matches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No available cages.")
        } else {
            for (idx, m) in self.0.iter().enumerate() {
                writeln!(
                    f,
                    "{}. **{}** with {}m², carpeted: {}, has toys: {}, at {}/night",
                    idx + 1,
                    m.cage.name,
                    m.cage.square_meters,
                    if m.cage.is_carpeted { "yes" } else { "no" },
                    if m.cage.has_toys { "yes" } else { "no" },
                    m.cage.price
                )?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a guest's committed bookings.
pub struct BookingSummaries(pub Vec<BookingSummary>);

impl BookingSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of bookings in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for BookingSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No bookings found.")
        } else {
            for summary in &self.0 {
                write!(f, "{}", summary)?;
            }
            Ok(())
        }
    }
}
