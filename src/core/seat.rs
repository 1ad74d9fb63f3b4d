//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! Pig is strictly a two-contestant game, so seats are a closed enum
//! rather than an open index.
//!
//! ## SeatMap
//!
//! Per-seat storage backed by a fixed `[T; 2]`, indexable by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two contestant positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    #[default]
    First,
    Second,
}

impl Seat {
    /// Both seats in play order.
    pub const ALL: [Seat; 2] = [Seat::First, Seat::Second];

    /// The 0-based index of this seat.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.index() + 1)
    }
}

/// Per-seat data storage.
///
/// ## Example
///
/// ```
/// use pig_dice::core::{Seat, SeatMap};
///
/// let mut totals: SeatMap<u32> = SeatMap::with_value(0);
/// totals[Seat::Second] += 12;
///
/// assert_eq!(totals[Seat::First], 0);
/// assert_eq!(totals[Seat::Second], 12);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::First), factory(Seat::Second)],
        }
    }

    /// Create a SeatMap from explicit values for each seat.
    pub fn from_pair(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Create a new SeatMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Seat, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Seat, &mut T)> {
        Seat::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Map each entry into a new SeatMap.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> SeatMap<U> {
        SeatMap {
            data: [f(&self.data[0]), f(&self.data[1])],
        }
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_basics() {
        assert_eq!(Seat::First.index(), 0);
        assert_eq!(Seat::Second.index(), 1);
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::Second.other(), Seat::First);
        assert_eq!(format!("{}", Seat::Second), "Seat 2");
        assert_eq!(Seat::default(), Seat::First);
    }

    #[test]
    fn test_seat_map_new() {
        let map: SeatMap<usize> = SeatMap::new(|s| s.index() * 10);

        assert_eq!(map[Seat::First], 0);
        assert_eq!(map[Seat::Second], 10);
    }

    #[test]
    fn test_seat_map_mutation() {
        let mut map = SeatMap::from_pair(1, 2);

        map[Seat::First] = 10;
        *map.get_mut(Seat::Second) += 5;

        assert_eq!(map[Seat::First], 10);
        assert_eq!(map[Seat::Second], 7);
    }

    #[test]
    fn test_seat_map_iter_and_map() {
        let map = SeatMap::from_pair("a", "bc");

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Seat::First, &"a"), (Seat::Second, &"bc")]);

        let lens = map.map(|s| s.len());
        assert_eq!(lens, SeatMap::from_pair(1, 2));
    }

    #[test]
    fn test_seat_map_serialization() {
        let map = SeatMap::from_pair(30u32, 70u32);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SeatMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
