//! Ordered, mutable list of clocks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::error::{DomainError, DomainResult};
use crate::text;

/// An ordered sequence of [`Clock`] values.
///
/// Insertion order is kept until [`sort`](Self::sort) is called. Duplicates
/// are allowed. Every failing operation leaves the collection unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClockCollection {
    clocks: Vec<Clock>,
}

impl ClockCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { clocks: Vec::new() }
    }

    /// Parses `input` and appends every clock it contains.
    ///
    /// See [`text::parse_clocks`] for the accepted format. Returns the number
    /// of clocks appended.
    ///
    /// # Errors
    ///
    /// Returns the parse or range error of the first bad record. The
    /// collection is not modified in that case.
    pub fn load_from_text(&mut self, input: &str) -> DomainResult<usize> {
        let parsed = text::parse_clocks(input)?;
        let count = parsed.len();
        self.clocks.extend(parsed);
        Ok(count)
    }

    /// Appends a clock to the end.
    pub fn add(&mut self, clock: Clock) {
        self.clocks.push(clock);
    }

    /// Sorts ascending in place. Equal clocks keep their relative order.
    pub fn sort(&mut self) {
        self.clocks.sort();
    }

    /// Returns the index of the first clock equal to `clock`.
    #[must_use]
    pub fn find(&self, clock: &Clock) -> Option<usize> {
        self.clocks.iter().position(|c| c == clock)
    }

    /// Returns the clock at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> DomainResult<&Clock> {
        self.clocks.get(index).ok_or(DomainError::IndexOutOfRange {
            index,
            len: self.clocks.len(),
        })
    }

    /// Replaces the clock at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::IndexOutOfRange`] if `index >= len()`.
    pub fn set(&mut self, clock: Clock, index: usize) -> DomainResult<()> {
        let len = self.clocks.len();
        let slot = self
            .clocks
            .get_mut(index)
            .ok_or(DomainError::IndexOutOfRange { index, len })?;
        *slot = clock;
        Ok(())
    }

    /// Renders every clock as an `H:M:S` line, in collection order.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Returns the number of clocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clocks.len()
    }

    /// Returns true if the collection holds no clocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clocks.is_empty()
    }

    /// Returns an iterator over the clocks.
    pub fn iter(&self) -> std::slice::Iter<'_, Clock> {
        self.clocks.iter()
    }

    /// Returns the clocks as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Clock] {
        &self.clocks
    }
}

impl fmt::Display for ClockCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        text::write_clocks(f, &self.clocks)
    }
}

impl FromIterator<Clock> for ClockCollection {
    fn from_iter<I: IntoIterator<Item = Clock>>(iter: I) -> Self {
        Self {
            clocks: iter.into_iter().collect(),
        }
    }
}

impl Extend<Clock> for ClockCollection {
    fn extend<I: IntoIterator<Item = Clock>>(&mut self, iter: I) {
        self.clocks.extend(iter);
    }
}

impl IntoIterator for ClockCollection {
    type Item = Clock;
    type IntoIter = std::vec::IntoIter<Clock>;

    fn into_iter(self) -> Self::IntoIter {
        self.clocks.into_iter()
    }
}

impl<'a> IntoIterator for &'a ClockCollection {
    type Item = &'a Clock;
    type IntoIter = std::slice::Iter<'a, Clock>;

    fn into_iter(self) -> Self::IntoIter {
        self.clocks.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::text::LINE_ENDING;
    use pretty_assertions::assert_eq;

    fn clock(h: i32, m: i32, s: i32) -> Clock {
        Clock::new(h, m, s).unwrap()
    }

    fn collection(clocks: &[(i32, i32, i32)]) -> ClockCollection {
        clocks.iter().map(|&(h, m, s)| clock(h, m, s)).collect()
    }

    #[test]
    fn test_new_is_empty() {
        let clocks = ClockCollection::new();
        assert!(clocks.is_empty());
        assert_eq!(clocks.to_text(), "");
    }

    #[test]
    fn test_load_from_text_appends_in_order() {
        let mut clocks = collection(&[(0, 0, 1)]);
        let added = clocks.load_from_text("1:2:3\n4:5:6").unwrap();
        assert_eq!(added, 2);
        assert_eq!(
            clocks.as_slice(),
            &[clock(0, 0, 1), clock(1, 2, 3), clock(4, 5, 6)]
        );
    }

    #[test]
    fn test_load_from_text_is_all_or_nothing() {
        let mut clocks = collection(&[(7, 7, 7)]);
        assert!(clocks.load_from_text("1:2:3\n24:0:0").is_err());
        assert!(clocks.load_from_text("1:2:3\n4:five:6").is_err());
        assert_eq!(clocks, collection(&[(7, 7, 7)]));
    }

    #[test]
    fn test_add_appends() {
        let mut clocks = ClockCollection::new();
        clocks.add(clock(3, 0, 0));
        clocks.add(clock(1, 0, 0));
        assert_eq!(clocks.len(), 2);
        assert_eq!(clocks.get(1).unwrap(), &clock(1, 0, 0));
    }

    #[test]
    fn test_sort_ascending() {
        let mut clocks = collection(&[(5, 0, 0), (1, 0, 0), (3, 0, 0)]);
        clocks.sort();
        assert_eq!(clocks, collection(&[(1, 0, 0), (3, 0, 0), (5, 0, 0)]));
    }

    #[test]
    fn test_sort_mixed_fields_with_duplicates() {
        let mut clocks = collection(&[(1, 3, 0), (1, 2, 4), (2, 0, 0), (1, 2, 3), (1, 2, 4)]);
        clocks.sort();
        assert_eq!(
            clocks,
            collection(&[(1, 2, 3), (1, 2, 4), (1, 2, 4), (1, 3, 0), (2, 0, 0)])
        );
    }

    #[test]
    fn test_find() {
        let clocks = collection(&[(1, 0, 0), (2, 0, 0), (1, 0, 0)]);
        assert_eq!(clocks.find(&clock(1, 0, 0)), Some(0));
        assert_eq!(clocks.find(&clock(2, 0, 0)), Some(1));
        assert_eq!(clocks.find(&clock(3, 0, 0)), None);
        assert_eq!(ClockCollection::new().find(&clock(3, 0, 0)), None);
    }

    #[test]
    fn test_get_out_of_range() {
        let clocks = collection(&[(1, 0, 0), (2, 0, 0)]);
        assert_eq!(
            clocks.get(2),
            Err(DomainError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(clocks, collection(&[(1, 0, 0), (2, 0, 0)]));
    }

    #[test]
    fn test_set_replaces() {
        let mut clocks = collection(&[(1, 0, 0), (2, 0, 0)]);
        clocks.set(clock(9, 9, 9), 1).unwrap();
        assert_eq!(clocks, collection(&[(1, 0, 0), (9, 9, 9)]));
    }

    #[test]
    fn test_set_out_of_range_leaves_collection_unchanged() {
        let mut clocks = collection(&[(1, 0, 0), (2, 0, 0)]);
        assert_eq!(
            clocks.set(clock(9, 9, 9), 2),
            Err(DomainError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            clocks.set(clock(9, 9, 9), usize::MAX),
            Err(DomainError::IndexOutOfRange {
                index: usize::MAX,
                len: 2
            })
        );
        assert_eq!(clocks, collection(&[(1, 0, 0), (2, 0, 0)]));
    }

    #[test]
    fn test_to_text_unpadded() {
        let clocks = collection(&[(9, 5, 3)]);
        assert_eq!(clocks.to_text(), format!("9:5:3{LINE_ENDING}"));
    }

    #[test]
    fn test_to_text_follows_collection_order() {
        let mut clocks = collection(&[(5, 0, 0), (1, 2, 3)]);
        assert_eq!(clocks.to_text(), format!("5:0:0{LINE_ENDING}1:2:3{LINE_ENDING}"));
        clocks.sort();
        assert_eq!(clocks.to_text(), format!("1:2:3{LINE_ENDING}5:0:0{LINE_ENDING}"));
    }

    #[test]
    fn test_serde_is_a_plain_array() {
        let clocks = collection(&[(9, 5, 3), (23, 58, 0)]);
        let json = serde_json::to_string(&clocks).unwrap();
        assert_eq!(
            json,
            r#"[{"hour":9,"minute":5,"second":3},{"hour":23,"minute":58,"second":0}]"#
        );
        let back: ClockCollection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, clocks);
    }

    #[test]
    fn test_serde_rejects_invalid_element() {
        let json = r#"[{"hour":1,"minute":2,"second":3},{"hour":1,"minute":60,"second":0}]"#;
        let err = serde_json::from_str::<ClockCollection>(json).unwrap_err();
        assert!(err.to_string().contains("minute out of range"));
    }

    #[test]
    fn test_text_reloads_to_same_collection() {
        let clocks = collection(&[(23, 58, 0), (0, 0, 0), (12, 34, 56)]);
        let mut reloaded = ClockCollection::new();
        reloaded.load_from_text(&clocks.to_text()).unwrap();
        assert_eq!(reloaded, clocks);
    }
}
