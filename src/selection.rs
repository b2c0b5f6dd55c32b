//! # Selection Bitmasks
//!
//! Every selected particle carries two independent bit-wise containers: one
//! for the generic selection criteria (`cut`) and one for the PID criteria
//! (`pid_cut`). PID hypotheses combine differently from generic cuts, which is
//! why the two masks are never merged into a single container.
//!
//! The schema fixes only the container width (32 bits) and the filtering
//! contract. Which criterion sits on which bit is an external, versioned
//! convention carried by [`CutLayout`] and must match between the producer
//! that filled the masks and the analysis that filters on them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed width of a selection container in bits.
pub const CUT_CONTAINER_BITS: u8 = 32;

/// Underlying integer type of a selection container.
pub type BitMaskType = u32;

/// Bit-wise container for independent selection criteria.
///
/// A `CutContainer` is write-once from the point of view of the data model:
/// the producer assembles it with [`set`](CutContainer::set) /
/// [`with`](CutContainer::with) and it is immutable after the row is
/// committed. Filtering never exposes raw bit arithmetic; it goes through
/// [`matches`](CutContainer::matches).
///
/// # Example
///
/// ```
/// use femtoderived::selection::CutContainer;
///
/// let cut = CutContainer::from_bits(0b0110);
/// assert!(cut.matches(CutContainer::from_bits(0b0010)));
/// assert!(!cut.matches(CutContainer::from_bits(0b1000)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CutContainer(BitMaskType);

impl CutContainer {
    /// Container with no criteria set.
    pub const EMPTY: CutContainer = CutContainer(0);

    /// Wraps a raw bit pattern produced by an external selection table.
    pub const fn from_bits(bits: BitMaskType) -> Self {
        CutContainer(bits)
    }

    /// Returns the raw bit pattern.
    pub const fn bits(self) -> BitMaskType {
        self.0
    }

    /// Sets the criterion at `bit`.
    ///
    /// Bits at or above [`CUT_CONTAINER_BITS`] do not exist in the container
    /// and are ignored.
    pub fn set(&mut self, bit: u8) {
        if bit < CUT_CONTAINER_BITS {
            self.0 |= 1 << bit;
        }
    }

    /// Returns a copy with the criterion at `bit` set.
    pub fn with(mut self, bit: u8) -> Self {
        self.set(bit);
        self
    }

    /// Tests whether the criterion at `bit` is set.
    pub const fn test(self, bit: u8) -> bool {
        bit < CUT_CONTAINER_BITS && self.0 & (1 << bit) != 0
    }

    /// The filtering contract: a stored mask passes a required mask iff every
    /// required bit is set, i.e. `(m & R) == R`.
    pub const fn matches(self, required: CutContainer) -> bool {
        self.0 & required.0 == required.0
    }

    /// Whether no criterion is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of criteria set.
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }
}

impl fmt::Binary for CutContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

/// Error returned when a [`CutLayout`] runs out of bits.
#[derive(Debug, thiserror::Error)]
#[error("cut layout '{version}' is full: a 32-bit container holds at most 32 criteria")]
pub struct CutLayoutFull {
    /// Version tag of the layout that overflowed.
    pub version: String,
}

/// Externally versioned bit-position → selection-criterion mapping.
///
/// The layout is *not* enforced by the schema; it travels with a production
/// (see [`crate::conventions::ConventionManifest`]) and downstream analyses
/// use it to build required masks by criterion name instead of hard-coding
/// bit positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutLayout {
    version: String,
    criteria: Vec<String>,
}

impl CutLayout {
    /// Creates an empty layout tagged with a version string.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            criteria: Vec::new(),
        }
    }

    /// Version tag identifying this layout.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Registers the next criterion and returns its assigned bit position.
    pub fn push(&mut self, criterion: impl Into<String>) -> Result<u8, CutLayoutFull> {
        if self.criteria.len() >= CUT_CONTAINER_BITS as usize {
            return Err(CutLayoutFull {
                version: self.version.clone(),
            });
        }
        self.criteria.push(criterion.into());
        Ok((self.criteria.len() - 1) as u8)
    }

    /// Bit position assigned to a criterion name, if registered.
    pub fn bit(&self, criterion: &str) -> Option<u8> {
        self.criteria
            .iter()
            .position(|c| c == criterion)
            .map(|i| i as u8)
    }

    /// Criterion name at a bit position, if assigned.
    pub fn criterion(&self, bit: u8) -> Option<&str> {
        self.criteria.get(bit as usize).map(String::as_str)
    }

    /// Builds a required mask from criterion names.
    ///
    /// Returns `None` if any name is not registered in this layout, so a
    /// version mismatch fails loudly instead of silently weakening a filter.
    pub fn required_mask(&self, criteria: &[&str]) -> Option<CutContainer> {
        let mut mask = CutContainer::EMPTY;
        for name in criteria {
            mask.set(self.bit(name)?);
        }
        Some(mask)
    }

    /// Number of registered criteria.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Whether no criterion is registered.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_is_superset_test() {
        let cut = CutContainer::from_bits(0b0110);
        assert!(cut.matches(CutContainer::from_bits(0b0010)));
        assert!(cut.matches(CutContainer::from_bits(0b0110)));
        assert!(cut.matches(CutContainer::EMPTY));
        assert!(!cut.matches(CutContainer::from_bits(0b1000)));
        assert!(!cut.matches(CutContainer::from_bits(0b0111)));
    }

    #[test]
    fn set_and_test_round_trip() {
        let mut cut = CutContainer::EMPTY;
        cut.set(0);
        cut.set(31);
        assert!(cut.test(0));
        assert!(cut.test(31));
        assert!(!cut.test(1));
        assert_eq!(cut.count(), 2);
    }

    #[test]
    fn out_of_range_bits_are_ignored() {
        let cut = CutContainer::EMPTY.with(32).with(200);
        assert!(cut.is_empty());
        assert!(!cut.test(32));
    }

    #[test]
    fn layout_assigns_sequential_bits() {
        let mut layout = CutLayout::new("test-v1");
        assert_eq!(layout.push("pt > 0.5").ok(), Some(0));
        assert_eq!(layout.push("|eta| < 0.8").ok(), Some(1));
        assert_eq!(layout.push("nCls > 80").ok(), Some(2));

        assert_eq!(layout.bit("|eta| < 0.8"), Some(1));
        assert_eq!(layout.criterion(2), Some("nCls > 80"));
        assert_eq!(layout.bit("nonexistent"), None);
    }

    #[test]
    fn layout_required_mask() {
        let mut layout = CutLayout::new("test-v1");
        layout.push("a").ok();
        layout.push("b").ok();
        layout.push("c").ok();

        let mask = layout.required_mask(&["a", "c"]).expect("registered");
        assert_eq!(mask.bits(), 0b101);
        assert!(layout.required_mask(&["a", "missing"]).is_none());
    }

    #[test]
    fn layout_overflows_at_container_width() {
        let mut layout = CutLayout::new("test-v1");
        for i in 0..32 {
            layout.push(format!("criterion-{i}")).expect("fits");
        }
        assert!(layout.push("one too many").is_err());
    }

    #[test]
    fn layout_json_round_trip() {
        let mut layout = CutLayout::new("prod-2024a");
        layout.push("pt").ok();
        layout.push("eta").ok();

        let json = serde_json::to_string(&layout).expect("serialize");
        let back: CutLayout = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, layout);
    }
}
