//! Chart legend model.

use smallvec::SmallVec;

use crate::ooxml::charts::models::Layout;
use crate::ooxml::charts::types::LegendPosition;

/// Chart legend configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    /// Legend position, [`LegendPosition::None`] hides the legend
    pub position: LegendPosition,
    /// Manual layout
    pub layout: Option<Layout>,
    /// Series indices whose legend entries are deleted, sorted and unique
    pub deleted_entries: SmallVec<[u16; 4]>,
}

impl Legend {
    /// Create a new legend at the given position.
    #[inline]
    pub fn new(position: LegendPosition) -> Self {
        Self {
            position,
            layout: None,
            deleted_entries: SmallVec::new(),
        }
    }

    /// True when the legend is written at all.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.position != LegendPosition::None
    }

    /// Hide the legend entries of the given series indices.
    pub fn delete_entries(&mut self, indices: &[u16]) {
        self.deleted_entries.extend_from_slice(indices);
        self.deleted_entries.sort_unstable();
        self.deleted_entries.dedup();
    }
}

impl Default for Legend {
    #[inline]
    fn default() -> Self {
        Self::new(LegendPosition::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_entries_sorted_unique() {
        let mut legend = Legend::default();
        legend.delete_entries(&[3, 1]);
        legend.delete_entries(&[1, 0]);
        assert_eq!(legend.deleted_entries.as_slice(), &[0, 1, 3]);
    }

    #[test]
    fn test_none_hides_legend() {
        assert!(Legend::default().is_visible());
        assert!(!Legend::new(LegendPosition::None).is_visible());
    }
}
