//! Document-wide identifier allocation.

/// First axis ID handed out in a workbook. Matches the range Excel itself
/// uses for generated chart axes.
pub const FIRST_AXIS_ID: u32 = 50_010_000;

/// The four axis IDs owned by one chart, in slot order
/// [primary X, primary Y, secondary X, secondary Y].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisIds(pub [u32; 4]);

impl AxisIds {
    /// Build from explicit values, e.g. to reproduce IDs from a reference file.
    #[inline]
    pub const fn new(primary_x: u32, primary_y: u32, secondary_x: u32, secondary_y: u32) -> Self {
        Self([primary_x, primary_y, secondary_x, secondary_y])
    }

    /// ID at slot index `i` (0..4).
    #[inline]
    pub const fn get(&self, i: usize) -> u32 {
        self.0[i]
    }
}

/// Monotonic, collision-free axis ID source shared by all charts of a workbook.
#[derive(Debug, Clone)]
pub struct AxisIdAllocator {
    next: u32,
}

impl AxisIdAllocator {
    /// Start a fresh sequence at [`FIRST_AXIS_ID`].
    #[inline]
    pub const fn new() -> Self {
        Self { next: FIRST_AXIS_ID }
    }

    /// Issue the next single ID.
    #[inline]
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }

    /// Issue the four IDs for a new chart. IDs are consumed even when the
    /// chart never uses its secondary pair.
    pub fn next_chart(&mut self) -> AxisIds {
        AxisIds([self.next_id(), self.next_id(), self.next_id(), self.next_id()])
    }
}

impl Default for AxisIdAllocator {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic_across_charts() {
        let mut alloc = AxisIdAllocator::new();
        let first = alloc.next_chart();
        let second = alloc.next_chart();
        assert_eq!(first, AxisIds::new(50_010_000, 50_010_001, 50_010_002, 50_010_003));
        assert_eq!(second.get(0), 50_010_004);
        assert!(first.0.iter().all(|id| !second.0.contains(id)));
    }
}
