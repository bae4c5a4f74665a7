use rustc_hash::FxHashSet;

/// Hands out replacement ids that collide with nothing already taken.
///
/// Candidates count down from `u32::MAX`, far away from the small numbers
/// real files use, and each candidate is checked against every id the
/// allocator knows about before it is returned.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u32,
    taken: FxHashSet<String>,
}

impl IdAllocator {
    pub fn new(taken: impl IntoIterator<Item = String>) -> Self {
        Self {
            next: u32::MAX,
            taken: taken.into_iter().collect(),
        }
    }

    /// Next unused id of the form `@I<n>@`.
    pub fn allocate(&mut self) -> String {
        loop {
            let candidate = format!("@I{}@", self.next);
            self.next = self.next.wrapping_sub(1);
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_from_sentinel() {
        let mut allocator = IdAllocator::new(Vec::new());
        assert_eq!(allocator.allocate(), format!("@I{}@", u32::MAX));
        assert_eq!(allocator.allocate(), format!("@I{}@", u32::MAX - 1));
    }

    #[test]
    fn test_skips_taken_ids() {
        let taken = vec![format!("@I{}@", u32::MAX), format!("@I{}@", u32::MAX - 1)];
        let mut allocator = IdAllocator::new(taken);
        assert_eq!(allocator.allocate(), format!("@I{}@", u32::MAX - 2));
    }
}
