use std::sync::atomic::{AtomicU64, Ordering};

pub struct IdGenerator {
    counter: AtomicU64,
}

impl IdGenerator {
    pub fn new(start: u64) -> Self {
        Self {
            counter: AtomicU64::new(start),
        }
    }

    /// Continues after the largest id already stored.
    pub fn after<I: IntoIterator<Item = u64>>(existing: I) -> Self {
        let max = existing.into_iter().max().unwrap_or(0);
        Self::new(max + 1)
    }

    pub fn next(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_continue_after_existing() {
        let ids = IdGenerator::after([3, 9, 4]);
        assert_eq!(ids.next(), 10);
        assert_eq!(ids.next(), 11);

        let empty = IdGenerator::after(std::iter::empty());
        assert_eq!(empty.next(), 1);
    }
}
