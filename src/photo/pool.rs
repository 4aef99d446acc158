use rand::Rng;
use std::path::PathBuf;

/// Photos not yet shown in the current cycle.
///
/// Each pick removes its path, so every catalogued photo is shown once
/// before any repeats. An empty pool is refilled from the catalogue.
#[derive(Debug, Default)]
pub struct PickPool {
    remaining: Vec<PathBuf>,
}

impl PickPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Drop the current cycle; the next pick starts a fresh one
    pub fn reset(&mut self) {
        self.remaining.clear();
    }

    /// Pick one path uniformly at random, refilling from `catalogue` if the
    /// cycle is exhausted. Returns None only when the catalogue is empty.
    pub fn pick<R: Rng + ?Sized>(&mut self, catalogue: &[PathBuf], rng: &mut R) -> Option<PathBuf> {
        if self.is_empty() {
            self.remaining.extend_from_slice(catalogue);
        }
        if self.is_empty() {
            return None;
        }

        let index = rng.random_range(0..self.remaining.len());
        Some(self.remaining.swap_remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn catalogue(n: usize) -> Vec<PathBuf> {
        (0..n).map(|i| PathBuf::from(format!("/photos/{i}.jpg"))).collect()
    }

    #[test]
    fn test_empty_catalogue_yields_nothing() {
        let mut pool = PickPool::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pool.pick(&[], &mut rng), None);
    }

    #[test]
    fn test_full_cycle_without_repeats() {
        let photos = catalogue(12);
        let mut pool = PickPool::new();
        let mut rng = StdRng::seed_from_u64(42);

        let picked: HashSet<PathBuf> = (0..photos.len())
            .map(|_| pool.pick(&photos, &mut rng).unwrap())
            .collect();

        assert_eq!(picked.len(), photos.len());
        assert!(pool.is_empty());
    }

    #[test]
    fn test_refills_after_cycle() {
        let photos = catalogue(3);
        let mut pool = PickPool::new();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..3 {
            pool.pick(&photos, &mut rng).unwrap();
        }
        let next = pool.pick(&photos, &mut rng).unwrap();
        assert!(photos.contains(&next));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_reset_starts_new_cycle() {
        let photos = catalogue(4);
        let mut pool = PickPool::new();
        let mut rng = StdRng::seed_from_u64(3);

        pool.pick(&photos, &mut rng).unwrap();
        assert_eq!(pool.len(), 3);
        pool.reset();
        pool.pick(&photos, &mut rng).unwrap();
        assert_eq!(pool.len(), 3);
    }
}
