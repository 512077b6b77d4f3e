// running history of the two tour-length metrics
//
// both series grow for the lifetime of the run; min/max are widened on
// append and never shrink, so the graphs share one stable value range.

/// ordered history of iteration-best and global-best tour lengths,
/// plus the running bounds over the union of both series.
#[derive(Clone, Debug)]
pub struct SeriesStore {
    iter_best: Vec<f64>,
    glob_best: Vec<f64>,
    min: f64,
    max: f64,
}

impl Default for SeriesStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesStore {
    pub fn new() -> Self {
        Self {
            iter_best: Vec::new(),
            glob_best: Vec::new(),
            // sentinels until the first sample lands
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// append one sample pair and widen the shared bounds
    pub fn append(&mut self, iter_best: f64, glob_best: f64) {
        self.iter_best.push(iter_best);
        self.glob_best.push(glob_best);
        self.max = self.max.max(iter_best).max(glob_best);
        self.min = self.min.min(iter_best).min(glob_best);
    }

    pub fn iter_best(&self) -> &[f64] {
        &self.iter_best
    }

    pub fn glob_best(&self) -> &[f64] {
        &self.glob_best
    }

    /// latest (iteration-best, global-best) pair, if any sample arrived yet
    pub fn latest(&self) -> Option<(f64, f64)> {
        match (self.iter_best.last(), self.glob_best.last()) {
            (Some(&i), Some(&g)) => Some((i, g)),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.iter_best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.iter_best.is_empty()
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_before_first_sample() {
        let s = SeriesStore::new();
        assert!(s.is_empty());
        assert!(s.min().is_infinite() && s.min() > 0.0);
        assert!(s.max().is_infinite() && s.max() < 0.0);
    }

    #[test]
    fn test_append_sets_bounds() {
        let mut s = SeriesStore::new();
        s.append(120.5, 100.0);
        assert_eq!(s.min(), 100.0);
        assert_eq!(s.max(), 120.5);
        assert_eq!(s.latest(), Some((120.5, 100.0)));
    }

    #[test]
    fn test_bounds_are_monotone() {
        let mut s = SeriesStore::new();
        s.append(120.5, 100.0);
        // a lower iter-best must not lower the max
        s.append(115.0, 100.0);
        assert_eq!(s.max(), 120.5);
        assert_eq!(s.min(), 100.0);
        // a new global best widens min only
        s.append(118.0, 95.0);
        assert_eq!(s.max(), 120.5);
        assert_eq!(s.min(), 95.0);
        // a worse iteration widens max only
        s.append(130.0, 95.0);
        assert_eq!(s.max(), 130.0);
        assert_eq!(s.min(), 95.0);
    }

    #[test]
    fn test_all_values_within_bounds() {
        let mut s = SeriesStore::new();
        for (i, g) in [(120.5, 100.0), (115.0, 100.0), (140.0, 90.0), (91.0, 90.0)] {
            s.append(i, g);
        }
        for &v in s.iter_best().iter().chain(s.glob_best()) {
            assert!(s.min() <= v && v <= s.max());
        }
        assert_eq!(s.len(), 4);
    }
}
