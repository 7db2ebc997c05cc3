//! Incumbent trackers: keep-best and keep-all.

/// Best complete assignment found so far, with its cost.
///
/// Starts empty, which compares as an infinite cost. A candidate replaces
/// the incumbent only on strict improvement, so ties keep the earlier path.
///
/// # Examples
///
/// ```
/// use u_search::search::Incumbent;
///
/// let mut best = Incumbent::new();
/// assert!(best.offer(&[0, 2, 1], 30));
/// assert!(!best.offer(&[0, 1, 2], 30));
/// assert!(best.offer(&[0, 1, 2], 25));
/// assert_eq!(best.cost(), Some(25));
/// ```
#[derive(Debug, Clone)]
pub struct Incumbent<C> {
    best: Option<(Vec<usize>, C)>,
    history: Vec<C>,
}

impl<C: PartialOrd + Copy> Incumbent<C> {
    pub fn new() -> Self {
        Self {
            best: None,
            history: Vec::new(),
        }
    }

    /// Whether `cost` would replace the current incumbent.
    pub fn improves(&self, cost: C) -> bool {
        match &self.best {
            Some((_, best)) => cost < *best,
            None => true,
        }
    }

    /// Records `path` if `cost` strictly improves; returns whether it did.
    pub fn offer(&mut self, path: &[usize], cost: C) -> bool {
        if !self.improves(cost) {
            return false;
        }
        match &mut self.best {
            Some((best_path, best_cost)) => {
                best_path.clear();
                best_path.extend_from_slice(path);
                *best_cost = cost;
            }
            None => self.best = Some((path.to_vec(), cost)),
        }
        self.history.push(cost);
        true
    }

    pub fn cost(&self) -> Option<C> {
        self.best.as_ref().map(|(_, c)| *c)
    }

    pub fn path(&self) -> Option<&[usize]> {
        self.best.as_ref().map(|(p, _)| p.as_slice())
    }

    /// Costs of every accepted improvement, in discovery order.
    pub fn history(&self) -> &[C] {
        &self.history
    }

    pub fn into_parts(self) -> (Option<(Vec<usize>, C)>, Vec<C>) {
        (self.best, self.history)
    }
}

impl<C: PartialOrd + Copy> Default for Incumbent<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Counter plus optional ordered log of every completion.
///
/// Used when all completions are wanted. Entries are not deduplicated.
#[derive(Debug, Clone, Default)]
pub struct SolutionLog {
    count: u64,
    record: bool,
    entries: Vec<Vec<usize>>,
}

impl SolutionLog {
    /// Creates a log; when `record` is false only the count is kept.
    pub fn new(record: bool) -> Self {
        Self {
            count: 0,
            record,
            entries: Vec::new(),
        }
    }

    /// Records one completion and returns the running count.
    pub fn record(&mut self, solution: &[usize]) -> u64 {
        self.count += 1;
        if self.record {
            self.entries.push(solution.to_vec());
        }
        self.count
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn entries(&self) -> &[Vec<usize>] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Vec<usize>> {
        self.entries
    }
}
