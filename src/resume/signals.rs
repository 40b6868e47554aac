/// How a counter collapses its independent signals into one count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// Middle element of the sorted nonzero signals (upper middle for even lengths).
    MedianNonZero,
    /// Largest signal, for counters where undercounting is the bigger risk.
    Max,
}

impl Reconciliation {
    pub fn reconcile(&self, signals: &[u32]) -> u32 {
        match self {
            Reconciliation::MedianNonZero => {
                let mut nonzero: Vec<u32> = signals.iter().copied().filter(|&s| s > 0).collect();
                if nonzero.is_empty() {
                    return 0;
                }
                nonzero.sort_unstable();
                nonzero[nonzero.len() / 2]
            }
            Reconciliation::Max => signals.iter().copied().max().unwrap_or(0),
        }
    }
}

/// Named raw estimates of the same quantity, in the order they were computed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignalVector {
    signals: Vec<(&'static str, u32)>,
}

impl SignalVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: &'static str, value: u32) -> &mut Self {
        self.signals.push((name, value));
        self
    }

    pub fn values(&self) -> Vec<u32> {
        self.signals.iter().map(|(_, v)| *v).collect()
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn reconcile(&self, rule: Reconciliation) -> u32 {
        rule.reconcile(&self.values())
    }
}

impl std::fmt::Display for SignalVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .signals
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_of_odd_length() {
        assert_eq!(Reconciliation::MedianNonZero.reconcile(&[2, 4, 6]), 4);
        assert_eq!(Reconciliation::MedianNonZero.reconcile(&[6, 2, 4]), 4);
    }

    #[test]
    fn test_median_ignores_zeros() {
        assert_eq!(Reconciliation::MedianNonZero.reconcile(&[0, 0, 5]), 5);
        assert_eq!(Reconciliation::MedianNonZero.reconcile(&[0, 0, 0]), 0);
    }

    #[test]
    fn test_median_of_even_length_takes_upper_middle() {
        assert_eq!(Reconciliation::MedianNonZero.reconcile(&[1, 2, 3, 4]), 3);
    }

    #[test]
    fn test_max() {
        assert_eq!(Reconciliation::Max.reconcile(&[1, 3, 2]), 3);
        assert_eq!(Reconciliation::Max.reconcile(&[]), 0);
    }

    #[test]
    fn test_signal_vector_keeps_order_and_names() {
        let mut signals = SignalVector::new();
        signals.record("dates", 2).record("bullets", 0).record("roles", 3);
        assert_eq!(signals.values(), vec![2, 0, 3]);
        assert_eq!(signals.to_string(), "[dates=2, bullets=0, roles=3]");
        assert_eq!(signals.reconcile(Reconciliation::MedianNonZero), 3);
    }
}
