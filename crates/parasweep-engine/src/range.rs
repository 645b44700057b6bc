//! Floating-point range enumeration.

use parasweep_model::ParameterSpec;

/// Lazy, finite sequence of values for one parameter.
///
/// The sequence begins at `start` and each subsequent value is the previous
/// value plus the signed delta, not re-derived from an index. Accumulated
/// rounding can therefore skip or slightly overshoot the nominal endpoint;
/// that drift is exactly what end users of the host observe and is kept
/// intact on purpose. Cloning gives a restarted sequence.
#[derive(Debug, Clone)]
pub struct ValueRange {
    next: f64,
    end: f64,
    delta: f64,
}

impl ValueRange {
    /// Build the enumerator for `(start, end, step)` with `step > 0`.
    ///
    /// Direction comes from comparing `start` and `end`: descending ranges
    /// get a negative effective delta. Callers must reject `start == end`
    /// and non-positive steps during preflight; the enumerator performs no
    /// validation of its own.
    #[must_use]
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        let delta = if start > end { -step } else { step };
        Self {
            next: start,
            end,
            delta,
        }
    }

    #[must_use]
    pub fn from_spec(spec: &ParameterSpec) -> Self {
        Self {
            next: spec.start,
            end: spec.end,
            delta: spec.delta(),
        }
    }
}

impl Iterator for ValueRange {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let in_range = if self.delta > 0.0 {
            self.next <= self.end
        } else {
            self.next >= self.end
        };
        if !in_range {
            return None;
        }
        let value = self.next;
        self.next = value + self.delta;
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_includes_exact_endpoint() {
        let values: Vec<f64> = ValueRange::new(0.0, 2.0, 1.0).collect();
        assert_eq!(values, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn descending_steps_down() {
        let values: Vec<f64> = ValueRange::new(5.0, 1.0, 2.0).collect();
        assert_eq!(values, vec![5.0, 3.0, 1.0]);
    }

    #[test]
    fn clone_restarts_the_sequence() {
        let mut range = ValueRange::new(0.0, 3.0, 1.0);
        range.next();
        range.next();
        let restarted: Vec<f64> = range.clone().collect();
        assert_eq!(restarted, vec![2.0, 3.0]);
        let fresh: Vec<f64> = ValueRange::new(0.0, 3.0, 1.0).collect();
        assert_eq!(fresh.len(), 4);
    }

    #[test]
    fn accumulation_drift_can_skip_the_endpoint() {
        // 0.1 is not exact in binary; ten accumulated additions land at
        // 0.9999999999999999, so an 11th value below the endpoint is
        // emitted and 1.0 itself is never produced.
        let values: Vec<f64> = ValueRange::new(0.0, 1.0, 0.1).collect();
        assert_eq!(values.len(), 11);
        assert_eq!(values[0], 0.0);
        let last = values.last().copied().unwrap();
        assert!(last < 1.0);
        assert!(!values.contains(&1.0));
    }
}
