/// Source of uniform values in `[0, 1)` for auto-generated trail points.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Replays a fixed list of values forever. Deterministic stand-in for
/// `Math.random` in tests and demos.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_cycles() {
        let mut random = SequenceRandom::new(vec![0.25, 0.75]);
        assert_eq!(random.next_unit(), 0.25);
        assert_eq!(random.next_unit(), 0.75);
        assert_eq!(random.next_unit(), 0.25);
    }

    #[test]
    fn empty_sequence_yields_zero() {
        let mut random = SequenceRandom::new(Vec::new());
        assert_eq!(random.next_unit(), 0.0);
    }

    #[test]
    fn closures_are_sources() {
        let mut n = 0.0;
        let mut source = move || {
            n += 0.5;
            n
        };
        assert_eq!(RandomSource::next_unit(&mut source), 0.5);
    }
}
