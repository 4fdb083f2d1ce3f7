use crate::geometry::Segment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeSpeed {
    /// 15 steps, 30 ms apart.
    Normal,
    /// 5 steps, 15 ms apart, three times the per-step decay. Used on scroll.
    Fast,
}

impl FadeSpeed {
    pub fn steps(self) -> u32 {
        match self {
            FadeSpeed::Normal => 15,
            FadeSpeed::Fast => 5,
        }
    }

    pub fn interval_ms(self) -> u64 {
        match self {
            FadeSpeed::Normal => 30,
            FadeSpeed::Fast => 15,
        }
    }

    pub fn decrement(self) -> f64 {
        let strength = match self {
            FadeSpeed::Normal => 1.0,
            FadeSpeed::Fast => 3.0,
        };
        strength / self.steps() as f64
    }

    /// Upper bound on how long a fade of this speed can run.
    pub fn duration_ms(self) -> u64 {
        self.steps() as u64 * self.interval_ms()
    }
}

/// What started a fade. Only logged, the fade itself behaves the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeTrigger {
    Periodic,
    Scroll,
    External,
    LongManualSession,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeProgress {
    Running,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    speed: FadeSpeed,
    trigger: FadeTrigger,
    step: u32,
}

impl Fade {
    pub fn new(speed: FadeSpeed, trigger: FadeTrigger) -> Self {
        Self {
            speed,
            trigger,
            step: 0,
        }
    }

    pub fn speed(&self) -> FadeSpeed {
        self.speed
    }

    pub fn trigger(&self) -> FadeTrigger {
        self.trigger
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// Apply one decay step and drop every segment that hit zero.
    pub fn tick(&mut self, segments: &mut Vec<Segment>) -> FadeProgress {
        self.step += 1;
        let amount = self.speed.decrement();
        for segment in segments.iter_mut() {
            segment.fade_by(amount);
        }
        segments.retain(Segment::is_visible);

        if self.step >= self.speed.steps() || segments.is_empty() {
            FadeProgress::Finished
        } else {
            FadeProgress::Running
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn segments(n: usize) -> Vec<Segment> {
        (0..n)
            .map(|i| Segment::between(Point::new(0.0, i as f64), Point::new(100.0, i as f64)))
            .collect()
    }

    #[test]
    fn fast_fade_empties_in_two_steps() {
        let mut store = segments(3);
        let mut fade = Fade::new(FadeSpeed::Fast, FadeTrigger::Scroll);

        assert_eq!(fade.tick(&mut store), FadeProgress::Running);
        assert_eq!(store.len(), 3);
        assert!((store[0].opacity() - 0.4).abs() < 1e-9);

        assert_eq!(fade.tick(&mut store), FadeProgress::Finished);
        assert!(store.is_empty());
        assert_eq!(fade.step(), 2);
    }

    #[test]
    fn normal_fade_stops_at_step_budget() {
        let mut store = segments(2);
        let mut fade = Fade::new(FadeSpeed::Normal, FadeTrigger::Periodic);
        let mut ticks = 0;
        while fade.tick(&mut store) == FadeProgress::Running {
            ticks += 1;
            assert!(store.iter().all(Segment::is_visible));
        }
        assert_eq!(ticks + 1, 15);
    }

    #[test]
    fn timings_match_speed() {
        assert_eq!(FadeSpeed::Normal.duration_ms(), 450);
        assert_eq!(FadeSpeed::Fast.duration_ms(), 75);
        assert!((FadeSpeed::Fast.decrement() - 0.6).abs() < 1e-9);
    }
}
