//! One-shot animations that start the first time a section scrolls into view.

pub const SKILLS_THRESHOLD: f64 = 0.3;
pub const STATS_THRESHOLD: f64 = 0.5;
pub const COUNTER_DURATION_MS: f64 = 2_000.0;
pub const FRAME_INTERVAL_MS: f64 = 16.0;

/// Ratios the observer reports at, so a section that can never be
/// `threshold` visible still produces callbacks while it scrolls through.
pub const OBSERVER_STEPS: usize = 10;

/// Fires at most once, the first time the watched section counts as seen:
/// it is at least `threshold` visible, it covers at least `threshold` of
/// the viewport, or it is intersecting and its ratio has stopped rising.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityLatch {
    threshold: f64,
    fired: bool,
    last_ratio: f64,
}

impl VisibilityLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            fired: false,
            last_ratio: 0.0,
        }
    }

    /// `true` only on the observation that trips the latch.
    pub fn observe(&mut self, intersecting: bool, ratio: f64) -> bool {
        self.observe_with_coverage(intersecting, ratio, 0.0)
    }

    /// Like [`observe`](Self::observe), with `coverage` as the share of the
    /// viewport the visible part of the section fills.
    pub fn observe_with_coverage(&mut self, intersecting: bool, ratio: f64, coverage: f64) -> bool {
        let previous = std::mem::replace(&mut self.last_ratio, if intersecting { ratio } else { 0.0 });
        if self.fired || !intersecting {
            return false;
        }

        let peaked = previous > 0.0 && ratio <= previous;
        if ratio >= self.threshold || coverage >= self.threshold || peaked {
            self.fired = true;
        }
        self.fired
    }
}

/// Observer thresholds: evenly spaced steps plus `threshold` itself.
pub fn observer_thresholds(threshold: f64) -> Vec<f64> {
    let mut steps: Vec<f64> = (0..=OBSERVER_STEPS)
        .map(|step| step as f64 / OBSERVER_STEPS as f64)
        .collect();
    if !steps.iter().any(|step| (step - threshold).abs() < f64::EPSILON) {
        steps.push(threshold);
        steps.sort_by(f64::total_cmp);
    }
    steps
}

/// Share of the viewport filled by `visible_height`. Zero for an empty root.
pub fn viewport_coverage(visible_height: f64, viewport_height: f64) -> f64 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    (visible_height / viewport_height).clamp(0.0, 1.0)
}

/// Inline width for a skill bar; CSS animates the change.
pub fn skill_bar_width(percent: u8, triggered: bool) -> String {
    if triggered {
        format!("width: {percent}%;")
    } else {
        "width: 0%;".to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterFrame {
    Running(u64),
    Done(u64),
}

impl CounterFrame {
    pub fn value(self) -> u64 {
        match self {
            Self::Running(value) | Self::Done(value) => value,
        }
    }
}

/// Counts from zero to `target` in fixed per-frame increments sized so a
/// 60 Hz display finishes in about two seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    step: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            step: target as f64 / (COUNTER_DURATION_MS / FRAME_INTERVAL_MS),
            current: 0.0,
            finished: false,
        }
    }

    pub fn tick(&mut self) -> CounterFrame {
        if self.finished {
            return CounterFrame::Done(self.target);
        }

        self.current += self.step;
        if self.current < self.target as f64 {
            CounterFrame::Running(self.current.floor() as u64)
        } else {
            self.finished = true;
            CounterFrame::Done(self.target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_once_at_threshold() {
        let mut latch = VisibilityLatch::new(STATS_THRESHOLD);

        assert!(!latch.observe(true, 0.2));
        assert!(!latch.observe(false, 0.9));
        assert!(latch.observe(true, 0.5));
        assert!(!latch.observe(true, 1.0));
        assert!(!latch.observe(true, 0.7));
    }

    #[test]
    fn tall_section_fires_once_its_ratio_stops_rising() {
        // A section 2.5 times the viewport height tops out at a 0.4 ratio.
        let mut latch = VisibilityLatch::new(STATS_THRESHOLD);
        let fired: Vec<bool> = [0.01, 0.1, 0.2, 0.3, 0.4, 0.4, 0.2, 0.0]
            .into_iter()
            .map(|ratio| latch.observe(ratio > 0.0, ratio))
            .collect();

        assert_eq!(fired.iter().filter(|fired| **fired).count(), 1);
        assert!(fired[5]);
    }

    #[test]
    fn section_filling_the_viewport_counts_as_seen() {
        let mut latch = VisibilityLatch::new(STATS_THRESHOLD);

        assert!(!latch.observe_with_coverage(true, 0.1, viewport_coverage(300.0, 800.0)));
        assert!(latch.observe_with_coverage(true, 0.3, viewport_coverage(800.0, 800.0)));
    }

    #[test]
    fn leaving_the_viewport_resets_the_rising_check() {
        let mut latch = VisibilityLatch::new(STATS_THRESHOLD);

        assert!(!latch.observe(true, 0.2));
        assert!(!latch.observe(false, 0.0));
        assert!(!latch.observe(true, 0.1));
    }

    #[test]
    fn observer_reports_at_every_step_and_the_threshold() {
        let skills = observer_thresholds(SKILLS_THRESHOLD);
        assert_eq!(skills.len(), OBSERVER_STEPS + 1);
        assert_eq!(skills.first(), Some(&0.0));
        assert_eq!(skills.last(), Some(&1.0));

        let odd = observer_thresholds(0.25);
        assert_eq!(odd.len(), OBSERVER_STEPS + 2);
        assert!(odd.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn coverage_is_zero_without_a_viewport() {
        assert_eq!(viewport_coverage(500.0, 0.0), 0.0);
        assert_eq!(viewport_coverage(1_600.0, 800.0), 1.0);
    }

    #[test]
    fn skill_bars_stay_empty_until_triggered() {
        assert_eq!(skill_bar_width(85, false), "width: 0%;");
        assert_eq!(skill_bar_width(85, true), "width: 85%;");
    }

    #[test]
    fn counter_to_one_hundred_ends_exactly_on_target() {
        let mut counter = CounterAnimation::new(100);
        let mut shown = Vec::new();

        let last = loop {
            match counter.tick() {
                CounterFrame::Running(value) => shown.push(value),
                CounterFrame::Done(value) => break value,
            }
            assert!(shown.len() < 1_000, "counter never finished");
        };

        assert_eq!(last, 100);
        assert!(shown.iter().all(|value| *value < 100));
        assert!(shown.windows(2).all(|pair| pair[0] <= pair[1]));
        // 100 / (2000 / 16) per frame: roughly 125 frames.
        assert!((120..=130).contains(&(shown.len() + 1)));
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut counter = CounterAnimation::new(0);

        assert_eq!(counter.tick(), CounterFrame::Done(0));
        assert_eq!(counter.tick().value(), 0);
    }
}
