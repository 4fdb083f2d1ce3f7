use shared_types::ColorMode;
use tracing::{debug, trace};

use crate::config::TrailConfig;
use crate::fade::{Fade, FadeProgress, FadeSpeed, FadeTrigger};
use crate::geometry::{Point, Segment, Viewport};
use crate::random::RandomSource;
use crate::surface::{paint, Surface};
use crate::timers::{TimerKind, TimerRegistry, TimerToken};

/// Who is drawing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailMode {
    /// Segments come from the auto-generator.
    Idle,
    /// Segments come from the pointer. `since` is the first move of the
    /// session, `last_move` the most recent one.
    Manual { since: u64, last_move: u64 },
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Start of the next segment. `None` until a first position is seen.
    pub previous: Option<Point>,
    pub current: Option<Point>,
}

impl PointerState {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

pub struct TrailEngine<S, R> {
    config: TrailConfig,
    color_mode: ColorMode,
    active_region: Option<f64>,
    viewport: Viewport,
    scroll_y: f64,
    mode: TrailMode,
    pointer: PointerState,
    segments: Vec<Segment>,
    fade: Option<Fade>,
    timers: TimerRegistry,
    auto_draw: Option<TimerToken>,
    manual_timeout: Option<TimerToken>,
    periodic_clear: Option<TimerToken>,
    fade_step: Option<TimerToken>,
    mode_settle: Option<TimerToken>,
    surface: Option<S>,
    random: R,
}

impl<S: Surface, R: RandomSource> TrailEngine<S, R> {
    pub fn new(
        config: TrailConfig,
        color_mode: ColorMode,
        active_region: Option<f64>,
        random: R,
    ) -> Self {
        Self {
            config,
            color_mode,
            active_region,
            viewport: Viewport::default(),
            scroll_y: 0.0,
            mode: TrailMode::Idle,
            pointer: PointerState::default(),
            segments: Vec::new(),
            fade: None,
            timers: TimerRegistry::new(),
            auto_draw: None,
            manual_timeout: None,
            periodic_clear: None,
            fade_step: None,
            mode_settle: None,
            surface: None,
            random,
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Hand the engine a surface and start the periodic clear and the
    /// auto-draw loop. Attaching again replaces the previous surface.
    pub fn attach(&mut self, mut surface: S, viewport: Viewport, scroll_y: f64, now: u64) {
        if self.surface.is_some() {
            self.detach();
        }

        surface.resize(viewport);
        surface.clear();
        self.surface = Some(surface);
        self.viewport = viewport;
        self.scroll_y = scroll_y;

        self.periodic_clear = Some(
            self.timers
                .schedule(now + self.config.auto_clear_ms, TimerKind::PeriodicClear),
        );
        if self.in_active_region() {
            self.schedule_auto_draw(now, self.config.auto_draw_initial_delay_ms);
        }
        debug!(
            width = viewport.width,
            height = viewport.height,
            mode = %self.color_mode,
            "trail surface attached"
        );
    }

    /// Cancel every pending timer, forget all trail state and give the
    /// surface back.
    pub fn detach(&mut self) -> Option<S> {
        self.cancel_all_timers();
        self.segments.clear();
        self.pointer.reset();
        self.mode = TrailMode::Idle;
        self.fade = None;
        let surface = self.surface.take();
        if surface.is_some() {
            debug!("trail surface detached");
        }
        surface
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    // ------------------------------------------------------------------
    // Host events
    // ------------------------------------------------------------------

    /// Fire every timer due at or before `now`, each at its own deadline.
    pub fn advance(&mut self, now: u64) {
        if !self.is_attached() {
            return;
        }
        while let Some((at, token, kind)) = self.timers.pop_due(now) {
            trace!(?kind, at, "timer fired");
            self.fire(at, token, kind);
        }
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64, now: u64) {
        if !self.is_attached() {
            return;
        }
        self.advance(now);

        if let Some(bound) = self.active_region {
            if y > bound {
                return;
            }
        }

        self.mode = match self.mode {
            TrailMode::Idle => {
                debug!(at = now, "trail entering manual mode");
                TrailMode::Manual {
                    since: now,
                    last_move: now,
                }
            }
            TrailMode::Manual { since, .. } => TrailMode::Manual {
                since,
                last_move: now,
            },
        };

        if let Some(token) = self.auto_draw.take() {
            self.timers.cancel(token);
        }

        self.pointer.current = Some(Point::new(x, y));
        self.try_draw();

        if let Some(token) = self.manual_timeout.take() {
            self.timers.cancel(token);
        }
        self.manual_timeout = Some(
            self.timers
                .schedule(now + self.config.manual_idle_ms, TimerKind::ManualTimeout),
        );
    }

    pub fn scrolled(&mut self, scroll_y: f64, now: u64) {
        if !self.is_attached() {
            return;
        }
        self.advance(now);
        self.scroll_y = scroll_y;

        if self.is_clearing() {
            return;
        }
        if self.start_fade(FadeSpeed::Fast, FadeTrigger::Scroll, now) {
            // Auto-draw resumes once the fade finishes.
            return;
        }
        if self.in_active_region() && self.mode == TrailMode::Idle {
            self.schedule_auto_draw(now, self.config.auto_draw_poll_ms);
        }
    }

    /// Clears the surface and forgets the last pointer position. Stored
    /// segments are kept even though they are no longer on screen.
    pub fn resized(&mut self, viewport: Viewport, now: u64) {
        if !self.is_attached() {
            return;
        }
        self.advance(now);
        self.viewport = viewport;
        self.pointer.reset();
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(viewport);
            surface.clear();
        }
    }

    /// Switch stroke color. A real change drops every segment and timer,
    /// then waits for the settle delay before auto-drawing again.
    pub fn set_color_mode(&mut self, mode: ColorMode, now: u64) {
        if mode == self.color_mode {
            return;
        }
        self.advance(now);
        self.color_mode = mode;
        if !self.is_attached() {
            return;
        }

        self.cancel_all_timers();
        self.segments.clear();
        self.pointer.reset();
        self.mode = TrailMode::Idle;
        self.fade = None;
        if let Some(surface) = self.surface.as_mut() {
            surface.clear();
        }

        self.mode_settle = Some(
            self.timers
                .schedule(now + self.config.mode_settle_ms, TimerKind::ModeSettle),
        );
        self.periodic_clear = Some(
            self.timers
                .schedule(now + self.config.auto_clear_ms, TimerKind::PeriodicClear),
        );
        debug!(mode = %mode, "trail reset after color mode change");
    }

    pub fn set_active_region(&mut self, bound: Option<f64>) {
        self.active_region = bound;
    }

    /// Fade out everything on screen. Returns false (and changes nothing)
    /// when there is nothing to clear or a fade is already running.
    pub fn request_clear(&mut self, now: u64) -> bool {
        if !self.is_attached() {
            return false;
        }
        self.advance(now);
        self.start_fade(FadeSpeed::Normal, FadeTrigger::External, now)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn mode(&self) -> TrailMode {
        self.mode
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// True while a fade runs or a color-mode change is settling.
    pub fn is_clearing(&self) -> bool {
        self.fade.is_some() || self.mode_settle.is_some()
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Deadline of the pending auto-draw attempt, if one is scheduled.
    pub fn next_auto_draw(&self) -> Option<u64> {
        self.auto_draw.and_then(|token| self.timers.deadline(token))
    }

    pub fn in_active_region(&self) -> bool {
        match self.active_region {
            Some(bound) => self.scroll_y <= bound,
            None => true,
        }
    }

    // ------------------------------------------------------------------
    // Timer handlers
    // ------------------------------------------------------------------

    fn fire(&mut self, at: u64, token: TimerToken, kind: TimerKind) {
        match kind {
            TimerKind::AutoDraw => {
                if self.auto_draw == Some(token) {
                    self.auto_draw = None;
                    self.auto_draw_tick(at);
                }
            }
            TimerKind::ManualTimeout => {
                if self.manual_timeout == Some(token) {
                    self.manual_timeout = None;
                    self.manual_timeout_tick(at);
                }
            }
            TimerKind::PeriodicClear => {
                if self.periodic_clear == Some(token) {
                    self.periodic_clear = None;
                    self.periodic_clear_tick(at);
                }
            }
            TimerKind::FadeStep => {
                if self.fade_step == Some(token) {
                    self.fade_step = None;
                    self.fade_step_tick(at);
                }
            }
            TimerKind::ModeSettle => {
                if self.mode_settle == Some(token) {
                    self.mode_settle = None;
                    if self.in_active_region() {
                        self.schedule_auto_draw(at, self.config.auto_draw_poll_ms);
                    }
                }
            }
        }
    }

    fn auto_draw_tick(&mut self, now: u64) {
        let manual = matches!(self.mode, TrailMode::Manual { .. });
        if self.is_clearing() || !self.in_active_region() || manual {
            self.schedule_auto_draw(now, self.config.auto_draw_poll_ms);
            return;
        }

        let candidate = self.auto_candidate();
        self.pointer.current = Some(candidate);
        let delay = if self.try_draw() {
            self.config.auto_draw_interval_ms
        } else {
            self.config.auto_draw_retry_ms
        };
        self.schedule_auto_draw(now, delay);
    }

    fn manual_timeout_tick(&mut self, now: u64) {
        let TrailMode::Manual { since, last_move } = self.mode else {
            return;
        };

        self.mode = TrailMode::Idle;
        let session_ms = last_move.saturating_sub(since);
        debug!(session_ms, at = now, "trail returning to idle");

        if session_ms >= self.config.auto_clear_ms && !self.is_clearing() {
            self.start_fade(FadeSpeed::Normal, FadeTrigger::LongManualSession, now);
        }
        if self.in_active_region() {
            self.schedule_auto_draw(now, self.config.auto_draw_poll_ms);
        }
    }

    fn periodic_clear_tick(&mut self, now: u64) {
        self.periodic_clear = Some(
            self.timers
                .schedule(now + self.config.auto_clear_ms, TimerKind::PeriodicClear),
        );
        if matches!(self.mode, TrailMode::Manual { .. }) || self.is_clearing() {
            return;
        }
        self.start_fade(FadeSpeed::Normal, FadeTrigger::Periodic, now);
    }

    fn fade_step_tick(&mut self, now: u64) {
        let Some(fade) = self.fade.as_mut() else {
            return;
        };
        match fade.tick(&mut self.segments) {
            FadeProgress::Running => {
                let interval = fade.speed().interval_ms();
                self.repaint();
                self.fade_step = Some(self.timers.schedule(now + interval, TimerKind::FadeStep));
            }
            FadeProgress::Finished => self.finish_fade(now),
        }
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn start_fade(&mut self, speed: FadeSpeed, trigger: FadeTrigger, now: u64) -> bool {
        if self.segments.is_empty() || self.fade.is_some() {
            return false;
        }
        self.fade = Some(Fade::new(speed, trigger));
        self.fade_step = Some(
            self.timers
                .schedule(now + speed.interval_ms(), TimerKind::FadeStep),
        );
        debug!(
            ?speed,
            ?trigger,
            segments = self.segments.len(),
            "trail fade started"
        );
        true
    }

    fn finish_fade(&mut self, now: u64) {
        let trigger = self.fade.take().map(|fade| fade.trigger());
        self.segments.clear();
        self.pointer.reset();
        if let Some(surface) = self.surface.as_mut() {
            surface.clear();
        }
        debug!(?trigger, "trail fade finished");

        if self.mode == TrailMode::Idle && self.in_active_region() {
            self.schedule_auto_draw(now, self.config.auto_draw_poll_ms);
        }
    }

    /// Append a segment from the previous to the current pointer position if
    /// they are far enough apart.
    fn try_draw(&mut self) -> bool {
        let Some(current) = self.pointer.current else {
            return false;
        };
        let Some(previous) = self.pointer.previous else {
            self.pointer.previous = Some(current);
            return false;
        };
        if previous.distance(current) <= self.config.min_segment_length {
            return false;
        }

        self.segments.push(Segment::between(previous, current));
        self.pointer.previous = Some(current);
        self.repaint();
        true
    }

    fn auto_candidate(&mut self) -> Point {
        let center = self.viewport.center();
        let offset_x = self.viewport.width as f64 * self.config.auto_box_fraction;
        let offset_y = self.viewport.height as f64 * self.config.auto_box_fraction;

        let x = self.random_between(center.x - offset_x, center.x + offset_x);
        let y = self.random_between(center.y - offset_y, center.y + offset_y);
        self.viewport.clamp(Point::new(x, y))
    }

    fn random_between(&mut self, min: f64, max: f64) -> f64 {
        (self.random.next_unit() * (max - min) + min).floor()
    }

    fn schedule_auto_draw(&mut self, now: u64, delay: u64) {
        if let Some(token) = self.auto_draw.take() {
            self.timers.cancel(token);
        }
        self.auto_draw = Some(self.timers.schedule(now + delay, TimerKind::AutoDraw));
    }

    fn cancel_all_timers(&mut self) {
        self.timers.cancel_all();
        self.auto_draw = None;
        self.manual_timeout = None;
        self.periodic_clear = None;
        self.fade_step = None;
        self.mode_settle = None;
    }

    fn repaint(&mut self) {
        let mode = self.color_mode;
        let width = self.config.line_width;
        if let Some(surface) = self.surface.as_mut() {
            paint(surface, &self.segments, mode, width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;
    use crate::surface::RecordingSurface;

    type Engine = TrailEngine<RecordingSurface, SequenceRandom>;

    fn attached(region: Option<f64>) -> Engine {
        let mut engine = Engine::new(
            TrailConfig::default(),
            ColorMode::Dark,
            region,
            SequenceRandom::new(vec![0.5]),
        );
        engine.attach(RecordingSurface::new(), Viewport::new(1000, 800), 0.0, 0);
        engine
    }

    #[test]
    fn detached_engine_ignores_everything() {
        let mut engine = Engine::new(
            TrailConfig::default(),
            ColorMode::Dark,
            None,
            SequenceRandom::new(vec![0.5]),
        );
        engine.pointer_moved(0.0, 0.0, 0);
        engine.pointer_moved(100.0, 0.0, 10);
        engine.scrolled(50.0, 20);
        assert!(!engine.request_clear(30));
        assert!(engine.segments().is_empty());
        assert_eq!(engine.pending_timers(), 0);
        assert_eq!(engine.mode(), TrailMode::Idle);
    }

    #[test]
    fn attach_schedules_periodic_clear_and_first_auto_draw() {
        let engine = attached(Some(800.0));
        assert_eq!(engine.pending_timers(), 2);
        assert_eq!(engine.next_auto_draw(), Some(3_000));
        assert_eq!(engine.next_deadline(), Some(3_000));
    }

    #[test]
    fn attach_outside_region_skips_auto_draw() {
        let mut engine = Engine::new(
            TrailConfig::default(),
            ColorMode::Dark,
            Some(800.0),
            SequenceRandom::new(vec![0.5]),
        );
        engine.attach(RecordingSurface::new(), Viewport::new(1000, 800), 900.0, 0);
        assert_eq!(engine.next_auto_draw(), None);
        assert_eq!(engine.pending_timers(), 1);
    }

    #[test]
    fn first_move_only_records_position() {
        let mut engine = attached(None);
        engine.pointer_moved(10.0, 10.0, 0);
        assert!(engine.segments().is_empty());
        assert_eq!(engine.pointer().previous, Some(Point::new(10.0, 10.0)));
        assert!(matches!(engine.mode(), TrailMode::Manual { since: 0, .. }));
    }

    #[test]
    fn moves_at_exact_threshold_do_not_draw() {
        let mut engine = attached(None);
        engine.pointer_moved(0.0, 0.0, 0);
        engine.pointer_moved(45.0, 0.0, 10);
        assert!(engine.segments().is_empty());
        engine.pointer_moved(45.1, 0.0, 20);
        assert_eq!(engine.segments().len(), 1);
    }

    #[test]
    fn pointer_below_active_region_is_ignored() {
        let mut engine = attached(Some(400.0));
        engine.pointer_moved(10.0, 500.0, 0);
        assert_eq!(engine.mode(), TrailMode::Idle);
        assert_eq!(engine.pointer().current, None);
        assert_eq!(engine.next_auto_draw(), Some(3_000));
    }

    #[test]
    fn pointer_move_cancels_auto_draw() {
        let mut engine = attached(None);
        engine.pointer_moved(10.0, 10.0, 100);
        assert_eq!(engine.next_auto_draw(), None);
        assert_eq!(engine.next_deadline(), Some(2_100));
    }

    #[test]
    fn each_move_pushes_back_manual_timeout() {
        let mut engine = attached(None);
        engine.pointer_moved(0.0, 0.0, 0);
        engine.pointer_moved(100.0, 0.0, 1_500);
        engine.advance(2_100);
        assert!(matches!(engine.mode(), TrailMode::Manual { .. }));
        engine.advance(3_500);
        assert_eq!(engine.mode(), TrailMode::Idle);
        assert_eq!(engine.next_auto_draw(), Some(4_500));
    }

    #[test]
    fn periodic_clear_is_skipped_in_manual_mode() {
        let mut engine = attached(None);
        engine.pointer_moved(0.0, 0.0, 9_000);
        engine.pointer_moved(100.0, 0.0, 9_500);
        let before = engine.segments().len();
        assert!(before > 0);

        engine.advance(10_000);
        assert!(!engine.is_fading());
        assert_eq!(engine.segments().len(), before);
    }

    #[test]
    fn color_mode_change_resets_everything() {
        let mut engine = attached(None);
        engine.pointer_moved(0.0, 0.0, 0);
        engine.pointer_moved(100.0, 0.0, 10);
        assert_eq!(engine.segments().len(), 1);

        engine.set_color_mode(ColorMode::Light, 20);
        assert!(engine.segments().is_empty());
        assert_eq!(engine.mode(), TrailMode::Idle);
        assert_eq!(engine.pointer(), PointerState::default());
        assert!(engine.is_clearing());
        assert_eq!(engine.next_deadline(), Some(820));

        engine.advance(820);
        assert!(!engine.is_clearing());
        assert_eq!(engine.next_auto_draw(), Some(1_820));
    }

    #[test]
    fn same_color_mode_is_not_a_change() {
        let mut engine = attached(None);
        engine.pointer_moved(0.0, 0.0, 0);
        engine.pointer_moved(100.0, 0.0, 10);
        engine.set_color_mode(ColorMode::Dark, 20);
        assert_eq!(engine.segments().len(), 1);
        assert!(!engine.is_clearing());
    }

    #[test]
    fn resize_keeps_segments_but_forgets_pointer() {
        let mut engine = attached(None);
        engine.pointer_moved(0.0, 0.0, 0);
        engine.pointer_moved(100.0, 0.0, 10);
        engine.resized(Viewport::new(640, 480), 20);

        assert_eq!(engine.segments().len(), 1);
        assert_eq!(engine.pointer(), PointerState::default());
        assert_eq!(engine.viewport(), Viewport::new(640, 480));
        let surface = engine.surface().unwrap();
        assert!(surface.visible_strokes().is_empty());
    }

    #[test]
    fn strokes_use_current_mode_color() {
        let mut engine = attached(None);
        engine.set_color_mode(ColorMode::Light, 0);
        engine.pointer_moved(0.0, 0.0, 10);
        engine.pointer_moved(100.0, 0.0, 20);
        let strokes = engine.surface().unwrap().visible_strokes();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].1.rgb, (51, 51, 51));
        assert_eq!(strokes[0].1.width, 0.8);
    }

    #[test]
    fn detach_cancels_timers_and_returns_surface() {
        let mut engine = attached(None);
        engine.pointer_moved(0.0, 0.0, 0);
        engine.pointer_moved(100.0, 0.0, 10);
        let surface = engine.detach();
        assert!(surface.is_some());
        assert_eq!(engine.pending_timers(), 0);
        assert!(engine.segments().is_empty());
        assert!(!engine.is_attached());
    }
}
