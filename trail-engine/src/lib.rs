//! Trail engine - the cursor trail effect as a host-independent state machine
//!
//! The engine owns the segment store, the pointer state, the idle/manual mode
//! and a registry of pending timers. A host feeds it pointer, scroll, resize
//! and color-mode events plus a clock, and provides a [`Surface`] to paint on.
//! Time is virtual: the host calls [`TrailEngine::advance`] and the engine
//! fires every due timer in deadline order, which keeps the whole effect
//! testable without a browser.

pub mod config;
pub mod engine;
pub mod fade;
pub mod geometry;
pub mod random;
pub mod surface;
pub mod timers;

pub use config::TrailConfig;
pub use engine::{PointerState, TrailEngine, TrailMode};
pub use fade::{Fade, FadeProgress, FadeSpeed, FadeTrigger};
pub use geometry::{Point, Segment, Viewport};
pub use random::{RandomSource, SequenceRandom};
pub use surface::{paint, RecordingSurface, StrokeStyle, Surface, SurfaceOp};
pub use timers::{TimerKind, TimerRegistry, TimerToken};
