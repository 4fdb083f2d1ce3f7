pub mod background;
pub mod hero;
pub mod interop;
pub mod page;
pub mod sections;
pub mod styles;
pub mod theme;
pub mod trail;

pub use background::AnimatedBackground;
pub use hero::Hero;
pub use interop::*;
pub use page::Home;
pub use sections::*;
pub use theme::{use_theme, ThemeState, ThemeStore};
pub use trail::{use_trail, MouseTrail, TrailHandle};
