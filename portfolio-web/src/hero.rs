use dioxus::prelude::*;
use shared_types::ColorMode;

use crate::background::AnimatedBackground;
use crate::interop::scroll_into_view;
use crate::sections::ABOUT_ID;
use crate::trail::{MouseTrail, TrailHandle};

pub const OWNER_NAME: &str = "trevor kwan";
pub const TAGLINE: &str = "software engineer · robotics researcher · photographer";

/// Label for the mode toggle, e.g. `[dark]`.
pub fn mode_label(mode: ColorMode) -> String {
    format!("[{mode}]")
}

#[component]
pub fn Hero(
    mode: Signal<ColorMode>,
    viewport: Signal<(u32, u32)>,
    trail: TrailHandle,
    on_toggle_mode: EventHandler<()>,
) -> Element {
    let label = mode_label(mode());
    let enter_trail = trail.clone();

    rsx! {
        section { class: "hero",
            AnimatedBackground { mode }
            MouseTrail { handle: trail, mode, viewport }
            div { class: "hero-content",
                h1 { class: "hero-name", "{OWNER_NAME}" }
                p { class: "hero-tagline", "{TAGLINE}" }
                button {
                    class: "mode-toggle",
                    r#type: "button",
                    onclick: move |_| on_toggle_mode.call(()),
                    "{label}"
                }
                button {
                    class: "enter-button",
                    r#type: "button",
                    onclick: move |_| {
                        enter_trail.clear();
                        scroll_into_view(ABOUT_ID);
                    },
                    "enter"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_label_shows_current_mode() {
        assert_eq!(mode_label(ColorMode::Dark), "[dark]");
        assert_eq!(mode_label(ColorMode::Light), "[light]");
    }
}
