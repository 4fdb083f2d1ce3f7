use dioxus::prelude::*;

use crate::hero::Hero;
use crate::interop::{get_viewport_size, mode_transition_secs, track_viewport};
use crate::sections::ResumeSections;
use crate::styles::PORTFOLIO_STYLES;
use crate::theme::use_theme;
use crate::trail::use_trail;

/// The single-page site: hero with the trail, then the resume.
#[component]
pub fn Home() -> Element {
    let theme = use_theme();
    let mode = theme.mode;
    let viewport = use_signal(get_viewport_size);
    let trail = use_trail(mode, viewport);

    use_effect(move || {
        spawn(async move {
            track_viewport(viewport).await;
        });
    });

    let (width, _) = viewport();
    let transition = format!("--mode-transition: {}s;", mode_transition_secs(width));

    rsx! {
        style { {PORTFOLIO_STYLES} }
        div { class: "portfolio", style: transition,
            Hero {
                mode,
                viewport,
                trail,
                on_toggle_mode: move |_| theme.toggle(),
            }
            main { ResumeSections {} }
        }
    }
}
