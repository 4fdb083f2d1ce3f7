use dioxus::prelude::*;
use shared_types::ColorMode;
use trail_engine::RandomSource;

pub const BOKEH_COUNT: usize = 8;

/// One blurred, slowly pulsing circle behind the hero.
#[derive(Debug, Clone, PartialEq)]
pub struct BokehCircle {
    pub id: usize,
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    pub opacity: f64,
    pub period_secs: f64,
}

impl BokehCircle {
    fn style(&self, mode: ColorMode) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {left}%; top: {top}%; \
             margin-left: {margin}px; margin-top: {margin}px; \
             background-color: {color}; filter: blur({blur}px); \
             --bokeh-base: {base}; --bokeh-peak: {peak}; \
             animation-duration: {period}s;",
            size = self.size_px,
            left = self.left_pct,
            top = self.top_pct,
            margin = -self.size_px / 2.0,
            color = bokeh_color(mode),
            blur = bokeh_blur_px(mode),
            base = self.opacity,
            peak = self.opacity * 1.5,
            period = self.period_secs,
        )
    }
}

pub fn bokeh_circles<R: RandomSource + ?Sized>(mode: ColorMode, random: &mut R) -> Vec<BokehCircle> {
    (0..BOKEH_COUNT)
        .map(|i| {
            let (size_px, opacity) = match mode {
                ColorMode::Light => (
                    250.0 + random.next_unit() * 250.0,
                    0.25 + random.next_unit() * 0.25,
                ),
                ColorMode::Dark => (
                    200.0 + random.next_unit() * 200.0,
                    0.1 + random.next_unit() * 0.2,
                ),
            };
            BokehCircle {
                id: i,
                left_pct: 5.0 + i as f64 * 12.0,
                top_pct: 15.0 + (i % 3) as f64 * 25.0,
                size_px,
                opacity,
                period_secs: 15.0 + random.next_unit() * 10.0,
            }
        })
        .collect()
}

pub fn bokeh_color(mode: ColorMode) -> &'static str {
    match mode {
        ColorMode::Dark => "rgb(147, 197, 253)",
        ColorMode::Light => "rgb(74, 222, 128)",
    }
}

pub fn bokeh_blur_px(mode: ColorMode) -> u32 {
    match mode {
        ColorMode::Dark => 80,
        ColorMode::Light => 100,
    }
}

pub fn background_color(mode: ColorMode) -> &'static str {
    match mode {
        ColorMode::Dark => "#000000",
        ColorMode::Light => "#ffffff",
    }
}

#[component]
pub fn AnimatedBackground(mode: Signal<ColorMode>) -> Element {
    let circles = use_memo(move || {
        let mut random = js_sys::Math::random;
        bokeh_circles(mode(), &mut random)
    });
    let current = mode();
    let fill_style = format!("background-color: {};", background_color(current));

    rsx! {
        div { class: "ambient-layer",
            div {
                class: "ambient-fill",
                style: fill_style,
            }
            for circle in circles.read().iter() {
                div {
                    key: "{circle.id}",
                    class: "bokeh",
                    style: circle.style(current),
                }
            }
            div { class: "paper-texture" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trail_engine::SequenceRandom;

    #[test]
    fn dark_circles_stay_in_dark_ranges() {
        let mut random = SequenceRandom::new(vec![0.0, 0.5, 0.99]);
        let circles = bokeh_circles(ColorMode::Dark, &mut random);
        assert_eq!(circles.len(), BOKEH_COUNT);
        for c in &circles {
            assert!((200.0..400.0).contains(&c.size_px));
            assert!((0.1..0.3).contains(&c.opacity));
            assert!((15.0..25.0).contains(&c.period_secs));
        }
    }

    #[test]
    fn light_circles_are_bigger_and_brighter() {
        let mut random = SequenceRandom::new(vec![0.0]);
        let circles = bokeh_circles(ColorMode::Light, &mut random);
        assert_eq!(circles[0].size_px, 250.0);
        assert_eq!(circles[0].opacity, 0.25);
    }

    #[test]
    fn positions_follow_index() {
        let mut random = SequenceRandom::new(vec![0.5]);
        let circles = bokeh_circles(ColorMode::Dark, &mut random);
        assert_eq!(circles[0].left_pct, 5.0);
        assert_eq!(circles[7].left_pct, 89.0);
        assert_eq!(circles[3].top_pct, 15.0);
        assert_eq!(circles[5].top_pct, 65.0);
    }

    #[test]
    fn style_carries_pulse_range() {
        let circle = BokehCircle {
            id: 0,
            left_pct: 5.0,
            top_pct: 15.0,
            size_px: 200.0,
            opacity: 0.5,
            period_secs: 20.0,
        };
        let style = circle.style(ColorMode::Dark);
        assert!(style.contains("margin-left: -100px"));
        assert!(style.contains("--bokeh-base: 0.5; --bokeh-peak: 0.75"));
        assert!(style.contains("blur(80px)"));
    }
}
