//! Count-Up Display
//!
//! Animates numeric transitions of the pledge total. The displayed value
//! starts at the incoming value (no count-from-zero at load), then eases
//! toward each new target over one second with an ease-out quartic curve.
//! A new target mid-animation restarts the curve from the value currently
//! on screen; the superseded frame chain stops at its generation check.

use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

/// Animation duration in milliseconds
const DURATION_MS: f64 = 1000.0;

/// Animated currency counter
#[component]
pub fn Counter(
    /// Target value to display
    #[prop(into)]
    value: Signal<f64>,
) -> impl IntoView {
    let displayed = create_rw_signal(value.get_untracked().floor() as i64);
    let generation = Rc::new(Cell::new(0u32));

    create_effect(move |_| {
        let target = value.get();
        let start = displayed.get_untracked();

        // Identical target (e.g. first paint from cache): stay idle
        if target.floor() as i64 == start {
            return;
        }

        generation.set(generation.get() + 1);
        let started = js_sys::Date::now();
        animate(
            displayed,
            start as f64,
            target,
            started,
            generation.get(),
            Rc::clone(&generation),
        );
    });

    view! {
        <span class="tabular-nums tracking-tight">
            {move || format_eur(displayed.get())}
        </span>
    }
}

/// One animation frame: apply the eased value, re-schedule until done.
fn animate(
    displayed: RwSignal<i64>,
    start: f64,
    target: f64,
    started: f64,
    generation: u32,
    current_generation: Rc<Cell<u32>>,
) {
    let progress = ((js_sys::Date::now() - started) / DURATION_MS).min(1.0);

    if displayed.try_set(animated_value(start, target, progress)).is_some() {
        // Signal disposed: the view is gone, stop the chain
        return;
    }

    if progress < 1.0 {
        request_animation_frame(move || {
            // A newer target superseded this animation
            if current_generation.get() != generation {
                return;
            }
            animate(displayed, start, target, started, generation, current_generation);
        });
    }
}

/// Ease-out quartic curve: fast start, smooth deceleration.
pub fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(4)
}

/// Displayed integer at a given animation progress.
pub fn animated_value(start: f64, target: f64, progress: f64) -> i64 {
    (start + (target - start) * ease_out_quart(progress)).floor() as i64
}

/// Format an integer amount as a localized euro string ("1 500 €",
/// non-breaking spaces, no decimals).
pub fn format_eur(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::new();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(c);
    }

    if amount < 0 {
        format!("-{}\u{a0}€", grouped)
    } else {
        format!("{}\u{a0}€", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_quart_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
    }

    #[test]
    fn test_animation_lands_on_target() {
        assert_eq!(animated_value(120.0, 150.0, 1.0), 150);
        assert_eq!(animated_value(150.0, 175.5, 1.0), 175);
        assert_eq!(animated_value(150.0, 120.0, 1.0), 120);
    }

    #[test]
    fn test_animation_monotonic_and_bounded() {
        for (start, target) in [(120.0_f64, 150.0_f64), (150.0, 120.0), (0.0, 1234.5)] {
            let lo = (start.min(target.floor())) as i64;
            let hi = (start.max(target.floor())) as i64;
            let mut prev = animated_value(start, target, 0.0);

            for step in 1..=100 {
                let v = animated_value(start, target, step as f64 / 100.0);
                if target > start {
                    assert!(v >= prev, "not increasing at step {}", step);
                } else {
                    assert!(v <= prev, "not decreasing at step {}", step);
                }
                assert!(v >= lo && v <= hi, "out of bounds at step {}", step);
                prev = v;
            }
            assert_eq!(prev, target.floor() as i64);
        }
    }

    #[test]
    fn test_unchanged_target_is_a_fixed_point() {
        for p in [0.0, 0.3, 0.7, 1.0] {
            assert_eq!(animated_value(150.0, 150.0, p), 150);
        }
    }

    #[test]
    fn test_format_eur() {
        assert_eq!(format_eur(0), "0\u{a0}€");
        assert_eq!(format_eur(120), "120\u{a0}€");
        assert_eq!(format_eur(1500), "1\u{a0}500\u{a0}€");
        assert_eq!(format_eur(1234567), "1\u{a0}234\u{a0}567\u{a0}€");
    }
}
