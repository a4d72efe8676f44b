//! Confetti Burst
//!
//! Decorative particle animation played over the page when a pledge is
//! recorded. For three seconds, each animation frame launches two
//! particles from each screen edge (60° from the left, 120° from the
//! right, 55° of spread); particles fall under gravity, slow with drag,
//! and fade out as their life decays. Re-triggering during an active
//! burst extends the emission window instead of stacking loops.

use leptos::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::CanvasRenderingContext2d;

use crate::state::global::GlobalState;

/// Emission window per burst, in milliseconds
const BURST_DURATION_MS: f64 = 3000.0;

/// Particles launched per edge per frame
const PARTICLES_PER_EDGE: usize = 2;

/// Launch spread around the base angle, degrees
const SPREAD_DEG: f64 = 55.0;

/// Base launch speed, pixels per frame
const LAUNCH_SPEED: f64 = 11.0;

/// Downward acceleration per frame
const GRAVITY: f64 = 0.18;

/// Velocity retained each frame
const DRAG: f64 = 0.985;

/// Life lost per frame (~2 s at 60 fps)
const DECAY: f64 = 1.0 / 120.0;

/// Event palette: gold, navy, amber
const COLORS: [&str; 3] = ["#ca8a04", "#1e293b", "#fbbf24"];

/// A single confetti particle
#[derive(Clone, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub life: f64,
    pub color: &'static str,
}

impl Particle {
    /// Launch a particle from an edge origin. `r_angle`, `r_speed` and
    /// `r_color` are uniform random samples in `[0, 1)`. Angles follow
    /// screen convention: up is negative y.
    pub fn launch(
        origin_x: f64,
        origin_y: f64,
        angle_deg: f64,
        r_angle: f64,
        r_speed: f64,
        r_color: f64,
    ) -> Self {
        let angle = (angle_deg + (r_angle - 0.5) * SPREAD_DEG).to_radians();
        let speed = LAUNCH_SPEED * (0.7 + 0.6 * r_speed);
        let color_idx = ((r_color * COLORS.len() as f64) as usize).min(COLORS.len() - 1);

        Self {
            x: origin_x,
            y: origin_y,
            vx: angle.cos() * speed,
            vy: -angle.sin() * speed,
            radius: 3.0 + 2.0 * r_speed,
            life: 1.0,
            color: COLORS[color_idx],
        }
    }

    /// Integrate one frame: drag, gravity, position, life decay.
    pub fn step(&mut self) {
        self.vx *= DRAG;
        self.vy = self.vy * DRAG + GRAVITY;
        self.x += self.vx;
        self.y += self.vy;
        self.life -= DECAY;
    }

    pub fn alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Full-viewport canvas that plays a burst whenever the global
/// `celebration` counter is bumped.
#[component]
pub fn ConfettiCanvas() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    let particles: Rc<RefCell<Vec<Particle>>> = Rc::new(RefCell::new(Vec::new()));
    let emit_until = Rc::new(Cell::new(0.0_f64));
    let running = Rc::new(Cell::new(false));

    create_effect(move |prev: Option<u32>| {
        let n = state.celebration.get();

        // Skip the initial run; only react to actual bumps
        if prev.is_none() {
            return n;
        }

        emit_until.set(js_sys::Date::now() + BURST_DURATION_MS);

        if !running.get() {
            running.set(true);
            if let Some(canvas) = canvas_ref.get_untracked() {
                resize_to_viewport(&canvas);
            }
            frame(
                canvas_ref,
                Rc::clone(&particles),
                Rc::clone(&emit_until),
                Rc::clone(&running),
            );
        }

        n
    });

    view! {
        <canvas
            node_ref=canvas_ref
            class="fixed inset-0 z-40 pointer-events-none"
        />
    }
}

/// Match the canvas backing store to the viewport
fn resize_to_viewport(canvas: &web_sys::HtmlCanvasElement) {
    let window = window();
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

/// One burst frame: emit, integrate, draw, re-schedule until every
/// particle is dead and the emission window has closed.
fn frame(
    canvas_ref: NodeRef<html::Canvas>,
    particles: Rc<RefCell<Vec<Particle>>>,
    emit_until: Rc<Cell<f64>>,
    running: Rc<Cell<bool>>,
) {
    let Some(canvas) = canvas_ref.get_untracked() else {
        running.set(false);
        return;
    };

    let now = js_sys::Date::now();
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    {
        let mut list = particles.borrow_mut();

        if now < emit_until.get() {
            for _ in 0..PARTICLES_PER_EDGE {
                list.push(Particle::launch(
                    0.0,
                    height * 0.5,
                    60.0,
                    js_sys::Math::random(),
                    js_sys::Math::random(),
                    js_sys::Math::random(),
                ));
                list.push(Particle::launch(
                    width,
                    height * 0.5,
                    120.0,
                    js_sys::Math::random(),
                    js_sys::Math::random(),
                    js_sys::Math::random(),
                ));
            }
        }

        for p in list.iter_mut() {
            p.step();
        }
        list.retain(|p| p.alive() && p.y < height + 20.0);
    }

    if let Some(ctx) = context_2d(&canvas) {
        ctx.clear_rect(0.0, 0.0, width, height);
        for p in particles.borrow().iter() {
            ctx.set_global_alpha(p.life.clamp(0.0, 1.0));
            ctx.set_fill_style(&p.color.into());
            ctx.begin_path();
            let _ = ctx.arc(p.x, p.y, p.radius, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);
    }

    if now < emit_until.get() || !particles.borrow().is_empty() {
        request_animation_frame(move || frame(canvas_ref, particles, emit_until, running));
    } else {
        if let Some(ctx) = context_2d(&canvas) {
            ctx.clear_rect(0.0, 0.0, width, height);
        }
        running.set(false);
    }
}

fn context_2d(canvas: &web_sys::HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_directions() {
        // Left edge, 60°: rightward and upward
        let left = Particle::launch(0.0, 300.0, 60.0, 0.5, 0.5, 0.0);
        assert!(left.vx > 0.0);
        assert!(left.vy < 0.0);

        // Right edge, 120°: leftward and upward
        let right = Particle::launch(800.0, 300.0, 120.0, 0.5, 0.5, 0.0);
        assert!(right.vx < 0.0);
        assert!(right.vy < 0.0);
    }

    #[test]
    fn test_step_applies_gravity_and_decay() {
        let mut p = Particle::launch(0.0, 300.0, 60.0, 0.5, 0.5, 0.5);
        let vy_before = p.vy;
        let life_before = p.life;

        p.step();

        assert!(p.vy > vy_before, "gravity pulls downward");
        assert!(p.life < life_before, "life decays");
        assert!(p.alive());
    }

    #[test]
    fn test_particle_eventually_dies() {
        let mut p = Particle::launch(0.0, 300.0, 60.0, 0.5, 0.5, 0.5);
        let mut prev_life = p.life;
        for _ in 0..200 {
            p.step();
            assert!(p.life < prev_life);
            prev_life = p.life;
        }
        assert!(!p.alive());
    }

    #[test]
    fn test_color_sampling_stays_in_palette() {
        for r in [0.0, 0.33, 0.66, 0.999, 1.0] {
            let p = Particle::launch(0.0, 0.0, 60.0, 0.5, 0.5, r);
            assert!(COLORS.contains(&p.color));
        }
    }
}
