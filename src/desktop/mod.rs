//! raylib window hosting the hero slider.
//!
//! Mouse wheel scrolls the page, hovering the banner pauses it, Tab toggles
//! keyboard focus on it, and minimising the window hides the "tab".

mod host;
pub mod texture_loader;

use raylib::prelude::*;

use crate::config::HeroConfig;
use crate::constants::*;
use crate::controller::HeroSlider;
use crate::environment::HeroEnvironment;
use crate::event::HeroEvent;

pub use host::WindowPage;

#[derive(Debug, Clone)]
pub struct WindowOptions {
    pub config: HeroConfig,
    /// `false` skips intersection observation; the slider then starts unconditionally.
    pub observer: bool,
}

#[derive(Debug, Default)]
struct InputState {
    intersecting: Option<bool>,
    pointer_inside: bool,
    focused: bool,
    hidden: bool,
}

impl InputState {
    /// Turns this frame's window input into slider events, in the order a
    /// browser would deliver them.
    fn poll(&mut self, rl: &RaylibHandle, page: &mut WindowPage) -> Vec<HeroEvent> {
        let mut events = Vec::new();

        let hidden = rl.is_window_minimized();
        if hidden != self.hidden {
            self.hidden = hidden;
            page.set_hidden(hidden);
            events.push(HeroEvent::VisibilityChange);
        }

        let intersecting = page.intersection_state();
        if intersecting.is_some() && intersecting != self.intersecting {
            self.intersecting = intersecting;
            events.push(HeroEvent::Intersection {
                is_intersecting: intersecting == Some(true),
            });
        }

        let mouse = rl.get_mouse_position();
        let inside = rl.is_window_focused()
            && page
                .hero_rect()
                .is_some_and(|rect| rect.contains(mouse.x, mouse.y));
        if inside != self.pointer_inside {
            self.pointer_inside = inside;
            events.push(if inside { HeroEvent::PointerEnter } else { HeroEvent::PointerLeave });
        }

        if rl.is_key_pressed(KeyboardKey::KEY_TAB) {
            self.focused = !self.focused;
            events.push(if self.focused { HeroEvent::FocusIn } else { HeroEvent::FocusOut });
        }

        events
    }
}

pub fn run(options: WindowOptions) {
    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH, RENDER_HEIGHT)
        .title("Hero Slider")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let page = WindowPage::new(
        rl.get_screen_width() as f32,
        rl.get_screen_height() as f32,
        options.observer,
    );
    let preferences = options.config.preferences(page.prefers_reduced_motion());
    let mut slider = HeroSlider::new(page, options.config.slide_set(), preferences, options.config.mode);
    slider.attach();

    let mut input = InputState::default();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        let events = {
            let page = slider.environment_mut();
            page.resize(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
            page.scroll_by(-rl.get_mouse_wheel_move() * SCROLL_STEP);
            input.poll(&rl, page)
        };
        for event in events {
            slider.dispatch(event);
        }

        let due = slider.environment_mut().advance_clock(dt);
        for handle in due {
            slider.dispatch(HeroEvent::Tick(handle));
        }

        let page = slider.environment_mut();
        page.load_pending(&mut rl, &thread);
        page.update_zoom(dt);

        let status = format!(
            "{} | slide {}/{} | every {:.1}s | scroll {:.0}px",
            slider.state().label(),
            slider.current_index() + 1,
            slider.slides().len(),
            slider.effective_interval().as_secs_f32(),
            slider.environment().scroll_y(),
        );

        let mut d = rl.begin_drawing(&thread);
        slider.environment().draw(&mut d, &status);
    }
}
