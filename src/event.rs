use crate::controller::HeroSlider;
use crate::environment::{HeroEnvironment, TimerHandle};

/// Signals a host delivers to the slider, in event-loop order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroEvent {
    /// Intersection observer callback for the hero section.
    Intersection { is_intersecting: bool },
    /// Document visibility flipped; the handler reads the new state from the environment.
    VisibilityChange,
    PointerEnter,
    PointerLeave,
    FocusIn,
    FocusOut,
    Tick(TimerHandle),
}

impl<E: HeroEnvironment> HeroSlider<E> {
    pub fn dispatch(&mut self, event: HeroEvent) {
        tracing::trace!(?event, state = self.state().label(), "dispatch");
        match event {
            HeroEvent::Intersection { is_intersecting } => self.on_intersection(is_intersecting),
            HeroEvent::VisibilityChange => self.on_visibility_change(),
            HeroEvent::PointerEnter => self.on_pointer_enter(),
            HeroEvent::PointerLeave => self.on_pointer_leave(),
            HeroEvent::FocusIn => self.on_focus_in(),
            HeroEvent::FocusOut => self.on_focus_out(),
            HeroEvent::Tick(handle) => self.on_tick(handle),
        }
    }
}
