use std::time::Duration;

use tracing::{debug, info};

use crate::config::{DisplayPreferences, HeroMode};
use crate::constants::INTERSECTION_THRESHOLD;
use crate::environment::{HeroEnvironment, TimerHandle};
use crate::slide::SlideSet;
use crate::state::SliderState;

/// Rotates the hero background while the hero is on screen, the tab is
/// visible, and neither pointer nor focus rests on it.
///
/// Holds at most one interval timer at a time. Every gating handler funnels
/// into [`start`](Self::start) or [`stop`](Self::stop), both idempotent, so
/// any interleaving of signals settles on the right state.
#[derive(Debug)]
pub struct HeroSlider<E: HeroEnvironment> {
    env: E,
    slides: SlideSet,
    preferences: DisplayPreferences,
    mode: HeroMode,
    current_index: usize,
    timer: Option<TimerHandle>,
}

impl<E: HeroEnvironment> HeroSlider<E> {
    pub fn new(env: E, slides: SlideSet, preferences: DisplayPreferences, mode: HeroMode) -> Self {
        Self {
            env,
            slides,
            preferences,
            mode,
            current_index: 0,
            timer: None,
        }
    }

    /// Page-load wiring: applies the hero mode, hooks up visibility gating
    /// and paints the first slide.
    pub fn attach(&mut self) {
        match self.mode {
            HeroMode::ImageSlider => {
                self.env.set_video_visible(false);
                self.env.pause_video();
            }
            HeroMode::Video => {
                self.env.set_video_visible(true);
                if !self.preferences.reduced_motion {
                    self.env.play_video();
                }
            }
        }

        if self.mode == HeroMode::ImageSlider {
            if self.env.hero_rect().is_some() && self.env.supports_intersection_observer() {
                self.env.observe_intersection(INTERSECTION_THRESHOLD);
            } else {
                info!("intersection observation unavailable, starting slider unconditionally");
                self.start();
            }
        }

        // Paint once in case the first observer callback is late.
        if self.mode == HeroMode::ImageSlider && !self.slides.is_empty() {
            self.show_slide(self.current_index);
        }

        info!(
            mode = ?self.mode,
            slides = self.slides.len(),
            interval_ms = self.preferences.effective_interval_ms(),
            reduced_motion = self.preferences.reduced_motion,
            "hero slider attached"
        );
    }

    pub fn show_slide(&mut self, index: usize) {
        if !self.env.has_hero_media() {
            return;
        }
        let Some(url) = self.slides.get(index) else {
            return;
        };

        self.env.set_background_image(url);

        self.env.set_zoomed(false);
        self.env.restart_transition();
        if !self.preferences.reduced_motion {
            self.env.set_zoomed(true);
        }

        if let Some(next) = self.slides.next_index(index).and_then(|i| self.slides.get(i)) {
            self.env.preload(next);
        }
        debug!(index, url, "showing slide");
    }

    pub fn start(&mut self) {
        if self.mode != HeroMode::ImageSlider || self.timer.is_some() || self.slides.is_empty() {
            return;
        }

        self.show_slide(self.current_index);
        let handle = self.env.set_interval(self.effective_interval());
        self.timer = Some(handle);
        debug!(?handle, index = self.current_index, "slider running");
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.env.clear_interval(handle);
            debug!(?handle, index = self.current_index, "slider stopped");
        }
    }

    /// Interval callback. Ticks from a cleared timer are ignored.
    pub fn on_tick(&mut self, handle: TimerHandle) {
        if self.timer != Some(handle) {
            debug!(?handle, "ignoring stale tick");
            return;
        }
        if let Some(next) = self.slides.next_index(self.current_index) {
            self.current_index = next;
            self.show_slide(next);
        }
    }

    pub fn on_intersection(&mut self, is_intersecting: bool) {
        if is_intersecting {
            // Hidden tabs stay paused; visibility change resumes later.
            if !self.env.is_document_hidden() {
                self.start();
            }
        } else {
            self.stop();
        }
    }

    pub fn on_visibility_change(&mut self) {
        if self.env.is_document_hidden() {
            self.stop();
        } else {
            self.resume_if_in_view();
        }
    }

    pub fn on_pointer_enter(&mut self) {
        self.stop();
    }

    pub fn on_pointer_leave(&mut self) {
        self.resume_if_in_view();
    }

    pub fn on_focus_in(&mut self) {
        self.stop();
    }

    pub fn on_focus_out(&mut self) {
        self.resume_if_in_view();
    }

    pub fn is_hero_in_view(&self) -> bool {
        self.env
            .hero_rect()
            .is_some_and(|rect| rect.is_in_view(self.env.viewport_height()))
    }

    fn resume_if_in_view(&mut self) {
        if self.mode == HeroMode::ImageSlider
            && !self.env.is_document_hidden()
            && self.is_hero_in_view()
        {
            self.start();
        }
    }

    pub fn effective_interval(&self) -> Duration {
        self.preferences.effective_interval()
    }

    pub fn state(&self) -> SliderState {
        if self.timer.is_some() {
            SliderState::Running
        } else {
            SliderState::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn active_timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slides(&self) -> &SlideSet {
        &self.slides
    }

    pub fn preferences(&self) -> &DisplayPreferences {
        &self.preferences
    }

    pub fn environment(&self) -> &E {
        &self.env
    }

    pub fn environment_mut(&mut self) -> &mut E {
        &mut self.env
    }
}
