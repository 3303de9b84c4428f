//! In-memory page with a virtual clock.
//!
//! [`SimulatedPage`] records every mutation the slider makes; [`PageSession`]
//! plays the browser's role around it, firing due intervals and intersection
//! observer callbacks as the clock advances or the page scrolls.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::controller::HeroSlider;
use crate::environment::{HeroEnvironment, TimerHandle};
use crate::event::HeroEvent;
use crate::geometry::Rect;

#[derive(Debug, Clone, Copy)]
struct Interval {
    period: Duration,
    next_due: Duration,
}

#[derive(Debug, Clone)]
pub struct SimulatedPage {
    now: Duration,
    timers: BTreeMap<TimerHandle, Interval>,
    next_timer: u64,
    cleared_timers: usize,

    hero_media: bool,
    hero: Option<Rect>, // document coordinates
    scroll_y: f32,
    viewport_height: f32,
    hidden: bool,
    reduced_motion: bool,
    observer_supported: bool,
    observed_threshold: Option<f32>,

    background: Option<String>,
    shown: Vec<String>,
    zoomed: bool,
    transition_restarts: usize,
    preloaded: Vec<String>,
    video_visible: bool,
    video_playing: bool,
}

impl Default for SimulatedPage {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedPage {
    /// A 1280x720 viewport with a 500px hero at the top of the page.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            timers: BTreeMap::new(),
            next_timer: 1,
            cleared_timers: 0,
            hero_media: true,
            hero: Some(Rect::new(0.0, 0.0, 1280.0, 500.0)),
            scroll_y: 0.0,
            viewport_height: 720.0,
            hidden: false,
            reduced_motion: false,
            observer_supported: true,
            observed_threshold: None,
            background: None,
            shown: Vec::new(),
            zoomed: false,
            transition_restarts: 0,
            preloaded: Vec::new(),
            video_visible: true,
            video_playing: false,
        }
    }

    pub fn without_hero_media(mut self) -> Self {
        self.hero_media = false;
        self
    }

    pub fn without_hero_section(mut self) -> Self {
        self.hero = None;
        self
    }

    pub fn without_intersection_observer(mut self) -> Self {
        self.observer_supported = false;
        self
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    pub fn with_hero_rect(mut self, rect: Rect) -> Self {
        self.hero = Some(rect);
        self
    }

    pub fn set_hero_rect(&mut self, rect: Option<Rect>) {
        self.hero = rect;
    }

    pub fn set_scroll(&mut self, scroll_y: f32) {
        self.scroll_y = scroll_y;
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn active_timer_count(&self) -> usize {
        self.timers.len()
    }

    pub fn cleared_timer_count(&self) -> usize {
        self.cleared_timers
    }

    pub fn timer_period(&self, handle: TimerHandle) -> Option<Duration> {
        self.timers.get(&handle).map(|t| t.period)
    }

    pub fn background_image(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// Every background image set so far, oldest first.
    pub fn shown(&self) -> &[String] {
        &self.shown
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    pub fn transition_restarts(&self) -> usize {
        self.transition_restarts
    }

    pub fn preloaded(&self) -> &[String] {
        &self.preloaded
    }

    pub fn observed_threshold(&self) -> Option<f32> {
        self.observed_threshold
    }

    pub fn is_video_visible(&self) -> bool {
        self.video_visible
    }

    pub fn is_video_playing(&self) -> bool {
        self.video_playing
    }

    /// Removes and reschedules the earliest interval due at or before `deadline`,
    /// moving the clock to its due time.
    fn pop_due(&mut self, deadline: Duration) -> Option<TimerHandle> {
        let (handle, due) = self
            .timers
            .iter()
            .filter(|(_, t)| t.next_due <= deadline)
            .min_by_key(|(handle, t)| (t.next_due, **handle))
            .map(|(handle, t)| (*handle, t.next_due))?;

        self.now = due;
        if let Some(timer) = self.timers.get_mut(&handle) {
            timer.next_due += timer.period;
        }
        Some(handle)
    }

    fn intersection_state(&self) -> Option<bool> {
        let threshold = self.observed_threshold?;
        let rect = self.hero_rect()?;
        Some(rect.intersection_ratio(self.viewport_height) >= threshold)
    }
}

impl HeroEnvironment for SimulatedPage {
    fn has_hero_media(&self) -> bool {
        self.hero_media
    }

    fn hero_rect(&self) -> Option<Rect> {
        self.hero.map(|r| Rect::new(r.x, r.y - self.scroll_y, r.width, r.height))
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    fn is_document_hidden(&self) -> bool {
        self.hidden
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn supports_intersection_observer(&self) -> bool {
        self.observer_supported
    }

    fn observe_intersection(&mut self, threshold: f32) {
        self.observed_threshold = Some(threshold);
    }

    fn set_background_image(&mut self, url: &str) {
        self.background = Some(url.to_string());
        self.shown.push(url.to_string());
    }

    fn set_zoomed(&mut self, zoomed: bool) {
        self.zoomed = zoomed;
    }

    fn restart_transition(&mut self) {
        self.transition_restarts += 1;
    }

    fn preload(&mut self, url: &str) {
        self.preloaded.push(url.to_string());
    }

    fn set_video_visible(&mut self, visible: bool) {
        self.video_visible = visible;
    }

    fn play_video(&mut self) {
        self.video_playing = true;
    }

    fn pause_video(&mut self) {
        self.video_playing = false;
    }

    fn set_interval(&mut self, period: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_timer);
        self.next_timer += 1;
        self.timers.insert(handle, Interval { period, next_due: self.now + period });
        handle
    }

    fn clear_interval(&mut self, handle: TimerHandle) {
        if self.timers.remove(&handle).is_some() {
            self.cleared_timers += 1;
        }
    }
}

/// Drives a slider attached to a [`SimulatedPage`] the way a browser would.
#[derive(Debug)]
pub struct PageSession {
    slider: HeroSlider<SimulatedPage>,
    last_intersecting: Option<bool>,
}

impl PageSession {
    /// Attaches the slider and delivers the observer's initial callback.
    pub fn load(mut slider: HeroSlider<SimulatedPage>) -> Self {
        slider.attach();
        let mut session = Self { slider, last_intersecting: None };
        session.notify_intersection();
        session
    }

    pub fn slider(&self) -> &HeroSlider<SimulatedPage> {
        &self.slider
    }

    pub fn slider_mut(&mut self) -> &mut HeroSlider<SimulatedPage> {
        &mut self.slider
    }

    pub fn page(&self) -> &SimulatedPage {
        self.slider.environment()
    }

    /// Moves the clock forward, firing every interval that comes due on the way.
    pub fn advance(&mut self, by: Duration) {
        let deadline = self.page().now() + by;
        while let Some(handle) = self.slider.environment_mut().pop_due(deadline) {
            self.slider.dispatch(HeroEvent::Tick(handle));
        }
        self.slider.environment_mut().now = deadline;
    }

    pub fn scroll_to(&mut self, scroll_y: f32) {
        self.slider.environment_mut().set_scroll(scroll_y);
        self.notify_intersection();
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        if self.page().is_document_hidden() == hidden {
            return;
        }
        self.slider.environment_mut().set_hidden(hidden);
        self.slider.dispatch(HeroEvent::VisibilityChange);
    }

    pub fn pointer_enter(&mut self) {
        self.slider.dispatch(HeroEvent::PointerEnter);
    }

    pub fn pointer_leave(&mut self) {
        self.slider.dispatch(HeroEvent::PointerLeave);
    }

    pub fn focus_in(&mut self) {
        self.slider.dispatch(HeroEvent::FocusIn);
    }

    pub fn focus_out(&mut self) {
        self.slider.dispatch(HeroEvent::FocusOut);
    }

    /// Fires the observer callback when the hero crosses the observed threshold.
    fn notify_intersection(&mut self) {
        let Some(is_intersecting) = self.page().intersection_state() else {
            return;
        };
        if self.last_intersecting != Some(is_intersecting) {
            self.last_intersecting = Some(is_intersecting);
            self.slider.dispatch(HeroEvent::Intersection { is_intersecting });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intervals_fire_in_due_order() {
        let mut page = SimulatedPage::new();
        let slow = page.set_interval(Duration::from_millis(300));
        let fast = page.set_interval(Duration::from_millis(200));

        let deadline = Duration::from_millis(600);
        let mut fired = Vec::new();
        while let Some(handle) = page.pop_due(deadline) {
            fired.push(handle);
        }
        assert_eq!(fired, [fast, slow, fast, slow, fast]);
        assert_eq!(page.now(), Duration::from_millis(600));
    }

    #[test]
    fn cleared_interval_never_fires() {
        let mut page = SimulatedPage::new();
        let handle = page.set_interval(Duration::from_millis(100));
        page.clear_interval(handle);
        page.clear_interval(handle);

        assert_eq!(page.pop_due(Duration::from_secs(1)), None);
        assert_eq!(page.cleared_timer_count(), 1);
    }

    #[test]
    fn hero_rect_follows_scroll() {
        let mut page = SimulatedPage::new();
        page.set_scroll(200.0);
        assert_eq!(page.hero_rect(), Some(Rect::new(0.0, -200.0, 1280.0, 500.0)));
    }
}
