use std::time::Duration;
use crate::geometry::Rect;

/// Token identifying one repeating timer issued by [`HeroEnvironment::set_interval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(pub u64);

/// The page surface the hero slider reads from and writes to.
///
/// Lookups that can miss (hero section, hero media) are reported instead of
/// failing, so the controller can degrade to a no-op.
pub trait HeroEnvironment {
    // --- Element lookup and environment signals ---
    fn has_hero_media(&self) -> bool;
    fn hero_rect(&self) -> Option<Rect>;
    fn viewport_height(&self) -> f32;
    fn is_document_hidden(&self) -> bool;
    fn prefers_reduced_motion(&self) -> bool;
    fn supports_intersection_observer(&self) -> bool;
    fn observe_intersection(&mut self, threshold: f32);

    // --- Hero media mutation ---
    fn set_background_image(&mut self, url: &str);
    fn set_zoomed(&mut self, zoomed: bool);
    /// Forces the pending style change to apply so a removed-then-added
    /// zoom class replays its transition.
    fn restart_transition(&mut self);
    fn preload(&mut self, url: &str);

    // --- Hero video element ---
    fn set_video_visible(&mut self, visible: bool);
    fn play_video(&mut self);
    fn pause_video(&mut self);

    // --- Timers ---
    fn set_interval(&mut self, period: Duration) -> TimerHandle;
    fn clear_interval(&mut self, handle: TimerHandle);
}
