use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use std::time::Duration;

use raylib::prelude::*;

use crate::constants::*;
use crate::desktop::texture_loader::load_texture_with_exif_rotation;
use crate::environment::{HeroEnvironment, TimerHandle};
use crate::geometry::Rect;

struct Interval {
    period: Duration,
    next_due: Duration,
}

/// A scrollable page in a raylib window: the hero banner on top, filler
/// content below it.
///
/// Texture loads need the raylib handle, so `set_background_image` and
/// `preload` only queue paths; the frame loop calls [`load_pending`](Self::load_pending).
pub struct WindowPage {
    textures: HashMap<String, Texture2D>,
    failed: HashSet<String>,
    pending: Vec<String>,

    background: Option<String>,
    zoomed: bool,
    zoom_elapsed: f32,
    video_visible: bool,
    video_playing: bool,

    clock: Duration,
    timers: BTreeMap<TimerHandle, Interval>,
    next_timer: u64,

    screen_width: f32,
    screen_height: f32,
    scroll_y: f32,
    hidden: bool,
    observer_supported: bool,
    observed_threshold: Option<f32>,
}

impl WindowPage {
    pub fn new(screen_width: f32, screen_height: f32, observer_supported: bool) -> Self {
        Self {
            textures: HashMap::new(),
            failed: HashSet::new(),
            pending: Vec::new(),
            background: None,
            zoomed: false,
            zoom_elapsed: 0.0,
            video_visible: true,
            video_playing: false,
            clock: Duration::ZERO,
            timers: BTreeMap::new(),
            next_timer: 1,
            screen_width,
            screen_height,
            scroll_y: 0.0,
            hidden: false,
            observer_supported,
            observed_threshold: None,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.screen_width = width;
        self.screen_height = height;
        self.scroll_by(0.0);
    }

    pub fn scroll_by(&mut self, delta: f32) {
        let max_scroll = self.screen_height * (PAGE_HEIGHT_RATIO - 1.0);
        self.scroll_y = (self.scroll_y + delta).clamp(0.0, max_scroll);
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Whether the hero meets the observed threshold; `None` until observed.
    pub fn intersection_state(&self) -> Option<bool> {
        let threshold = self.observed_threshold?;
        let rect = self.hero_rect()?;
        Some(rect.intersection_ratio(self.screen_height) >= threshold)
    }

    /// Advances the page clock and returns the intervals that came due.
    pub fn advance_clock(&mut self, dt: f32) -> Vec<TimerHandle> {
        self.clock += Duration::from_secs_f32(dt.max(0.0));
        let mut fired = Vec::new();
        for (handle, timer) in self.timers.iter_mut() {
            while timer.next_due <= self.clock {
                fired.push(*handle);
                timer.next_due += timer.period;
            }
        }
        fired
    }

    pub fn update_zoom(&mut self, dt: f32) {
        if self.zoomed {
            self.zoom_elapsed = (self.zoom_elapsed + dt).min(ZOOM_DURATION);
        }
    }

    fn zoom_scale(&self) -> f32 {
        if self.zoomed {
            1.0 + (ZOOM_SCALE - 1.0) * (self.zoom_elapsed / ZOOM_DURATION)
        } else {
            1.0
        }
    }

    pub fn load_pending(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        for url in std::mem::take(&mut self.pending) {
            if self.textures.contains_key(&url) || self.failed.contains(&url) {
                continue;
            }
            match load_texture_with_exif_rotation(rl, thread, Path::new(&url)) {
                Ok(texture) => {
                    tracing::debug!(%url, "slide texture loaded");
                    self.textures.insert(url, texture);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "slide unavailable, drawing placeholder");
                    self.failed.insert(url);
                }
            }
        }
    }

    fn queue_load(&mut self, url: &str) {
        if !self.textures.contains_key(url) && !self.failed.contains(url) {
            self.pending.push(url.to_string());
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, status: &str) {
        d.clear_background(Color::RAYWHITE);

        // Filler content below the hero
        let hero_height = self.screen_height * HERO_HEIGHT_RATIO;
        let page_height = self.screen_height * PAGE_HEIGHT_RATIO;
        let mut y = hero_height + 40.0;
        while y < page_height {
            let top = (y - self.scroll_y) as i32;
            d.draw_rectangle(60, top, (self.screen_width - 120.0) as i32, 24, Color::LIGHTGRAY);
            d.draw_rectangle(60, top + 36, (self.screen_width * 0.5) as i32, 16, Color::LIGHTGRAY);
            y += 110.0;
        }

        let Some(hero) = self.hero_rect() else {
            return;
        };
        let (hx, hy, hw, hh) = (hero.x as i32, hero.y as i32, hero.width as i32, hero.height as i32);
        d.draw_rectangle(hx, hy, hw, hh, Color::DARKGRAY);

        if self.video_visible {
            let label = if self.video_playing { "[ hero video playing ]" } else { "[ hero video paused ]" };
            d.draw_text(label, hx + 40, hy + hh / 2, 30, Color::WHITE);
        } else if let Some(url) = &self.background {
            match self.textures.get(url) {
                Some(texture) => self.draw_cover(d, texture, hero),
                None => d.draw_text(url, hx + 40, hy + hh / 2, 20, Color::WHITE),
            }
        }

        d.draw_rectangle(hx, hy + hh - 36, hw, 36, Color::new(0, 0, 0, 160));
        d.draw_text(status, hx + 12, hy + hh - 28, 20, Color::WHITE);
    }

    // Cover-fit the texture to the hero, cropping the source further while zoomed.
    fn draw_cover(&self, d: &mut RaylibDrawHandle, texture: &Texture2D, hero: Rect) {
        let tex_width = texture.width() as f32;
        let tex_height = texture.height() as f32;
        if tex_width <= 0.0 || tex_height <= 0.0 {
            return;
        }

        let scale = (hero.width / tex_width).max(hero.height / tex_height) * self.zoom_scale();
        let src_width = hero.width / scale;
        let src_height = hero.height / scale;

        d.draw_texture_pro(
            texture,
            Rectangle::new((tex_width - src_width) * 0.5, (tex_height - src_height) * 0.5, src_width, src_height),
            Rectangle::new(hero.x, hero.y, hero.width, hero.height),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}

impl HeroEnvironment for WindowPage {
    fn has_hero_media(&self) -> bool {
        true
    }

    fn hero_rect(&self) -> Option<Rect> {
        Some(Rect::new(
            0.0,
            -self.scroll_y,
            self.screen_width,
            self.screen_height * HERO_HEIGHT_RATIO,
        ))
    }

    fn viewport_height(&self) -> f32 {
        self.screen_height
    }

    fn is_document_hidden(&self) -> bool {
        self.hidden
    }

    // No OS query here; the config file or --reduced-motion decides.
    fn prefers_reduced_motion(&self) -> bool {
        false
    }

    fn supports_intersection_observer(&self) -> bool {
        self.observer_supported
    }

    fn observe_intersection(&mut self, threshold: f32) {
        self.observed_threshold = Some(threshold);
    }

    fn set_background_image(&mut self, url: &str) {
        self.background = Some(url.to_string());
        self.queue_load(url);
    }

    fn set_zoomed(&mut self, zoomed: bool) {
        self.zoomed = zoomed;
    }

    fn restart_transition(&mut self) {
        self.zoom_elapsed = 0.0;
    }

    fn preload(&mut self, url: &str) {
        self.queue_load(url);
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
        self.timers.insert(handle, Interval { period, next_due: self.clock + period });
        handle
    }

    fn clear_interval(&mut self, handle: TimerHandle) {
        self.timers.remove(&handle);
    }
}
