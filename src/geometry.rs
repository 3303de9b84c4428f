use crate::constants::IN_VIEW_TOP_RATIO;

/// Viewport-relative bounding box, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.bottom()
    }

    /// Share of the box's height that lies inside `[0, viewport_height]`.
    pub fn intersection_ratio(&self, viewport_height: f32) -> f32 {
        if self.height <= 0.0 {
            return 0.0;
        }
        let visible = self.bottom().min(viewport_height) - self.top().max(0.0);
        (visible / self.height).clamp(0.0, 1.0)
    }

    /// Bottom edge not above the viewport and top edge within the upper
    /// three quarters of it.
    pub fn is_in_view(&self, viewport_height: f32) -> bool {
        self.bottom() >= 0.0 && self.top() <= viewport_height * IN_VIEW_TOP_RATIO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_visible_ratio_is_one() {
        let hero = Rect::new(0.0, 0.0, 800.0, 400.0);
        assert_eq!(hero.intersection_ratio(720.0), 1.0);
    }

    #[test]
    fn partially_scrolled_ratio() {
        let hero = Rect::new(0.0, -300.0, 800.0, 400.0);
        assert!((hero.intersection_ratio(720.0) - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn scrolled_past_ratio_is_zero() {
        let hero = Rect::new(0.0, -500.0, 800.0, 400.0);
        assert_eq!(hero.intersection_ratio(720.0), 0.0);
    }

    #[test]
    fn in_view_edges() {
        assert!(Rect::new(0.0, -400.0, 800.0, 400.0).is_in_view(800.0));
        assert!(!Rect::new(0.0, -401.0, 800.0, 400.0).is_in_view(800.0));
        assert!(Rect::new(0.0, 600.0, 800.0, 400.0).is_in_view(800.0));
        assert!(!Rect::new(0.0, 601.0, 800.0, 400.0).is_in_view(800.0));
    }

    #[test]
    fn contains_is_half_open() {
        let hero = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert!(hero.contains(10.0, 10.0));
        assert!(!hero.contains(110.0, 30.0));
        assert!(!hero.contains(50.0, 60.0));
    }
}
