pub const DEFAULT_SLIDE_INTERVAL_MS: u64 = 5000;      // Base rotation period (milliseconds)
pub const REDUCED_MOTION_THRESHOLD_MS: u64 = 8000;   // Below this, reduced motion doubles the period
pub const INTERSECTION_THRESHOLD: f32 = 0.25;        // Fraction of the hero that must be visible
pub const IN_VIEW_TOP_RATIO: f32 = 0.75;             // Hero top must sit above this share of the viewport

// Desktop host
pub const RENDER_WIDTH: i32 = 1280;                  // Initial window width
pub const RENDER_HEIGHT: i32 = 720;                  // Initial window height
pub const FPS: u32 = 60;                             // Frames per second
pub const HERO_HEIGHT_RATIO: f32 = 0.7;              // Hero height relative to the window
pub const PAGE_HEIGHT_RATIO: f32 = 2.5;              // Whole page height relative to the window
pub const SCROLL_STEP: f32 = 60.0;                   // Pixels per mouse wheel notch
pub const ZOOM_SCALE: f32 = 1.08;                    // Scale reached by the zoom transition
pub const ZOOM_DURATION: f32 = 6.0;                  // Seconds for the zoom transition
