#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum SliderState {
    Running,    // Interval timer active, slides rotating
    #[default]
    Stopped,    // No timer; current slide stays on screen
}

impl SliderState {
    pub fn label(self) -> &'static str {
        match self {
            SliderState::Running => "running",
            SliderState::Stopped => "stopped",
        }
    }
}
