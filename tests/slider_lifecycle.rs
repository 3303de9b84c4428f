use std::time::Duration;

use hero_slider::config::{DisplayPreferences, HeroConfig, HeroMode};
use hero_slider::controller::HeroSlider;
use hero_slider::environment::HeroEnvironment;
use hero_slider::event::HeroEvent;
use hero_slider::sim::{PageSession, SimulatedPage};
use hero_slider::slide::SlideSet;
use hero_slider::state::SliderState;

const SLIDES: [&str; 4] = [
    "images/project-01.jpg",
    "images/project-02.jpg",
    "images/project-03.jpg",
    "images/project-04.jpg",
];

fn session_with(page: SimulatedPage, slides: &[&str], reduced_motion: bool, interval_ms: u64) -> PageSession {
    let slider = HeroSlider::new(
        page,
        SlideSet::new(slides.iter().copied()),
        DisplayPreferences::new(reduced_motion, interval_ms),
        HeroMode::ImageSlider,
    );
    PageSession::load(slider)
}

fn session() -> PageSession {
    session_with(SimulatedPage::new(), &SLIDES, false, 5000)
}

fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

#[test]
fn index_after_k_ticks_is_k_mod_n() {
    for n in 1..=5 {
        let slides: Vec<String> = (0..n).map(|i| format!("slide-{i}.jpg")).collect();
        let refs: Vec<&str> = slides.iter().map(String::as_str).collect();
        let mut session = session_with(SimulatedPage::new(), &refs, false, 1000);
        assert!(session.slider().is_running());

        for k in 0..12 {
            assert_eq!(session.slider().current_index(), k % n, "n = {n}, k = {k}");
            session.advance(Duration::from_millis(1000));
        }
    }
}

#[test]
fn entering_viewport_starts_exactly_one_timer() {
    let session = session();
    assert_eq!(session.slider().state(), SliderState::Running);
    assert_eq!(session.page().active_timer_count(), 1);
    assert_eq!(session.page().background_image(), Some(SLIDES[0]));
    assert_eq!(session.page().preloaded().last().map(String::as_str), Some(SLIDES[1]));
}

#[test]
fn repeated_intersection_signals_keep_one_timer() {
    let mut session = session();
    session.slider_mut().dispatch(HeroEvent::Intersection { is_intersecting: true });
    session.slider_mut().dispatch(HeroEvent::Intersection { is_intersecting: true });
    assert_eq!(session.page().active_timer_count(), 1);

    session.slider_mut().dispatch(HeroEvent::Intersection { is_intersecting: false });
    session.slider_mut().dispatch(HeroEvent::Intersection { is_intersecting: false });
    assert_eq!(session.page().active_timer_count(), 0);
    assert_eq!(session.page().cleared_timer_count(), 1);
}

#[test]
fn reduced_motion_interval_respects_threshold() {
    let short = session_with(SimulatedPage::new(), &SLIDES, true, 5000);
    let handle = short.slider().active_timer().unwrap();
    assert_eq!(short.page().timer_period(handle), Some(Duration::from_millis(10_000)));

    let long = session_with(SimulatedPage::new(), &SLIDES, true, 9000);
    let handle = long.slider().active_timer().unwrap();
    assert_eq!(long.page().timer_period(handle), Some(Duration::from_millis(9000)));
}

#[test]
fn tab_hidden_pauses_and_resumes_at_same_slide() {
    let mut session = session();
    session.advance(secs(11));
    assert_eq!(session.slider().current_index(), 2);

    session.set_hidden(true);
    assert_eq!(session.slider().state(), SliderState::Stopped);

    session.advance(secs(60));
    assert_eq!(session.slider().current_index(), 2);

    session.set_hidden(false);
    assert_eq!(session.slider().state(), SliderState::Running);
    assert_eq!(session.slider().current_index(), 2);
    assert_eq!(session.page().background_image(), Some(SLIDES[2]));

    session.advance(secs(5));
    assert_eq!(session.slider().current_index(), 3);
}

#[test]
fn tab_visible_while_scrolled_away_stays_paused() {
    let mut session = session();
    session.set_hidden(true);
    session.slider_mut().environment_mut().set_scroll(2000.0);
    session.set_hidden(false);
    assert!(!session.slider().is_running());
}

#[test]
fn hover_pauses_and_leaving_resumes() {
    let mut session = session();
    session.advance(secs(5));
    assert_eq!(session.slider().current_index(), 1);

    session.pointer_enter();
    assert!(!session.slider().is_running());
    session.advance(secs(20));
    assert_eq!(session.slider().current_index(), 1);

    session.pointer_leave();
    assert!(session.slider().is_running());
    session.advance(secs(5));
    assert_eq!(session.slider().current_index(), 2);
}

#[test]
fn keyboard_focus_behaves_like_hover() {
    let mut session = session();
    session.focus_in();
    assert!(!session.slider().is_running());
    session.focus_out();
    assert!(session.slider().is_running());
}

#[test]
fn scrolling_past_threshold_stops_and_returning_restarts() {
    let mut session = session();

    // 500px hero, 25% threshold: still intersecting with 125px visible.
    session.scroll_to(375.0);
    assert!(session.slider().is_running());

    session.scroll_to(400.0);
    assert!(!session.slider().is_running());

    session.advance(secs(30));
    assert_eq!(session.slider().current_index(), 0);

    session.scroll_to(0.0);
    assert!(session.slider().is_running());
}

#[test]
fn leaving_hero_while_off_screen_does_not_resume() {
    let mut session = session();
    session.pointer_enter();
    session.scroll_to(1500.0);
    session.pointer_leave();
    assert!(!session.slider().is_running());
}

#[test]
fn rapid_signal_interleaving_settles_on_final_state() {
    let mut session = session();
    session.pointer_leave();
    session.set_hidden(true);
    session.pointer_leave();
    assert!(!session.slider().is_running());
    assert_eq!(session.page().active_timer_count(), 0);

    session.set_hidden(false);
    session.pointer_leave();
    session.focus_out();
    assert!(session.slider().is_running());
    assert_eq!(session.page().active_timer_count(), 1);
}

#[test]
fn missing_observer_falls_back_to_immediate_start() {
    let page = SimulatedPage::new().without_intersection_observer();
    let mut session = session_with(page, &SLIDES, false, 5000);
    assert!(session.slider().is_running());
    assert_eq!(session.page().observed_threshold(), None);

    session.advance(secs(5));
    assert_eq!(session.slider().current_index(), 1);
}

#[test]
fn missing_hero_section_falls_back_to_immediate_start() {
    let page = SimulatedPage::new().without_hero_section();
    let mut session = session_with(page, &SLIDES, false, 5000);
    assert!(session.slider().is_running());

    // No hero to be in view, so hover-out after a pause cannot resume.
    session.pointer_enter();
    session.pointer_leave();
    assert!(!session.slider().is_running());
}

#[test]
fn empty_slide_set_never_schedules() {
    let mut session = session_with(SimulatedPage::new(), &[], false, 5000);
    session.pointer_leave();
    session.advance(secs(30));
    assert!(!session.slider().is_running());
    assert_eq!(session.page().background_image(), None);
}

#[test]
fn zoom_transition_replays_on_every_slide() {
    let mut session = session();
    let before = session.page().transition_restarts();
    session.advance(secs(10));
    assert_eq!(session.page().transition_restarts(), before + 2);
    assert!(session.page().is_zoomed());

    let reduced = session_with(SimulatedPage::new(), &SLIDES, true, 5000);
    assert!(!reduced.page().is_zoomed());
}

#[test]
fn environment_reduced_motion_reaches_slider() {
    let page = SimulatedPage::new().with_reduced_motion(true);
    let preferences = HeroConfig::default().preferences(page.prefers_reduced_motion());
    let slider = HeroSlider::new(page, SlideSet::new(SLIDES), preferences, HeroMode::ImageSlider);
    let mut session = PageSession::load(slider);

    let handle = session.slider().active_timer().unwrap();
    assert_eq!(session.page().timer_period(handle), Some(Duration::from_millis(10_000)));

    session.advance(secs(10));
    assert_eq!(session.slider().current_index(), 1);
    assert!(!session.page().is_zoomed());
}

#[test]
fn hero_scrolled_back_in_hidden_tab_stays_paused() {
    let mut session = session();
    session.scroll_to(2000.0);
    assert!(!session.slider().is_running());

    session.set_hidden(true);
    session.scroll_to(0.0);
    session.advance(secs(10));
    assert!(!session.slider().is_running());
    assert_eq!(session.slider().current_index(), 0);
    assert_eq!(session.page().active_timer_count(), 0);

    session.set_hidden(false);
    assert!(session.slider().is_running());
    assert_eq!(session.slider().current_index(), 0);
}
