//! End-to-end scrubbing scenarios through `ScrubSession`

use framescrub::config::ScrubConfig;
use framescrub::scrub::{Bounds, PointerEvent, ScrubEvent, ScrubSession};
use framescrub::{Readout, Readouts, SimulatedTrack, Track, TrackEvent};

use super::helpers::{complete_seek, loaded_session, pump};

fn press(x: f64) -> ScrubEvent {
    PointerEvent::Down { x }.into()
}

fn drag(x: f64) -> ScrubEvent {
    PointerEvent::Move { x }.into()
}

fn release(x: f64) -> ScrubEvent {
    PointerEvent::Up { x }.into()
}

#[test]
fn ten_second_track_at_24fps() {
    let session = loaded_session(10.0, 1);
    let mapper = session.mapper().expect("metadata should be loaded");

    assert_eq!(session.total_frames(), 240);
    assert_eq!(mapper.frame_from_time(5.0), 121);
    assert!((mapper.time_from_frame(121) - 5.0208).abs() < 1e-4);
}

#[test]
fn pointer_at_timeline_edges() {
    let mut session = loaded_session(10.0, 1);
    session.dispatch(press(0.0));
    session.dispatch(drag(0.0));
    assert_eq!(session.display().get(Readout::PointerFrame), Some("1"));

    session.dispatch(drag(240.0));
    assert_eq!(session.display().get(Readout::PointerFrame), Some("240"));

    session.dispatch(drag(-100.0));
    assert_eq!(session.display().get(Readout::PointerFrame), Some("1"));
    session.dispatch(drag(340.0));
    assert_eq!(session.display().get(Readout::PointerFrame), Some("240"));
}

#[test]
fn request_during_seek_is_written_once_after_completion() {
    let mut session = loaded_session(10.0, 3);
    let mapper = *session.mapper().unwrap();

    session.dispatch(press(0.0));
    session.dispatch(drag(10.0));
    assert!(session.track().seeking());

    session.dispatch(drag(50.0));
    assert_eq!(session.track().seek_requests().len(), 1);

    complete_seek(&mut session);
    let target = mapper.time_from_frame(50);
    assert_eq!(
        session.track().seek_requests(),
        &[mapper.time_from_frame(10), target]
    );

    complete_seek(&mut session);
    let writes = session
        .track()
        .seek_requests()
        .iter()
        .filter(|&&t| t == target)
        .count();
    assert_eq!(writes, 1);
}

#[test]
fn fast_drag_only_seeks_latest_frame() {
    let mut session = loaded_session(10.0, 4);
    let mapper = *session.mapper().unwrap();

    session.dispatch(press(0.0));
    for x in 10..=90 {
        session.dispatch(drag(x as f64));
    }
    session.dispatch(release(100.0));
    complete_seek(&mut session);
    complete_seek(&mut session);

    assert_eq!(
        session.track().seek_requests(),
        &[mapper.time_from_frame(10), mapper.time_from_frame(100)]
    );
    assert!(!session.track().seeking());
}

#[test]
fn scrub_converges_on_release_frame() {
    let mut session = loaded_session(10.0, 2);
    session.dispatch(press(0.0));
    session.dispatch(drag(20.0));
    session.dispatch(drag(70.0));
    session.dispatch(release(180.0));

    while session.track().seeking() {
        complete_seek(&mut session);
    }

    assert_eq!(session.current_frame(), Some(180));
    assert_eq!(session.display().get(Readout::Frame), Some("180"));
    assert_eq!(session.display().frame_property, Some(180));
    assert_eq!(session.controller().desired_frame(), None);
}

#[test]
fn seeking_to_last_frame_does_not_wrap_to_start() {
    let mut session = loaded_session(10.0, 1);
    session.dispatch(press(0.0));
    session.dispatch(release(10_000.0));
    complete_seek(&mut session);

    let duration = session.mapper().unwrap().duration();
    assert!(session.track().current_time() < duration);
    assert!(session.track().current_time() > 0.0);
    assert_eq!(session.current_frame(), Some(240));
}

#[test]
fn partial_last_frame_is_reachable() {
    let mut session = loaded_session(10.01, 1);
    assert_eq!(session.total_frames(), 241);

    session.dispatch(press(0.0));
    session.dispatch(release(241.0));
    complete_seek(&mut session);
    assert_eq!(session.current_frame(), Some(241));
}

#[test]
fn init_waits_for_metadata() {
    let mut session = ScrubSession::new(
        SimulatedTrack::new(10.0, 1),
        Readouts::new(),
        Bounds::new(0.0, 240.0),
        &ScrubConfig::default(),
    );
    session.init();
    assert!(session.awaiting_metadata());
    assert_eq!(session.display().get(Readout::TotalFrames), None);

    pump(&mut session);
    assert!(!session.awaiting_metadata());
    assert_eq!(session.display().get(Readout::TotalFrames), Some("240"));
    assert_eq!(session.display().frames_property, Some(240));

    session.dispatch(press(0.0));
    session.dispatch(release(60.0));
    complete_seek(&mut session);
    assert_eq!(session.current_frame(), Some(60));
}

#[test]
fn focus_discards_stale_request() {
    let mut session = loaded_session(10.0, 3);
    session.dispatch(press(0.0));
    session.dispatch(drag(10.0));
    session.dispatch(drag(200.0));

    session.track_mut().focus();
    pump(&mut session);
    complete_seek(&mut session);

    assert_eq!(session.track().seek_requests().len(), 1);
    assert_eq!(session.current_frame(), Some(10));
}

#[test]
fn zero_width_timeline_selects_first_frame() {
    let mut session = ScrubSession::new(
        SimulatedTrack::loaded(10.0, 1),
        Readouts::new(),
        Bounds::new(30.0, 0.0),
        &ScrubConfig::default(),
    );
    session.init();
    session.dispatch(press(30.0));
    session.dispatch(drag(45.0));
    assert_eq!(session.display().get(Readout::PointerFrame), Some("1"));
}

#[test]
fn timeline_resize_is_picked_up_on_next_move() {
    let mut session = loaded_session(10.0, 1);
    session.dispatch(press(0.0));
    session.dispatch(drag(120.0));
    assert_eq!(session.display().get(Readout::PointerFrame), Some("120"));

    *session.geometry_mut() = Bounds::new(0.0, 480.0);
    session.dispatch(drag(120.0));
    assert_eq!(session.display().get(Readout::PointerFrame), Some("60"));
}

#[test]
fn playback_sync_follows_track_until_paused() {
    let mut session = loaded_session(10.0, 1);
    session.track_mut().play();
    pump(&mut session);
    assert!(session.wants_repaint());

    for _ in 0..24 {
        session.track_mut().advance(1.0 / 24.0);
        session.dispatch(ScrubEvent::Repaint);
    }
    let frame = session.current_frame().unwrap();
    assert!((24..=26).contains(&frame));
    assert_eq!(session.display().get(Readout::Frame), Some(frame.to_string().as_str()));

    session.track_mut().pause();
    pump(&mut session);
    session.dispatch(ScrubEvent::Repaint);
    assert!(!session.wants_repaint());
}

#[test]
fn playback_to_end_stops_sync_on_last_frame() {
    let mut session = loaded_session(1.0, 1);
    session.track_mut().play();
    pump(&mut session);

    session.track_mut().advance(2.0);
    pump(&mut session);
    session.dispatch(ScrubEvent::Repaint);

    assert!(!session.wants_repaint());
    // Position equals the duration, one past the last frame's interval
    assert_eq!(session.display().get(Readout::Frame), Some("25"));
}

#[test]
fn scrub_while_playing_keeps_single_loop() {
    let mut session = loaded_session(10.0, 1);
    session.track_mut().play();
    pump(&mut session);

    session.dispatch(press(0.0));
    session.dispatch(release(100.0));
    complete_seek(&mut session);
    assert_eq!(session.display().get(Readout::Frame), Some("100"));

    session.dispatch(TrackEvent::Play.into());
    assert!(session.sync().is_running());
}
