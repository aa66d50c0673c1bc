//! Shared test helpers

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use framescrub::config::ScrubConfig;
use framescrub::scrub::{Bounds, ScrubSession};
use framescrub::{Readouts, SimulatedTrack, Track};
use tempfile::TempDir;

pub type TestSession = ScrubSession<SimulatedTrack, Readouts, Bounds>;

/// Session over a loaded track, one pixel per frame at 24fps.
pub fn loaded_session(duration: f64, seek_latency_ticks: u32) -> TestSession {
    let width = (duration * 24.0).ceil();
    let mut session = ScrubSession::new(
        SimulatedTrack::loaded(duration, seek_latency_ticks),
        Readouts::new(),
        Bounds::new(0.0, width),
        &ScrubConfig::default(),
    );
    session.init();
    session
}

/// Deliver every pending track notification to the session.
pub fn pump(session: &mut TestSession) {
    while let Some(event) = session.track_mut().poll_event() {
        session.dispatch(event.into());
    }
}

/// Advance the track until its in-flight seek completes, delivering the
/// resulting notifications.
pub fn complete_seek(session: &mut TestSession) {
    while session.track().seeking() {
        session.track_mut().advance(0.0);
    }
    pump(session);
}

/// Write `content` to a config file in a fresh temp directory.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

/// Run the framescrub CLI and capture output.
pub fn run_framescrub(args: &[&str]) -> (String, String, i32) {
    run_framescrub_with_env(args, &[])
}

/// Run the framescrub CLI with extra environment variables.
pub fn run_framescrub_with_env(args: &[&str], envs: &[(&str, &str)]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_framescrub"))
        .args(args)
        .env("NO_COLOR", "1")
        .envs(envs.iter().copied())
        .output()
        .expect("Failed to execute framescrub");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
