//! Integration tests for the framescrub CLI

use std::fs;

use tempfile::TempDir;

use super::helpers::{run_framescrub, run_framescrub_with_env, temp_config};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run_framescrub(&["--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("play"));
    assert!(stdout.contains("inspect"));
    assert!(stdout.contains("config"));
    assert!(stdout.contains("completions"));
}

#[test]
fn no_arguments_shows_usage_error() {
    let (_stdout, stderr, exit_code) = run_framescrub(&[]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("Usage"));
}

// ============================================================================
// Inspect Tests
// ============================================================================

#[test]
fn inspect_reports_frame_math() {
    let (stdout, stderr, exit_code) = run_framescrub(&[
        "inspect",
        "--duration",
        "10",
        "--time",
        "5",
        "--frame",
        "121",
        "--pointer",
        "50",
    ]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    insta::assert_snapshot!(stdout, @r"
    fps: 24
    duration: 10s
    total frames: 240
    time 5s -> frame 121
    frame 121 -> seek to 5.020833s
    pointer x 50 -> frame 120
    ");
}

#[test]
fn inspect_clamps_last_frame_below_duration() {
    let (stdout, _stderr, exit_code) =
        run_framescrub(&["inspect", "--duration", "10.01", "--frame", "241"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("total frames: 241"));
    assert!(stdout.contains("frame 241 -> seek to 10.009999s"));
}

#[test]
fn inspect_pointer_outside_timeline_clamps() {
    let (stdout, _stderr, exit_code) = run_framescrub(&[
        "inspect",
        "--duration",
        "10",
        "--pointer",
        "-100",
        "--left",
        "0",
        "--width",
        "480",
    ]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("pointer x -100 -> frame 1"));
}

#[test]
fn inspect_uses_fps_override() {
    let (stdout, _stderr, exit_code) =
        run_framescrub(&["inspect", "--duration", "2", "--fps", "30"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("total frames: 60"));
}

#[test]
fn inspect_frame_zero_is_an_error() {
    let (_stdout, stderr, exit_code) =
        run_framescrub(&["inspect", "--duration", "10", "--frame", "0"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("1-indexed"));
}

#[test]
fn inspect_rejects_infinite_duration() {
    let (_stdout, stderr, exit_code) = run_framescrub(&["inspect", "--duration", "inf"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("not a finite"));
}

#[test]
fn inspect_rejects_track_with_too_many_frames() {
    let (_stdout, stderr, exit_code) =
        run_framescrub(&["inspect", "--duration", "2e8", "--time", "2e8"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("more frames than can be numbered"));
}

#[test]
fn inspect_time_far_past_end_saturates() {
    let (stdout, stderr, exit_code) =
        run_framescrub(&["inspect", "--duration", "10", "--time", "1e12"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("-> frame 4294967295"));
}

#[test]
fn play_rejects_track_with_too_many_frames() {
    let (_stdout, stderr, exit_code) = run_framescrub(&["play", "--duration", "2e8"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("more frames than can be numbered"));
}

#[test]
fn inspect_reads_fps_from_config() {
    let (_temp_dir, path) = temp_config("[scrub]\nfps = 25.0\n");
    let path = path.to_string_lossy().to_string();
    let (stdout, _stderr, exit_code) =
        run_framescrub(&["inspect", "--config", &path, "--duration", "4"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("total frames: 100"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_show_prints_defaults_for_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.toml");
    let path = path.to_string_lossy().to_string();
    let (stdout, _stderr, exit_code) = run_framescrub(&["config", "show", "--config", &path]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[scrub]"));
    assert!(stdout.contains("fps = 24.0"));
    assert!(stdout.contains("[player]"));
}

#[test]
fn config_show_rejects_invalid_values() {
    let (_temp_dir, path) = temp_config("[scrub]\nfps = -1.0\n");
    let path = path.to_string_lossy().to_string();
    let (_stdout, stderr, exit_code) = run_framescrub(&["config", "show", "--config", &path]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("scrub.fps"));
}

#[test]
fn config_init_writes_file_once() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("framescrub").join("config.toml");
    let path_str = path.to_string_lossy().to_string();

    let (_stdout, _stderr, exit_code) = run_framescrub(&["config", "init", "--config", &path_str]);
    assert_eq!(exit_code, 0);
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("seek_tolerance"));

    let (_stdout, stderr, exit_code) = run_framescrub(&["config", "init", "--config", &path_str]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("already exists"));

    let (_stdout, _stderr, exit_code) =
        run_framescrub(&["config", "init", "--force", "--config", &path_str]);
    assert_eq!(exit_code, 0);
}

// dirs::config_dir follows XDG_CONFIG_HOME on Linux only
#[cfg(target_os = "linux")]
#[test]
fn config_init_writes_to_default_location() {
    let temp_dir = TempDir::new().unwrap();
    let config_home = temp_dir.path().to_string_lossy().to_string();
    let envs = [("XDG_CONFIG_HOME", config_home.as_str())];

    let (_stdout, stderr, exit_code) = run_framescrub_with_env(&["config", "init"], &envs);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);

    let written = temp_dir.path().join("framescrub").join("config.toml");
    let content = fs::read_to_string(written).unwrap();
    assert!(content.contains("[scrub]"));
}

#[test]
fn config_path_honors_override() {
    let (stdout, _stderr, exit_code) =
        run_framescrub(&["config", "path", "--config", "/tmp/custom.toml"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "/tmp/custom.toml");
}

// ============================================================================
// Completions Tests
// ============================================================================

#[test]
fn completions_generate_for_bash() {
    let (stdout, _stderr, exit_code) = run_framescrub(&["completions", "bash"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("framescrub"));
}
