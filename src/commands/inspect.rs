//! Inspect subcommand handler
//!
//! Prints the frame math for a track without opening the player.

use std::path::Path;

use anyhow::{bail, Result};

use framescrub::scrub::{Bounds, FrameMapper};

use super::load_config;

/// What to inspect.
#[derive(Debug, Clone)]
pub struct Query {
    pub duration: f64,
    pub fps: Option<f64>,
    pub time: Option<f64>,
    pub frame: Option<u32>,
    pub pointer: Option<f64>,
    pub left: f64,
    pub width: f64,
}

/// Build the report lines for a query.
pub fn report(mapper: &FrameMapper, query: &Query) -> Result<Vec<String>> {
    let total = mapper.total_frames();
    let mut lines = vec![
        format!("fps: {}", mapper.fps()),
        format!("duration: {}s", mapper.duration()),
        format!("total frames: {}", total),
    ];

    if let Some(time) = query.time {
        lines.push(format!("time {}s -> frame {}", time, mapper.frame_from_time(time)));
    }
    if let Some(frame) = query.frame {
        if frame == 0 {
            bail!("Frames are 1-indexed, got frame 0");
        }
        lines.push(format!(
            "frame {} -> seek to {:.6}s",
            frame,
            mapper.time_from_frame(frame)
        ));
    }
    if let Some(x) = query.pointer {
        let bounds = Bounds::new(query.left, query.width);
        lines.push(format!(
            "pointer x {} -> frame {}",
            x,
            mapper.frame_from_pointer_x(x, bounds)
        ));
    }
    Ok(lines)
}

pub fn handle(config_path: Option<&Path>, query: &Query) -> Result<()> {
    let config = load_config(config_path)?;
    let fps = query.fps.unwrap_or(config.scrub.fps);
    let mapper = FrameMapper::with_end_epsilon(fps, query.duration, config.scrub.end_epsilon)?;
    for line in report(&mapper, query)? {
        println!("{}", line);
    }
    Ok(())
}
