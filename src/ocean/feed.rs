//! Per-frame parameter feed: elapsed time + camera position into a snapshot.

use std::time::Instant;

use glam::Vec3;

use super::shading::ParameterSet;
use crate::params::OceanPalette;

/// Produces one immutable [`ParameterSet`] per rendered frame
///
/// The feed is the only path by which time and camera position reach the
/// shader. Times handed out are monotonically non-decreasing.
#[derive(Debug, Clone)]
pub struct ParameterFeed {
    palette: OceanPalette,
    start: Instant,
    last_time: Option<f32>,
}

impl ParameterFeed {
    /// Create a feed whose clock starts now
    pub fn new(palette: OceanPalette) -> Self {
        Self {
            palette: palette.normalized(),
            start: Instant::now(),
            last_time: None,
        }
    }

    pub fn palette(&self) -> &OceanPalette {
        &self.palette
    }

    /// Seconds since the feed was created (or restarted)
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Time of the most recent snapshot
    pub fn last_time(&self) -> Option<f32> {
        self.last_time
    }

    /// Snapshot for the current frame using wall-clock elapsed time
    pub fn frame(&mut self, camera_position: Vec3) -> ParameterSet {
        let time_s = self.elapsed();
        self.frame_at(time_s, camera_position)
    }

    /// Snapshot for a frame at an explicit time (offline rendering, tests)
    ///
    /// A time earlier than the previous snapshot's, or a non-finite time,
    /// is replaced by the previous time.
    pub fn frame_at(&mut self, time_s: f32, camera_position: Vec3) -> ParameterSet {
        let previous = self.last_time.unwrap_or(0.0);
        let time_s = if !time_s.is_finite() {
            log::warn!("Ignoring non-finite frame time {}, reusing {}", time_s, previous);
            previous
        } else if time_s < previous {
            log::warn!(
                "Frame time went backwards ({} < {}), clamping",
                time_s,
                previous
            );
            previous
        } else {
            time_s
        };
        self.last_time = Some(time_s);

        log::debug!(
            "Frame parameters: t={:.3}s camera=({:.2}, {:.2}, {:.2})",
            time_s,
            camera_position.x,
            camera_position.y,
            camera_position.z
        );

        ParameterSet::new(time_s, camera_position, &self.palette)
    }

    /// Restart the clock (time returns to zero)
    pub fn restart(&mut self) {
        self.start = Instant::now();
        self.last_time = None;
    }
}
