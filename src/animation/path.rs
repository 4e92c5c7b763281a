//! Keyframed animation paths.
//!
//! An [`AnimationPath`] is a list of time-stamped control poses. Sampling between two control
//! points interpolates position and scale linearly and rotation spherically. What happens outside
//! the recorded range is decided by the path's [`LoopMode`].

use std::f32::consts::TAU;

use glam::{Quat, Vec3};

use super::{Animator, Pose, Spin};

/// How a path behaves once the elapsed time runs past its last control point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopMode {
    /// Jump back to the first control point and play again.
    #[default]
    Loop,
    /// Play backwards to the first control point, then forwards again.
    Swing,
    /// Hold the last control point.
    NoLooping,
}

/// A time-indexed sequence of keyframe poses.
#[derive(Debug, Clone, Default)]
pub struct AnimationPath {
    points: Vec<(f64, Pose)>,
    loop_mode: LoopMode,
}

impl AnimationPath {
    pub fn new(loop_mode: LoopMode) -> Self {
        Self {
            points: Vec::new(),
            loop_mode,
        }
    }

    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    /// Inserts a control point, keeping the path sorted by time. A point already recorded at
    /// exactly `time` is replaced.
    pub fn insert(&mut self, time: f64, pose: Pose) {
        match self.points.binary_search_by(|(t, _)| t.total_cmp(&time)) {
            Ok(i) => self.points[i].1 = pose,
            Err(i) => self.points.insert(i, (time, pose)),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_time(&self) -> Option<f64> {
        self.points.first().map(|(t, _)| *t)
    }

    pub fn last_time(&self) -> Option<f64> {
        self.points.last().map(|(t, _)| *t)
    }

    /// Time between the first and last control points.
    pub fn period(&self) -> f64 {
        match (self.first_time(), self.last_time()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }

    /// Maps an elapsed time into the recorded range.
    fn local_time(&self, time: f64) -> f64 {
        let (Some(first), Some(last)) = (self.first_time(), self.last_time()) else {
            return time;
        };
        let period = last - first;
        if period <= 0.0 {
            return first;
        }

        match self.loop_mode {
            LoopMode::Loop => first + (time - first).rem_euclid(period),
            LoopMode::Swing => {
                let t = (time - first).rem_euclid(2.0 * period);
                if t > period {
                    first + 2.0 * period - t
                } else {
                    first + t
                }
            }
            LoopMode::NoLooping => time.clamp(first, last),
        }
    }
}

impl Animator for AnimationPath {
    fn pose_at(&self, time: f64) -> Pose {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return Pose::IDENTITY;
        };

        let t = self.local_time(time);
        let upper = self.points.partition_point(|(pt, _)| *pt <= t);
        if upper == 0 {
            return first.1;
        }
        if upper == self.points.len() {
            return last.1;
        }

        let (t0, p0) = &self.points[upper - 1];
        let (t1, p1) = &self.points[upper];
        let s = ((t - t0) / (t1 - t0)) as f32;
        p0.interpolate(p1, s)
    }
}

/// Upper bound on the control points [`rotation_path`] records for one turn.
pub const MAX_ROTATION_SAMPLES: usize = 3600;

/// Samples one full turn of `spin` into a looping path.
///
/// Samples are taken every `sample_interval` seconds, at most a quarter turn apart. Very slow
/// spins are sampled more coarsely so that no more than [`MAX_ROTATION_SAMPLES`] points are
/// recorded. The path always ends exactly one turn after it starts, so looping back to the first
/// point is seamless.
pub fn rotation_path(spin: &Spin, sample_interval: f64) -> AnimationPath {
    let mut path = AnimationPath::new(LoopMode::Loop);
    let Some(period) = spin.period() else {
        path.insert(0.0, Pose::IDENTITY);
        return path;
    };

    let quarter = period / 4.0;
    let interval = if sample_interval.is_finite() && sample_interval > 0.0 {
        sample_interval.min(quarter)
    } else {
        quarter
    };
    let interval = interval.max(period / MAX_ROTATION_SAMPLES as f64);

    for i in 0..MAX_ROTATION_SAMPLES {
        let time = i as f64 * interval;
        if time >= period - interval * 1e-3 {
            break;
        }
        path.insert(time, spin.pose_at(time));
    }
    path.insert(period, spin.pose_at(period));

    path
}

/// A looping path that travels once around a horizontal circle in `loop_time` seconds.
///
/// The path starts at `center + (radius, 0, 0)` and yaws so that its local +Z axis points along
/// the direction of travel.
pub fn circle_path(center: Vec3, radius: f32, loop_time: f64, samples: usize) -> AnimationPath {
    let mut path = AnimationPath::new(LoopMode::Loop);
    let samples = samples.max(5);
    let segments = (samples - 1) as f32;

    for i in 0..samples {
        let fraction = i as f32 / segments;
        let angle = fraction * TAU;
        let position = center + Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin());
        let pose = Pose::at(position).with_rotation(Quat::from_rotation_y(-angle));
        path.insert(loop_time * fraction as f64, pose);
    }

    path
}
