//! Time-parameterised walking along a planned path.
//!
//! A [`MotionTimeline`] turns `origin + path` into consecutive straight legs
//! travelled at constant speed. [`PathFollower`] is the per-frame cursor the
//! movement layer advances by its frame delta.
use crate::error::{ErrorSeverity, NavError};
use crate::geometry::{Path, Point};

#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum MotionError {
    #[error("speed must be finite and positive, got {0}")]
    InvalidSpeed(f64),

    #[error("speed multiplier must be finite and positive, got {0}")]
    InvalidMultiplier(f64),

    #[error("origin {0} is not a finite point")]
    InvalidOrigin(Point),
}

impl NavError for MotionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            MotionError::InvalidSpeed(_) => "MOTION_INVALID_SPEED",
            MotionError::InvalidMultiplier(_) => "MOTION_INVALID_MULTIPLIER",
            MotionError::InvalidOrigin(_) => "MOTION_INVALID_ORIGIN",
        }
    }
}

/// One straight leg of a timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSegment {
    pub from: Point,
    pub to: Point,
    pub start_time: f64,
    pub duration: f64,
}

impl MotionSegment {
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    fn position_at(&self, time: f64) -> Point {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = ((time - self.start_time) / self.duration).clamp(0.0, 1.0);
        self.from.lerp(self.to, t)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MotionTimeline {
    origin: Point,
    segments: Vec<MotionSegment>,
}

impl MotionTimeline {
    /// Legs from `origin` through every waypoint of `path` at `speed` units per second.
    pub fn new(origin: Point, path: &Path, speed: f64) -> Result<Self, MotionError> {
        if !origin.is_finite() {
            return Err(MotionError::InvalidOrigin(origin));
        }
        if !speed.is_finite() || speed <= 0.0 {
            return Err(MotionError::InvalidSpeed(speed));
        }

        let mut segments = Vec::with_capacity(path.len());
        let mut from = origin;
        let mut clock = 0.0;
        for &to in path {
            let duration = from.distance(to) / speed;
            segments.push(MotionSegment {
                from,
                to,
                start_time: clock,
                duration,
            });
            clock += duration;
            from = to;
        }

        Ok(Self { origin, segments })
    }

    /// Same legs walked `multiplier` times faster.
    pub fn with_speed_multiplier(mut self, multiplier: f64) -> Result<Self, MotionError> {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(MotionError::InvalidMultiplier(multiplier));
        }
        let mut clock = 0.0;
        for segment in &mut self.segments {
            segment.duration /= multiplier;
            segment.start_time = clock;
            clock += segment.duration;
        }
        Ok(self)
    }

    pub fn segments(&self) -> &[MotionSegment] {
        &self.segments
    }

    pub fn total_duration(&self) -> f64 {
        self.segments.last().map_or(0.0, MotionSegment::end_time)
    }

    pub fn destination(&self) -> Point {
        self.segments.last().map_or(self.origin, |segment| segment.to)
    }

    /// Position at `time` seconds, clamped to the ends of the timeline.
    pub fn position_at(&self, time: f64) -> Point {
        if time <= 0.0 {
            return self.origin;
        }
        // First leg still in progress at `time`; past the end, park at the destination.
        match self
            .segments
            .iter()
            .find(|segment| time < segment.end_time())
        {
            Some(segment) => segment.position_at(time),
            None => self.destination(),
        }
    }

    pub fn is_finished(&self, time: f64) -> bool {
        time >= self.total_duration()
    }
}

/// Stateful cursor walking a [`MotionTimeline`] frame by frame.
#[derive(Clone, Debug)]
pub struct PathFollower {
    timeline: MotionTimeline,
    elapsed: f64,
}

impl PathFollower {
    pub fn new(timeline: MotionTimeline) -> Self {
        Self {
            timeline,
            elapsed: 0.0,
        }
    }

    /// Moves the cursor forward by `dt` seconds and returns the new position.
    pub fn advance(&mut self, dt: f64) -> Point {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.timeline.total_duration());
        }
        self.position()
    }

    pub fn position(&self) -> Point {
        self.timeline.position_at(self.elapsed)
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Seconds left until the destination is reached.
    pub fn remaining(&self) -> f64 {
        self.timeline.total_duration() - self.elapsed
    }

    pub fn is_finished(&self) -> bool {
        self.timeline.is_finished(self.elapsed)
    }

    pub fn timeline(&self) -> &MotionTimeline {
        &self.timeline
    }
}
