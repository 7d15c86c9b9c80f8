//! # Guards
//!
//! Guards walk a looping list of waypoints and watch a circle around themselves.
//! Detection is reported on the rising edge only, followed by a short cooldown.

use crate::config::DETECTION_COOLDOWN;
use crate::game::{Bounds, Position};

/// A patrolling guard.
#[derive(Debug, Clone, PartialEq)]
pub struct Guard {
    pub position: Position,
    /// Walking speed in pixels per second
    pub speed: f32,
    pub detection_radius: f32,
    patrol: Vec<Position>,
    next_waypoint: usize,
    in_sight: bool,
    cooldown: f32,
}

impl Guard {
    pub fn new(position: Position, speed: f32, detection_radius: f32) -> Self {
        Self {
            position,
            speed,
            detection_radius,
            patrol: Vec::new(),
            next_waypoint: 0,
            in_sight: false,
            cooldown: 0.0,
        }
    }

    pub fn add_patrol_point(&mut self, point: Position) {
        self.patrol.push(point);
    }

    pub fn with_patrol(mut self, points: impl IntoIterator<Item = Position>) -> Self {
        self.patrol.extend(points);
        self
    }

    pub fn patrol(&self) -> &[Position] {
        &self.patrol
    }

    /// Advances along the patrol route and ticks the detection cooldown.
    pub fn update(&mut self, dt: f32) {
        self.cooldown = (self.cooldown - dt).max(0.0);

        if self.patrol.is_empty() {
            return;
        }
        let target = self.patrol[self.next_waypoint % self.patrol.len()];
        let (position, reached) = self.position.step_towards(target, self.speed * dt);
        self.position = position;
        if reached {
            self.next_waypoint = (self.next_waypoint + 1) % self.patrol.len();
        }
    }

    /// True while the player's centre is inside the detection circle.
    pub fn can_see(&self, player: &Bounds) -> bool {
        self.position.distance(player.center()) <= self.detection_radius
    }

    /// Reports a new detection.
    ///
    /// Fires only when the player enters the detection circle and the guard is not
    /// cooling down; staying in range keeps it silent.
    ///
    /// # Examples
    ///
    /// ```
    /// use museum_escape::{Bounds, Guard, Position};
    ///
    /// let mut guard = Guard::new(Position::new(100.0, 100.0), 100.0, 60.0);
    /// let player = Bounds::new(90.0, 90.0, 30.0, 30.0);
    /// assert!(guard.detect_player(&player));
    /// assert!(!guard.detect_player(&player));
    /// ```
    pub fn detect_player(&mut self, player: &Bounds) -> bool {
        let visible = self.can_see(player);
        let rising = visible && !self.in_sight;
        self.in_sight = visible;

        if rising && self.cooldown <= 0.0 {
            self.cooldown = DETECTION_COOLDOWN;
            true
        } else {
            false
        }
    }
}
