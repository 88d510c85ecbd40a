use crate::constants::{Direction, CORRIDOR_HALF_WIDTH};
use crate::geometry::Volume;
use nalgebra::Vector3;
use serde::Serialize;

/// The passage leading out of a room towards the room it connects to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Corridor {
    pub position: Vector3<f32>,
    pub length: f32,
    pub width: f32,
    pub height: f32,
    pub direction: Direction,
}

impl Corridor {
    /// `corridor_length_amount` is the full gap between the two rooms' walls.
    pub fn new(
        direction: Direction,
        corridor_length_amount: f32,
        lateral_offset: f32,
        owner: &Volume,
    ) -> Self {
        let half_span = corridor_length_amount * 0.5;
        let (length, width, offset) = match direction {
            Direction::Up => (
                CORRIDOR_HALF_WIDTH,
                half_span,
                Vector3::new(-lateral_offset, 0.0, -owner.width - half_span),
            ),
            Direction::Down => (
                CORRIDOR_HALF_WIDTH,
                half_span,
                Vector3::new(lateral_offset, 0.0, owner.width + half_span),
            ),
            Direction::Left => (
                half_span,
                CORRIDOR_HALF_WIDTH,
                Vector3::new(-owner.length - half_span, 0.0, -lateral_offset),
            ),
            Direction::Right => (
                half_span,
                CORRIDOR_HALF_WIDTH,
                Vector3::new(owner.length + half_span, 0.0, lateral_offset),
            ),
            Direction::None => (CORRIDOR_HALF_WIDTH, CORRIDOR_HALF_WIDTH, Vector3::zeros()),
        };
        Corridor {
            position: owner.position + offset,
            length,
            width,
            height: owner.height,
            direction,
        }
    }

    /// Half-extent along the direction of travel.
    pub fn span(&self) -> f32 {
        if self.direction.is_vertical() {
            self.width
        } else {
            self.length
        }
    }

    pub fn volume(&self) -> Volume {
        Volume::new(self.position, self.length, self.width, self.height)
    }
}
