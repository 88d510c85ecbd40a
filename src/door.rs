use crate::constants::{Direction, DOOR_HEIGHT, DOOR_LENGTH, DOOR_THICKNESS};
use crate::geometry::Volume;
use nalgebra::Vector3;
use serde::Serialize;

/// An opening on one wall of a room.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Door {
    pub position: Vector3<f32>,
    pub length: f32,
    pub width: f32,
    pub height: f32,
    pub direction: Direction,
}

impl Door {
    /// Places the door on the wall of `owner` facing `direction`, slid along
    /// that wall by `lateral_offset`.
    pub fn new(direction: Direction, lateral_offset: f32, owner: &Volume) -> Self {
        let (length, width, offset) = match direction {
            Direction::Up => (
                DOOR_LENGTH,
                DOOR_THICKNESS,
                Vector3::new(-lateral_offset, 0.0, -owner.width),
            ),
            Direction::Down => (
                DOOR_LENGTH,
                DOOR_THICKNESS,
                Vector3::new(lateral_offset, 0.0, owner.width),
            ),
            Direction::Left => (
                DOOR_THICKNESS,
                DOOR_LENGTH,
                Vector3::new(-owner.length, 0.0, -lateral_offset),
            ),
            Direction::Right => (
                DOOR_THICKNESS,
                DOOR_LENGTH,
                Vector3::new(owner.length, 0.0, lateral_offset),
            ),
            Direction::None => (DOOR_LENGTH, DOOR_THICKNESS, Vector3::zeros()),
        };
        Door {
            position: owner.position + offset,
            length,
            width,
            height: DOOR_HEIGHT,
            direction,
        }
    }

    pub fn volume(&self) -> Volume {
        Volume::new(self.position, self.length, self.width, self.height)
    }
}
