use nalgebra::Vector3;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Rooms at this depth or deeper never spawn further connected rooms.
pub const MAX_ROOM_DEPTH: u32 = 3;

pub const DOOR_LENGTH: f32 = 0.5;
pub const DOOR_THICKNESS: f32 = 0.15;
pub const DOOR_HEIGHT: f32 = 1.0;

// Half-extent of a corridor across its direction of travel
pub const CORRIDOR_HALF_WIDTH: f32 = 0.5;

pub const TILE_HALF_HEIGHT: f32 = 0.05;

/// Up/Down travel along the z-axis, Left/Right along the x-axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Right,
    Left,
    None,
}

pub const DIRECTIONS: &[Direction; 4] = &[
    Direction::Up,
    Direction::Down,
    Direction::Right,
    Direction::Left,
];

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::None => Direction::None,
        }
    }

    #[inline]
    pub fn is_opposite(&self, other: &Direction) -> bool {
        *self != Direction::None && self.opposite() == *other
    }

    /// True for the directions travelling along the z-axis.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// -1 for Up/Left, +1 for Down/Right, 0 for None.
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Up | Direction::Left => -1.0,
            Direction::Down | Direction::Right => 1.0,
            Direction::None => 0.0,
        }
    }

    /// Unit step along the floor plane.
    pub fn to_vec3(&self) -> Vector3<f32> {
        match self {
            Direction::Up => Vector3::new(0.0, 0.0, -1.0),
            Direction::Down => Vector3::new(0.0, 0.0, 1.0),
            Direction::Right => Vector3::new(1.0, 0.0, 0.0),
            Direction::Left => Vector3::new(-1.0, 0.0, 0.0),
            Direction::None => Vector3::zeros(),
        }
    }

    /// Uniformly random cardinal direction, never `None`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Direction {
        *DIRECTIONS.choose(rng).unwrap_or(&Direction::Up)
    }
}
