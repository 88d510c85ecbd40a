use crate::constants::MAX_ROOM_DEPTH;
use crate::random::SteppedRange;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub seed: Option<u64>, // Seed value for random layout generation
    pub max_room_depth: u32,
    pub room_extent: SteppedRange, // Half-extent of a room along x and along z
    pub room_height: f32,
    pub lateral_offset: SteppedRange, // Fraction of a wall's half-extent, in [-1, 1]
    pub corridor_length: SteppedRange,
    pub room_placement_attempts: u32,
    pub connection_attempts: u32,
    pub direction_attempts: u32,
    pub special_room_attempts: u32,
    pub connected_room_count: u32, // Calls to create_connected_room made by generate_layout
    pub item_room_count: u32,
    pub boss_room_count: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            seed: None,
            max_room_depth: MAX_ROOM_DEPTH,
            room_extent: SteppedRange::new(50..=140, 2, 0.1),
            room_height: 1.0,
            lateral_offset: SteppedRange::new(-100..=100, 2, 0.01),
            corridor_length: SteppedRange::new(10..=40, 2, 0.2),
            room_placement_attempts: 1,
            connection_attempts: 1,
            direction_attempts: 10,
            special_room_attempts: 1,
            connected_room_count: 20,
            item_room_count: 1,
            boss_room_count: 1,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutConfigError {
    #[error("`{0}` has an empty range")]
    EmptyRange(&'static str),
    #[error("`{0}` must have a positive step")]
    NonPositiveStep(&'static str),
    #[error("`{0}` has more than {max} values", max = u32::MAX)]
    RangeTooLarge(&'static str),
    #[error("`{0}` must have a finite scale")]
    NonFiniteScale(&'static str),
    #[error("`{0}` must be at least 1")]
    ZeroAttempts(&'static str),
    #[error("room extents must be positive, smallest is {0}")]
    NonPositiveRoomExtent(f32),
    #[error("room height must be positive, got {0}")]
    NonPositiveRoomHeight(f32),
    #[error("corridor lengths must be positive, smallest is {0}")]
    NonPositiveCorridorLength(f32),
    #[error("lateral offsets must lie within [-1, 1], got {min}..={max}")]
    LateralOffsetOutOfBounds { min: f32, max: f32 },
    #[error("invalid layout config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

impl LayoutConfig {
    /// Parses a RON document. Missing fields take their default values.
    pub fn from_ron_str(source: &str) -> Result<Self, LayoutConfigError> {
        let config: LayoutConfig = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LayoutConfigError> {
        for (name, range) in [
            ("room_extent", &self.room_extent),
            ("lateral_offset", &self.lateral_offset),
            ("corridor_length", &self.corridor_length),
        ] {
            if range.is_empty() {
                return Err(LayoutConfigError::EmptyRange(name));
            }
            if range.step <= 0 {
                return Err(LayoutConfigError::NonPositiveStep(name));
            }
            if range.len() > u32::MAX as usize {
                return Err(LayoutConfigError::RangeTooLarge(name));
            }
            if !range.scale.is_finite() {
                return Err(LayoutConfigError::NonFiniteScale(name));
            }
        }

        // written as `!(x > 0.0)` so NaN is rejected too
        let smallest_extent = self.room_extent.min().min(self.room_extent.max());
        if !(smallest_extent > 0.0) {
            return Err(LayoutConfigError::NonPositiveRoomExtent(smallest_extent));
        }
        if !(self.room_height > 0.0) || !self.room_height.is_finite() {
            return Err(LayoutConfigError::NonPositiveRoomHeight(self.room_height));
        }
        let shortest_corridor = self.corridor_length.min().min(self.corridor_length.max());
        if !(shortest_corridor > 0.0) {
            return Err(LayoutConfigError::NonPositiveCorridorLength(
                shortest_corridor,
            ));
        }

        let (min, max) = (self.lateral_offset.min(), self.lateral_offset.max());
        if min.min(max) < -1.0 || min.max(max) > 1.0 {
            return Err(LayoutConfigError::LateralOffsetOutOfBounds { min, max });
        }

        // zero direction attempts is allowed: every pick then retires its room
        for (name, attempts) in [
            ("room_placement_attempts", self.room_placement_attempts),
            ("connection_attempts", self.connection_attempts),
            ("special_room_attempts", self.special_room_attempts),
        ] {
            if attempts == 0 {
                return Err(LayoutConfigError::ZeroAttempts(name));
            }
        }
        Ok(())
    }
}
