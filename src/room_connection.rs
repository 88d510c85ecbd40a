use crate::constants::Direction;
use crate::room::RoomId;
use serde::Serialize;

/// `to` was grown out of `from`, through the door `from` has facing
/// `direction`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RoomConnection {
    pub from: RoomId,
    pub to: RoomId,
    pub direction: Direction,
}

impl RoomConnection {
    /// The room on the other side from `room`, if `room` is an end of this
    /// connection.
    pub fn other(&self, room: RoomId) -> Option<RoomId> {
        if room == self.from {
            Some(self.to)
        } else if room == self.to {
            Some(self.from)
        } else {
            None
        }
    }

    /// Direction of the door `to` has back towards `from`.
    #[inline]
    pub fn back_direction(&self) -> Direction {
        self.direction.opposite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other() {
        let mut ids = RoomId::first();
        let (a, b, c) = (ids.gen_id(), ids.gen_id(), ids.gen_id());
        let connection = RoomConnection {
            from: a,
            to: b,
            direction: Direction::Left,
        };
        assert_eq!(connection.other(a), Some(b));
        assert_eq!(connection.other(b), Some(a));
        assert_eq!(connection.other(c), None);
        assert_eq!(connection.back_direction(), Direction::Right);
    }
}
