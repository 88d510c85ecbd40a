use serde::Serialize;
use std::fmt;

/// Counters shown by a debug overlay while a layout grows.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LayoutStats {
    pub rooms: usize,
    pub connection_rooms_possible: usize,
    pub item_rooms: usize,
    pub item_rooms_possible: usize,
    pub boss_rooms: usize,
    pub boss_rooms_possible: usize,
}

impl fmt::Display for LayoutStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rooms: {}, ConnectionList: {}, Item: {} ({}), Boss: {} ({})",
            self.rooms,
            self.connection_rooms_possible,
            self.item_rooms,
            self.item_rooms_possible,
            self.boss_rooms,
            self.boss_rooms_possible
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let stats = LayoutStats {
            rooms: 12,
            connection_rooms_possible: 3,
            item_rooms: 1,
            item_rooms_possible: 10,
            boss_rooms: 0,
            boss_rooms_possible: 4,
        };
        insta::assert_snapshot!(stats, @"Rooms: 12, ConnectionList: 3, Item: 1 (10), Boss: 0 (4)");
    }
}
