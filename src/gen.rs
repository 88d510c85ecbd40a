use crate::config::{LayoutConfig, LayoutConfigError};
use crate::room_manager::RoomManager;
use log::debug;

/// Runs a whole generation pass: a fresh starting room, then
/// `connected_room_count` connection attempts, then the item and boss rooms.
pub fn generate_layout(config: LayoutConfig) -> Result<RoomManager, LayoutConfigError> {
    let connected_room_count = config.connected_room_count;
    let item_room_count = config.item_room_count;
    let boss_room_count = config.boss_room_count;

    let mut manager = RoomManager::new(config)?;
    manager.generate_new_layout();
    for _ in 0..connected_room_count {
        manager.create_connected_room();
    }
    for _ in 0..item_room_count {
        manager.create_item_room();
    }
    for _ in 0..boss_room_count {
        manager.create_boss_room();
    }

    debug!("{}", manager.stats());
    Ok(manager)
}

#[cfg(test)]
mod tests {
    use crate::config::LayoutConfig;
    use crate::gen::generate_layout;
    use crate::random::SteppedRange;

    #[test]
    fn test_default_generate() {
        let manager = generate_layout(LayoutConfig {
            seed: Some(0),
            ..Default::default()
        })
        .unwrap();
        let stats = manager.stats();
        assert!(stats.rooms >= 2);
        assert!(stats.rooms <= 21);
        assert!(stats.item_rooms <= 1);
        assert!(stats.boss_rooms <= 1);
        assert_eq!(manager.connections().len(), stats.rooms - 1);
    }

    #[test]
    fn test_no_connections() {
        let manager = generate_layout(LayoutConfig {
            seed: Some(0),
            connected_room_count: 0,
            ..Default::default()
        })
        .unwrap();
        insta::assert_snapshot!(manager.stats(), @"Rooms: 1, ConnectionList: 1, Item: 0 (0), Boss: 0 (0)");
    }

    #[test]
    fn test_invalid_config() {
        let result = generate_layout(LayoutConfig {
            room_extent: SteppedRange::new(-10..=10, 2, 0.1),
            ..Default::default()
        });
        assert!(result.is_err());
    }
}
