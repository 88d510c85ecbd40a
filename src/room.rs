use crate::constants::{Direction, TILE_HALF_HEIGHT};
use crate::corridor::Corridor;
use crate::door::Door;
use crate::geometry::{bounding_planes, is_point_inside_planes, Plane, Volume};
use nalgebra::Vector3;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    pub id: RoomId,
    position: Vector3<f32>,
    length: f32,
    width: f32,
    height: f32,
    depth: u32,
    able_to_create_connecting_rooms: bool,
    item_room: bool,
    boss_room: bool,
    #[serde(skip)]
    planes: [Plane; 6],
    doors: Vec<Door>,
    corridors: Vec<Corridor>,
}

impl Room {
    pub fn new(id: RoomId) -> Self {
        let (length, width, height) = (0.5, 0.5, 0.5);
        Room {
            id,
            position: Vector3::zeros(),
            length,
            width,
            height,
            depth: 0,
            able_to_create_connecting_rooms: true,
            item_room: false,
            boss_room: false,
            planes: bounding_planes(length, width, height),
            doors: Vec::new(),
            corridors: Vec::new(),
        }
    }

    pub fn clear_doors(&mut self) {
        self.doors.clear();
    }

    pub fn clear_corridors(&mut self) {
        self.corridors.clear();
    }

    #[inline]
    pub fn position(&self) -> Vector3<f32> {
        self.position
    }

    /// Moves the room; its doors and corridors follow.
    pub fn set_position(&mut self, position: Vector3<f32>) {
        let difference = position - self.position;
        self.position = position;
        for door in self.doors.iter_mut() {
            door.position += difference;
        }
        for corridor in self.corridors.iter_mut() {
            corridor.position += difference;
        }
    }

    pub fn set_dimensions(&mut self, length: f32, width: f32, height: f32) {
        self.length = length;
        self.width = width;
        self.height = height;
        self.planes = bounding_planes(length, width, height);
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Connection hops from the starting room.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: u32) {
        self.depth = depth;
    }

    pub fn volume(&self) -> Volume {
        Volume::new(self.position, self.length, self.width, self.height)
    }

    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    /// Half-extent of the corridor leaving in `direction` along its travel
    /// axis, or 0 without one.
    pub fn corridor_length(&self, direction: Direction) -> f32 {
        self.corridors
            .iter()
            .find(|corridor| corridor.direction == direction)
            .map(|corridor| corridor.span())
            .unwrap_or(0.0)
    }

    pub fn set_item_room(&mut self, item: bool) {
        self.item_room = item;
    }

    #[inline]
    pub fn is_item_room(&self) -> bool {
        self.item_room
    }

    pub fn set_boss_room(&mut self, boss: bool) {
        self.boss_room = boss;
    }

    #[inline]
    pub fn is_boss_room(&self) -> bool {
        self.boss_room
    }

    pub fn is_point_inside(&self, point: &Vector3<f32>) -> bool {
        is_point_inside_planes(&self.planes, &(point - self.position))
    }

    pub fn can_create_connection(&self, direction: Direction) -> bool {
        direction != Direction::None && self.doors.iter().all(|door| door.direction != direction)
    }

    #[inline]
    pub fn is_full_of_doors(&self) -> bool {
        self.doors.len() == 4
    }

    #[inline]
    pub fn is_able_to_create_more_connections(&self) -> bool {
        self.able_to_create_connecting_rooms
    }

    pub fn set_able_to_create_more_connections(&mut self, able: bool) {
        self.able_to_create_connecting_rooms = able;
    }

    /// Callers check `can_create_connection` first; a second door facing the
    /// same way is not rejected here.
    pub fn create_door(&mut self, direction: Direction, lateral_offset: f32) {
        let door = Door::new(direction, lateral_offset, &self.volume());
        self.doors.push(door);
    }

    pub fn create_corridor(
        &mut self,
        direction: Direction,
        corridor_length_amount: f32,
        lateral_offset: f32,
    ) {
        let corridor = Corridor::new(
            direction,
            corridor_length_amount,
            lateral_offset,
            &self.volume(),
        );
        self.corridors.push(corridor);
    }

    /// Centres of the unit floor tiles covering the room.
    pub fn floor_tiles(&self) -> impl Iterator<Item = Vector3<f32>> + '_ {
        let origin = self.position - Vector3::new(self.length, self.height, self.width)
            + Vector3::new(0.5, TILE_HALF_HEIGHT, 0.5);
        let columns = (self.length * 2.0).ceil() as u32;
        let rows = (self.width * 2.0).ceil() as u32;
        (0..columns).flat_map(move |x| {
            (0..rows).map(move |z| origin + Vector3::new(x as f32, 0.0, z as f32))
        })
    }
}

/// What a renderer needs to know to pick how a room is drawn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum RoomStatus {
    Start,
    Boss,
    Item,
    Full,
    DepthLimit,
    DeadEnd,
    Open,
}

/// Index of a room within the current layout.
///
/// Ids restart from `RoomId::first()` whenever the layout is cleared, so an
/// id kept from an earlier layout names whichever room now holds that index.
#[derive(Ord, PartialOrd, PartialEq, Eq, Hash, Copy, Clone, Debug, Serialize)]
pub struct RoomId(usize);

impl RoomId {
    pub fn first() -> Self {
        RoomId(0)
    }

    pub fn gen_id(&mut self) -> Self {
        let ret = *self;
        self.0 += 1;
        ret
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(length: f32, width: f32) -> Room {
        let mut room = Room::new(RoomId::first());
        room.set_dimensions(length, width, 1.0);
        room
    }

    #[test]
    fn test_room_id_gen() {
        let mut id = RoomId::first();
        assert_eq!(id.gen_id().index(), 0);
        assert_eq!(id.gen_id().index(), 1);
        assert_eq!(id.index(), 2);
    }

    #[test]
    fn test_set_dimensions_updates_planes() {
        let mut room = room(2.0, 2.0);
        assert!(!room.is_point_inside(&Vector3::new(3.0, 0.0, 0.0)));
        room.set_dimensions(4.0, 2.0, 1.0);
        assert!(room.is_point_inside(&Vector3::new(3.0, 0.0, 0.0)));
        assert_eq!(room.planes(), &bounding_planes(4.0, 2.0, 1.0));
    }

    #[test]
    fn test_point_inside_uses_position() {
        let mut room = room(1.0, 1.0);
        room.set_position(Vector3::new(10.0, 0.0, 10.0));
        assert!(room.is_point_inside(&Vector3::new(10.5, 0.0, 9.0)));
        assert!(!room.is_point_inside(&Vector3::new(0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_connections() {
        let mut room = room(3.0, 3.0);
        assert!(!room.can_create_connection(Direction::None));
        assert!(room.can_create_connection(Direction::Up));
        room.create_door(Direction::Up, 0.0);
        assert!(!room.can_create_connection(Direction::Up));
        assert!(room.can_create_connection(Direction::Down));
        assert!(!room.is_full_of_doors());
        room.create_door(Direction::Down, 0.0);
        room.create_door(Direction::Left, 0.0);
        room.create_door(Direction::Right, 0.0);
        assert!(room.is_full_of_doors());
        room.clear_doors();
        assert!(room.doors().is_empty());
    }

    #[test]
    fn test_corridor_length() {
        let mut room = room(3.0, 3.0);
        assert_eq!(room.corridor_length(Direction::Left), 0.0);
        room.create_corridor(Direction::Left, 6.0, 0.0);
        room.create_corridor(Direction::Up, 4.0, 0.0);
        assert_eq!(room.corridor_length(Direction::Left), 3.0);
        assert_eq!(room.corridor_length(Direction::Up), 2.0);
        assert_eq!(room.corridor_length(Direction::Right), 0.0);
        room.clear_corridors();
        assert_eq!(room.corridor_length(Direction::Left), 0.0);
    }

    #[test]
    fn test_set_position_moves_doors_and_corridors() {
        let mut room = room(2.0, 2.0);
        room.create_door(Direction::Right, 1.0);
        room.create_corridor(Direction::Right, 4.0, 1.0);
        room.set_position(Vector3::new(5.0, 0.0, -5.0));
        assert_eq!(room.doors()[0].position, Vector3::new(7.0, 0.0, -4.0));
        assert_eq!(room.corridors()[0].position, Vector3::new(9.0, 0.0, -4.0));
    }

    #[test]
    fn test_flags() {
        let mut room = room(2.0, 2.0);
        assert!(room.is_able_to_create_more_connections());
        room.set_able_to_create_more_connections(false);
        assert!(!room.is_able_to_create_more_connections());
        room.set_item_room(true);
        assert!(room.is_item_room());
        assert!(!room.is_boss_room());
        room.set_depth(2);
        assert_eq!(room.depth(), 2);
    }

    #[test]
    fn test_floor_tiles() {
        let mut room = room(1.5, 1.0);
        room.set_position(Vector3::new(0.0, 1.0, 0.0));
        let tiles = room.floor_tiles().collect::<Vec<_>>();
        assert_eq!(tiles.len(), 3 * 2);
        assert_eq!(tiles[0], Vector3::new(-1.0, 0.05, -0.5));
        assert_eq!(tiles[5], Vector3::new(1.0, 0.05, 0.5));
    }

    #[test]
    fn test_serialize_skips_planes() {
        let mut room = room(2.0, 3.0);
        room.create_door(Direction::Left, 0.0);
        let text = ron::to_string(&room).unwrap();
        assert!(text.contains("depth:0"));
        assert!(text.contains("direction:Left"));
        assert!(!text.contains("planes"));
    }
}
