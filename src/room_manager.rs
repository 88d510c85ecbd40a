use crate::config::{LayoutConfig, LayoutConfigError};
use crate::constants::Direction;
use crate::geometry::{room_overlaps_any, Volume};
use crate::room::{Room, RoomId, RoomStatus};
use crate::room_connection::RoomConnection;
use crate::stats::LayoutStats;
use log::{debug, trace};
use nalgebra::Vector3;
use pathfinding::prelude::bfs;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// A room that `create_random_room` managed to place.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlacedRoom {
    pub id: RoomId,
    /// Where along the connecting room's wall the new room's corridor
    /// arrives, as a fraction of that wall's half-extent.
    pub lateral_fraction: f32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum SpecialRoom {
    Item,
    Boss,
}

/// Grows a layout of rooms one connection at a time.
///
/// Every step is best effort: a placement that overlaps, an empty
/// eligibility list or running out of attempts leaves the layout untouched.
#[derive(Debug)]
pub struct RoomManager<R = StdRng> {
    config: LayoutConfig,
    rng: R,
    next_room_id: RoomId,
    rooms: Vec<Room>,
    connections: Vec<RoomConnection>,
    connection_rooms: Vec<RoomId>,
    item_room_candidates: Vec<RoomId>,
    boss_room_candidates: Vec<RoomId>,
    num_item_rooms: usize,
    num_boss_rooms: usize,
}

impl RoomManager<StdRng> {
    /// Seeds from `config.seed`, or from entropy without one.
    pub fn new(config: LayoutConfig) -> Result<Self, LayoutConfigError> {
        let rng: StdRng = config
            .seed
            .map(SeedableRng::seed_from_u64)
            .unwrap_or_else(StdRng::from_entropy);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> RoomManager<R> {
    pub fn with_rng(config: LayoutConfig, rng: R) -> Result<Self, LayoutConfigError> {
        config.validate()?;
        Ok(RoomManager {
            config,
            rng,
            next_room_id: RoomId::first(),
            rooms: Vec::new(),
            connections: Vec::new(),
            connection_rooms: Vec::new(),
            item_room_candidates: Vec::new(),
            boss_room_candidates: Vec::new(),
            num_item_rooms: 0,
            num_boss_rooms: 0,
        })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn clear_rooms(&mut self) {
        self.rooms.clear();
        self.connections.clear();
        self.connection_rooms.clear();
        self.item_room_candidates.clear();
        self.boss_room_candidates.clear();
        self.num_item_rooms = 0;
        self.num_boss_rooms = 0;
        self.next_room_id = RoomId::first();
    }

    /// Rooms in creation order; the first one is the starting room.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    pub fn start_room(&self) -> Option<&Room> {
        self.rooms.first()
    }

    pub fn connections(&self) -> &[RoomConnection] {
        &self.connections
    }

    pub fn num_rooms(&self) -> usize {
        self.rooms.len()
    }

    pub fn num_connection_rooms_possible(&self) -> usize {
        self.connection_rooms.len()
    }

    pub fn num_item_rooms(&self) -> usize {
        self.num_item_rooms
    }

    pub fn num_item_rooms_possible(&self) -> usize {
        self.item_room_candidates.len()
    }

    pub fn num_boss_rooms(&self) -> usize {
        self.num_boss_rooms
    }

    pub fn num_boss_rooms_possible(&self) -> usize {
        self.boss_room_candidates.len()
    }

    /// Rooms that may still grow a connected room.
    pub fn connection_rooms(&self) -> &[RoomId] {
        &self.connection_rooms
    }

    pub fn item_room_candidates(&self) -> &[RoomId] {
        &self.item_room_candidates
    }

    pub fn boss_room_candidates(&self) -> &[RoomId] {
        &self.boss_room_candidates
    }

    pub fn stats(&self) -> LayoutStats {
        LayoutStats {
            rooms: self.num_rooms(),
            connection_rooms_possible: self.num_connection_rooms_possible(),
            item_rooms: self.num_item_rooms(),
            item_rooms_possible: self.num_item_rooms_possible(),
            boss_rooms: self.num_boss_rooms(),
            boss_rooms_possible: self.num_boss_rooms_possible(),
        }
    }

    pub fn does_room_overlap(&self, candidate: &Volume) -> bool {
        room_overlaps_any(candidate, &self.rooms)
    }

    pub fn room_status(&self, id: RoomId) -> Option<RoomStatus> {
        let room = self.room(id)?;
        let status = if room.depth() == 0 {
            RoomStatus::Start
        } else if room.is_boss_room() {
            RoomStatus::Boss
        } else if room.is_item_room() {
            RoomStatus::Item
        } else if room.is_full_of_doors() {
            RoomStatus::Full
        } else if room.depth() >= self.config.max_room_depth {
            RoomStatus::DepthLimit
        } else if !room.is_able_to_create_more_connections() {
            RoomStatus::DeadEnd
        } else {
            RoomStatus::Open
        };
        Some(status)
    }

    /// Rooms directly connected to `room`, in connection order.
    pub fn neighbours(&self, room: RoomId) -> Vec<RoomId> {
        self.connections
            .iter()
            .filter_map(|connection| connection.other(room))
            .collect()
    }

    /// Shortest chain of rooms from `from` to `to`, both ends included.
    pub fn route(&self, from: RoomId, to: RoomId) -> Option<Vec<RoomId>> {
        self.room(from)?;
        self.room(to)?;
        bfs(&from, |room| self.neighbours(*room), |room| *room == to)
    }

    /// Discards the current layout and places a new starting room.
    pub fn generate_new_layout(&mut self) {
        self.clear_rooms();
        let start = self.create_random_room(None, 0.0, 0);
        debug!("new layout, starting room {:?}", start.map(|placed| placed.id));
    }

    /// Places a room of random size. With a `connection` the room is put on
    /// the far side of a corridor `corridor_length_amount` long leaving the
    /// connecting room in the given direction, and gets its door back.
    ///
    /// Only the new room is created here; the connecting room's door and
    /// corridor are left to the caller.
    pub fn create_random_room(
        &mut self,
        connection: Option<(RoomId, Direction)>,
        corridor_length_amount: f32,
        room_depth: u32,
    ) -> Option<PlacedRoom> {
        let source = match connection {
            Some((_, Direction::None)) => return None,
            Some((id, direction)) => Some((self.room(id)?.volume(), direction)),
            None => None,
        };

        for attempt in 0..self.config.room_placement_attempts {
            let length = self.config.room_extent.sample(&mut self.rng);
            let width = self.config.room_extent.sample(&mut self.rng);
            let height = self.config.room_height;
            let lateral_fraction = self.config.lateral_offset.sample(&mut self.rng);

            let mut candidate = Volume::new(Vector3::zeros(), length, width, height);
            let mut back_door = None;
            if let Some((source, direction)) = source {
                let source_offset = lateral_fraction * source.cross_extent(direction);
                let back_door_offset = self.config.lateral_offset.sample(&mut self.rng)
                    * candidate.cross_extent(direction);
                candidate.position = connected_position(
                    &source,
                    direction,
                    corridor_length_amount,
                    &candidate,
                    source_offset + back_door_offset,
                );
                back_door = Some((direction.opposite(), back_door_offset));
            }

            if self.does_room_overlap(&candidate) {
                trace!(
                    "attempt {} rejected, {}x{} room at {:?} overlaps",
                    attempt,
                    length,
                    width,
                    candidate.position
                );
                continue;
            }

            let id = self.next_room_id.gen_id();
            let mut room = Room::new(id);
            room.set_dimensions(length, width, height);
            room.set_position(candidate.position);
            room.set_depth(room_depth);
            if let Some((direction, offset)) = back_door {
                room.create_door(direction, offset);
            }
            self.rooms.push(room);

            if room_depth != 0 {
                self.item_room_candidates.push(id);
            }
            if room_depth < self.config.max_room_depth {
                self.connection_rooms.push(id);
            } else if room_depth != 0 {
                self.boss_room_candidates.push(id);
            }

            debug!(
                "created room {:?} at depth {} ({}x{} at {:?})",
                id, room_depth, length, width, candidate.position
            );
            return Some(PlacedRoom {
                id,
                lateral_fraction,
            });
        }
        None
    }

    /// Tries to grow one new room off a random room that can still connect.
    /// Returns the new room on success.
    pub fn create_connected_room(&mut self) -> Option<RoomId> {
        for _ in 0..self.config.connection_attempts {
            let source_id = *self.connection_rooms.choose(&mut self.rng)?;
            let source = &self.rooms[source_id.index()];
            let source_depth = source.depth();
            if source.is_full_of_doors()
                || !source.is_able_to_create_more_connections()
                || source_depth >= self.config.max_room_depth
            {
                self.remove_room_from_connection_list(source_id);
                continue;
            }

            for _ in 0..self.config.direction_attempts {
                let direction = Direction::random(&mut self.rng);
                if !self.rooms[source_id.index()].can_create_connection(direction) {
                    trace!("room {:?} already has a {:?} door", source_id, direction);
                    continue;
                }

                let corridor_length_amount = self.config.corridor_length.sample(&mut self.rng);
                let Some(placed) = self.create_random_room(
                    Some((source_id, direction)),
                    corridor_length_amount,
                    source_depth + 1,
                ) else {
                    continue;
                };

                let source = &mut self.rooms[source_id.index()];
                let lateral_offset =
                    placed.lateral_fraction * source.volume().cross_extent(direction);
                source.create_door(direction, lateral_offset);
                source.create_corridor(direction, corridor_length_amount, lateral_offset);
                let full = source.is_full_of_doors();

                self.connections.push(RoomConnection {
                    from: source_id,
                    to: placed.id,
                    direction,
                });
                if full {
                    self.remove_room_from_connection_list(source_id);
                }
                return Some(placed.id);
            }

            let source = &mut self.rooms[source_id.index()];
            source.set_able_to_create_more_connections(false);
            let terminal = source.depth() != 0 && !source.is_item_room() && !source.is_boss_room();
            self.remove_room_from_connection_list(source_id);
            if terminal && !self.boss_room_candidates.contains(&source_id) {
                self.boss_room_candidates.push(source_id);
            }
            debug!("room {:?} can not create any more connections", source_id);
        }
        None
    }

    pub fn remove_room_from_connection_list(&mut self, id: RoomId) {
        self.connection_rooms.retain(|room| *room != id);
    }

    pub fn remove_room_from_item_list(&mut self, id: RoomId) {
        self.item_room_candidates.retain(|room| *room != id);
    }

    pub fn remove_room_from_boss_list(&mut self, id: RoomId) {
        self.boss_room_candidates.retain(|room| *room != id);
    }

    pub fn create_item_room(&mut self) -> Option<RoomId> {
        self.create_special_room(SpecialRoom::Item)
    }

    pub fn create_boss_room(&mut self) -> Option<RoomId> {
        self.create_special_room(SpecialRoom::Boss)
    }

    fn create_special_room(&mut self, kind: SpecialRoom) -> Option<RoomId> {
        for _ in 0..self.config.special_room_attempts {
            let candidates = match kind {
                SpecialRoom::Item => &self.item_room_candidates,
                SpecialRoom::Boss => &self.boss_room_candidates,
            };
            let id = *candidates.choose(&mut self.rng)?;
            let room = &mut self.rooms[id.index()];
            if room.is_item_room() || room.is_boss_room() || room.depth() == 0 {
                continue;
            }

            match kind {
                SpecialRoom::Item => {
                    room.set_item_room(true);
                    self.num_item_rooms += 1;
                }
                SpecialRoom::Boss => {
                    room.set_boss_room(true);
                    self.num_boss_rooms += 1;
                }
            }
            self.remove_room_from_item_list(id);
            self.remove_room_from_boss_list(id);
            debug!("room {:?} is now a {:?} room", id, kind);
            return Some(id);
        }
        None
    }
}

/// Centre of a room placed `corridor_length_amount` beyond the wall of
/// `source` facing `direction`, slid sideways by `lateral_offset` in the
/// direction's door convention.
fn connected_position(
    source: &Volume,
    direction: Direction,
    corridor_length_amount: f32,
    room: &Volume,
    lateral_offset: f32,
) -> Vector3<f32> {
    let along = source.extent_towards(direction)
        + corridor_length_amount
        + room.extent_towards(direction);
    let across = direction.sign() * lateral_offset;
    let lateral = if direction.is_vertical() {
        Vector3::new(across, 0.0, 0.0)
    } else {
        Vector3::new(0.0, 0.0, across)
    };
    source.position + direction.to_vec3() * along + lateral
}
