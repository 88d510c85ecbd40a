use crate::constants::Direction;
use crate::room::Room;
use nalgebra::Vector3;
use serde::Serialize;

/// Signed-distance plane, `normal · p + d`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane {
    pub normal: Vector3<f32>,
    pub d: f32,
}

impl Plane {
    pub fn from_normal_and_point(normal: Vector3<f32>, point: Vector3<f32>) -> Self {
        Plane {
            normal,
            d: -normal.dot(&point),
        }
    }

    #[inline]
    pub fn distance(&self, point: &Vector3<f32>) -> f32 {
        self.normal.dot(point) + self.d
    }
}

/// Axis-aligned box given by its centre and half-extents
/// (`length` along x, `width` along z, `height` along y).
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Volume {
    pub position: Vector3<f32>,
    pub length: f32,
    pub width: f32,
    pub height: f32,
}

impl Volume {
    pub fn new(position: Vector3<f32>, length: f32, width: f32, height: f32) -> Self {
        Volume {
            position,
            length,
            width,
            height,
        }
    }

    /// Half-extent of the wall a door facing `direction` sits on, measured
    /// along the wall.
    pub fn cross_extent(&self, direction: Direction) -> f32 {
        if direction.is_vertical() {
            self.length
        } else if direction.is_horizontal() {
            self.width
        } else {
            0.0
        }
    }

    /// Half-extent from the centre to the wall facing `direction`.
    pub fn extent_towards(&self, direction: Direction) -> f32 {
        if direction.is_vertical() {
            self.width
        } else if direction.is_horizontal() {
            self.length
        } else {
            0.0
        }
    }

    pub fn planes(&self) -> [Plane; 6] {
        bounding_planes(self.length, self.width, self.height)
    }

    pub fn sample_points(&self) -> [Vector3<f32>; 9] {
        sample_points(&self.position, self.length, self.width)
    }
}

/// The six inward-facing planes of a box centred on the origin.
pub fn bounding_planes(length: f32, width: f32, height: f32) -> [Plane; 6] {
    [
        Plane::from_normal_and_point(Vector3::new(-1.0, 0.0, 0.0), Vector3::new(length, 0.0, 0.0)),
        Plane::from_normal_and_point(Vector3::new(1.0, 0.0, 0.0), Vector3::new(-length, 0.0, 0.0)),
        Plane::from_normal_and_point(Vector3::new(0.0, -1.0, 0.0), Vector3::new(0.0, height, 0.0)),
        Plane::from_normal_and_point(Vector3::new(0.0, 1.0, 0.0), Vector3::new(0.0, -height, 0.0)),
        Plane::from_normal_and_point(Vector3::new(0.0, 0.0, -1.0), Vector3::new(0.0, 0.0, width)),
        Plane::from_normal_and_point(Vector3::new(0.0, 0.0, 1.0), Vector3::new(0.0, 0.0, -width)),
    ]
}

/// `local_point` is relative to the centre the planes were built around.
/// Points on a boundary count as inside.
pub fn is_point_inside_planes(planes: &[Plane; 6], local_point: &Vector3<f32>) -> bool {
    planes.iter().all(|plane| plane.distance(local_point) >= 0.0)
}

/// Four corners, four wall midpoints and the centre of a footprint, all on
/// the floor plane of `position`.
pub fn sample_points(position: &Vector3<f32>, length: f32, width: f32) -> [Vector3<f32>; 9] {
    [
        position + Vector3::new(length, 0.0, width),
        position + Vector3::new(-length, 0.0, width),
        position + Vector3::new(length, 0.0, -width),
        position + Vector3::new(-length, 0.0, -width),
        position + Vector3::new(length, 0.0, 0.0),
        position + Vector3::new(-length, 0.0, 0.0),
        position + Vector3::new(0.0, 0.0, width),
        position + Vector3::new(0.0, 0.0, -width),
        *position,
    ]
}

/// True when any sample point of `b` lies inside `a`.
///
/// This is a coarse test: a thin box crossing the middle of `a` without any
/// of its nine samples landing inside is not reported.
pub fn volumes_overlap(a: &Volume, b: &Volume) -> bool {
    let planes = a.planes();
    b.sample_points()
        .iter()
        .any(|point| is_point_inside_planes(&planes, &(point - a.position)))
}

/// Checks a candidate volume against every existing room, from both sides.
pub fn room_overlaps_any(candidate: &Volume, rooms: &[Room]) -> bool {
    let candidate_points = candidate.sample_points();
    rooms.iter().any(|room| {
        candidate_points
            .iter()
            .any(|point| room.is_point_inside(point))
            || volumes_overlap(candidate, &room.volume())
    })
}
