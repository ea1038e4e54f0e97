//! The cube: static geometry, per-frame face analysis and drawing.
//!
//! Each frame the eight corners are rotated (X, then Y, then Z) and pushed
//! `CAMERA_DISTANCE` down -z. Faces whose outward normal points away from the
//! camera are culled, the rest are lit and painted farthest first, and edges
//! bordering exactly one visible face are outlined.

use arrayvec::ArrayVec;

use crate::framebuffer::FrameBuffer;
use crate::lighting::Lighting;
use crate::projector::Projector;
use crate::raster::Rasterizer;
use crate::types::{Rgb, Vec3, CAMERA_DISTANCE, CUBE_HALF_EXTENT, INITIAL_ANGLES};

pub const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

/// Quad faces, wound counter-clockwise as seen from outside the cube, so
/// `(v1 - v0) x (v2 - v0)` is the outward normal.
pub const CUBE_FACES: [[usize; 4]; 6] = [
    [3, 2, 1, 0], // -z
    [6, 7, 4, 5], // +z
    [7, 3, 0, 4], // -x
    [2, 6, 5, 1], // +x
    [7, 6, 2, 3], // +y
    [0, 1, 5, 4], // -y
];

pub const FACE_COLORS: [Rgb; 6] = [
    Rgb::new(255, 0, 128),
    Rgb::new(0, 128, 255),
    Rgb::new(0, 255, 80),
    Rgb::new(255, 128, 0),
    Rgb::new(200, 0, 255),
    Rgb::new(255, 220, 0),
];

pub const CUBE_EDGES: [[usize; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

pub const EDGE_COLOR: Rgb = Rgb::WHITE;

/// Accumulated rotation angles in radians. Never wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Orientation {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn initial() -> Self {
        Self::new(INITIAL_ANGLES[0], INITIAL_ANGLES[1], INITIAL_ANGLES[2])
    }

    /// Apply the three axis rotations in fixed X, Y, Z order.
    #[inline]
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        v.rotate_x(self.x).rotate_y(self.y).rotate_z(self.z)
    }
}

/// A visible face for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Index into [`CUBE_FACES`] / [`FACE_COLORS`].
    pub index: usize,
    /// Camera-space z of the face center.
    pub depth: f64,
    pub center: Vec3,
    pub normal: Vec3,
    pub brightness: f64,
}

impl Face {
    pub fn contains_edge(&self, edge: [usize; 2]) -> bool {
        let quad = &CUBE_FACES[self.index];
        quad.contains(&edge[0]) && quad.contains(&edge[1])
    }
}

pub type VisibleFaces = ArrayVec<Face, 6>;

/// Camera-space cube corners for `orientation`.
pub fn transform_vertices(orientation: Orientation) -> [Vec3; 8] {
    CUBE_VERTICES.map(|v| {
        let v = orientation.rotate(v * CUBE_HALF_EXTENT);
        Vec3::new(v.x, v.y, v.z - CAMERA_DISTANCE)
    })
}

/// Cull, light and depth-sort the faces (farthest first).
///
/// The sort is stable, so faces at equal depth keep table order.
pub fn visible_faces(verts: &[Vec3; 8], lighting: &Lighting) -> VisibleFaces {
    let mut faces = VisibleFaces::new();

    for (index, &quad) in CUBE_FACES.iter().enumerate() {
        let [a, b, c, d] = quad.map(|i| verts[i]);
        let normal = (b - a).cross(c - a).normalize();
        let center = (a + b + c + d) * 0.25;

        let to_camera = (-center).normalize();
        if normal.dot(to_camera) <= 0.0 {
            continue;
        }

        faces.push(Face {
            index,
            depth: center.z,
            center,
            normal,
            brightness: lighting.brightness(normal),
        });
    }

    faces.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    faces
}

/// Number of faces in `faces` that contain both endpoints of `edge`.
pub fn edge_face_count(faces: &[Face], edge: [usize; 2]) -> usize {
    faces.iter().filter(|f| f.contains_edge(edge)).count()
}

/// Edges bordering exactly one visible face: the outline.
pub fn silhouette_edges(faces: &[Face]) -> impl Iterator<Item = [usize; 2]> + '_ {
    CUBE_EDGES
        .iter()
        .copied()
        .filter(move |&edge| edge_face_count(faces, edge) == 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SceneStats {
    pub visible_faces: usize,
    pub silhouette_edges: usize,
    pub fill_samples: usize,
    pub line_samples: usize,
}

/// Draw the cube into `fb`. The caller clears the buffer beforehand.
pub fn render_cube(
    fb: &mut FrameBuffer,
    projector: Projector,
    orientation: Orientation,
    time: f64,
) -> SceneStats {
    let verts = transform_vertices(orientation);
    let faces = visible_faces(&verts, &Lighting::at(time));
    let mut raster = Rasterizer::new(fb, projector);
    let mut stats = SceneStats {
        visible_faces: faces.len(),
        ..SceneStats::default()
    };

    for face in &faces {
        let [a, b, c, d] = CUBE_FACES[face.index].map(|i| verts[i]);
        let color = FACE_COLORS[face.index].shade(face.brightness);
        stats.fill_samples += raster.fill_triangle(a, b, c, color);
        stats.fill_samples += raster.fill_triangle(a, c, d, color);
    }

    for [i, j] in silhouette_edges(&faces) {
        stats.silhouette_edges += 1;
        stats.line_samples += raster.draw_line(verts[i], verts[j], EDGE_COLOR);
    }

    stats
}
