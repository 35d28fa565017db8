//! # Scene Types
//!
//! A [`SceneGraph`] is a flat, ordered list of positioned solid primitives.
//! Coordinates are Y-up with the unit footprint centred on the origin:
//! X spans the width, Z spans the length (depth), Y is height above floor.

use std::collections::BTreeSet;

use glam::{DAffine3, DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};
use shelf_params::{Color, Finish};

// =============================================================================
// SHAPES
// =============================================================================

/// Shape of a primitive in its local frame.
///
/// Cylinders run along local Y and every shape is centred on its origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Shape {
    /// Cylinder or frustum along local Y.
    #[serde(rename_all = "camelCase")]
    Cylinder {
        radius_top: f64,
        radius_bottom: f64,
        height: f64,
        segments: u32,
    },

    /// Axis-aligned box: `width` along X, `height` along Y, `depth` along Z.
    Box { width: f64, height: f64, depth: f64 },

    /// Sphere tessellated with `segments` around its circumference.
    Sphere { radius: f64, segments: u32 },
}

/// Discriminant of [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Cylinder,
    Box,
    Sphere,
}

impl Shape {
    /// Straight cylinder with equal radii.
    pub fn cylinder(radius: f64, height: f64, segments: u32) -> Self {
        Shape::Cylinder {
            radius_top: radius,
            radius_bottom: radius,
            height,
            segments,
        }
    }

    /// Axis-aligned box.
    pub fn cuboid(width: f64, height: f64, depth: f64) -> Self {
        Shape::Box {
            width,
            height,
            depth,
        }
    }

    /// Sphere.
    pub fn sphere(radius: f64, segments: u32) -> Self {
        Shape::Sphere { radius, segments }
    }

    /// Returns the shape discriminant.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Cylinder { .. } => ShapeKind::Cylinder,
            Shape::Box { .. } => ShapeKind::Box,
            Shape::Sphere { .. } => ShapeKind::Sphere,
        }
    }

    /// Half extents of the local bounding box.
    pub fn half_extents(&self) -> DVec3 {
        match *self {
            Shape::Cylinder {
                radius_top,
                radius_bottom,
                height,
                ..
            } => {
                let r = radius_top.max(radius_bottom);
                DVec3::new(r, height / 2.0, r)
            }
            Shape::Box {
                width,
                height,
                depth,
            } => DVec3::new(width, height, depth) / 2.0,
            Shape::Sphere { radius, .. } => DVec3::splat(radius),
        }
    }
}

// =============================================================================
// TAGS
// =============================================================================

/// Material slot a renderer assigns to a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialTag {
    Post,
    Wire,
    Solid,
    Panel,
    Caster,
}

/// Face of the unit covered by an enclosure panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    Top,
    Back,
    Left,
    Right,
}

/// Sub-assembly a primitive belongs to.
///
/// Purely organizational; exporters ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "assembly", rename_all = "camelCase")]
pub enum Part {
    /// Corner post, `corner` in `0..4`.
    Post { corner: u8 },
    /// Shelf level, `level` 0-based from the floor.
    Shelf { level: u32 },
    /// Divider `slot` (1-based) on shelf `shelf` (1-based).
    Divider { shelf: u32, slot: u32 },
    /// Enclosure panel or frame bar.
    Enclosure { face: Face },
    /// Cross-brace tier, 1-based from the floor.
    Brace { tier: u32 },
    /// Caster at `corner` in `0..4`.
    Caster { corner: u8 },
}

// =============================================================================
// PRIMITIVE
// =============================================================================

/// A single positioned and oriented solid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub shape: Shape,
    /// World-space position of the shape's centre.
    pub position: DVec3,
    /// Euler angles in radians, applied in X, Y, Z order.
    pub rotation: DVec3,
    pub material: MaterialTag,
    pub part: Part,
}

impl Primitive {
    /// Creates an unrotated primitive at the origin.
    pub fn new(shape: Shape, material: MaterialTag, part: Part) -> Self {
        Self {
            shape,
            position: DVec3::ZERO,
            rotation: DVec3::ZERO,
            material,
            part,
        }
    }

    /// Moves the primitive to `position`.
    pub fn at(mut self, position: DVec3) -> Self {
        self.position = position;
        self
    }

    /// Sets the Euler rotation in radians.
    pub fn rotated(mut self, rotation: DVec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Local-to-world transform.
    pub fn transform(&self) -> DAffine3 {
        let rotation = DQuat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        DAffine3::from_rotation_translation(rotation, self.position)
    }

    /// World-space axis-aligned bounds of the local bounding box.
    pub fn bounds(&self) -> (DVec3, DVec3) {
        let half = self.shape.half_extents();
        let transform = self.transform();
        let mut min = DVec3::splat(f64::INFINITY);
        let mut max = DVec3::splat(f64::NEG_INFINITY);
        for i in 0..8 {
            let corner = DVec3::new(
                if i & 1 == 0 { -half.x } else { half.x },
                if i & 2 == 0 { -half.y } else { half.y },
                if i & 4 == 0 { -half.z } else { half.z },
            );
            let world = transform.transform_point3(corner);
            min = min.min(world);
            max = max.max(world);
        }
        (min, max)
    }
}

// =============================================================================
// SCENE GRAPH
// =============================================================================

/// One fully composed shelf configuration.
///
/// # Example
///
/// ```rust
/// use shelf_geometry::SceneGraph;
///
/// let scene = SceneGraph::empty();
/// assert!(scene.is_empty());
/// assert_eq!(scene.len(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGraph {
    primitives: Vec<Primitive>,
    finish: Finish,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::empty()
    }
}

impl SceneGraph {
    /// Creates a scene with no primitives and the default finish.
    pub fn empty() -> Self {
        Self::with_finish(Color::default().finish())
    }

    /// Creates an empty scene rendered with `finish`.
    pub fn with_finish(finish: Finish) -> Self {
        Self {
            primitives: Vec::new(),
            finish,
        }
    }

    /// Returns the number of primitives.
    #[inline]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Returns true if the scene has no primitives.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Renderer finish for every material slot.
    pub fn finish(&self) -> Finish {
        self.finish
    }

    /// Primitives in composition order.
    #[inline]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Iterates primitives in composition order.
    pub fn iter(&self) -> std::slice::Iter<'_, Primitive> {
        self.primitives.iter()
    }

    /// Appends primitives produced by one assembly rule.
    pub fn extend(&mut self, primitives: impl IntoIterator<Item = Primitive>) {
        self.primitives.extend(primitives);
    }

    /// Number of primitives tagged with `material`.
    pub fn count_by_material(&self, material: MaterialTag) -> usize {
        self.iter().filter(|p| p.material == material).count()
    }

    /// Number of primitives of shape `kind`.
    pub fn count_by_kind(&self, kind: ShapeKind) -> usize {
        self.iter().filter(|p| p.shape.kind() == kind).count()
    }

    /// Primitives whose part matches `predicate`.
    pub fn parts<'a>(
        &'a self,
        predicate: impl Fn(&Part) -> bool + 'a,
    ) -> impl Iterator<Item = &'a Primitive> + 'a {
        self.iter().filter(move |p| predicate(&p.part))
    }

    /// Distinct shelf levels present, 0-based.
    pub fn shelf_levels(&self) -> BTreeSet<u32> {
        self.iter()
            .filter_map(|p| match p.part {
                Part::Shelf { level } => Some(level),
                _ => None,
            })
            .collect()
    }

    /// Distinct cross-brace tiers present.
    pub fn brace_tiers(&self) -> BTreeSet<u32> {
        self.iter()
            .filter_map(|p| match p.part {
                Part::Brace { tier } => Some(tier),
                _ => None,
            })
            .collect()
    }

    /// World-space bounding box of every primitive, or `None` when empty.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        self.iter().map(Primitive::bounds).reduce(|(amin, amax), (bmin, bmax)| {
            (amin.min(bmin), amax.max(bmax))
        })
    }
}

impl<'a> IntoIterator for &'a SceneGraph {
    type Item = &'a Primitive;
    type IntoIter = std::slice::Iter<'a, Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_shape_kinds() {
        assert_eq!(Shape::cylinder(1.0, 2.0, 8).kind(), ShapeKind::Cylinder);
        assert_eq!(Shape::cuboid(1.0, 2.0, 3.0).kind(), ShapeKind::Box);
        assert_eq!(Shape::sphere(1.0, 8).kind(), ShapeKind::Sphere);
    }

    #[test]
    fn test_unrotated_bounds() {
        let p = Primitive::new(Shape::cuboid(2.0, 4.0, 6.0), MaterialTag::Panel, Part::Post { corner: 0 })
            .at(DVec3::new(1.0, 2.0, 3.0));
        let (min, max) = p.bounds();
        assert_relative_eq!(min.x, 0.0);
        assert_relative_eq!(max.y, 4.0);
        assert_relative_eq!(max.z, 6.0);
    }

    #[test]
    fn test_rotated_cylinder_lies_along_z() {
        let p = Primitive::new(Shape::cylinder(0.1, 10.0, 8), MaterialTag::Wire, Part::Shelf { level: 0 })
            .rotated(DVec3::new(FRAC_PI_2, 0.0, 0.0));
        let (min, max) = p.bounds();
        assert_relative_eq!(max.z - min.z, 10.0, epsilon = 1e-9);
        assert_relative_eq!(max.y - min.y, 0.2, epsilon = 1e-9);
    }

    #[test]
    fn test_rotated_cylinder_lies_along_x() {
        let p = Primitive::new(Shape::cylinder(0.1, 10.0, 8), MaterialTag::Wire, Part::Brace { tier: 1 })
            .rotated(DVec3::new(0.0, 0.0, FRAC_PI_2));
        let (min, max) = p.bounds();
        assert_relative_eq!(max.x - min.x, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_scene_has_no_bounds() {
        assert!(SceneGraph::empty().bounding_box().is_none());
    }

    #[test]
    fn test_scene_counts() {
        let mut scene = SceneGraph::empty();
        scene.extend([
            Primitive::new(Shape::cuboid(1.0, 1.0, 1.0), MaterialTag::Panel, Part::Shelf { level: 0 }),
            Primitive::new(Shape::sphere(1.0, 8), MaterialTag::Caster, Part::Caster { corner: 0 }),
            Primitive::new(Shape::cylinder(1.0, 1.0, 8), MaterialTag::Wire, Part::Shelf { level: 2 }),
        ]);
        assert_eq!(scene.len(), 3);
        assert_eq!(scene.count_by_kind(ShapeKind::Sphere), 1);
        assert_eq!(scene.count_by_material(MaterialTag::Wire), 1);
        assert_eq!(scene.shelf_levels().into_iter().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(scene.parts(|p| matches!(p, Part::Caster { .. })).count(), 1);
    }

    #[test]
    fn test_scene_serializes_tagged_shapes() {
        let mut scene = SceneGraph::empty();
        scene.extend([Primitive::new(
            Shape::cylinder(0.4, 72.0, 24),
            MaterialTag::Post,
            Part::Post { corner: 1 },
        )]);
        let json = serde_json::to_value(&scene).unwrap();
        let first = &json["primitives"][0];
        assert_eq!(first["shape"]["kind"], "cylinder");
        assert_eq!(first["shape"]["radiusTop"], 0.4);
        assert_eq!(first["material"], "post");
        assert_eq!(first["part"]["assembly"], "post");
        assert_eq!(first["part"]["corner"], 1);
    }
}
