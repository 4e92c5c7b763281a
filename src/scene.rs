//! A minimal scene graph.
//!
//! Nodes are built once at start-up and never change. Every frame the graph is flattened by
//! [`Scene::collect`] into a [`Frame`]: the world matrix of every mesh instance and the world
//! position of every light at the given time.
//!
//! Transforms can be shared between several parents through [`Rc`]. A shared transform is
//! evaluated once per parent with the same time, so all of its instances move in lockstep.

use std::rc::Rc;

use glam::{Mat4, Vec3, Vec4};

use crate::animation::{Animator, Pose};
use crate::geometry::Bounds;

/// Index of a mesh uploaded to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(pub usize);

pub enum Node {
    Group(Vec<Node>),
    Transform(Rc<Transform>),
    Mesh(MeshId),
    Light(LightSource),
}

impl From<Rc<Transform>> for Node {
    fn from(transform: Rc<Transform>) -> Self {
        Node::Transform(transform)
    }
}

impl From<Transform> for Node {
    fn from(transform: Transform) -> Self {
        Node::Transform(Rc::new(transform))
    }
}

impl From<MeshId> for Node {
    fn from(mesh: MeshId) -> Self {
        Node::Mesh(mesh)
    }
}

impl From<LightSource> for Node {
    fn from(light: LightSource) -> Self {
        Node::Light(light)
    }
}

/// Places its children with a pose. When an animator is attached, its pose replaces the static
/// one.
pub struct Transform {
    pose: Pose,
    animator: Option<Box<dyn Animator>>,
    children: Vec<Node>,
}

impl Transform {
    pub fn new(pose: Pose) -> Self {
        Self {
            pose,
            animator: None,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn animated(mut self, animator: impl Animator + 'static) -> Self {
        self.animator = Some(Box::new(animator));
        self
    }

    /// Wraps the transform so it can be attached under more than one parent.
    pub fn shared(self) -> Rc<Self> {
        Rc::new(self)
    }

    pub fn local_transform(&self, time: f64) -> Mat4 {
        match &self.animator {
            Some(animator) => animator.transform_at(time),
            None => self.pose.matrix(),
        }
    }
}

/// A light placed by its parent transforms. Its children are drawn like any other subtree.
pub struct LightSource {
    /// Light position in local space; `w = 0` makes the light directional.
    pub position: Vec4,
    pub diffuse: Vec3,
    children: Vec<Node>,
}

impl LightSource {
    /// A positional light at `position`.
    pub fn point(position: Vec3, diffuse: Vec3) -> Self {
        Self {
            position: position.extend(1.0),
            diffuse,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }
}

/// One mesh instance to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub mesh: MeshId,
    pub model: Mat4,
}

/// One light in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightItem {
    pub position: Vec4,
    pub diffuse: Vec3,
}

/// The flattened scene at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub draws: Vec<DrawItem>,
    pub lights: Vec<LightItem>,
}

impl Frame {
    /// World-space bounds of every drawn instance. `mesh_bounds` is indexed by [`MeshId`].
    pub fn bounds(&self, mesh_bounds: &[Bounds]) -> Option<Bounds> {
        self.draws
            .iter()
            .filter_map(|draw| {
                mesh_bounds
                    .get(draw.mesh.0)
                    .map(|b| b.transformed(&draw.model))
            })
            .reduce(|a, b| a.union(&b))
    }
}

pub struct Scene {
    root: Node,
}

impl Scene {
    pub fn new(root: impl Into<Node>) -> Self {
        Self { root: root.into() }
    }

    /// Flattens the graph at `time`.
    pub fn collect(&self, time: f64) -> Frame {
        let mut frame = Frame::default();
        visit(&self.root, Mat4::IDENTITY, time, &mut frame);
        frame
    }
}

fn visit(node: &Node, parent: Mat4, time: f64, frame: &mut Frame) {
    match node {
        Node::Group(children) => {
            for child in children {
                visit(child, parent, time, frame);
            }
        }
        Node::Transform(transform) => {
            let world = parent * transform.local_transform(time);
            for child in &transform.children {
                visit(child, world, time, frame);
            }
        }
        Node::Mesh(mesh) => frame.draws.push(DrawItem {
            mesh: *mesh,
            model: parent,
        }),
        Node::Light(light) => {
            frame.lights.push(LightItem {
                position: parent * light.position,
                diffuse: light.diffuse,
            });
            for child in &light.children {
                visit(child, parent, time, frame);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Quat;

    use super::*;
    use crate::animation::Spin;

    #[test]
    fn empty_group_collects_nothing() {
        let frame = Scene::new(Node::Group(Vec::new())).collect(1.0);
        assert_eq!(frame, Frame::default());
    }

    #[test]
    fn transforms_nest() {
        let inner = Transform::new(Pose::at(Vec3::new(0.0, 2.0, 0.0))).with_child(MeshId(3));
        let outer = Transform::new(Pose::at(Vec3::new(1.0, 0.0, 0.0))).with_child(inner);
        let scene = Scene::new(outer);
        let frame = scene.collect(0.0);
        assert_eq!(frame.draws.len(), 1);
        assert_eq!(frame.draws[0].mesh, MeshId(3));
        assert!(
            frame.draws[0]
                .model
                .transform_point3(Vec3::ZERO)
                .abs_diff_eq(Vec3::new(1.0, 2.0, 0.0), 1e-6)
        );
    }

    #[test]
    fn animator_replaces_static_pose() {
        let spin = Spin::new(Vec3::Y, 90.0);
        let transform = Transform::new(Pose::at(Vec3::splat(100.0))).animated(spin);
        let m = transform.local_transform(1.0);
        assert!(m.transform_point3(Vec3::ZERO).abs_diff_eq(Vec3::ZERO, 1e-6));
        assert!(m.transform_vector3(Vec3::X).abs_diff_eq(Vec3::NEG_Z, 1e-5));
    }

    #[test]
    fn shared_transform_moves_in_lockstep() {
        let rotation = Transform::new(Pose::IDENTITY)
            .animated(Spin::new(Vec3::new(0.0, 1.0, 1.0), 40.0))
            .with_child(MeshId(0))
            .shared();
        let scene = Scene::new(Node::Group(vec![
            Transform::new(Pose::at(Vec3::new(-2.0, 0.0, 0.0)))
                .with_child(Rc::clone(&rotation))
                .into(),
            Transform::new(Pose::at(Vec3::new(2.0, 0.0, 0.0)))
                .with_child(rotation)
                .into(),
        ]));

        for t in [0.0, 0.8, 4.5, 13.0] {
            let frame = scene.collect(t);
            assert_eq!(frame.draws.len(), 2);
            let (_, ra, ta) = frame.draws[0].model.to_scale_rotation_translation();
            let (_, rb, tb) = frame.draws[1].model.to_scale_rotation_translation();
            assert!(ra.abs_diff_eq(rb, 1e-6));
            assert!(ta.abs_diff_eq(Vec3::new(-2.0, 0.0, 0.0), 1e-6));
            assert!(tb.abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), 1e-6));
        }
    }

    #[test]
    fn lights_are_placed_by_their_parents() {
        let light = LightSource::point(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0)).with_child(MeshId(0));
        let scene = Scene::new(
            Transform::new(Pose::at(Vec3::new(5.0, 12.0, 3.0)).with_scale(Vec3::splat(0.1)))
                .with_child(light),
        );
        let frame = scene.collect(0.0);

        assert_eq!(frame.lights.len(), 1);
        assert!(
            frame.lights[0]
                .position
                .abs_diff_eq(Vec4::new(5.0, 12.0, 3.0, 1.0), 1e-6)
        );
        assert_eq!(frame.lights[0].diffuse, Vec3::new(1.0, 1.0, 0.0));

        // The light's marker mesh is drawn at the light, scaled down.
        assert_eq!(frame.draws.len(), 1);
        let (scale, rotation, translation) = frame.draws[0].model.to_scale_rotation_translation();
        assert!(scale.abs_diff_eq(Vec3::splat(0.1), 1e-6));
        assert!(rotation.abs_diff_eq(Quat::IDENTITY, 1e-6));
        assert!(translation.abs_diff_eq(Vec3::new(5.0, 12.0, 3.0), 1e-6));
    }

    #[test]
    fn frame_bounds_cover_all_instances() {
        let unit = Bounds {
            min: Vec3::splat(-0.5),
            max: Vec3::splat(0.5),
        };
        let scene = Scene::new(Node::Group(vec![
            Transform::new(Pose::at(Vec3::new(-2.0, 0.0, 0.0)))
                .with_child(MeshId(0))
                .into(),
            Transform::new(Pose::at(Vec3::new(2.0, 0.0, 0.0)))
                .with_child(MeshId(0))
                .into(),
            // Unknown meshes do not contribute.
            MeshId(7).into(),
        ]));
        let bounds = scene.collect(0.0).bounds(&[unit]).unwrap();
        assert!(bounds.min.abs_diff_eq(Vec3::new(-2.5, -0.5, -0.5), 1e-6));
        assert!(bounds.max.abs_diff_eq(Vec3::new(2.5, 0.5, 0.5), 1e-6));
        assert_eq!(Frame::default().bounds(&[unit]), None);
    }

    #[test]
    fn collecting_is_deterministic() {
        let scene = Scene::new(
            Transform::new(Pose::IDENTITY)
                .animated(Spin::new(Vec3::X, 12.5))
                .with_child(MeshId(0)),
        );
        assert_eq!(scene.collect(3.3), scene.collect(3.3));
    }
}
