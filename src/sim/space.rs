//! Physics space
//!
//! Thin wrapper over the rapier2d sets and pipeline. Positions are in pixels
//! with Y pointing up; angles are radians, counter-clockwise.

use std::sync::Arc;

use glam::Vec2;
use parking_lot::Mutex;
use rapier2d::prelude::*;

/// Non-owning reference to a body registered with a [`Space`]
pub type BodyHandle = RigidBodyHandle;

/// Space shared between the frame loop and the spawner thread
pub type SharedSpace = Arc<Mutex<Space>>;

/// Collider geometry, centred on the body
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderShape {
    Box { width: f32, height: f32 },
    Circle { radius: f32 },
}

impl ColliderShape {
    fn builder(&self) -> ColliderBuilder {
        match *self {
            ColliderShape::Box { width, height } => {
                ColliderBuilder::cuboid(width / 2.0, height / 2.0)
            }
            ColliderShape::Circle { radius } => ColliderBuilder::ball(radius),
        }
    }
}

/// Everything needed to add one dynamic body
#[derive(Debug, Clone, Copy)]
pub struct BodyDesc {
    pub position: Vec2,
    pub shape: ColliderShape,
    /// Total mass; rotational inertia follows from the shape
    pub mass: f32,
    /// Restitution (0 = dead stop, 1 = perfectly bouncy). Multiplied with the
    /// other collider's, so contacts with the zero-restitution boundary never
    /// bounce.
    pub elasticity: f32,
}

#[inline]
fn to_vector(v: Vec2) -> Vector<Real> {
    vector![v.x, v.y]
}

#[inline]
fn from_vector(v: &Vector<Real>) -> Vec2 {
    Vec2::new(v.x, v.y)
}

/// The physics world: owns every body and collider
pub struct Space {
    gravity: Vector<Real>,
    params: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
    /// Number of completed steps
    steps: u64,
}

impl Space {
    pub fn new(gravity: Vec2) -> Self {
        let mut params = IntegrationParameters::default();
        // Everything is measured in pixels
        params.length_unit = 100.0;

        Self {
            gravity: to_vector(gravity),
            params,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
            steps: 0,
        }
    }

    /// Wrap the space for sharing across threads
    pub fn shared(self) -> SharedSpace {
        Arc::new(Mutex::new(self))
    }

    /// Add one fixed body carrying a zero-thickness segment per `(a, b)` pair
    pub fn add_static_segments(&mut self, segments: &[(Vec2, Vec2)]) -> BodyHandle {
        let handle = self.bodies.insert(RigidBodyBuilder::fixed().build());
        for &(a, b) in segments {
            let collider = ColliderBuilder::segment(Point::new(a.x, a.y), Point::new(b.x, b.y))
                .build();
            self.colliders
                .insert_with_parent(collider, handle, &mut self.bodies);
        }
        handle
    }

    /// Add a dynamic body with a single collider
    pub fn add_body(&mut self, desc: BodyDesc) -> BodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(to_vector(desc.position))
            .build();
        let handle = self.bodies.insert(body);

        let collider = desc
            .shape
            .builder()
            .mass(desc.mass)
            .restitution(desc.elasticity)
            .restitution_combine_rule(CoefficientCombineRule::Multiply)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Advance the simulation by exactly `dt` seconds
    pub fn step(&mut self, dt: f32) {
        self.params.dt = dt;
        self.pipeline.step(
            &self.gravity,
            &self.params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            None,
            &(),
            &(),
        );
        self.steps += 1;
    }

    pub fn step_count(&self) -> u64 {
        self.steps
    }

    // Accessors below panic if `handle` did not come from this space. Bodies
    // are never removed, so a handle stays valid for the life of the space.

    pub fn position(&self, handle: BodyHandle) -> Vec2 {
        from_vector(self.bodies[handle].translation())
    }

    pub fn set_position(&mut self, handle: BodyHandle, position: Vec2) {
        self.bodies[handle].set_translation(to_vector(position), true);
    }

    /// Body angle in radians
    pub fn angle(&self, handle: BodyHandle) -> f32 {
        self.bodies[handle].rotation().angle()
    }

    pub fn set_angle(&mut self, handle: BodyHandle, angle: f32) {
        self.bodies[handle].set_rotation(Rotation::new(angle), true);
    }

    pub fn velocity(&self, handle: BodyHandle) -> Vec2 {
        from_vector(self.bodies[handle].linvel())
    }

    pub fn set_velocity(&mut self, handle: BodyHandle, velocity: Vec2) {
        self.bodies[handle].set_linvel(to_vector(velocity), true);
    }

    pub fn add_velocity(&mut self, handle: BodyHandle, delta: Vec2) {
        let v = self.velocity(handle);
        self.set_velocity(handle, v + delta);
    }
}

/// Inspection helpers for tests
#[cfg(test)]
impl Space {
    pub(crate) fn gravity(&self) -> Vec2 {
        from_vector(&self.gravity)
    }

    /// Number of bodies, static ones included
    pub(crate) fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Mass of a body as computed from its colliders
    pub(crate) fn mass(&self, handle: BodyHandle) -> f32 {
        self.bodies[handle].mass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_desc(position: Vec2) -> BodyDesc {
        BodyDesc {
            position,
            shape: ColliderShape::Circle { radius: 10.0 },
            mass: 1.0,
            elasticity: 0.5,
        }
    }

    #[test]
    fn test_body_falls_under_gravity() {
        let mut space = Space::new(Vec2::new(0.0, -900.0));
        let body = space.add_body(ball_desc(Vec2::new(100.0, 0.0)));

        for _ in 0..30 {
            space.step(1.0 / 60.0);
        }

        let pos = space.position(body);
        assert!(pos.y < -50.0, "body should have fallen, y = {}", pos.y);
        assert!((pos.x - 100.0).abs() < 1e-3);
        assert!(space.velocity(body).y < 0.0);
        assert_eq!(space.step_count(), 30);
    }

    #[test]
    fn test_mass_is_fixed_regardless_of_size() {
        let mut space = Space::new(Vec2::ZERO);
        let small = space.add_body(ball_desc(Vec2::ZERO));
        let large = space.add_body(BodyDesc {
            shape: ColliderShape::Box {
                width: 200.0,
                height: 80.0,
            },
            ..ball_desc(Vec2::new(500.0, 0.0))
        });

        assert!((space.mass(small) - 1.0).abs() < 1e-4);
        assert!((space.mass(large) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_setters_round_trip_without_stepping() {
        let mut space = Space::new(Vec2::ZERO);
        let body = space.add_body(ball_desc(Vec2::ZERO));

        space.set_position(body, Vec2::new(3.0, -4.0));
        space.set_velocity(body, Vec2::new(1.5, 2.5));
        space.add_velocity(body, Vec2::new(-0.5, 0.0));
        space.set_angle(body, 0.75);

        assert_eq!(space.position(body), Vec2::new(3.0, -4.0));
        assert_eq!(space.velocity(body), Vec2::new(1.0, 2.5));
        assert!((space.angle(body) - 0.75).abs() < 1e-5);
    }

    #[test]
    fn test_static_segments_share_one_body() {
        let mut space = Space::new(Vec2::ZERO);
        space.add_static_segments(&[
            (Vec2::ZERO, Vec2::new(10.0, 0.0)),
            (Vec2::ZERO, Vec2::new(0.0, 10.0)),
        ]);
        assert_eq!(space.body_count(), 1);
    }
}
