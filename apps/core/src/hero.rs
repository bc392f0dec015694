//! Particle field behind the hero section.
//!
//! The field lives in model space inside a 100-unit cube centred on the
//! origin. Each frame it eases its rotation toward the pointer, drifts, waves
//! points vertically with wraparound, and every fifth frame rebuilds the set
//! of point pairs close enough to be joined by a line.

use glam::{Mat4, Vec2, Vec3, Vec4};
use rand::Rng;

pub const DEFAULT_PARTICLE_COUNT: usize = 800;
pub const DEFAULT_CONNECTION_DISTANCE: f32 = 15.0;
pub const MOBILE_BREAKPOINT: f64 = 768.0;

const FIELD_HALF_EXTENT: f32 = 50.0;
const TIME_STEP: f32 = 0.005;
const POINTER_ROTATION_SCALE: f32 = 0.2;
const ROTATION_EASING: f32 = 0.05;
const DRIFT_PER_FRAME: f32 = 0.0005;
const WAVE_AMPLITUDE: f32 = 0.5;
const WAVE_STEP: f32 = 0.02;
const WAVE_PHASE_PER_COMPONENT: f32 = 0.01;
const CONNECTION_INTERVAL: u64 = 5;
const CAMERA_DISTANCE: f32 = 50.0;
const CAMERA_ORBIT_RADIUS: f32 = 2.0;
const FIELD_OF_VIEW_DEGREES: f32 = 75.0;
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 1000.0;
const LOW_FPS: u32 = 30;
const REDUCIBLE_PARTICLE_COUNT: usize = 400;

/// `#3b6978`, `#5a8d9d`, `#204e5a`, `#a8c0d6`
pub const PALETTE: [[f32; 3]; 4] = [
    [0.23, 0.41, 0.47],
    [0.35, 0.55, 0.62],
    [0.13, 0.31, 0.35],
    [0.66, 0.77, 0.84],
];

pub const LINE_COLOR: &str = "#3b6978";
pub const LINE_OPACITY: f64 = 0.15;
pub const POINT_OPACITY: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub color: [f32; 3],
    pub size: f32,
}

impl Particle {
    pub fn css_color(&self, opacity: f64) -> String {
        let [r, g, b] = self.color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        format!("rgba({r}, {g}, {b}, {opacity})")
    }
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    rotation: Vec2,
    target_rotation: Vec2,
    time: f32,
    frame: u64,
    connection_distance: f32,
    connections: Vec<(usize, usize)>,
}

impl ParticleField {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize, connection_distance: f32) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                position: Vec3::new(
                    rng.gen_range(-FIELD_HALF_EXTENT..FIELD_HALF_EXTENT),
                    rng.gen_range(-FIELD_HALF_EXTENT..FIELD_HALF_EXTENT),
                    rng.gen_range(-FIELD_HALF_EXTENT..FIELD_HALF_EXTENT),
                ),
                color: PALETTE[rng.gen_range(0..PALETTE.len())],
                size: rng.gen_range(0.5..2.5),
            })
            .collect();

        Self::from_particles(particles, connection_distance)
    }

    pub const fn from_particles(particles: Vec<Particle>, connection_distance: f32) -> Self {
        Self {
            particles,
            rotation: Vec2::ZERO,
            target_rotation: Vec2::ZERO,
            time: 0.0,
            frame: 0,
            connection_distance,
            connections: Vec::new(),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn connections(&self) -> &[(usize, usize)] {
        &self.connections
    }

    pub const fn rotation(&self) -> Vec2 {
        self.rotation
    }

    /// Aims the field's rotation at a pointer given in normalized device
    /// coordinates (x right, y up, both in -1..=1).
    pub fn point_at(&mut self, pointer: Vec2) {
        self.target_rotation = Vec2::new(
            pointer.y * POINTER_ROTATION_SCALE,
            pointer.x * POINTER_ROTATION_SCALE,
        );
    }

    /// Advances one animation frame. Returns true when connections were rebuilt.
    pub fn step(&mut self) -> bool {
        self.time += TIME_STEP;
        self.frame += 1;

        self.rotation += (self.target_rotation - self.rotation) * ROTATION_EASING;
        self.rotation.y += DRIFT_PER_FRAME;

        let time = self.time;
        for (index, particle) in self.particles.iter_mut().enumerate() {
            // phase follows the flat xyz buffer offset of the point
            let phase = time + (index * 3) as f32 * WAVE_PHASE_PER_COMPONENT;
            particle.position.y += phase.sin() * WAVE_AMPLITUDE * WAVE_STEP;

            if particle.position.y > FIELD_HALF_EXTENT {
                particle.position.y = -FIELD_HALF_EXTENT;
            }
            if particle.position.y < -FIELD_HALF_EXTENT {
                particle.position.y = FIELD_HALF_EXTENT;
            }
        }

        if self.frame % CONNECTION_INTERVAL == 0 {
            self.recompute_connections();
            return true;
        }
        false
    }

    fn recompute_connections(&mut self) {
        let max_distance_sq = self.connection_distance * self.connection_distance;
        self.connections.clear();

        for (i, a) in self.particles.iter().enumerate() {
            for (offset, b) in self.particles[i + 1..].iter().enumerate() {
                if a.position.distance_squared(b.position) < max_distance_sq {
                    self.connections.push((i, i + 1 + offset));
                }
            }
        }
    }

    pub fn camera_position(&self) -> Vec3 {
        Vec3::new(
            (self.time * 0.2).sin() * CAMERA_ORBIT_RADIUS,
            (self.time * 0.15).cos() * CAMERA_ORBIT_RADIUS,
            CAMERA_DISTANCE,
        )
    }

    /// Rotation of the whole field, X applied after Y. Points and connection
    /// lines are both projected through it, so lines stay attached to their
    /// endpoints while the cloud turns.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.rotation.x) * Mat4::from_rotation_y(self.rotation.y)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        let projection = Mat4::perspective_rh_gl(
            FIELD_OF_VIEW_DEGREES.to_radians(),
            aspect.max(f32::EPSILON),
            NEAR_PLANE,
            FAR_PLANE,
        );
        let view = Mat4::look_at_rh(self.camera_position(), Vec3::ZERO, Vec3::Y);
        projection * view
    }

    /// Screen-space positions for the current frame, indexed like `particles`.
    pub fn project(&self, width: f32, height: f32) -> Vec<Option<ScreenPoint>> {
        let transform = self.view_projection(width / height.max(1.0)) * self.model_matrix();
        self.particles
            .iter()
            .map(|particle| project_point(transform, particle.position, particle.size, width, height))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    /// Diameter in pixels after perspective attenuation.
    pub size: f32,
}

pub fn project_point(
    transform: Mat4,
    position: Vec3,
    size: f32,
    width: f32,
    height: f32,
) -> Option<ScreenPoint> {
    let clip = transform * Vec4::new(position.x, position.y, position.z, 1.0);
    if clip.w <= NEAR_PLANE {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    if ndc.z > 1.0 || ndc.z < -1.0 {
        return None;
    }
    Some(ScreenPoint {
        x: (ndc.x + 1.0) * 0.5 * width,
        y: (1.0 - ndc.y) * 0.5 * height,
        size: size * (height * 0.5) / clip.w,
    })
}

/// Converts a pointer position in CSS pixels to normalized device coordinates.
pub fn pointer_to_ndc(client_x: f64, client_y: f64, width: f64, height: f64) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        ((client_x / width) * 2.0 - 1.0) as f32,
        (-(client_y / height) * 2.0 + 1.0) as f32,
    )
}

pub fn is_mobile(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width < breakpoint
}

/// Counts frames and reports a rate once a full second has elapsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FpsSampler {
    window_start_ms: f64,
    frames: u32,
}

impl FpsSampler {
    pub const fn new(now_ms: f64) -> Self {
        Self {
            window_start_ms: now_ms,
            frames: 0,
        }
    }

    pub fn tick(&mut self, now_ms: f64) -> Option<u32> {
        self.frames += 1;
        let elapsed = now_ms - self.window_start_ms;
        if elapsed < 1000.0 {
            return None;
        }
        let fps = (f64::from(self.frames) * 1000.0 / elapsed).round() as u32;
        self.frames = 0;
        self.window_start_ms = now_ms;
        Some(fps)
    }
}

/// Logs a notice when the frame rate is low for a large field. Nothing is
/// reduced; the message is informational only.
pub fn report_frame_rate(fps: u32, particle_count: usize) -> bool {
    if fps < LOW_FPS && particle_count > REDUCIBLE_PARTICLE_COUNT {
        log::info!("hero animation at {fps} fps with {particle_count} particles; consider reducing particles");
        return true;
    }
    false
}
