//! Window-side drawing of the simulation
//!
//! Particles are circles in their kind color over a faint bucket grid. The
//! view only ever reads the `Simulation` resource; it runs in `Update`, after
//! the fixed ticks of the frame have settled.

use bevy::prelude::*;

use crate::config::{BACKGROUND_COLOR, GRID_COLOR};
use crate::core::{KIND_COUNT, ParticleKind, Simulation};
use crate::math::Vector;

pub struct ViewPlugin;

impl Plugin for ViewPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND_COLOR))
            .add_systems(Startup, (spawn_camera, spawn_particle_visuals))
            .add_systems(Update, (sync_particle_transforms, draw_bucket_grid));
    }
}

#[derive(Component)]
pub struct ParticleVisual {
    pub index: usize,
}

/// Simulation space has its origin top-left with y pointing down; world space
/// is centered with y up.
pub fn sim_to_world(position: Vector, area: Vec2) -> Vec3 {
    Vec3::new(position.x - area.x * 0.5, area.y * 0.5 - position.y, 0.0)
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn spawn_particle_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    sim: Res<Simulation>,
) {
    let area = sim.params().area();
    let mesh = meshes.add(Circle::new(sim.params().particle_radius));
    let mut palette: Vec<Handle<ColorMaterial>> = Vec::with_capacity(KIND_COUNT);
    for kind in ParticleKind::ALL {
        palette.push(materials.add(kind.color()));
    }

    let mut index = 0;
    sim.for_each_particle(|kind, position| {
        commands.spawn((
            ParticleVisual { index },
            Mesh2d(mesh.clone()),
            MeshMaterial2d(palette[kind.index()].clone()),
            Transform::from_translation(sim_to_world(position, area)),
        ));
        index += 1;
    });

    info!("spawned {} particle visuals", index);
}

fn sync_particle_transforms(
    sim: Res<Simulation>,
    mut query: Query<(&ParticleVisual, &mut Transform)>,
) {
    let area = sim.params().area();
    let particles = sim.particles();
    for (visual, mut transform) in query.iter_mut() {
        if let Some(particle) = particles.get(visual.index) {
            transform.translation = sim_to_world(particle.position, area);
        }
    }
}

fn draw_bucket_grid(mut gizmos: Gizmos, sim: Res<Simulation>) {
    let params = sim.params();
    let area = params.area();
    let step = params.bucket_size as usize;

    for y in (0..=params.area_height).step_by(step) {
        let y = y as f32;
        gizmos.line_2d(
            sim_to_world(Vec2::new(0.0, y), area).truncate(),
            sim_to_world(Vec2::new(area.x, y), area).truncate(),
            GRID_COLOR,
        );
    }
    for x in (0..=params.area_width).step_by(step) {
        let x = x as f32;
        gizmos.line_2d(
            sim_to_world(Vec2::new(x, 0.0), area).truncate(),
            sim_to_world(Vec2::new(x, area.y), area).truncate(),
            GRID_COLOR,
        );
    }
}
