use bevy::prelude::*;
use bevy::window::WindowResolution;
use plife2d::view::ViewPlugin;
use plife2d::{SimParams, Simulation, SimulationPlugin};

fn main() -> AppExit {
    let params = SimParams::default();

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Particle Life".into(),
            resolution: WindowResolution::new(params.area_width, params.area_height),
            resizable: false,
            ..default()
        }),
        ..default()
    }));

    let seed = rand::random::<u64>();
    info!("seed: {seed}");
    match Simulation::initialize(params.clone(), seed) {
        Ok(sim) => {
            app.insert_resource(sim);
        }
        Err(e) => {
            error!("refusing to start: {e}");
            return AppExit::error();
        }
    }

    app.add_plugins((SimulationPlugin::new(params.tick_period), ViewPlugin))
        .run()
}
