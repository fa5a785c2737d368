use avian2d::prelude::*;
use bevy::prelude::*;

mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod level;
mod player;
mod visuals;

fn main() {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Switchback".into(),
                resolution: (1280, 720).into(),
                ..default()
            }),
            ..default()
        }),
    )
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        player::PlayerPlugin,
        level::LevelPlugin,
        visuals::VisualsPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
