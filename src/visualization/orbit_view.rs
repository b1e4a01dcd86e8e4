//! Full front-end: a start-menu screen, then the running simulation with
//! orbit trails and a distance readout per planet.
//!
//! The menu/running split is a two-state Bevy app. The physics core is the
//! same one `plain_view` drives; this module only adds presentation.

use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::simulation::integrator::euler_step;
use crate::simulation::params::AU;
use crate::simulation::scenario::Scenario;

#[derive(Component)]
struct BodyIndex(pub usize);

/// Distance readout following the body at this index.
#[derive(Component)]
struct DistanceLabel(pub usize);

#[derive(Component)]
struct MenuRoot;

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
enum AppState {
    #[default]
    Menu,
    Running,
}

// 250 pixels per astronomical unit.
const SCALE: f32 = 250.0 / AU as f32;

const WINDOW_SIZE: f32 = 800.0;

const NORMAL_BUTTON: Color = Color::srgb(0.39, 0.38, 0.40);
const HOVERED_BUTTON: Color = Color::srgb(0.55, 0.54, 0.56);

/// Menu + trails + labels front-end.
pub fn run_orbits(scenario: Scenario) {
    println!(
        "run_orbits: starting Bevy viewer with {} bodies",
        scenario.system.bodies.len()
    );

    App::new()
        .insert_resource(scenario)
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orbit".into(),
                resolution: (WINDOW_SIZE, WINDOW_SIZE).into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .init_state::<AppState>()
        .add_systems(Startup, setup_camera)
        .add_systems(OnEnter(AppState::Menu), setup_menu)
        .add_systems(OnExit(AppState::Menu), cleanup_menu)
        .add_systems(OnEnter(AppState::Running), setup_bodies_system)
        .add_systems(Update, start_button_system.run_if(in_state(AppState::Menu)))
        .add_systems(
            Update,
            (
                physics_step_system,
                sync_transforms_system,
                draw_trails_system,
                update_labels_system,
            )
                .run_if(in_state(AppState::Running)),
        )
        .run();
}

fn setup_camera(mut commands: Commands) {
    // 2D camera; world origin sits at the window center
    commands.spawn(Camera2dBundle::default());
}

/// Start screen: a single button on the black background.
fn setup_menu(mut commands: Commands) {
    commands
        .spawn((
            NodeBundle {
                style: Style {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..Default::default()
                },
                ..Default::default()
            },
            MenuRoot,
        ))
        .with_children(|parent| {
            parent
                .spawn(ButtonBundle {
                    style: Style {
                        width: Val::Px(220.0),
                        height: Val::Px(80.0),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        ..Default::default()
                    },
                    background_color: NORMAL_BUTTON.into(),
                    ..Default::default()
                })
                .with_children(|parent| {
                    parent.spawn(TextBundle::from_section(
                        "Start",
                        TextStyle {
                            font_size: 40.0,
                            color: Color::WHITE,
                            ..Default::default()
                        },
                    ));
                });
        });
}

fn start_button_system(
    mut interactions: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for (interaction, mut color) in &mut interactions {
        match *interaction {
            Interaction::Pressed => next_state.set(AppState::Running),
            Interaction::Hovered => *color = HOVERED_BUTTON.into(),
            Interaction::None => *color = NORMAL_BUTTON.into(),
        }
    }
}

fn cleanup_menu(mut commands: Commands, menu: Query<Entity, With<MenuRoot>>) {
    for entity in &menu {
        commands.entity(entity).despawn_recursive();
    }
}

fn setup_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    for (i, body) in scenario.system.bodies.iter().enumerate() {
        let [r, g, b] = body.color;
        let x = body.x.x as f32 * SCALE;
        let y = body.x.y as f32 * SCALE;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
                material: materials.add(ColorMaterial::from(Color::srgb_u8(r, g, b))),
                transform: Transform::from_xyz(x, y, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));

        // Distance readout for everything except the anchor itself
        if !body.anchor {
            commands.spawn((
                Text2dBundle {
                    text: Text::from_section(
                        String::new(),
                        TextStyle {
                            font_size: 16.0,
                            color: Color::WHITE,
                            ..Default::default()
                        },
                    ),
                    transform: Transform::from_xyz(x, y, 1.0),
                    ..Default::default()
                },
                DistanceLabel(i),
            ));
        }
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        system,
        parameters,
        gravity,
        ..
    } = &mut *scenario;

    // One simulated day per rendered frame
    euler_step(system, gravity, parameters);
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            transform.translation.x = (b.x.x as f32) * SCALE;
            transform.translation.y = (b.x.y as f32) * SCALE;
        }
    }
}

/// Orbit trails as polylines, one per body once it has two points.
fn draw_trails_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    for body in &scenario.system.bodies {
        if body.trail.len() < 2 {
            continue;
        }
        let [r, g, b] = body.color;
        gizmos.linestrip_2d(
            body.trail
                .iter()
                .map(|p| Vec2::new(p.x as f32 * SCALE, p.y as f32 * SCALE)),
            Color::srgb_u8(r, g, b),
        );
    }
}

/// Keep each distance readout centered on its body, in kilometers.
fn update_labels_system(
    scenario: Res<Scenario>,
    mut labels: Query<(&DistanceLabel, &mut Text, &mut Transform)>,
) {
    for (DistanceLabel(i), mut text, mut transform) in &mut labels {
        if let Some(b) = scenario.system.bodies.get(*i) {
            text.sections[0].value = format!("{:.1}km", b.distance_to_anchor / 1000.0);
            transform.translation.x = (b.x.x as f32) * SCALE;
            transform.translation.y = (b.x.y as f32) * SCALE;
        }
    }
}
