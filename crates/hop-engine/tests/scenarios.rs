//! End-to-end scenarios driven through the public API.

use glam::Vec2;

use hop_engine::{
    BipedalBody, BipedalCollisionTotem, BodyConfig, BodyRegion, Buttons, ColliderSetBuilder,
    ControlConfig, CoreError, Entity, GameConfig, InputEvent, InputState, Level,
    PassiveController, PlayerController, RectangleF,
};

const DT: f32 = 1.0 / 60.0;

fn floor_level(top: f32) -> Level {
    let mut level = Level::new(GameConfig::default());
    level.add_block(RectangleF::new(-500.0, top, 1000.0, 50.0)).unwrap();
    level.end_build().unwrap();
    level
}

#[test]
fn wall_stops_body_flush_against_its_face() {
    let colliders = ColliderSetBuilder::new()
        .with_collider(RectangleF::new(110.0, 0.0, 90.0, 200.0))
        .finish();

    let mut body = BipedalBody::new(Vec2::new(100.0, 100.0), 10.0, 5.0, 20.0, 10.0);
    body.air_friction = 1.0;
    body.y_acc_ramp = 0.0;
    body.set_velocity(Vec2::new(body.max_x_speed, 0.0));

    let report = body.update(1.0, &colliders, &mut PassiveController, &InputState::default());

    assert!(report.hit_wall());
    assert_eq!(body.bounds().right(), 110.0);
    assert_eq!(body.x_speed, 0.0);
}

#[test]
fn falling_body_lands_on_floor_and_never_sinks() {
    let mut level = floor_level(100.0);
    let id = level.next_id();
    level.spawn(Entity::new(id, BipedalBody::from_config(Vec2::new(0.0, 0.0), &BodyConfig::default())));

    let mut landed_at = None;
    for frame in 0..600 {
        level.update(DT, []).unwrap();
        let body = &level.get(id).unwrap().body;
        assert!(body.position().y <= 100.0 + 1e-3, "sank to {} on frame {}", body.position().y, frame);
        if body.is_on_ground() && landed_at.is_none() {
            landed_at = Some(frame);
        }
    }

    assert!(landed_at.is_some(), "body never landed");
    let body = &level.get(id).unwrap().body;
    assert!(body.is_on_ground());
    assert!((body.bounds().bottom() - 100.0).abs() < 1e-3);
}

#[test]
fn resting_contact_is_a_fixed_point() {
    let colliders = ColliderSetBuilder::new()
        .with_collider(RectangleF::new(0.0, 100.0, 200.0, 50.0))
        .finish();
    let config = BodyConfig {
        y_acc_ramp: 0.25,
        ..BodyConfig::default()
    };
    let mut body = BipedalBody::from_config(Vec2::new(100.0, 100.0), &config);
    let input = InputState::default();

    body.update(1.0, &colliders, &mut PassiveController, &input);
    assert!(body.is_on_ground());
    let rest = body.position();
    assert_eq!(rest, Vec2::new(100.0, 100.0));

    for _ in 0..100 {
        let report = body.update(1.0, &colliders, &mut PassiveController, &input);
        assert_eq!(report.displacement, Vec2::ZERO);
        assert!(body.is_on_ground());
    }
    assert_eq!(body.position(), rest);
}

#[test]
fn grounded_friction_decays_speed_each_tick() {
    let colliders = ColliderSetBuilder::new()
        .with_collider(RectangleF::new(-1000.0, 100.0, 2000.0, 50.0))
        .finish();
    let config = BodyConfig {
        y_acc_ramp: 0.25,
        grounded_friction: 0.5,
        ..BodyConfig::default()
    };
    let mut body = BipedalBody::from_config(Vec2::new(0.0, 100.0), &config);
    let input = InputState::default();
    body.update(1.0, &colliders, &mut PassiveController, &input);
    assert!(body.is_on_ground());

    body.set_velocity(Vec2::new(8.0, 0.0));
    for expected in [4.0, 2.0, 1.0, 0.5] {
        body.update(1.0, &colliders, &mut PassiveController, &input);
        assert_eq!(body.x_speed, expected);
        assert!(body.is_on_ground());
    }
}

#[test]
fn totem_covering_top_band_reports_top_only() {
    let position = Vec2::new(50.0, 100.0);
    let colliders = ColliderSetBuilder::new()
        .with_collider(RectangleF::new(position.x - 10.0, position.y - 48.0, 10.0, 16.0))
        .finish();
    let totem = BipedalCollisionTotem::new(0.0, 10.0, 48.0);

    assert_eq!(totem.check(&colliders, position), BodyRegion::TOP);
    assert_ne!(totem.check(&colliders, position), BodyRegion::all());
}

#[test]
fn player_jumps_only_from_the_ground() {
    let mut level = floor_level(400.0);
    let id = level.next_id();
    level.spawn(
        Entity::new(id, BipedalBody::from_config(Vec2::new(0.0, 400.0), &BodyConfig::default()))
            .with_tag("player")
            .with_controller(PlayerController::new(ControlConfig::default())),
    );

    for _ in 0..3 {
        level.update(DT, []).unwrap();
    }
    assert!(level.find_by_tag("player").unwrap().body.is_on_ground());

    level.update(DT, [InputEvent::ButtonDown(Buttons::JUMP)]).unwrap();
    for _ in 0..5 {
        level.update(DT, []).unwrap();
    }

    let body = &level.find_by_tag("player").unwrap().body;
    assert!(!body.is_on_ground());
    assert!(body.position().y < 399.0, "y = {}", body.position().y);
}

#[test]
fn held_direction_walks_and_faces_left() {
    let mut level = floor_level(400.0);
    let id = level.next_id();
    level.spawn(
        Entity::new(id, BipedalBody::from_config(Vec2::new(0.0, 400.0), &BodyConfig::default()))
            .with_controller(PlayerController::default()),
    );

    level.update(DT, [InputEvent::ButtonDown(Buttons::LEFT)]).unwrap();
    for _ in 0..10 {
        level.update(DT, []).unwrap();
    }

    let body = &level.get(id).unwrap().body;
    assert!(body.position().x < -10.0, "x = {}", body.position().x);
    assert_eq!(body.facing(), hop_engine::Facing::Left);
    assert!(body.is_on_ground());
}

#[test]
fn level_rejects_misuse() {
    let mut level = Level::default();
    assert!(matches!(level.update(DT, []), Err(CoreError::LevelNotBuilt)));
    level.end_build().unwrap();
    assert!(matches!(
        level.add_block(RectangleF::new(0.0, 0.0, 1.0, 1.0)),
        Err(CoreError::LevelFrozen)
    ));
}
