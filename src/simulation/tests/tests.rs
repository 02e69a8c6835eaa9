use super::*;
use crate::core::math::Vector3;
use crate::domain::WorldError;
use crate::systems::blocks::PushDirection;
use crate::systems::hand::HAND_FAR_AWAY;

fn settle(world: &mut WorldCore, dt: f32, max_steps: usize) -> usize {
    for i in 0..max_steps {
        world.step(dt);
        if world.blocks().iter().all(|b| b.is_sleeping) {
            return i + 1;
        }
    }
    max_steps
}

#[test]
fn dropped_block_settles_on_the_floor() {
    let mut world = WorldCore::new();
    world.spawn_block("red", 0.0, 5.0, 0.0).unwrap();

    let steps = settle(&mut world, 0.1, 60);
    assert!(steps < 60, "block never fell asleep");

    let block = &world.blocks()[0];
    assert!(block.is_sleeping);
    assert!((block.position.y - 0.5).abs() < 1e-4);
    assert_eq!(block.velocity, Vector3::zero());
}

#[test]
fn dropped_block_settles_at_display_rate() {
    let mut world = WorldCore::new();
    world.spawn_block("blue", 2.0, 5.0, -1.0).unwrap();
    let steps = settle(&mut world, 1.0 / 60.0, 400);
    assert!(steps < 400);
    assert!(world.blocks().iter().all(|b| b.position.y >= 0.5));
}

#[test]
fn explode_wakes_and_lifts_a_resting_block() {
    let mut world = WorldCore::new();
    world.spawn_block("red", 0.0, 0.5, 0.0).unwrap();
    settle(&mut world, 0.1, 10);
    assert!(world.blocks()[0].is_sleeping);

    let affected = world.push_blocks("explode", 10.0).unwrap();
    assert_eq!(affected, 1);

    let block = &world.blocks()[0];
    assert!(!block.is_sleeping);
    assert!((block.velocity.y - 10.0).abs() < 1e-4);
    assert!(block.velocity.x.abs() <= 5.0);
    assert!(block.velocity.z.abs() <= 5.0);

    world.step(0.1);
    assert!(world.blocks()[0].position.y > 0.5);
}

#[test]
fn same_seed_same_explosion() {
    let run = |seed| {
        let mut world = WorldCore::with_seed(seed);
        for i in 0..4 {
            world.spawn_block("green", i as f32, 0.5, 0.0).unwrap();
        }
        world.push_blocks("explode", 7.0).unwrap();
        world.blocks().iter().map(|b| b.velocity).collect::<Vec<_>>()
    };
    assert_eq!(run(99), run(99));
}

#[test]
fn unknown_direction_explodes() {
    let mut world = WorldCore::new();
    world.spawn_block("red", 0.0, 0.5, 0.0).unwrap();
    world.push_blocks("sideways", 4.0).unwrap();
    // explode lift: 4 * 0.5 + 5
    assert!((world.blocks()[0].velocity.y - 7.0).abs() < 1e-4);
}

#[test]
fn oversized_push_is_refused_and_state_stays_finite() {
    let mut world = WorldCore::new();
    world.spawn_block("red", 0.0, 0.5, 0.0).unwrap();
    let limit = world.tuning().max_push_intensity;

    for direction in ["up", "up", "down", "down", "explode"] {
        assert_eq!(
            world.push_blocks(direction, f32::MAX),
            Err(WorldError::IntensityOutOfRange { value: f32::MAX, limit })
        );
    }
    assert!(matches!(
        world.push(PushMode::Directional(PushDirection::Up), limit * 2.0),
        Err(WorldError::IntensityOutOfRange { .. })
    ));
    assert_eq!(world.blocks()[0].velocity, Vector3::zero());

    world.step(1.0 / 60.0);
    let block = &world.blocks()[0];
    assert!(block.velocity.is_finite());
    assert!(block.position.is_finite());
    assert!(!world.snapshot_json().contains("null"));
}

#[test]
fn push_at_the_cap_is_accepted() {
    let mut world = WorldCore::new();
    world.spawn_block("red", 0.0, 0.5, 0.0).unwrap();
    let limit = world.tuning().max_push_intensity;
    assert_eq!(world.push_blocks("up", limit), Ok(1));
    for _ in 0..4 {
        world.push_blocks("down", limit).unwrap();
    }
    world.step(1.0 / 60.0);
    assert!(world.blocks()[0].position.is_finite());
    assert!(world.blocks()[0].position.y >= 0.5);
}

#[test]
fn oversized_tool_push_is_rejected() {
    let mut world = WorldCore::new();
    world.spawn_block("red", 0.0, 0.5, 0.0).unwrap();
    let status = world.handle_tool_call("push_blocks", r#"{"direction":"up","intensity":1e30}"#);
    assert!(status.starts_with("Rejected: push intensity"), "{}", status);
    assert_eq!(world.blocks()[0].velocity, Vector3::zero());

    let mut frames = FrameLoop::new(WorldCore::new());
    assert!(frames.submit_push("left", Some(1e30)).starts_with("Rejected:"));
    assert_eq!(frames.pending_len(), 0);
}

#[test]
fn spawn_returns_the_inserted_id() {
    let mut world = WorldCore::new();
    let a = world.spawn_block("red", 0.0, 1.0, 0.0).unwrap();
    let b = world.spawn_block("green", 3.0, 1.0, 0.0).unwrap();
    assert_eq!(world.block(a).unwrap().position, Vector3::new(0.0, 1.0, 0.0));
    assert_eq!(world.block(b).unwrap().position, Vector3::new(3.0, 1.0, 0.0));
    assert!(world.spawn_block("red", 0.0, 1.0, f32::NAN).is_err());
    let c = world.spawn_block("red", 0.0, 1.0, 0.0).unwrap();
    assert!(c > b);
    assert_eq!(world.blocks().last().map(|blk| blk.id), Some(c));
}

#[test]
fn directional_push_adds_lift() {
    let mut world = WorldCore::new();
    world.spawn_block("red", 0.0, 0.5, 0.0).unwrap();
    world.push(PushMode::Directional(PushDirection::Left), 6.0).unwrap();
    let v = world.blocks()[0].velocity;
    assert_eq!(v, Vector3::new(-6.0, 2.0, 0.0));
}

#[test]
fn negative_intensity_is_refused() {
    let mut world = WorldCore::new();
    world.spawn_block("red", 0.0, 0.5, 0.0).unwrap();
    assert_eq!(world.push_blocks("up", -1.0), Err(WorldError::InvalidIntensity(-1.0)));
    assert_eq!(world.blocks()[0].velocity, Vector3::zero());
}

#[test]
fn hand_near_block_pushes_it_away() {
    let mut world = WorldCore::new();
    world.spawn_block("red", 1.0, 0.5, 0.0).unwrap();
    // Cursor lands at roughly (0, 0.5, 0)
    world.update_hand_position(0.5, 1.0 - 0.5 / 12.0, true);
    assert!(world.hand().active);

    let report = world.step(0.1);
    assert_eq!(report.hand_touched, 1);
    let block = &world.blocks()[0];
    assert!(block.velocity.x > 2.0);
    assert!(block.position.x > 1.0);
}

#[test]
fn idle_hand_does_not_push() {
    let mut world = WorldCore::new();
    world.spawn_block("red", 1.0, 0.5, 0.0).unwrap();
    world.update_hand_position(0.5, 1.0 - 0.5 / 12.0, false);
    let report = world.step(0.1);
    assert_eq!(report.hand_touched, 0);
    assert_eq!(world.blocks()[0].velocity.x, 0.0);
}

#[test]
fn lost_hand_parks_far_away() {
    let mut world = WorldCore::new();
    world.update_hand_position(0.2, 0.3, true);
    assert_ne!(world.hand().position, HAND_FAR_AWAY);
    world.clear_hand();
    assert_eq!(world.hand().position, HAND_FAR_AWAY);
    assert!(!world.hand().active);

    world.update_hand_position(f32::NAN, 0.3, true);
    assert_eq!(world.hand().position, HAND_FAR_AWAY);
}

#[test]
fn clear_is_idempotent_and_ids_keep_counting() {
    let mut world = WorldCore::new();
    let first = world.spawn_block("red", 0.0, 1.0, 0.0).unwrap();
    world.spawn_block("red", 0.0, 2.0, 0.0).unwrap();
    world.step(0.1);
    assert_eq!(world.transforms_len(), 2 * TRANSFORM_STRIDE);

    world.clear();
    world.clear();
    assert_eq!(world.block_count(), 0);
    assert_eq!(world.transforms_len(), 0);
    assert_eq!(world.colors_len(), 0);

    let next = world.spawn_block("red", 0.0, 1.0, 0.0).unwrap();
    assert!(next > first);
    assert!(world.block(first).is_none());
}

#[test]
fn invalid_spawn_inserts_nothing() {
    let mut world = WorldCore::new();
    assert!(matches!(
        world.spawn_block("red", f32::NAN, 1.0, 0.0),
        Err(WorldError::NonFiniteCoordinate { axis: 'x', .. })
    ));
    assert!(matches!(
        world.spawn_block("red", 0.0, f32::INFINITY, 0.0),
        Err(WorldError::NonFiniteCoordinate { axis: 'y', .. })
    ));
    assert!(matches!(
        world.spawn_block("red", 0.0, 1.0, 5000.0),
        Err(WorldError::CoordinateOutOfRange { axis: 'z', .. })
    ));
    assert_eq!(world.block_count(), 0);
}

#[test]
fn unknown_color_falls_back() {
    let mut world = WorldCore::new();
    let id = world.spawn_block("chartreuse-ish", 0.0, 1.0, 0.0).unwrap();
    let fallback = world.palette().fallback().color;
    assert_eq!(world.block(id).unwrap().color, fallback);

    let id = world.spawn_block("#123456", 0.0, 1.0, 0.0).unwrap();
    assert_eq!(world.block(id).unwrap().color.hex(), "#123456");
}

#[test]
fn tool_calls_report_status() {
    let mut world = WorldCore::new();

    let status = world.handle_tool_call("spawn_block", r#"{"color":"red","x":1,"y":2,"z":3}"#);
    assert_eq!(status, "Spawned red block #1 at (1.0, 2.0, 3.0)");

    let status = world.handle_tool_call("push_blocks", r#"{"direction":"up"}"#);
    assert_eq!(status, "Pushed 1 blocks up with intensity 10.0");

    let status = world.handle_tool_call("spawn_block", r#"{"x":1e9}"#);
    assert!(status.starts_with("Rejected:"), "{}", status);

    let status = world.handle_tool_call("summon_dragon", "{}");
    assert_eq!(status, "Rejected: unknown tool: summon_dragon");

    let status = world.handle_tool_call("clear_scene", "");
    assert_eq!(status, "Scene cleared");
    assert_eq!(world.block_count(), 0);
}

#[test]
fn gestures_map_to_commands() {
    let mut world = WorldCore::new();

    let status = world.trigger_gesture(GestureKind::Victory).unwrap();
    assert!(status.starts_with("Spawned"), "{}", status);
    assert_eq!(world.block_count(), 1);
    let spawned = world.blocks()[0].position;
    assert_eq!(spawned, Vector3::new(0.0, 8.0, 0.0));

    assert!(world.trigger_gesture(GestureKind::OpenPalm).is_none());
    assert!(world.trigger_gesture(GestureKind::None).is_none());

    world.trigger_gesture(GestureKind::ThumbUp).unwrap();
    assert!(world.blocks()[0].velocity.y > 0.0);

    world.trigger_gesture(GestureKind::ThumbDown).unwrap();
    assert_eq!(world.block_count(), 0);
}

#[test]
fn victory_spawns_over_the_cursor() {
    let mut world = WorldCore::new();
    world.update_hand_position(0.25, 0.5, true);
    let x = world.hand().position.x;
    world.trigger_gesture(GestureKind::Victory).unwrap();
    assert!((world.blocks()[0].position.x - x).abs() < 1e-6);
}

#[test]
fn snapshot_lists_blocks_and_cursor() {
    let mut world = WorldCore::new();
    world.spawn_block("red", 0.0, 3.0, 0.0).unwrap();
    world.spawn_block("green", 2.0, 3.0, 0.0).unwrap();
    world.step(0.05);

    let snap = world.snapshot();
    assert_eq!(snap.frame, 1);
    assert_eq!(snap.blocks.len(), 2);
    assert_eq!(snap.blocks[0].color, "#ef4444");
    assert!(!snap.cursor.active);

    let json: serde_json::Value = serde_json::from_str(&world.snapshot_json()).unwrap();
    assert_eq!(json["frame"], 1);
    assert_eq!(json["blocks"].as_array().unwrap().len(), 2);
    assert_eq!(json["blocks"][1]["id"], 2);
    assert_eq!(json["cursor"]["active"], false);
}

#[test]
fn render_buffers_follow_registry_order() {
    let mut world = WorldCore::new();
    world.spawn_block("red", 0.0, 3.0, 0.0).unwrap();
    world.spawn_block("white", 4.0, 3.0, 1.0).unwrap();
    world.step(0.0);

    assert_eq!(world.transforms_len(), 12);
    assert_eq!(world.colors_len(), 2);
    let snap = world.snapshot();
    assert_eq!(snap.blocks[1].position, Vector3::new(4.0, 3.0, 1.0));
}

#[test]
fn zero_dt_step_changes_nothing() {
    let mut world = WorldCore::new();
    world.spawn_block("red", 0.0, 3.0, 0.0).unwrap();
    let report = world.step(0.0);
    assert_eq!(report.dt, 0.0);
    assert_eq!(world.blocks()[0].position, Vector3::new(0.0, 3.0, 0.0));

    world.step(f32::NAN);
    assert_eq!(world.blocks()[0].position, Vector3::new(0.0, 3.0, 0.0));
}

#[test]
fn tuning_swap_rejects_bad_profiles() {
    let mut world = WorldCore::new();
    world.update_hand_position(0.5, 0.5, true);

    world.set_tuning(TuningProfile::stacking()).unwrap();
    assert!(world.tuning().block_collisions);
    assert!(!world.hand().active);

    let mut bad = TuningProfile::classic();
    bad.block_size = 0.0;
    assert!(matches!(world.set_tuning(bad), Err(WorldError::InvalidTuning(_))));
    assert_eq!(world.tuning().name, "stacking");
}

#[test]
fn stacking_world_keeps_blocks_apart() {
    let mut world = WorldCore::with_tuning(TuningProfile::stacking(), 7).unwrap();
    world.spawn_block("red", 0.0, 0.5, 0.0).unwrap();
    world.spawn_block("blue", 0.2, 3.0, 0.0).unwrap();
    for _ in 0..200 {
        world.step(1.0 / 60.0);
    }
    let lower = world.blocks()[0].position;
    let upper = world.blocks()[1].position;
    assert!(upper.y - lower.y >= 1.0 - 1e-3, "blocks interpenetrate: {:?} {:?}", lower, upper);
}

#[test]
fn perf_stats_count_blocks_and_commands() {
    let mut world = WorldCore::new();
    world.enable_perf_metrics(true);
    for i in 0..3 {
        world.spawn_block("red", i as f32 * 2.0, 4.0, 0.0).unwrap();
    }
    world.step(0.016);

    let stats = world.get_perf_stats();
    assert_eq!(stats.block_count(), 3);
    assert_eq!(stats.commands_applied(), 3);
    assert!(stats.step_ms() >= 0.0);

    world.step(0.016);
    assert_eq!(world.get_perf_stats().commands_applied(), 0);
}

#[test]
fn perf_stats_stay_zero_when_disabled() {
    let mut world = WorldCore::new();
    world.spawn_block("red", 0.0, 4.0, 0.0).unwrap();
    world.step(0.016);
    assert_eq!(world.get_perf_stats().block_count(), 0);
}

// === FRAME LOOP ===

#[test]
fn frame_loop_applies_commands_before_stepping() {
    let mut frames = FrameLoop::new(WorldCore::new());
    let ack = frames.submit_spawn("red", 0.0, 0.5, 0.0);
    assert!(ack.starts_with("Spawned red block"), "{}", ack);
    frames.submit_push("up", Some(5.0));
    assert_eq!(frames.pending_len(), 2);
    assert_eq!(frames.world().block_count(), 0);

    frames.start();
    assert!(frames.tick(0.0));
    assert_eq!(frames.pending_len(), 0);
    assert_eq!(frames.world().block_count(), 1);
    assert_eq!(frames.world().frame(), 1);
    // First tick integrates nothing, so the push velocity is intact.
    assert_eq!(frames.world().blocks()[0].velocity, Vector3::new(0.0, 7.0, 0.0));

    assert!(frames.tick(16.0));
    let report = frames.world().last_report();
    assert!((report.dt - 0.016).abs() < 1e-6);
    assert!(frames.world().blocks()[0].position.y > 0.5);
}

#[test]
fn frame_loop_rejects_without_queueing() {
    let mut frames = FrameLoop::new(WorldCore::new());
    let ack = frames.submit_spawn("red", f32::NAN, 0.0, 0.0);
    assert!(ack.starts_with("Rejected:"));
    let ack = frames.submit_tool_call("push_blocks", "not json");
    assert!(ack.starts_with("Rejected:"));
    assert_eq!(frames.pending_len(), 0);
    assert!(frames.submit_gesture(GestureKind::PointingUp).is_none());
}

#[test]
fn stopped_loop_does_not_step() {
    let mut frames = FrameLoop::new(WorldCore::new());
    assert!(!frames.tick(0.0));
    assert_eq!(frames.world().frame(), 0);

    frames.start();
    frames.tick(0.0);
    frames.tick(16.0);
    frames.stop();
    assert!(!frames.is_running());
    frames.submit_clear();
    assert!(!frames.tick(32.0));
    assert_eq!(frames.world().frame(), 2);
    assert_eq!(frames.pending_len(), 1);

    // Restart: first tick after a stop has no history, so dt = 0.
    frames.start();
    frames.tick(5000.0);
    assert_eq!(frames.world().last_report().dt, 0.0);
    assert_eq!(frames.pending_len(), 0);
}

#[test]
fn long_frame_gap_is_clamped() {
    let mut frames = FrameLoop::new(WorldCore::new());
    frames.submit_spawn("red", 0.0, 50.0, 0.0);
    frames.start();
    frames.tick(0.0);
    frames.tick(3000.0);
    assert!((frames.world().last_report().dt - 0.1).abs() < 1e-6);
}

#[test]
fn hand_samples_queue_in_order() {
    let mut frames = FrameLoop::new(WorldCore::new());
    frames.submit_hand(0.1, 0.1, true);
    frames.submit_hand_lost();
    frames.submit_hand(0.5, 0.5, true);
    frames.step_now(0.0);
    let hand = frames.world().hand();
    assert!(hand.active);
    assert!((hand.position.x - 0.0).abs() < 1e-6);
}
