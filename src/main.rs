//! Golf Sim entry point
//!
//! Lays out a par 4 on a fresh course, hits a drive down it in real-time
//! sized frames and reports the shot.
//!
//! Usage: `golf-sim [settings.json]`

use glam::{Vec2, Vec3};

use golf_sim::{FaceCoord, Material, Par, Round, Settings};

/// Frame length of a 60 Hz display, in milliseconds
const FRAME_MS: u32 = 16;
/// Give up on a shot that is still airborne after this many frames
const MAX_FRAMES: u32 = 60 * 60;

/// Driver launch: ball speed and climb (yd/ms), backspin
const DRIVE_SPEED: f32 = 0.07;
const DRIVE_CLIMB: f32 = 0.018;
const DRIVE_BACKSPIN: f32 = 0.02;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Golf Sim starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };

    let mut round = Round::with_tuning(settings.build_terrain(), settings.flight);
    let Some((tee, target)) = lay_out_par_four(&mut round) else {
        log::error!(
            "Course of {}x{} faces is too small for a par 4",
            settings.terrain.width,
            settings.terrain.height
        );
        return;
    };

    round.set_ball_position(tee);
    let heading = (target - tee).extend(0.0).normalize_or_zero();
    let v = heading * DRIVE_SPEED + Vec3::Z * DRIVE_CLIMB;
    let s = heading.cross(Vec3::Z) * DRIVE_BACKSPIN;
    round.swing(v, s);

    let mut frames = 0;
    while round.is_shot_in_progress() && frames < MAX_FRAMES {
        round.step(FRAME_MS);
        frames += 1;
    }
    if round.is_shot_in_progress() {
        log::warn!("Shot still in flight after {frames} frames");
    }

    let stats = round.shot_statistics();
    log::info!(
        "Carry {:.1} yd, apex {:.1} yd, curve {:+.1} yd, hang {:.2} s",
        stats.carry,
        stats.apex,
        stats.curve,
        stats.hang_time as f32 / 1000.0
    );
    match serde_json::to_string_pretty(&stats) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize shot: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}

/// Paint and route hole 1 as a par 4 running up the middle of the course.
///
/// Returns the tee and the first target in world XY, or `None` if the
/// course is too small to hold the hole.
#[cfg(not(target_arch = "wasm32"))]
fn lay_out_par_four(round: &mut Round) -> Option<(Vec2, Vec2)> {
    let terrain = round.terrain_mut();
    let (w, h) = (terrain.face_width(), terrain.face_height());
    if w < 5 || h < 10 {
        return None;
    }

    let mid = w / 2;
    let tee = FaceCoord::new(1, mid);
    let landing = FaceCoord::new(h / 2, mid);
    let pin = FaceCoord::new(h - 3, mid);

    terrain.fill_material(0..=2, mid - 1..=mid + 1, Material::Tee);
    terrain.fill_material(3..=h - 6, mid - 2..=mid + 2, Material::Fairway);
    terrain.fill_material(h - 5..=h - 1, mid - 2..=mid + 2, Material::Green);
    terrain.bulk_raise_face(h - 5..=h - 1, mid - 2..=mid + 2, 2);
    terrain.define_hole(0, Par::Four, &[tee, landing, pin]);

    let hole = terrain.hole(0)?;
    let pin = hole.pin();
    log::info!(
        "Hole 1: par 4, {:.0} yd, pin at face ({}, {})",
        terrain.hole_length(hole),
        pin.row,
        pin.col
    );
    let points = terrain.shot_point_positions(hole);
    Some((points[0].truncate(), points[1].truncate()))
}
