mod camera;
mod collision;
mod flight;
mod recorder;
mod scene;
mod stats;

pub use camera::{derive_chase_camera, update_camera};
pub use collision::{check_collision, detect_collision, handle_collision};
pub use flight::{advance_flight, request_takeoff, reset_flight, CLIMB_TRIGGER_X};
pub use recorder::{
    playback_step, record_sample, start_playback, start_recording, stop_recording,
    toggle_playback, toggle_recording,
};
pub use scene::{spawn_scene, toggle_day_night, toggle_obstacle};
pub use stats::{update_flight_stats, MIN_DELTA_TIME};
