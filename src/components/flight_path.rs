use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// One captured craft pose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightSample {
    pub position: Vector3<f64>,
    pub look_direction: Vector3<f64>,
}

impl FlightSample {
    pub fn new(position: Vector3<f64>, look_direction: Vector3<f64>) -> Self {
        Self {
            position,
            look_direction,
        }
    }

    /// Pitch and yaw [rad] that point the identity nose along the stored
    /// look direction: `(atan2(z, |xy|), atan2(y, x))`.
    pub fn rotation_angles(&self) -> (f64, f64) {
        let d = self.look_direction;
        let pitch = d.z.atan2((d.x * d.x + d.y * d.y).sqrt());
        let yaw = d.y.atan2(d.x);
        (pitch, yaw)
    }
}

/// Time-ordered sequence of samples. Append-only while recording, read-only
/// while replaying.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightPath {
    samples: Vec<FlightSample>,
}

impl FlightPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: FlightSample) {
        self.samples.push(sample);
    }

    pub fn get(&self, index: usize) -> Option<&FlightSample> {
        self.samples.get(index)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlightSample> {
        self.samples.iter()
    }
}

/// Recorder and player flags plus the shared path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightRecorder {
    pub path: FlightPath,
    pub recording: bool,
    pub playing_back: bool,
    /// Index of the next sample to replay; always `<= path.len()`.
    pub cursor: usize,
}
