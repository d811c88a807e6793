use std::time::Duration;

use crate::message::Report;

/// Metres in one kilometre.
const M_IN_KM: f64 = 1000.0;
/// Minutes in one hour.
const MIN_IN_HR: f64 = 60.0;
/// Centimetres in one metre.
const CM_IN_M: f64 = 100.0;
/// Seconds in one hour.
const SEC_IN_HR: f64 = 3600.0;

/// One workout session, tagged by activity kind.
///
/// Every kind derives the same three figures from its raw readings; the
/// formulas differ per kind. Nothing is cached, each call recomputes from
/// the fields.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Running(_) => "Running",
            Self::SportsWalking(_) => "SportsWalking",
            Self::Swimming(_) => "Swimming",
        }
    }

    pub const fn duration(&self) -> Duration {
        match self {
            Self::Running(this) => this.duration,
            Self::SportsWalking(this) => this.duration,
            Self::Swimming(this) => this.duration,
        }
    }

    /// Workout length in fractional hours.
    pub fn duration_hr(&self) -> f64 {
        duration_hr(self.duration())
    }

    pub fn distance_km(&self) -> f64 {
        match self {
            Self::Running(this) => this.distance_km(),
            Self::SportsWalking(this) => this.distance_km(),
            Self::Swimming(this) => this.distance_km(),
        }
    }

    pub fn mean_speed_kmhr(&self) -> f64 {
        match self {
            Self::Running(this) => this.mean_speed_kmhr(),
            Self::SportsWalking(this) => this.mean_speed_kmhr(),
            Self::Swimming(this) => this.mean_speed_kmhr(),
        }
    }

    pub fn calories_burnt(&self) -> f64 {
        match self {
            Self::Running(this) => this.calories_burnt(),
            Self::SportsWalking(this) => this.calories_burnt(),
            Self::Swimming(this) => this.calories_burnt(),
        }
    }

    /// Pack the derived figures into a [`Report`].
    pub fn report(&self) -> Report {
        Report {
            workout: self.name().to_owned(),
            duration_hr: self.duration_hr(),
            distance_km: self.distance_km(),
            mean_speed_kmhr: self.mean_speed_kmhr(),
            calories_kcal: self.calories_burnt(),
        }
    }
}

/// Workout: running.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Running {
    pub steps: u64,
    /// Must be non-zero; packages parsed with [`crate::read_package`] are validated.
    pub duration: Duration,
    pub weight_kg: f64,
}

impl Running {
    /// Metres covered by one running step.
    pub const STEP_LEN_M: f64 = 0.65;

    const SPEED_RATE: f64 = 18.0;
    const SPEED_SHIFT: f64 = 1.79;

    pub fn distance_km(&self) -> f64 {
        unit_distance_km(self.steps, Self::STEP_LEN_M)
    }

    pub fn mean_speed_kmhr(&self) -> f64 {
        self.distance_km() / duration_hr(self.duration)
    }

    pub fn calories_burnt(&self) -> f64 {
        (Self::SPEED_RATE * self.mean_speed_kmhr() + Self::SPEED_SHIFT)
            * self.weight_kg
            * duration_hr(self.duration)
            * MIN_IN_HR
            / M_IN_KM
    }
}

/// Workout: sports walking.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SportsWalking {
    pub steps: u64,
    /// Must be non-zero; packages parsed with [`crate::read_package`] are validated.
    pub duration: Duration,
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl SportsWalking {
    /// Metres covered by one walking step.
    pub const STEP_LEN_M: f64 = 0.65;

    const WEIGHT_RATE: f64 = 0.035;
    const SPEED_HEIGHT_RATE: f64 = 0.029;
    /// km/h to m/s.
    const MS_IN_KMHR: f64 = 0.278;

    pub fn distance_km(&self) -> f64 {
        unit_distance_km(self.steps, Self::STEP_LEN_M)
    }

    pub fn mean_speed_kmhr(&self) -> f64 {
        self.distance_km() / duration_hr(self.duration)
    }

    pub fn calories_burnt(&self) -> f64 {
        let height_m = self.height_cm / CM_IN_M;
        let speed_ms = self.mean_speed_kmhr() * Self::MS_IN_KMHR;

        (Self::WEIGHT_RATE * self.weight_kg
            + speed_ms.powi(2) / height_m * Self::SPEED_HEIGHT_RATE * self.weight_kg)
            * (duration_hr(self.duration) * MIN_IN_HR)
    }
}

/// Workout: swimming.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swimming {
    pub strokes: u64,
    /// Must be non-zero; packages parsed with [`crate::read_package`] are validated.
    pub duration: Duration,
    pub weight_kg: f64,
    pub pool_length_m: f64,
    pub lap_count: u32,
}

impl Swimming {
    /// Metres covered by one stroke.
    pub const STROKE_LEN_M: f64 = 1.38;

    const SPEED_SHIFT: f64 = 1.1;
    const WEIGHT_RATE: f64 = 2.0;

    pub fn distance_km(&self) -> f64 {
        unit_distance_km(self.strokes, Self::STROKE_LEN_M)
    }

    /// Pool length times laps, not stroke distance.
    pub fn mean_speed_kmhr(&self) -> f64 {
        self.pool_length_m * f64::from(self.lap_count) / M_IN_KM / duration_hr(self.duration)
    }

    pub fn calories_burnt(&self) -> f64 {
        (self.mean_speed_kmhr() + Self::SPEED_SHIFT)
            * Self::WEIGHT_RATE
            * self.weight_kg
            * duration_hr(self.duration)
    }
}

fn unit_distance_km(action: u64, unit_len_m: f64) -> f64 {
    action as f64 * unit_len_m / M_IN_KM
}

fn duration_hr(duration: Duration) -> f64 {
    duration.as_secs_f64() / SEC_IN_HR
}
