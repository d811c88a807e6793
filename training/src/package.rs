use std::time::Duration;

use thiserror::Error as ThisError;

use crate::workout::{Running, SportsWalking, Swimming, Workout};

/// Seconds in one hour.
const SEC_IN_HR: f64 = 3600.0;

/// Short tag a tracker puts on a sensor package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum WorkoutCode {
    Swm,
    Run,
    Wlk,
}

impl WorkoutCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Swm => "SWM",
            Self::Run => "RUN",
            Self::Wlk => "WLK",
        }
    }

    /// Number of values the positional package must carry.
    pub const fn arity(self) -> usize {
        match self {
            Self::Swm => 5,
            Self::Run => 3,
            Self::Wlk => 4,
        }
    }
}

impl std::str::FromStr for WorkoutCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SWM" => Ok(Self::Swm),
            "RUN" => Ok(Self::Run),
            "WLK" => Ok(Self::Wlk),
            other => Err(Error::UnknownActivity(other.to_owned())),
        }
    }
}

impl std::fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a sensor package cannot become a [`Workout`].
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// Code is not one of `SWM`, `RUN`, `WLK`.
    #[error("unknown activity code `{0}`")]
    UnknownActivity(String),
    /// Positional list does not match the code's layout.
    #[error("{code} package carries {got} values, expected {expected}")]
    PackageLen {
        code: WorkoutCode,
        expected: usize,
        got: usize,
    },
    /// Zero, negative or non-finite duration. The formulas divide by it.
    #[error("workout duration must be positive and finite, got {0} h")]
    InvalidDuration(f64),
    /// Record lacks a column the code's variant needs.
    #[error("{code} record is missing `{field}`")]
    MissingField {
        code: WorkoutCode,
        field: &'static str,
    },
}

/// Read one raw package received from a tracker.
///
/// # Params
/// - `code` - activity code, one of `SWM`, `RUN`, `WLK`
/// - `data` - positional readings in the layout fixed by the code
///
/// Layouts:
///
/// ```notrust
/// RUN: [action, duration_hr, weight_kg]
/// WLK: [action, duration_hr, weight_kg, height_cm]
/// SWM: [action, duration_hr, weight_kg, pool_length_m, lap_count]
/// ```
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout, Error> {
    let code = code.parse::<WorkoutCode>()?;

    if data.len() != code.arity() {
        return Err(Error::PackageLen {
            code,
            expected: code.arity(),
            got: data.len(),
        });
    }

    let action = data[0] as u64;
    let duration = duration_from_hr(data[1])?;
    let weight_kg = data[2];

    let workout = match code {
        WorkoutCode::Run => Workout::Running(Running {
            steps: action,
            duration,
            weight_kg,
        }),
        WorkoutCode::Wlk => Workout::SportsWalking(SportsWalking {
            steps: action,
            duration,
            weight_kg,
            height_cm: data[3],
        }),
        WorkoutCode::Swm => Workout::Swimming(Swimming {
            strokes: action,
            duration,
            weight_kg,
            pool_length_m: data[3],
            lap_count: data[4] as u32,
        }),
    };

    Ok(workout)
}

/// One package row as trackers export them to csv.
///
/// Variant-specific columns stay empty for the other codes.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct PackageRecord {
    pub code: WorkoutCode,
    pub action: u64,
    pub duration_hr: f64,
    pub weight_kg: f64,
    pub height_cm: Option<f64>,
    pub pool_length_m: Option<f64>,
    pub laps: Option<u32>,
}

#[cfg(feature = "serde")]
impl TryFrom<PackageRecord> for Workout {
    type Error = Error;

    fn try_from(record: PackageRecord) -> Result<Self, Self::Error> {
        let PackageRecord {
            code,
            action,
            duration_hr,
            weight_kg,
            height_cm,
            pool_length_m,
            laps,
        } = record;

        let duration = duration_from_hr(duration_hr)?;
        let missing = |field: &'static str| Error::MissingField { code, field };

        let workout = match code {
            WorkoutCode::Run => Self::Running(Running {
                steps: action,
                duration,
                weight_kg,
            }),
            WorkoutCode::Wlk => Self::SportsWalking(SportsWalking {
                steps: action,
                duration,
                weight_kg,
                height_cm: height_cm.ok_or_else(|| missing("height_cm"))?,
            }),
            WorkoutCode::Swm => Self::Swimming(Swimming {
                strokes: action,
                duration,
                weight_kg,
                pool_length_m: pool_length_m.ok_or_else(|| missing("pool_length_m"))?,
                lap_count: laps.ok_or_else(|| missing("laps"))?,
            }),
        };

        Ok(workout)
    }
}

/// Fractional hours to [`Duration`], rejecting what the formulas cannot divide by.
fn duration_from_hr(hours: f64) -> Result<Duration, Error> {
    if !hours.is_finite() || hours <= 0.0 {
        return Err(Error::InvalidDuration(hours));
    }

    Ok(Duration::from_secs_f64(hours * SEC_IN_HR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_running() {
        let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();

        let expected = Workout::Running(Running {
            steps: 15000,
            duration: Duration::from_secs(3600),
            weight_kg: 75.0,
        });

        assert_eq!(expected, workout);
    }

    #[test]
    fn dispatches_walking() {
        let workout = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();

        let expected = Workout::SportsWalking(SportsWalking {
            steps: 9000,
            duration: Duration::from_secs(3600),
            weight_kg: 75.0,
            height_cm: 180.0,
        });

        assert_eq!(expected, workout);
    }

    #[test]
    fn dispatches_swimming() {
        let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();

        let expected = Workout::Swimming(Swimming {
            strokes: 720,
            duration: Duration::from_secs(3600),
            weight_kg: 80.0,
            pool_length_m: 25.0,
            lap_count: 40,
        });

        assert_eq!(expected, workout);
    }

    #[test]
    fn rejects_unknown_code() {
        let actual = read_package("XYZ", &[1.0, 1.0, 1.0]);

        assert_eq!(Err(Error::UnknownActivity("XYZ".to_owned())), actual);
    }

    #[test]
    fn rejects_short_package() {
        let actual = read_package("WLK", &[9000.0, 1.0, 75.0]);

        let expected = Err(Error::PackageLen {
            code: WorkoutCode::Wlk,
            expected: 4,
            got: 3,
        });

        assert_eq!(expected, actual);
    }

    #[test]
    fn rejects_zero_duration() {
        let actual = read_package("RUN", &[15000.0, 0.0, 75.0]);

        assert_eq!(Err(Error::InvalidDuration(0.0)), actual);
    }

    #[test]
    fn rejects_negative_duration() {
        let actual = read_package("RUN", &[15000.0, -1.5, 75.0]);

        assert_eq!(Err(Error::InvalidDuration(-1.5)), actual);
    }

    #[test]
    fn code_round_trips_through_str() {
        for code in [WorkoutCode::Swm, WorkoutCode::Run, WorkoutCode::Wlk] {
            assert_eq!(Ok(code), code.as_str().parse::<WorkoutCode>());
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn record_rejects_missing_column() {
        let record = PackageRecord {
            code: WorkoutCode::Wlk,
            action: 9000,
            duration_hr: 1.0,
            weight_kg: 75.0,
            height_cm: None,
            pool_length_m: None,
            laps: None,
        };

        let expected = Err(Error::MissingField {
            code: WorkoutCode::Wlk,
            field: "height_cm",
        });

        assert_eq!(expected, Workout::try_from(record));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn records_from_csv_dispatch_to_variants() {
        let data = "\
code,action,duration_hr,weight_kg,height_cm,pool_length_m,laps
SWM,720,1,80,,25,40
RUN,15000,1,75,,,
WLK,9000,1,75,180,,
";

        let workouts = csv::Reader::from_reader(data.as_bytes())
            .deserialize::<PackageRecord>()
            .map(|this| Workout::try_from(this.unwrap()).unwrap())
            .collect::<Vec<_>>();

        let names = workouts.iter().map(Workout::name).collect::<Vec<_>>();

        assert_eq!(["Swimming", "Running", "SportsWalking"].as_slice(), names);
    }
}
