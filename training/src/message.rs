/// Figures for one finished workout, ready to be shown to the user.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    pub workout: String,
    pub duration_hr: f64,
    pub distance_km: f64,
    pub mean_speed_kmhr: f64,
    pub calories_kcal: f64,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Activity type: {}; Duration: {:.3} h.; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.workout,
            self.duration_hr,
            self.distance_km,
            self.mean_speed_kmhr,
            self.calories_kcal
        )
    }
}
