pub struct Math {}
impl Math {
    pub fn round_float_to_n_decimals(number: f64, decimals: i32) -> f64 {
        let multiplier = 10.0_f64.powi(decimals);
        (number * multiplier).round() / multiplier
    }

    /// # win rate
    /// wins / (wins + podiums) * 100, zero when there are no wins.
    /// no wins means no rate, even when the driver has podiums.
    pub fn win_rate(wins: u32, podiums: u32) -> f64 {
        if wins == 0 {
            return 0.0;
        }

        let wins = f64::from(wins);
        wins / (wins + f64::from(podiums)) * 100.0
    }

    /// # podium rate
    /// podiums measured against a fixed denominator of 100.
    /// this does not look at the amount of races entered.
    pub fn podium_rate(podiums: u32) -> f64 {
        f64::from(podiums) / 100.0 * 100.0
    }

    /// # percentage of
    /// `value` as a percentage of `max`, rounded to 2 decimals.
    /// a `max` of zero or less gives zero.
    pub fn percentage_of(value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return 0.0;
        }

        Math::round_float_to_n_decimals(value / max * 100.0, 2)
    }
}
