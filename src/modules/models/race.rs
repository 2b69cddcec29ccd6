use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::helpers::math::Math;
use crate::modules::traits::entity::{Entity, EntityKind};

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub id: String,
    pub name: String,
    pub circuit: String,
    pub country: String,
    pub date: NaiveDate,
    pub season: u32,
    pub round: u32,
    /// ordered by position
    pub results: Vec<RaceResult>,
    pub fastest_lap: Option<FastestLap>,
}

/// # a classified finisher
/// driver and team are display names, not ids
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct RaceResult {
    pub position: u32,
    pub driver: String,
    pub team: String,
    /// race time for the winner, gap to the leader for everyone else
    pub time: String,
    pub points: u32,
    pub status: String,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct FastestLap {
    pub driver: String,
    pub time: String,
    /// km/h
    pub speed: f64,
}

impl Entity for Race {
    const KIND: EntityKind = EntityKind::Race;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Race {
    /// # get the podium
    /// the first three results in stored order
    pub fn podium(&self) -> &[RaceResult] {
        let end = self.results.len().min(3);
        &self.results[..end]
    }

    /// # find out of order position
    /// get the first position that is not strictly greater than the one before it.
    /// positions start at 1, a leading position 0 is out of order as well.
    ///
    /// ## Returns
    /// * `Option<u32>` - the offending position, `None` when the results are ordered
    pub fn find_out_of_order_position(&self) -> Option<u32> {
        if let Some(first) = self.results.first().filter(|first| first.position == 0) {
            return Some(first.position);
        }

        self.results
            .windows(2)
            .find(|pair| pair[1].position <= pair[0].position)
            .map(|pair| pair[1].position)
    }

    /// the race name without the " Grand Prix" suffix, used as chart label
    pub fn short_name(&self) -> String {
        self.name.replacen(" Grand Prix", "", 1)
    }

    /// the date the way it is shown on the race cards, e.g. `March 2, 2024`
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

/// # a bar in the fastest lap speed chart
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct SpeedChartEntry {
    pub name: String,
    pub speed: f64,
    pub time: String,
    pub driver: String,
    /// height of the bar relative to the fastest race of the season
    pub bar_percent: f64,
}

/// # build the fastest lap chart
/// one entry per race with a fastest lap record, in the order of `races`.
/// races without a record are left out.
///
/// ## Arguments
/// * `races` - the races to chart, usually the races of one season
///
/// ## Returns
/// * `Vec<SpeedChartEntry>` - the chart entries
pub fn fastest_lap_chart(races: &[&Race]) -> Vec<SpeedChartEntry> {
    let max_speed = races
        .iter()
        .filter_map(|race| race.fastest_lap.as_ref())
        .map(|lap| lap.speed)
        .fold(0.0, f64::max);

    races
        .iter()
        .filter_map(|race| {
            race.fastest_lap.as_ref().map(|lap| SpeedChartEntry {
                name: race.short_name(),
                speed: lap.speed,
                time: lap.time.clone(),
                driver: lap.driver.clone(),
                bar_percent: Math::percentage_of(lap.speed, max_speed),
            })
        })
        .collect()
}
