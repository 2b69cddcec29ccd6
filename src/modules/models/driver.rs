use serde::{Deserialize, Serialize};

use crate::modules::helpers::math::Math;
use crate::modules::traits::entity::{Entity, EntityKind};
use crate::modules::traits::searchable::Searchable;

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub nationality: String,
    pub age: u32,
    pub number: u32,
    /// display name of the team, kept next to `team_id`
    pub team: String,
    pub team_id: String,
    pub championships: u32,
    pub wins: u32,
    pub podiums: u32,
    pub poles: u32,
    pub points: u32,
    pub career_highlights: Vec<String>,
    pub biography: String,
    pub image_url: String,
    pub active: bool,
}

impl Entity for Driver {
    const KIND: EntityKind = EntityKind::Driver;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Driver {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.nationality, &self.team]
    }
}

impl Driver {
    /// # get the performance metrics of the driver
    /// the win rate and podium rate shown as bars on the profile page
    pub fn metrics(&self) -> DriverMetrics {
        DriverMetrics::new(self.wins, self.podiums)
    }
}

/// # display metrics of a driver
/// both rates are percentages and are not clamped, a rate over 100 renders
/// a bar wider than its track.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct DriverMetrics {
    pub win_rate: f64,
    pub podium_rate: f64,
    pub win_rate_label: String,
    pub podium_rate_label: String,
}

impl DriverMetrics {
    pub fn new(wins: u32, podiums: u32) -> DriverMetrics {
        let win_rate = Math::win_rate(wins, podiums);
        let podium_rate = Math::podium_rate(podiums);

        // no wins shows a plain 0, everything else one decimal
        let win_rate_label = if wins > 0 {
            format!("{:.1}", win_rate)
        } else {
            "0".to_string()
        };

        DriverMetrics {
            win_rate,
            podium_rate,
            win_rate_label,
            podium_rate_label: format!("{:.1}", podium_rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_labels() {
        let metrics = DriverMetrics::new(52, 97);
        assert_eq!(metrics.win_rate_label, "34.9");
        assert_eq!(metrics.podium_rate_label, "97.0");

        let metrics = DriverMetrics::new(0, 10);
        assert_eq!(metrics.win_rate, 0.0);
        assert_eq!(metrics.win_rate_label, "0");
        assert_eq!(metrics.podium_rate_label, "10.0");
    }

    #[test]
    fn podium_rate_is_not_clamped() {
        // literal podiums / 100 * 100, more than 100 podiums gives more than 100%
        let metrics = DriverMetrics::new(103, 197);
        assert_eq!(metrics.podium_rate, 197.0);
        assert_eq!(metrics.podium_rate_label, "197.0");
    }
}
