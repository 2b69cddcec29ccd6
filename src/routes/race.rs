// rocket imports
use rocket::get;
use rocket::State;
use rocket_dyn_templates::{context, Template};
use serde::Serialize;

use crate::modules::models::race::{Race, RaceResult, SpeedChartEntry};
use crate::modules::store::EntityStore;
use crate::{ChartData, ChartDataDataset};


/// # races of a season
/// without a season the newest season in the dataset is shown
#[get("/?<season>")]
pub fn list(season: Option<u32>, store: &State<EntityStore>) -> Template {
    let selected = season.or_else(|| store.latest_season());

    let races: Vec<TemplateDataRace> = match selected {
        Some(season) => store
            .get_races_by_season(season)
            .into_iter()
            .map(|race| TemplateDataRace::new(store, race))
            .collect(),
        None => Vec::new(),
    };

    let chart = match selected {
        Some(season) => store.fastest_lap_chart(season),
        None => Vec::new(),
    };

    let seasons: Vec<SeasonOption> = store
        .seasons()
        .into_iter()
        .map(|s| SeasonOption { season: s, selected: Some(s) == selected })
        .collect();

    Template::render("races", context! {
        title: "F1 Races & Seasons",
        seasons: &seasons,
        selected_season: selected,
        has_races: !races.is_empty(),
        races: &races,
        has_chart: !chart.is_empty(),
        chart_data: generate_chart_data(&chart),
        chart: &chart,
    })
}

fn generate_chart_data(chart: &[SpeedChartEntry]) -> ChartData {
    ChartData {
        labels: chart.iter().map(|entry| entry.name.clone()).collect(),
        datasets: vec![ChartDataDataset {
            label: "Fastest lap speed (km/h)".to_string(),
            data: chart.iter().map(|entry| entry.speed).collect(),
        }],
    }
}

#[derive(Serialize)]
struct SeasonOption {
    season: u32,
    selected: bool,
}

/// a race card: the race, its date as text and its podium
#[derive(Serialize)]
pub struct TemplateDataRace<'a> {
    pub race: &'a Race,
    pub display_date: String,
    pub podium: Vec<TemplateDataResult<'a>>,
}

/// a result row, linked to the driver profile when the name resolves
#[derive(Serialize)]
pub struct TemplateDataResult<'a> {
    pub result: &'a RaceResult,
    pub driver_id: Option<&'a str>,
}

impl<'a> TemplateDataRace<'a> {
    pub fn new(store: &'a EntityStore, race: &'a Race) -> TemplateDataRace<'a> {
        TemplateDataRace {
            race,
            display_date: race.display_date(),
            podium: race
                .podium()
                .iter()
                .map(|result| TemplateDataResult {
                    result,
                    driver_id: store
                        .find_driver_by_name(&result.driver)
                        .map(|driver| driver.id.as_str()),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_data_follows_the_chart() {
        let store = EntityStore::bundled().unwrap();
        let chart = store.fastest_lap_chart(2024);
        let data = generate_chart_data(&chart);

        assert_eq!(data.labels, vec!["Bahrain", "Saudi Arabian"]);
        assert_eq!(data.datasets.len(), 1);
        assert_eq!(data.datasets[0].data, vec![214.764, 250.318]);
    }

    #[test]
    fn podium_rows_link_known_drivers() {
        let store = EntityStore::bundled().unwrap();
        let race = store.get_race_by_id("bahrain-2024").unwrap();
        let card = TemplateDataRace::new(&store, race);

        let links: Vec<Option<&str>> = card.podium.iter().map(|row| row.driver_id).collect();
        assert_eq!(links, vec![Some("verstappen"), None, None]);
        assert_eq!(card.display_date, "March 2, 2024");
    }
}
