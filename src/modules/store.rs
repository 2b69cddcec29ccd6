use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;
use snafu::{OptionExt, ResultExt};

use crate::errors::{
    CustomResult, DuplicateIdSnafu, NotFoundSnafu, ParseDatasetSnafu, ReadDatasetSnafu,
    ResultOrderSnafu,
};
use crate::modules::models::driver::Driver;
use crate::modules::models::race::{fastest_lap_chart, Race, SpeedChartEntry};
use crate::modules::models::team::Team;
use crate::modules::traits::entity::{find_by_id, find_duplicate_id, Entity, EntityKind};
use crate::modules::traits::searchable::filter_by_query;

const BUNDLED_DATASET: &str = include_str!("../data/f1_data.json");

#[derive(Deserialize)]
struct Dataset {
    drivers: Vec<Driver>,
    teams: Vec<Team>,
    races: Vec<Race>,
}

/// # the dataset
/// drivers, teams and races, loaded once and never changed afterwards.
/// every query borrows from the store, nothing is copied or reordered.
#[derive(Debug, Clone)]
pub struct EntityStore {
    drivers: Vec<Driver>,
    teams: Vec<Team>,
    races: Vec<Race>,
}

impl EntityStore {
    /************ LOADERS ************/
    /// # create a store
    /// checks that ids are unique per collection and that the results of each
    /// race are in ascending position order.
    ///
    /// ## Arguments
    /// * `drivers` - all drivers
    /// * `teams` - all teams
    /// * `races` - all races
    ///
    /// ## Returns
    /// * `EntityStore` - the store, or the first broken invariant
    pub fn new(drivers: Vec<Driver>, teams: Vec<Team>, races: Vec<Race>) -> CustomResult<EntityStore> {
        if let Some(id) = find_duplicate_id(&drivers) {
            return DuplicateIdSnafu { kind: Driver::KIND, id }.fail();
        }
        if let Some(id) = find_duplicate_id(&teams) {
            return DuplicateIdSnafu { kind: Team::KIND, id }.fail();
        }
        if let Some(id) = find_duplicate_id(&races) {
            return DuplicateIdSnafu { kind: Race::KIND, id }.fail();
        }

        for race in &races {
            if let Some(position) = race.find_out_of_order_position() {
                return ResultOrderSnafu { race: race.id.as_str(), position }.fail();
            }
        }

        info!(target: "modules/store:new", "loaded {} drivers, {} teams and {} races", drivers.len(), teams.len(), races.len());

        Ok(EntityStore { drivers, teams, races })
    }

    /// # parse a dataset
    /// the document has the shape `{ "drivers": [..], "teams": [..], "races": [..] }`
    pub fn from_json(text: &str) -> CustomResult<EntityStore> {
        let dataset: Dataset = serde_json::from_str(text).context(ParseDatasetSnafu)?;
        EntityStore::new(dataset.drivers, dataset.teams, dataset.races)
    }

    /// # load the dataset shipped inside the binary
    pub fn bundled() -> CustomResult<EntityStore> {
        EntityStore::from_json(BUNDLED_DATASET)
    }

    /// # load a dataset from disk
    pub fn from_file(path: &Path) -> CustomResult<EntityStore> {
        let text = fs::read_to_string(path).context(ReadDatasetSnafu { path: path.to_path_buf() })?;
        EntityStore::from_json(&text)
    }

    /************ COLLECTIONS ************/
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn races(&self) -> &[Race] {
        &self.races
    }

    /************ LOOKUPS ************/
    pub fn get_driver_by_id(&self, id: &str) -> Option<&Driver> {
        find_by_id(&self.drivers, id)
    }

    pub fn get_team_by_id(&self, id: &str) -> Option<&Team> {
        find_by_id(&self.teams, id)
    }

    pub fn get_race_by_id(&self, id: &str) -> Option<&Race> {
        find_by_id(&self.races, id)
    }

    /// # get driver
    /// same as `get_driver_by_id` but a miss is an `Error::NotFound`
    pub fn driver(&self, id: &str) -> CustomResult<&Driver> {
        debug!(target: "modules/store:driver", "looking up driver `{}`", id);
        self.get_driver_by_id(id).context(NotFoundSnafu { kind: EntityKind::Driver, id })
    }

    /// # get team
    /// same as `get_team_by_id` but a miss is an `Error::NotFound`
    pub fn team(&self, id: &str) -> CustomResult<&Team> {
        debug!(target: "modules/store:team", "looking up team `{}`", id);
        self.get_team_by_id(id).context(NotFoundSnafu { kind: EntityKind::Team, id })
    }

    /// # get race
    /// same as `get_race_by_id` but a miss is an `Error::NotFound`
    pub fn race(&self, id: &str) -> CustomResult<&Race> {
        debug!(target: "modules/store:race", "looking up race `{}`", id);
        self.get_race_by_id(id).context(NotFoundSnafu { kind: EntityKind::Race, id })
    }

    /************ RELATIONS ************/
    /// # get drivers by team
    /// the drivers whose `team_id` is `team_id`, in collection order.
    /// this looks at the drivers, not at the roster of the team.
    pub fn get_drivers_by_team(&self, team_id: &str) -> Vec<&Driver> {
        self.drivers
            .iter()
            .filter(|driver| driver.team_id == team_id)
            .collect()
    }

    /// # get races by season
    /// the races of `season`, in collection order
    pub fn get_races_by_season(&self, season: u32) -> Vec<&Race> {
        self.races
            .iter()
            .filter(|race| race.season == season)
            .collect()
    }

    /// the team a driver drives for, `None` when the team id does not resolve
    pub fn team_of(&self, driver: &Driver) -> Option<&Team> {
        self.get_team_by_id(&driver.team_id)
    }

    /// # find driver by display name
    /// race results name drivers instead of referencing them, this is a best
    /// effort match on the exact name and may miss.
    pub fn find_driver_by_name(&self, name: &str) -> Option<&Driver> {
        self.drivers.iter().find(|driver| driver.name == name)
    }

    /// # find team by display name
    /// best effort, see `find_driver_by_name`
    pub fn find_team_by_name(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.name == name)
    }

    /************ SEARCH ************/
    /// drivers whose name, nationality or team name contain `query`
    pub fn filter_drivers(&self, query: &str) -> Vec<&Driver> {
        filter_by_query(&self.drivers, query)
    }

    /// teams whose name, full name or base contain `query`
    pub fn filter_teams(&self, query: &str) -> Vec<&Team> {
        filter_by_query(&self.teams, query)
    }

    /************ SEASONS ************/
    /// # get all seasons
    /// distinct seasons of the races, newest first
    pub fn seasons(&self) -> Vec<u32> {
        let mut seasons: Vec<u32> = self.races.iter().map(|race| race.season).collect();
        seasons.sort_unstable_by(|a, b| b.cmp(a));
        seasons.dedup();

        seasons
    }

    pub fn latest_season(&self) -> Option<u32> {
        self.races.iter().map(|race| race.season).max()
    }

    /// the fastest lap chart of a season, see `fastest_lap_chart`
    pub fn fastest_lap_chart(&self, season: u32) -> Vec<SpeedChartEntry> {
        fastest_lap_chart(&self.get_races_by_season(season))
    }

    /************ REFERENCES ************/
    /// # get loose references
    /// every reference in the dataset that does not resolve. these are
    /// allowed, callers decide whether to only report them or to refuse the
    /// dataset.
    ///
    /// ## Returns
    /// * `Vec<LooseReference>` - drivers first, then team rosters, then races
    pub fn loose_references(&self) -> Vec<LooseReference> {
        let mut loose = Vec::new();

        for driver in &self.drivers {
            if self.team_of(driver).is_none() {
                loose.push(LooseReference::DriverTeam {
                    driver: driver.id.clone(),
                    team_id: driver.team_id.clone(),
                });
            }
        }

        for team in &self.teams {
            for driver_id in &team.drivers {
                if self.get_driver_by_id(driver_id).is_none() {
                    loose.push(LooseReference::RosterDriver {
                        team: team.id.clone(),
                        driver_id: driver_id.clone(),
                    });
                }
            }
        }

        for race in &self.races {
            for result in &race.results {
                if self.find_driver_by_name(&result.driver).is_none() {
                    loose.push(LooseReference::ResultDriver {
                        race: race.id.clone(),
                        driver: result.driver.clone(),
                    });
                }
                if self.find_team_by_name(&result.team).is_none() {
                    loose.push(LooseReference::ResultTeam {
                        race: race.id.clone(),
                        team: result.team.clone(),
                    });
                }
            }

            if let Some(lap) = &race.fastest_lap {
                if self.find_driver_by_name(&lap.driver).is_none() {
                    loose.push(LooseReference::FastestLapDriver {
                        race: race.id.clone(),
                        driver: lap.driver.clone(),
                    });
                }
            }
        }

        loose
    }
}

/// # a reference that does not resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LooseReference {
    DriverTeam { driver: String, team_id: String },
    RosterDriver { team: String, driver_id: String },
    ResultDriver { race: String, driver: String },
    ResultTeam { race: String, team: String },
    FastestLapDriver { race: String, driver: String },
}

impl fmt::Display for LooseReference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LooseReference::DriverTeam { driver, team_id } => {
                write!(f, "driver `{}` drives for unknown team `{}`", driver, team_id)
            }
            LooseReference::RosterDriver { team, driver_id } => {
                write!(f, "team `{}` lists unknown driver `{}`", team, driver_id)
            }
            LooseReference::ResultDriver { race, driver } => {
                write!(f, "race `{}` has a result for unknown driver \"{}\"", race, driver)
            }
            LooseReference::ResultTeam { race, team } => {
                write!(f, "race `{}` has a result for unknown team \"{}\"", race, team)
            }
            LooseReference::FastestLapDriver { race, driver } => {
                write!(f, "race `{}` has a fastest lap by unknown driver \"{}\"", race, driver)
            }
        }
    }
}
