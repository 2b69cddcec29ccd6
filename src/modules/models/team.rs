use serde::{Deserialize, Serialize};

use crate::modules::traits::entity::{Entity, EntityKind};
use crate::modules::traits::searchable::Searchable;

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub full_name: String,
    pub base: String,
    pub team_chief: String,
    pub technical_chief: String,
    pub chassis: String,
    pub power_unit: String,
    pub first_team_entry: u32,
    pub world_championships: u32,
    pub highest_race_finish: RaceFinish,
    pub pole_positions: u32,
    pub fastest_laps: u32,
    pub logo_url: String,
    pub color: String,
    /// driver ids, these are not kept in sync with `Driver::team_id`
    pub drivers: Vec<String>,
    pub cars: Vec<Car>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Copy)]
pub struct RaceFinish {
    pub position: u32,
    pub year: u32,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub year: u32,
    pub model: String,
    pub image_url: String,
}

impl Entity for Team {
    const KIND: EntityKind = EntityKind::Team;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Team {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.full_name, &self.base]
    }
}
