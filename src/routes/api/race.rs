use rocket::get;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use log::{debug, error};

use crate::macros::lookup::lookup_or_status;
use crate::modules::models::race::{Race, SpeedChartEntry};
use crate::modules::store::EntityStore;

/// # races
/// every race, or the races of `season` when given
#[get("/races?<season>")]
pub fn get_all(season: Option<u32>, store: &State<EntityStore>) -> Json<Vec<Race>> {
    let races = match season {
        Some(season) => store.get_races_by_season(season).into_iter().cloned().collect(),
        None => store.races().to_vec(),
    };

    Json(races)
}

#[get("/races/<race_id>")]
pub fn get_one(race_id: &str, store: &State<EntityStore>) -> Result<Json<Race>, Status> {
    let race = lookup_or_status!(store.race(race_id), "routes/api/race:get_one", "race");
    Ok(Json(race.clone()))
}

/// distinct seasons, newest first
#[get("/seasons")]
pub fn get_seasons(store: &State<EntityStore>) -> Json<Vec<u32>> {
    Json(store.seasons())
}

#[get("/seasons/<season>/fastest-laps")]
pub fn get_fastest_laps(season: u32, store: &State<EntityStore>) -> Json<Vec<SpeedChartEntry>> {
    Json(store.fastest_lap_chart(season))
}
