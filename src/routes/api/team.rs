use rocket::get;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use log::{debug, error};

use crate::macros::lookup::lookup_or_status;
use crate::modules::models::driver::Driver;
use crate::modules::models::team::Team;
use crate::modules::store::EntityStore;

/// # search teams
/// all teams whose name, full name or base contain `q`, every team without `q`
#[get("/teams?<q>")]
pub fn search(q: Option<String>, store: &State<EntityStore>) -> Json<Vec<Team>> {
    let query = q.unwrap_or_default();
    Json(store.filter_teams(&query).into_iter().cloned().collect())
}

#[get("/teams/<team_id>")]
pub fn get_one(team_id: &str, store: &State<EntityStore>) -> Result<Json<Team>, Status> {
    let team = lookup_or_status!(store.team(team_id), "routes/api/team:get_one", "team");
    Ok(Json(team.clone()))
}

/// # drivers of a team
/// the drivers whose team id is `team_id`, empty when none match.
/// team ids on drivers are loose, `team_id` does not have to name a team.
#[get("/teams/<team_id>/drivers")]
pub fn get_drivers(team_id: &str, store: &State<EntityStore>) -> Json<Vec<Driver>> {
    Json(store.get_drivers_by_team(team_id).into_iter().cloned().collect())
}
