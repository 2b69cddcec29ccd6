// rocket imports
use rocket::get;
use rocket::http::Status;
use rocket::State;
use rocket_dyn_templates::{context, Template};
use serde::Serialize;
use log::{debug, error};

use crate::macros::lookup::lookup_or_status;
use crate::modules::models::driver::Driver;
use crate::modules::models::team::Team;
use crate::modules::store::EntityStore;


#[get("/?<q>")]
pub fn list(q: Option<String>, store: &State<EntityStore>) -> Template {
    let query = q.unwrap_or_default();

    let teams: Vec<TemplateDataTeamCard> = store
        .filter_teams(&query)
        .into_iter()
        .map(|team| TemplateDataTeamCard::new(store, team))
        .collect();

    Template::render("teams", context! {
        title: "F1 Teams",
        query: &query,
        has_results: !teams.is_empty(),
        teams: &teams,
    })
}

#[get("/<team_id>")]
pub fn single(team_id: &str, store: &State<EntityStore>) -> Result<Template, Status> {
    let team = lookup_or_status!(store.team(team_id), "routes/team:single", "team");

    Ok(Template::render("team", context! {
        title: &team.name,
        team: team,
        drivers: store.get_drivers_by_team(&team.id),
    }))
}

/// a team as shown in a card, with the drivers that drive for it
#[derive(Serialize)]
pub struct TemplateDataTeamCard<'a> {
    pub team: &'a Team,
    pub drivers: Vec<&'a Driver>,
}

impl<'a> TemplateDataTeamCard<'a> {
    pub fn new(store: &'a EntityStore, team: &'a Team) -> TemplateDataTeamCard<'a> {
        TemplateDataTeamCard {
            team,
            drivers: store.get_drivers_by_team(&team.id),
        }
    }
}
