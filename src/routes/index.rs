use rocket::get;
use rocket::State;
use rocket_dyn_templates::{context, Template};

use crate::modules::store::EntityStore;
use crate::routes::driver::TemplateDataDriverCard;
use crate::routes::race::TemplateDataRace;
use crate::routes::team::TemplateDataTeamCard;

const FEATURED_DRIVERS: usize = 3;
const FEATURED_TEAMS: usize = 3;
const RECENT_RACES: usize = 2;

#[get("/")]
pub fn index(store: &State<EntityStore>) -> Template {
    let drivers: Vec<TemplateDataDriverCard> = store
        .drivers()
        .iter()
        .take(FEATURED_DRIVERS)
        .map(TemplateDataDriverCard::new)
        .collect();

    let teams: Vec<TemplateDataTeamCard> = store
        .teams()
        .iter()
        .take(FEATURED_TEAMS)
        .map(|team| TemplateDataTeamCard::new(store, team))
        .collect();

    let races: Vec<TemplateDataRace> = store
        .races()
        .iter()
        .take(RECENT_RACES)
        .map(|race| TemplateDataRace::new(store, race))
        .collect();

    Template::render("index", context! {
        title: "F1 Performance Portal",
        drivers: &drivers,
        teams: &teams,
        races: &races,
    })
}
