// rocket imports
use rocket::get;
use rocket::http::Status;
use rocket::State;
use rocket_dyn_templates::{context, Template};
use serde::Serialize;
use log::{debug, error};

use crate::macros::lookup::lookup_or_status;
use crate::modules::models::driver::{Driver, DriverMetrics};
use crate::modules::models::team::Team;
use crate::modules::store::EntityStore;


#[get("/?<q>")]
pub fn list(q: Option<String>, store: &State<EntityStore>) -> Template {
    let query = q.unwrap_or_default();

    let drivers: Vec<TemplateDataDriverCard> = store
        .filter_drivers(&query)
        .into_iter()
        .map(TemplateDataDriverCard::new)
        .collect();

    Template::render("drivers", context! {
        title: "F1 Drivers",
        query: &query,
        has_results: !drivers.is_empty(),
        drivers: &drivers,
    })
}

#[get("/<driver_id>")]
pub fn single(driver_id: &str, store: &State<EntityStore>) -> Result<Template, Status> {
    let driver = lookup_or_status!(store.driver(driver_id), "routes/driver:single", "driver");
    // the team id is a loose reference, the cars tab stays empty when it misses
    let team = store.team_of(driver);

    let data = TemplateDataDriver {
        title: &driver.name,
        driver,
        headline: driver.career_highlights.first().map(String::as_str),
        metrics: driver.metrics(),
        team,
    };

    Ok(Template::render("driver", data))
}

/// a driver as shown in a card on the list and home pages
#[derive(Serialize)]
pub struct TemplateDataDriverCard<'a> {
    pub driver: &'a Driver,
    pub headline: Option<&'a str>,
}

impl<'a> TemplateDataDriverCard<'a> {
    pub fn new(driver: &'a Driver) -> TemplateDataDriverCard<'a> {
        TemplateDataDriverCard {
            driver,
            headline: driver.career_highlights.first().map(String::as_str),
        }
    }
}

#[derive(Serialize)]
struct TemplateDataDriver<'a> {
    title: &'a str,
    driver: &'a Driver,
    headline: Option<&'a str>,
    metrics: DriverMetrics,
    team: Option<&'a Team>,
}
