use log::{info, warn};
use rocket::fs::{relative, FileServer};
use rocket::{catchers, routes, Build, Rocket};
use rocket_dyn_templates::Template;

use crate::errors::{CustomResult, LooseReferencesSnafu};
use crate::modules::config::Settings;
use crate::modules::helpers::handelbars::format_date::FormatDateHelper;
use crate::modules::helpers::handelbars::position_badge::PositionBadge;
use crate::modules::helpers::handelbars::to_json::ToJson;
use crate::modules::store::EntityStore;
use crate::routes::{api, driver, fallback, index, race, team};

/// # load the store
/// load the dataset named by the settings, or the bundled one.
/// loose references are logged, with `strict_references` they fail the load.
///
/// ## Arguments
/// * `settings` - the application settings
///
/// ## Returns
/// * `EntityStore` - the loaded store
pub fn load_store(settings: &Settings) -> CustomResult<EntityStore> {
    let store = match &settings.dataset_path {
        Some(path) => {
            info!(target: "server:load_store", "loading dataset from {}", path.display());
            EntityStore::from_file(path)?
        }
        None => EntityStore::bundled()?,
    };

    let loose = store.loose_references();
    for reference in &loose {
        warn!(target: "server:load_store", "loose reference: {}", reference);
    }

    if settings.strict_references && !loose.is_empty() {
        return LooseReferencesSnafu { count: loose.len() }.fail();
    }

    Ok(store)
}

/// # build the web server
/// pages are mounted at the root, the json api under `/api`
pub fn build(store: EntityStore) -> Rocket<Build> {
    rocket::build()
        .manage(store)
        .attach(Template::custom(|engines| {
            engines.handlebars.register_helper("formatDate", Box::new(FormatDateHelper));
            engines.handlebars.register_helper("positionBadge", Box::new(PositionBadge));
            engines.handlebars.register_helper("toJson", Box::new(ToJson));
            engines.handlebars.set_strict_mode(true);
        }))
        .mount("/", routes![index::index])
        .mount("/drivers", routes![
            driver::list,
            driver::single,
        ])
        .mount("/teams", routes![
            team::list,
            team::single,
        ])
        .mount("/races", routes![
            race::list,
        ])
        .mount("/api", routes![
            // drivers
            api::driver::search,
            api::driver::get_one,
            api::driver::get_metrics,
            // teams
            api::team::search,
            api::team::get_one,
            api::team::get_drivers,
            // races
            api::race::get_all,
            api::race::get_one,
            api::race::get_seasons,
            api::race::get_fastest_laps,
        ])
        .mount("/static", FileServer::from(relative!("static")))
        .register("/", catchers![fallback::not_found, fallback::internal_error])
        .register("/api", catchers![fallback::api_not_found])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use std::path::PathBuf;

    #[test]
    fn bundled_store_loads_without_strict_references() {
        let store = load_store(&Settings::default()).unwrap();
        assert_eq!(store.drivers().len(), 6);
    }

    #[test]
    fn strict_references_refuse_the_bundled_dataset() {
        let settings = Settings {
            strict_references: true,
            ..Settings::default()
        };

        match load_store(&settings) {
            Err(Error::LooseReferences { count }) => assert_eq!(count, 5),
            other => panic!("expected loose references, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn missing_dataset_file() {
        let settings = Settings {
            dataset_path: Some(PathBuf::from("/nonexistent/dataset.json")),
            ..Settings::default()
        };
        assert!(matches!(load_store(&settings), Err(Error::ReadDataset { .. })));
    }
}
