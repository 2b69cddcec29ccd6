use log::{error, info, warn};
use std::process::exit;

use grandprix_glance::modules::config::Settings;
use grandprix_glance::modules::helpers::logging::setup_logging;
use grandprix_glance::modules::store::EntityStore;

fn main() {
    let settings = Settings::from_env();
    setup_logging(&settings).expect("failed to setup logging");

    let store = match &settings.dataset_path {
        Some(path) => EntityStore::from_file(path),
        None => EntityStore::bundled(),
    };

    let store = match store {
        Ok(store) => store,
        Err(err) => {
            error!(target:"check_references", "failed loading the dataset. ({})", err);
            exit(2);
        }
    };

    info!(target:"check_references", "{} drivers, {} teams, {} races",
        store.drivers().len(), store.teams().len(), store.races().len());

    let loose = store.loose_references();
    for reference in &loose {
        warn!(target:"check_references", "{}", reference);
    }

    if loose.is_empty() {
        info!(target:"check_references", "every reference resolves");
    } else {
        info!(target:"check_references", "{} loose references", loose.len());
        if settings.strict_references {
            exit(1);
        }
    }
}
