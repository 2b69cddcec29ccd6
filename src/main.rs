use rocket::{launch, Build, Rocket};

use grandprix_glance::modules::config::Settings;
use grandprix_glance::modules::helpers::logging::setup_logging;
use grandprix_glance::server::{build, load_store};

#[launch]
fn rocket() -> Rocket<Build> {
    let settings = Settings::from_env();
    setup_logging(&settings).expect("failed to setup logging");

    let store = load_store(&settings).expect("failed to load the dataset");
    build(store)
}
