use rocket::get;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use log::{debug, error};

use crate::macros::lookup::lookup_or_status;
use crate::modules::models::driver::{Driver, DriverMetrics};
use crate::modules::store::EntityStore;

/**************************************************************************************************/
/**************** ROUTES **************************************************************************/
/**************************************************************************************************/

/// # search drivers
/// all drivers whose name, nationality or team contain `q`, every driver without `q`
#[get("/drivers?<q>")]
pub fn search(q: Option<String>, store: &State<EntityStore>) -> Json<Vec<Driver>> {
    let query = q.unwrap_or_default();
    Json(store.filter_drivers(&query).into_iter().cloned().collect())
}

#[get("/drivers/<driver_id>")]
pub fn get_one(driver_id: &str, store: &State<EntityStore>) -> Result<Json<Driver>, Status> {
    let driver = lookup_or_status!(store.driver(driver_id), "routes/api/driver:get_one", "driver");
    Ok(Json(driver.clone()))
}

#[get("/drivers/<driver_id>/metrics")]
pub fn get_metrics(driver_id: &str, store: &State<EntityStore>) -> Result<Json<DriverMetrics>, Status> {
    let driver = lookup_or_status!(store.driver(driver_id), "routes/api/driver:get_metrics", "driver");
    Ok(Json(driver.metrics()))
}
