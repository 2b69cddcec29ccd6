use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;

use grandprix_glance::modules::models::driver::{Driver, DriverMetrics};
use grandprix_glance::modules::models::race::{Race, SpeedChartEntry};
use grandprix_glance::modules::models::team::Team;
use grandprix_glance::modules::store::EntityStore;
use grandprix_glance::routes::fallback::ApiError;
use grandprix_glance::server::build;

fn client() -> Client {
    let store = EntityStore::bundled().expect("bundled dataset");
    Client::tracked(build(store)).expect("valid rocket instance")
}

fn ids<T, F: Fn(&T) -> &str>(items: &[T], id: F) -> Vec<String> {
    items.iter().map(|item| id(item).to_string()).collect()
}

#[test]
fn drivers_match_the_store() {
    let client = client();
    let store = EntityStore::bundled().unwrap();

    let response = client.get("/api/drivers").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::JSON));

    let drivers: Vec<Driver> = response.into_json().unwrap();
    assert_eq!(drivers, store.drivers().to_vec());
}

#[test]
fn driver_search() {
    let client = client();

    let drivers: Vec<Driver> = client.get("/api/drivers?q=brit").dispatch().into_json().unwrap();
    assert_eq!(ids(&drivers, |d| d.id.as_str()), vec!["hamilton", "norris", "russell"]);

    let drivers: Vec<Driver> = client.get("/api/drivers?q=FERRARI").dispatch().into_json().unwrap();
    let found = ids(&drivers, |d| d.id.as_str());
    assert!(found.contains(&"leclerc".to_string()));
    assert!(!found.contains(&"hamilton".to_string()));

    let drivers: Vec<Driver> = client.get("/api/drivers?q=zzz").dispatch().into_json().unwrap();
    assert!(drivers.is_empty());
}

#[test]
fn single_driver_and_metrics() {
    let client = client();

    let response = client.get("/api/drivers/verstappen").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let driver: Driver = response.into_json().unwrap();
    assert_eq!(driver.name, "Max Verstappen");

    let response = client.get("/api/drivers/hamilton/metrics").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let metrics: DriverMetrics = response.into_json().unwrap();
    assert_eq!(metrics.podium_rate, 197.0);
    assert_eq!(metrics.win_rate_label, "34.3");
}

#[test]
fn unknown_driver_has_a_json_error() {
    let client = client();

    for uri in ["/api/drivers/nonexistent", "/api/drivers/nonexistent/metrics"] {
        let response = client.get(uri).dispatch();
        assert_eq!(response.status(), Status::NotFound);
        assert_eq!(response.content_type(), Some(ContentType::JSON));

        let error: ApiError = response.into_json().unwrap();
        assert_eq!(error.status, 404);
        assert!(error.error.contains("nonexistent"));
    }
}

#[test]
fn teams() {
    let client = client();

    let teams: Vec<Team> = client.get("/api/teams?q=woking").dispatch().into_json().unwrap();
    assert_eq!(ids(&teams, |t| t.id.as_str()), vec!["mclaren"]);

    let team: Team = client.get("/api/teams/red-bull").dispatch().into_json().unwrap();
    assert_eq!(team.world_championships, 6);

    let response = client.get("/api/teams/nonexistent").dispatch();
    assert_eq!(response.status(), Status::NotFound);
}

#[test]
fn team_drivers() {
    let client = client();

    let drivers: Vec<Driver> = client.get("/api/teams/mercedes/drivers").dispatch().into_json().unwrap();
    assert_eq!(ids(&drivers, |d| d.id.as_str()), vec!["hamilton", "russell"]);

    let response = client.get("/api/teams/nonexistent/drivers").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let drivers: Vec<Driver> = response.into_json().unwrap();
    assert!(drivers.is_empty());
}

#[test]
fn team_drivers_without_a_team_record() {
    let bundled = EntityStore::bundled().unwrap();
    let mut drivers = bundled.drivers().to_vec();
    for driver in drivers.iter_mut().filter(|driver| driver.id == "sainz") {
        driver.team_id = "williams".to_string();
    }
    let store = EntityStore::new(drivers, bundled.teams().to_vec(), bundled.races().to_vec()).unwrap();
    let client = Client::tracked(build(store)).expect("valid rocket instance");

    let response = client.get("/api/teams/williams/drivers").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let drivers: Vec<Driver> = response.into_json().unwrap();
    assert_eq!(ids(&drivers, |d| d.id.as_str()), vec!["sainz"]);

    let response = client.get("/api/teams/williams").dispatch();
    assert_eq!(response.status(), Status::NotFound);
}

#[test]
fn races_and_seasons() {
    let client = client();

    let races: Vec<Race> = client.get("/api/races").dispatch().into_json().unwrap();
    assert_eq!(ids(&races, |r| r.id.as_str()), vec!["bahrain-2024", "jeddah-2024"]);

    let races: Vec<Race> = client.get("/api/races?season=2024").dispatch().into_json().unwrap();
    assert_eq!(races.len(), 2);

    let races: Vec<Race> = client.get("/api/races?season=1950").dispatch().into_json().unwrap();
    assert!(races.is_empty());

    let race: Race = client.get("/api/races/jeddah-2024").dispatch().into_json().unwrap();
    assert_eq!(race.round, 2);

    let response = client.get("/api/races/nonexistent").dispatch();
    assert_eq!(response.status(), Status::NotFound);

    let seasons: Vec<u32> = client.get("/api/seasons").dispatch().into_json().unwrap();
    assert_eq!(seasons, vec![2024]);
}

#[test]
fn fastest_laps_of_a_season() {
    let client = client();

    let chart: Vec<SpeedChartEntry> = client
        .get("/api/seasons/2024/fastest-laps")
        .dispatch()
        .into_json()
        .unwrap();
    let names: Vec<&str> = chart.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, vec!["Bahrain", "Saudi Arabian"]);
    assert_eq!(chart[1].bar_percent, 100.0);

    let chart: Vec<SpeedChartEntry> = client
        .get("/api/seasons/1950/fastest-laps")
        .dispatch()
        .into_json()
        .unwrap();
    assert!(chart.is_empty());
}
