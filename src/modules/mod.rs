pub mod config;
pub mod store;

pub mod models {
    pub mod driver;
    pub mod team;
    pub mod race;
}

pub mod traits {
    pub mod entity;
    pub mod searchable;
}

pub mod helpers {
    pub mod logging;
    pub mod math;

    pub mod handelbars {
        pub mod check_params;
        pub mod format_date;
        pub mod position_badge;
        pub mod to_json;
    }
}
