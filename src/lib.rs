use serde::{Serialize, Deserialize};

pub mod errors;
pub mod modules;
pub mod server;

pub(crate) mod macros {
    pub mod lookup;
}

pub mod routes {
    pub mod index;
    pub mod driver;
    pub mod team;
    pub mod race;
    pub mod fallback;

    pub mod api {
        pub mod driver;
        pub mod team;
        pub mod race;
    }
}


/// chart.js shaped data, embedded in pages with the `toJson` helper
#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataDataset>,
}

#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct ChartDataDataset {
    pub label: String,
    pub data: Vec<f64>,
}

/// a link back to a list page
#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct TemplateDataLink {
    pub href: String,
    pub label: String,
}
