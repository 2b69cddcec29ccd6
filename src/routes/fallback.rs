use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{catch, Request};
use rocket_dyn_templates::{context, Template};
use serde::{Deserialize, Serialize};

use crate::modules::traits::entity::EntityKind;
use crate::TemplateDataLink;

/// # not found page
/// the first path segment decides which list the page links back to,
/// e.g. a miss under `/drivers` shows "Driver Not Found"
#[catch(404)]
pub fn not_found(req: &Request) -> (Status, Template) {
    let kind = req
        .uri()
        .path()
        .segments()
        .next()
        .and_then(EntityKind::from_section);

    let (title, back) = match kind {
        Some(kind) => (
            format!("{} Not Found", capitalize(&kind.to_string())),
            TemplateDataLink {
                href: format!("/{}", kind.section()),
                label: format!("Back to {}", capitalize(kind.section())),
            },
        ),
        None => (
            "Page Not Found".to_string(),
            TemplateDataLink {
                href: "/".to_string(),
                label: "Back to Home".to_string(),
            },
        ),
    };

    (Status::NotFound, Template::render("error", context! {
        title: &title,
        message: format!("Nothing lives at {}.", req.uri().path()),
        back: &back,
    }))
}

#[catch(500)]
pub fn internal_error() -> (Status, Template) {
    (Status::InternalServerError, Template::render("error", context! {
        title: "Something went wrong",
        message: "The page could not be rendered.",
        back: TemplateDataLink {
            href: "/".to_string(),
            label: "Back to Home".to_string(),
        },
    }))
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiError {
    pub error: String,
    pub status: u16,
}

#[catch(404)]
pub fn api_not_found(req: &Request) -> (Status, Json<ApiError>) {
    (Status::NotFound, Json(ApiError {
        error: format!("{} not found", req.uri().path()),
        status: Status::NotFound.code,
    }))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
