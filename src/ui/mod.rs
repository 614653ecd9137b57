//! Server-side rendering of the portfolio page.

pub mod layout;
pub mod scripts;

use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use dioxus::prelude::*;

use crate::api::AppState;
use crate::app::Portfolio;
use layout::Layout;

/// GET / - The portfolio, rendered with the configured content
pub async fn portfolio_page(State(state): State<AppState>) -> impl IntoResponse {
    let content = state.config.site.clone();
    let title = content.title.clone();
    let html = dioxus::ssr::render_element(rsx! {
        Layout { title,
            Portfolio { content }
        }
    });
    Html(format!("<!DOCTYPE html>\n<html lang=\"fr\">\n{}</html>", html))
}
