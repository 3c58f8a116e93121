//! Presentation of extracted listings
//!
//! This module handles:
//! - Rendering listings for the terminal, with hyperlinked names
//! - Rendering listings as JSON
//! - Opening the Nth entry of a listing in the default browser

mod browser;
mod terminal;

pub use browser::{open_in_browser, open_nth, resolve_nth};
pub use terminal::{
    hyperlink, print_developers, print_repositories, render_developers, render_repositories,
    truncate, DESCRIPTION_WIDTH,
};

use crate::dispatch::Listings;
use crate::Result;
use serde::Serialize;

/// Renders a value as one pretty-printed JSON document
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Prints every fetched section for the terminal, repositories first
pub fn print_listings(listings: &Listings) {
    if let Some(repos) = &listings.repositories {
        print_repositories(repos);
    }
    if let Some(devs) = &listings.developers {
        if listings.repositories.is_some() {
            println!();
        }
        print_developers(devs);
    }
}
