//! Mapping command-line flags onto listings to fetch and show
//!
//! Repositories are the default section. Selecting both sections prints
//! both, repositories first. A position turns the run into "open that
//! entry" and suppresses listing output; with both sections selected the
//! repository listing is the one navigated.

use crate::trending::{TrendingClient, TrendingDeveloper, TrendingRepository, TrendingRequest};
use serde::Serialize;

/// One of the two trending pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Repositories,
    Developers,
}

/// What a run of the binary does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print these sections, in order
    List(Vec<Section>),

    /// Open the entry at the 1-indexed `position` of `section`
    Open { section: Section, position: usize },
}

/// Chooses the action for the `--repo`/`--dev` flags and optional position
pub fn plan(repo: bool, dev: bool, goto: Option<usize>) -> Action {
    let mut sections = Vec::new();
    if repo || !dev {
        sections.push(Section::Repositories);
    }
    if dev {
        sections.push(Section::Developers);
    }

    match goto {
        Some(position) if repo || !dev => Action::Open {
            section: Section::Repositories,
            position,
        },
        Some(position) => Action::Open {
            section: Section::Developers,
            position,
        },
        None => Action::List(sections),
    }
}

/// Every fetched section of one run
///
/// Serializes as a single JSON object; sections that were not requested
/// are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Listings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repositories: Option<Vec<TrendingRepository>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub developers: Option<Vec<TrendingDeveloper>>,
}

impl Listings {
    /// Fetches each requested section in order
    pub async fn fetch(
        client: &TrendingClient,
        sections: &[Section],
        request: &TrendingRequest,
    ) -> Self {
        let mut listings = Self::default();
        for section in sections {
            match section {
                Section::Repositories => {
                    listings.repositories = Some(client.repositories(request).await);
                }
                Section::Developers => {
                    listings.developers = Some(client.developers(request).await);
                }
            }
        }
        listings
    }
}
