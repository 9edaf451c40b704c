use crate::core::{Facility, FacilitySource};
use crate::utils::error::LoadError;

/// Result of one load: either the fetched list, or an empty list plus the failure.
#[derive(Debug)]
pub struct LoadOutcome {
    pub facilities: Vec<Facility>,
    pub error: Option<LoadError>,
}

impl LoadOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

pub struct DataLoader<S: FacilitySource> {
    source: S,
}

impl<S: FacilitySource> DataLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches the facility list. Failures of any kind collapse to an empty list.
    pub async fn load(&self) -> LoadOutcome {
        match self.source.fetch_facilities().await {
            Ok(facilities) => {
                tracing::info!("Loaded {} facilities", facilities.len());
                LoadOutcome {
                    facilities,
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!("Loading facilities failed ({:?}): {}", e.kind(), e);
                LoadOutcome {
                    facilities: Vec::new(),
                    error: Some(e),
                }
            }
        }
    }
}
