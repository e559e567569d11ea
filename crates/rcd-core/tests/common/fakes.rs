//! In-test collaborators: a scripted listing source and a recording extractor.

use rcd_core::candidate::Candidate;
use rcd_core::extract::{ExtractError, VideoExtractor};
use rcd_core::listing::{ListingError, ListingSource, TimeWindow};
use std::cell::{Cell, RefCell};
use std::path::Path;

pub enum ListingBehavior {
    Candidates(Vec<Candidate>),
    InvalidCollection,
    HttpStatus(u32),
}

pub struct FakeListing {
    behavior: ListingBehavior,
    requested_limit: Cell<Option<usize>>,
}

impl FakeListing {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self::with_behavior(ListingBehavior::Candidates(candidates))
    }

    pub fn with_behavior(behavior: ListingBehavior) -> Self {
        Self {
            behavior,
            requested_limit: Cell::new(None),
        }
    }

    pub fn requested_limit(&self) -> Option<usize> {
        self.requested_limit.get()
    }
}

impl ListingSource for FakeListing {
    fn top(
        &self,
        collection: &str,
        _window: TimeWindow,
        limit: usize,
    ) -> Result<Vec<Candidate>, ListingError> {
        self.requested_limit.set(Some(limit));
        match &self.behavior {
            ListingBehavior::Candidates(c) => Ok(c.iter().take(limit).cloned().collect()),
            ListingBehavior::InvalidCollection => Err(ListingError::InvalidCollection {
                collection: collection.to_string(),
                reason: "HTTP 404".to_string(),
            }),
            ListingBehavior::HttpStatus(status) => Err(ListingError::Http(*status)),
        }
    }
}

/// Records requested URLs; on success writes `video-<n>.mp4` into the directory.
#[derive(Default)]
pub struct FakeExtractor {
    calls: RefCell<Vec<String>>,
    fail: bool,
}

impl FakeExtractor {
    pub fn failing() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl VideoExtractor for FakeExtractor {
    fn extract(&self, url: &str, dir: &Path) -> Result<(), ExtractError> {
        self.calls.borrow_mut().push(url.to_string());
        if self.fail {
            return Err(ExtractError::Failed {
                status: "exit status: 1".to_string(),
                message: "ERROR: video unavailable".to_string(),
            });
        }
        let n = self.calls.borrow().len();
        std::fs::write(dir.join(format!("video-{n}.mp4")), b"video").map_err(|source| {
            ExtractError::Spawn {
                program: "fake".to_string(),
                source,
            }
        })
    }
}
