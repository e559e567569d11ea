//! Mutable batch bookkeeping, owned by the runner for the length of one run.

use super::{BatchRequest, CategorySelection, Summary};

/// `AwaitingInput → Fetching → Summarizing → Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPhase {
    AwaitingInput,
    Fetching,
    Summarizing,
    Done,
}

#[derive(Debug, Clone)]
pub struct BatchState {
    phase: BatchPhase,
    requested: usize,
    selection: CategorySelection,
    downloaded: usize,
    failed: usize,
    considered: usize,
}

impl BatchState {
    pub fn new(request: &BatchRequest) -> Self {
        Self {
            phase: BatchPhase::AwaitingInput,
            requested: request.count.get(),
            selection: request.selection,
            downloaded: 0,
            failed: 0,
            considered: 0,
        }
    }

    pub fn phase(&self) -> BatchPhase {
        self.phase
    }

    pub fn begin_fetching(&mut self) {
        debug_assert_eq!(self.phase, BatchPhase::AwaitingInput);
        self.phase = BatchPhase::Fetching;
    }

    pub fn record_considered(&mut self) {
        self.considered += 1;
    }

    pub fn record_success(&mut self) {
        self.downloaded += 1;
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    pub fn is_complete(&self) -> bool {
        self.downloaded >= self.requested
    }

    /// Downloads so far as a fraction of the requested count.
    pub fn fraction(&self) -> f64 {
        self.downloaded as f64 / self.requested as f64
    }

    pub fn requested(&self) -> usize {
        self.requested
    }

    pub fn downloaded(&self) -> usize {
        self.downloaded
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn considered(&self) -> usize {
        self.considered
    }

    /// Moves to `Summarizing` and builds the outcome message.
    pub fn summarize(&mut self, collection: &str) -> Summary {
        self.phase = BatchPhase::Summarizing;
        let searched = self.selection.enabled();
        if self.downloaded == 0 {
            if searched.is_empty() {
                Summary::NothingSelected
            } else {
                Summary::NoneFound {
                    searched,
                    collection: collection.to_string(),
                }
            }
        } else if self.downloaded < self.requested {
            Summary::Partial {
                missing: self.requested - self.downloaded,
                requested: self.requested,
            }
        } else {
            Summary::Complete {
                requested: self.requested,
            }
        }
    }

    pub fn finish(&mut self) {
        self.phase = BatchPhase::Done;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ContentCategory;
    use std::num::NonZeroUsize;

    fn request(count: usize, selection: CategorySelection) -> BatchRequest {
        BatchRequest {
            collection: "testsub".to_string(),
            selection,
            count: NonZeroUsize::new(count).unwrap(),
        }
    }

    #[test]
    fn phases_advance_in_order() {
        let mut state = BatchState::new(&request(1, CategorySelection::all()));
        assert_eq!(state.phase(), BatchPhase::AwaitingInput);
        state.begin_fetching();
        assert_eq!(state.phase(), BatchPhase::Fetching);
        state.summarize("testsub");
        assert_eq!(state.phase(), BatchPhase::Summarizing);
        state.finish();
        assert_eq!(state.phase(), BatchPhase::Done);
    }

    #[test]
    fn completes_at_requested_count() {
        let mut state = BatchState::new(&request(2, CategorySelection::all()));
        state.record_success();
        assert!(!state.is_complete());
        assert!((state.fraction() - 0.5).abs() < 1e-9);
        state.record_success();
        assert!(state.is_complete());
        assert_eq!(state.summarize("testsub"), Summary::Complete { requested: 2 });
    }

    #[test]
    fn partial_summary_counts_missing() {
        let mut state = BatchState::new(&request(5, CategorySelection::all()));
        state.record_success();
        state.record_success();
        assert_eq!(
            state.summarize("testsub"),
            Summary::Partial {
                missing: 3,
                requested: 5
            }
        );
    }

    #[test]
    fn none_found_names_enabled_categories_only() {
        let selection = CategorySelection {
            pictures: true,
            gifs: false,
            videos: true,
        };
        let mut state = BatchState::new(&request(3, selection));
        assert_eq!(
            state.summarize("testsub"),
            Summary::NoneFound {
                searched: vec![ContentCategory::Picture, ContentCategory::HostedVideo],
                collection: "testsub".to_string(),
            }
        );
    }

    #[test]
    fn nothing_selected() {
        let mut state = BatchState::new(&request(3, CategorySelection::default()));
        assert_eq!(state.summarize("testsub"), Summary::NothingSelected);
    }
}
