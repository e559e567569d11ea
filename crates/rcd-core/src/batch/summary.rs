//! Final batch summary.

use crate::classify::ContentCategory;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    /// No category was enabled, so nothing was searched for.
    NothingSelected,
    /// Zero downloads; lists the enabled categories that were searched.
    NoneFound {
        searched: Vec<ContentCategory>,
        collection: String,
    },
    /// Some but fewer than requested.
    Partial { missing: usize, requested: usize },
    Complete { requested: usize },
}

impl Summary {
    pub fn is_complete(&self) -> bool {
        matches!(self, Summary::Complete { .. })
    }
}

/// "a", "a or b", "a, b or c".
fn join_names(categories: &[ContentCategory]) -> String {
    let names: Vec<&str> = categories.iter().map(|c| c.plural()).collect();
    match names.split_last() {
        None => String::new(),
        Some((last, [])) => (*last).to_string(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Summary::NothingSelected => {
                write!(f, "No content types were selected, nothing was downloaded.")
            }
            Summary::NoneFound {
                searched,
                collection,
            } => write!(
                f,
                "Sorry, no {} were found in r/{}",
                join_names(searched),
                collection
            ),
            Summary::Partial { missing, requested } => write!(
                f,
                "Finished! {missing}/{requested} links were unknown and could not be downloaded"
            ),
            Summary::Complete { requested } => {
                write!(f, "Finished! Downloaded {requested}/{requested} posts.")
            }
        }
    }
}
