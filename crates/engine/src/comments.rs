//! Reader comments kept for the lifetime of the session.

use chrono::{DateTime, NaiveDate, Utc};
use opn_docs_types::SortOrder;
use tracing::debug;

/// A single submitted comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: u64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    /// Whether the body is shown under the timestamp.
    pub is_open: bool,
}

/// Comments in submission order plus the order they are displayed in.
///
/// Comments are never deleted, so numbering new entries by count stays
/// unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentList {
    comments: Vec<Comment>,
    sort_order: SortOrder,
}

impl CommentList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two starter comments a fresh portal shows.
    pub fn seeded() -> Self {
        let mut list = Self::new();
        for (text, day) in [("Great documentation!", 1), ("Could use more examples.", 2)] {
            let created_at = NaiveDate::from_ymd_opt(2024, 3, day)
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
                .unwrap_or_default();
            list.add_comment(text, created_at);
        }
        list
    }

    /// Appends a comment unless `text` is blank.
    ///
    /// Returns the id of the new comment. New comments start open.
    pub fn add_comment(&mut self, text: &str, created_at: DateTime<Utc>) -> Option<u64> {
        if text.trim().is_empty() {
            return None;
        }
        let id = self.comments.len() as u64 + 1;
        self.comments.push(Comment {
            id,
            text: text.to_string(),
            created_at,
            is_open: true,
        });
        debug!(id, "comment added");
        Some(id)
    }

    /// Flips the open flag of comment `id`. Unknown ids are ignored.
    pub fn toggle_open(&mut self, id: u64) -> bool {
        match self.comments.iter_mut().find(|comment| comment.id == id) {
            Some(comment) => {
                comment.is_open = !comment.is_open;
                true
            }
            None => false,
        }
    }

    /// All comments ordered by creation time. Ties keep submission order.
    pub fn sorted_view(&self, order: SortOrder) -> Vec<&Comment> {
        let mut view: Vec<&Comment> = self.comments.iter().collect();
        match order {
            SortOrder::Ascending => view.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortOrder::Descending => view.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }
        view
    }

    /// [`CommentList::sorted_view`] in the current display order.
    pub fn view(&self) -> Vec<&Comment> {
        self.sorted_view(self.sort_order)
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Switches between ascending and descending display order.
    pub fn toggle_sort_order(&mut self) -> SortOrder {
        self.sort_order = self.sort_order.toggled();
        self.sort_order
    }

    pub fn get(&self, id: u64) -> Option<&Comment> {
        self.comments.iter().find(|comment| comment.id == id)
    }

    /// Comments in submission order.
    pub fn iter(&self) -> impl Iterator<Item = &Comment> {
        self.comments.iter()
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}
