//! List items to native bullets.
//!
//! Items are merged into groups and each group is bulletized with one
//! request. Bulletizing consumes the leading tabs inside the group, so every
//! later group is shifted left by the tabs of the groups before it.

use crate::model::ListItemRange;
use crate::text::TabIndex;

use super::types::Request;

/// A maximal run of list items bulletized together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListGroup {
    pub ordered: bool,
    pub start: usize,
    pub end: usize,
}

/// Merges items into groups.
///
/// An item joins the running group when it has the same `ordered` flag and
/// starts at or before the group's current end. This is a numeric test, so
/// an item that lies inside an earlier group's span also joins it.
pub fn group_list_items(items: &[ListItemRange]) -> Vec<ListGroup> {
    let mut groups: Vec<ListGroup> = Vec::new();

    for item in items {
        match groups.last_mut() {
            Some(group) if group.ordered == item.ordered && item.start <= group.end => {
                group.end = group.end.max(item.end);
            }
            _ => groups.push(ListGroup {
                ordered: item.ordered,
                start: item.start,
                end: item.end,
            }),
        }
    }

    groups
}

/// Emits one bulletizing request per group, left to right.
///
/// The range drops the group's trailing newline.
pub fn bullet_requests(plain_text: &str, items: &[ListItemRange]) -> Vec<Request> {
    let mut requests = Vec::new();
    let mut tab_offset = 0;
    let tab_index = TabIndex::new(plain_text);

    for group in group_list_items(items) {
        let tabs = tab_index.between(group.start, group.end);
        let start = group.start.saturating_sub(tab_offset);
        let end = group.end.saturating_sub(1 + tab_offset).max(start);
        requests.push(Request::create_bullets(start, end, group.ordered));
        tab_offset += tabs;
    }

    requests
}
