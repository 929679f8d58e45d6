//! Derived-field algorithms applied while a record is validated.
//!
//! - [`reconstruct_abstract`] turns the API's word-to-positions inverted index back into text.
//! - [`parse_date`] reads a `YYYY-MM-DD` string as a calendar day. The resulting
//!   [`NaiveDate`] has no time-zone component, so reading its year, month or day can never be
//!   shifted by the host's local offset. [`utc_midnight`] anchors it to an instant when one is
//!   needed.
//!
//! # Examples
//!
//! ```
//! use alexandria::derive::reconstruct_abstract;
//!
//! let index = [("a", &[0_u64, 2][..]), ("b", &[1][..])];
//! assert_eq!(reconstruct_abstract(index).as_deref(), Some("a b a"));
//! ```

use super::*;

/// Rebuilds text from an inverted index.
///
/// Every (position, word) pair is flattened out of the index, stably sorted by position and joined
/// with single spaces; the result is trimmed. Words sharing a position keep the order in which the
/// index yields them, which for a [`serde_json::Map`] is ascending key order. Returns `None` when
/// the index is empty or reconstructs to blank text.
pub fn reconstruct_abstract<'a, P>(index: impl IntoIterator<Item = (&'a str, P)>) -> Option<String>
where P: AsRef<[u64]> {
  let mut words: Vec<(u64, &str)> = Vec::new();
  for (word, positions) in index {
    words.extend(positions.as_ref().iter().map(|&position| (position, word)));
  }
  words.sort_by_key(|&(position, _)| position);

  let text = words.into_iter().map(|(_, word)| word).collect::<Vec<_>>().join(" ");
  let text = text.trim();
  (!text.is_empty()).then(|| text.to_string())
}

/// Parses a calendar day from an ISO-8601 date string.
///
/// Accepts exactly `YYYY-MM-DD`. A full timestamp (`YYYY-MM-DDTHH:MM:SS...`) is accepted as well
/// and truncated to the day it was written with; no offset is applied.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
  let day = match text.len() {
    10 => text,
    n if n > 10 && text.as_bytes()[10] == b'T' => &text[..10],
    _ => return None,
  };
  let bytes = day.as_bytes();
  if bytes[4] != b'-' || bytes[7] != b'-' {
    return None;
  }
  if !day.bytes().enumerate().all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit()) {
    return None;
  }
  NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// The first instant of `date` in UTC.
pub fn utc_midnight(date: NaiveDate) -> DateTime<Utc> {
  Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// Lineage used when an institution reports no parents: the institution itself.
pub(crate) fn lineage_fallback(id: &Value) -> Value { Value::Array(vec![id.clone()]) }

/// Appends `id` to a reported lineage that leaves it out. Returns whether it was added.
pub(crate) fn ensure_lineage_member(lineage: &mut Vec<Value>, id: &Value) -> bool {
  if lineage.contains(id) {
    return false;
  }
  lineage.push(id.clone());
  true
}
