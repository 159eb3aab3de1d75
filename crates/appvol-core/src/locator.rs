//! First-match session selection

use std::collections::BTreeSet;

use tracing::debug;

/// Pick the first session owned by a member of `family`
///
/// `sessions` is the platform's enumeration of (owning pid, session handle)
/// pairs, in endpoint order. No fallback to other endpoints and no retry;
/// `None` simply means "no audio session".
pub fn find_session<T>(
    sessions: impl IntoIterator<Item = (u32, T)>,
    family: &BTreeSet<u32>,
) -> Option<T> {
    for (pid, session) in sessions {
        if family.contains(&pid) {
            debug!(pid, "Matched audio session");
            return Some(session);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_wins() {
        let family = BTreeSet::from([10, 11]);
        let sessions = vec![(5, "other"), (11, "first"), (10, "second")];

        assert_eq!(find_session(sessions, &family), Some("first"));
    }

    #[test]
    fn no_match_is_none() {
        let family = BTreeSet::from([10]);
        let sessions = vec![(5, "a"), (6, "b")];

        assert_eq!(find_session(sessions, &family), None);
    }

    #[test]
    fn empty_session_list_is_none() {
        let family = BTreeSet::from([10]);
        let sessions: Vec<(u32, &str)> = vec![];

        assert_eq!(find_session(sessions, &family), None);
    }
}
