//! First-match-wins keyword scan over the static entries.

use tracing::debug;

use crate::{
    entries::{LOCAL_QA, LocalQaEntry},
    normalize::normalize,
};

/// Keyword matcher with keywords folded once up front.
///
/// Cheap to clone; the entries themselves are `'static`.
#[derive(Debug, Clone)]
pub struct LocalMatcher {
    entries: Vec<(&'static LocalQaEntry, Vec<String>)>,
}

impl LocalMatcher {
    /// Builds a matcher over `entries`, preserving their order.
    pub fn new(entries: &'static [LocalQaEntry]) -> Self {
        let entries = entries
            .iter()
            .map(|e| (e, e.keywords.iter().map(|k| normalize(k)).collect()))
            .collect();
        Self { entries }
    }

    /// Matcher over the built-in [`LOCAL_QA`] table.
    pub fn builtin() -> Self {
        Self::new(LOCAL_QA)
    }

    /// Returns the first entry whose folded keyword occurs in the folded `message`.
    ///
    /// Exact substring containment only, no scoring: an earlier entry wins even
    /// if a later one matches more keywords.
    pub fn find(&self, message: &str) -> Option<&'static LocalQaEntry> {
        let folded = normalize(message);

        let hit = self.entries.iter().find_map(|(entry, keywords)| {
            keywords
                .iter()
                .any(|kw| folded.contains(kw.as_str()))
                .then_some(*entry)
        });

        debug!(
            matched = hit.map(|e| e.id).unwrap_or("-"),
            message_len = message.len(),
            "local lookup"
        );

        hit
    }

    /// Number of entries this matcher scans.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LocalMatcher {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static OVERLAPPING: &[LocalQaEntry] = &[
        LocalQaEntry {
            id: "first",
            keywords: &["vet thuong"],
            answer: "A",
        },
        LocalQaEntry {
            id: "second",
            keywords: &["vết thương sâu", "chảy máu"],
            answer: "B",
        },
    ];

    #[test]
    fn abrasion_without_accents_hits_first_entry() {
        let m = LocalMatcher::builtin();
        let hit = m.find("tray xuoc nhe").expect("should match");
        assert_eq!(hit.id, "trayxuoc_basic");
        assert!(hit.answer.starts_with("Nếu bạn bị trầy xước nhẹ"));
        assert!(hit.answer.contains("5. Băng lại nếu vùng da dễ bị cọ xát."));
    }

    #[test]
    fn accented_and_uppercase_input_matches() {
        let m = LocalMatcher::builtin();
        assert_eq!(m.find("Tôi bị BỎNG MỨC 1 ở tay").map(|e| e.id), Some("bong_muc1"));
        assert_eq!(
            m.find("Lúc nào cần đi bệnh viện?").map(|e| e.id),
            Some("khi_nao_di_benh_vien")
        );
    }

    #[test]
    fn unrelated_message_misses() {
        let m = LocalMatcher::builtin();
        assert!(m.find("da toi bi gi vay").is_none());
        assert!(m.find("").is_none());
    }

    #[test]
    fn earlier_entry_wins_over_better_later_match() {
        let m = LocalMatcher::new(OVERLAPPING);
        let hit = m.find("vết thương sâu và chảy máu").expect("should match");
        assert_eq!(hit.id, "first");
    }

    #[test]
    fn later_entry_used_when_earlier_does_not_match() {
        let m = LocalMatcher::new(OVERLAPPING);
        assert_eq!(m.find("bị chảy máu").map(|e| e.answer), Some("B"));
    }

    #[test]
    fn keyword_must_be_contiguous() {
        let m = LocalMatcher::builtin();
        // both words present but not adjacent
        assert!(m.find("xuoc tray").is_none());
    }

    #[test]
    fn builtin_has_all_entries() {
        assert_eq!(LocalMatcher::builtin().len(), LOCAL_QA.len());
        assert!(!LocalMatcher::default().is_empty());
    }
}
