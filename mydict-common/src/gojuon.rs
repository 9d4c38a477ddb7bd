//! Reading-based ordering of dictionary terms
//!
//! Terms are listed in two modes:
//! - sorted: one flat list, ascending on the effective sort key
//! - grouped: bucketed by the gojūon row of the reading's first character
//!
//! Keyword filtering always runs before either mode. Nothing here touches the
//! store; callers pass in whatever the store returned, in its natural order.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::model::Term;

/// Gojūon row bucket for a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GojuonGroup {
    A,
    Ka,
    Sa,
    Ta,
    Na,
    Ha,
    Ma,
    Ya,
    Ra,
    Wa,
    /// No reading, or a first character outside the table
    Other,
}

impl GojuonGroup {
    /// All buckets in display order, catch-all last
    pub const ALL: [GojuonGroup; 11] = [
        GojuonGroup::A,
        GojuonGroup::Ka,
        GojuonGroup::Sa,
        GojuonGroup::Ta,
        GojuonGroup::Na,
        GojuonGroup::Ha,
        GojuonGroup::Ma,
        GojuonGroup::Ya,
        GojuonGroup::Ra,
        GojuonGroup::Wa,
        GojuonGroup::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GojuonGroup::A => "あ行",
            GojuonGroup::Ka => "か行",
            GojuonGroup::Sa => "さ行",
            GojuonGroup::Ta => "た行",
            GojuonGroup::Na => "な行",
            GojuonGroup::Ha => "は行",
            GojuonGroup::Ma => "ま行",
            GojuonGroup::Ya => "や行",
            GojuonGroup::Ra => "ら行",
            GojuonGroup::Wa => "わ行",
            GojuonGroup::Other => "その他",
        }
    }

    /// Hiragana that open this row, voiced and semi-voiced forms included
    fn members(self) -> &'static str {
        match self {
            GojuonGroup::A => "あいうえお",
            GojuonGroup::Ka => "かきくけこがぎぐげご",
            GojuonGroup::Sa => "さしすせそざじずぜぞ",
            GojuonGroup::Ta => "たちつてとだぢづでど",
            GojuonGroup::Na => "なにぬねの",
            GojuonGroup::Ha => "はひふへほばびぶべぼぱぴぷぺぽ",
            GojuonGroup::Ma => "まみむめも",
            GojuonGroup::Ya => "やゆよ",
            GojuonGroup::Ra => "らりるれろ",
            GojuonGroup::Wa => "わをん",
            GojuonGroup::Other => "",
        }
    }

    /// Classify a reading by its first character
    ///
    /// Blank readings land in the catch-all. Leading whitespace is not
    /// skipped, so `" いぬ"` is not an あ行 reading.
    pub fn classify(reading: Option<&str>) -> GojuonGroup {
        let first = match reading
            .filter(|r| !r.trim().is_empty())
            .and_then(|r| r.chars().next())
        {
            Some(c) => c,
            None => return GojuonGroup::Other,
        };

        Self::ALL
            .into_iter()
            .find(|group| group.members().contains(first))
            .unwrap_or(GojuonGroup::Other)
    }
}

impl std::fmt::Display for GojuonGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Bucket a single term falls into. The word is never consulted.
pub fn group_of(term: &Term) -> GojuonGroup {
    GojuonGroup::classify(term.reading.as_deref())
}

/// Effective sort key: the trimmed reading when present, otherwise the word
pub fn sort_key(term: &Term) -> &str {
    term.trimmed_reading().unwrap_or(&term.word)
}

/// Stable ascending sort on [`sort_key`]
pub fn sort_terms(mut terms: Vec<Term>) -> Vec<Term> {
    terms.sort_by(|a, b| sort_key(a).cmp(sort_key(b)));
    terms
}

/// Case-insensitive substring match against word, reading and description
pub fn matches(term: &Term, keyword: &str) -> bool {
    let needle = keyword.to_lowercase();
    [
        term.word.as_str(),
        term.reading.as_deref().unwrap_or(""),
        term.description.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Keep only terms matching `keyword`. A blank keyword keeps everything.
pub fn filter_terms(terms: Vec<Term>, keyword: Option<&str>) -> Vec<Term> {
    match normalize_keyword(keyword) {
        Some(keyword) => terms.into_iter().filter(|t| matches(t, keyword)).collect(),
        None => terms,
    }
}

/// Trimmed keyword, `None` when absent or blank
pub fn normalize_keyword(keyword: Option<&str>) -> Option<&str> {
    keyword.map(str::trim).filter(|k| !k.is_empty())
}

/// Bucket terms by gojūon row, keeping input order inside each bucket
pub fn group_terms(terms: Vec<Term>) -> GroupedTerms {
    let mut buckets: Vec<Vec<Term>> = vec![Vec::new(); GojuonGroup::ALL.len()];
    for term in terms {
        buckets[group_of(&term) as usize].push(term);
    }

    let groups = GojuonGroup::ALL
        .into_iter()
        .zip(buckets)
        .filter(|(_, bucket)| !bucket.is_empty())
        .collect();

    GroupedTerms { groups }
}

/// Flat listing mode: filter, then sort
pub fn sorted_view(terms: Vec<Term>, keyword: Option<&str>) -> Vec<Term> {
    sort_terms(filter_terms(terms, keyword))
}

/// Grouped listing mode: filter, then group
pub fn grouped_view(terms: Vec<Term>, keyword: Option<&str>) -> GroupedTerms {
    group_terms(filter_terms(terms, keyword))
}

/// Non-empty buckets in canonical order
///
/// Serializes as a JSON object keyed by bucket label, keys in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedTerms {
    groups: Vec<(GojuonGroup, Vec<Term>)>,
}

impl GroupedTerms {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of non-empty buckets
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn get(&self, group: GojuonGroup) -> Option<&[Term]> {
        self.groups
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, terms)| terms.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (GojuonGroup, &[Term])> {
        self.groups.iter().map(|(g, terms)| (*g, terms.as_slice()))
    }

    pub fn groups(&self) -> impl Iterator<Item = GojuonGroup> + '_ {
        self.groups.iter().map(|(g, _)| *g)
    }
}

impl Serialize for GroupedTerms {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (group, terms) in &self.groups {
            map.serialize_entry(group.label(), terms)?;
        }
        map.end()
    }
}
