//! Regional spelling variants (British, American and a few others).
//!
//! The table is built from clusters of equivalent spellings. Every word in a
//! cluster maps to every other word in it, so the relation is symmetric by
//! construction. Authored maps loaded through [`SpellingVariantTable::from_entries`]
//! are validated instead.

use crate::error::VariantTableError;
use crate::normalize::normalize;
use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

/// Verb stems accepted with both -ize and -ise endings, including the
/// -ized/-ised, -izes/-ises and -izing/-ising forms.
const IZE_STEMS: &[&str] = &[
    "apolog", "author", "categor", "character", "civil", "colon", "critic", "custom",
    "emphas", "fertil", "final", "global", "harmon", "legal", "maxim", "memor", "minim",
    "mobil", "modern", "organ", "priorit", "real", "recogn", "social", "special",
    "standard", "summar", "symbol", "sympath", "util", "visual",
];

/// Stems whose -ization noun also has an -isation spelling.
const IZATION_STEMS: &[&str] = &[
    "author", "categor", "character", "civil", "colon", "custom", "fertil", "final",
    "global", "harmon", "legal", "maxim", "memor", "minim", "mobil", "modern", "organ",
    "priorit", "real", "social", "special", "standard", "summar", "symbol", "util",
    "visual",
];

/// Verb stems spelled -yse in British and -yze in American English.
const YSE_STEMS: &[&str] = &["anal", "breathal", "catal", "dial", "paral"];

/// Hand-authored clusters of equivalent spellings.
const CLUSTERS: &[&[&str]] = &[
    // -our / -or
    &["armour", "armor"],
    &["behaviour", "behavior"],
    &["behaviours", "behaviors"],
    &["colour", "color"],
    &["colours", "colors"],
    &["coloured", "colored"],
    &["colourful", "colorful"],
    &["endeavour", "endeavor"],
    &["favour", "favor"],
    &["favourite", "favorite"],
    &["favourites", "favorites"],
    &["flavour", "flavor"],
    &["flavours", "flavors"],
    &["harbour", "harbor"],
    &["honour", "honor"],
    &["humour", "humor"],
    &["labour", "labor"],
    &["neighbour", "neighbor"],
    &["neighbours", "neighbors"],
    &["neighbourhood", "neighborhood"],
    &["odour", "odor"],
    &["rumour", "rumor"],
    &["savour", "savor"],
    &["vapour", "vapor"],
    &["vigour", "vigor"],
    // -re / -er
    &["calibre", "caliber"],
    &["centimetre", "centimeter"],
    &["centimetres", "centimeters"],
    &["centre", "center"],
    &["centres", "centers"],
    &["fibre", "fiber"],
    &["kilometre", "kilometer"],
    &["kilometres", "kilometers"],
    &["litre", "liter"],
    &["litres", "liters"],
    &["metre", "meter"],
    &["metres", "meters"],
    &["millimetre", "millimeter"],
    &["sombre", "somber"],
    &["spectre", "specter"],
    &["theatre", "theater"],
    &["theatres", "theaters"],
    // -ence / -ense
    &["defence", "defense"],
    &["licence", "license"],
    &["offence", "offense"],
    &["pretence", "pretense"],
    // doubled consonants
    &["cancelled", "canceled"],
    &["cancelling", "canceling"],
    &["counsellor", "counselor"],
    &["enrol", "enroll"],
    &["fuelled", "fueled"],
    &["fulfil", "fulfill"],
    &["instalment", "installment"],
    &["jewellery", "jewelry"],
    &["labelled", "labeled"],
    &["labelling", "labeling"],
    &["modelled", "modeled"],
    &["modelling", "modeling"],
    &["skilful", "skillful"],
    &["travelled", "traveled"],
    &["traveller", "traveler"],
    &["travellers", "travelers"],
    &["travelling", "traveling"],
    &["wilful", "willful"],
    // -ogue / -og
    &["analogue", "analog"],
    &["catalogue", "catalog"],
    &["dialogue", "dialog"],
    // assorted
    &["acknowledgement", "acknowledgment"],
    &["ageing", "aging"],
    &["aluminium", "aluminum"],
    &["cosy", "cozy"],
    &["doughnut", "donut"],
    &["encyclopaedia", "encyclopedia"],
    &["grey", "gray"],
    &["judgement", "judgment"],
    &["manoeuvre", "maneuver"],
    &["mould", "mold"],
    &["moustache", "mustache"],
    &["mum", "mom"],
    &["paediatric", "pediatric"],
    &["plough", "plow"],
    &["practise", "practice"],
    &["programme", "program"],
    &["programmes", "programs"],
    &["pyjamas", "pajamas"],
    &["sceptical", "skeptical"],
    &["tyre", "tire"],
    &["tyres", "tires"],
];

static EMPTY: BTreeSet<String> = BTreeSet::new();

/// Lookup table from a normalized word to its accepted alternative spellings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpellingVariantTable {
    entries: HashMap<String, BTreeSet<String>>,
}

impl SpellingVariantTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table, built once on first use and shared read-only.
    pub fn builtin() -> &'static SpellingVariantTable {
        static BUILTIN: OnceLock<SpellingVariantTable> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let table = Self::from_clusters(builtin_clusters());
            tracing::debug!(words = table.len(), "built spelling variant table");
            table
        })
    }

    /// Build a table where each cluster is a group of mutually equivalent words.
    pub fn from_clusters<I, C, S>(clusters: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for cluster in clusters {
            table.insert_cluster(cluster);
        }
        table
    }

    /// Return a copy of this table extended with extra clusters.
    pub fn with_clusters<I, C, S>(&self, clusters: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = self.clone();
        for cluster in clusters {
            table.insert_cluster(cluster);
        }
        table
    }

    /// Return a copy of this table with every entry of `other` merged in.
    pub fn merge(&self, other: &SpellingVariantTable) -> Self {
        let mut table = self.clone();
        for (word, variants) in &other.entries {
            table
                .entries
                .entry(word.clone())
                .or_default()
                .extend(variants.iter().cloned());
        }
        table
    }

    /// Build a table from an authored word -> variants map.
    ///
    /// Words are normalized; the resulting relation must be symmetric.
    pub fn from_entries<I, S, V>(entries: I) -> Result<Self, VariantTableError>
    where
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
        V: IntoIterator<Item = S>,
    {
        let mut table = Self::new();
        for (word, variants) in entries {
            let word = normalize(word.as_ref());
            if word.is_empty() {
                continue;
            }
            let set = table.entries.entry(word.clone()).or_default();
            for variant in variants {
                let variant = normalize(variant.as_ref());
                if !variant.is_empty() && variant != word {
                    set.insert(variant);
                }
            }
        }
        table.entries.retain(|_, set| !set.is_empty());
        table.validate()?;
        Ok(table)
    }

    /// Parse a JSON array of clusters, e.g. `[["colour", "color"]]`.
    pub fn from_json(json: &str) -> Result<Self, VariantTableError> {
        let clusters: Vec<Vec<String>> = serde_json::from_str(json)
            .map_err(|e| VariantTableError::InvalidData(e.to_string()))?;
        Ok(Self::from_clusters(clusters))
    }

    /// Check that every `word -> variant` edge has its reverse.
    pub fn validate(&self) -> Result<(), VariantTableError> {
        let mut words: Vec<&String> = self.entries.keys().collect();
        words.sort();

        for word in words {
            for variant in &self.entries[word] {
                let symmetric = self
                    .entries
                    .get(variant)
                    .is_some_and(|reverse| reverse.contains(word));
                if !symmetric {
                    return Err(VariantTableError::Asymmetric {
                        word: word.clone(),
                        variant: variant.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Accepted alternative spellings of `word`; empty if none are registered.
    pub fn variants_of(&self, word: &str) -> &BTreeSet<String> {
        self.entries.get(&normalize(word)).unwrap_or(&EMPTY)
    }

    /// Whether `user_word` is the expected word or an accepted variant of it.
    pub fn is_acceptable_variant(&self, user_word: &str, expected_word: &str) -> bool {
        let user = normalize(user_word);
        let expected = normalize(expected_word);

        user == expected
            || self.variants_of(&expected).contains(&user)
            || self.variants_of(&user).contains(&expected)
    }

    /// Number of words that have at least one variant.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert_cluster<C, S>(&mut self, cluster: C)
    where
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: BTreeSet<String> = cluster
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();

        for word in &words {
            for other in &words {
                if word != other {
                    self.entries
                        .entry(word.clone())
                        .or_default()
                        .insert(other.clone());
                }
            }
        }
    }
}

/// Expand the stem lists and the authored clusters into one cluster list.
fn builtin_clusters() -> Vec<Vec<String>> {
    let mut clusters: Vec<Vec<String>> = Vec::new();

    for stem in IZE_STEMS {
        for (z, s) in [("ize", "ise"), ("ized", "ised"), ("izes", "ises"), ("izing", "ising")] {
            clusters.push(vec![format!("{stem}{z}"), format!("{stem}{s}")]);
        }
    }
    for stem in IZATION_STEMS {
        for (z, s) in [("ization", "isation"), ("izations", "isations")] {
            clusters.push(vec![format!("{stem}{z}"), format!("{stem}{s}")]);
        }
    }
    for stem in YSE_STEMS {
        for (z, s) in [("yze", "yse"), ("yzed", "ysed"), ("yzing", "ysing")] {
            clusters.push(vec![format!("{stem}{z}"), format!("{stem}{s}")]);
        }
    }
    clusters.extend(
        CLUSTERS
            .iter()
            .map(|cluster| cluster.iter().map(|w| w.to_string()).collect()),
    );

    clusters
}

/// Accepted variants of `word` in the built-in table.
pub fn variants_of(word: &str) -> &'static BTreeSet<String> {
    SpellingVariantTable::builtin().variants_of(word)
}

/// Check `user_word` against `expected_word` using the built-in table.
pub fn is_acceptable_variant(user_word: &str, expected_word: &str) -> bool {
    SpellingVariantTable::builtin().is_acceptable_variant(user_word, expected_word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_table_is_symmetric() {
        assert_eq!(SpellingVariantTable::builtin().validate(), Ok(()));
    }

    #[test]
    fn ize_ise_both_directions() {
        assert!(is_acceptable_variant("organize", "organise"));
        assert!(is_acceptable_variant("organise", "organize"));
        assert!(is_acceptable_variant("Recognising", "recognizing"));
        assert!(is_acceptable_variant("civilisation", "civilization"));
    }

    #[test]
    fn regional_families() {
        assert!(is_acceptable_variant("colour", "color"));
        assert!(is_acceptable_variant("centre", "center"));
        assert!(is_acceptable_variant("theatre", "theater"));
        assert!(is_acceptable_variant("metre", "meter"));
        assert!(is_acceptable_variant("analysed", "analyzed"));
        assert!(is_acceptable_variant("travelling", "traveling"));
        assert!(is_acceptable_variant("grey", "gray"));
    }

    #[test]
    fn unrelated_words_are_not_variants() {
        assert!(!is_acceptable_variant("colour", "flavour"));
        assert!(!is_acceptable_variant("advertise", "advertize"));
        assert!(!is_acceptable_variant("", "color"));
    }

    #[test]
    fn identical_words_match_ignoring_case_and_punctuation() {
        assert!(is_acceptable_variant("CRASHED", "crashed"));
        assert!(is_acceptable_variant("crashed.", " crashed "));
        assert!(is_acceptable_variant("zzz", "zzz"));
    }

    #[test]
    fn variants_of_normalizes_input() {
        let expected: BTreeSet<String> = ["color".to_string()].into_iter().collect();
        assert_eq!(variants_of("Colour!"), &expected);
        assert!(variants_of("pizza").is_empty());
    }

    #[test]
    fn clusters_link_every_member() {
        let table = SpellingVariantTable::from_clusters([["a1", "b1", "c1"]]);
        assert!(table.is_acceptable_variant("a1", "c1"));
        assert!(table.is_acceptable_variant("c1", "b1"));
        assert_eq!(table.len(), 3);
        assert_eq!(table.validate(), Ok(()));
    }

    #[test]
    fn with_clusters_leaves_original_untouched() {
        let base = SpellingVariantTable::from_clusters([["colour", "color"]]);
        let extended = base.with_clusters([["tonne", "ton"]]);
        assert!(extended.is_acceptable_variant("tonne", "ton"));
        assert!(extended.is_acceptable_variant("colour", "color"));
        assert!(!base.is_acceptable_variant("tonne", "ton"));
    }

    #[test]
    fn merge_combines_tables() {
        let left = SpellingVariantTable::from_clusters([["colour", "color"]]);
        let right = SpellingVariantTable::from_clusters([["colour", "colur"]]);
        let merged = left.merge(&right);
        assert_eq!(merged.variants_of("colour").len(), 2);
        assert_eq!(merged.validate(), Ok(()));
    }

    #[test]
    fn from_entries_rejects_asymmetric_data() {
        let result = SpellingVariantTable::from_entries([
            ("colour", vec!["color"]),
            ("centre", vec!["center"]),
            ("center", vec!["centre"]),
        ]);
        assert_eq!(
            result,
            Err(VariantTableError::Asymmetric {
                word: "colour".to_string(),
                variant: "color".to_string(),
            })
        );
    }

    #[test]
    fn from_entries_accepts_symmetric_data() {
        let table = SpellingVariantTable::from_entries([
            ("Colour", vec!["color"]),
            ("color", vec!["colour"]),
        ])
        .unwrap();
        assert!(table.is_acceptable_variant("color", "colour"));
    }

    #[test]
    fn from_json_clusters() {
        let table = SpellingVariantTable::from_json(r#"[["kerb", "curb"], ["storey"]]"#).unwrap();
        assert!(table.is_acceptable_variant("curb", "kerb"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        let result = SpellingVariantTable::from_json(r#"{"colour": "color"}"#);
        assert!(matches!(result, Err(VariantTableError::InvalidData(_))));
    }
}
