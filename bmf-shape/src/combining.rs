//! Decomposition of composed characters into base glyphs

use indexmap::IndexMap;

/// Maps a composed character to the glyph names drawn to render it.
///
/// Names are stored in drawing order: the base glyph first, then each mark
/// that is overlaid on it. An entry with a single name is an alias for a glyph
/// whose name isn't the character itself (such as `'°'` for `degree`).
///
/// The JSON form is an object of arrays:
///
/// ```
/// # use bmf_shape::CombiningTable;
/// let table = CombiningTable::from_json(r#"{"ñ": ["n", "lowercase_tilde"]}"#)?;
/// assert_eq!(table.get('ñ'), Some(["n".to_string(), "lowercase_tilde".to_string()].as_slice()));
/// # Ok::<_, serde_json::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct CombiningTable {
    entries: IndexMap<char, Vec<String>>,
}

impl CombiningTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The built-in table for accented latin characters.
    ///
    /// Marks come in lowercase and uppercase variants, since capitals need
    /// their accents drawn higher.
    pub fn latin() -> Self {
        LATIN
            .iter()
            .map(|(c, names)| (*c, names.iter().map(|name| name.to_string()).collect()))
            .collect()
    }

    /// Add or replace the decomposition of `c`.
    ///
    /// Returns the previous decomposition, if any.
    pub fn insert(&mut self, c: char, names: Vec<String>) -> Option<Vec<String>> {
        self.entries.insert(c, names)
    }

    /// The glyph names `c` decomposes into, if it is in the table.
    pub fn get(&self, c: char) -> Option<&[String]> {
        self.entries.get(&c).map(Vec::as_slice)
    }

    pub fn contains(&self, c: char) -> bool {
        self.entries.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &[String])> + '_ {
        self.entries.iter().map(|(c, names)| (*c, names.as_slice()))
    }
}

impl FromIterator<(char, Vec<String>)> for CombiningTable {
    fn from_iter<T: IntoIterator<Item = (char, Vec<String>)>>(iter: T) -> Self {
        CombiningTable {
            entries: iter.into_iter().collect(),
        }
    }
}

#[rustfmt::skip]
static LATIN: &[(char, &[&str])] = &[
    ('°', &["degree"]),
    ('¿', &["question_open"]),
    ('¡', &["exclamation_open"]),
    ('ç', &["lowercase_cedilla"]),
    ('Ç', &["uppercase_cedilla"]),
    ('º', &["small_o"]),
    ('ª', &["small_a"]),
    ('ñ', &["n", "lowercase_tilde"]),
    ('Ñ', &["N", "uppercase_tilde"]),
    ('´', &["lowercase_acute"]),
    ('á', &["a", "lowercase_acute"]),
    ('é', &["e", "lowercase_acute"]),
    ('í', &["i", "lowercase_acute"]),
    ('ó', &["o", "lowercase_acute"]),
    ('ú', &["u", "lowercase_acute"]),
    ('Á', &["A", "uppercase_acute"]),
    ('É', &["E", "uppercase_acute"]),
    ('Í', &["I", "uppercase_acute"]),
    ('Ó', &["O", "uppercase_acute"]),
    ('Ú', &["U", "uppercase_acute"]),
    ('`', &["lowercase_grave"]),
    ('à', &["a", "lowercase_grave"]),
    ('è', &["e", "lowercase_grave"]),
    ('ì', &["i", "lowercase_grave"]),
    ('ò', &["o", "lowercase_grave"]),
    ('ù', &["u", "lowercase_grave"]),
    ('À', &["A", "uppercase_grave"]),
    ('È', &["E", "uppercase_grave"]),
    ('Ì', &["I", "uppercase_grave"]),
    ('Ò', &["O", "uppercase_grave"]),
    ('Ù', &["U", "uppercase_grave"]),
    ('â', &["a", "lowercase_circumflex"]),
    ('ê', &["e", "lowercase_circumflex"]),
    ('î', &["i", "lowercase_circumflex"]),
    ('ô', &["o", "lowercase_circumflex"]),
    ('û', &["u", "lowercase_circumflex"]),
    ('Â', &["A", "uppercase_circumflex"]),
    ('Ê', &["E", "uppercase_circumflex"]),
    ('Î', &["I", "uppercase_circumflex"]),
    ('Ô', &["O", "uppercase_circumflex"]),
    ('Û', &["U", "uppercase_circumflex"]),
    ('¨', &["lowercase_umlaut"]),
    ('ä', &["a", "lowercase_umlaut"]),
    ('ë', &["e", "lowercase_umlaut"]),
    ('ï', &["i", "lowercase_umlaut"]),
    ('ö', &["o", "lowercase_umlaut"]),
    ('ü', &["u", "lowercase_umlaut"]),
    ('Ä', &["A", "uppercase_umlaut"]),
    ('Ë', &["E", "uppercase_umlaut"]),
    ('Ï', &["I", "uppercase_umlaut"]),
    ('Ö', &["O", "uppercase_umlaut"]),
    ('Ü', &["U", "uppercase_umlaut"]),
    ('˙', &["lowercase_dot"]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn latin() {
        let table = CombiningTable::latin();
        assert_eq!(table.len(), LATIN.len());
        assert_eq!(table.get('é'), Some(&["e".to_string(), "lowercase_acute".to_string()][..]));
        assert_eq!(table.get('°'), Some(&["degree".to_string()][..]));
        assert_eq!(table.get('e'), None);
        // every entry is either an alias or a base plus one mark
        assert!(table.iter().all(|(_, names)| (1..=2).contains(&names.len())));
    }

    #[test]
    fn json_round_trip() {
        let table = CombiningTable::from_json(r#"{"ñ": ["n", "lowercase_tilde"], "°": ["degree"]}"#)
            .unwrap();
        assert_eq!(table.len(), 2);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"ñ":["n","lowercase_tilde"],"°":["degree"]}"#);
        assert_eq!(CombiningTable::from_json(&json).unwrap(), table);
    }

    #[test]
    fn keys_must_be_single_chars() {
        assert!(CombiningTable::from_json(r#"{"ab": ["a"]}"#).is_err());
    }

    #[test]
    fn insert_replaces() {
        let mut table = CombiningTable::new();
        assert!(table.insert('x', vec!["a".into()]).is_none());
        assert_eq!(table.insert('x', vec!["b".into()]), Some(vec!["a".into()]));
        assert!(table.contains('x'));
        assert_eq!(table.get('x'), Some(&["b".to_string()][..]));
    }
}
