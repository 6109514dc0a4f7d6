//! Mapping of glyph names to the characters that display them.
//!
//! A `.bmf` file does not store glyph names. They live in a companion
//! charmap, usually saved as JSON next to the font:
//!
//! ```json
//! { "A": "A", "degree": 128 }
//! ```
//!
//! Each name maps to the character written in a string to draw that glyph:
//! printable ASCII is stored as a one character string, anything else as an
//! integer codepoint.

use std::collections::HashMap;

use indexmap::IndexMap;

/// The character that displays a named glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum CharmapEntry {
    /// A printable character.
    Char(char),
    /// Any other codepoint.
    Codepoint(u32),
}

impl CharmapEntry {
    /// The entry for `codepoint`, stored as a character when it is printable ASCII.
    pub fn from_codepoint(codepoint: u32) -> Self {
        match char::from_u32(codepoint) {
            Some(c) if (32..127).contains(&codepoint) => CharmapEntry::Char(c),
            _ => CharmapEntry::Codepoint(codepoint),
        }
    }

    pub fn codepoint(self) -> u32 {
        match self {
            CharmapEntry::Char(c) => c as u32,
            CharmapEntry::Codepoint(cp) => cp,
        }
    }
}

/// Mapping of glyph names to displayed characters, in slot order.
#[derive(Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        from = "IndexMap<String, CharmapEntry>",
        into = "IndexMap<String, CharmapEntry>"
    )
)]
pub struct Charmap {
    names: IndexMap<String, CharmapEntry>,
    // codepoint -> index into `names`
    displayed: HashMap<u32, usize>,
}

impl Charmap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mapping, replacing any previous entry for `name`.
    pub fn insert(&mut self, name: impl Into<String>, entry: CharmapEntry) {
        let (ix, previous) = self.names.insert_full(name.into(), entry);
        match previous {
            Some(_) => self.reindex(),
            None => {
                self.displayed.entry(entry.codepoint()).or_insert(ix);
            }
        }
    }

    fn reindex(&mut self) {
        self.displayed.clear();
        for (ix, entry) in self.names.values().enumerate() {
            self.displayed.entry(entry.codepoint()).or_insert(ix);
        }
    }

    /// The number of named glyphs.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The entry for the glyph called `name`.
    pub fn get(&self, name: &str) -> Option<CharmapEntry> {
        self.names.get(name).copied()
    }

    /// The name of the glyph displayed by `codepoint`.
    ///
    /// If several names display the same codepoint, the first one wins.
    pub fn name_for(&self, codepoint: u32) -> Option<&str> {
        self.displayed
            .get(&codepoint)
            .and_then(|ix| self.names.get_index(*ix))
            .map(|(name, _)| name.as_str())
    }

    /// `true` if some glyph is displayed by `codepoint`.
    pub fn contains_codepoint(&self, codepoint: u32) -> bool {
        self.displayed.contains_key(&codepoint)
    }

    /// The codepoint to draw for an input character.
    ///
    /// The character is first looked up as a glyph name (the name of the
    /// glyph `A` is usually `"A"`), and then accepted as-is if some glyph is
    /// displayed by it.
    ///
    /// Names take precedence over displayed values. The two orders only
    /// disagree for a charmap in which a one character name displays some
    /// other character: with `{"a": "B"}`, `'a'` resolves to `'B'` even if
    /// another glyph is displayed by `'a'`.
    pub fn resolve(&self, c: char) -> Option<u32> {
        let mut buf = [0u8; 4];
        self.get(c.encode_utf8(&mut buf))
            .map(CharmapEntry::codepoint)
            .or_else(|| self.contains_codepoint(c as u32).then_some(c as u32))
    }

    /// Iterate over names and entries, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, CharmapEntry)> + '_ {
        self.names.iter().map(|(name, entry)| (name.as_str(), *entry))
    }
}

impl PartialEq for Charmap {
    fn eq(&self, other: &Self) -> bool {
        // the reverse index is derived from the names
        self.names == other.names
    }
}

impl Eq for Charmap {}

impl From<IndexMap<String, CharmapEntry>> for Charmap {
    fn from(names: IndexMap<String, CharmapEntry>) -> Self {
        names.into_iter().collect()
    }
}

impl From<Charmap> for IndexMap<String, CharmapEntry> {
    fn from(charmap: Charmap) -> Self {
        charmap.names
    }
}

impl<S: Into<String>> FromIterator<(S, CharmapEntry)> for Charmap {
    fn from_iter<T: IntoIterator<Item = (S, CharmapEntry)>>(iter: T) -> Self {
        let mut charmap = Charmap::new();
        for (name, entry) in iter {
            charmap.insert(name, entry);
        }
        charmap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latin() -> Charmap {
        [
            ("space", CharmapEntry::Char(' ')),
            ("A", CharmapEntry::Char('A')),
            ("a", CharmapEntry::Char('a')),
            ("degree", CharmapEntry::Codepoint(0x80)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn entry_from_codepoint() {
        assert_eq!(CharmapEntry::from_codepoint(32), CharmapEntry::Char(' '));
        assert_eq!(CharmapEntry::from_codepoint(126), CharmapEntry::Char('~'));
        assert_eq!(CharmapEntry::from_codepoint(127), CharmapEntry::Codepoint(127));
        assert_eq!(CharmapEntry::from_codepoint(31), CharmapEntry::Codepoint(31));
        assert_eq!(CharmapEntry::from_codepoint(0x80).codepoint(), 0x80);
    }

    #[test]
    fn resolve_by_name_then_value() {
        let charmap = latin();
        assert_eq!(charmap.resolve('A'), Some('A' as u32));
        // ' ' is not a name, but the glyph 'space' displays it
        assert_eq!(charmap.resolve(' '), Some(' ' as u32));
        assert_eq!(charmap.resolve('b'), None);
        assert_eq!(charmap.resolve('\u{80}'), Some(0x80));
    }

    #[test]
    fn reverse_lookup() {
        let charmap = latin();
        assert_eq!(charmap.name_for(0x80), Some("degree"));
        assert_eq!(charmap.name_for(' ' as u32), Some("space"));
        assert_eq!(charmap.name_for('Z' as u32), None);
    }

    #[test]
    fn replace_entry() {
        let mut charmap = latin();
        charmap.insert("degree", CharmapEntry::Codepoint(0x81));
        assert_eq!(charmap.name_for(0x80), None);
        assert_eq!(charmap.name_for(0x81), Some("degree"));
        assert_eq!(charmap.len(), 4);
    }

    #[test]
    fn keeps_slot_order() {
        let charmap = latin();
        let names: Vec<_> = charmap.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["space", "A", "a", "degree"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_round_trip() {
        let json = r#"{"space":" ","A":"A","a":"a","degree":128}"#;
        let charmap: Charmap = serde_json::from_str(json).unwrap();
        assert_eq!(charmap, latin());
        assert_eq!(serde_json::to_string(&charmap).unwrap(), json);
    }
}
