//! Filterable and sortable column names
//!
//! The builder accepts any string key, these enums just name the ones the
//! collection API understands.

use std::fmt;

/// Card columns usable with `filter` and `order_by`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardColumn {
    /// Card name. Each side of a split or flip card has its own record.
    Name,
    /// normal, split, flip, double-faced, token, plane, scheme, ...
    Layout,
    /// Converted mana cost, always a number
    Cmc,
    Colors,
    /// Colors by color code, e.g. `R`, `U`
    ColorIdentity,
    /// Full type line as printed today
    Type,
    /// Basic, Legendary, Snow, World, Ongoing
    Supertypes,
    /// Instant, Sorcery, Artifact, Creature, ...
    Types,
    /// Everything right of the dash in the type line
    Subtypes,
    Rarity,
    /// Set code
    Set,
    SetName,
    /// Oracle text
    Text,
    Flavor,
    Artist,
    /// Collector number; a string because some numbers carry letters
    Number,
    Power,
    Toughness,
    Loyalty,
    /// Name in a foreign printing; pair with [`CardColumn::Language`]
    ForeignName,
    Language,
    /// Commander, Standard, Legacy, ... (legality defaults to Legal)
    GameFormat,
    /// Legal, Banned or Restricted
    Legality,
}

impl CardColumn {
    /// Every card column
    pub const ALL: [CardColumn; 23] = [
        CardColumn::Name,
        CardColumn::Layout,
        CardColumn::Cmc,
        CardColumn::Colors,
        CardColumn::ColorIdentity,
        CardColumn::Type,
        CardColumn::Supertypes,
        CardColumn::Types,
        CardColumn::Subtypes,
        CardColumn::Rarity,
        CardColumn::Set,
        CardColumn::SetName,
        CardColumn::Text,
        CardColumn::Flavor,
        CardColumn::Artist,
        CardColumn::Number,
        CardColumn::Power,
        CardColumn::Toughness,
        CardColumn::Loyalty,
        CardColumn::ForeignName,
        CardColumn::Language,
        CardColumn::GameFormat,
        CardColumn::Legality,
    ];

    /// Wire name of the column
    pub fn as_str(self) -> &'static str {
        match self {
            CardColumn::Name => "name",
            CardColumn::Layout => "layout",
            CardColumn::Cmc => "cmc",
            CardColumn::Colors => "colors",
            CardColumn::ColorIdentity => "colorIdentity",
            CardColumn::Type => "type",
            CardColumn::Supertypes => "supertypes",
            CardColumn::Types => "types",
            CardColumn::Subtypes => "subtypes",
            CardColumn::Rarity => "rarity",
            CardColumn::Set => "set",
            CardColumn::SetName => "setName",
            CardColumn::Text => "text",
            CardColumn::Flavor => "flavor",
            CardColumn::Artist => "artist",
            CardColumn::Number => "number",
            CardColumn::Power => "power",
            CardColumn::Toughness => "toughness",
            CardColumn::Loyalty => "loyalty",
            CardColumn::ForeignName => "foreignName",
            CardColumn::Language => "language",
            CardColumn::GameFormat => "gameFormat",
            CardColumn::Legality => "legality",
        }
    }
}

/// Set columns usable with `filter` and `order_by`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetColumn {
    Name,
    Block,
}

impl SetColumn {
    /// Wire name of the column
    pub fn as_str(self) -> &'static str {
        match self {
            SetColumn::Name => "name",
            SetColumn::Block => "block",
        }
    }
}

impl AsRef<str> for CardColumn {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for SetColumn {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CardColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SetColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
