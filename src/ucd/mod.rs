// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Codepoint properties: the compressed two-stage lookup tables and the
//! offline loader that builds them from the Unicode Character Database.

mod enums;
mod loader;
mod properties;

pub use enums::*;
pub use loader::{LoadError, load_from_directory};
pub use properties::*;

/// A hand-assembled property table covering the codepoints the unit tests
/// exercise. Everything not listed keeps the default record, exactly like
/// unassigned codepoints in a real UCD load.
#[cfg(test)]
pub(crate) mod testdata {
    use super::*;

    pub fn table() -> PropertiesTable {
        let mut records = vec![CodepointProperties::DEFAULT; NUM_CODEPOINTS];
        fn set_in(
            records: &mut [CodepointProperties],
            range: std::ops::RangeInclusive<usize>,
            record: CodepointProperties,
        ) {
            records[range].fill(record);
        }
        let mut set =
            |range, record| set_in(&mut records, range, record);

        let base = CodepointProperties::DEFAULT;
        let control = CodepointProperties {
            general_category: GeneralCategory::Control,
            grapheme_cluster_break: GraphemeClusterBreak::Control,
            ..base
        };
        set(0x00..=0x1F, control);
        set(0x7F..=0x7F, control);
        set(
            0x0D..=0x0D,
            CodepointProperties { grapheme_cluster_break: GraphemeClusterBreak::CR, ..control },
        );
        set(
            0x0A..=0x0A,
            CodepointProperties { grapheme_cluster_break: GraphemeClusterBreak::LF, ..control },
        );
        set(
            0x20..=0x7E,
            CodepointProperties {
                general_category: GeneralCategory::OtherPunctuation,
                script: Script::Common,
                east_asian_width: EastAsianWidth::Narrow,
                ..base
            },
        );
        // U+00E9 é
        set(
            0xE9..=0xE9,
            CodepointProperties {
                general_category: GeneralCategory::LowercaseLetter,
                script: Script::Latin,
                east_asian_width: EastAsianWidth::Ambiguous,
                ..base
            },
        );
        // U+00AD soft hyphen
        set(
            0xAD..=0xAD,
            CodepointProperties {
                general_category: GeneralCategory::Format,
                grapheme_cluster_break: GraphemeClusterBreak::Control,
                ..base
            },
        );
        // Combining diacriticals
        set(
            0x300..=0x36F,
            CodepointProperties {
                general_category: GeneralCategory::NonspacingMark,
                script: Script::Inherited,
                grapheme_cluster_break: GraphemeClusterBreak::Extend,
                flags: PropertyFlags::GRAPHEME_EXTEND,
                ..base
            },
        );
        // U+0903 DEVANAGARI SIGN VISARGA
        set(
            0x903..=0x903,
            CodepointProperties {
                general_category: GeneralCategory::SpacingMark,
                script: Script::Devanagari,
                grapheme_cluster_break: GraphemeClusterBreak::SpacingMark,
                ..base
            },
        );
        // U+0600 ARABIC NUMBER SIGN
        set(
            0x600..=0x600,
            CodepointProperties {
                general_category: GeneralCategory::Format,
                script: Script::Arabic,
                grapheme_cluster_break: GraphemeClusterBreak::Prepend,
                ..base
            },
        );
        // Hangul jamo and syllables
        let hangul = |gcb| CodepointProperties {
            general_category: GeneralCategory::OtherLetter,
            script: Script::Hangul,
            grapheme_cluster_break: gcb,
            east_asian_width: EastAsianWidth::Wide,
            ..base
        };
        set(0x1100..=0x115F, hangul(GraphemeClusterBreak::L));
        set(0x1160..=0x11A7, hangul(GraphemeClusterBreak::V));
        set(0x11A8..=0x11FF, hangul(GraphemeClusterBreak::T));
        set(0xAC00..=0xAC00, hangul(GraphemeClusterBreak::LV));
        set(0xAC01..=0xAC1B, hangul(GraphemeClusterBreak::LVT));
        // CJK Unified Ideographs
        set(
            0x4E00..=0x9FFF,
            CodepointProperties {
                general_category: GeneralCategory::OtherLetter,
                script: Script::Han,
                east_asian_width: EastAsianWidth::Wide,
                ..base
            },
        );
        // U+200D ZWJ, U+200B..U+200F zero-width formatters
        set(
            0x200B..=0x200F,
            CodepointProperties {
                general_category: GeneralCategory::Format,
                grapheme_cluster_break: GraphemeClusterBreak::Control,
                ..base
            },
        );
        set(
            0x200D..=0x200D,
            CodepointProperties {
                general_category: GeneralCategory::Format,
                grapheme_cluster_break: GraphemeClusterBreak::ZWJ,
                flags: PropertyFlags::EMOJI_COMPONENT,
                ..base
            },
        );
        // U+20E3 COMBINING ENCLOSING KEYCAP
        set(
            0x20E3..=0x20E3,
            CodepointProperties {
                general_category: GeneralCategory::EnclosingMark,
                grapheme_cluster_break: GraphemeClusterBreak::Extend,
                flags: PropertyFlags::EMOJI_COMPONENT,
                ..base
            },
        );
        // Variation selectors 15/16
        set(
            0xFE0E..=0xFE0F,
            CodepointProperties {
                general_category: GeneralCategory::NonspacingMark,
                script: Script::Inherited,
                grapheme_cluster_break: GraphemeClusterBreak::Extend,
                flags: PropertyFlags::EMOJI_COMPONENT,
                ..base
            },
        );
        // Regional indicators
        set(
            0x1F1E6..=0x1F1FF,
            CodepointProperties {
                general_category: GeneralCategory::OtherSymbol,
                script: Script::Common,
                grapheme_cluster_break: GraphemeClusterBreak::RegionalIndicator,
                flags: PropertyFlags::EMOJI
                    | PropertyFlags::EMOJI_COMPONENT
                    | PropertyFlags::EMOJI_PRESENTATION,
                ..base
            },
        );
        // Misc symbols, pictographs, emoticons, transport
        let pictographic = CodepointProperties {
            general_category: GeneralCategory::OtherSymbol,
            script: Script::Common,
            east_asian_width: EastAsianWidth::Wide,
            flags: PropertyFlags::EMOJI
                | PropertyFlags::EMOJI_PRESENTATION
                | PropertyFlags::EXTENDED_PICTOGRAPHIC,
            ..base
        };
        set(0x1F300..=0x1F6FF, pictographic);
        // U+2602 UMBRELLA: emoji with default text presentation
        set(
            0x2602..=0x2602,
            CodepointProperties {
                general_category: GeneralCategory::OtherSymbol,
                script: Script::Common,
                flags: PropertyFlags::EMOJI | PropertyFlags::EXTENDED_PICTOGRAPHIC,
                ..base
            },
        );
        // Skin tone modifiers
        set(
            0x1F3FB..=0x1F3FF,
            CodepointProperties {
                general_category: GeneralCategory::ModifierSymbol,
                script: Script::Common,
                grapheme_cluster_break: GraphemeClusterBreak::Extend,
                east_asian_width: EastAsianWidth::Wide,
                flags: PropertyFlags::EMOJI
                    | PropertyFlags::EMOJI_COMPONENT
                    | PropertyFlags::EMOJI_MODIFIER
                    | PropertyFlags::EMOJI_PRESENTATION,
                ..base
            },
        );
        // Modifier bases within the pictographic block
        set(
            0x1F466..=0x1F469,
            CodepointProperties {
                flags: pictographic.flags | PropertyFlags::EMOJI_MODIFIER_BASE,
                ..pictographic
            },
        );

        for (cp, record) in records.iter_mut().enumerate() {
            record.emoji_segmentation_category =
                super::loader::emoji_segmentation_category(cp as u32, record);
        }

        PropertiesTable::from_records(&records).unwrap()
    }
}
