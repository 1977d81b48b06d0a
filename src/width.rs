// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Terminal column width of a single codepoint.

use crate::ucd::{
    EastAsianWidth, GeneralCategory, GraphemeClusterBreak, PropertiesTable, PropertyFlags,
};

/// Returns the number of terminal columns `cp` occupies on its own: 0, 1
/// or 2.
///
/// This is the UAX #11 East Asian Width reading of "width", with the
/// conventions terminals have settled on layered on top:
/// - controls and combining/format characters occupy no cell,
/// - the soft hyphen U+00AD occupies one cell (matching `wcswidth`),
/// - codepoints with default emoji presentation occupy two cells, which is
///   what makes Regional Indicator flag pairs measure 2,
/// - `Wide` and `Fullwidth` codepoints occupy two cells.
///
/// Grapheme clusters are measured as the maximum over their codepoints, plus
/// the VS16 widening rule; that happens in the scanner, not here.
pub fn of(table: &PropertiesTable, cp: u32) -> u8 {
    let props = table.get(cp);

    if matches!(
        props.grapheme_cluster_break,
        GraphemeClusterBreak::Control | GraphemeClusterBreak::CR | GraphemeClusterBreak::LF
    ) {
        // U+00AD is gcb=Control and gc=Cf, yet renders as a narrow hyphen.
        return (cp == 0xAD) as u8;
    }
    if matches!(
        props.general_category,
        GeneralCategory::NonspacingMark
            | GeneralCategory::EnclosingMark
            | GeneralCategory::SpacingMark
            | GeneralCategory::Format
    ) {
        return 0;
    }
    if props.flags.contains(PropertyFlags::EMOJI_PRESENTATION) {
        return 2;
    }
    if matches!(props.east_asian_width, EastAsianWidth::Wide | EastAsianWidth::Fullwidth) {
        return 2;
    }
    1
}
