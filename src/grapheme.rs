// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Grapheme cluster boundaries per UAX #29, with the UTS #51 emoji
//! extensions.

use crate::ucd::{GraphemeClusterBreak, PropertiesTable, PropertyFlags};

/// Decides whether a grapheme cluster boundary lies between two adjacent
/// codepoints.
///
/// `prev_cp == 0` stands for "no previous codepoint" (start of text, or the
/// scanner's cleared codepoint hint) and always breaks. NUL itself is
/// gcb=Control and so can never be mistaken for it: Control breaks on both
/// sides anyway.
///
/// Two rules that formally need unbounded lookbehind are evaluated over the
/// pair only: GB11 joins `ZWJ x Extended_Pictographic`, and GB12/GB13 join
/// `RI x RI`. [`GraphemeSegmenter`] layers the Regional Indicator parity on
/// top for callers that walk whole streams.
pub fn breakable(table: &PropertiesTable, prev_cp: u32, next_cp: u32) -> bool {
    use GraphemeClusterBreak as Gcb;

    // GB1: sot breaks.
    if prev_cp == 0 {
        return true;
    }

    let prev = table.get(prev_cp);
    let next = table.get(next_cp);
    let a = prev.grapheme_cluster_break;
    let b = next.grapheme_cluster_break;

    // GB3: CR x LF
    if a == Gcb::CR && b == Gcb::LF {
        return false;
    }
    // GB4, GB5: break around controls.
    if matches!(a, Gcb::Control | Gcb::CR | Gcb::LF) {
        return true;
    }
    if matches!(b, Gcb::Control | Gcb::CR | Gcb::LF) {
        return true;
    }
    // GB6, GB7, GB8: Hangul syllables keep conjoining.
    if a == Gcb::L && matches!(b, Gcb::L | Gcb::V | Gcb::LV | Gcb::LVT) {
        return false;
    }
    if matches!(a, Gcb::LV | Gcb::V) && matches!(b, Gcb::V | Gcb::T) {
        return false;
    }
    if matches!(a, Gcb::LVT | Gcb::T) && b == Gcb::T {
        return false;
    }
    // GB9, GB9a: no break before extenders, ZWJ or spacing marks.
    if matches!(b, Gcb::Extend | Gcb::ZWJ | Gcb::SpacingMark) {
        return false;
    }
    // GB9b: no break after prepended characters.
    if a == Gcb::Prepend {
        return false;
    }
    // GB11: emoji ZWJ sequences.
    if a == Gcb::ZWJ
        && (next.flags.contains(PropertyFlags::EXTENDED_PICTOGRAPHIC)
            || matches!(b, Gcb::GlueAfterZwj | Gcb::EBaseGaz))
    {
        return false;
    }
    // Emoji modifier sequences under the pre-Unicode-11 properties; current
    // UCDs express these through Extend and GB9.
    if matches!(a, Gcb::EBase | Gcb::EBaseGaz) && b == Gcb::EModifier {
        return false;
    }
    // GB12, GB13: regional indicator pairs.
    if a == Gcb::RegionalIndicator && b == Gcb::RegionalIndicator {
        return false;
    }
    // GB999: break everywhere else.
    true
}

/// Segments a stream of codepoints into grapheme clusters.
///
/// This is the stateful form of [`breakable`]: it remembers the previous
/// codepoint and the length of the current Regional Indicator run, so flag
/// sequences of three or more RIs split pairwise as GB12/GB13 demand.
#[derive(Clone)]
pub struct GraphemeSegmenter<'t> {
    table: &'t PropertiesTable,
    prev_cp: u32,
    ri_run: u32,
}

impl<'t> GraphemeSegmenter<'t> {
    pub fn new(table: &'t PropertiesTable) -> Self {
        Self { table, prev_cp: 0, ri_run: 0 }
    }

    /// Feeds the next codepoint and reports whether a cluster boundary
    /// precedes it.
    pub fn advance(&mut self, cp: u32) -> bool {
        use GraphemeClusterBreak as Gcb;

        let table = self.table;
        let is_ri = |cp: u32| table.get(cp).grapheme_cluster_break == Gcb::RegionalIndicator;

        let boundary = if self.prev_cp != 0 && is_ri(self.prev_cp) && is_ri(cp) {
            // Only an odd run of preceding RIs may absorb one more.
            self.ri_run % 2 == 0
        } else {
            breakable(self.table, self.prev_cp, cp)
        };

        self.ri_run = if is_ri(cp) { self.ri_run + 1 } else { 0 };
        self.prev_cp = cp;
        boundary
    }

    /// Resets to the start-of-text state.
    pub fn reset(&mut self) {
        self.prev_cp = 0;
        self.ri_run = 0;
    }
}
