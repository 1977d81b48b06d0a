// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use super::LoadError;
use super::enums::*;

/// Number of Unicode scalar slots covered by the tables (U+0000..=U+10FFFF).
pub const NUM_CODEPOINTS: usize = 0x110000;

/// Block size of the two-stage table. 256 divides `NUM_CODEPOINTS` evenly and
/// keeps both stage index spaces comfortably within `u16` for current UCDs.
pub const BLOCK_SIZE: usize = 256;

const BLOCK_SHIFT: u32 = BLOCK_SIZE.trailing_zeros();

/// Everything this library knows about one codepoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CodepointProperties {
    pub general_category: GeneralCategory,
    pub script: Script,
    pub east_asian_width: EastAsianWidth,
    pub grapheme_cluster_break: GraphemeClusterBreak,
    pub emoji_segmentation_category: EmojiSegmentationCategory,
    pub flags: PropertyFlags,
}

impl CodepointProperties {
    /// The record every unassigned codepoint maps to.
    pub const DEFAULT: Self = Self {
        general_category: GeneralCategory::Unassigned,
        script: Script::Unknown,
        east_asian_width: EastAsianWidth::Neutral,
        grapheme_cluster_break: GraphemeClusterBreak::Other,
        emoji_segmentation_category: EmojiSegmentationCategory::Invalid,
        flags: PropertyFlags::NONE,
    };
}

/// The compressed, immutable property table.
///
/// Lookups walk `stage1` to find a 256-entry `stage2` block, and the block to
/// find the index of the deduplicated record:
/// `properties[stage2[stage1[cp >> 8] * 256 + (cp & 255)]]`.
///
/// Once built, the table is never mutated; sharing it across threads without
/// synchronization is fine.
#[derive(Debug)]
pub struct PropertiesTable {
    stage1: Box<[u16]>,
    stage2: Box<[u16]>,
    properties: Box<[CodepointProperties]>,
}

impl PropertiesTable {
    /// Looks up the property record of `cp`.
    ///
    /// Values outside the Unicode scalar range return the
    /// [default record](CodepointProperties::DEFAULT).
    #[inline]
    pub fn get(&self, cp: u32) -> &CodepointProperties {
        let cp = cp as usize;
        if cp >= NUM_CODEPOINTS {
            return &CodepointProperties::DEFAULT;
        }
        let block = self.stage1[cp >> BLOCK_SHIFT] as usize;
        let index = self.stage2[block * BLOCK_SIZE + (cp & (BLOCK_SIZE - 1))] as usize;
        &self.properties[index]
    }

    /// Compresses one record per codepoint into the two-stage form.
    ///
    /// Blocks of 256 records are deduplicated against every block emitted
    /// before them, and the surviving blocks store indices into a
    /// deduplicated record array. Fails if either index space outgrows `u16`,
    /// which no published UCD comes close to.
    pub fn from_records(records: &[CodepointProperties]) -> Result<Self, LoadError> {
        assert_eq!(records.len(), NUM_CODEPOINTS);

        let mut stage1 = Vec::with_capacity(NUM_CODEPOINTS / BLOCK_SIZE);
        let mut stage2 = Vec::new();
        let mut properties = Vec::new();
        let mut block_cache: HashMap<&[CodepointProperties], u16> = HashMap::new();
        let mut record_cache: HashMap<CodepointProperties, u16> = HashMap::new();

        for block in records.chunks_exact(BLOCK_SIZE) {
            if let Some(&stage1_index) = block_cache.get(block) {
                stage1.push(stage1_index);
                continue;
            }

            let stage1_index = stage1_index_for(stage2.len() / BLOCK_SIZE)?;
            for &record in block {
                let index = match record_cache.entry(record) {
                    Entry::Occupied(entry) => *entry.get(),
                    Entry::Vacant(entry) => {
                        let index = stage2_index_for(properties.len())?;
                        properties.push(record);
                        *entry.insert(index)
                    }
                };
                stage2.push(index);
            }

            block_cache.insert(block, stage1_index);
            stage1.push(stage1_index);
        }

        let table = Self {
            stage1: stage1.into_boxed_slice(),
            stage2: stage2.into_boxed_slice(),
            properties: properties.into_boxed_slice(),
        };
        table.debug_verify(records);
        Ok(table)
    }

    /// Rebuilds a table from the persisted stage1/stage2/properties arrays,
    /// the format `ucd-table-gen` emits. All indices are bounds-checked.
    pub fn from_parts(
        stage1: Vec<u16>,
        stage2: Vec<u16>,
        properties: Vec<CodepointProperties>,
    ) -> Result<Self, LoadError> {
        let blocks = stage2.len() / BLOCK_SIZE;
        if stage1.len() != NUM_CODEPOINTS / BLOCK_SIZE || stage2.len() % BLOCK_SIZE != 0 {
            return Err(LoadError::MalformedTable("stage lengths"));
        }
        if stage1.iter().any(|&block| block as usize >= blocks) {
            return Err(LoadError::MalformedTable("stage1 index out of range"));
        }
        if stage2.iter().any(|&index| index as usize >= properties.len()) {
            return Err(LoadError::MalformedTable("stage2 index out of range"));
        }
        Ok(Self {
            stage1: stage1.into_boxed_slice(),
            stage2: stage2.into_boxed_slice(),
            properties: properties.into_boxed_slice(),
        })
    }

    /// The raw table arrays in stage1/stage2/properties order.
    pub fn as_parts(&self) -> (&[u16], &[u16], &[CodepointProperties]) {
        (&self.stage1, &self.stage2, &self.properties)
    }

    // In debug builds, every lookup is checked against its source record
    // right after compression.
    #[cfg(debug_assertions)]
    fn debug_verify(&self, records: &[CodepointProperties]) {
        for (cp, record) in records.iter().enumerate() {
            assert_eq!(self.get(cp as u32), record, "table mismatch for U+{cp:04X}");
        }
    }

    #[cfg(not(debug_assertions))]
    fn debug_verify(&self, _records: &[CodepointProperties]) {}
}

fn stage1_index_for(block: usize) -> Result<u16, LoadError> {
    u16::try_from(block).map_err(|_| LoadError::IndexOverflow("stage1"))
}

fn stage2_index_for(index: usize) -> Result<u16, LoadError> {
    u16::try_from(index).map_err(|_| LoadError::IndexOverflow("stage2"))
}
