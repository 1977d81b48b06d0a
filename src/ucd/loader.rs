// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::time::Instant;
use std::{fmt, fs, io};

use super::enums::*;
use super::properties::{CodepointProperties, NUM_CODEPOINTS, PropertiesTable};

/// A fatal error while building the property table.
///
/// Everything here is a build-time failure; the runtime lookup path cannot
/// fail. Malformed data names the file and line it came from.
#[derive(Debug)]
pub enum LoadError {
    /// Reading a UCD file failed.
    Io { file: PathBuf, source: io::Error },
    /// A non-empty, non-comment line matched neither the single-codepoint nor
    /// the range form.
    MalformedLine { file: PathBuf, line: usize },
    /// A stage index outgrew its `u16` element type.
    IndexOverflow(&'static str),
    /// Persisted table arrays failed validation.
    MalformedTable(&'static str),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { file, source } => {
                write!(f, "failed to read {}: {source}", file.display())
            }
            LoadError::MalformedLine { file, line } => {
                write!(f, "{}:{line}: malformed property line", file.display())
            }
            LoadError::IndexOverflow(stage) => {
                write!(f, "{stage} index does not fit its element type")
            }
            LoadError::MalformedTable(what) => write!(f, "persisted table rejected: {what}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Builds a [`PropertiesTable`] from an unpacked copy of the Unicode
/// Character Database.
///
/// `dir` must contain `Scripts.txt`, `DerivedCoreProperties.txt`,
/// `extracted/DerivedGeneralCategory.txt`,
/// `auxiliary/GraphemeBreakProperty.txt`, `EastAsianWidth.txt` and
/// `emoji/emoji-data.txt`. If `log` is given, per-file load timings are
/// written to it.
pub fn load_from_directory<'a>(
    dir: &'a Path,
    log: Option<&'a mut dyn io::Write>,
) -> Result<PropertiesTable, LoadError> {
    let mut loader = Loader {
        dir,
        log,
        records: vec![CodepointProperties::DEFAULT; NUM_CODEPOINTS],
    };
    loader.load()?;

    let start = Instant::now();
    let table = PropertiesTable::from_records(&loader.records)?;
    loader.log_timing("compressing tables", start);
    Ok(table)
}

struct Loader<'a> {
    dir: &'a Path,
    log: Option<&'a mut dyn io::Write>,
    records: Vec<CodepointProperties>,
}

impl Loader<'_> {
    fn load(&mut self) -> Result<(), LoadError> {
        self.process_file("Scripts.txt", |record, value| {
            record.script = Script::from_name(value).unwrap_or(Script::Unknown);
        })?;

        self.process_file("DerivedCoreProperties.txt", |record, value| {
            if let Some(flag) = PropertyFlags::from_name(value)
                && flag == PropertyFlags::GRAPHEME_EXTEND
            {
                record.flags |= flag;
            }
        })?;

        self.process_file("extracted/DerivedGeneralCategory.txt", |record, value| {
            if let Some(gc) = GeneralCategory::from_name(value) {
                record.general_category = gc;
            }
        })?;

        self.process_file("auxiliary/GraphemeBreakProperty.txt", |record, value| {
            if let Some(gcb) = GraphemeClusterBreak::from_name(value) {
                record.grapheme_cluster_break = gcb;
            }
        })?;

        self.process_file("EastAsianWidth.txt", |record, value| {
            if let Some(width) = EastAsianWidth::from_name(value) {
                record.east_asian_width = width;
            }
        })?;

        self.process_file("emoji/emoji-data.txt", |record, value| {
            if let Some(flag) = PropertyFlags::from_name(value)
                && flag != PropertyFlags::GRAPHEME_EXTEND
            {
                record.flags |= flag;
            }
        })?;

        let start = Instant::now();
        for (cp, record) in self.records.iter_mut().enumerate() {
            record.emoji_segmentation_category = emoji_segmentation_category(cp as u32, record);
        }
        self.log_timing("assigning emoji segmentation categories", start);

        Ok(())
    }

    /// Applies one UCD file. Every non-empty, non-comment line must be either
    /// `HEX ; NAME` or `HEX..HEX ; NAME`; trailing fields and comments are
    /// ignored, as are names the callback does not recognize.
    fn process_file(
        &mut self,
        suffix: &str,
        mut apply: impl FnMut(&mut CodepointProperties, &str),
    ) -> Result<(), LoadError> {
        let path = self.dir.join(suffix);
        let start = Instant::now();
        let content = fs::read_to_string(&path).map_err(|source| LoadError::Io {
            file: path.clone(),
            source,
        })?;

        for (index, raw) in content.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }

            let malformed = || LoadError::MalformedLine {
                file: path.clone(),
                line: index + 1,
            };

            let Some((range, rest)) = line.split_once(';') else {
                return Err(malformed());
            };
            let value = rest.split(';').next().unwrap_or_default().trim();
            if value.is_empty() {
                return Err(malformed());
            }

            let (first, last) = match range.trim().split_once("..") {
                Some((first, last)) => (parse_codepoint(first), parse_codepoint(last)),
                None => {
                    let cp = parse_codepoint(range.trim());
                    (cp, cp)
                }
            };
            let (Some(first), Some(last)) = (first, last) else {
                return Err(malformed());
            };
            if first > last {
                return Err(malformed());
            }

            for record in &mut self.records[first as usize..=last as usize] {
                apply(record, value);
            }
        }

        self.log_timing(suffix, start);
        Ok(())
    }

    fn log_timing(&mut self, what: &str, start: Instant) {
        if let Some(log) = self.log.as_deref_mut() {
            _ = writeln!(log, "{}: {} ms", what, start.elapsed().as_millis());
        }
    }
}

fn parse_codepoint(hex: &str) -> Option<u32> {
    if hex.is_empty() || hex.len() > 6 {
        return None;
    }
    let cp = u32::from_str_radix(hex, 16).ok()?;
    (cp < NUM_CODEPOINTS as u32).then_some(cp)
}

/// Derives the UTS #51 segmentation class from a codepoint and its other
/// properties. First match wins.
pub(crate) fn emoji_segmentation_category(
    cp: u32,
    record: &CodepointProperties,
) -> EmojiSegmentationCategory {
    use EmojiSegmentationCategory as Esc;

    match cp {
        0x20E3 => return Esc::CombiningEnclosingKeyCap,
        0x20E0 => return Esc::CombiningEnclosingCircleBackslash,
        0x200D => return Esc::ZWJ,
        0xFE0E => return Esc::VS15,
        0xFE0F => return Esc::VS16,
        0x1F3F4 => return Esc::TagBase,
        0xE0030..=0xE0039 | 0xE0061..=0xE007A => return Esc::TagSequence,
        0xE007F => return Esc::TagTerm,
        _ => {}
    }

    if record.flags.contains(PropertyFlags::EMOJI_MODIFIER_BASE) {
        Esc::EmojiModifierBase
    } else if record.flags.contains(PropertyFlags::EMOJI_MODIFIER) {
        Esc::EmojiModifier
    } else if record.grapheme_cluster_break == GraphemeClusterBreak::RegionalIndicator {
        Esc::RegionalIndicator
    } else if matches!(cp, 0x30..=0x39 | 0x23 | 0x2A) {
        Esc::KeyCapBase
    } else if record.flags.contains(PropertyFlags::EMOJI_PRESENTATION) {
        Esc::EmojiEmojiPresentation
    } else if record.flags.contains(PropertyFlags::EMOJI) {
        Esc::EmojiTextPresentation
    } else {
        Esc::Invalid
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write_ucd_fixture(dir: &Path) {
        fs::create_dir_all(dir.join("extracted")).unwrap();
        fs::create_dir_all(dir.join("auxiliary")).unwrap();
        fs::create_dir_all(dir.join("emoji")).unwrap();

        fs::write(
            dir.join("Scripts.txt"),
            "# Scripts-15.1.0.txt\n\
             0041..005A    ; Latin # L&  [26] LATIN CAPITAL LETTER A..Z\n\
             00E9          ; Latin\n\
             4E00..9FFF    ; Han\n\
             0300..036F    ; Inherited\n",
        )
        .unwrap();
        fs::write(
            dir.join("DerivedCoreProperties.txt"),
            "0300..036F    ; Grapheme_Extend # Mn\n\
             0041..005A    ; Alphabetic # ignored here\n\
             200D          ; Case_Ignorable # ignored here\n",
        )
        .unwrap();
        fs::write(
            dir.join("extracted/DerivedGeneralCategory.txt"),
            "0000..001F    ; Cc\n\
             0041..005A    ; Lu\n\
             00AD          ; Cf\n\
             00E9          ; Ll\n\
             0300..036F    ; Mn\n\
             200D          ; Cf\n\
             FE0E..FE0F    ; Mn\n\
             4E00..9FFF    ; Lo\n\
             1F1E6..1F1FF  ; So\n\
             1F300..1F6FF  ; So\n",
        )
        .unwrap();
        fs::write(
            dir.join("auxiliary/GraphemeBreakProperty.txt"),
            "000D          ; CR\n\
             000A          ; LF\n\
             0000..0009    ; Control\n\
             000B..000C    ; Control\n\
             000E..001F    ; Control\n\
             00AD          ; Control\n\
             0300..036F    ; Extend\n\
             200D          ; ZWJ\n\
             FE0E..FE0F    ; Extend\n\
             1F1E6..1F1FF  ; Regional_Indicator\n\
             1F3FB..1F3FF  ; Extend\n",
        )
        .unwrap();
        fs::write(
            dir.join("EastAsianWidth.txt"),
            "00E9          ; A\n\
             4E00..9FFF    ; W\n\
             FF01..FF60    ; F\n\
             1F300..1F6FF  ; W\n",
        )
        .unwrap();
        fs::write(
            dir.join("emoji/emoji-data.txt"),
            "0023          ; Emoji\n\
             1F1E6..1F1FF  ; Emoji\n\
             1F300..1F6FF  ; Emoji\n\
             1F1E6..1F1FF  ; Emoji_Presentation\n\
             1F300..1F6FF  ; Emoji_Presentation\n\
             1F3FB..1F3FF  ; Emoji_Modifier\n\
             1F466..1F469  ; Emoji_Modifier_Base\n\
             1F1E6..1F1FF  ; Emoji_Component\n\
             1F300..1F6FF  ; Extended_Pictographic\n",
        )
        .unwrap();
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_ucd_fixture(dir.path());

        let mut log = Vec::new();
        let table = load_from_directory(dir.path(), Some(&mut log)).unwrap();
        assert!(String::from_utf8(log).unwrap().contains("EastAsianWidth.txt"));

        let a = table.get('A' as u32);
        assert_eq!(a.general_category, GeneralCategory::UppercaseLetter);
        assert_eq!(a.script, Script::Latin);
        assert_eq!(a.east_asian_width, EastAsianWidth::Neutral);

        let han = table.get(0x4F60); // 你
        assert_eq!(han.script, Script::Han);
        assert_eq!(han.east_asian_width, EastAsianWidth::Wide);
        assert_eq!(han.grapheme_cluster_break, GraphemeClusterBreak::Other);

        let acute = table.get(0x0301);
        assert_eq!(acute.grapheme_cluster_break, GraphemeClusterBreak::Extend);
        assert!(acute.flags.contains(PropertyFlags::GRAPHEME_EXTEND));

        let ri = table.get(0x1F1E9);
        assert_eq!(ri.grapheme_cluster_break, GraphemeClusterBreak::RegionalIndicator);
        assert_eq!(ri.emoji_segmentation_category, EmojiSegmentationCategory::RegionalIndicator);
        assert!(ri.flags.contains(PropertyFlags::EMOJI | PropertyFlags::EMOJI_PRESENTATION));

        // Unassigned codepoints keep the default record.
        assert_eq!(table.get(0x10FFFD), &CodepointProperties::DEFAULT);
    }

    #[test]
    fn test_emoji_segmentation_categories() {
        let dir = tempfile::tempdir().unwrap();
        write_ucd_fixture(dir.path());
        let table = load_from_directory(dir.path(), None).unwrap();

        use EmojiSegmentationCategory as Esc;
        assert_eq!(table.get(0x200D).emoji_segmentation_category, Esc::ZWJ);
        assert_eq!(table.get(0xFE0E).emoji_segmentation_category, Esc::VS15);
        assert_eq!(table.get(0xFE0F).emoji_segmentation_category, Esc::VS16);
        assert_eq!(table.get(0x20E3).emoji_segmentation_category, Esc::CombiningEnclosingKeyCap);
        assert_eq!(table.get(0xE0061).emoji_segmentation_category, Esc::TagSequence);
        assert_eq!(table.get(0xE007F).emoji_segmentation_category, Esc::TagTerm);
        assert_eq!(table.get('#' as u32).emoji_segmentation_category, Esc::KeyCapBase);
        assert_eq!(table.get('7' as u32).emoji_segmentation_category, Esc::KeyCapBase);
        assert_eq!(table.get(0x1F3FB).emoji_segmentation_category, Esc::EmojiModifier);
        assert_eq!(table.get(0x1F469).emoji_segmentation_category, Esc::EmojiModifierBase);
        assert_eq!(table.get(0x1F600).emoji_segmentation_category, Esc::EmojiEmojiPresentation);
        assert_eq!(table.get('A' as u32).emoji_segmentation_category, Esc::Invalid);
        // The tag base flag wins over its emoji flags.
        assert_eq!(table.get(0x1F3F4).emoji_segmentation_category, Esc::TagBase);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_directory(dir.path(), None).unwrap_err();
        match err {
            LoadError::Io { file, .. } => {
                assert!(file.ends_with("Scripts.txt"));
            }
            other => panic!("expected Io error, got {other}"),
        }
    }

    #[test]
    fn test_malformed_line_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_ucd_fixture(dir.path());
        fs::write(
            dir.path().join("Scripts.txt"),
            "0041..005A ; Latin\nnot a property line\n",
        )
        .unwrap();

        let err = load_from_directory(dir.path(), None).unwrap_err();
        match err {
            LoadError::MalformedLine { file, line } => {
                assert!(file.ends_with("Scripts.txt"));
                assert_eq!(line, 2);
            }
            other => panic!("expected MalformedLine, got {other}"),
        }
    }

    #[test]
    fn test_range_and_hex_forms() {
        let dir = tempfile::tempdir().unwrap();
        write_ucd_fixture(dir.path());
        // Lowercase hex and a reversed range.
        fs::write(dir.path().join("Scripts.txt"), "00e9 ; Latin\n").unwrap();
        assert!(load_from_directory(dir.path(), None).is_ok());

        fs::write(dir.path().join("Scripts.txt"), "0050..0040 ; Latin\n").unwrap();
        assert!(matches!(
            load_from_directory(dir.path(), None),
            Err(LoadError::MalformedLine { line: 1, .. })
        ));

        fs::write(dir.path().join("Scripts.txt"), "110000 ; Latin\n").unwrap();
        assert!(matches!(
            load_from_directory(dir.path(), None),
            Err(LoadError::MalformedLine { line: 1, .. })
        ));
    }
}
