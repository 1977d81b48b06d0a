// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The property value enumerations stored in a [`CodepointProperties`] record.
//!
//! Each enum knows how to parse the names used by the corresponding UCD file.
//! Unrecognized names are reported as `None` so that loaders stay forward
//! compatible with newer UCD releases.
//!
//! [`CodepointProperties`]: super::CodepointProperties

use std::ops::{BitOr, BitOrAssign};

/// UCD `General_Category`, parsed from its two-letter abbreviation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GeneralCategory {
    #[default]
    Unassigned, // Cn

    UppercaseLetter, // Lu
    LowercaseLetter, // Ll
    TitlecaseLetter, // Lt
    ModifierLetter,  // Lm
    OtherLetter,     // Lo

    NonspacingMark, // Mn
    EnclosingMark,  // Me
    SpacingMark,    // Mc

    DecimalNumber, // Nd
    LetterNumber,  // Nl
    OtherNumber,   // No

    SpaceSeparator,     // Zs
    LineSeparator,      // Zl
    ParagraphSeparator, // Zp

    Control,    // Cc
    Format,     // Cf
    PrivateUse, // Co
    Surrogate,  // Cs

    DashPunctuation,      // Pd
    OpenPunctuation,      // Ps
    ClosePunctuation,     // Pe
    ConnectorPunctuation, // Pc
    OtherPunctuation,     // Po
    InitialPunctuation,   // Pi
    FinalPunctuation,     // Pf

    MathSymbol,     // Sm
    CurrencySymbol, // Sc
    ModifierSymbol, // Sk
    OtherSymbol,    // So
}

impl GeneralCategory {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "Cn" => Self::Unassigned,
            "Lu" => Self::UppercaseLetter,
            "Ll" => Self::LowercaseLetter,
            "Lt" => Self::TitlecaseLetter,
            "Lm" => Self::ModifierLetter,
            "Lo" => Self::OtherLetter,
            "Mn" => Self::NonspacingMark,
            "Me" => Self::EnclosingMark,
            "Mc" => Self::SpacingMark,
            "Nd" => Self::DecimalNumber,
            "Nl" => Self::LetterNumber,
            "No" => Self::OtherNumber,
            "Zs" => Self::SpaceSeparator,
            "Zl" => Self::LineSeparator,
            "Zp" => Self::ParagraphSeparator,
            "Cc" => Self::Control,
            "Cf" => Self::Format,
            "Co" => Self::PrivateUse,
            "Cs" => Self::Surrogate,
            "Pd" => Self::DashPunctuation,
            "Ps" => Self::OpenPunctuation,
            "Pe" => Self::ClosePunctuation,
            "Pc" => Self::ConnectorPunctuation,
            "Po" => Self::OtherPunctuation,
            "Pi" => Self::InitialPunctuation,
            "Pf" => Self::FinalPunctuation,
            "Sm" => Self::MathSymbol,
            "Sc" => Self::CurrencySymbol,
            "Sk" => Self::ModifierSymbol,
            "So" => Self::OtherSymbol,
            _ => return None,
        })
    }
}

/// UCD `Script`, parsed from the long names used by `Scripts.txt`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Script {
    #[default]
    Unknown,
    Common,
    Inherited,

    Adlam,
    Ahom,
    AnatolianHieroglyphs,
    Arabic,
    Armenian,
    Avestan,
    Balinese,
    Bamum,
    BassaVah,
    Batak,
    Bengali,
    Bhaiksuki,
    Bopomofo,
    Brahmi,
    Braille,
    Buginese,
    Buhid,
    CanadianAboriginal,
    Carian,
    CaucasianAlbanian,
    Chakma,
    Cham,
    Cherokee,
    Chorasmian,
    Coptic,
    Cuneiform,
    Cypriot,
    CyproMinoan,
    Cyrillic,
    Deseret,
    Devanagari,
    DivesAkuru,
    Dogra,
    Duployan,
    EgyptianHieroglyphs,
    Elbasan,
    Elymaic,
    Ethiopic,
    Georgian,
    Glagolitic,
    Gothic,
    Grantha,
    Greek,
    Gujarati,
    GunjalaGondi,
    Gurmukhi,
    Han,
    Hangul,
    HanifiRohingya,
    Hanunoo,
    Hatran,
    Hebrew,
    Hiragana,
    ImperialAramaic,
    InscriptionalPahlavi,
    InscriptionalParthian,
    Javanese,
    Kaithi,
    Kannada,
    Katakana,
    Kawi,
    KayahLi,
    Kharoshthi,
    KhitanSmallScript,
    Khmer,
    Khojki,
    Khudawadi,
    Lao,
    Latin,
    Lepcha,
    Limbu,
    LinearA,
    LinearB,
    Lisu,
    Lycian,
    Lydian,
    Mahajani,
    Makasar,
    Malayalam,
    Mandaic,
    Manichaean,
    Marchen,
    MasaramGondi,
    Medefaidrin,
    MeeteiMayek,
    MendeKikakui,
    MeroiticCursive,
    MeroiticHieroglyphs,
    Miao,
    Modi,
    Mongolian,
    Mro,
    Multani,
    Myanmar,
    Nabataean,
    NagMundari,
    Nandinagari,
    NewTaiLue,
    Newa,
    Nko,
    Nushu,
    NyiakengPuachueHmong,
    Ogham,
    OlChiki,
    OldHungarian,
    OldItalic,
    OldNorthArabian,
    OldPermic,
    OldPersian,
    OldSogdian,
    OldSouthArabian,
    OldTurkic,
    OldUyghur,
    Oriya,
    Osage,
    Osmanya,
    PahawhHmong,
    Palmyrene,
    PauCinHau,
    PhagsPa,
    Phoenician,
    PsalterPahlavi,
    Rejang,
    Runic,
    Samaritan,
    Saurashtra,
    Sharada,
    Shavian,
    Siddham,
    SignWriting,
    Sinhala,
    Sogdian,
    SoraSompeng,
    Soyombo,
    Sundanese,
    SylotiNagri,
    Syriac,
    Tagalog,
    Tagbanwa,
    TaiLe,
    TaiTham,
    TaiViet,
    Takri,
    Tamil,
    Tangsa,
    Tangut,
    Telugu,
    Thaana,
    Thai,
    Tibetan,
    Tifinagh,
    Tirhuta,
    Toto,
    Ugaritic,
    Vai,
    Vithkuqi,
    Wancho,
    WarangCiti,
    Yezidi,
    Yi,
    ZanabazarSquare,
}

impl Script {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "Unknown" => Self::Unknown,
            "Common" => Self::Common,
            "Inherited" => Self::Inherited,
            "Adlam" => Self::Adlam,
            "Ahom" => Self::Ahom,
            "Anatolian_Hieroglyphs" => Self::AnatolianHieroglyphs,
            "Arabic" => Self::Arabic,
            "Armenian" => Self::Armenian,
            "Avestan" => Self::Avestan,
            "Balinese" => Self::Balinese,
            "Bamum" => Self::Bamum,
            "Bassa_Vah" => Self::BassaVah,
            "Batak" => Self::Batak,
            "Bengali" => Self::Bengali,
            "Bhaiksuki" => Self::Bhaiksuki,
            "Bopomofo" => Self::Bopomofo,
            "Brahmi" => Self::Brahmi,
            "Braille" => Self::Braille,
            "Buginese" => Self::Buginese,
            "Buhid" => Self::Buhid,
            "Canadian_Aboriginal" => Self::CanadianAboriginal,
            "Carian" => Self::Carian,
            "Caucasian_Albanian" => Self::CaucasianAlbanian,
            "Chakma" => Self::Chakma,
            "Cham" => Self::Cham,
            "Cherokee" => Self::Cherokee,
            "Chorasmian" => Self::Chorasmian,
            "Coptic" => Self::Coptic,
            "Cuneiform" => Self::Cuneiform,
            "Cypriot" => Self::Cypriot,
            "Cypro_Minoan" => Self::CyproMinoan,
            "Cyrillic" => Self::Cyrillic,
            "Deseret" => Self::Deseret,
            "Devanagari" => Self::Devanagari,
            "Dives_Akuru" => Self::DivesAkuru,
            "Dogra" => Self::Dogra,
            "Duployan" => Self::Duployan,
            "Egyptian_Hieroglyphs" => Self::EgyptianHieroglyphs,
            "Elbasan" => Self::Elbasan,
            "Elymaic" => Self::Elymaic,
            "Ethiopic" => Self::Ethiopic,
            "Georgian" => Self::Georgian,
            "Glagolitic" => Self::Glagolitic,
            "Gothic" => Self::Gothic,
            "Grantha" => Self::Grantha,
            "Greek" => Self::Greek,
            "Gujarati" => Self::Gujarati,
            "Gunjala_Gondi" => Self::GunjalaGondi,
            "Gurmukhi" => Self::Gurmukhi,
            "Han" => Self::Han,
            "Hangul" => Self::Hangul,
            "Hanifi_Rohingya" => Self::HanifiRohingya,
            "Hanunoo" => Self::Hanunoo,
            "Hatran" => Self::Hatran,
            "Hebrew" => Self::Hebrew,
            "Hiragana" => Self::Hiragana,
            "Imperial_Aramaic" => Self::ImperialAramaic,
            "Inscriptional_Pahlavi" => Self::InscriptionalPahlavi,
            "Inscriptional_Parthian" => Self::InscriptionalParthian,
            "Javanese" => Self::Javanese,
            "Kaithi" => Self::Kaithi,
            "Kannada" => Self::Kannada,
            "Katakana" => Self::Katakana,
            "Kawi" => Self::Kawi,
            "Kayah_Li" => Self::KayahLi,
            "Kharoshthi" => Self::Kharoshthi,
            "Khitan_Small_Script" => Self::KhitanSmallScript,
            "Khmer" => Self::Khmer,
            "Khojki" => Self::Khojki,
            "Khudawadi" => Self::Khudawadi,
            "Lao" => Self::Lao,
            "Latin" => Self::Latin,
            "Lepcha" => Self::Lepcha,
            "Limbu" => Self::Limbu,
            "Linear_A" => Self::LinearA,
            "Linear_B" => Self::LinearB,
            "Lisu" => Self::Lisu,
            "Lycian" => Self::Lycian,
            "Lydian" => Self::Lydian,
            "Mahajani" => Self::Mahajani,
            "Makasar" => Self::Makasar,
            "Malayalam" => Self::Malayalam,
            "Mandaic" => Self::Mandaic,
            "Manichaean" => Self::Manichaean,
            "Marchen" => Self::Marchen,
            "Masaram_Gondi" => Self::MasaramGondi,
            "Medefaidrin" => Self::Medefaidrin,
            "Meetei_Mayek" => Self::MeeteiMayek,
            "Mende_Kikakui" => Self::MendeKikakui,
            "Meroitic_Cursive" => Self::MeroiticCursive,
            "Meroitic_Hieroglyphs" => Self::MeroiticHieroglyphs,
            "Miao" => Self::Miao,
            "Modi" => Self::Modi,
            "Mongolian" => Self::Mongolian,
            "Mro" => Self::Mro,
            "Multani" => Self::Multani,
            "Myanmar" => Self::Myanmar,
            "Nabataean" => Self::Nabataean,
            "Nag_Mundari" => Self::NagMundari,
            "Nandinagari" => Self::Nandinagari,
            "New_Tai_Lue" => Self::NewTaiLue,
            "Newa" => Self::Newa,
            "Nko" => Self::Nko,
            "Nushu" => Self::Nushu,
            "Nyiakeng_Puachue_Hmong" => Self::NyiakengPuachueHmong,
            "Ogham" => Self::Ogham,
            "Ol_Chiki" => Self::OlChiki,
            "Old_Hungarian" => Self::OldHungarian,
            "Old_Italic" => Self::OldItalic,
            "Old_North_Arabian" => Self::OldNorthArabian,
            "Old_Permic" => Self::OldPermic,
            "Old_Persian" => Self::OldPersian,
            "Old_Sogdian" => Self::OldSogdian,
            "Old_South_Arabian" => Self::OldSouthArabian,
            "Old_Turkic" => Self::OldTurkic,
            "Old_Uyghur" => Self::OldUyghur,
            "Oriya" => Self::Oriya,
            "Osage" => Self::Osage,
            "Osmanya" => Self::Osmanya,
            "Pahawh_Hmong" => Self::PahawhHmong,
            "Palmyrene" => Self::Palmyrene,
            "Pau_Cin_Hau" => Self::PauCinHau,
            "Phags_Pa" => Self::PhagsPa,
            "Phoenician" => Self::Phoenician,
            "Psalter_Pahlavi" => Self::PsalterPahlavi,
            "Rejang" => Self::Rejang,
            "Runic" => Self::Runic,
            "Samaritan" => Self::Samaritan,
            "Saurashtra" => Self::Saurashtra,
            "Sharada" => Self::Sharada,
            "Shavian" => Self::Shavian,
            "Siddham" => Self::Siddham,
            "SignWriting" => Self::SignWriting,
            "Sinhala" => Self::Sinhala,
            "Sogdian" => Self::Sogdian,
            "Sora_Sompeng" => Self::SoraSompeng,
            "Soyombo" => Self::Soyombo,
            "Sundanese" => Self::Sundanese,
            "Syloti_Nagri" => Self::SylotiNagri,
            "Syriac" => Self::Syriac,
            "Tagalog" => Self::Tagalog,
            "Tagbanwa" => Self::Tagbanwa,
            "Tai_Le" => Self::TaiLe,
            "Tai_Tham" => Self::TaiTham,
            "Tai_Viet" => Self::TaiViet,
            "Takri" => Self::Takri,
            "Tamil" => Self::Tamil,
            "Tangsa" => Self::Tangsa,
            "Tangut" => Self::Tangut,
            "Telugu" => Self::Telugu,
            "Thaana" => Self::Thaana,
            "Thai" => Self::Thai,
            "Tibetan" => Self::Tibetan,
            "Tifinagh" => Self::Tifinagh,
            "Tirhuta" => Self::Tirhuta,
            "Toto" => Self::Toto,
            "Ugaritic" => Self::Ugaritic,
            "Vai" => Self::Vai,
            "Vithkuqi" => Self::Vithkuqi,
            "Wancho" => Self::Wancho,
            "Warang_Citi" => Self::WarangCiti,
            "Yezidi" => Self::Yezidi,
            "Yi" => Self::Yi,
            "Zanabazar_Square" => Self::ZanabazarSquare,
            _ => return None,
        })
    }
}

/// UAX #11 `East_Asian_Width`, parsed from its abbreviation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EastAsianWidth {
    Ambiguous, // A
    Fullwidth, // F
    Halfwidth, // H
    #[default]
    Neutral, // N
    Narrow,    // Na
    Wide,      // W
}

impl EastAsianWidth {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "A" => Self::Ambiguous,
            "F" => Self::Fullwidth,
            "H" => Self::Halfwidth,
            "N" => Self::Neutral,
            "Na" => Self::Narrow,
            "W" => Self::Wide,
            _ => return None,
        })
    }
}

/// UAX #29 `Grapheme_Cluster_Break`, parsed from the long names used by
/// `auxiliary/GraphemeBreakProperty.txt`.
///
/// The `E_*` and `Glue_After_Zwj` values were retired from the UCD with
/// Unicode 11, but older data files still carry them, so they stay parseable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum GraphemeClusterBreak {
    #[default]
    Other,
    CR,
    LF,
    Control,
    Extend,
    ZWJ,
    RegionalIndicator,
    Prepend,
    SpacingMark,
    L,
    V,
    T,
    LV,
    LVT,
    EBase,
    EBaseGaz,
    EModifier,
    GlueAfterZwj,
    Undefined,
}

impl GraphemeClusterBreak {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "Other" => Self::Other,
            "CR" => Self::CR,
            "LF" => Self::LF,
            "Control" => Self::Control,
            "Extend" => Self::Extend,
            "ZWJ" => Self::ZWJ,
            "Regional_Indicator" => Self::RegionalIndicator,
            "Prepend" => Self::Prepend,
            "SpacingMark" => Self::SpacingMark,
            "L" => Self::L,
            "V" => Self::V,
            "T" => Self::T,
            "LV" => Self::LV,
            "LVT" => Self::LVT,
            "E_Base" => Self::EBase,
            "E_Base_GAZ" => Self::EBaseGaz,
            "E_Modifier" => Self::EModifier,
            "Glue_After_Zwj" => Self::GlueAfterZwj,
            "Undefined" => Self::Undefined,
            _ => return None,
        })
    }
}

/// The derived UTS #51 segmentation class of a codepoint.
///
/// This is a pure function of the codepoint value and the remaining record
/// fields; the loader computes it once for every scalar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum EmojiSegmentationCategory {
    #[default]
    Invalid,
    Emoji,
    EmojiTextPresentation,
    EmojiEmojiPresentation,
    EmojiModifier,
    EmojiModifierBase,
    RegionalIndicator,
    KeyCapBase,
    CombiningEnclosingKeyCap,
    CombiningEnclosingCircleBackslash,
    ZWJ,
    VS15,
    VS16,
    TagBase,
    TagSequence,
    TagTerm,
}

/// The boolean emoji and core properties of a codepoint, packed into a byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PropertyFlags(u8);

impl PropertyFlags {
    pub const NONE: Self = Self(0);
    pub const EMOJI: Self = Self(1 << 0);
    pub const EMOJI_COMPONENT: Self = Self(1 << 1);
    pub const EMOJI_MODIFIER: Self = Self(1 << 2);
    pub const EMOJI_MODIFIER_BASE: Self = Self(1 << 3);
    pub const EMOJI_PRESENTATION: Self = Self(1 << 4);
    pub const EXTENDED_PICTOGRAPHIC: Self = Self(1 << 5);
    /// `Grapheme_Extend` from `DerivedCoreProperties.txt`.
    pub const GRAPHEME_EXTEND: Self = Self(1 << 6);

    pub const fn contains(self, flags: Self) -> bool {
        self.0 & flags.0 == flags.0
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Maps a property name from `emoji/emoji-data.txt` or
    /// `DerivedCoreProperties.txt` to its flag bit.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "Emoji" => Self::EMOJI,
            "Emoji_Component" => Self::EMOJI_COMPONENT,
            "Emoji_Modifier" => Self::EMOJI_MODIFIER,
            "Emoji_Modifier_Base" => Self::EMOJI_MODIFIER_BASE,
            "Emoji_Presentation" => Self::EMOJI_PRESENTATION,
            "Extended_Pictographic" => Self::EXTENDED_PICTOGRAPHIC,
            "Grapheme_Extend" => Self::GRAPHEME_EXTEND,
            _ => return None,
        })
    }
}

impl BitOr for PropertyFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PropertyFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
