// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! A resumable, byte-at-a-time UTF-8 decoder.
//!
//! Unlike an iterator over a slice, this decoder owns no input: callers feed
//! it one byte per call and keep the [`Utf8DecoderState`] around for as long
//! as the logical stream lives. That makes it trivial to decode text that
//! arrives in arbitrary chunks, with multi-byte sequences straddling chunk
//! boundaries.
//!
//! See: <https://datatracker.ietf.org/doc/html/rfc3629>

/// Decode progress carried across calls (and across input buffers).
///
/// `expected_length == 0` means the decoder sits between codepoints.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Utf8DecoderState {
    expected_length: u8,
    current_length: u8,
    accumulator: u32,
}

impl Utf8DecoderState {
    /// True if a multi-byte sequence is waiting for more continuation bytes.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.expected_length != 0
    }
}

/// The three possible outcomes of feeding one byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decode {
    /// The byte was consumed, but the sequence needs more bytes.
    Incomplete,
    /// The byte completed a codepoint.
    Success(u32),
    /// The byte is not valid UTF-8 here. The state has been reset; the
    /// offending byte is consumed.
    Invalid,
}

/// Feeds one byte to the decoder.
///
/// Enforces RFC 3629 well-formedness: continuation bytes must be
/// `10xxxxxx`, and assembled codepoints may not be overlong encodings,
/// surrogates, or values above U+10FFFF. Whether a sequence survives is only
/// fully known on its final byte; the lead-byte ranges `0xC2..=0xDF`,
/// `0xE0..=0xEF` and `0xF0..=0xF4` reject the bulk of bad input up front.
///
/// After `Invalid`, the state is back at the start and the next byte begins a
/// fresh sequence.
#[inline]
pub fn decode(state: &mut Utf8DecoderState, byte: u8) -> Decode {
    if state.expected_length == 0 {
        return match byte {
            // UTF8-1 = %x00-7F
            0x00..=0x7F => Decode::Success(byte as u32),
            // UTF8-2 = %xC2-DF UTF8-tail
            0xC2..=0xDF => begin(state, 2, (byte & 0x1F) as u32),
            // UTF8-3 = %xE0-EF UTF8-tail UTF8-tail
            0xE0..=0xEF => begin(state, 3, (byte & 0x0F) as u32),
            // UTF8-4 = %xF0-F4 UTF8-tail UTF8-tail UTF8-tail
            0xF0..=0xF4 => begin(state, 4, (byte & 0x07) as u32),
            // Stray continuation bytes and the C0/C1/F5-FF leads.
            _ => Decode::Invalid,
        };
    }

    // UTF8-tail = %x80-BF
    if byte & 0xC0 != 0x80 {
        *state = Utf8DecoderState::default();
        return Decode::Invalid;
    }

    state.accumulator = (state.accumulator << 6) | (byte & 0x3F) as u32;
    state.current_length += 1;
    if state.current_length < state.expected_length {
        return Decode::Incomplete;
    }

    // Minimum value encodable at each sequence length; anything below is an
    // overlong encoding.
    const MIN_FOR_LENGTH: [u32; 5] = [0, 0, 0x80, 0x800, 0x10000];

    let cp = state.accumulator;
    let min = MIN_FOR_LENGTH[state.expected_length as usize];
    *state = Utf8DecoderState::default();

    if cp < min || cp > 0x10FFFF || (0xD800..=0xDFFF).contains(&cp) {
        return Decode::Invalid;
    }
    Decode::Success(cp)
}

#[inline]
fn begin(state: &mut Utf8DecoderState, expected_length: u8, bits: u32) -> Decode {
    state.expected_length = expected_length;
    state.current_length = 1;
    state.accumulator = bits;
    Decode::Incomplete
}
