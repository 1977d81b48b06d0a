// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Scans UTF-8 text for grapheme clusters under a column budget.
//!
//! [`scan_text`] walks the input byte by byte, hands every completed piece to
//! a [`GraphemeClusterReceiver`], and stops once the next cluster would no
//! longer fit into `max_columns`. The caller owns a small [`ScanState`] which
//! makes the whole thing resumable: input may arrive in arbitrary chunks,
//! with UTF-8 sequences split across them.
//!
//! Runs of printable ASCII take a vectorized fast path
//! ([`crate::simd::scan_ascii`]); everything else goes through the streaming
//! decoder and the pairwise grapheme joiner.

use crate::grapheme;
use crate::simd;
use crate::ucd::{EmojiSegmentationCategory, PropertiesTable};
use crate::utf8::{self, Decode, Utf8DecoderState};
use crate::width;

/// Receives the pieces of a scanned text in input order.
///
/// The byte slices of consecutive callbacks are adjacent: concatenating them
/// (counting one UTF-8 error's bytes for `on_invalid_grapheme_cluster`)
/// reproduces exactly the consumed prefix of the input.
pub trait GraphemeClusterReceiver {
    /// A maximal run of printable ASCII, one column per byte.
    fn on_ascii_run(&mut self, run: &[u8]);
    /// A completed grapheme cluster and the columns it occupies.
    fn on_grapheme_cluster(&mut self, cluster: &[u8], width: usize);
    /// One malformed UTF-8 sequence; charged a single column.
    fn on_invalid_grapheme_cluster(&mut self);
}

/// Discards all callbacks. Useful when only the column count matters.
pub struct NullReceiver;

impl GraphemeClusterReceiver for NullReceiver {
    fn on_ascii_run(&mut self, _run: &[u8]) {}
    fn on_grapheme_cluster(&mut self, _cluster: &[u8], _width: usize) {}
    fn on_invalid_grapheme_cluster(&mut self) {}
}

/// Scanner state carried across calls of one logical stream.
///
/// Owned by the caller, one per stream, never shared between threads. A fresh
/// `ScanState::default()` starts a stream.
#[derive(Clone, Copy, Default, Debug)]
pub struct ScanState {
    /// Decoder progress for a UTF-8 sequence split across calls.
    pub utf8: Utf8DecoderState,
    /// The previous codepoint, or 0 if there is none. Feeds the pairwise
    /// grapheme joining decision for the first codepoint of the next call.
    pub last_codepoint_hint: u32,
    /// Offset just past the bytes consumed from the most recent input,
    /// including trailing bytes of a still-incomplete UTF-8 sequence.
    pub next: usize,
}

/// What one [`scan_text`] call covered.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ScanResult {
    /// Columns consumed; never exceeds the `max_columns` budget.
    pub count: usize,
    /// Start of the consumed prefix. Always 0 with the current, slice-based
    /// input.
    pub start: usize,
    /// End of the consumed prefix: every callback of this call lies within
    /// `bytes[start..end]`. Trailing bytes of an incomplete UTF-8 sequence
    /// are carried in the state instead and excluded here.
    pub end: usize,
}

struct ComplexResult {
    count: usize,
    end: usize,
    next: usize,
}

/// Scans a prefix of `text` worth at most `max_columns` terminal columns.
///
/// Returns once the budget is met, the input is exhausted, or a control
/// character is hit (controls occupy no column and are the caller's business,
/// e.g. a terminal's escape-sequence parser).
///
/// If the cluster at the budget boundary does not fit, the scan stops in
/// front of it: no callback fires for it, none of its columns count, and
/// `state.next` points at its first byte.
pub fn scan_text(
    table: &PropertiesTable,
    state: &mut ScanState,
    text: &[u8],
    max_columns: usize,
    receiver: &mut dyn GraphemeClusterReceiver,
) -> ScanResult {
    let mut result = ScanResult::default();
    let mut offset = 0;

    // Finish a codepoint split across the call boundary first.
    if state.utf8.is_pending() {
        let sub = scan_complex(table, state, text, max_columns, receiver);
        result.count = sub.count;
        result.end = sub.end;
        offset = sub.next;
    }

    if offset < text.len() {
        //       ----(a)--->   Trivial   -------> END
        //                   ^         |
        //                   |         |
        // Start            (a)       (b)
        //                   |         |
        //                   |         v
        //       ----(b)--->   Complex   -------> END
        let mut trivial = text[offset] < 0x80;

        while result.count < max_columns && offset < text.len() {
            if trivial {
                let run = simd::scan_ascii(&text[offset..], max_columns - result.count);
                if run == 0 {
                    break;
                }
                receiver.on_ascii_run(&text[offset..offset + run]);
                result.count += run;
                offset += run;
                result.end = offset;
                trivial = false;
            } else {
                let sub = scan_complex(
                    table,
                    state,
                    &text[offset..],
                    max_columns - result.count,
                    receiver,
                );
                if sub.count == 0 && sub.next == 0 {
                    break;
                }
                result.count += sub.count;
                result.end = offset + sub.end;
                offset += sub.next;
                trivial = true;
            }
        }
    }

    state.next = offset;
    debug_assert!(result.count <= max_columns);
    debug_assert!(result.end <= state.next);
    result
}

/// The slow path: one codepoint at a time through the streaming decoder and
/// the grapheme joiner. Returns on an ASCII byte, on budget exhaustion, or at
/// the end of the input.
fn scan_complex(
    table: &PropertiesTable,
    state: &mut ScanState,
    text: &[u8],
    max_columns: usize,
    receiver: &mut dyn GraphemeClusterReceiver,
) -> ComplexResult {
    let mut count = 0;
    let mut input = 0;
    // Consumed-prefix end; lags behind `input` while a sequence is undecided.
    let mut end = 0;
    // Bytes consumed for the codepoint currently in flight. After a resumed
    // sequence this counts only the bytes within this buffer.
    let mut byte_count = 0;
    // The open cluster: [cluster_start, end) once `in_cluster` is set. Its
    // width was already admitted against the budget, but is added to `count`
    // only when the cluster is flushed.
    let mut cluster_start = 0;
    let mut cluster_width = 0;
    let mut in_cluster = false;

    while input < text.len() && count <= max_columns {
        let byte = text[input];

        if byte < 0x80 {
            // ASCII and controls can never continue a multi-byte sequence:
            // if one was pending, it just turned out malformed.
            if state.utf8.is_pending() {
                cold_path();
                if in_cluster {
                    receiver.on_grapheme_cluster(&text[cluster_start..end], cluster_width);
                    count += cluster_width;
                    in_cluster = false;
                    cluster_width = 0;
                }
                if count >= max_columns {
                    // No room to charge the error; retry on the next call.
                    break;
                }
                count += 1;
                receiver.on_invalid_grapheme_cluster();
                state.utf8 = Utf8DecoderState::default();
                byte_count = 0;
            }
            // Back to the fast path; the byte itself stays unconsumed.
            state.last_codepoint_hint = 0;
            end = input;
            break;
        }

        input += 1;
        byte_count += 1;

        match utf8::decode(&mut state.utf8, byte) {
            Decode::Incomplete => {}
            Decode::Invalid => {
                cold_path();
                if in_cluster {
                    let cluster = &text[cluster_start..input - byte_count];
                    receiver.on_grapheme_cluster(cluster, cluster_width);
                    count += cluster_width;
                    in_cluster = false;
                    cluster_width = 0;
                }
                if count >= max_columns {
                    // The error's column doesn't fit anymore; hand the bytes
                    // back untouched.
                    input -= byte_count;
                    state.last_codepoint_hint = 0;
                    end = input;
                    break;
                }
                count += 1;
                receiver.on_invalid_grapheme_cluster();
                state.last_codepoint_hint = 0;
                byte_count = 0;
                cluster_start = input;
                end = input;
            }
            Decode::Success(cp) => {
                let prev = state.last_codepoint_hint;
                state.last_codepoint_hint = cp;

                if grapheme::breakable(table, prev, cp) {
                    if in_cluster {
                        let cluster = &text[cluster_start..input - byte_count];
                        receiver.on_grapheme_cluster(cluster, cluster_width);
                        count += cluster_width;
                        in_cluster = false;
                    }
                    let next_width = width::of(table, cp) as usize;
                    if count + next_width > max_columns {
                        cold_path();
                        // The new cluster won't fit. Break at its start.
                        input -= byte_count;
                        state.last_codepoint_hint = prev;
                        cluster_width = 0;
                        end = input;
                        break;
                    }
                    cluster_width = next_width;
                    cluster_start = input - byte_count;
                    in_cluster = true;
                } else {
                    // The codepoint extends the current cluster. Its own
                    // width never raises the cluster's, with one exception:
                    // VS16 upgrades the cluster to emoji presentation.
                    in_cluster = true;
                    if table.get(cp).emoji_segmentation_category == EmojiSegmentationCategory::VS16
                        && cluster_width < 2
                    {
                        cluster_width = 2;
                        if count + cluster_width > max_columns {
                            cold_path();
                            // The widened cluster no longer fits as a whole.
                            input = cluster_start;
                            state.utf8 = Utf8DecoderState::default();
                            state.last_codepoint_hint = 0;
                            cluster_width = 0;
                            in_cluster = false;
                            end = input;
                            break;
                        }
                    }
                }
                byte_count = 0;
                end = input;
            }
        }
    }

    // Whatever cluster is still open is complete as far as this buffer goes:
    // flush it. (A codepoint split across the buffer end stays pending in the
    // UTF-8 state and is not part of the flushed slice.)
    if in_cluster {
        receiver.on_grapheme_cluster(&text[cluster_start..end], cluster_width);
        count += cluster_width;
    }

    ComplexResult { count, end, next: input }
}

// Works just like `std::hint::cold_path`, but it's stable.
#[cold]
#[inline(always)]
const fn cold_path() {}
