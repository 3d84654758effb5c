//! The single-pass parse loop and the two finalizers.
//!
//! Ties the line scanner, tag dispatcher, and handlers together: tag lines mutate
//! [`ParserState`] and `Document`; URI lines call [`finalize_segment`] or [`finalize_playlist`]
//! to turn accumulated state into an appended record.

use crate::document::Document;
use crate::handlers;
use crate::line::{self, LineKind};
use crate::state::{CueState, ParserState};
use crate::tag_name::{self, TagName};

/// Run the parser to completion over already-scanned `input`, returning the accumulated
/// document. Never fails - structural failure (empty input) is checked by the caller
/// (`crate::parse_str`) before this is reached.
pub fn run(input: &str) -> Document {
    let mut doc = Document::default();
    let mut state = ParserState::new();

    for line in line::scan(input) {
        match line.kind {
            LineKind::Blank => {}
            LineKind::Tag => {
                if let Some((name, value)) = tag_name::split_name_and_value(line.content) {
                    if let Some(tag) = TagName::from_name(name) {
                        handlers::dispatch(&mut doc, &mut state, tag, value);
                    }
                }
                // Unrecognized `#` lines (including non-`#EXT` comments) are silently ignored.
            }
            LineKind::Uri => {
                let uri = line.content.to_string();
                if state.current_segment.is_some() || state.pending_variant.is_none() {
                    finalize_segment(&mut doc, &mut state, Some(uri));
                } else {
                    finalize_playlist(&mut doc, &mut state, uri);
                }
            }
        }
    }

    // End-of-input: flush any still-open segment (URI null).
    if state.current_segment.is_some() {
        finalize_segment(&mut doc, &mut state, None);
    }
    // A staged #EXT-X-STREAM-INF with no following URI is discarded, per the same rule -
    // nothing to append without a URI since Variant has no null-URI allowance like Segment does.

    doc
}

/// Consume all pending per-segment state, produce a `Segment`, append it, then reset the
/// one-shots.
fn finalize_segment(doc: &mut Document, state: &mut ParserState, uri: Option<String>) {
    let mut segment = state.current_segment.take().unwrap_or_default();

    segment.uri = uri;
    segment.discontinuity = state.discontinuity;
    segment.cue_in = state.cue_in;
    segment.cue_out = state.cue_state.is_open();
    segment.cue_out_start = state.cue_out_start;
    segment.cue_out_explicitly_duration = state.cue_out_explicitly_duration;
    segment.gap_tag = state.gap;
    segment.blackout = state.blackout.take();

    segment.program_date_time = state.pending_program_date_time.take();

    // SCTE-35 ownership rule: copy while the span is open, move (and clear) once it's closed.
    //
    // `cue_out` is reset at the end of every finalize_segment (below: Open downgrades to
    // Pending), so a span with no `#EXT-X-CUE-OUT-CONT` between two segments closes implicitly;
    // only a CONT (or a fresh CUE-OUT/CUE-SPAN) re-opens it before the next URI.
    let taken_cue_state = std::mem::take(&mut state.cue_state);
    match &taken_cue_state {
        CueState::Open(payload) => {
            segment.scte35 = payload.scte35.clone();
            segment.oatcls_scte35 = payload.oatcls_scte35.clone();
            segment.scte35_duration = payload.scte35_duration.clone();
            segment.scte35_elapsedtime = payload.scte35_elapsedtime.clone();
        }
        CueState::Pending(payload) => {
            segment.scte35 = payload.scte35.clone();
            segment.oatcls_scte35 = payload.oatcls_scte35.clone();
            segment.scte35_duration = payload.scte35_duration.clone();
            segment.scte35_elapsedtime = payload.scte35_elapsedtime.clone();
        }
        CueState::Idle => {}
    }
    state.cue_state = match taken_cue_state {
        CueState::Open(payload) => CueState::Pending((*payload).clone()),
        CueState::Pending(_) => CueState::Idle,
        CueState::Idle => CueState::Idle,
    };

    // Asset metadata follows the same copy-while-open / move-once-closed rule.
    if segment.cue_out {
        segment.asset_metadata = state.pending_asset_metadata.clone();
    } else {
        segment.asset_metadata = state.pending_asset_metadata.take();
    }

    segment.key = state.current_key;
    segment.init_section = state.current_map;

    segment.dateranges = std::mem::take(&mut state.pending_dateranges);

    doc.segments.push(segment);

    state.discontinuity = false;
    state.cue_in = false;
    state.cue_out_start = false;
    state.cue_out_explicitly_duration = false;
    state.gap = false;
}

/// Turn the staged `#EXT-X-STREAM-INF` attributes into an appended `Variant`.
fn finalize_playlist(doc: &mut Document, state: &mut ParserState, uri: String) {
    if let Some(mut variant) = state.pending_variant.take() {
        variant.uri = Some(uri);
        doc.variants.push(variant);
    }
}
