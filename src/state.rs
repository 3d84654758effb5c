//! The mutable accumulator that threads tag state across lines up to the next URI.
//!
//! Two categories of cross-line state are kept as distinct fields rather than conflated: sticky
//! references (`current_key`, `current_map`) that apply to every following segment until
//! overwritten, and pending one-shots that attach to exactly the next finalized segment.

use crate::document::{DateRange, RawAttr, Segment, Variant};
use std::rc::Rc;

/// The four SCTE-35-related strings that travel together across a cue-out span.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CuePayload {
    pub scte35: Option<String>,
    pub oatcls_scte35: Option<String>,
    pub scte35_duration: Option<String>,
    pub scte35_elapsedtime: Option<String>,
}

/// The cue-out span state machine, in place of an ad-hoc boolean.
///
/// - `Idle`: no payload staged, not inside a span.
/// - `Open`: inside a cue-out span; every segment finalized while open gets a *copy* of the
///   payload (shared cheaply via `Rc`, since the payload itself is never mutated in place while
///   a reference to it might be held by a previous clone).
/// - `Pending`: not inside a span, but a payload is staged and waiting to be *moved* into exactly
///   the next finalized segment. Reached either by `#EXT-X-CUE-IN` closing an open span (the
///   payload survives for one more segment) or by a standalone `#EXT-OATCLS-SCTE35` with no
///   surrounding cue-out span at all.
#[derive(Debug, Clone, Default)]
pub enum CueState {
    #[default]
    Idle,
    Open(Rc<CuePayload>),
    Pending(CuePayload),
}

impl CueState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// The payload currently staged, regardless of span state (empty default if `Idle`).
    pub fn payload(&self) -> CuePayload {
        match self {
            Self::Idle => CuePayload::default(),
            Self::Open(rc) => (**rc).clone(),
            Self::Pending(p) => p.clone(),
        }
    }

    /// Replace the payload, opening (or keeping open) the span.
    pub fn open_with(payload: CuePayload) -> Self {
        Self::Open(Rc::new(payload))
    }

    /// Mutate the currently staged payload in place, promoting `Idle` to `Pending` so the value
    /// is not lost even outside of an open span (`#EXT-OATCLS-SCTE35` used standalone).
    pub fn stage(self, f: impl FnOnce(&mut CuePayload)) -> Self {
        match self {
            Self::Open(rc) => {
                let mut payload = (*rc).clone();
                f(&mut payload);
                Self::Open(Rc::new(payload))
            }
            Self::Pending(mut payload) => {
                f(&mut payload);
                Self::Pending(payload)
            }
            Self::Idle => {
                let mut payload = CuePayload::default();
                f(&mut payload);
                Self::Pending(payload)
            }
        }
    }

    /// `#EXT-X-CUE-IN`: close an open span, carrying its payload forward for exactly one more
    /// segment. No-op if already closed.
    pub fn close(self) -> Self {
        match self {
            Self::Open(rc) => Self::Pending((*rc).clone()),
            other => other,
        }
    }
}

/// Mutable parser state threaded across tag lines between two URI lines.
#[derive(Debug, Default)]
pub struct ParserState {
    /// The in-progress segment, lazily created by the first per-segment tag.
    pub current_segment: Option<Segment>,
    /// Staged attributes for an in-progress `#EXT-X-STREAM-INF`, finalized into a [`Variant`] at
    /// the next URI line.
    pub pending_variant: Option<Variant>,

    /// Sticky: index into `Document::keys` of the most recently parsed `#EXT-X-KEY`.
    pub current_key: Option<usize>,
    /// Sticky: index into `Document::maps` of the most recently parsed `#EXT-X-MAP`.
    pub current_map: Option<usize>,

    /// One-shot: staged `#EXT-X-PROGRAM-DATE-TIME` value for the next finalized segment.
    pub pending_program_date_time: Option<String>,
    /// One-shot: set by `#EXT-X-DISCONTINUITY`.
    pub discontinuity: bool,
    /// One-shot: set by `#EXT-X-GAP`.
    pub gap: bool,
    /// One-shot: set by `#EXT-X-BLACKOUT`.
    pub blackout: Option<String>,
    /// One-shot: set by `#EXT-X-CUE-IN`.
    pub cue_in: bool,
    /// One-shot: true only for the first segment of a cue-out span.
    pub cue_out_start: bool,
    /// One-shot: true if the `#EXT-X-CUE-OUT` body contained a literal `DURATION` token.
    pub cue_out_explicitly_duration: bool,
    /// One-shot: staged attribute list from `#EXT-X-ASSET`, copied/moved per the same open/closed
    /// rule as the SCTE-35 quartet.
    pub pending_asset_metadata: Option<Vec<RawAttr>>,
    /// One-shot: dateranges staged since the last finalized segment or part.
    pub pending_dateranges: Vec<DateRange>,

    /// The cue-out span state machine.
    pub cue_state: CueState,
}

impl ParserState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get (creating if absent) the in-progress segment.
    pub fn segment_mut(&mut self) -> &mut Segment {
        self.current_segment.get_or_insert_with(Segment::default)
    }
}
