//! The owned in-memory representation of a parsed playlist.
//!
//! Every field is an owned `String` (never a borrow into the input buffer), since a `Document`
//! is meant to outlive the buffer it was parsed from.

/// A fully parsed HLS playlist (media playlist, master/multivariant playlist, or a mixture of
/// both - mixed content is accepted rather than rejected).
///
/// `Document` and every type it owns contain no interior mutability and no shared ownership, so a
/// `Document` is `Send + Sync` and independent parses on independent threads never interact.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Document {
    /// The `#EXT-X-TARGETDURATION` value, in seconds.
    pub target_duration: Option<u64>,
    /// The `#EXT-X-VERSION` value.
    pub version: Option<u64>,
    /// The `#EXT-X-MEDIA-SEQUENCE` value. Cleared back to `None` if the playlist turns out to be
    /// a multivariant playlist (`#EXT-X-STREAM-INF` seen).
    pub media_sequence: Option<i64>,
    /// The `#EXT-X-DISCONTINUITY-SEQUENCE` value.
    pub discontinuity_sequence: Option<i64>,
    /// Lowercased value of `#EXT-X-ALLOW-CACHE`.
    pub allow_cache: Option<String>,
    /// Lowercased value of `#EXT-X-PLAYLIST-TYPE`.
    pub playlist_type: Option<String>,
    /// The first `#EXT-X-PROGRAM-DATE-TIME` seen anywhere in the playlist (document-scope
    /// "first occurrence wins", distinct from the per-segment value that follows the most
    /// recent occurrence).
    pub program_date_time: Option<String>,

    /// Set once any `#EXT-X-STREAM-INF` is seen - this is a multivariant playlist.
    pub is_variant: bool,
    /// Set by `#EXT-X-ENDLIST`.
    pub is_endlist: bool,
    /// Set by `#EXT-X-I-FRAMES-ONLY`.
    pub is_i_frames_only: bool,
    /// Set by `#EXT-X-INDEPENDENT-SEGMENTS`.
    pub is_independent_segments: bool,
    /// Set by `#EXT-X-IMAGES-ONLY`.
    pub is_images_only: bool,

    /// The most recently seen `#EXT-X-START`.
    pub start: Option<Start>,
    /// The most recently seen `#EXT-X-SERVER-CONTROL`.
    pub server_control: Option<ServerControl>,
    /// The most recently seen `#EXT-X-PART-INF`.
    pub part_inf: Option<PartInf>,
    /// The most recently seen `#EXT-X-SKIP`.
    pub skip: Option<Skip>,
    /// The most recently seen `#EXT-X-CONTENT-STEERING`.
    pub content_steering: Option<ContentSteering>,

    /// Every finalized media segment, in playlist order.
    pub segments: Vec<Segment>,
    /// Every `#EXT-X-STREAM-INF` variant, in playlist order.
    pub variants: Vec<Variant>,
    /// Every `#EXT-X-I-FRAME-STREAM-INF` variant, in playlist order.
    pub i_frame_variants: Vec<IFrameVariant>,
    /// Every `#EXT-X-IMAGE-STREAM-INF` variant, in playlist order.
    pub image_variants: Vec<ImageVariant>,
    /// Every `#EXT-X-MEDIA` rendition, in playlist order.
    pub media: Vec<MediaRendition>,
    /// Every `#EXT-X-KEY`, in playlist order. Referenced from [`Segment::key`] by index.
    pub keys: Vec<Key>,
    /// Every `#EXT-X-SESSION-KEY`, in playlist order. Master-playlist-scoped metadata, not
    /// referenced from any segment.
    pub session_keys: Vec<Key>,
    /// Every `#EXT-X-MAP`, in playlist order. Referenced from [`Segment::init_section`] by index.
    pub maps: Vec<Map>,
    /// Every `#EXT-X-RENDITION-REPORT`, in playlist order.
    pub rendition_reports: Vec<RenditionReport>,
    /// Every `#EXT-X-SESSION-DATA`, in playlist order.
    pub session_data: Vec<SessionData>,
    /// Every `#EXT-X-PRELOAD-HINT`, in playlist order.
    pub preload_hints: Vec<PreloadHint>,
    /// Every `#EXT-X-TILES`, in playlist order.
    pub tiles: Vec<Tiles>,
}

/// A raw `(normalized_key, raw_value)` attribute pair, retained verbatim (quotes included) for
/// callers that want the original representation - used for asset metadata and DateRange custom
/// `X-*` attributes, neither of which this parser interprets further.
pub type RawAttr = (String, String);

/// `#EXT-X-START`.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Start {
    /// Corresponds to the `TIME-OFFSET` attribute.
    pub time_offset: Option<f64>,
    /// Corresponds to the `PRECISE` attribute.
    pub precise: Option<bool>,
}

/// `#EXT-X-SERVER-CONTROL`.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct ServerControl {
    /// Corresponds to the `CAN-SKIP-UNTIL` attribute.
    pub can_skip_until: Option<f64>,
    /// Corresponds to the `CAN-SKIP-DATERANGES` attribute.
    pub can_skip_dateranges: Option<bool>,
    /// Corresponds to the `HOLD-BACK` attribute.
    pub hold_back: Option<f64>,
    /// Corresponds to the `PART-HOLD-BACK` attribute.
    pub part_hold_back: Option<f64>,
    /// Corresponds to the `CAN-BLOCK-RELOAD` attribute.
    pub can_block_reload: Option<bool>,
}

/// `#EXT-X-PART-INF`.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct PartInf {
    /// Corresponds to the `PART-TARGET` attribute.
    pub part_target: Option<f64>,
}

/// `#EXT-X-SKIP`.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Skip {
    /// Corresponds to the `SKIPPED-SEGMENTS` attribute.
    pub skipped_segments: Option<i64>,
    /// Corresponds to the `RECENTLY-REMOVED-DATERANGES` attribute.
    pub recently_removed_dateranges: Option<String>,
}

/// `#EXT-X-CONTENT-STEERING`.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct ContentSteering {
    /// Corresponds to the `SERVER-URI` attribute.
    pub server_uri: Option<String>,
    /// Corresponds to the `PATHWAY-ID` attribute.
    pub pathway_id: Option<String>,
}

/// A media segment, finalized by the URI line that follows its `#EXTINF` (or other per-segment
/// tag). `uri` is `None` only for a trailing segment still open at end of input.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Segment {
    /// The `#EXTINF` duration, in seconds.
    pub duration: f64,
    /// The `#EXTINF` title following the duration's comma, if any (including an empty string).
    pub title: Option<String>,
    /// The segment's URI line.
    pub uri: Option<String>,
    /// The `#EXT-X-BYTERANGE` value.
    pub byterange: Option<String>,
    /// The `#EXT-X-BITRATE` value, in kb/s.
    pub bitrate: Option<i64>,
    /// Set by `#EXT-X-DISCONTINUITY`.
    pub discontinuity: bool,
    /// The `#EXT-X-PROGRAM-DATE-TIME` value that preceded this segment, if any.
    pub program_date_time: Option<String>,
    /// Set by `#EXT-X-CUE-IN`.
    pub cue_in: bool,
    /// Whether this segment falls inside an open cue-out span.
    pub cue_out: bool,
    /// Set only for the first segment of a cue-out span.
    pub cue_out_start: bool,
    /// Set if the `#EXT-X-CUE-OUT` that opened this segment's span carried a literal `DURATION`
    /// token.
    pub cue_out_explicitly_duration: bool,
    /// The SCTE-35 binary payload in effect for this segment, however it was supplied (`cue`,
    /// `scte35`, or `#EXT-OATCLS-SCTE35`).
    pub scte35: Option<String>,
    /// The `#EXT-OATCLS-SCTE35` payload specifically, if one was staged for this segment.
    pub oatcls_scte35: Option<String>,
    /// The cue-out span's total duration in seconds, as a string.
    pub scte35_duration: Option<String>,
    /// The cue-out span's elapsed time in seconds at this segment, as a string.
    pub scte35_elapsedtime: Option<String>,
    /// The `#EXT-X-ASSET` attribute list in effect for this segment, if any.
    pub asset_metadata: Option<Vec<RawAttr>>,
    /// Set by `#EXT-X-GAP`.
    pub gap_tag: bool,
    /// The `#EXT-X-BLACKOUT` value (an empty string for the bare, parameterless form).
    pub blackout: Option<String>,
    /// Index into [`Document::keys`] of the key in effect for this segment, if any.
    pub key: Option<usize>,
    /// Index into [`Document::maps`] of the init section in effect for this segment, if any.
    pub init_section: Option<usize>,
    /// Every `#EXT-X-DATERANGE` staged since the previous segment or part, in occurrence order.
    pub dateranges: Vec<DateRange>,
    /// Every `#EXT-X-PART` belonging to this segment, in occurrence order.
    pub parts: Vec<Part>,
}

/// A child part of a low-latency (LL-HLS) segment.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Part {
    /// Corresponds to the `URI` attribute.
    pub uri: Option<String>,
    /// Corresponds to the `DURATION` attribute, in seconds.
    pub duration: f64,
    /// Corresponds to the `BYTERANGE` attribute.
    pub byterange: Option<String>,
    /// Corresponds to the `INDEPENDENT` attribute.
    pub independent: Option<String>,
    /// Corresponds to the `GAP` attribute.
    pub gap: Option<String>,
    /// Whether a bare `#EXT-X-GAP` preceded this part.
    pub gap_tag: bool,
    /// Every `#EXT-X-DATERANGE` staged since the previous part or segment, in occurrence order.
    pub dateranges: Vec<DateRange>,
}

/// A variant (alternative rendition) referenced from a multivariant playlist by
/// `#EXT-X-STREAM-INF`.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Variant {
    /// The playlist URI following the `#EXT-X-STREAM-INF` line.
    pub uri: Option<String>,
    /// Corresponds to the `PROGRAM-ID` attribute.
    pub program_id: Option<i64>,
    /// Corresponds to the `BANDWIDTH` attribute, in bits per second.
    pub bandwidth: Option<i64>,
    /// Corresponds to the `AVERAGE-BANDWIDTH` attribute, in bits per second.
    pub average_bandwidth: Option<i64>,
    /// Corresponds to the `RESOLUTION` attribute.
    pub resolution: Option<String>,
    /// Corresponds to the `CODECS` attribute.
    pub codecs: Option<String>,
    /// Corresponds to the `FRAME-RATE` attribute.
    pub frame_rate: Option<f64>,
    /// Corresponds to the `VIDEO` attribute (a `#EXT-X-MEDIA` group id).
    pub video: Option<String>,
    /// Corresponds to the `AUDIO` attribute (a `#EXT-X-MEDIA` group id).
    pub audio: Option<String>,
    /// Corresponds to the `SUBTITLES` attribute (a `#EXT-X-MEDIA` group id).
    pub subtitles: Option<String>,
    /// Corresponds to the `CLOSED-CAPTIONS` attribute (a `#EXT-X-MEDIA` group id, or `NONE`).
    pub closed_captions: Option<String>,
    /// Corresponds to the `VIDEO-RANGE` attribute.
    pub video_range: Option<String>,
    /// Corresponds to the `HDCP-LEVEL` attribute.
    pub hdcp_level: Option<String>,
    /// Corresponds to the `PATHWAY-ID` attribute.
    pub pathway_id: Option<String>,
    /// Corresponds to the `STABLE-VARIANT-ID` attribute.
    pub stable_variant_id: Option<String>,
    /// Corresponds to the `REQ-VIDEO-LAYOUT` attribute.
    pub req_video_layout: Option<String>,
}

/// `#EXT-X-I-FRAME-STREAM-INF` - fully described on its own line, no following URI.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct IFrameVariant {
    /// Corresponds to the `URI` attribute.
    pub uri: Option<String>,
    /// Corresponds to the `PROGRAM-ID` attribute.
    pub program_id: Option<i64>,
    /// Corresponds to the `BANDWIDTH` attribute, in bits per second.
    pub bandwidth: Option<i64>,
    /// Corresponds to the `AVERAGE-BANDWIDTH` attribute, in bits per second.
    pub average_bandwidth: Option<i64>,
    /// Corresponds to the `RESOLUTION` attribute.
    pub resolution: Option<String>,
    /// Corresponds to the `CODECS` attribute.
    pub codecs: Option<String>,
    /// Corresponds to the `VIDEO` attribute.
    pub video: Option<String>,
    /// Corresponds to the `VIDEO-RANGE` attribute.
    pub video_range: Option<String>,
    /// Corresponds to the `HDCP-LEVEL` attribute.
    pub hdcp_level: Option<String>,
    /// Corresponds to the `PATHWAY-ID` attribute.
    pub pathway_id: Option<String>,
    /// Corresponds to the `STABLE-VARIANT-ID` attribute.
    pub stable_variant_id: Option<String>,
}

/// `#EXT-X-IMAGE-STREAM-INF` - fully described on its own line, no following URI.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct ImageVariant {
    /// Corresponds to the `URI` attribute.
    pub uri: Option<String>,
    /// Corresponds to the `PROGRAM-ID` attribute.
    pub program_id: Option<i64>,
    /// Corresponds to the `BANDWIDTH` attribute, in bits per second.
    pub bandwidth: Option<i64>,
    /// Corresponds to the `AVERAGE-BANDWIDTH` attribute, in bits per second.
    pub average_bandwidth: Option<i64>,
    /// Corresponds to the `RESOLUTION` attribute.
    pub resolution: Option<String>,
    /// Corresponds to the `CODECS` attribute.
    pub codecs: Option<String>,
    /// Corresponds to the `VIDEO` attribute.
    pub video: Option<String>,
    /// Corresponds to the `PATHWAY-ID` attribute.
    pub pathway_id: Option<String>,
    /// Corresponds to the `STABLE-VARIANT-ID` attribute.
    pub stable_variant_id: Option<String>,
}

/// `#EXT-X-MEDIA` - an alternative rendition (audio, subtitles, closed captions, etc).
#[derive(Debug, PartialEq, Clone, Default)]
pub struct MediaRendition {
    /// Corresponds to the `TYPE` attribute. Kept raw, unquoted form (`TYPE=AUDIO` etc. is not a
    /// quoted-string attribute).
    pub r#type: Option<String>,
    /// Corresponds to the `URI` attribute.
    pub uri: Option<String>,
    /// Corresponds to the `GROUP-ID` attribute.
    pub group_id: Option<String>,
    /// Corresponds to the `LANGUAGE` attribute.
    pub language: Option<String>,
    /// Corresponds to the `ASSOC-LANGUAGE` attribute.
    pub assoc_language: Option<String>,
    /// Corresponds to the `NAME` attribute.
    pub name: Option<String>,
    /// Corresponds to the `DEFAULT` attribute. Kept raw (`YES`/`NO`).
    pub default: Option<String>,
    /// Corresponds to the `AUTOSELECT` attribute. Kept raw (`YES`/`NO`).
    pub autoselect: Option<String>,
    /// Corresponds to the `FORCED` attribute. Kept raw (`YES`/`NO`).
    pub forced: Option<String>,
    /// Corresponds to the `INSTREAM-ID` attribute.
    pub instream_id: Option<String>,
    /// Corresponds to the `CHARACTERISTICS` attribute.
    pub characteristics: Option<String>,
    /// Corresponds to the `CHANNELS` attribute.
    pub channels: Option<String>,
    /// Corresponds to the `STABLE-RENDITION-ID` attribute.
    pub stable_rendition_id: Option<String>,
}

/// `#EXT-X-KEY` / `#EXT-X-SESSION-KEY`.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Key {
    /// Corresponds to the `METHOD` attribute.
    pub method: Option<String>,
    /// Corresponds to the `URI` attribute.
    pub uri: Option<String>,
    /// Corresponds to the `IV` attribute.
    pub iv: Option<String>,
    /// Corresponds to the `KEYFORMAT` attribute.
    pub keyformat: Option<String>,
    /// Corresponds to the `KEYFORMATVERSIONS` attribute.
    pub keyformatversions: Option<String>,
}

/// `#EXT-X-MAP` - initialization section.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Map {
    /// Corresponds to the `URI` attribute.
    pub uri: Option<String>,
    /// Corresponds to the `BYTERANGE` attribute.
    pub byterange: Option<String>,
}

/// `#EXT-X-DATERANGE`.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct DateRange {
    /// Corresponds to the `ID` attribute.
    pub id: Option<String>,
    /// Corresponds to the `CLASS` attribute.
    pub class: Option<String>,
    /// Corresponds to the `START-DATE` attribute.
    pub start_date: Option<String>,
    /// Corresponds to the `END-DATE` attribute.
    pub end_date: Option<String>,
    /// Corresponds to the `DURATION` attribute, in seconds.
    pub duration: Option<f64>,
    /// Corresponds to the `PLANNED-DURATION` attribute, in seconds.
    pub planned_duration: Option<f64>,
    /// Corresponds to the `SCTE35-CMD` attribute. Kept raw (a hex-encoded byte sequence).
    pub scte35_cmd: Option<String>,
    /// Corresponds to the `SCTE35-OUT` attribute. Kept raw (a hex-encoded byte sequence).
    pub scte35_out: Option<String>,
    /// Corresponds to the `SCTE35-IN` attribute. Kept raw (a hex-encoded byte sequence).
    pub scte35_in: Option<String>,
    /// Corresponds to the `END-ON-NEXT` attribute. Kept raw (`YES`/`NO`).
    pub end_on_next: Option<String>,
    /// Every attribute whose normalized key begins with `x_`, duplicated here verbatim.
    pub x_attrs: Vec<RawAttr>,
}

/// `#EXT-X-RENDITION-REPORT`.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct RenditionReport {
    /// Corresponds to the `URI` attribute.
    pub uri: Option<String>,
    /// Corresponds to the `LAST-MSN` attribute.
    pub last_msn: Option<i64>,
    /// Corresponds to the `LAST-PART` attribute.
    pub last_part: Option<i64>,
}

/// `#EXT-X-SESSION-DATA`: arbitrary session-scoped metadata, either an inline `VALUE` or a
/// `URI` pointing at a JSON blob.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct SessionData {
    /// Corresponds to the `DATA-ID` attribute.
    pub data_id: Option<String>,
    /// Corresponds to the `VALUE` attribute.
    pub value: Option<String>,
    /// Corresponds to the `URI` attribute.
    pub uri: Option<String>,
    /// Corresponds to the `FORMAT` attribute. Kept raw (`JSON` or `RAW`).
    pub format: Option<String>,
    /// Corresponds to the `LANGUAGE` attribute.
    pub language: Option<String>,
}

/// `#EXT-X-PRELOAD-HINT`.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct PreloadHint {
    /// Corresponds to the `TYPE` attribute. Kept raw (`PART` or `MAP`).
    pub hint_type: Option<String>,
    /// Corresponds to the `URI` attribute.
    pub uri: Option<String>,
    /// Corresponds to the `BYTERANGE-START` attribute.
    pub byterange_start: Option<i64>,
    /// Corresponds to the `BYTERANGE-LENGTH` attribute.
    pub byterange_length: Option<i64>,
}

/// `#EXT-X-TILES`: the Roku tiled-thumbnail extension's image-grid geometry
/// (`RESOLUTION`, `LAYOUT`, `DURATION`, `BANDWIDTH`).
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Tiles {
    /// Corresponds to the `RESOLUTION` attribute.
    pub resolution: Option<String>,
    /// Corresponds to the `LAYOUT` attribute.
    pub layout: Option<String>,
    /// Corresponds to the `DURATION` attribute, in seconds.
    pub duration: Option<f64>,
    /// Corresponds to the `BANDWIDTH` attribute, in bits per second.
    pub bandwidth: Option<i64>,
}
