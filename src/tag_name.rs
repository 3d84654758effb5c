//! Tag name extraction and dispatch table.
//!
//! A `#`-prefixed line is split into `name` / `value` at the first `:` or end of line, then the
//! name is matched exactly against the known tag table. Splitting before matching means a name
//! that is itself a prefix of another (`DISCONTINUITY` vs `DISCONTINUITY-SEQUENCE`, `CUE-OUT` vs
//! `CUE-OUT-CONT`) can never be ambiguous - they're simply distinct match arms over an exact
//! string.

/// Split a `#EXT`-prefixed tag line into its name (the text between `#EXT` and the line's
/// `:`/EOL) and its raw value (everything after the first `:`, or `""` if there is no `:`).
///
/// Returns `None` if the line is a `#`-comment that doesn't even begin with `#EXT` - such lines
/// are never HLS tags, so the dispatcher shouldn't try to match a name out of them.
pub fn split_name_and_value(tag_line: &str) -> Option<(&str, &str)> {
    let body = tag_line.strip_prefix("#EXT")?;
    Some(match body.find(':') {
        Some(i) => (&body[..i], &body[(i + 1)..]),
        None => (body, ""),
    })
}

/// The known HLS tags this parser recognizes.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TagName {
    M3u,
    Inf,
    TargetDuration,
    MediaSequence,
    DiscontinuitySequence,
    Version,
    AllowCache,
    PlaylistType,
    ProgramDateTime,
    Endlist,
    IFramesOnly,
    IndependentSegments,
    ImagesOnly,
    Discontinuity,
    Gap,
    Blackout,
    CueIn,
    CueSpan,
    CueOut,
    CueOutCont,
    Key,
    SessionKey,
    Map,
    Byterange,
    Bitrate,
    Daterange,
    StreamInf,
    IFrameStreamInf,
    ImageStreamInf,
    Media,
    Start,
    ServerControl,
    PartInf,
    Skip,
    RenditionReport,
    SessionData,
    PreloadHint,
    ContentSteering,
    Tiles,
    Part,
    Asset,
    OatclsScte35,
}

impl TagName {
    /// Match an exact tag name (the text between `#EXT`/`#` and the line's `:`/EOL) to a known
    /// tag, or `None` if this is an unrecognized/comment line. Unknown `#` lines are silently
    /// ignored by the caller.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "M3U" => Self::M3u,
            "INF" => Self::Inf,
            "-X-TARGETDURATION" => Self::TargetDuration,
            "-X-MEDIA-SEQUENCE" => Self::MediaSequence,
            "-X-DISCONTINUITY-SEQUENCE" => Self::DiscontinuitySequence,
            "-X-VERSION" => Self::Version,
            "-X-ALLOW-CACHE" => Self::AllowCache,
            "-X-PLAYLIST-TYPE" => Self::PlaylistType,
            "-X-PROGRAM-DATE-TIME" => Self::ProgramDateTime,
            "-X-ENDLIST" => Self::Endlist,
            "-X-I-FRAMES-ONLY" => Self::IFramesOnly,
            "-X-INDEPENDENT-SEGMENTS" => Self::IndependentSegments,
            "-X-IMAGES-ONLY" => Self::ImagesOnly,
            "-X-DISCONTINUITY" => Self::Discontinuity,
            "-X-GAP" => Self::Gap,
            "-X-BLACKOUT" => Self::Blackout,
            "-X-CUE-IN" => Self::CueIn,
            "-X-CUE-SPAN" => Self::CueSpan,
            "-X-CUE-OUT" => Self::CueOut,
            "-X-CUE-OUT-CONT" => Self::CueOutCont,
            "-X-KEY" => Self::Key,
            "-X-SESSION-KEY" => Self::SessionKey,
            "-X-MAP" => Self::Map,
            "-X-BYTERANGE" => Self::Byterange,
            "-X-BITRATE" => Self::Bitrate,
            "-X-DATERANGE" => Self::Daterange,
            "-X-STREAM-INF" => Self::StreamInf,
            "-X-I-FRAME-STREAM-INF" => Self::IFrameStreamInf,
            "-X-IMAGE-STREAM-INF" => Self::ImageStreamInf,
            "-X-MEDIA" => Self::Media,
            "-X-START" => Self::Start,
            "-X-SERVER-CONTROL" => Self::ServerControl,
            "-X-PART-INF" => Self::PartInf,
            "-X-SKIP" => Self::Skip,
            "-X-RENDITION-REPORT" => Self::RenditionReport,
            "-X-SESSION-DATA" => Self::SessionData,
            "-X-PRELOAD-HINT" => Self::PreloadHint,
            "-X-CONTENT-STEERING" => Self::ContentSteering,
            "-X-TILES" => Self::Tiles,
            "-X-PART" => Self::Part,
            "-X-ASSET" => Self::Asset,
            "-OATCLS-SCTE35" => Self::OatclsScte35,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_name_from_value() {
        assert_eq!(
            Some(("-X-VERSION", "3")),
            split_name_and_value("#EXT-X-VERSION:3")
        );
        assert_eq!(
            Some(("-X-ENDLIST", "")),
            split_name_and_value("#EXT-X-ENDLIST")
        );
        assert_eq!(Some(("M3U", "")), split_name_and_value("#EXTM3U"));
        assert_eq!(Some(("INF", "10,")), split_name_and_value("#EXTINF:10,"));
    }

    #[test]
    fn non_ext_comment_lines_are_not_tag_names() {
        assert_eq!(None, split_name_and_value("# just a comment"));
        assert_eq!(
            None,
            split_name_and_value("#USP-X-TIMESTAMP-MAP:MPEGTS=900000")
        );
    }

    #[test]
    fn discontinuity_and_discontinuity_sequence_are_distinct_exact_matches() {
        assert_eq!(
            Some(TagName::Discontinuity),
            TagName::from_name("-X-DISCONTINUITY")
        );
        assert_eq!(
            Some(TagName::DiscontinuitySequence),
            TagName::from_name("-X-DISCONTINUITY-SEQUENCE")
        );
    }

    #[test]
    fn cue_out_and_cue_out_cont_are_distinct_exact_matches() {
        assert_eq!(Some(TagName::CueOut), TagName::from_name("-X-CUE-OUT"));
        assert_eq!(
            Some(TagName::CueOutCont),
            TagName::from_name("-X-CUE-OUT-CONT")
        );
    }

    #[test]
    fn unknown_tag_name_is_none() {
        assert_eq!(None, TagName::from_name("-X-UNKNOWN-TAG"));
    }
}
