//! Per-tag handlers.
//!
//! Each handler either mutates a top-level `Document` field, appends to a playlist-scoped
//! collection, or updates `ParserState` so the next URI line can finalize a segment or variant.
//! None of these ever fail: a malformed or missing attribute just leaves the corresponding field
//! `None`.

use crate::attrs;
use crate::document::{
    ContentSteering, DateRange, Document, Key, Map, MediaRendition, PartInf, PreloadHint,
    RenditionReport, ServerControl, SessionData, Skip, Start, Tiles, Variant,
};
use crate::state::{CueState, ParserState};
use crate::tag_name::TagName;
use crate::utils::{
    contains_ascii_case_insensitive, parse_leading_f64, parse_leading_i64, parse_yes_no,
    trim_ascii_ws, trim_start_ws,
};

/// Route one recognized tag line to its handler.
pub fn dispatch(doc: &mut Document, state: &mut ParserState, name: TagName, value: &str) {
    match name {
        TagName::M3u => {}
        TagName::Inf => handle_inf(state, value),
        TagName::TargetDuration => doc.target_duration = parse_leading_i64(value).map(|v| v.max(0) as u64),
        TagName::MediaSequence => doc.media_sequence = parse_leading_i64(value),
        TagName::DiscontinuitySequence => doc.discontinuity_sequence = parse_leading_i64(value),
        TagName::Version => doc.version = parse_leading_i64(value).map(|v| v.max(0) as u64),
        TagName::AllowCache => doc.allow_cache = Some(trim_ascii_ws(value).to_ascii_lowercase()),
        TagName::PlaylistType => doc.playlist_type = Some(trim_ascii_ws(value).to_ascii_lowercase()),
        TagName::ProgramDateTime => handle_program_date_time(doc, state, value),
        TagName::Endlist => doc.is_endlist = true,
        TagName::IFramesOnly => doc.is_i_frames_only = true,
        TagName::IndependentSegments => doc.is_independent_segments = true,
        TagName::ImagesOnly => doc.is_images_only = true,
        TagName::Discontinuity => state.discontinuity = true,
        TagName::Gap => state.gap = true,
        TagName::Blackout => state.blackout = Some(trim_ascii_ws(value).to_string()),
        TagName::CueIn => handle_cue_in(state),
        TagName::CueSpan => handle_cue_span(state),
        TagName::CueOut => handle_cue_out(state, value),
        TagName::CueOutCont => handle_cue_out_cont(state, value),
        TagName::OatclsScte35 => handle_oatcls_scte35(state, value),
        TagName::Key => handle_key(doc, state, value),
        TagName::SessionKey => handle_session_key(doc, value),
        TagName::Map => handle_map(doc, state, value),
        TagName::Byterange => state.segment_mut().byterange = Some(trim_ascii_ws(value).to_string()),
        TagName::Bitrate => state.segment_mut().bitrate = parse_leading_i64(value),
        TagName::Daterange => handle_daterange(state, value),
        TagName::Asset => state.pending_asset_metadata = Some(attrs::parse(value).iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()),
        TagName::StreamInf => handle_stream_inf(doc, state, value),
        TagName::IFrameStreamInf => handle_i_frame_stream_inf(doc, value),
        TagName::ImageStreamInf => handle_image_stream_inf(doc, value),
        TagName::Media => handle_media(doc, value),
        TagName::Start => handle_start(doc, value),
        TagName::ServerControl => handle_server_control(doc, value),
        TagName::PartInf => {
            let attrs = attrs::parse(value);
            doc.part_inf = Some(PartInf {
                part_target: attrs.get_f64("part_target"),
            });
        }
        TagName::Skip => handle_skip(doc, value),
        TagName::RenditionReport => handle_rendition_report(doc, value),
        TagName::SessionData => handle_session_data(doc, value),
        TagName::PreloadHint => handle_preload_hint(doc, value),
        TagName::ContentSteering => handle_content_steering(doc, value),
        TagName::Tiles => handle_tiles(doc, value),
        TagName::Part => handle_part(state, value),
    }
}

fn handle_inf(state: &mut ParserState, value: &str) {
    let duration = parse_leading_f64(value).unwrap_or(0.0);
    let title = value.find(',').map(|i| trim_start_ws(&value[(i + 1)..]).to_string());
    let seg = state.segment_mut();
    seg.duration = duration;
    seg.title = title;
}

fn handle_program_date_time(doc: &mut Document, state: &mut ParserState, value: &str) {
    let ts = trim_ascii_ws(value).to_string();
    if doc.program_date_time.is_none() {
        doc.program_date_time = Some(ts.clone());
    }
    state.pending_program_date_time = Some(ts);
}

fn handle_cue_out(state: &mut ParserState, value: &str) {
    state.cue_out_start = true;
    state.cue_out_explicitly_duration = contains_ascii_case_insensitive(value, "DURATION");
    let attrs = attrs::parse(value);
    let mut payload = state.cue_state.payload();
    if let Some(cue) = attrs.get_unquoted("cue") {
        payload.scte35 = Some(cue.to_string());
    }
    let duration = attrs
        .get_unquoted("duration")
        .or_else(|| attrs.bare_values().next());
    if let Some(duration) = duration {
        payload.scte35_duration = Some(duration.to_string());
    }
    state.cue_state = CueState::open_with(payload);
}

fn handle_cue_out_cont(state: &mut ParserState, value: &str) {
    let attrs = attrs::parse(value);
    state.cue_state = std::mem::take(&mut state.cue_state).stage(|payload| {
        if let Some(bare) = attrs.bare_values().next() {
            if let Some((elapsed, total)) = bare.split_once('/') {
                payload.scte35_elapsedtime = Some(elapsed.to_string());
                payload.scte35_duration = Some(total.to_string());
            }
        }
        if let Some(d) = attrs.get_unquoted("duration") {
            payload.scte35_duration = Some(d.to_string());
        }
        if let Some(s) = attrs.get_unquoted("scte35") {
            payload.scte35 = Some(s.to_string());
        }
        if let Some(e) = attrs.get_unquoted("elapsedtime") {
            payload.scte35_elapsedtime = Some(e.to_string());
        }
    });
    // CONT always (re)asserts the span as open, even if it had drifted to Pending/Idle.
    state.cue_state = CueState::open_with(state.cue_state.payload());
    state.cue_out_start = false;
}

fn handle_cue_in(state: &mut ParserState) {
    state.cue_in = true;
    state.cue_state = std::mem::take(&mut state.cue_state).close();
}

fn handle_cue_span(state: &mut ParserState) {
    if !state.cue_state.is_open() {
        state.cue_out_start = true;
    }
    state.cue_state = CueState::open_with(state.cue_state.payload());
}

fn handle_oatcls_scte35(state: &mut ParserState, value: &str) {
    let payload_str = trim_ascii_ws(value).to_string();
    state.cue_state = std::mem::take(&mut state.cue_state).stage(|payload| {
        payload.oatcls_scte35 = Some(payload_str.clone());
        if payload.scte35.is_none() {
            payload.scte35 = Some(payload_str.clone());
        }
    });
}

fn handle_key(doc: &mut Document, state: &mut ParserState, value: &str) {
    let attrs = attrs::parse(value);
    doc.keys.push(Key {
        method: attrs.get_unquoted("method").map(String::from),
        uri: attrs.get_unquoted("uri").map(String::from),
        iv: attrs.get_unquoted("iv").map(String::from),
        keyformat: attrs.get_unquoted("keyformat").map(String::from),
        keyformatversions: attrs.get_unquoted("keyformatversions").map(String::from),
    });
    state.current_key = Some(doc.keys.len() - 1);
}

fn handle_session_key(doc: &mut Document, value: &str) {
    let attrs = attrs::parse(value);
    doc.session_keys.push(Key {
        method: attrs.get_unquoted("method").map(String::from),
        uri: attrs.get_unquoted("uri").map(String::from),
        iv: attrs.get_unquoted("iv").map(String::from),
        keyformat: attrs.get_unquoted("keyformat").map(String::from),
        keyformatversions: attrs.get_unquoted("keyformatversions").map(String::from),
    });
}

fn handle_map(doc: &mut Document, state: &mut ParserState, value: &str) {
    let attrs = attrs::parse(value);
    doc.maps.push(Map {
        uri: attrs.get_unquoted("uri").map(String::from),
        byterange: attrs.get_unquoted("byterange").map(String::from),
    });
    state.current_map = Some(doc.maps.len() - 1);
}

fn handle_daterange(state: &mut ParserState, value: &str) {
    let attrs = attrs::parse(value);
    let mut dr = DateRange {
        id: attrs.get_unquoted("id").map(String::from),
        class: attrs.get_unquoted("class").map(String::from),
        start_date: attrs.get_unquoted("start_date").map(String::from),
        end_date: attrs.get_unquoted("end_date").map(String::from),
        duration: attrs.get_f64("duration"),
        planned_duration: attrs.get_f64("planned_duration"),
        scte35_cmd: attrs.get_raw("scte35_cmd").map(String::from),
        scte35_out: attrs.get_raw("scte35_out").map(String::from),
        scte35_in: attrs.get_raw("scte35_in").map(String::from),
        end_on_next: attrs.get_raw("end_on_next").map(String::from),
        x_attrs: Vec::new(),
    };
    for (key, raw) in attrs.iter() {
        if key.starts_with("x_") {
            dr.x_attrs.push((key.to_string(), raw.to_string()));
        }
    }
    state.pending_dateranges.push(dr);
}

fn handle_stream_inf(doc: &mut Document, state: &mut ParserState, value: &str) {
    let attrs = attrs::parse(value);
    doc.is_variant = true;
    doc.media_sequence = None;
    state.pending_variant = Some(Variant {
        uri: None,
        program_id: attrs.get_i64("program_id"),
        bandwidth: attrs.get_i64_tolerant_float("bandwidth"),
        average_bandwidth: attrs.get_i64_tolerant_float("average_bandwidth"),
        resolution: attrs.get_raw("resolution").map(String::from),
        codecs: attrs.get_unquoted("codecs").map(String::from),
        frame_rate: attrs.get_f64("frame_rate"),
        video: attrs.get_unquoted("video").map(String::from),
        audio: attrs.get_unquoted("audio").map(String::from),
        subtitles: attrs.get_unquoted("subtitles").map(String::from),
        closed_captions: attrs.get_raw("closed_captions").map(String::from),
        video_range: attrs.get_unquoted("video_range").map(String::from),
        hdcp_level: attrs.get_raw("hdcp_level").map(String::from),
        pathway_id: attrs.get_unquoted("pathway_id").map(String::from),
        stable_variant_id: attrs.get_unquoted("stable_variant_id").map(String::from),
        req_video_layout: attrs.get_raw("req_video_layout").map(String::from),
    });
}

fn handle_i_frame_stream_inf(doc: &mut Document, value: &str) {
    let attrs = attrs::parse(value);
    doc.i_frame_variants.push(crate::document::IFrameVariant {
        uri: attrs.get_unquoted("uri").map(String::from),
        program_id: attrs.get_i64("program_id"),
        bandwidth: attrs.get_i64_tolerant_float("bandwidth"),
        average_bandwidth: attrs.get_i64_tolerant_float("average_bandwidth"),
        resolution: attrs.get_raw("resolution").map(String::from),
        codecs: attrs.get_unquoted("codecs").map(String::from),
        video: attrs.get_unquoted("video").map(String::from),
        video_range: attrs.get_unquoted("video_range").map(String::from),
        hdcp_level: attrs.get_raw("hdcp_level").map(String::from),
        pathway_id: attrs.get_unquoted("pathway_id").map(String::from),
        stable_variant_id: attrs.get_unquoted("stable_variant_id").map(String::from),
    });
}

fn handle_image_stream_inf(doc: &mut Document, value: &str) {
    let attrs = attrs::parse(value);
    doc.image_variants.push(crate::document::ImageVariant {
        uri: attrs.get_unquoted("uri").map(String::from),
        program_id: attrs.get_i64("program_id"),
        bandwidth: attrs.get_i64_tolerant_float("bandwidth"),
        average_bandwidth: attrs.get_i64_tolerant_float("average_bandwidth"),
        resolution: attrs.get_raw("resolution").map(String::from),
        codecs: attrs.get_unquoted("codecs").map(String::from),
        video: attrs.get_unquoted("video").map(String::from),
        pathway_id: attrs.get_unquoted("pathway_id").map(String::from),
        stable_variant_id: attrs.get_unquoted("stable_variant_id").map(String::from),
    });
}

fn handle_media(doc: &mut Document, value: &str) {
    let attrs = attrs::parse(value);
    doc.media.push(MediaRendition {
        r#type: attrs.get_raw("type").map(String::from),
        uri: attrs.get_unquoted("uri").map(String::from),
        group_id: attrs.get_unquoted("group_id").map(String::from),
        language: attrs.get_unquoted("language").map(String::from),
        assoc_language: attrs.get_unquoted("assoc_language").map(String::from),
        name: attrs.get_unquoted("name").map(String::from),
        default: attrs.get_raw("default").map(String::from),
        autoselect: attrs.get_raw("autoselect").map(String::from),
        forced: attrs.get_raw("forced").map(String::from),
        instream_id: attrs.get_unquoted("instream_id").map(String::from),
        characteristics: attrs.get_unquoted("characteristics").map(String::from),
        channels: attrs.get_unquoted("channels").map(String::from),
        stable_rendition_id: attrs.get_unquoted("stable_rendition_id").map(String::from),
    });
}

fn handle_start(doc: &mut Document, value: &str) {
    let attrs = attrs::parse(value);
    doc.start = Some(Start {
        time_offset: attrs.get_f64("time_offset"),
        precise: attrs.get_unquoted("precise").and_then(parse_yes_no),
    });
}

fn handle_server_control(doc: &mut Document, value: &str) {
    let attrs = attrs::parse(value);
    doc.server_control = Some(ServerControl {
        can_skip_until: attrs.get_f64("can_skip_until"),
        can_skip_dateranges: attrs.get_unquoted("can_skip_dateranges").and_then(parse_yes_no),
        hold_back: attrs.get_f64("hold_back"),
        part_hold_back: attrs.get_f64("part_hold_back"),
        can_block_reload: attrs.get_unquoted("can_block_reload").and_then(parse_yes_no),
    });
}

fn handle_skip(doc: &mut Document, value: &str) {
    let attrs = attrs::parse(value);
    doc.skip = Some(Skip {
        skipped_segments: attrs.get_i64("skipped_segments"),
        recently_removed_dateranges: attrs.get_unquoted("recently_removed_dateranges").map(String::from),
    });
}

fn handle_rendition_report(doc: &mut Document, value: &str) {
    let attrs = attrs::parse(value);
    doc.rendition_reports.push(RenditionReport {
        uri: attrs.get_unquoted("uri").map(String::from),
        last_msn: attrs.get_i64("last_msn"),
        last_part: attrs.get_i64("last_part"),
    });
}

fn handle_session_data(doc: &mut Document, value: &str) {
    let attrs = attrs::parse(value);
    doc.session_data.push(SessionData {
        data_id: attrs.get_unquoted("data_id").map(String::from),
        value: attrs.get_unquoted("value").map(String::from),
        uri: attrs.get_unquoted("uri").map(String::from),
        format: attrs.get_raw("format").map(String::from),
        language: attrs.get_unquoted("language").map(String::from),
    });
}

fn handle_preload_hint(doc: &mut Document, value: &str) {
    let attrs = attrs::parse(value);
    doc.preload_hints.push(PreloadHint {
        hint_type: attrs.get_raw("type").map(String::from),
        uri: attrs.get_unquoted("uri").map(String::from),
        byterange_start: attrs.get_i64("byterange_start"),
        byterange_length: attrs.get_i64("byterange_length"),
    });
}

fn handle_content_steering(doc: &mut Document, value: &str) {
    let attrs = attrs::parse(value);
    doc.content_steering = Some(ContentSteering {
        server_uri: attrs.get_unquoted("server_uri").map(String::from),
        pathway_id: attrs.get_unquoted("pathway_id").map(String::from),
    });
}

fn handle_tiles(doc: &mut Document, value: &str) {
    let attrs = attrs::parse(value);
    doc.tiles.push(Tiles {
        resolution: attrs.get_raw("resolution").map(String::from),
        layout: attrs.get_raw("layout").map(String::from),
        duration: attrs.get_f64("duration"),
        bandwidth: attrs.get_i64("bandwidth"),
    });
}

fn handle_part(state: &mut ParserState, value: &str) {
    let attrs = attrs::parse(value);
    let dateranges = std::mem::take(&mut state.pending_dateranges);
    let gap_tag = state.gap;
    state.gap = false;
    let part = crate::document::Part {
        uri: attrs.get_unquoted("uri").map(String::from),
        duration: attrs.get_f64("duration").unwrap_or(0.0),
        byterange: attrs.get_raw("byterange").map(String::from),
        independent: attrs.get_raw("independent").map(String::from),
        gap: attrs.get_raw("gap").map(String::from),
        gap_tag,
        dateranges,
    };
    state.segment_mut().parts.push(part);
}
