//! Integration tests covering parser invariants, round-trip properties, boundary behaviors, and
//! end-to-end manifest scenarios.

use hls_m3u8_parser::{parse_str, ParseError};
use pretty_assertions::assert_eq;

#[test]
fn s1_minimal_segment() {
    let doc = parse_str(
        "#EXTM3U\n\
         #EXT-X-TARGETDURATION:6\n\
         #EXT-X-VERSION:3\n\
         #EXTINF:5.5,Intro\n\
         https://a/1.ts\n\
         #EXT-X-ENDLIST\n",
    )
    .unwrap();

    assert_eq!(Some(6), doc.target_duration);
    assert_eq!(Some(3), doc.version);
    assert!(doc.is_endlist);
    assert_eq!(1, doc.segments.len());
    let seg = &doc.segments[0];
    assert_eq!(5.5, seg.duration);
    assert_eq!(Some("Intro"), seg.title.as_deref());
    assert_eq!(Some("https://a/1.ts"), seg.uri.as_deref());
}

#[test]
fn s2_sticky_key() {
    let doc = parse_str(
        "#EXT-X-KEY:METHOD=AES-128,URI=\"k1\"\n\
         #EXTINF:4,\n\
         a.ts\n\
         #EXT-X-KEY:METHOD=NONE\n\
         #EXTINF:4,\n\
         b.ts\n",
    )
    .unwrap();

    assert_eq!(2, doc.segments.len());
    assert_eq!(2, doc.keys.len());

    let key0 = doc.segments[0].key.map(|i| &doc.keys[i]).unwrap();
    assert_eq!(Some("AES-128"), key0.method.as_deref());
    assert_eq!(Some("k1"), key0.uri.as_deref());

    let key1 = doc.segments[1].key.map(|i| &doc.keys[i]).unwrap();
    assert_eq!(Some("NONE"), key1.method.as_deref());
}

#[test]
fn s3_cue_out_span() {
    let doc = parse_str(
        "#EXT-X-CUE-OUT:DURATION=30,cue=\"c1\"\n\
         #EXTINF:10,\n\
         p1.ts\n\
         #EXT-X-CUE-OUT-CONT:10/30,scte35=\"c1\"\n\
         #EXTINF:10,\n\
         p2.ts\n\
         #EXT-X-CUE-IN\n\
         #EXTINF:10,\n\
         p3.ts\n",
    )
    .unwrap();

    assert_eq!(3, doc.segments.len());

    let s0 = &doc.segments[0];
    assert!(s0.cue_out);
    assert!(s0.cue_out_start);
    assert!(s0.cue_out_explicitly_duration);
    assert_eq!(Some("c1"), s0.scte35.as_deref());
    assert_eq!(Some("30"), s0.scte35_duration.as_deref());

    let s1 = &doc.segments[1];
    assert!(s1.cue_out);
    assert!(!s1.cue_out_start);
    assert_eq!(Some("c1"), s1.scte35.as_deref());
    assert_eq!(Some("10"), s1.scte35_elapsedtime.as_deref());
    assert_eq!(Some("30"), s1.scte35_duration.as_deref());

    let s2 = &doc.segments[2];
    assert!(s2.cue_in);
    assert!(!s2.cue_out);
    // The quartet was moved into s2, not left dangling on state.
    assert_eq!(Some("c1"), s2.scte35.as_deref());
}

#[test]
fn cue_out_span_closes_implicitly_without_cont() {
    let doc = parse_str(
        "#EXT-X-CUE-OUT:DURATION=30\n\
         #EXTINF:10,\n\
         p1.ts\n\
         #EXTINF:10,\n\
         p2.ts\n",
    )
    .unwrap();

    assert!(doc.segments[0].cue_out);
    assert!(!doc.segments[1].cue_out);
    assert!(!doc.segments[1].cue_out_start);
}

#[test]
fn oatcls_scte35_standalone_does_not_open_a_span() {
    let doc = parse_str(
        "#EXT-OATCLS-SCTE35:deadbeef\n\
         #EXTINF:10,\n\
         a.ts\n\
         #EXTINF:10,\n\
         b.ts\n",
    )
    .unwrap();

    assert!(!doc.segments[0].cue_out);
    assert_eq!(Some("deadbeef"), doc.segments[0].oatcls_scte35.as_deref());
    assert_eq!(Some("deadbeef"), doc.segments[0].scte35.as_deref());
    assert_eq!(None, doc.segments[1].oatcls_scte35.as_deref());
}

#[test]
fn s4_variant_playlist() {
    let doc = parse_str(
        "#EXTM3U\n\
         #EXT-X-STREAM-INF:BANDWIDTH=5000000,RESOLUTION=1920x1080,CODECS=\"avc1.4d401f,mp4a.40.2\"\n\
         https://cdn/hi.m3u8\n",
    )
    .unwrap();

    assert!(doc.is_variant);
    assert_eq!(1, doc.variants.len());
    let v = &doc.variants[0];
    assert_eq!(Some(5_000_000), v.bandwidth);
    assert_eq!(Some("1920x1080"), v.resolution.as_deref());
    assert_eq!(Some("avc1.4d401f,mp4a.40.2"), v.codecs.as_deref());
    assert_eq!(Some("https://cdn/hi.m3u8"), v.uri.as_deref());
    assert_eq!(0, doc.segments.len());
}

#[test]
fn s5_daterange_transfer() {
    let doc = parse_str(
        "#EXT-X-DATERANGE:ID=\"d1\",START-DATE=\"2024-01-01T00:00:00Z\",X-CUSTOM=\"v\"\n\
         #EXTINF:4,\n\
         a.ts\n\
         #EXTINF:4,\n\
         b.ts\n",
    )
    .unwrap();

    assert_eq!(1, doc.segments[0].dateranges.len());
    let dr = &doc.segments[0].dateranges[0];
    assert_eq!(Some("d1"), dr.id.as_deref());
    assert_eq!(Some("2024-01-01T00:00:00Z"), dr.start_date.as_deref());
    assert_eq!(
        vec![("x_custom".to_string(), "\"v\"".to_string())],
        dr.x_attrs
    );

    assert!(doc.segments[1].dateranges.is_empty());
}

#[test]
fn s6_ll_hls_parts() {
    let doc = parse_str(
        "#EXT-X-PART-INF:PART-TARGET=0.5\n\
         #EXT-X-PART:URI=\"p1.ts\",DURATION=0.5\n\
         #EXT-X-PART:URI=\"p2.ts\",DURATION=0.5\n\
         #EXTINF:1.0,\n\
         full.ts\n",
    )
    .unwrap();

    let part_inf = doc.part_inf.as_ref().unwrap();
    assert_eq!(Some(0.5), part_inf.part_target);

    assert_eq!(1, doc.segments.len());
    let seg = &doc.segments[0];
    assert_eq!(Some("full.ts"), seg.uri.as_deref());
    assert_eq!(2, seg.parts.len());
    assert_eq!(Some("p1.ts"), seg.parts[0].uri.as_deref());
    assert_eq!(0.5, seg.parts[0].duration);
    assert_eq!(Some("p2.ts"), seg.parts[1].uri.as_deref());
}

#[test]
fn empty_input_returns_empty_error() {
    assert_eq!(Err(ParseError::Empty), parse_str(""));
}

#[test]
fn header_only_manifest_has_no_segments_or_flags() {
    let doc = parse_str("#EXTM3U\n").unwrap();
    assert!(doc.segments.is_empty());
    assert!(!doc.is_variant);
    assert!(!doc.is_endlist);
}

#[test]
fn lf_crlf_and_cr_line_endings_agree() {
    let lf = "#EXTM3U\n#EXTINF:4,\na.ts\n";
    let crlf = "#EXTM3U\r\n#EXTINF:4,\r\na.ts\r\n";
    let cr = "#EXTM3U\r#EXTINF:4,\ra.ts\r";
    let a = parse_str(lf).unwrap();
    let b = parse_str(crlf).unwrap();
    let c = parse_str(cr).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn whitespace_only_lines_are_skipped() {
    let doc = parse_str("#EXTM3U\n   \n\t\n#EXTINF:4,\na.ts\n").unwrap();
    assert_eq!(1, doc.segments.len());
}

#[test]
fn extinf_with_no_trailing_uri_appends_null_uri_segment_at_eof() {
    let doc = parse_str("#EXTM3U\n#EXTINF:4,orphan\n").unwrap();
    assert_eq!(1, doc.segments.len());
    assert_eq!(None, doc.segments[0].uri);
    assert_eq!(4.0, doc.segments[0].duration);
}

#[test]
fn bandwidth_tolerates_fractional_string() {
    let doc = parse_str(
        "#EXT-X-STREAM-INF:BANDWIDTH=\"5000000.5\"\nhi.m3u8\n",
    )
    .unwrap();
    assert_eq!(Some(5_000_000), doc.variants[0].bandwidth);
}

#[test]
fn allow_cache_and_playlist_type_are_lowercased() {
    let doc = parse_str("#EXT-X-ALLOW-CACHE:YES\n#EXT-X-PLAYLIST-TYPE:VOD\n").unwrap();
    assert_eq!(Some("yes"), doc.allow_cache.as_deref());
    assert_eq!(Some("vod"), doc.playlist_type.as_deref());
}

#[test]
fn unknown_tags_and_non_ext_comments_are_silently_ignored() {
    let doc = parse_str(
        "#EXTM3U\n# a plain comment\n#USP-X-TIMESTAMP-MAP:MPEGTS=900000\n#EXT-X-UNKNOWN-TAG:1\n#EXTINF:4,\na.ts\n",
    )
    .unwrap();
    assert_eq!(1, doc.segments.len());
}

#[test]
fn daterange_pending_list_preserves_occurrence_order() {
    let doc = parse_str(
        "#EXT-X-DATERANGE:ID=\"first\"\n#EXT-X-DATERANGE:ID=\"second\"\n#EXTINF:4,\na.ts\n",
    )
    .unwrap();
    let ids: Vec<_> = doc.segments[0]
        .dateranges
        .iter()
        .map(|d| d.id.as_deref().unwrap())
        .collect();
    assert_eq!(vec!["first", "second"], ids);
}

#[test]
fn asset_metadata_copies_across_an_open_span_and_moves_once_closed() {
    let doc = parse_str(
        "#EXT-X-CUE-OUT:DURATION=30\n\
         #EXT-X-ASSET:CATEGORY=\"ad\"\n\
         #EXTINF:10,\n\
         p1.ts\n\
         #EXT-X-CUE-OUT-CONT:10/30\n\
         #EXTINF:10,\n\
         p2.ts\n\
         #EXT-X-CUE-IN\n\
         #EXTINF:10,\n\
         p3.ts\n",
    )
    .unwrap();

    let meta0 = doc.segments[0].asset_metadata.as_ref().unwrap();
    assert_eq!(("category".to_string(), "\"ad\"".to_string()), meta0[0]);
    let meta1 = doc.segments[1].asset_metadata.as_ref().unwrap();
    assert_eq!(meta0, meta1);
    assert!(doc.segments[2].asset_metadata.is_none());
}

#[test]
fn session_data_rendition_report_content_steering_and_tiles_round_trip() {
    let doc = parse_str(
        "#EXT-X-SESSION-DATA:DATA-ID=\"com.example.title\",VALUE=\"Episode 1\"\n\
         #EXT-X-RENDITION-REPORT:URI=\"../1/rendition.m3u8\",LAST-MSN=10,LAST-PART=2\n\
         #EXT-X-CONTENT-STEERING:SERVER-URI=\"steering.json\",PATHWAY-ID=\"A\"\n\
         #EXT-X-TILES:RESOLUTION=416x234,LAYOUT=5x6,DURATION=10.01,BANDWIDTH=600000\n",
    )
    .unwrap();

    assert_eq!(Some("com.example.title"), doc.session_data[0].data_id.as_deref());
    assert_eq!(Some("Episode 1"), doc.session_data[0].value.as_deref());

    assert_eq!(Some("../1/rendition.m3u8"), doc.rendition_reports[0].uri.as_deref());
    assert_eq!(Some(10), doc.rendition_reports[0].last_msn);
    assert_eq!(Some(2), doc.rendition_reports[0].last_part);

    let steering = doc.content_steering.unwrap();
    assert_eq!(Some("steering.json"), steering.server_uri.as_deref());
    assert_eq!(Some("A"), steering.pathway_id.as_deref());

    assert_eq!(Some(10.01), doc.tiles[0].duration);
    assert_eq!(Some(600_000), doc.tiles[0].bandwidth);
}

#[test]
fn i_frame_and_image_stream_inf_are_appended_without_a_uri_line() {
    let doc = parse_str(
        "#EXT-X-I-FRAME-STREAM-INF:BANDWIDTH=100000,URI=\"iframe.m3u8\"\n\
         #EXT-X-IMAGE-STREAM-INF:BANDWIDTH=50000,URI=\"images.m3u8\"\n",
    )
    .unwrap();
    assert_eq!(1, doc.i_frame_variants.len());
    assert_eq!(Some("iframe.m3u8"), doc.i_frame_variants[0].uri.as_deref());
    assert_eq!(1, doc.image_variants.len());
    assert_eq!(Some("images.m3u8"), doc.image_variants[0].uri.as_deref());
    assert!(doc.segments.is_empty());
}

#[test]
fn mixed_content_segment_path_wins_at_the_next_uri() {
    let doc = parse_str(
        "#EXT-X-STREAM-INF:BANDWIDTH=1\n\
         #EXTINF:4,\n\
         a.ts\n",
    )
    .unwrap();
    assert_eq!(0, doc.variants.len());
    assert_eq!(1, doc.segments.len());
}

#[test]
fn blackout_sentinel_for_parameterless_tag() {
    let doc = parse_str("#EXT-X-BLACKOUT\n#EXTINF:4,\na.ts\n").unwrap();
    assert_eq!(Some(""), doc.segments[0].blackout.as_deref());

    let doc2 = parse_str("#EXT-X-BLACKOUT:reason=maintenance\n#EXTINF:4,\na.ts\n").unwrap();
    assert_eq!(Some("reason=maintenance"), doc2.segments[0].blackout.as_deref());
}

#[test]
fn program_date_time_document_scope_is_first_occurrence_only() {
    let doc = parse_str(
        "#EXT-X-PROGRAM-DATE-TIME:2024-01-01T00:00:00Z\n\
         #EXTINF:4,\na.ts\n\
         #EXT-X-PROGRAM-DATE-TIME:2024-01-01T00:00:04Z\n\
         #EXTINF:4,\nb.ts\n",
    )
    .unwrap();
    assert_eq!(
        Some("2024-01-01T00:00:00Z"),
        doc.program_date_time.as_deref()
    );
    assert_eq!(
        Some("2024-01-01T00:00:04Z"),
        doc.segments[1].program_date_time.as_deref()
    );
}
