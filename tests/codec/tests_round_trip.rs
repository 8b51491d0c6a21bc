//! Round-trip tests over the fixture finding aids.

use ead3::{Decoder, EncodeOptions, Encoder};
use rstest::rstest;

use crate::helpers::content_assertions::assert_content_preserved;
use crate::helpers::fixtures;

fn encode_to_string(document: &ead3::Document, options: EncodeOptions) -> String {
    Encoder::with_options(options)
        .encode_to_string(document)
        .unwrap_or_else(|e| panic!("Failed to encode: {}", e))
}

#[rstest]
#[case::minimal(fixtures::MINIMAL)]
#[case::numbered(fixtures::NUMBERED_COMPONENTS)]
#[case::recursive(fixtures::RECURSIVE_COMPONENTS)]
#[case::full(fixtures::FULL_FINDING_AID)]
fn test_fixture_decodes_cleanly(#[case] name: &str) {
    let decoded = Decoder::new()
        .decode_with_warnings(fixtures::load(name).as_bytes())
        .unwrap_or_else(|e| panic!("Fixture {} failed to decode: {}", name, e));
    assert!(
        decoded.warnings.is_empty(),
        "Expected no warnings for {}, got {:#?}",
        name,
        decoded.warnings
    );
}

#[rstest]
#[case::minimal(fixtures::MINIMAL)]
#[case::numbered(fixtures::NUMBERED_COMPONENTS)]
#[case::recursive(fixtures::RECURSIVE_COMPONENTS)]
#[case::full(fixtures::FULL_FINDING_AID)]
fn test_decode_encode_decode_is_stable(#[case] name: &str) {
    let first = fixtures::decode_fixture(name);
    let bytes = ead3::encode(&first).unwrap();
    let second = ead3::decode(&bytes).unwrap();
    assert_eq!(first, second, "Model changed across a round trip of {}", name);
}

#[rstest]
#[case::minimal(fixtures::MINIMAL)]
#[case::numbered(fixtures::NUMBERED_COMPONENTS)]
#[case::recursive(fixtures::RECURSIVE_COMPONENTS)]
#[case::full(fixtures::FULL_FINDING_AID)]
fn test_encoded_output_preserves_content(#[case] name: &str) {
    let input = fixtures::load(name);
    let document = fixtures::decode_fixture(name);
    let output = encode_to_string(&document, EncodeOptions::default());
    assert_content_preserved(&input, &output);
}

#[rstest]
#[case::minimal(fixtures::MINIMAL)]
#[case::numbered(fixtures::NUMBERED_COMPONENTS)]
#[case::recursive(fixtures::RECURSIVE_COMPONENTS)]
#[case::full(fixtures::FULL_FINDING_AID)]
fn test_encoding_is_idempotent(#[case] name: &str) {
    let document = fixtures::decode_fixture(name);
    let once = encode_to_string(&document, EncodeOptions::default());
    let twice = encode_to_string(&once.parse().unwrap(), EncodeOptions::default());
    assert_eq!(once, twice, "Re-encoding {} changed the output", name);
}

#[rstest]
#[case::pretty(EncodeOptions::default())]
#[case::compact(EncodeOptions::compact())]
#[case::two_space_indent(EncodeOptions { tab_size: 2, ..Default::default() })]
#[case::tabs(EncodeOptions { insert_spaces: false, ..Default::default() })]
fn test_output_layout_does_not_change_the_model(#[case] options: EncodeOptions) {
    let document = fixtures::decode_fixture(fixtures::FULL_FINDING_AID);
    let output = encode_to_string(&document, options);
    let again: ead3::Document = output.parse().unwrap();
    assert_eq!(document, again);
}

#[test]
fn test_compact_output_is_content_equivalent_to_pretty() {
    let document = fixtures::decode_fixture(fixtures::FULL_FINDING_AID);
    let pretty = encode_to_string(&document, EncodeOptions::default());
    let compact = encode_to_string(&document, EncodeOptions::compact());
    assert_content_preserved(&pretty, &compact);
    assert_content_preserved(&compact, &pretty);
}

#[test]
fn test_round_trip_through_encode_into() {
    let document = fixtures::decode_fixture(fixtures::NUMBERED_COMPONENTS);
    let mut sink = Vec::new();
    Encoder::new().encode_into(&document, &mut sink).unwrap();
    assert_eq!(sink, ead3::encode(&document).unwrap());
}

// ============================================================================
// DOCUMENT ORDER
// ============================================================================

fn archdesc_round_trip(archdesc_children: &str) -> String {
    let xml = fixtures::wrap_in_ead(&format!(
        "{}<archdesc level=\"collection\"><did><unittitle>T</unittitle></did>{}</archdesc>",
        fixtures::MINIMAL_CONTROL,
        archdesc_children
    ));
    let document: ead3::Document = xml.parse().unwrap();
    encode_to_string(&document, EncodeOptions::compact())
}

#[rstest]
#[case::paragraphs_around_list(
    "<scopecontent><p>First</p><list><item>L</item></list><p>Last</p></scopecontent>"
)]
#[case::chronology_between_paragraphs(concat!(
    "<bioghist><head>Life</head><p>Early</p>",
    "<chronlist><chronitem><datesingle>1900</datesingle><event>Born</event></chronitem></chronlist>",
    "<p>Late</p><bioghist><p>Nested</p></bioghist></bioghist>",
))]
#[case::citations_between_paragraphs(
    "<bibliography><bibref>A</bibref><p>Between</p><archref>B</archref><bibref>C</bibref></bibliography>"
)]
#[case::headings_interleaved(concat!(
    "<controlaccess><p>Intro</p>",
    "<persname><part>Ada</part></persname><subject><part>Maps</part></subject>",
    "<controlaccess><geogname><part>Coast</part></geogname></controlaccess>",
    "<persname><part>Bea</part></persname></controlaccess>",
))]
fn test_interleaved_children_keep_document_order(#[case] content: &str) {
    let output = archdesc_round_trip(content);
    assert!(
        output.contains(content),
        "Expected {} in document order, got:\n{}",
        content,
        output
    );
}

#[test]
fn test_inline_markup_in_phrase_leaves_survives() {
    let did = concat!(
        "<did><unittitle>T</unittitle>",
        "<unitdate>1900-<emph>1910</emph></unitdate>",
        "<unitid>MS <emph render=\"bold\">42</emph></unitid></did>",
    );
    let xml = fixtures::wrap_in_ead(&format!(
        "{}<archdesc level=\"collection\">{}</archdesc>",
        fixtures::MINIMAL_CONTROL,
        did
    ));
    let decoded = Decoder::new().decode_with_warnings(xml.as_bytes()).unwrap();
    assert!(decoded.warnings.is_empty(), "{:?}", decoded.warnings);
    let output = encode_to_string(&decoded.document, EncodeOptions::compact());
    assert!(output.contains(did), "Got:\n{}", output);
}
