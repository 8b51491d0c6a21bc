//! Component hierarchy tests: the numbered `<c01>`..`<c04>` chain, the
//! recursive `<c>`, and the two mixed inside one `<dsc>`.

use ead3::model::{C, Dsc};
use ead3::{DecodeWarning, Decoder};
use rstest::rstest;

use crate::helpers::fixtures;

fn dsc_of(document: &ead3::Document) -> &Dsc {
    document
        .arch_desc
        .as_ref()
        .and_then(|arch_desc| arch_desc.dsc.as_ref())
        .expect("Expected the document to have a <dsc>")
}

fn nested_components(depth: usize) -> String {
    let mut xml = String::new();
    for level in 1..=depth {
        xml.push_str(&format!("<c id=\"n{}\"><did><unittitle>{}</unittitle></did>", level, level));
    }
    for _ in 0..depth {
        xml.push_str("</c>");
    }
    xml
}

#[test]
fn test_numbered_chain_survives_intact() {
    let document = fixtures::decode_fixture(fixtures::NUMBERED_COMPONENTS);
    let dsc = dsc_of(&document);
    assert_eq!(dsc.dsc_type.as_deref(), Some("combined"));
    assert!(dsc.components.is_empty());
    assert_eq!(dsc.numbered.len(), 2);
    assert_eq!(dsc.component_count(), 6);

    let c01 = &dsc.numbered[0];
    assert_eq!(c01.id.as_deref(), Some("ser1"));
    let c02 = &c01.components[0];
    assert_eq!(c02.id.as_deref(), Some("ser1.1"));
    assert_eq!(c02.access_restrict.len(), 1);
    let c03 = &c02.components[0];
    assert_eq!(c03.did.as_ref().unwrap().containers.len(), 2);
    assert_eq!(c03.components.len(), 2);

    let c04 = &c03.components[0];
    assert_eq!(c04.level.as_deref(), Some("item"));
    assert_eq!(c04.use_restrict.len(), 1);
    assert_eq!(c04.phys_tech.len(), 1);
    let empty_container = &c04.did.as_ref().unwrap().containers[0];
    assert_eq!(empty_container.local_type.as_deref(), Some("Folder"));
    assert_eq!(empty_container.value, "");
}

#[test]
fn test_numbered_chain_round_trips() {
    let document = fixtures::decode_fixture(fixtures::NUMBERED_COMPONENTS);
    let xml = document.to_xml_string().unwrap();
    for tag in ["<c01 ", "<c02 ", "<c03 ", "<c04 "] {
        assert!(xml.contains(tag), "Expected {} in output:\n{}", tag, xml);
    }
    assert_eq!(xml.parse::<ead3::Document>().unwrap(), document);
}

#[test]
fn test_recursive_components_keep_their_depth() {
    let document = fixtures::decode_fixture(fixtures::RECURSIVE_COMPONENTS);
    let dsc = dsc_of(&document);
    assert!(dsc.numbered.is_empty());
    assert_eq!(dsc.components.len(), 1);

    let top = &dsc.components[0];
    assert_eq!(top.depth(), 6);
    assert_eq!(top.component_count(), 7);

    let mut deepest: &C = top;
    while let Some(child) = deepest.components.first() {
        deepest = child;
    }
    assert_eq!(deepest.id.as_deref(), Some("c6"));
    assert_eq!(deepest.odd.len(), 1);
    assert_eq!(deepest.did.as_ref().unwrap().containers[0].value, "12");
}

#[rstest]
#[case(1)]
#[case(12)]
#[case(50)]
fn test_generated_nesting_round_trips(#[case] depth: usize) {
    let xml = fixtures::document_with_dsc(&nested_components(depth));
    let document: ead3::Document = xml.parse().unwrap();
    assert_eq!(dsc_of(&document).components[0].depth(), depth);

    let again: ead3::Document = document.to_xml_string().unwrap().parse().unwrap();
    assert_eq!(document, again);
}

#[test]
fn test_mixed_conventions_in_one_dsc() {
    let xml = fixtures::document_with_dsc(concat!(
        "<c01 id=\"a\"><did><unittitle>A</unittitle></did></c01>",
        "<c id=\"b\"><c id=\"b1\"/></c>",
        "<c01 id=\"c\"><c02 id=\"c1\"/></c01>",
    ));
    let decoded = Decoder::new().decode_with_warnings(xml.as_bytes()).unwrap();
    assert!(decoded.warnings.is_empty(), "{:?}", decoded.warnings);

    let dsc = dsc_of(&decoded.document);
    assert_eq!(dsc.components.len(), 1);
    assert_eq!(dsc.numbered.len(), 2);
    assert_eq!(dsc.component_count(), 5);

    let again: ead3::Document = decoded.document.to_xml_string().unwrap().parse().unwrap();
    assert_eq!(decoded.document, again);
}

#[rstest]
#[case::generic_inside_numbered("<c01><c/></c01>", "c01", "c")]
#[case::skipped_level("<c01><c03/></c01>", "c01", "c03")]
#[case::past_the_last_level("<c01><c02><c03><c04><c05/></c04></c03></c02></c01>", "c04", "c05")]
#[case::numbered_inside_generic("<c><c02/></c>", "c", "c02")]
fn test_components_outside_their_convention_are_skipped(
    #[case] dsc_content: &str,
    #[case] parent: &str,
    #[case] skipped: &str,
) {
    let xml = fixtures::document_with_dsc(dsc_content);
    let decoded = Decoder::new().decode_with_warnings(xml.as_bytes()).unwrap();
    assert!(
        matches!(
            decoded.warnings.as_slice(),
            [DecodeWarning::UnknownElement { parent: p, name, .. }] if p == parent && name == skipped
        ),
        "Expected <{}> to be skipped inside <{}>, got {:?}",
        skipped,
        parent,
        decoded.warnings
    );
}
