//! Absent, empty, and self-closing elements.

use ead3::model::Did;
use rstest::rstest;

use crate::helpers::fixtures::{MINIMAL_CONTROL, wrap_in_ead};

fn document_with_did(did_content: &str) -> ead3::Document {
    let xml = wrap_in_ead(&format!(
        "{}<archdesc level=\"collection\"><did>{}</did></archdesc>",
        MINIMAL_CONTROL, did_content
    ));
    xml.parse()
        .unwrap_or_else(|e| panic!("Failed to decode did content {:?}: {}", did_content, e))
}

fn did_of(document: &ead3::Document) -> &Did {
    &document.arch_desc.as_ref().unwrap().dids[0]
}

#[rstest]
#[case::text_leaf("<unitid/>", "<unitid></unitid>")]
#[case::text_leaf_with_attributes(
    "<container localtype=\"box\"/>",
    "<container localtype=\"box\"></container>"
)]
#[case::markup_leaf("<abstract label=\"Summary\"/>", "<abstract label=\"Summary\"></abstract>")]
#[case::container("<langmaterial/>", "<langmaterial></langmaterial>")]
#[case::container_with_attributes("<dao href=\"x\"/>", "<dao href=\"x\"></dao>")]
fn test_self_closing_equals_expanded(#[case] self_closing: &str, #[case] expanded: &str) {
    assert_eq!(document_with_did(self_closing), document_with_did(expanded));
}

#[test]
fn test_absent_optional_stays_absent() {
    let document = document_with_did("");
    let did = did_of(&document);
    assert!(did.head.is_none());
    assert!(did.unit_titles.is_empty());

    let control = document.control.as_ref().unwrap();
    assert!(control.publication_status.is_none());

    let xml = document.to_xml_string().unwrap();
    assert!(!xml.contains("<publicationstatus"));
    assert!(!xml.contains("<head"));
}

#[test]
fn test_empty_optional_stays_present() {
    let document = document_with_did("<head/><unitid/><abstract></abstract>");
    let did = did_of(&document);
    assert!(did.head.as_ref().is_some_and(|head| head.value.is_empty()));
    assert_eq!(did.unit_ids.len(), 1);
    assert_eq!(did.unit_ids[0].value, "");
    assert_eq!(did.abstracts.len(), 1);
    assert!(did.abstracts[0].value.is_empty());

    let xml = document.to_xml_string().unwrap();
    assert!(xml.contains("<head></head>"), "Got:\n{}", xml);
    assert!(xml.contains("<unitid></unitid>"), "Got:\n{}", xml);
    assert!(xml.contains("<abstract></abstract>"), "Got:\n{}", xml);
    assert_eq!(xml.parse::<ead3::Document>().unwrap(), document);
}

#[test]
fn test_empty_publication_status_keeps_its_attribute() {
    let xml = wrap_in_ead(&format!(
        "{}<archdesc><did/></archdesc>",
        MINIMAL_CONTROL.replace(
            "<maintenanceagency>",
            "<publicationstatus value=\"inprocess\"/><maintenanceagency>"
        )
    ));
    let document: ead3::Document = xml.parse().unwrap();
    let status = document
        .control
        .as_ref()
        .and_then(|control| control.publication_status.as_ref())
        .expect("publicationstatus decoded");
    assert_eq!(status.value.as_deref(), Some("inprocess"));
    assert_eq!(status.text, "");
    assert!(
        document
            .to_xml_string()
            .unwrap()
            .contains("<publicationstatus value=\"inprocess\"></publicationstatus>")
    );
}

#[rstest]
#[case::surrounding_spaces("  MS 42  ")]
#[case::inner_newline("MS\n42")]
#[case::escaped_characters("A & B < C")]
fn test_text_leaf_whitespace_and_escapes_survive(#[case] value: &str) {
    let escaped = value.replace('&', "&amp;").replace('<', "&lt;");
    let document = document_with_did(&format!("<unitid>{}</unitid>", escaped));
    assert_eq!(did_of(&document).unit_ids[0].value, escaped.as_str());
    assert_eq!(did_of(&document).unit_ids[0].value.plain_text(), value);

    let again: ead3::Document = document.to_xml_string().unwrap().parse().unwrap();
    assert_eq!(did_of(&again).unit_ids[0].value.plain_text(), value);
}

#[test]
fn test_empty_dsc_is_present() {
    let xml = wrap_in_ead(&format!(
        "{}<archdesc level=\"fonds\"><did/><dsc/></archdesc>",
        MINIMAL_CONTROL
    ));
    let document: ead3::Document = xml.parse().unwrap();
    let dsc = document.arch_desc.as_ref().unwrap().dsc.as_ref();
    assert!(dsc.is_some_and(|dsc| dsc.component_count() == 0));
}
