//! Finding-aid fixtures stored under `tests/fixtures/`.

use std::fs;
use std::path::PathBuf;

pub const MINIMAL: &str = "minimal.xml";
pub const NUMBERED_COMPONENTS: &str = "numbered_components.xml";
pub const RECURSIVE_COMPONENTS: &str = "recursive_components.xml";
pub const FULL_FINDING_AID: &str = "full_finding_aid.xml";

/// Every fixture, in order of increasing coverage.
pub const ALL: &[&str] = &[
    MINIMAL,
    NUMBERED_COMPONENTS,
    RECURSIVE_COMPONENTS,
    FULL_FINDING_AID,
];

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Read a fixture as a string.
pub fn load(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Decode a fixture, failing the test with the error if it does not parse.
pub fn decode_fixture(name: &str) -> ead3::Document {
    ead3::decode(load(name).as_bytes())
        .unwrap_or_else(|e| panic!("Fixture {} failed to decode: {}", name, e))
}

/// An `<ead>` root in the EAD3 namespace holding `body`.
pub fn wrap_in_ead(body: &str) -> String {
    format!(
        "<ead xmlns=\"{}\">{}</ead>",
        ead3::NAMESPACE,
        body
    )
}

/// Minimal `<control>` block satisfying every required child.
pub const MINIMAL_CONTROL: &str = concat!(
    "<control>",
    "<recordid>r1</recordid>",
    "<filedesc><titlestmt><titleproper>T</titleproper></titlestmt></filedesc>",
    "<maintenancestatus value=\"new\"/>",
    "<maintenanceagency><agencyname>A</agencyname></maintenanceagency>",
    "<languagedeclaration><language langcode=\"eng\">English</language></languagedeclaration>",
    "</control>"
);

/// A document whose `<dsc>` holds exactly `dsc_content`.
pub fn document_with_dsc(dsc_content: &str) -> String {
    wrap_in_ead(&format!(
        "{}<archdesc level=\"collection\"><did><unittitle>T</unittitle></did><dsc>{}</dsc></archdesc>",
        MINIMAL_CONTROL, dsc_content
    ))
}
