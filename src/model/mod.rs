//! Typed EAD3 object model.
//!
//! One Rust type per element, grouped by where the element lives in the
//! document:
//!
//! ```text
//! Document (<ead>)
//!   ├─ Control        control.rs  → record id, file desc, maintenance, sources
//!   └─ ArchDesc       archdesc.rs → did.rs, narrative sections, access.rs
//!        └─ Dsc       dsc.rs      → <c> (recursive) and <c01>..<c04>
//! shared leaves and terms: common.rs
//! ```
//!
//! Optional children are `Option<T>`, repeatable children `Vec<T>`,
//! attributes `Option<String>`. Children that may interleave in any order,
//! such as paragraphs and lists, share one `Vec` of a choice enum. Absent
//! stays absent through a round trip.

#[macro_use]
mod macros;

mod access;
mod archdesc;
mod common;
mod control;
mod did;
mod dsc;
mod markup;

use std::io::Write;
use std::str::FromStr;

pub use access::*;
pub use archdesc::*;
pub use common::*;
pub use control::*;
pub use did::*;
pub use dsc::*;
pub use markup::Markup;

use crate::codec::{
    ChildHandler, Decoder, EadElement, ElementStart, Encoder, XmlCursor, XmlWriter, handler,
};
use crate::error::Ead3Error;
use crate::schema::{Cardinality, ChildSchema, ContentKind, ElementSchema};

/// Default namespace of EAD3 documents.
pub const NAMESPACE: &str = "http://ead3.archivists.org/schema/undeprecated/";

/// An EAD3 finding aid: the `<ead>` root.
///
/// Both [`Control`] and [`ArchDesc`] are required; they are `Option`s so a
/// document can be built up field by field. Encoding fails while either is
/// unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct Document {
    /// Default namespace (`xmlns`).
    pub namespace: Option<String>,
    /// Further `xmlns:*` and `xsi:*` root attributes, in document order.
    pub namespace_declarations: Vec<(String, String)>,
    pub id: Option<String>,
    pub audience: Option<String>,
    pub lang: Option<String>,
    pub script: Option<String>,
    pub related_encoding: Option<String>,
    pub date_encoding: Option<String>,
    pub lang_encoding: Option<String>,
    pub script_encoding: Option<String>,
    pub repository_encoding: Option<String>,
    pub control: Option<Control>,
    pub arch_desc: Option<ArchDesc>,
}

impl Document {
    /// An empty document carrying the EAD3 namespace.
    pub fn new() -> Self {
        Self {
            namespace: Some(NAMESPACE.to_string()),
            ..Self::default()
        }
    }

    /// The record identifier, if control and record id are set.
    pub fn record_id(&self) -> Option<&str> {
        self.control
            .as_ref()?
            .record_id
            .as_ref()
            .map(|record_id| record_id.value.as_str())
    }

    /// Encode with default options.
    pub fn to_xml_string(&self) -> Result<String, Ead3Error> {
        Encoder::new().encode_to_string(self)
    }

    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String, Ead3Error> {
        serde_json::to_string_pretty(self).map_err(|e| Ead3Error::json(e.to_string()))
    }

    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, Ead3Error> {
        serde_json::from_str(json).map_err(|e| Ead3Error::json(e.to_string()))
    }

    fn is_namespace_declaration(name: &str) -> bool {
        name.starts_with("xmlns:") || name.starts_with("xsi:")
    }
}

impl FromStr for Document {
    type Err = Ead3Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decoder::new().decode(s.as_bytes())
    }
}

impl EadElement for Document {
    const TAG: &'static str = "ead";
    const SCHEMA: ElementSchema = ElementSchema {
        tag: "ead",
        attributes: &[
            "xmlns",
            "id",
            "audience",
            "lang",
            "script",
            "relatedencoding",
            "dateencoding",
            "langencoding",
            "scriptencoding",
            "repositoryencoding",
        ],
        children: &[
            ChildSchema {
                tags: &[Control::TAG],
                cardinality: Cardinality::One,
            },
            ChildSchema {
                tags: &[ArchDesc::TAG],
                cardinality: Cardinality::One,
            },
        ],
        content: ContentKind::Elements,
    };

    fn decode(cursor: &mut XmlCursor<'_>, mut start: ElementStart) -> Result<Self, Ead3Error> {
        let mut document = Self::default();
        for (key, value) in start.take_attributes() {
            match key.as_str() {
                "xmlns" => document.namespace = Some(value),
                "id" => document.id = Some(value),
                "audience" => document.audience = Some(value),
                "lang" => document.lang = Some(value),
                "script" => document.script = Some(value),
                "relatedencoding" => document.related_encoding = Some(value),
                "dateencoding" => document.date_encoding = Some(value),
                "langencoding" => document.lang_encoding = Some(value),
                "scriptencoding" => document.script_encoding = Some(value),
                "repositoryencoding" => document.repository_encoding = Some(value),
                name if Self::is_namespace_declaration(name) => {
                    document.namespace_declarations.push((key, value));
                }
                _ => cursor.unknown_attribute(Self::TAG, &key, &value),
            }
        }

        if !start.is_empty() {
            let handlers: &[ChildHandler<Self>] = &[
                handler::<Self>(|document, cursor, start| {
                    if document.control.is_some() {
                        cursor.repeated_element(Self::TAG, Control::TAG);
                    }
                    document.control = Some(Control::decode(cursor, start)?);
                    Ok(())
                }),
                handler::<Self>(|document, cursor, start| {
                    if document.arch_desc.is_some() {
                        cursor.repeated_element(Self::TAG, ArchDesc::TAG);
                    }
                    document.arch_desc = Some(ArchDesc::decode(cursor, start)?);
                    Ok(())
                }),
            ];
            cursor.read_children(&mut document, Self::TAG, Self::SCHEMA.children, handlers)?;
        }

        if document.control.is_none() {
            return Err(Ead3Error::missing_child(Self::TAG, Control::TAG));
        }
        if document.arch_desc.is_none() {
            return Err(Ead3Error::missing_child(Self::TAG, ArchDesc::TAG));
        }
        Ok(document)
    }

    fn encode<W: Write>(&self, writer: &mut XmlWriter<W>) -> Result<(), Ead3Error> {
        let control = self
            .control
            .as_ref()
            .ok_or_else(|| Ead3Error::unset_child(Self::TAG, Control::TAG))?;
        let arch_desc = self
            .arch_desc
            .as_ref()
            .ok_or_else(|| Ead3Error::unset_child(Self::TAG, ArchDesc::TAG))?;

        let mut start = quick_xml::events::BytesStart::new(Self::TAG);
        if let Some(namespace) = &self.namespace {
            start.push_attribute(("xmlns", namespace.as_str()));
        }
        for (name, value) in &self.namespace_declarations {
            start.push_attribute((name.as_str(), value.as_str()));
        }
        let attributes = [
            ("id", &self.id),
            ("audience", &self.audience),
            ("lang", &self.lang),
            ("script", &self.script),
            ("relatedencoding", &self.related_encoding),
            ("dateencoding", &self.date_encoding),
            ("langencoding", &self.lang_encoding),
            ("scriptencoding", &self.script_encoding),
            ("repositoryencoding", &self.repository_encoding),
        ];
        for (name, value) in attributes {
            if let Some(value) = value {
                start.push_attribute((name, value.as_str()));
            }
        }

        writer.start_element(start)?;
        control.encode(writer)?;
        arch_desc.encode(writer)?;
        writer.end_element(Self::TAG)
    }
}

/// Schemas of every element type, root first.
pub(crate) static ELEMENT_SCHEMAS: &[&ElementSchema] = &[
    &Document::SCHEMA,
    // control
    &Control::SCHEMA,
    &RecordId::SCHEMA,
    &OtherRecordId::SCHEMA,
    &Representation::SCHEMA,
    &FileDesc::SCHEMA,
    &TitleStmt::SCHEMA,
    &TitleProper::SCHEMA,
    &Subtitle::SCHEMA,
    &Author::SCHEMA,
    &Sponsor::SCHEMA,
    &EditionStmt::SCHEMA,
    &Edition::SCHEMA,
    &PublicationStmt::SCHEMA,
    &Publisher::SCHEMA,
    &SeriesStmt::SCHEMA,
    &NoteStmt::SCHEMA,
    &ControlNote::SCHEMA,
    &MaintenanceStatus::SCHEMA,
    &PublicationStatus::SCHEMA,
    &MaintenanceAgency::SCHEMA,
    &AgencyCode::SCHEMA,
    &OtherAgencyCode::SCHEMA,
    &AgencyName::SCHEMA,
    &LanguageDeclaration::SCHEMA,
    &ConventionDeclaration::SCHEMA,
    &RightsDeclaration::SCHEMA,
    &LocalTypeDeclaration::SCHEMA,
    &LocalControl::SCHEMA,
    &Term::SCHEMA,
    &MaintenanceHistory::SCHEMA,
    &MaintenanceEvent::SCHEMA,
    &EventType::SCHEMA,
    &EventDateTime::SCHEMA,
    &AgentType::SCHEMA,
    &Agent::SCHEMA,
    &EventDescription::SCHEMA,
    &Sources::SCHEMA,
    &Source::SCHEMA,
    &SourceEntry::SCHEMA,
    // archdesc
    &ArchDesc::SCHEMA,
    &AccessRestrict::SCHEMA,
    &Accruals::SCHEMA,
    &AcqInfo::SCHEMA,
    &AltFormAvail::SCHEMA,
    &Appraisal::SCHEMA,
    &Arrangement::SCHEMA,
    &Bibliography::SCHEMA,
    &BiogHist::SCHEMA,
    &CustodHist::SCHEMA,
    &FilePlan::SCHEMA,
    &LegalStatus::SCHEMA,
    &Odd::SCHEMA,
    &OriginalsLoc::SCHEMA,
    &OtherFindAid::SCHEMA,
    &PhysTech::SCHEMA,
    &PreferCite::SCHEMA,
    &ProcessInfo::SCHEMA,
    &RelatedMaterial::SCHEMA,
    &ScopeContent::SCHEMA,
    &SeparatedMaterial::SCHEMA,
    &UseRestrict::SCHEMA,
    &ArchRef::SCHEMA,
    &BibRef::SCHEMA,
    &Index::SCHEMA,
    &ControlAccess::SCHEMA,
    &Relations::SCHEMA,
    &Relation::SCHEMA,
    &RelationEntry::SCHEMA,
    // did
    &Did::SCHEMA,
    &Repository::SCHEMA,
    &Origination::SCHEMA,
    &UnitTitle::SCHEMA,
    &UnitDate::SCHEMA,
    &UnitDateStructured::SCHEMA,
    &PhysDesc::SCHEMA,
    &PhysDescSet::SCHEMA,
    &PhysDescStructured::SCHEMA,
    &Quantity::SCHEMA,
    &UnitType::SCHEMA,
    &PhysFacet::SCHEMA,
    &Dimensions::SCHEMA,
    &UnitId::SCHEMA,
    &Abstract::SCHEMA,
    &DidNote::SCHEMA,
    &MaterialSpec::SCHEMA,
    &LangMaterial::SCHEMA,
    &PhysLoc::SCHEMA,
    &Container::SCHEMA,
    &Dao::SCHEMA,
    // dsc
    &Dsc::SCHEMA,
    &C::SCHEMA,
    &C01::SCHEMA,
    &C02::SCHEMA,
    &C03::SCHEMA,
    &C04::SCHEMA,
    // shared
    &P::SCHEMA,
    &Head::SCHEMA,
    &List::SCHEMA,
    &ChronList::SCHEMA,
    &ChronItem::SCHEMA,
    &ChronItemSet::SCHEMA,
    &Event::SCHEMA,
    &Date::SCHEMA,
    &DateSingle::SCHEMA,
    &DateRange::SCHEMA,
    &FromDate::SCHEMA,
    &ToDate::SCHEMA,
    &DateSet::SCHEMA,
    &DescriptiveNote::SCHEMA,
    &Part::SCHEMA,
    &PersName::SCHEMA,
    &FamName::SCHEMA,
    &CorpName::SCHEMA,
    &Name::SCHEMA,
    &Subject::SCHEMA,
    &GenreForm::SCHEMA,
    &GeogName::SCHEMA,
    &Occupation::SCHEMA,
    &Function::SCHEMA,
    &Title::SCHEMA,
    &Language::SCHEMA,
    &Script::SCHEMA,
    &LanguageSet::SCHEMA,
    &Citation::SCHEMA,
    &Abbr::SCHEMA,
    &ObjectXmlWrap::SCHEMA,
    &Address::SCHEMA,
    &AddressLine::SCHEMA,
    &Num::SCHEMA,
];

/// Field emptiness test used to skip absent fields in the JSON view.
#[cfg(feature = "json")]
pub(crate) trait Absent {
    fn is_absent(&self) -> bool;
}

#[cfg(feature = "json")]
impl<T> Absent for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

#[cfg(feature = "json")]
impl<T> Absent for Vec<T> {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}
