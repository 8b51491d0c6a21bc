//! The archival description and its narrative sections.

use super::access::{ControlAccess, Relations};
use super::common::*;
use super::did::Did;
use super::dsc::Dsc;

ead_element! {
    /// Description of the materials as a whole, followed by their components.
    pub struct ArchDesc = "archdesc" {
        attrs {
            id: "id",
            level: "level",
            other_level: "otherlevel",
            related_encoding: "relatedencoding",
            local_type: "localtype",
            encoding_analog: "encodinganalog",
            altrender: "altrender",
            audience: "audience",
        }
        children {
            dids: Did [some],
            bibliography: Bibliography [many],
            biog_hist: BiogHist [many],
            scope_content: ScopeContent [many],
            arrangement: Arrangement [many],
            control_access: ControlAccess [many],
            related_material: RelatedMaterial [many],
            relations: Relations [many],
            access_restrict: AccessRestrict [many],
            use_restrict: UseRestrict [many],
            acq_info: AcqInfo [many],
            process_info: ProcessInfo [many],
            alt_form_avail: AltFormAvail [many],
            appraisal: Appraisal [many],
            custod_hist: CustodHist [many],
            file_plan: FilePlan [many],
            accruals: Accruals [many],
            legal_status: LegalStatus [many],
            odd: Odd [many],
            originals_loc: OriginalsLoc [many],
            prefer_cite: PreferCite [many],
            other_find_aid: OtherFindAid [many],
            phys_tech: PhysTech [many],
            separated_material: SeparatedMaterial [many],
            index: Index [many],
            dsc: Dsc [opt],
        }
    }
}

ead_choice! {
    /// Block content of a bibliography, citations interleaved with prose.
    pub enum BibliographyBlock { P, List, ChronList, BibRef, ArchRef }
}

ead_choice! {
    /// Block content of a section pointing to other descriptions.
    pub enum ReferenceBlock { P, List, ChronList, ArchRef }
}

narrative_section! {
    /// Conditions governing access.
    AccessRestrict = "accessrestrict";
    Accruals = "accruals";
    /// Immediate source of acquisition.
    AcqInfo = "acqinfo";
    /// Other formats in which the materials are available.
    AltFormAvail = "altformavail";
    Appraisal = "appraisal";
    Arrangement = "arrangement";
    Bibliography = "bibliography" => BibliographyBlock;
    /// Biography or administrative history of the creator.
    BiogHist = "bioghist";
    CustodHist = "custodhist";
    FilePlan = "fileplan";
    LegalStatus = "legalstatus";
    /// Other descriptive data.
    Odd = "odd";
    /// Location of originals, when the described materials are copies.
    OriginalsLoc = "originalsloc";
    OtherFindAid = "otherfindaid" => ReferenceBlock;
    /// Physical characteristics and technical requirements.
    PhysTech = "phystech";
    /// Preferred citation.
    PreferCite = "prefercite";
    ProcessInfo = "processinfo";
    RelatedMaterial = "relatedmaterial" => ReferenceBlock;
    ScopeContent = "scopecontent";
    SeparatedMaterial = "separatedmaterial" => ReferenceBlock;
    /// Conditions governing use.
    UseRestrict = "userestrict";
}

ead_element! {
    /// Reference to another archival description.
    pub struct ArchRef = "archref" {
        attrs {
            id: "id",
            href: "href",
            link_title: "linktitle",
            actuate: "actuate",
            show: "show",
        }
        markup value;
    }
}

ead_element! {
    /// Bibliographic citation.
    pub struct BibRef = "bibref" {
        attrs {
            id: "id",
            href: "href",
            link_title: "linktitle",
            actuate: "actuate",
            show: "show",
        }
        markup value;
    }
}

ead_element! {
    /// Index, kept as an opaque fragment of index entries.
    pub struct Index = "index" {
        attrs {
            id: "id",
            altrender: "altrender",
            audience: "audience",
            encoding_analog: "encodinganalog",
            local_type: "localtype",
        }
        markup value;
    }
}
