//! Record-level metadata: the `<control>` block and everything under it.

use super::common::*;

ead_element! {
    /// Metadata about the finding aid itself, as opposed to the materials it describes.
    pub struct Control = "control" {
        attrs {
            id: "id",
            country_encoding: "countryencoding",
            date_encoding: "dateencoding",
            lang_encoding: "langencoding",
            related_encoding: "relatedencoding",
            repository_encoding: "repositoryencoding",
            script_encoding: "scriptencoding",
        }
        children {
            record_id: RecordId [one],
            other_record_ids: OtherRecordId [many],
            representations: Representation [many],
            file_desc: FileDesc [one],
            maintenance_status: MaintenanceStatus [one],
            publication_status: PublicationStatus [opt],
            maintenance_agency: MaintenanceAgency [one],
            language_declaration: LanguageDeclaration [one],
            convention_declarations: ConventionDeclaration [many],
            rights_declarations: RightsDeclaration [many],
            local_type_declarations: LocalTypeDeclaration [many],
            local_controls: LocalControl [many],
            maintenance_history: MaintenanceHistory [opt],
            sources: Sources [opt],
        }
    }
}

ead_element! {
    pub struct RecordId = "recordid" {
        attrs {
            local_type: "localtype",
            instance_url: "instanceurl",
        }
        text value;
    }
}

ead_element! {
    pub struct OtherRecordId = "otherrecordid" {
        attrs {
            local_type: "localtype",
            instance_url: "instanceurl",
        }
        text value;
    }
}

ead_element! {
    /// Link to another encoding of the same finding aid.
    pub struct Representation = "representation" {
        attrs {
            href: "href",
            local_type: "localtype",
            link_title: "linktitle",
            link_role: "linkrole",
            actuate: "actuate",
            show: "show",
            encoding_analog: "encodinganalog",
        }
        text value;
    }
}

ead_element! {
    pub struct FileDesc = "filedesc" {
        attrs {
            id: "id",
            encoding_analog: "encodinganalog",
        }
        children {
            title_stmt: TitleStmt [opt],
            edition_stmt: EditionStmt [opt],
            publication_stmt: PublicationStmt [opt],
            series_stmt: SeriesStmt [opt],
            note_stmt: NoteStmt [opt],
        }
    }
}

ead_element! {
    pub struct TitleStmt = "titlestmt" {
        attrs {
            id: "id",
            encoding_analog: "encodinganalog",
        }
        children {
            title_propers: TitleProper [many],
            subtitles: Subtitle [many],
            authors: Author [many],
            sponsors: Sponsor [many],
        }
    }
}

ead_element! {
    pub struct TitleProper = "titleproper" {
        attrs {
            id: "id",
            encoding_analog: "encodinganalog",
            local_type: "localtype",
            lang: "lang",
        }
        markup value;
    }
}

ead_element! {
    pub struct Subtitle = "subtitle" {
        attrs {
            id: "id",
            encoding_analog: "encodinganalog",
            local_type: "localtype",
            lang: "lang",
        }
        markup value;
    }
}

ead_element! {
    pub struct Author = "author" {
        attrs {
            id: "id",
            encoding_analog: "encodinganalog",
            local_type: "localtype",
            lang: "lang",
        }
        markup value;
    }
}

ead_element! {
    pub struct Sponsor = "sponsor" {
        attrs {
            id: "id",
            encoding_analog: "encodinganalog",
            local_type: "localtype",
            lang: "lang",
        }
        markup value;
    }
}

ead_element! {
    pub struct EditionStmt = "editionstmt" {
        attrs {
            id: "id",
            encoding_analog: "encodinganalog",
        }
        children {
            editions: Edition [many],
            paragraphs: P [many],
        }
    }
}

ead_element! {
    pub struct Edition = "edition" {
        attrs {
            id: "id",
            encoding_analog: "encodinganalog",
        }
        markup value;
    }
}

ead_element! {
    pub struct PublicationStmt = "publicationstmt" {
        attrs {
            id: "id",
            encoding_analog: "encodinganalog",
        }
        children {
            publishers: Publisher [many],
            dates: Date [many],
            addresses: Address [many],
            nums: Num [many],
            paragraphs: P [many],
        }
    }
}

ead_element! {
    pub struct Publisher = "publisher" {
        attrs {
            id: "id",
            encoding_analog: "encodinganalog",
            local_type: "localtype",
        }
        markup value;
    }
}

ead_element! {
    pub struct SeriesStmt = "seriesstmt" {
        attrs {
            id: "id",
            encoding_analog: "encodinganalog",
        }
        children {
            title_propers: TitleProper [many],
            nums: Num [many],
            paragraphs: P [many],
        }
    }
}

ead_element! {
    pub struct NoteStmt = "notestmt" {
        attrs {
            id: "id",
            encoding_analog: "encodinganalog",
        }
        children { control_notes: ControlNote [many] }
    }
}

ead_element! {
    pub struct ControlNote = "controlnote" {
        attrs {
            id: "id",
            local_type: "localtype",
            encoding_analog: "encodinganalog",
        }
        children { paragraphs: P [many] }
    }
}

ead_element! {
    /// Whether the record is new, revised, deleted, etc. (`value` attribute).
    pub struct MaintenanceStatus = "maintenancestatus" {
        attrs {
            id: "id",
            value: "value",
            encoding_analog: "encodinganalog",
        }
        text text;
    }
}

ead_element! {
    /// Whether the record is in process or approved (`value` attribute).
    pub struct PublicationStatus = "publicationstatus" {
        attrs {
            id: "id",
            value: "value",
            encoding_analog: "encodinganalog",
        }
        text text;
    }
}

ead_element! {
    /// Institution responsible for the record.
    pub struct MaintenanceAgency = "maintenanceagency" {
        attrs {
            id: "id",
            country_code: "countrycode",
            encoding_analog: "encodinganalog",
        }
        children {
            agency_code: AgencyCode [opt],
            other_agency_codes: OtherAgencyCode [many],
            agency_names: AgencyName [many],
            descriptive_note: DescriptiveNote [opt],
        }
    }
}

ead_element! {
    pub struct AgencyCode = "agencycode" {
        attrs {
            id: "id",
            encoding_analog: "encodinganalog",
        }
        text value;
    }
}

ead_element! {
    pub struct OtherAgencyCode = "otheragencycode" {
        attrs {
            id: "id",
            local_type: "localtype",
        }
        text value;
    }
}

ead_element! {
    pub struct AgencyName = "agencyname" {
        attrs {
            id: "id",
            local_type: "localtype",
            lang: "lang",
        }
        markup value;
    }
}

ead_element! {
    /// Language and script the record is written in.
    pub struct LanguageDeclaration = "languagedeclaration" {
        attrs {
            id: "id",
            encoding_analog: "encodinganalog",
        }
        children {
            language: Language [opt],
            script: Script [opt],
            descriptive_note: DescriptiveNote [opt],
        }
    }
}

ead_element! {
    /// Rules or standards used to create the record.
    pub struct ConventionDeclaration = "conventiondeclaration" {
        attrs {
            id: "id",
            local_type: "localtype",
            encoding_analog: "encodinganalog",
        }
        children {
            abbr: Abbr [opt],
            citation: Citation [opt],
            descriptive_note: DescriptiveNote [opt],
        }
    }
}

ead_element! {
    pub struct RightsDeclaration = "rightsdeclaration" {
        attrs {
            id: "id",
            local_type: "localtype",
            encoding_analog: "encodinganalog",
        }
        children {
            abbr: Abbr [opt],
            citation: Citation [opt],
            descriptive_note: DescriptiveNote [opt],
        }
    }
}

ead_element! {
    /// Declares the values used in `localtype` attributes.
    pub struct LocalTypeDeclaration = "localtypedeclaration" {
        attrs {
            id: "id",
            local_type: "localtype",
            encoding_analog: "encodinganalog",
        }
        children {
            abbr: Abbr [opt],
            citation: Citation [opt],
            descriptive_note: DescriptiveNote [opt],
        }
    }
}

ead_element! {
    pub struct LocalControl = "localcontrol" {
        attrs {
            id: "id",
            local_type: "localtype",
        }
        children {
            term: Term [opt],
            date: Date [opt],
            date_range: DateRange [opt],
        }
    }
}

ead_element! {
    pub struct Term = "term" {
        attrs {
            identifier: "identifier",
            lang: "lang",
        }
        markup value;
    }
}

ead_element! {
    pub struct MaintenanceHistory = "maintenancehistory" {
        attrs { id: "id" }
        children { maintenance_events: MaintenanceEvent [many] }
    }
}

ead_element! {
    /// One entry in the maintenance history: what happened, when, and who did it.
    pub struct MaintenanceEvent = "maintenanceevent" {
        attrs { id: "id" }
        children {
            event_type: EventType [opt],
            event_date_time: EventDateTime [opt],
            agent_type: AgentType [opt],
            agent: Agent [opt],
            event_descriptions: EventDescription [many],
        }
    }
}

ead_element! {
    pub struct EventType = "eventtype" {
        attrs { value: "value" }
        text text;
    }
}

ead_element! {
    pub struct EventDateTime = "eventdatetime" {
        attrs { standard_date_time: "standarddatetime" }
        text value;
    }
}

ead_element! {
    pub struct AgentType = "agenttype" {
        attrs { value: "value" }
        text text;
    }
}

ead_element! {
    pub struct Agent = "agent" {
        attrs { id: "id" }
        text value;
    }
}

ead_element! {
    pub struct EventDescription = "eventdescription" {
        attrs { id: "id" }
        markup value;
    }
}

ead_element! {
    pub struct Sources = "sources" {
        attrs { id: "id" }
        children { sources: Source [many] }
    }
}

ead_element! {
    /// A source consulted in creating the record.
    pub struct Source = "source" {
        attrs {
            id: "id",
            href: "href",
            link_title: "linktitle",
            actuate: "actuate",
            show: "show",
            last_date_time_verified: "lastdatetimeverified",
        }
        children {
            source_entries: SourceEntry [many],
            object_xml_wrap: ObjectXmlWrap [opt],
            descriptive_note: DescriptiveNote [opt],
        }
    }
}

ead_element! {
    pub struct SourceEntry = "sourceentry" {
        attrs {
            id: "id",
            transliteration: "transliteration",
        }
        markup value;
    }
}
