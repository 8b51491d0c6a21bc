//! Node types shared across control, description and component levels.

ead_element! {
    /// Paragraph.
    pub struct P = "p" {
        attrs {
            id: "id",
            altrender: "altrender",
            audience: "audience",
            lang: "lang",
            script: "script",
        }
        markup value;
    }
}

ead_element! {
    pub struct Head = "head" {
        attrs {
            id: "id",
            altrender: "altrender",
            audience: "audience",
            local_type: "localtype",
        }
        markup value;
    }
}

ead_element! {
    /// List, kept as an opaque fragment of `<item>`s.
    pub struct List = "list" {
        attrs {
            id: "id",
            list_type: "listtype",
            mark: "mark",
            numeration: "numeration",
        }
        markup value;
    }
}

ead_element! {
    /// Chronology list.
    pub struct ChronList = "chronlist" {
        attrs {
            id: "id",
            altrender: "altrender",
            local_type: "localtype",
        }
        children {
            head: Head [opt],
            chron_items: ChronItem [many],
        }
    }
}

ead_choice! {
    /// Block content: paragraphs, lists and chronologies in document order.
    pub enum Block { P, List, ChronList }
}

ead_element! {
    pub struct ChronItem = "chronitem" {
        attrs {
            id: "id",
            local_type: "localtype",
        }
        children {
            date_single: DateSingle [opt],
            date_range: DateRange [opt],
            date_set: DateSet [opt],
            events: Event [many],
            chron_item_sets: ChronItemSet [many],
        }
    }
}

ead_element! {
    /// Several events sharing one chronology date.
    pub struct ChronItemSet = "chronitemset" {
        attrs { id: "id" }
        children { events: Event [many] }
    }
}

ead_element! {
    pub struct Event = "event" {
        attrs {
            id: "id",
            local_type: "localtype",
        }
        markup value;
    }
}

ead_element! {
    pub struct Date = "date" {
        attrs {
            id: "id",
            normal: "normal",
            standard_date: "standarddate",
            not_after: "notafter",
            not_before: "notbefore",
            certainty: "certainty",
            era: "era",
            calendar: "calendar",
            local_type: "localtype",
            encoding_analog: "encodinganalog",
        }
        markup value;
    }
}

ead_element! {
    pub struct DateSingle = "datesingle" {
        attrs {
            id: "id",
            normal: "normal",
            standard_date: "standarddate",
            not_after: "notafter",
            not_before: "notbefore",
            certainty: "certainty",
            era: "era",
            calendar: "calendar",
            local_type: "localtype",
        }
        markup value;
    }
}

ead_element! {
    /// Structured from/to date pair.
    pub struct DateRange = "daterange" {
        attrs {
            id: "id",
            altrender: "altrender",
            local_type: "localtype",
        }
        children {
            from_date: FromDate [opt],
            to_date: ToDate [opt],
        }
    }
}

ead_element! {
    pub struct FromDate = "fromdate" {
        attrs {
            standard_date: "standarddate",
            not_after: "notafter",
            not_before: "notbefore",
            certainty: "certainty",
            era: "era",
            calendar: "calendar",
        }
        markup value;
    }
}

ead_element! {
    pub struct ToDate = "todate" {
        attrs {
            standard_date: "standarddate",
            not_after: "notafter",
            not_before: "notbefore",
            certainty: "certainty",
            era: "era",
            calendar: "calendar",
        }
        markup value;
    }
}

ead_element! {
    /// Group of single dates and ranges.
    pub struct DateSet = "dateset" {
        attrs { id: "id" }
        children {
            date_singles: DateSingle [many],
            date_ranges: DateRange [many],
        }
    }
}

ead_element! {
    pub struct DescriptiveNote = "descriptivenote" {
        attrs {
            id: "id",
            altrender: "altrender",
        }
        children { paragraphs: P [many] }
    }
}

ead_element! {
    /// One component of an access term, e.g. surname or dates.
    pub struct Part = "part" {
        attrs {
            local_type: "localtype",
            identifier: "identifier",
            normal: "normal",
            lang: "lang",
        }
        markup value;
    }
}

access_term! {
    PersName = "persname";
    FamName = "famname";
    CorpName = "corpname";
    /// Name not identified as a person, family or corporate body.
    Name = "name";
    Subject = "subject";
    GenreForm = "genreform";
    GeogName = "geogname";
    Occupation = "occupation";
    Function = "function";
    Title = "title";
}

ead_element! {
    pub struct Language = "language" {
        attrs {
            id: "id",
            lang_code: "langcode",
            script_code: "scriptcode",
            encoding_analog: "encodinganalog",
        }
        text value;
    }
}

ead_element! {
    pub struct Script = "script" {
        attrs {
            id: "id",
            script_code: "scriptcode",
        }
        text value;
    }
}

ead_element! {
    /// Languages written in a common set of scripts.
    pub struct LanguageSet = "languageset" {
        attrs { id: "id" }
        children {
            languages: Language [many],
            scripts: Script [many],
            descriptive_note: DescriptiveNote [opt],
        }
    }
}

ead_element! {
    pub struct Citation = "citation" {
        attrs {
            id: "id",
            href: "href",
            link_title: "linktitle",
            link_role: "linkrole",
            actuate: "actuate",
            show: "show",
            last_date_time_verified: "lastdatetimeverified",
        }
        markup value;
    }
}

ead_element! {
    pub struct Abbr = "abbr" {
        attrs {
            expan: "expan",
            lang: "lang",
        }
        text value;
    }
}

ead_element! {
    /// Wrapper for XML from another namespace.
    pub struct ObjectXmlWrap = "objectxmlwrap" {
        attrs {
            id: "id",
            local_type: "localtype",
        }
        markup value;
    }
}

ead_element! {
    pub struct Address = "address" {
        attrs { id: "id" }
        children { address_lines: AddressLine [many] }
    }
}

ead_element! {
    pub struct AddressLine = "addressline" {
        attrs { local_type: "localtype" }
        markup value;
    }
}

ead_element! {
    pub struct Num = "num" {
        attrs {
            id: "id",
            local_type: "localtype",
            encoding_analog: "encodinganalog",
        }
        markup value;
    }
}
