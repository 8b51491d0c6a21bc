//! Controlled access terms and relations to other entities.

use super::common::*;

ead_element! {
    /// Controlled access headings, optionally grouped into nested blocks.
    pub struct ControlAccess = "controlaccess" {
        attrs {
            id: "id",
            altrender: "altrender",
            audience: "audience",
            encoding_analog: "encodinganalog",
            local_type: "localtype",
        }
        children {
            head: Head [opt],
            blocks: Block [choice],
            entries: AccessEntry [choice],
        }
    }
}

ead_choice! {
    /// A heading, or a nested group of headings.
    pub enum AccessEntry {
        PersName,
        FamName,
        CorpName,
        Name,
        Subject,
        GenreForm,
        GeogName,
        Occupation,
        Function,
        Title,
        ControlAccess,
    }
}

impl ControlAccess {
    /// Total number of headings in this block and every nested block.
    pub fn heading_count(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| match entry {
                AccessEntry::ControlAccess(nested) => nested.heading_count(),
                _ => 1,
            })
            .sum()
    }

    /// Headings of this block, nested blocks excluded, in document order.
    pub fn headings(&self) -> impl Iterator<Item = &AccessEntry> {
        self.entries
            .iter()
            .filter(|entry| !matches!(entry, AccessEntry::ControlAccess(_)))
    }

    /// Nested heading groups, in document order.
    pub fn nested(&self) -> impl Iterator<Item = &ControlAccess> {
        self.entries.iter().filter_map(|entry| match entry {
            AccessEntry::ControlAccess(nested) => Some(nested),
            _ => None,
        })
    }
}

ead_element! {
    pub struct Relations = "relations" {
        attrs { id: "id" }
        children { relations: Relation [many] }
    }
}

ead_element! {
    /// Relation to a person, family, corporate body, function or resource.
    pub struct Relation = "relation" {
        attrs {
            id: "id",
            relation_type: "relationtype",
            other_relation_type: "otherrelationtype",
            href: "href",
            link_title: "linktitle",
            link_role: "linkrole",
            arc_role: "arcrole",
            actuate: "actuate",
            show: "show",
            last_date_time_verified: "lastdatetimeverified",
            encoding_analog: "encodinganalog",
        }
        children {
            relation_entries: RelationEntry [many],
            object_xml_wrap: ObjectXmlWrap [opt],
            date: Date [opt],
            date_range: DateRange [opt],
            date_set: DateSet [opt],
            geog_name: GeogName [opt],
            descriptive_note: DescriptiveNote [opt],
        }
    }
}

ead_element! {
    pub struct RelationEntry = "relationentry" {
        attrs {
            id: "id",
            local_type: "localtype",
            transliteration: "transliteration",
        }
        markup value;
    }
}
