//! Descriptive identification: the `<did>` block and its leaves.

use super::common::*;

ead_element! {
    /// Core identification of the materials at one level of description.
    pub struct Did = "did" {
        attrs {
            id: "id",
            altrender: "altrender",
            audience: "audience",
            encoding_analog: "encodinganalog",
        }
        children {
            head: Head [opt],
            repositories: Repository [many],
            originations: Origination [many],
            unit_titles: UnitTitle [many],
            unit_dates_structured: UnitDateStructured [many],
            unit_dates: UnitDate [many],
            phys_descs: PhysDesc [many],
            phys_desc_sets: PhysDescSet [many],
            phys_descs_structured: PhysDescStructured [many],
            unit_ids: UnitId [many],
            abstracts: Abstract [many],
            did_notes: DidNote [many],
            material_specs: MaterialSpec [many],
            lang_materials: LangMaterial [many],
            phys_locs: PhysLoc [many],
            containers: Container [many],
            daos: Dao [many],
        }
    }
}

ead_element! {
    /// Institution holding the materials.
    pub struct Repository = "repository" {
        attrs {
            id: "id",
            label: "label",
            encoding_analog: "encodinganalog",
            local_type: "localtype",
        }
        children {
            pers_names: PersName [many],
            fam_names: FamName [many],
            corp_names: CorpName [many],
            names: Name [many],
        }
    }
}

ead_element! {
    /// Creator or collector of the materials.
    pub struct Origination = "origination" {
        attrs {
            id: "id",
            label: "label",
            encoding_analog: "encodinganalog",
            local_type: "localtype",
        }
        children {
            pers_names: PersName [many],
            fam_names: FamName [many],
            corp_names: CorpName [many],
            names: Name [many],
        }
    }
}

ead_element! {
    pub struct UnitTitle = "unittitle" {
        attrs {
            id: "id",
            label: "label",
            encoding_analog: "encodinganalog",
            local_type: "localtype",
            lang: "lang",
        }
        markup value;
    }
}

ead_element! {
    pub struct UnitDate = "unitdate" {
        attrs {
            id: "id",
            label: "label",
            normal: "normal",
            certainty: "certainty",
            unit_date_type: "unitdatetype",
            era: "era",
            calendar: "calendar",
            encoding_analog: "encodinganalog",
        }
        markup value;
    }
}

ead_element! {
    pub struct UnitDateStructured = "unitdatestructured" {
        attrs {
            id: "id",
            label: "label",
            certainty: "certainty",
            unit_date_type: "unitdatetype",
            encoding_analog: "encodinganalog",
            altrender: "altrender",
        }
        children {
            date_single: DateSingle [opt],
            date_range: DateRange [opt],
            date_set: DateSet [opt],
        }
    }
}

ead_element! {
    pub struct PhysDesc = "physdesc" {
        attrs {
            id: "id",
            label: "label",
            encoding_analog: "encodinganalog",
            local_type: "localtype",
        }
        markup value;
    }
}

ead_element! {
    pub struct PhysDescSet = "physdescset" {
        attrs {
            id: "id",
            label: "label",
            parallel: "parallel",
            coverage: "coverage",
            encoding_analog: "encodinganalog",
        }
        children { phys_descs_structured: PhysDescStructured [many] }
    }
}

ead_element! {
    /// Extent as quantity and unit, with optional facets and dimensions.
    pub struct PhysDescStructured = "physdescstructured" {
        attrs {
            id: "id",
            label: "label",
            phys_desc_structured_type: "physdescstructuredtype",
            other_phys_desc_structured_type: "otherphysdescstructuredtype",
            coverage: "coverage",
            encoding_analog: "encodinganalog",
        }
        children {
            quantity: Quantity [opt],
            unit_type: UnitType [opt],
            phys_facets: PhysFacet [many],
            dimensions: Dimensions [many],
            descriptive_note: DescriptiveNote [opt],
        }
    }
}

ead_element! {
    pub struct Quantity = "quantity" {
        attrs { approximate: "approximate" }
        text value;
    }
}

ead_element! {
    pub struct UnitType = "unittype" {
        attrs {
            source: "source",
            identifier: "identifier",
        }
        markup value;
    }
}

ead_element! {
    pub struct PhysFacet = "physfacet" {
        attrs {
            id: "id",
            local_type: "localtype",
        }
        markup value;
    }
}

ead_element! {
    pub struct Dimensions = "dimensions" {
        attrs {
            id: "id",
            local_type: "localtype",
            unit: "unit",
        }
        markup value;
    }
}

ead_element! {
    /// Identifier of the unit, such as a call number.
    pub struct UnitId = "unitid" {
        attrs {
            id: "id",
            label: "label",
            encoding_analog: "encodinganalog",
            country_code: "countrycode",
            repository_code: "repositorycode",
            local_type: "localtype",
            identifier: "identifier",
        }
        markup value;
    }
}

ead_element! {
    pub struct Abstract = "abstract" {
        attrs {
            id: "id",
            label: "label",
            encoding_analog: "encodinganalog",
            local_type: "localtype",
        }
        markup value;
    }
}

ead_element! {
    pub struct DidNote = "didnote" {
        attrs {
            id: "id",
            label: "label",
            local_type: "localtype",
            encoding_analog: "encodinganalog",
        }
        markup value;
    }
}

ead_element! {
    /// Format-specific details, e.g. map scale.
    pub struct MaterialSpec = "materialspec" {
        attrs {
            id: "id",
            label: "label",
            local_type: "localtype",
            encoding_analog: "encodinganalog",
        }
        markup value;
    }
}

ead_element! {
    /// Languages of the described materials.
    pub struct LangMaterial = "langmaterial" {
        attrs {
            id: "id",
            label: "label",
            altrender: "altrender",
            encoding_analog: "encodinganalog",
        }
        children {
            languages: Language [many],
            language_sets: LanguageSet [many],
            descriptive_note: DescriptiveNote [opt],
        }
    }
}

ead_element! {
    pub struct PhysLoc = "physloc" {
        attrs {
            id: "id",
            label: "label",
            local_type: "localtype",
            encoding_analog: "encodinganalog",
        }
        markup value;
    }
}

ead_element! {
    /// Box, folder or other physical container.
    pub struct Container = "container" {
        attrs {
            id: "id",
            local_type: "localtype",
            label: "label",
            parent: "parent",
            container_id: "containerid",
            encoding_analog: "encodinganalog",
        }
        markup value;
    }
}

ead_element! {
    /// Digital archival object.
    pub struct Dao = "dao" {
        attrs {
            id: "id",
            href: "href",
            dao_type: "daotype",
            other_dao_type: "otherdaotype",
            link_title: "linktitle",
            link_role: "linkrole",
            show: "show",
            actuate: "actuate",
            local_type: "localtype",
            coverage: "coverage",
            identifier: "identifier",
        }
        children { descriptive_note: DescriptiveNote [opt] }
    }
}
