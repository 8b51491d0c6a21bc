//! Description of subordinate components.
//!
//! Components come in two conventions that may be mixed within one `<dsc>`:
//! the generic `<c>`, which nests to any depth, and the numbered chain
//! `<c01>` → `<c02>` → `<c03>` → `<c04>`.

use super::access::{ControlAccess, Relations};
use super::archdesc::*;
use super::common::*;
use super::did::{Container, Did, DidNote};

ead_element! {
    pub struct Dsc = "dsc" {
        attrs {
            id: "id",
            dsc_type: "dsctype",
            other_dsc_type: "otherdsctype",
            altrender: "altrender",
            audience: "audience",
            encoding_analog: "encodinganalog",
        }
        children {
            head: Head [opt],
            paragraphs: P [many],
            components: C [many],
            numbered: C01 [many],
        }
    }
}

component! {
    /// Generic component; nests to any depth.
    C = "c" => C;
    /// First level of the numbered component chain.
    C01 = "c01" => C02;
    C02 = "c02" => C03;
    C03 = "c03" => C04;
    /// Last level of the numbered component chain.
    C04 = "c04";
}

impl Dsc {
    /// Number of components at every depth, both conventions combined.
    pub fn component_count(&self) -> usize {
        self.components.iter().map(C::component_count).sum::<usize>()
            + self.numbered.iter().map(C01::component_count).sum::<usize>()
    }
}

impl C {
    /// This component plus every descendant.
    pub fn component_count(&self) -> usize {
        1 + self.components.iter().map(C::component_count).sum::<usize>()
    }

    /// Depth of the deepest branch, counting this component as 1.
    pub fn depth(&self) -> usize {
        1 + self.components.iter().map(C::depth).max().unwrap_or(0)
    }
}

impl C01 {
    pub fn component_count(&self) -> usize {
        1 + self.components.iter().map(C02::component_count).sum::<usize>()
    }
}

impl C02 {
    pub fn component_count(&self) -> usize {
        1 + self.components.iter().map(C03::component_count).sum::<usize>()
    }
}

impl C03 {
    pub fn component_count(&self) -> usize {
        1 + self.components.len()
    }
}
