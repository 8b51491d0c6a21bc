//! Declaration macros for EAD3 node types.
//!
//! A node type is declared once, as a table of attributes and either a text
//! slot, a markup slot, or child slots with cardinality:
//!
//! ```ignore
//! ead_element! {
//!     pub struct Container = "container" {
//!         attrs { id: "id", local_type: "localtype" }
//!         text value;
//!     }
//! }
//!
//! ead_element! {
//!     pub struct DateRange = "daterange" {
//!         attrs { id: "id" }
//!         children { from_date: FromDate [opt], to_date: ToDate [opt] }
//!     }
//! }
//! ```
//!
//! Each declaration expands to the struct, its [`EadElement`] impl (decode
//! through a tag → handler table, encode in declaration order) and its
//! [`ElementSchema`]. Cardinalities are `one` (required), `opt`, `many`
//! and `some` (one or more). A `choice` slot holds a list of an
//! [`ead_choice!`] enum, so interleaved alternatives keep document order:
//!
//! ```ignore
//! ead_choice! {
//!     pub enum Block { P, List, ChronList }
//! }
//!
//! ead_element! {
//!     pub struct ScopeContent = "scopecontent" {
//!         children { head: Head [opt], blocks: Block [choice] }
//!     }
//! }
//! ```
//!
//! [`EadElement`]: crate::codec::EadElement
//! [`ElementSchema`]: crate::schema::ElementSchema

macro_rules! ead_element {
    (@struct $(#[$meta:meta])* $name:ident $tag:literal [$($attr:ident)*] { $($fields:tt)* }) => {
        #[doc = concat!("The `<", $tag, ">` element.")]
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        #[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize), serde(default))]
        pub struct $name {
            $(
                #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
                pub $attr: Option<String>,
            )*
            $($fields)*
        }
    };

    (@field_ty one $ty:ident) => { Option<$ty> };
    (@field_ty opt $ty:ident) => { Option<$ty> };
    (@field_ty many $ty:ident) => { Vec<$ty> };
    (@field_ty some $ty:ident) => { Vec<$ty> };
    (@field_ty choice $ty:ident) => { Vec<$ty> };

    (@tags choice $ty:ident) => { <$ty as $crate::codec::EadChoice>::TAGS };
    (@tags $card:ident $ty:ident) => { &[<$ty as $crate::codec::EadElement>::TAG] };

    (@cardinality one) => { $crate::schema::Cardinality::One };
    (@cardinality opt) => { $crate::schema::Cardinality::Optional };
    (@cardinality many) => { $crate::schema::Cardinality::ZeroOrMore };
    (@cardinality some) => { $crate::schema::Cardinality::OneOrMore };
    (@cardinality choice) => { $crate::schema::Cardinality::ZeroOrMore };

    (@decode_attrs $node:ident $cursor:ident $start:ident [$($attr:ident $attr_name:literal)*]) => {
        for (key, value) in $start.take_attributes() {
            match key.as_str() {
                $($attr_name => $node.$attr = Some(value),)*
                _ => $cursor.unknown_attribute(Self::TAG, &key, &value),
            }
        }
    };

    (@encode_start $node:ident $tag:literal [$($attr:ident $attr_name:literal)*]) => {{
        #[allow(unused_mut)]
        let mut start = quick_xml::events::BytesStart::new($tag);
        $(
            if let Some(value) = &$node.$attr {
                start.push_attribute(($attr_name, value.as_str()));
            }
        )*
        start
    }};

    (@decode_child one $node:ident $field:ident $cursor:ident $start:ident $ty:ident) => {
        ead_element!(@decode_child opt $node $field $cursor $start $ty)
    };
    (@decode_child opt $node:ident $field:ident $cursor:ident $start:ident $ty:ident) => {{
        if $node.$field.is_some() {
            $cursor.repeated_element(Self::TAG, <$ty as $crate::codec::EadElement>::TAG);
        }
        $node.$field = Some(<$ty as $crate::codec::EadElement>::decode($cursor, $start)?);
        Ok(())
    }};
    (@decode_child choice $node:ident $field:ident $cursor:ident $start:ident $ty:ident) => {{
        $node.$field.push(<$ty as $crate::codec::EadChoice>::decode($cursor, $start)?);
        Ok(())
    }};
    (@decode_child $card:ident $node:ident $field:ident $cursor:ident $start:ident $ty:ident) => {{
        $node.$field.push(<$ty as $crate::codec::EadElement>::decode($cursor, $start)?);
        Ok(())
    }};

    (@check_required one $node:ident $field:ident $ty:ident) => {
        if $node.$field.is_none() {
            return Err($crate::Ead3Error::missing_child(
                Self::TAG,
                <$ty as $crate::codec::EadElement>::TAG,
            ));
        }
    };
    (@check_required some $node:ident $field:ident $ty:ident) => {
        if $node.$field.is_empty() {
            return Err($crate::Ead3Error::missing_child(
                Self::TAG,
                <$ty as $crate::codec::EadElement>::TAG,
            ));
        }
    };
    (@check_required $card:ident $node:ident $field:ident $ty:ident) => {};

    (@encode_child one $node:ident $field:ident $writer:ident $ty:ident) => {
        match &$node.$field {
            Some(child) => $crate::codec::EadElement::encode(child, $writer)?,
            None => {
                return Err($crate::Ead3Error::unset_child(
                    Self::TAG,
                    <$ty as $crate::codec::EadElement>::TAG,
                ));
            }
        }
    };
    (@encode_child opt $node:ident $field:ident $writer:ident $ty:ident) => {
        if let Some(child) = &$node.$field {
            $crate::codec::EadElement::encode(child, $writer)?;
        }
    };
    (@encode_child some $node:ident $field:ident $writer:ident $ty:ident) => {
        if $node.$field.is_empty() {
            return Err($crate::Ead3Error::unset_child(
                Self::TAG,
                <$ty as $crate::codec::EadElement>::TAG,
            ));
        }
        ead_element!(@encode_child many $node $field $writer $ty);
    };
    (@encode_child many $node:ident $field:ident $writer:ident $ty:ident) => {
        for child in &$node.$field {
            $crate::codec::EadElement::encode(child, $writer)?;
        }
    };
    (@encode_child choice $node:ident $field:ident $writer:ident $ty:ident) => {
        for child in &$node.$field {
            $crate::codec::EadChoice::encode(child, $writer)?;
        }
    };

    // Attribute leaf: attributes plus character data.
    (
        $(#[$meta:meta])*
        pub struct $name:ident = $tag:literal {
            $(attrs { $($attr:ident : $attr_name:literal),* $(,)? })?
            text $field:ident;
        }
    ) => {
        ead_element!(@struct $(#[$meta])* $name $tag [$($($attr)*)?] {
            #[cfg_attr(feature = "json", serde(skip_serializing_if = "String::is_empty"))]
            pub $field: String,
        });

        impl $crate::codec::EadElement for $name {
            const TAG: &'static str = $tag;
            const SCHEMA: $crate::schema::ElementSchema = $crate::schema::ElementSchema {
                tag: $tag,
                attributes: &[$($($attr_name),*)?],
                children: &[],
                content: $crate::schema::ContentKind::Text,
            };

            fn decode(
                cursor: &mut $crate::codec::XmlCursor<'_>,
                mut start: $crate::codec::ElementStart,
            ) -> Result<Self, $crate::Ead3Error> {
                let mut node = Self::default();
                ead_element!(@decode_attrs node cursor start [$($($attr $attr_name)*)?]);
                node.$field = cursor.read_text(&start)?;
                Ok(node)
            }

            fn encode<W: std::io::Write>(
                &self,
                writer: &mut $crate::codec::XmlWriter<W>,
            ) -> Result<(), $crate::Ead3Error> {
                let node = self;
                let start = ead_element!(@encode_start node $tag [$($($attr $attr_name)*)?]);
                writer.text_element(start, &node.$field)
            }
        }
    };

    // Free-text leaf: attributes plus an opaque markup fragment.
    (
        $(#[$meta:meta])*
        pub struct $name:ident = $tag:literal {
            $(attrs { $($attr:ident : $attr_name:literal),* $(,)? })?
            markup $field:ident;
        }
    ) => {
        ead_element!(@struct $(#[$meta])* $name $tag [$($($attr)*)?] {
            #[cfg_attr(feature = "json", serde(skip_serializing_if = "crate::model::Markup::is_empty"))]
            pub $field: $crate::model::Markup,
        });

        impl $crate::codec::EadElement for $name {
            const TAG: &'static str = $tag;
            const SCHEMA: $crate::schema::ElementSchema = $crate::schema::ElementSchema {
                tag: $tag,
                attributes: &[$($($attr_name),*)?],
                children: &[],
                content: $crate::schema::ContentKind::Markup,
            };

            fn decode(
                cursor: &mut $crate::codec::XmlCursor<'_>,
                mut start: $crate::codec::ElementStart,
            ) -> Result<Self, $crate::Ead3Error> {
                let mut node = Self::default();
                ead_element!(@decode_attrs node cursor start [$($($attr $attr_name)*)?]);
                node.$field = cursor.read_markup(&start)?;
                Ok(node)
            }

            fn encode<W: std::io::Write>(
                &self,
                writer: &mut $crate::codec::XmlWriter<W>,
            ) -> Result<(), $crate::Ead3Error> {
                let node = self;
                let start = ead_element!(@encode_start node $tag [$($($attr $attr_name)*)?]);
                writer.markup_element(start, &node.$field)
            }
        }
    };

    // Structural container: attributes plus child slots in schema order.
    (
        $(#[$meta:meta])*
        pub struct $name:ident = $tag:literal {
            $(attrs { $($attr:ident : $attr_name:literal),* $(,)? })?
            children { $($child:ident : $child_ty:ident [$card:ident]),* $(,)? }
        }
    ) => {
        ead_element!(@struct $(#[$meta])* $name $tag [$($($attr)*)?] {
            $(
                #[cfg_attr(feature = "json", serde(skip_serializing_if = "crate::model::Absent::is_absent"))]
                pub $child: ead_element!(@field_ty $card $child_ty),
            )*
        });

        impl $crate::codec::EadElement for $name {
            const TAG: &'static str = $tag;
            const SCHEMA: $crate::schema::ElementSchema = $crate::schema::ElementSchema {
                tag: $tag,
                attributes: &[$($($attr_name),*)?],
                children: &[$(
                    $crate::schema::ChildSchema {
                        tags: ead_element!(@tags $card $child_ty),
                        cardinality: ead_element!(@cardinality $card),
                    },
                )*],
                content: $crate::schema::ContentKind::Elements,
            };

            fn decode(
                cursor: &mut $crate::codec::XmlCursor<'_>,
                mut start: $crate::codec::ElementStart,
            ) -> Result<Self, $crate::Ead3Error> {
                let mut node = Self::default();
                ead_element!(@decode_attrs node cursor start [$($($attr $attr_name)*)?]);
                if !start.is_empty() {
                    let handlers: &[$crate::codec::ChildHandler<Self>] = &[$(
                        $crate::codec::handler::<Self>(|node, cursor, start| {
                            ead_element!(@decode_child $card node $child cursor start $child_ty)
                        }),
                    )*];
                    cursor.read_children(&mut node, Self::TAG, Self::SCHEMA.children, handlers)?;
                }
                $(ead_element!(@check_required $card node $child $child_ty);)*
                Ok(node)
            }

            fn encode<W: std::io::Write>(
                &self,
                writer: &mut $crate::codec::XmlWriter<W>,
            ) -> Result<(), $crate::Ead3Error> {
                let node = self;
                let start = ead_element!(@encode_start node $tag [$($($attr $attr_name)*)?]);
                writer.start_element(start)?;
                $(ead_element!(@encode_child $card node $child writer $child_ty);)*
                writer.end_element($tag)
            }
        }
    };
}

/// Ordered choice between element types. Each variant is named after, and
/// holds, the node type it wraps.
macro_rules! ead_choice {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        #[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $($variant($variant),)+
        }

        impl $name {
            /// Tag of the element held.
            pub fn tag(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => <$variant as $crate::codec::EadElement>::TAG,)+
                }
            }
        }

        $(
            impl From<$variant> for $name {
                fn from(node: $variant) -> Self {
                    Self::$variant(node)
                }
            }
        )+

        impl $crate::codec::EadChoice for $name {
            const TAGS: &'static [&'static str] =
                &[$(<$variant as $crate::codec::EadElement>::TAG),+];

            fn decode(
                cursor: &mut $crate::codec::XmlCursor<'_>,
                start: $crate::codec::ElementStart,
            ) -> Result<Self, $crate::Ead3Error> {
                $(
                    if start.name() == <$variant as $crate::codec::EadElement>::TAG {
                        return <$variant as $crate::codec::EadElement>::decode(cursor, start)
                            .map(Self::$variant);
                    }
                )+
                Err($crate::Ead3Error::malformed(
                    cursor.position(),
                    format!("<{}> is not one of {:?}", start.name(), Self::TAGS),
                ))
            }

            fn encode<W: std::io::Write>(
                &self,
                writer: &mut $crate::codec::XmlWriter<W>,
            ) -> Result<(), $crate::Ead3Error> {
                match self {
                    $(Self::$variant(node) => $crate::codec::EadElement::encode(node, writer),)+
                }
            }
        }
    };
}

/// Controlled access term: persons, families, subjects, places, and so on.
/// Every term is a sequence of `<part>` children under the same attribute set.
macro_rules! access_term {
    ($($(#[$meta:meta])* $name:ident = $tag:literal;)*) => {
        $(
            ead_element! {
                $(#[$meta])*
                pub struct $name = $tag {
                    attrs {
                        id: "id",
                        local_type: "localtype",
                        source: "source",
                        rules: "rules",
                        identifier: "identifier",
                        normal: "normal",
                        relator: "relator",
                        encoding_analog: "encodinganalog",
                        audience: "audience",
                    }
                    children { parts: Part [many] }
                }
            }
        )*
    };
}

/// Narrative section: a head, block content in document order, and nested
/// sections of the same kind. Block content defaults to [`Block`]; a section
/// that also admits references names its own choice type.
macro_rules! narrative_section {
    ($(
        $(#[$meta:meta])*
        $name:ident = $tag:literal $(=> $blocks:ident)?;
    )*) => {
        $(narrative_section!(@section $(#[$meta])* $name $tag [$($blocks)?]);)*
    };

    (@section $(#[$meta:meta])* $name:ident $tag:literal []) => {
        narrative_section!(@section $(#[$meta])* $name $tag [Block]);
    };
    (@section $(#[$meta:meta])* $name:ident $tag:literal [$blocks:ident]) => {
        ead_element! {
            $(#[$meta])*
            pub struct $name = $tag {
                attrs {
                    id: "id",
                    altrender: "altrender",
                    audience: "audience",
                    encoding_analog: "encodinganalog",
                    local_type: "localtype",
                }
                children {
                    head: Head [opt],
                    blocks: $blocks [choice],
                    sections: $name [many],
                }
            }
        }
    };
}

/// Description of a component level. Every level carries the same
/// description slots; all but the last numbered level add a sub-level.
macro_rules! component {
    ($(
        $(#[$meta:meta])*
        $name:ident = $tag:literal $(=> $sub_ty:ident)?;
    )*) => {
        $(
            ead_element! {
                $(#[$meta])*
                pub struct $name = $tag {
                    attrs {
                        id: "id",
                        level: "level",
                        other_level: "otherlevel",
                        altrender: "altrender",
                        audience: "audience",
                        encoding_analog: "encodinganalog",
                    }
                    children {
                        head: Head [opt],
                        did: Did [opt],
                        did_notes: DidNote [many],
                        containers: Container [many],
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
                        $(components: $sub_ty [many],)?
                    }
                }
            }
        )*
    };
}
