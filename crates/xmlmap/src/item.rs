//! Capabilities of types that live inside collections

use std::any::{self, Any, TypeId};
use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::ser::XmlOptions;
use crate::xml::XmlBuilder;

/// A value that writes its own markup instead of going through generic
/// attribute rendering.
pub trait XmlItem: Any + fmt::Debug + Send + Sync {
    /// Write this item into `builder`. `options.root` carries the tag the
    /// generic path would have used; implementations may ignore it.
    fn to_xml(&self, builder: &mut XmlBuilder, options: &XmlOptions);
}

/// An item type that can be rebuilt from the fragment it rendered.
pub trait FromXmlFragment: XmlItem + PartialEq + Sized {
    /// Construct an instance from one element, e.g. `<item>beer</item>`
    fn from_xml_fragment(fragment: &str) -> Result<Self>;
}

type AnyItem = dyn Any + Send + Sync;

/// Shared handle to an item stored in an attribute map
#[derive(Clone)]
pub struct ItemRef {
    render: Arc<dyn XmlItem>,
    any: Arc<AnyItem>,
    eq: fn(&AnyItem, &AnyItem) -> bool,
    type_name: &'static str,
}

impl ItemRef {
    pub fn new<T: XmlItem + PartialEq>(item: T) -> Self {
        let item = Arc::new(item);
        Self {
            render: item.clone(),
            any: item,
            eq: erased_eq::<T>,
            type_name: any::type_name::<T>(),
        }
    }

    pub fn to_xml(&self, builder: &mut XmlBuilder, options: &XmlOptions) {
        self.render.to_xml(builder, options);
    }

    /// Compact markup of this item on its own
    pub fn to_fragment(&self) -> String {
        let mut builder = XmlBuilder::new();
        self.to_xml(&mut builder, &XmlOptions::default().skip_instruct(true));
        builder.into_target()
    }

    pub fn downcast_ref<T: XmlItem>(&self) -> Option<&T> {
        self.any.downcast_ref::<T>()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

fn erased_eq<T: PartialEq + 'static>(left: &AnyItem, right: &AnyItem) -> bool {
    match (left.downcast_ref::<T>(), right.downcast_ref::<T>()) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}

impl PartialEq for ItemRef {
    fn eq(&self, other: &Self) -> bool {
        (self.eq)(self.any.as_ref(), other.any.as_ref())
    }
}

impl fmt::Debug for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.render, f)
    }
}

/// Reconstruction hook a collection declaration carries for its members
#[derive(Clone, Copy)]
pub struct ItemClass {
    type_id: TypeId,
    type_name: &'static str,
    construct: fn(&str) -> Result<ItemRef>,
}

impl ItemClass {
    pub fn of<T: FromXmlFragment>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: short_type_name(any::type_name::<T>()),
            construct: construct_erased::<T>,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Build one member from its fragment
    pub fn construct(&self, fragment: &str) -> Result<ItemRef> {
        (self.construct)(fragment)
    }
}

fn construct_erased<T: FromXmlFragment>(fragment: &str) -> Result<ItemRef> {
    T::from_xml_fragment(fragment).map(ItemRef::new)
}

fn short_type_name(full: &'static str) -> &'static str {
    full.rsplit("::").next().unwrap_or(full)
}

impl PartialEq for ItemClass {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl fmt::Debug for ItemClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ItemClass").field(&self.type_name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};

    #[derive(Debug, PartialEq)]
    struct Tag(String);

    impl XmlItem for Tag {
        fn to_xml(&self, builder: &mut XmlBuilder, _options: &XmlOptions) {
            builder.leaf("tag", &[], &self.0);
        }
    }

    impl FromXmlFragment for Tag {
        fn from_xml_fragment(fragment: &str) -> Result<Self> {
            let doc = crate::xml::parse_document(fragment)?;
            if doc.root.name != "tag" {
                return Err(Error::item_construction("Tag", "expected <tag>"));
            }
            Ok(Self(doc.root.text()))
        }
    }

    #[derive(Debug, PartialEq)]
    struct Other(String);

    impl XmlItem for Other {
        fn to_xml(&self, builder: &mut XmlBuilder, _options: &XmlOptions) {
            builder.leaf("tag", &[], &self.0);
        }
    }

    #[test]
    fn test_item_ref_equality_is_per_type() {
        assert_eq!(ItemRef::new(Tag("a".into())), ItemRef::new(Tag("a".into())));
        assert_ne!(ItemRef::new(Tag("a".into())), ItemRef::new(Tag("b".into())));
        assert_ne!(ItemRef::new(Tag("a".into())), ItemRef::new(Other("a".into())));
    }

    #[test]
    fn test_item_ref_fragment_and_downcast() {
        let item = ItemRef::new(Tag("beer".into()));
        assert_eq!(item.to_fragment(), "<tag>beer</tag>");
        assert_eq!(item.downcast_ref::<Tag>(), Some(&Tag("beer".into())));
        assert!(item.downcast_ref::<Other>().is_none());
    }

    #[test]
    fn test_item_class_constructs_from_fragment() -> Result<()> {
        let class = ItemClass::of::<Tag>();
        assert_eq!(class.type_name(), "Tag");
        assert_eq!(class.construct("<tag>chips</tag>")?, ItemRef::new(Tag("chips".into())));

        let err = class.construct("<nope/>").err();
        assert_eq!(
            err.map(|e| e.kind().clone()),
            Some(ErrorKind::ItemConstruction { item_type: "Tag" })
        );
        Ok(())
    }
}
