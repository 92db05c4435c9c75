#![allow(clippy::panic_in_result_fn)]

use std::sync::OnceLock;

use xmlmap::{
    AttributeMap, CollectionOptions, Error, ErrorKind, FromXmlFragment, ItemRef, Model,
    Representation, Result, Value, XmlBuilder, XmlItem, XmlOptions,
};

/// Collection member that renders itself as `<item>text</item>`
#[derive(Debug, Clone, PartialEq)]
struct Item(String);

impl XmlItem for Item {
    fn to_xml(&self, builder: &mut XmlBuilder, _options: &XmlOptions) {
        builder.leaf("item", &[], &self.0);
    }
}

impl FromXmlFragment for Item {
    fn from_xml_fragment(fragment: &str) -> Result<Self> {
        let document = xmlmap::from_xml_str(fragment)?;
        if document.root.name != "item" {
            return Err(Error::item_construction(
                "Item",
                format!("expected <item>, found <{}>", document.root.name),
            ));
        }
        Ok(Self(document.root.text()))
    }
}

#[derive(Debug)]
struct Basket {
    attributes: AttributeMap,
}

impl Model for Basket {
    fn representation() -> &'static Representation {
        static REPRESENTATION: OnceLock<Representation> = OnceLock::new();
        REPRESENTATION
            .get_or_init(|| Representation::new("test").collection("items", CollectionOptions::new()))
    }

    fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    fn from_attributes(attributes: AttributeMap) -> Self {
        Self { attributes }
    }
}

#[derive(Debug)]
struct TypedBasket {
    attributes: AttributeMap,
}

impl Model for TypedBasket {
    fn representation() -> &'static Representation {
        static REPRESENTATION: OnceLock<Representation> = OnceLock::new();
        REPRESENTATION.get_or_init(|| {
            Representation::new("test")
                .collection("items", CollectionOptions::new().item_class::<Item>())
        })
    }

    fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    fn from_attributes(attributes: AttributeMap) -> Self {
        Self { attributes }
    }
}

fn strings(values: &[&str]) -> Value {
    Value::from(values.iter().map(|v| Value::from(*v)).collect::<Vec<_>>())
}

#[test]
fn test_declaration_is_recorded() {
    let repr = Representation::new("test");
    assert!(repr.collections().is_empty());

    let plain = repr.inherit().collection("items", CollectionOptions::new());
    assert_eq!(plain.collection_options("items"), Some(&CollectionOptions::new()));

    let typed = repr
        .inherit()
        .collection("items", CollectionOptions::new().item_class::<Item>());
    let class = typed.collection_options("items").and_then(CollectionOptions::class);
    assert_eq!(class.map(|c| c.type_name()), Some("Item"));
}

#[test]
fn test_to_xml_does_not_wrap_collection() {
    let basket = Basket::from_attributes(
        AttributeMap::new()
            .with("name", "tucker")
            .with("items", vec![Value::from(AttributeMap::new()), Value::from(AttributeMap::new())]),
    );
    assert_eq!(
        basket.to_xml(),
        "<test>\n  <name>tucker</name>\n  <item>\n  </item>\n  <item>\n  </item>\n</test>\n"
    );
}

#[test]
fn test_from_xml_collects_many_members() -> Result<()> {
    let basket = Basket::from_xml(
        "<test>\n  <name>tucker</name>\n  <item>Beer</item>\n  <item>Peanut Butter</item>\n  </test>",
    )?;
    let expected = AttributeMap::new()
        .with("name", "tucker")
        .with("items", strings(&["Beer", "Peanut Butter"]));
    assert_eq!(basket.attributes(), &expected);
    Ok(())
}

#[test]
fn test_from_xml_collects_single_member_as_list() -> Result<()> {
    let basket = Basket::from_xml("<test>\n    <name>tucker</name>\n    <item>Beer</item>\n  </test>")?;
    let expected = AttributeMap::new()
        .with("name", "tucker")
        .with("items", strings(&["Beer"]));
    assert_eq!(basket.attributes(), &expected);
    Ok(())
}

#[test]
fn test_from_xml_without_members_gives_empty_list() -> Result<()> {
    let basket = Basket::from_xml("<test><name>tucker</name></test>")?;
    assert_eq!(basket.attributes().get("items"), Some(&strings(&[])));
    Ok(())
}

#[test]
fn test_collection_round_trip() -> Result<()> {
    let original = Basket::from_attributes(
        AttributeMap::new()
            .with("name", "tucker")
            .with("items", strings(&["Beer", "Chips"])),
    );
    let parsed = Basket::from_xml(&original.to_xml())?;
    assert_eq!(parsed.attributes(), original.attributes());
    Ok(())
}

#[test]
fn test_blank_members_round_trip() -> Result<()> {
    let original =
        Basket::from_attributes(AttributeMap::new().with("items", strings(&["", "  ", "x"])));
    let parsed = Basket::from_xml(&original.to_xml())?;
    assert_eq!(parsed.attributes(), original.attributes());
    Ok(())
}

#[test]
fn test_item_class_builds_members() -> Result<()> {
    let basket = TypedBasket::from_xml(
        "<test>\n  <name>tucker</name>\n  <item>beer</item>\n  <item>chips</item>\n</test>",
    )?;
    let expected = Value::from(vec![
        Value::from(ItemRef::new(Item("beer".into()))),
        Value::from(ItemRef::new(Item("chips".into()))),
    ]);
    assert_eq!(basket.attributes().get("items"), Some(&expected));

    let first = basket
        .attributes()
        .get("items")
        .and_then(Value::as_array)
        .and_then(|items| items.iter().next())
        .and_then(Value::as_item)
        .and_then(ItemRef::downcast_ref::<Item>);
    assert_eq!(first, Some(&Item("beer".into())));
    Ok(())
}

#[test]
fn test_item_class_members_render_themselves() -> Result<()> {
    let basket = TypedBasket::from_attributes(AttributeMap::new().with(
        "items",
        vec![
            Value::from(ItemRef::new(Item("beer".into()))),
            Value::from(ItemRef::new(Item("chips".into()))),
        ],
    ));
    let xml = basket.to_xml_with_options(&XmlOptions::default().skip_instruct(true).indent(0));
    assert_eq!(xml, "<test><item>beer</item><item>chips</item></test>");
    assert_eq!(TypedBasket::from_xml(&xml)?.attributes(), basket.attributes());
    Ok(())
}

#[test]
fn test_item_class_rejects_scalar_member() {
    let err = TypedBasket::from_xml("<test><items>beer</items></test>").err();
    assert_eq!(
        err.map(|e| e.kind().clone()),
        Some(ErrorKind::UnknownCollectionItemType {
            collection: "items".to_string(),
            item_type: "Item",
        })
    );
}

#[test]
fn test_item_construction_failure_propagates() {
    let repr = Representation::new("test").collection(
        "items",
        CollectionOptions::new().item_class::<Item>().tag("entry"),
    );
    let err = repr.deserialize("<test><entry>beer</entry></test>").err();
    assert_eq!(
        err.map(|e| e.kind().clone()),
        Some(ErrorKind::ItemConstruction { item_type: "Item" })
    );
}

#[test]
fn test_item_equality() -> Result<()> {
    let beer = Item::from_xml_fragment("<item>Beer</item>")?;
    assert_eq!(beer, Item("Beer".into()));
    assert_ne!(beer, Item("Auslese".into()));
    assert_eq!(ItemRef::new(beer).to_fragment(), "<item>Beer</item>");
    Ok(())
}
