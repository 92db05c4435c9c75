use xmlmap::{
    serialize_into, to_xml_string, AttributeMap, ItemRef, UnwrappedCollection, Value, XmlBuilder,
    XmlItem, XmlOptions,
};

/// Renders as `<method type="VERB"/>` no matter where it sits
#[derive(Debug, PartialEq)]
struct Method(&'static str);

impl XmlItem for Method {
    fn to_xml(&self, builder: &mut XmlBuilder, _options: &XmlOptions) {
        builder.empty("method", &[("type", self.0)]);
    }
}

fn numbers() -> Value {
    Value::from(UnwrappedCollection::new([
        AttributeMap::new().with("number", 1),
        AttributeMap::new().with("number", 2),
    ]))
}

#[test]
fn test_members_render_without_wrapping_tag() {
    let mut builder = XmlBuilder::new();
    serialize_into(&numbers(), &mut builder, &XmlOptions::default());
    assert_eq!(
        builder.target(),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><hash><number type=\"integer\">1</number></hash>\
         <?xml version=\"1.0\" encoding=\"UTF-8\"?><hash><number type=\"integer\">2</number></hash>"
    );
}

#[test]
fn test_single_member() {
    let single = Value::from(UnwrappedCollection::new([AttributeMap::new().with("number", 1)]));
    let mut builder = XmlBuilder::new();
    serialize_into(&single, &mut builder, &XmlOptions::default().skip_instruct(true));
    assert_eq!(builder.target(), "<hash><number type=\"integer\">1</number></hash>");
}

#[test]
fn test_options_reach_every_member() {
    let mut builder = XmlBuilder::new();
    let options = XmlOptions::default().skip_instruct(true).skip_types(true);
    serialize_into(&numbers(), &mut builder, &options);
    assert_eq!(
        builder.target(),
        "<hash><number>1</number></hash><hash><number>2</number></hash>"
    );
}

#[test]
fn test_empty_collection_writes_nothing() {
    let mut builder = XmlBuilder::new();
    let empty = Value::from(UnwrappedCollection::default());
    serialize_into(&empty, &mut builder, &XmlOptions::default());
    assert_eq!(builder.target(), "");
}

#[test]
fn test_nested_in_hash() {
    let positions = UnwrappedCollection::new([
        AttributeMap::new()
            .with("article", "Peanut Butter")
            .with("amount", 1),
        AttributeMap::new()
            .with("article", "Hoepfner Pils")
            .with("amount", 2),
    ]);
    let order = AttributeMap::new().with("order", AttributeMap::new().with("position", positions));
    let options = XmlOptions::default().skip_instruct(true).skip_types(true);
    assert_eq!(
        to_xml_string(&Value::from(order), &options),
        "<hash>
  <order>
    <position>
      <article>Peanut Butter</article>
      <amount>1</amount>
    </position>
    <position>
      <article>Hoepfner Pils</article>
      <amount>2</amount>
    </position>
  </order>\n</hash>\n"
    );
}

#[test]
fn test_members_that_render_themselves() {
    let methods = Value::from(UnwrappedCollection::new([
        ItemRef::new(Method("PUT")),
        ItemRef::new(Method("GET")),
    ]));
    let mut builder = XmlBuilder::new();
    serialize_into(&methods, &mut builder, &XmlOptions::default());
    assert_eq!(
        builder.target(),
        "<method type=\"PUT\"/><method type=\"GET\"/>"
    );
}

#[test]
fn test_self_rendering_members_inside_hash() {
    let links = AttributeMap::new().with(
        "method",
        UnwrappedCollection::new([ItemRef::new(Method("PUT")), ItemRef::new(Method("GET"))]),
    );
    let options = XmlOptions::default().skip_instruct(true).root("links").indent(0);
    assert_eq!(
        to_xml_string(&Value::from(links), &options),
        "<links><method type=\"PUT\"/><method type=\"GET\"/></links>"
    );
}
