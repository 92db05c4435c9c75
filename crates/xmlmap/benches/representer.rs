use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use xmlmap::{
    to_xml_string, AttributeMap, CollectionOptions, Representation, UnwrappedCollection, Value,
    XmlOptions,
};

const ORDER_XML: &str = "<order><id type=\"integer\">42</id><customer>tucker</customer>\
<item>Beer</item><item>Peanut Butter</item><item>Chips</item><note nil=\"true\"/></order>";

fn order_representation() -> Representation {
    Representation::new("order").collection("items", CollectionOptions::new())
}

fn order_attributes() -> AttributeMap {
    AttributeMap::new()
        .with("id", 42)
        .with("customer", "tucker")
        .with(
            "items",
            vec![
                Value::from("Beer"),
                Value::from("Peanut Butter"),
                Value::from("Chips"),
            ],
        )
        .with("note", Value::Null)
}

fn bench_deserialize(c: &mut Criterion) {
    let repr = order_representation();
    c.bench_function("xmlmap_deserialize_order", |b| {
        b.iter(|| repr.deserialize(black_box(ORDER_XML)))
    });
}

fn bench_serialize(c: &mut Criterion) {
    let repr = order_representation();
    let attributes = order_attributes();
    let options = XmlOptions::default();
    c.bench_function("xmlmap_serialize_order", |b| {
        b.iter(|| repr.to_xml(black_box(&attributes), &options))
    });
}

fn bench_unwrapped(c: &mut Criterion) {
    let positions = Value::from(UnwrappedCollection::new(
        (0..64).map(|n| AttributeMap::new().with("article", "Pils").with("amount", n)),
    ));
    let options = XmlOptions::default().skip_instruct(true).indent(0);
    c.bench_function("xmlmap_serialize_unwrapped", |b| {
        b.iter(|| to_xml_string(black_box(&positions), &options))
    });
}

criterion_group!(benches, bench_deserialize, bench_serialize, bench_unwrapped);
criterion_main!(benches);
