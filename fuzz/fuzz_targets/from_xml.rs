#![no_main]
use libfuzzer_sys::fuzz_target;
use xmlmap::{CollectionOptions, Representation, XmlOptions};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let repr = Representation::new("test")
            .collection("items", CollectionOptions::new())
            .collection("entries", CollectionOptions::new().tag("li"));
        if let Ok(attributes) = repr.deserialize(s) {
            // Whatever parses must render and parse again
            let xml = repr.to_xml(&attributes, &XmlOptions::default());
            assert!(repr.deserialize(&xml).is_ok());
        }
    }
});
