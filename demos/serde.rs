use dicti::{CiMap, OrderedCiMap};

fn main() {
    let json = r#"{
    "Content-Type": "text/html",
    "content-length": 1024,
    "X-Request-Id": "a1b2c3",
    "CONTENT-TYPE": "application/json"
    }"#;
    let headers = serde_json::from_str::<OrderedCiMap<String, serde_json::Value>>(json).unwrap();
    println!("\r\nDebug:\r\n{:?}", headers);
    println!("\r\ncontent-type: {}", headers["content-type"]);

    println!("\r\nToJson:\r\n{}", serde_json::to_string_pretty(&headers).unwrap());

    let counts = serde_json::from_str::<CiMap<String, u32>>(r#"{"a": 1, "A": 2, "b": 3}"#).unwrap();
    println!("\r\nToString:\r\n{}", counts);
}
