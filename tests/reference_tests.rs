//! Snapshot tests for generated enum reference docs.

use enum_registry::{EnumMember, EnumRegistry, RegistryBuilder, reference};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumMember)]
#[enum_member(uid = "paint.Color")]
struct Color(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumMember)]
#[enum_member(uid = "geo.Shape")]
#[repr(u8)]
enum Shape {
    Circle = 1,
    Square = 4,
}

fn sample_registry() -> EnumRegistry {
    let mut builder = RegistryBuilder::new();
    builder.register([(Color(2), "blue"), (Color(0), "red"), (Color(1), "green | lime")]);
    builder.register([(Shape::Square, "square"), (Shape::Circle, "circle")]);
    builder.freeze()
}

#[test]
fn markdown_reference() {
    let md = reference::render_markdown(&sample_registry());
    insta::assert_snapshot!(md, @r"
# Enum reference

## Shape

Uid: `geo.Shape`

| Value | Description |
|---|---|
| 1 | circle |
| 4 | square |

## Color

Uid: `paint.Color`

| Value | Description |
|---|---|
| 0 | red |
| 1 | green \| lime |
| 2 | blue |
");
}

#[cfg(feature = "json")]
#[test]
fn json_reference_lists_members() {
    let json = reference::render_json(&sample_registry()).expect("serialize reference");
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(parsed[0]["uid"], "geo.Shape");
    assert_eq!(parsed[1]["name"], "Color");
    assert_eq!(parsed[1]["members"][1]["value"], "1");
    assert_eq!(parsed[1]["members"][1]["description"], "green | lime");
}
