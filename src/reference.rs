//! Render registered enums as reference documentation.
//!
//! The Markdown output is deterministic (types sorted by uid, members by value) so it can be checked into a repo and
//! diffed.

use crate::entry::EnumInfo;
use crate::registry::EnumRegistry;

/// Render every registered enum as a Markdown document.
///
/// ## Examples
/// ```rust
/// use enum_registry::{EnumMember, RegistryBuilder, reference};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumMember)]
/// #[enum_member(uid = "docs.Toggle")]
/// struct Toggle(u8);
///
/// let mut builder = RegistryBuilder::new();
/// builder.register([(Toggle(0), "off"), (Toggle(1), "on")]);
/// let md = reference::render_markdown(&builder.freeze());
///
/// assert!(md.contains("## Toggle"));
/// assert!(md.contains("| 1 | on |"));
/// ```
pub fn render_markdown(registry: &EnumRegistry) -> String {
    let mut out = String::new();
    out.push_str("# Enum reference\n");

    let infos = registry.infos();
    if infos.is_empty() {
        out.push_str("\nNo enums registered.\n");
        return out;
    }

    for info in &infos {
        render_enum_section(&mut out, info);
    }
    out
}

fn render_enum_section(out: &mut String, info: &EnumInfo) {
    out.push_str(&format!("\n## {}\n\n", info.name));
    out.push_str(&format!("Uid: `{}`\n\n", info.uid));
    out.push_str("| Value | Description |\n");
    out.push_str("|---|---|\n");
    for member in &info.members {
        out.push_str(&format!(
            "| {} | {} |\n",
            member.value,
            escape_cell(&member.description)
        ));
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

/// Render every registered enum as a pretty-printed JSON array of [`EnumInfo`].
#[cfg(feature = "json")]
pub fn render_json(registry: &EnumRegistry) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&registry.infos())
}
