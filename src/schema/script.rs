use serde::Serialize;
use serde_json::Value;

/// One `<script type="application/ld+json">` block with 2-space indented JSON
pub fn render_script<T: Serialize + ?Sized>(document: &T) -> serde_json::Result<String> {
    let json = serde_json::to_string_pretty(document)?;
    // A literal "</script>" inside a string value would end the block early
    Ok(format!(
        "<script type=\"application/ld+json\">\n{}\n</script>",
        json.replace("</", "<\\/")
    ))
}

/// Script blocks for every document of a page, newline separated
pub fn render_scripts(documents: &[Value]) -> serde_json::Result<String> {
    let blocks = documents
        .iter()
        .map(render_script)
        .collect::<serde_json::Result<Vec<_>>>()?;
    Ok(blocks.join("\n"))
}
