/// Remove Markdown code-fence markers from model output.
///
/// Every "```html" marker is removed first, then every remaining "```".
/// Text between the fences is kept as-is, including surrounding newlines.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```html", "").replace("```", "")
}
