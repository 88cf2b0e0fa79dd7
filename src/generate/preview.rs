//! Preview document composition.

/// Builds the self-contained HTML document the preview pane renders.
///
/// Embeds the generated stylesheet and markup verbatim; a pure function,
/// independent of any live document state. The embedding application must
/// render the result in a same-origin-only sandbox with no script
/// privileges.
pub fn compose_preview_document(html: &str, css: &str) -> String {
    format!(
        "<html><head><style>{css}</style></head>\n<body>{html}</body></html>\n"
    )
}
