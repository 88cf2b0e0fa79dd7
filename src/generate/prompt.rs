//! Prompt templates sent alongside generation requests.

const DRAWING_PROMPT: &str = "You are a website code generator. \
Task: Convert this sketch into a clean, semantic webpage. \
Output JSON with keys { html, css } only. \
html: full <div>... markup. \
css: stylesheet for layout, colors, typography. \
Ensure HTML uses only plain HTML5 tags (no JS).";

/// Instructions attached to a drawing-derived request.
pub fn drawing_prompt() -> &'static str {
    DRAWING_PROMPT
}

/// Instructions for generating a page from a free-text description.
pub fn prompt_for_description(description: &str) -> String {
    format!(
        "You are a website code generator. \
         Task: Generate a clean, semantic webpage from this description: \"{description}\". \
         Output JSON with keys {{ html, css }} only. \
         html: full <div>... markup. \
         css: stylesheet for layout, colors, typography. \
         Ensure HTML uses only plain HTML5 tags (no JS)."
    )
}
