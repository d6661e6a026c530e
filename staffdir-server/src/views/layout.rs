//! Shared page chrome

use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; }
ol.employees li { padding: 0.25rem 0; }
nav.pagination { margin-top: 1.5rem; }
nav.pagination a, nav.pagination .current { margin-right: 0.75rem; }
.empty { color: #666; }
"#;

/// Wrap `content` in a full HTML document.
pub fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                main { (content) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_title() {
        let markup = page("<Directory>", html! { p { "hi" } }).into_string();
        assert!(markup.starts_with("<!DOCTYPE html>"));
        assert!(markup.contains("<title>&lt;Directory&gt;</title>"));
        assert!(markup.contains("<p>hi</p>"));
    }
}
