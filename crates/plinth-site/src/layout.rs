//! Shared page layout.
//!
//! Every page is wrapped in the same document shell: head metadata for SEO
//! and social cards, an embedded stylesheet, a two-entry navigation header,
//! a `main` region for the page content, and a constant footer.

use plinth_html::{Document, Element};

/// Canonical site URL, used for the `og:url` metadata tag.
const SITE_URL: &str = "https://xstraven.github.io/";

/// Footer line shared by every page.
const FOOTER_TEXT: &str = "Built with plinth • © 2024";

/// Compose a complete document from a page title, content fragment, and
/// description. Pure construction, no I/O.
pub fn compose(title: &str, content: Element, description: &str) -> Document {
    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(meta("viewport", "width=device-width, initial-scale=1"))
        .child(meta("description", description))
        // Open Graph tags
        .child(meta_property("og:title", title))
        .child(meta_property("og:description", description))
        .child(meta_property("og:type", "website"))
        .child(meta_property("og:url", SITE_URL))
        // Twitter Card tags
        .child(meta("twitter:card", "summary"))
        .child(meta("twitter:title", title))
        .child(meta("twitter:description", description))
        .child(Element::new("title").text(title))
        .child(Element::new("style").text(STYLESHEET));

    let nav = Element::new("nav")
        .attr("role", "navigation")
        .attr("aria-label", "Main navigation")
        .child(
            Element::new("ul")
                .child(nav_entry("Home", "index.html", title))
                .child(nav_entry("About", "about.html", title)),
        );

    let body = Element::new("body")
        .child(Element::new("header").child(nav))
        .child(Element::new("main").attr("role", "main").child(content))
        .child(
            Element::new("footer")
                .attr("role", "contentinfo")
                .child(Element::new("p").text(FOOTER_TEXT)),
        );

    Document::html5(
        Element::new("html")
            .attr("lang", "en")
            .child(head)
            .child(body),
    )
}

fn meta(name: &str, content: &str) -> Element {
    Element::new("meta").attr("name", name).attr("content", content)
}

fn meta_property(property: &str, content: &str) -> Element {
    Element::new("meta")
        .attr("property", property)
        .attr("content", content)
}

/// Build one navigation list entry. The entry whose label appears in the
/// page title is marked as the current page.
fn nav_entry(label: &str, href: &str, page_title: &str) -> Element {
    let mut link = Element::new("a").attr("href", href);
    if page_title.contains(label) {
        link = link.attr("aria-current", "page");
    }
    Element::new("li").child(link.text(label))
}

/// Embedded responsive stylesheet. Fixed, no parameterization.
const STYLESHEET: &str = r#"
* {
    box-sizing: border-box;
    margin: 0;
    padding: 0;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    line-height: 1.6;
    color: #333;
    max-width: 800px;
    margin: 0 auto;
    padding: 20px;
    background-color: #f8f9fa;
}

header {
    background: #fff;
    padding: 20px;
    border-radius: 8px;
    margin-bottom: 30px;
    box-shadow: 0 2px 4px rgba(0,0,0,0.1);
}

nav ul {
    list-style: none;
    display: flex;
    gap: 20px;
    flex-wrap: wrap;
}

nav a {
    color: #007bff;
    text-decoration: none;
    font-weight: 500;
    padding: 8px 12px;
    border-radius: 4px;
    transition: background-color 0.2s;
}

nav a:hover, nav a:focus {
    background-color: #e7f3ff;
    outline: 2px solid #007bff;
}

nav a[aria-current="page"] {
    background-color: #007bff;
    color: white;
}

main {
    background: #fff;
    padding: 30px;
    border-radius: 8px;
    margin-bottom: 30px;
    box-shadow: 0 2px 4px rgba(0,0,0,0.1);
}

h1 {
    color: #2c3e50;
    margin-bottom: 20px;
    font-size: 2.5rem;
}

h2 {
    color: #34495e;
    margin: 30px 0 15px 0;
    font-size: 1.8rem;
}

p {
    margin-bottom: 15px;
    font-size: 1.1rem;
}

footer {
    background: #fff;
    padding: 20px;
    border-radius: 8px;
    text-align: center;
    color: #666;
    box-shadow: 0 2px 4px rgba(0,0,0,0.1);
}

.highlight {
    background-color: #fff3cd;
    padding: 15px;
    border-radius: 4px;
    border-left: 4px solid #ffc107;
    margin: 20px 0;
}

@media (max-width: 600px) {
    body {
        padding: 10px;
    }

    header, main, footer {
        padding: 15px;
    }

    h1 {
        font-size: 2rem;
    }

    nav ul {
        flex-direction: column;
        gap: 10px;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(title: &str) -> String {
        compose(title, Element::new("div").text("content"), "A test page").to_html()
    }

    #[test]
    fn title_element_holds_the_literal_title() {
        let html = sample("Home - Personal Website");
        assert!(html.contains("<title>Home - Personal Website</title>"));
    }

    #[test]
    fn home_title_marks_home_entry_current() {
        let html = sample("Home - Personal Website");
        assert!(html.contains("<a href=\"index.html\" aria-current=\"page\">Home</a>"));
        assert!(html.contains("<a href=\"about.html\">About</a>"));
    }

    #[test]
    fn about_title_marks_about_entry_current() {
        let html = sample("About - Personal Website");
        assert!(html.contains("<a href=\"about.html\" aria-current=\"page\">About</a>"));
        assert!(html.contains("<a href=\"index.html\">Home</a>"));
    }

    #[test]
    fn unmatched_title_marks_nothing_current() {
        let html = sample("Contact - Personal Website");
        assert!(!html.contains("aria-current"));
    }

    #[test]
    fn head_carries_social_metadata() {
        let html = sample("Home - Personal Website");
        assert!(html.contains("<meta charset=\"utf-8\">"));
        assert!(html.contains(
            "<meta name=\"description\" content=\"A test page\">"
        ));
        assert!(html.contains(
            "<meta property=\"og:title\" content=\"Home - Personal Website\">"
        ));
        assert!(html.contains("<meta property=\"og:type\" content=\"website\">"));
        assert!(html.contains(
            "<meta property=\"og:url\" content=\"https://xstraven.github.io/\">"
        ));
        assert!(html.contains("<meta name=\"twitter:card\" content=\"summary\">"));
    }

    #[test]
    fn content_lands_inside_main_region() {
        let html = sample("Home - Personal Website");
        assert!(html.contains("<main role=\"main\"><div>content</div></main>"));
    }

    #[test]
    fn footer_and_stylesheet_are_embedded() {
        let html = sample("Home - Personal Website");
        assert!(html.contains("Built with plinth • © 2024"));
        assert!(html.contains("nav a[aria-current=\"page\"]"));
    }
}
