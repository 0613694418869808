//! Page content.
//!
//! Each page builder returns a fully composed document: hardcoded content
//! passed through the shared layout. Pure and deterministic.

use plinth_html::{Document, Element};

use crate::layout;

/// Build the home page.
pub fn home() -> Document {
    let content = Element::new("div")
        .child(Element::new("h1").text("Welcome to My Personal Website"))
        .child(Element::new("p").text(
            "Hello! This is a minimal personal website generated ahead of time \
             and hosted on GitHub Pages.",
        ))
        .child(
            Element::new("div")
                .attr("class", "highlight")
                .child(Element::new("p").text("This site demonstrates:"))
                .child(
                    Element::new("ul")
                        .child(Element::new("li").text("Static HTML generation from typed document trees"))
                        .child(Element::new("li").text("Responsive design that works on all devices"))
                        .child(Element::new("li").text("Accessible semantic markup"))
                        .child(Element::new("li").text("Clean, modern styling"))
                        .child(Element::new("li").text("SEO and social media optimization")),
                ),
        )
        .child(Element::new("p").text(
            "Every page is composed in code and serialized to plain HTML, so the \
             whole site ships as a handful of files on disk.",
        ))
        .child(Element::new("h2").text("About This Project"))
        .child(Element::new("p").text(
            "This website showcases a small generator that outputs pure HTML files \
             suitable for GitHub Pages hosting. No server runtime required!",
        ))
        .child(
            Element::new("p")
                .text("Check out the ")
                .child(Element::new("a").attr("href", "about.html").text("About page"))
                .text(" to learn more about me, or view the source code on GitHub."),
        );

    layout::compose(
        "Home - Personal Website",
        content,
        "Personal website generated as plain static HTML - no server required",
    )
}

/// Build the about page.
pub fn about() -> Document {
    let content = Element::new("div")
        .child(Element::new("h1").text("About Me"))
        .child(Element::new("p").text(
            "Hi there! I'm a developer passionate about building simple, effective \
             web solutions.",
        ))
        .child(Element::new("h2").text("What I Do"))
        .child(Element::new("p").text(
            "I enjoy exploring modern web technologies and creating tools that make \
             development easier. This site is a perfect example - two pages composed \
             in code with minimal complexity.",
        ))
        .child(Element::new("h2").text("Technologies I Love"))
        .child(
            Element::new("ul")
                .child(Element::new("li").text("Rust for reliable tooling and automation"))
                .child(Element::new("li").text("Typed document trees for generating markup"))
                .child(Element::new("li").text("Static site generators for fast, secure websites"))
                .child(Element::new("li").text("GitHub Pages for simple, free hosting")),
        )
        .child(Element::new("h2").text("Get In Touch"))
        .child(Element::new("p").text(
            "Feel free to reach out if you'd like to collaborate on a project or \
             just chat about technology!",
        ))
        .child(
            Element::new("div")
                .attr("class", "highlight")
                .child(Element::new("p").text(
                    "This entire website is generated from a few small Rust modules!",
                )),
        );

    layout::compose(
        "About - Personal Website",
        content,
        "Learn more about me and my work with web technologies",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn home_links_to_about() {
        let html = home().to_html();
        assert!(html.contains("<a href=\"about.html\">About page</a>"));
        assert!(html.contains("<title>Home - Personal Website</title>"));
    }

    #[test]
    fn about_links_back_to_home_via_nav() {
        let html = about().to_html();
        assert!(html.contains("href=\"index.html\""));
        assert!(html.contains("<title>About - Personal Website</title>"));
    }

    #[test]
    fn pages_are_deterministic() {
        assert_eq!(home().to_html(), home().to_html());
        assert_eq!(about().to_html(), about().to_html());
    }

    #[test]
    fn each_page_marks_its_own_nav_entry() {
        let home_html = home().to_html();
        assert!(home_html.contains("<a href=\"index.html\" aria-current=\"page\">Home</a>"));
        assert!(!home_html.contains("<a href=\"about.html\" aria-current=\"page\">About</a>"));

        let about_html = about().to_html();
        assert!(about_html.contains("<a href=\"about.html\" aria-current=\"page\">About</a>"));
    }
}
