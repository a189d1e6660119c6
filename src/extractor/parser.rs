//! HTML parser for content extraction
//!
//! This module reduces a parsed page to its readable content:
//! - Noise subtrees (chrome, navigation, scripts) are excluded before any
//!   text is read, so they never leak into titles, headings, or body text
//! - Title and description resolve through ordered fallback chains
//! - The main content region is picked by priority: article, main, body

use crate::extractor::document::Headings;
use crate::extractor::text::clean_text;
use scraper::{ElementRef, Html, Selector};

/// Tags whose subtrees never contain readable page content
const NOISE_TAGS: &[&str] = &[
    "script", "style", "nav", "footer", "header", "aside", "noscript", "iframe", "svg", "form",
    "button",
];

/// Class tokens that mark page chrome regardless of tag
const NOISE_CLASSES: &[&str] = &[
    "nav",
    "navbar",
    "navigation",
    "menu",
    "sidebar",
    "footer",
    "banner",
    "breadcrumb",
    "breadcrumbs",
];

/// ARIA landmark roles that mark page chrome
const NOISE_ROLES: &[&str] = &["navigation", "banner", "contentinfo", "complementary", "menu"];

/// Readable content pulled out of one HTML document
#[derive(Debug, Clone)]
pub struct ParsedContent {
    /// Best-effort title, never empty
    pub title: String,

    /// Meta description, when present
    pub description: Option<String>,

    /// Headings per level in document order, noise excluded
    pub headings: Headings,

    /// Paragraphs longer than the boilerplate cutoff, noise excluded
    pub paragraphs: Vec<String>,

    /// Concatenated text of the main content region, pre-normalization
    pub raw_text: String,
}

/// Minimum cleaned length for a paragraph to survive the boilerplate filter
const MIN_PARAGRAPH_CHARS: usize = 20;

/// Parses HTML and extracts readable content
///
/// # Arguments
///
/// * `html` - The HTML document text
///
/// # Example
///
/// ```
/// use faqsmith::extractor::parse_document;
///
/// let html = "<html><head><title>Docs</title></head><body><article><p>A paragraph with enough text to keep.</p></article></body></html>";
/// let content = parse_document(html);
/// assert_eq!(content.title, "Docs");
/// assert_eq!(content.paragraphs.len(), 1);
/// ```
pub fn parse_document(html: &str) -> ParsedContent {
    let document = Html::parse_document(html);

    let headings = extract_headings(&document);
    let title = extract_title(&document, &headings);
    let description = extract_description(&document);
    let paragraphs = extract_paragraphs(&document);
    let raw_text = extract_main_text(&document);

    ParsedContent {
        title,
        description,
        headings,
        paragraphs,
        raw_text,
    }
}

/// Derives the page title through the ordered fallback chain:
/// title tag, first level-1 heading, social-meta title, "Untitled"
fn extract_title(document: &Html, headings: &Headings) -> String {
    if let Some(title) = select_first_text(document, "title") {
        let cleaned = clean_text(&title);
        if !cleaned.is_empty() {
            return cleaned;
        }
    }

    if let Some(h1) = headings.h1.first() {
        return h1.clone();
    }

    if let Some(meta) = meta_content(document, r#"meta[property="og:title"]"#) {
        let cleaned = clean_text(&meta);
        if !cleaned.is_empty() {
            return cleaned;
        }
    }

    "Untitled".to_string()
}

/// Reads the meta description, falling back to the social-meta variant
fn extract_description(document: &Html) -> Option<String> {
    meta_content(document, r#"meta[name="description"]"#)
        .or_else(|| meta_content(document, r#"meta[property="og:description"]"#))
        .map(|d| clean_text(&d))
        .filter(|d| !d.is_empty())
}

/// Collects headings for levels 1-6 in document order
fn extract_headings(document: &Html) -> Headings {
    let mut headings = Headings::default();

    for level in 1..=6u8 {
        if let Ok(selector) = Selector::parse(&format!("h{}", level)) {
            for element in document.select(&selector) {
                if in_noise_subtree(&element) {
                    continue;
                }

                let text = clean_text(&element.text().collect::<String>());
                if text.is_empty() {
                    continue;
                }

                if let Some(list) = headings.level_mut(level) {
                    list.push(text);
                }
            }
        }
    }

    headings
}

/// Collects paragraph texts, dropping short boilerplate fragments
fn extract_paragraphs(document: &Html) -> Vec<String> {
    let mut paragraphs = Vec::new();

    if let Ok(selector) = Selector::parse("p") {
        for element in document.select(&selector) {
            if in_noise_subtree(&element) {
                continue;
            }

            let text = clean_text(&element.text().collect::<String>());
            if text.chars().count() > MIN_PARAGRAPH_CHARS {
                paragraphs.push(text);
            }
        }
    }

    paragraphs
}

/// Concatenates the text of the main content region
///
/// Region priority: article, then main, then the whole body. Noise
/// subtrees inside the region are skipped during traversal.
fn extract_main_text(document: &Html) -> String {
    for region_selector in ["article", "main", "body"] {
        if let Ok(selector) = Selector::parse(region_selector) {
            if let Some(region) = document.select(&selector).next() {
                let mut out = String::new();
                collect_text(region, &mut out);
                return out;
            }
        }
    }

    String::new()
}

/// Recursively collects text nodes, skipping noise subtrees and inserting
/// line breaks after block-level elements
fn collect_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if is_noise_element(&child_element) {
                continue;
            }

            collect_text(child_element, out);

            if is_block_tag(child_element.value().name()) {
                out.push('\n');
            }
        }
    }
}

/// Returns true if the element or any of its ancestors is noise
fn in_noise_subtree(element: &ElementRef) -> bool {
    if is_noise_element(element) {
        return true;
    }

    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| is_noise_element(&ancestor))
}

/// Returns true if this element is page chrome rather than content
fn is_noise_element(element: &ElementRef) -> bool {
    let value = element.value();

    if NOISE_TAGS.contains(&value.name()) {
        return true;
    }

    if let Some(role) = value.attr("role") {
        if NOISE_ROLES.contains(&role.to_ascii_lowercase().as_str()) {
            return true;
        }
    }

    value
        .classes()
        .any(|class| NOISE_CLASSES.contains(&class.to_ascii_lowercase().as_str()))
}

/// Block-level tags that terminate a text run
fn is_block_tag(name: &str) -> bool {
    matches!(
        name,
        "p" | "div"
            | "section"
            | "article"
            | "main"
            | "li"
            | "ul"
            | "ol"
            | "table"
            | "tr"
            | "blockquote"
            | "pre"
            | "br"
            | "figcaption"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
    )
}

/// Text content of the first element matching the selector
fn select_first_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>())
}

/// Content attribute of the first meta element matching the selector
fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_extraction() {
        let html = "<html><head><title>T</title></head><body><script>x</script><article><h1>H</h1><p>This paragraph is definitely long enough.</p></article></body></html>";
        let content = parse_document(html);

        assert_eq!(content.title, "T");
        assert_eq!(content.headings.h1, vec!["H"]);
        assert_eq!(
            content.paragraphs,
            vec!["This paragraph is definitely long enough."]
        );
        assert!(!clean_text(&content.raw_text).contains('x'));
    }

    #[test]
    fn test_script_and_style_text_excluded() {
        let html = r#"<html><body>
            <script>var secret = "SCRIPTTEXT";</script>
            <style>.hidden { color: red; } /* STYLETEXT */</style>
            <p>Visible paragraph content that is kept.</p>
        </body></html>"#;
        let content = parse_document(html);

        assert!(!content.raw_text.contains("SCRIPTTEXT"));
        assert!(!content.raw_text.contains("STYLETEXT"));
        assert!(content.raw_text.contains("Visible paragraph content"));
    }

    #[test]
    fn test_nav_footer_header_aside_excluded() {
        let html = r#"<html><body>
            <header>SITEHEADER</header>
            <nav>NAVLINKS</nav>
            <p>Real article body text that should remain.</p>
            <aside>SIDEBARTEXT</aside>
            <footer>FOOTERTEXT</footer>
        </body></html>"#;
        let content = parse_document(html);

        for noise in ["SITEHEADER", "NAVLINKS", "SIDEBARTEXT", "FOOTERTEXT"] {
            assert!(
                !content.raw_text.contains(noise),
                "raw_text leaked {}",
                noise
            );
        }
        assert!(content.raw_text.contains("Real article body text"));
    }

    #[test]
    fn test_noise_class_excluded() {
        let html = r#"<html><body>
            <div class="sidebar">PROMOTEXT</div>
            <div class="menu">MENUTEXT</div>
            <p>Paragraph long enough to survive the filter.</p>
        </body></html>"#;
        let content = parse_document(html);

        assert!(!content.raw_text.contains("PROMOTEXT"));
        assert!(!content.raw_text.contains("MENUTEXT"));
        assert_eq!(content.paragraphs.len(), 1);
    }

    #[test]
    fn test_noise_role_excluded() {
        let html = r#"<html><body>
            <div role="navigation">NAVROLE</div>
            <div role="banner">BANNERROLE</div>
            <p>Paragraph long enough to survive the filter.</p>
        </body></html>"#;
        let content = parse_document(html);

        assert!(!content.raw_text.contains("NAVROLE"));
        assert!(!content.raw_text.contains("BANNERROLE"));
    }

    #[test]
    fn test_heading_inside_nav_excluded() {
        let html = r#"<html><body>
            <nav><h2>Site Sections</h2></nav>
            <h2>Actual Content Heading</h2>
        </body></html>"#;
        let content = parse_document(html);

        assert_eq!(content.headings.h2, vec!["Actual Content Heading"]);
    }

    #[test]
    fn test_title_falls_back_to_h1() {
        let html = "<html><body><h1>Heading Title</h1><p>Some body text goes right here.</p></body></html>";
        let content = parse_document(html);
        assert_eq!(content.title, "Heading Title");
    }

    #[test]
    fn test_title_falls_back_to_og_title() {
        let html = r#"<html><head><meta property="og:title" content="Social Title"></head><body><p>Some body text goes right here.</p></body></html>"#;
        let content = parse_document(html);
        assert_eq!(content.title, "Social Title");
    }

    #[test]
    fn test_title_falls_back_to_untitled() {
        let html = "<html><body><p>Some body text goes right here.</p></body></html>";
        let content = parse_document(html);
        assert_eq!(content.title, "Untitled");
    }

    #[test]
    fn test_empty_title_tag_falls_through() {
        let html = "<html><head><title>   </title></head><body><h1>Fallback</h1></body></html>";
        let content = parse_document(html);
        assert_eq!(content.title, "Fallback");
    }

    #[test]
    fn test_description_from_meta() {
        let html = r#"<html><head><meta name="description" content="A page about things."></head><body></body></html>"#;
        let content = parse_document(html);
        assert_eq!(content.description.as_deref(), Some("A page about things."));
    }

    #[test]
    fn test_description_falls_back_to_og() {
        let html = r#"<html><head><meta property="og:description" content="Social description."></head><body></body></html>"#;
        let content = parse_document(html);
        assert_eq!(content.description.as_deref(), Some("Social description."));
    }

    #[test]
    fn test_description_absent() {
        let html = "<html><body></body></html>";
        let content = parse_document(html);
        assert!(content.description.is_none());
    }

    #[test]
    fn test_short_paragraphs_filtered() {
        let html = "<html><body><p>Too short.</p><p>This one clears the twenty character bar.</p></body></html>";
        let content = parse_document(html);
        assert_eq!(
            content.paragraphs,
            vec!["This one clears the twenty character bar."]
        );
    }

    #[test]
    fn test_headings_in_document_order_with_duplicates() {
        let html = "<html><body><h2>First</h2><h2>Second</h2><h2>First</h2></body></html>";
        let content = parse_document(html);
        assert_eq!(content.headings.h2, vec!["First", "Second", "First"]);
    }

    #[test]
    fn test_all_heading_levels() {
        let html = "<html><body><h1>a</h1><h2>b</h2><h3>c</h3><h4>d</h4><h5>e</h5><h6>f</h6></body></html>";
        let content = parse_document(html);
        assert_eq!(content.headings.total(), 6);
        assert_eq!(content.headings.h6, vec!["f"]);
    }

    #[test]
    fn test_article_preferred_over_body() {
        let html = r#"<html><body>
            OUTSIDETEXT
            <article>Inside the article region.</article>
        </body></html>"#;
        let content = parse_document(html);

        assert!(content.raw_text.contains("Inside the article region."));
        assert!(!content.raw_text.contains("OUTSIDETEXT"));
    }

    #[test]
    fn test_main_preferred_over_body() {
        let html = r#"<html><body>
            OUTSIDETEXT
            <main>Inside the main region.</main>
        </body></html>"#;
        let content = parse_document(html);

        assert!(content.raw_text.contains("Inside the main region."));
        assert!(!content.raw_text.contains("OUTSIDETEXT"));
    }

    #[test]
    fn test_body_fallback_region() {
        let html = "<html><body><p>Body region text survives here fine.</p></body></html>";
        let content = parse_document(html);
        assert!(content.raw_text.contains("Body region text"));
    }

    #[test]
    fn test_block_elements_separated() {
        let html = "<html><body><article><p>First block.</p><p>Second block.</p></article></body></html>";
        let content = parse_document(html);
        let cleaned = clean_text(&content.raw_text);
        assert!(cleaned.contains("First block."));
        assert!(cleaned.contains("Second block."));
        // Adjacent paragraphs must not glue into one word run
        assert!(!cleaned.contains("block.Second"));
    }
}
