//! Popup content extraction.
//!
//! Placement HTML is authored server-side from a small vocabulary:
//!
//! - `h1` title, `h2` subtitle, `header` banner
//! - `h3` headings, `p` paragraphs and `.connector` joiners as the body
//! - `.disclosure` (or `footer`) legal text
//! - one primary action: the `[data-content-fetch]` element, else the first
//!   `button` or `[role='button']` outside the banner
//!
//! Anything else is ignored.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::models::{BodyBlock, PopupPlacementModel, PrimaryActionButton};
use crate::utils::{compile_regex, parse_selector};

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "h1";
const SUBTITLE_SELECTOR_STR: &str = "h2";
const HEADER_SELECTOR_STR: &str = "header";
const BODY_SELECTOR_STR: &str = "h3, p, .connector";
const DISCLOSURE_SELECTOR_STR: &str = ".disclosure, footer";
const CONTENT_FETCH_SELECTOR_STR: &str = "[data-content-fetch]";
const FALLBACK_ACTION_SELECTOR_STR: &str = "button, [role='button']";

const CONTENT_FETCH_ATTR: &str = "data-content-fetch";
const CONNECTOR_CLASS: &str = "connector";
const DISCLOSURE_CLASS: &str = "disclosure";

static TITLE_SELECTOR: LazyLock<Option<Selector>> =
    LazyLock::new(|| parse_selector(TITLE_SELECTOR_STR, "popup title"));
static SUBTITLE_SELECTOR: LazyLock<Option<Selector>> =
    LazyLock::new(|| parse_selector(SUBTITLE_SELECTOR_STR, "popup subtitle"));
static HEADER_SELECTOR: LazyLock<Option<Selector>> =
    LazyLock::new(|| parse_selector(HEADER_SELECTOR_STR, "popup header"));
static BODY_SELECTOR: LazyLock<Option<Selector>> =
    LazyLock::new(|| parse_selector(BODY_SELECTOR_STR, "popup body"));
static DISCLOSURE_SELECTOR: LazyLock<Option<Selector>> =
    LazyLock::new(|| parse_selector(DISCLOSURE_SELECTOR_STR, "popup disclosure"));
static CONTENT_FETCH_SELECTOR: LazyLock<Option<Selector>> =
    LazyLock::new(|| parse_selector(CONTENT_FETCH_SELECTOR_STR, "popup content fetch action"));
static FALLBACK_ACTION_SELECTOR: LazyLock<Option<Selector>> =
    LazyLock::new(|| parse_selector(FALLBACK_ACTION_SELECTOR_STR, "popup fallback action"));

static WHITESPACE_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile_regex(r"\s+", "popup whitespace"));

/// Extracts the structured overlay model from a placement HTML fragment.
///
/// # Arguments
///
/// * `html` - The HTML fragment of a placement content entry
///
/// # Returns
///
/// The popup model, or `None` when the fragment is empty or has no primary
/// action with a visible label. A model is never returned half-built: the
/// primary action is the one required part.
pub fn extract_popup_model(html: &str) -> Option<PopupPlacementModel> {
    if html.trim().is_empty() {
        return None;
    }
    let document = Html::parse_fragment(html);

    let Some(action) = find_primary_action(&document) else {
        log::debug!("Popup fragment has no primary action element");
        return None;
    };
    let primary_action = build_primary_action(action)?;

    Some(PopupPlacementModel {
        title: first_text(&document, &TITLE_SELECTOR),
        subtitle: first_text(&document, &SUBTITLE_SELECTOR),
        header: first_text(&document, &HEADER_SELECTOR),
        body: body_blocks(&document, action),
        disclosure: first_text(&document, &DISCLOSURE_SELECTOR),
        primary_action,
    })
}

/// The element carrying the content-fetch attribute wins over any button,
/// wherever it sits in the document.
fn find_primary_action(document: &Html) -> Option<ElementRef<'_>> {
    if let Some(action) = first_match(document, &CONTENT_FETCH_SELECTOR) {
        return Some(action);
    }
    let selector = FALLBACK_ACTION_SELECTOR.as_ref()?;
    document.select(selector).find(|element| {
        !element
            .ancestors()
            .filter_map(|node| node.value().as_element())
            .any(|el| el.name() == "header")
    })
}

fn build_primary_action(element: ElementRef<'_>) -> Option<PrimaryActionButton> {
    let label = element_text(element);
    if label.is_empty() {
        log::debug!("Popup primary action has no label");
        return None;
    }
    let attr = |name: &str| {
        element
            .value()
            .attr(name)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };
    Some(PrimaryActionButton {
        label,
        content_fetch_id: attr(CONTENT_FETCH_ATTR),
        target_url: attr("href"),
    })
}

fn body_blocks(document: &Html, action: ElementRef<'_>) -> Vec<BodyBlock> {
    let Some(selector) = BODY_SELECTOR.as_ref() else {
        return Vec::new();
    };
    document
        .select(selector)
        .filter(|element| !is_excluded_from_body(*element, action))
        .filter_map(|element| {
            let text = element_text(element);
            if text.is_empty() {
                return None;
            }
            let block = if has_class(element, CONNECTOR_CLASS) {
                BodyBlock::Connector(text)
            } else if element.value().name() == "h3" {
                BodyBlock::Heading(text)
            } else {
                BodyBlock::Paragraph(text)
            };
            Some(block)
        })
        .collect()
}

/// Body text excludes anything inside the banner, the disclosure or the action.
fn is_excluded_from_body(element: ElementRef<'_>, action: ElementRef<'_>) -> bool {
    element.ancestors().any(|node| {
        if node.id() == action.id() {
            return true;
        }
        node.value().as_element().is_some_and(|el| {
            matches!(el.name(), "header" | "footer")
                || el.classes().any(|class| class == DISCLOSURE_CLASS)
        })
    }) || has_class(element, DISCLOSURE_CLASS)
}

fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

fn first_match<'a>(document: &'a Html, selector: &LazyLock<Option<Selector>>) -> Option<ElementRef<'a>> {
    selector
        .as_ref()
        .and_then(|selector| document.select(selector).next())
}

fn first_text(document: &Html, selector: &LazyLock<Option<Selector>>) -> Option<String> {
    first_match(document, selector)
        .map(element_text)
        .filter(|text| !text.is_empty())
}

fn element_text(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    collapse_whitespace(&raw)
}

fn collapse_whitespace(text: &str) -> String {
    match WHITESPACE_RE.as_ref() {
        Some(re) => re.replace_all(text.trim(), " ").into_owned(),
        None => text.trim().to_string(),
    }
}
