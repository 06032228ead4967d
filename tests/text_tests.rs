// Host-side tests for HTML text helpers.

#![allow(dead_code)]
mod core {
    pub mod text {
        include!("../src/core/text.rs");
    }
}

use core::text::*;

#[test]
fn escapes_markup_characters() {
    assert_eq!(
        escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
    );
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn encodes_like_encode_uri_component() {
    assert_eq!(encode_uri_component("DP2 Motor Play"), "DP2%20Motor%20Play");
    assert_eq!(encode_uri_component("a&b=c/d"), "a%26b%3Dc%2Fd");
    assert_eq!(encode_uri_component("keep-_.!~*'()"), "keep-_.!~*'()");
    assert_eq!(encode_uri_component("é"), "%C3%A9");
}

#[test]
fn rich_text_bolds_and_breaks() {
    assert_eq!(
        rich_text("**Goal:** ship\nnext <line>"),
        "<strong>Goal:</strong> ship<br>next &lt;line&gt;"
    );
    assert_eq!(rich_text("a **b** c **d**"), "a <strong>b</strong> c <strong>d</strong>");
}

#[test]
fn rich_text_keeps_unmatched_markers() {
    assert_eq!(rich_text("5 ** 2"), "5 ** 2");
    assert_eq!(rich_text("**x** and **y"), "<strong>x</strong> and **y");
}

#[test]
fn link_labels() {
    assert_eq!(link_label("gdd"), "View Full Game Design Document");
    assert_eq!(link_label("conceptGdd"), "View Concept & Research GDD");
    assert_eq!(link_label("ppt"), "Ppt");
    assert_eq!(link_label("itchIo"), "Itch Io");
    assert!(is_design_doc("gameGdd"));
    assert!(!is_design_doc("itchIo"));
}

#[test]
fn placeholder_encodes_text() {
    assert_eq!(
        placeholder_url(400, 300, "Flow Log"),
        "https://via.placeholder.com/400x300/1a1a2e/ff7849?text=Flow%20Log"
    );
    assert!(!placeholder_url(400, 300, "Hemant's Game").contains('\''));
}

#[test]
fn assets_resolve_against_base() {
    assert_eq!(resolve_asset("/site/", "images/a.png"), "/site/images/a.png");
    assert_eq!(resolve_asset("/", "images/a.png"), "/images/a.png");
    assert_eq!(resolve_asset("/site/", "/abs.png"), "/abs.png");
    assert_eq!(
        resolve_asset("/site/", "https://cdn.example.com/a.png"),
        "https://cdn.example.com/a.png"
    );
    assert_eq!(resolve_asset("/site/", ""), "");
}

#[test]
fn detects_embedded_video() {
    assert!(is_embedded_video("https://www.youtube.com/embed/abc"));
    assert!(is_embedded_video("https://youtu.be/abc"));
    assert!(!is_embedded_video("videos/clip.mp4"));
}
