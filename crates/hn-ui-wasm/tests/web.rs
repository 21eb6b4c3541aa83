// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Browser tests; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]
#![allow(missing_docs, clippy::unwrap_used)]

use hn_ui_wasm::{
    display_update_comments_time, hover_like, toggle_dislike, toggle_like, toggle_refresh,
    unhover_like,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn element(doc: &Document, id: &str, classes: &str) -> Element {
    let el = doc.create_element("i").unwrap();
    el.set_id(id);
    el.set_class_name(classes);
    el
}

/// Like and dislike buttons under a shared parent, detached from the page.
fn buttons() -> (Element, Element) {
    let doc = document();
    let parent = doc.create_element("div").unwrap();
    let like = element(&doc, "like", "bi bi-caret-up");
    let dislike = element(&doc, "dislike", "bi bi-caret-down");
    parent.append_child(&like).unwrap();
    parent.append_child(&dislike).unwrap();
    (like, dislike)
}

#[wasm_bindgen_test]
fn like_replaces_dislike() {
    let (like, dislike) = buttons();
    toggle_dislike(&dislike, "1").unwrap();
    assert!(dislike.class_list().contains("disliked"));

    toggle_like(&like, "1").unwrap();

    assert!(like.class_list().contains("liked"));
    assert!(like.class_list().contains("bi-caret-up-fill"));
    assert!(!dislike.class_list().contains("disliked"));
    assert!(dislike.class_list().contains("bi-caret-down"));
}

#[wasm_bindgen_test]
fn double_like_restores_classes() {
    let (like, _dislike) = buttons();
    let before = like.class_name();
    toggle_like(&like, "1").unwrap();
    toggle_like(&like, "1").unwrap();
    let mut classes: Vec<_> = like.class_name().split_whitespace().map(str::to_owned).collect();
    let mut expected: Vec<_> = before.split_whitespace().map(str::to_owned).collect();
    classes.sort();
    expected.sort();
    assert_eq!(classes, expected);
}

#[wasm_bindgen_test]
fn toggle_without_sibling_is_an_error() {
    let doc = document();
    let parent = doc.create_element("div").unwrap();
    let like = element(&doc, "like", "bi bi-caret-up");
    parent.append_child(&like).unwrap();
    assert!(toggle_like(&like, "1").is_err());
}

#[wasm_bindgen_test]
fn hover_previews_fill() {
    let (like, _dislike) = buttons();
    hover_like(&like);
    assert!(like.class_list().contains("bi-caret-up-fill"));
    unhover_like(&like);
    assert!(like.class_list().contains("bi-caret-up"));
    assert!(!like.class_list().contains("bi-caret-up-fill"));
}

#[wasm_bindgen_test]
fn refresh_elements_follow_calls() {
    let doc = document();
    let body = doc.body().unwrap();
    let icon = element(&doc, "refresh_icon", "spinner");
    let block = element(&doc, "update_comments_time_block", "");
    let time = element(&doc, "update_comments_time", "");
    block.append_child(&time).unwrap();
    body.append_child(&icon).unwrap();
    body.append_child(&block).unwrap();
    let block_style = block.dyn_ref::<HtmlElement>().unwrap().style();
    block_style.set_property("display", "none").unwrap();

    toggle_refresh().unwrap();
    let icon_style = icon.dyn_ref::<HtmlElement>().unwrap().style();
    assert_eq!(icon_style.get_property_value("display").unwrap(), "none");
    toggle_refresh().unwrap();
    assert_eq!(icon_style.get_property_value("display").unwrap(), "");

    display_update_comments_time(2.5).unwrap();
    assert_eq!(time.text_content().unwrap(), "2.5");
    assert_eq!(block_style.get_property_value("display").unwrap(), "");
}
