//! WASM build test
//!
//! Exercises the exported API in a browser, then mounts generated embeds in
//! the test page and drives their runtime through DOM clicks.

#![cfg(target_arch = "wasm32")]

use lw_embed::api::*;
use lw_embed::{
    CardItem, EmbedRequest, FlashcardLabels, FlashcardStyle, Generator, LyricsDocument,
    LyricsLabels, LyricsStyle, WordListStyle,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_normalize_drive_link() {
    assert_eq!(
        normalize_drive_link("https://drive.google.com/open?id=abc"),
        "https://drive.google.com/thumbnail?id=abc&sz=w800"
    );
    assert_eq!(extract_file_id("https://example.com/x.png"), None);
}

#[wasm_bindgen_test]
fn test_generate_embed_from_js_object() {
    let styles = default_styles().unwrap();
    let style = js_sys::Reflect::get(&styles, &JsValue::from_str("wordList")).unwrap();
    let themes = default_themes().unwrap();
    let request = js_sys::Object::new();
    js_sys::Reflect::set(&request, &"kind".into(), &"wordList".into()).unwrap();
    js_sys::Reflect::set(&request, &"themes".into(), &themes).unwrap();
    js_sys::Reflect::set(&request, &"style".into(), &style).unwrap();

    let generated = generate_embed(request.into()).unwrap();
    let html = js_sys::Reflect::get(&generated, &"html".into()).unwrap().as_string().unwrap();
    assert!(html.contains("lwWordList("));
}

#[wasm_bindgen_test]
fn test_lyrics_preview_state() {
    let document = js_sys::JSON::parse(
        r#"{"title":"t","author":"a","vocalAudioUrl":"","bodyText":"one (a)\n\ntwo (b)"}"#,
    )
    .unwrap();
    let mut preview = LyricsPreview::new(document).unwrap();
    assert!(preview.has_paragraphs());
    assert!(!preview.dual_audio());
    preview.next().unwrap();
    preview.toggle_current().unwrap();
    let view = preview.view().unwrap();
    let indicator = js_sys::Reflect::get(&view, &"indicator".into()).unwrap();
    assert_eq!(indicator.as_string().unwrap(), "2/2");
    assert!(!preview.request_switch());
}

#[wasm_bindgen_test]
fn test_remove_last_lesson_fails() {
    let theme = js_sys::JSON::parse(r#"{"title":"T","lessons":[{"name":"L","words":["a"]}]}"#).unwrap();
    assert!(remove_lesson(theme, 0).is_err());
}

// Embed mounting

/// Insert an embed into the page and run its inline scripts in order
///
/// Scripts set through `innerHTML` never execute, which also keeps external
/// ones such as the SoundCloud API out of the page.
fn mount(html: &str) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document.create_element("div").unwrap();
    host.set_inner_html(html);
    document.body().unwrap().append_child(&host).unwrap();

    let scripts = host.query_selector_all("script:not([src])").unwrap();
    for i in 0..scripts.length() {
        let code = scripts.item(i).unwrap().text_content().unwrap_or_default();
        js_sys::eval(&code).unwrap();
    }
    host
}

fn find(root: &Element, selector: &str) -> Element {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {}", selector))
}

fn click(root: &Element, selector: &str) {
    find(root, selector).dyn_into::<HtmlElement>().unwrap().click();
}

fn text(root: &Element, selector: &str) -> String {
    find(root, selector).text_content().unwrap_or_default()
}

fn has_class(element: &Element, class: &str) -> bool {
    element.class_name().split_whitespace().any(|c| c == class)
}

fn display(element: &Element) -> String {
    let style = js_sys::Reflect::get(element, &"style".into()).unwrap();
    js_sys::Reflect::get(&style, &"display".into()).unwrap().as_string().unwrap_or_default()
}

/// Make `window.open` fail like a popup blocker and record alerts
fn block_popups() {
    js_sys::eval(
        "window.lwAlerted = null;\
         window.open = function () { return null; };\
         window.alert = function (message) { window.lwAlerted = message; };",
    )
    .unwrap();
}

fn alerted() -> Option<String> {
    let window = web_sys::window().unwrap();
    js_sys::Reflect::get(&window, &"lwAlerted".into()).unwrap().as_string()
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn lyrics_embed(id: &str, body: &str, instrumental: Option<&str>) -> Element {
    let document = LyricsDocument {
        title: "Song".to_string(),
        author: "Class".to_string(),
        vocal_audio_url: if instrumental.is_some() { "about:blank".to_string() } else { String::new() },
        instrumental_audio_url: instrumental.map(str::to_string),
        body_text: body.to_string(),
    };
    let html = Generator::with_container_id(id)
        .generate(&EmbedRequest::Lyrics {
            document,
            style: LyricsStyle::default(),
        })
        .unwrap()
        .html;
    mount(&html)
}

/// Hidden flag of each paragraph, read from its hideable words
fn hidden(root: &Element) -> Vec<bool> {
    let paragraphs = root.query_selector_all("[data-lw-region=\"content\"] p").unwrap();
    (0..paragraphs.length())
        .map(|i| {
            let p = paragraphs.item(i).unwrap().dyn_into::<Element>().unwrap();
            let words = p.query_selector_all(".lw-word").unwrap();
            (0..words.length()).all(|j| has_class(&words.item(j).unwrap().dyn_into::<Element>().unwrap(), "hide"))
        })
        .collect()
}

const THREE_VERSES: &str = "one (a) b\n\ntwo (c) (d)\n\nthree (e)";

// Lyrics runtime

#[wasm_bindgen_test]
fn test_lyrics_navigation_clamps_and_selects() {
    let root = lyrics_embed("lw-gt-browser-nav", THREE_VERSES, None);
    let indicator = "[data-lw-control=\"indicator\"]";

    assert_eq!(text(&root, indicator), "1/3");
    click(&root, "[data-lw-control=\"prev\"]");
    assert_eq!(text(&root, indicator), "1/3");
    for _ in 0..3 {
        click(&root, "[data-lw-control=\"next\"]");
    }
    assert_eq!(text(&root, indicator), "3/3");
    click(&root, "[data-lw-control=\"prev\"]");
    assert_eq!(text(&root, indicator), "2/3");
    assert!(has_class(&find(&root, "p[data-i=\"1\"]"), "active"));

    click(&root, "p[data-i=\"0\"]");
    assert_eq!(text(&root, indicator), "1/3");
    assert!(has_class(&find(&root, "p[data-i=\"0\"]"), "active"));
    assert!(!has_class(&find(&root, "p[data-i=\"1\"]"), "active"));
}

#[wasm_bindgen_test]
fn test_lyrics_word_hiding() {
    let root = lyrics_embed("lw-gt-browser-hide", THREE_VERSES, None);
    let labels = LyricsLabels::default();
    let toggle = "[data-lw-control=\"toggle\"]";

    assert_eq!(hidden(&root), vec![false, false, false]);

    click(&root, "[data-lw-control=\"next\"]");
    click(&root, toggle);
    assert_eq!(hidden(&root), vec![false, true, false]);
    assert_eq!(text(&root, toggle), labels.show);

    click(&root, "[data-lw-control=\"hideAll\"]");
    assert_eq!(hidden(&root), vec![true, true, true]);

    // inline show on the second paragraph only
    click(&root, ".lw-para-wrap:nth-child(2) .show-btn");
    assert_eq!(hidden(&root), vec![true, false, true]);
    assert_eq!(text(&root, toggle), labels.hide);

    click(&root, ".lw-para-wrap:nth-child(3) .hide-btn");
    click(&root, "[data-lw-control=\"showAll\"]");
    assert_eq!(hidden(&root), vec![false, false, false]);
    assert_eq!(text(&root, "[data-lw-control=\"indicator\"]"), "2/3");
}

#[wasm_bindgen_test]
fn test_lyrics_print_with_blocked_popup_alerts() {
    let root = lyrics_embed("lw-gt-browser-print", THREE_VERSES, None);
    block_popups();
    click(&root, "[data-lw-control=\"print\"]");
    assert_eq!(alerted(), Some(LyricsLabels::default().popup_blocked));
}

#[wasm_bindgen_test]
fn test_lyrics_without_paragraphs_binds_nothing() {
    let root = lyrics_embed("lw-gt-browser-empty", "\n \n", None);
    assert!(root.query_selector("[data-lw-control]").unwrap().is_none());
    assert!(root.query_selector(".lw-para-wrap").unwrap().is_none());
}

#[wasm_bindgen_test]
async fn test_audio_switch_waits_for_widget_api() {
    js_sys::eval("delete window.SC;").unwrap();
    let root = lyrics_embed("lw-gt-browser-audio", THREE_VERSES, Some("about:blank"));
    let toggle = find(&root, "[data-lw-control=\"audioToggle\"]");
    assert_eq!(display(&toggle), "none");

    // widget API arrives after the runtime has run
    js_sys::eval(
        "window.lwSeeks = [];\
         window.SC = { Widget: function () { return {\
           getPosition: function (cb) { cb(42000); },\
           isPaused: function (cb) { cb(true); },\
           pause: function () {},\
           seekTo: function (ms) { window.lwSeeks.push(ms); },\
           play: function () {}\
         }; } };",
    )
    .unwrap();
    sleep(500).await;
    assert_eq!(display(&toggle), "");

    let vocal = find(&root, "[data-lw-track=\"vocal\"]");
    let instrumental = find(&root, "[data-lw-track=\"instrumental\"]");
    assert_eq!(display(&instrumental), "none");

    click(&root, "[data-lw-control=\"audioToggle\"]");
    assert_eq!(display(&vocal), "none");
    assert_eq!(display(&instrumental), "");
    let window = web_sys::window().unwrap();
    let seeks = js_sys::Reflect::get(&window, &"lwSeeks".into()).unwrap();
    assert_eq!(js_sys::JSON::stringify(&seeks).unwrap().as_string().unwrap(), "[42000]");
}

// Flashcard and word-list runtimes

#[wasm_bindgen_test]
fn test_flashcards_runtime_binds() {
    let cards: Vec<CardItem> = (0..24).map(CardItem::placeholder).collect();
    let html = Generator::with_container_id("lw-fc-browser")
        .generate(&EmbedRequest::Flashcards {
            cards,
            style: FlashcardStyle::default(),
        })
        .unwrap()
        .html;
    let root = mount(&html);

    assert_eq!(text(&root, "[data-lw-control=\"indicator\"]"), "Page 1 of 3");
    assert!(has_class(&find(&root, "[data-lw-control=\"prev\"]"), "off"));

    click(&root, ".lw-card");
    assert!(has_class(&find(&root, ".lw-card .lw-card-text"), "hide"));
    click(&root, ".lw-card");
    assert!(!has_class(&find(&root, ".lw-card .lw-card-text"), "hide"));

    block_popups();
    click(&root, "[data-lw-print=\"1\"]");
    assert_eq!(alerted(), Some(FlashcardLabels::default().popup_blocked));
}

#[wasm_bindgen_test]
fn test_word_list_modal_opens_and_closes() {
    let themes = lw_embed::models::default_themes();
    let first = &themes[0].lessons[0];
    let html = Generator::with_container_id("lw-wl-browser")
        .generate(&EmbedRequest::WordList {
            themes: themes.clone(),
            style: WordListStyle::default(),
        })
        .unwrap()
        .html;
    let root = mount(&html);

    assert_eq!(root.query_selector_all(".lw-theme-card").unwrap().length(), 2);
    click(&root, ".lw-lesson-item .lw-btn");
    let overlay = find(&root, "[data-lw-control=\"overlay\"]");
    assert!(has_class(&overlay, "lw-active"));
    assert_eq!(text(&root, "[data-lw-control=\"title\"]"), first.name);
    assert_eq!(
        root.query_selector_all("[data-lw-control=\"words\"] li").unwrap().length() as usize,
        first.words.len()
    );

    click(&root, "[data-lw-control=\"close\"]");
    assert!(!has_class(&overlay, "lw-active"));
}
