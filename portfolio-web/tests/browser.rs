#![cfg(target_arch = "wasm32")]

use portfolio_web::theme::{apply_theme_to_document, LocalStorage, PreferenceStorage, THEME_KEY};
use portfolio_web::trail::{CanvasError, CanvasSurface};
use shared_types::ColorMode;
use trail_engine::{Surface, Viewport};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn insert(tag: &str, id: &str) -> web_sys::Element {
    let document = document();
    let element = document.create_element(tag).unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

#[wasm_bindgen_test]
fn missing_canvas_is_reported() {
    let err = CanvasSurface::from_element_id("no-such-canvas").err().unwrap();
    assert!(matches!(err, CanvasError::NotFound(id) if id == "no-such-canvas"));
}

#[wasm_bindgen_test]
fn non_canvas_element_is_rejected() {
    insert("div", "trail-test-div");
    let err = CanvasSurface::from_element_id("trail-test-div").err().unwrap();
    assert!(matches!(err, CanvasError::NotCanvas(_)));
}

#[wasm_bindgen_test]
fn canvas_surface_resizes_backing_store() {
    insert("canvas", "trail-test-canvas");
    let mut surface = CanvasSurface::from_element_id("trail-test-canvas").unwrap();
    surface.resize(Viewport::new(320, 200));
    surface.clear();
    assert_eq!(surface.canvas().width(), 320);
    assert_eq!(surface.canvas().height(), 200);
}

#[wasm_bindgen_test]
fn theme_is_mirrored_to_document_root() {
    apply_theme_to_document(ColorMode::Light);
    let root = document().document_element().unwrap();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));
}

#[wasm_bindgen_test]
fn local_storage_round_trips_theme() {
    let mut storage = LocalStorage::open().unwrap();
    storage.save(THEME_KEY, "dark").unwrap();
    assert_eq!(storage.load(THEME_KEY).unwrap().as_deref(), Some("dark"));
}
