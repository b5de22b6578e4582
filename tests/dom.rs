#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement};
use yew::prelude::*;
use yew_router::prelude::*;

use opensox::components::mobile_menu::MobileMenu;
use opensox::components::navigation::{MenuEntry, Navigation};

wasm_bindgen_test_configure!(run_in_browser);

fn test_entries() -> Rc<Vec<MenuEntry>> {
    Rc::new(vec![
        MenuEntry::new("#features", "Features", None),
        MenuEntry::new("#videos", "Videos", None),
    ])
}

#[derive(Properties, PartialEq)]
struct MenuHarnessProps {
    entries: Rc<Vec<MenuEntry>>,
}

// Link<Route> needs a router ancestor, so the harness wraps the component
// the way the app shell does.
#[function_component(MenuHarness)]
fn menu_harness(props: &MenuHarnessProps) -> Html {
    html! {
        <BrowserRouter>
            <MobileMenu entries={props.entries.clone()} />
        </BrowserRouter>
    }
}

#[function_component(NavHarness)]
fn nav_harness() -> Html {
    html! {
        <BrowserRouter>
            <Navigation />
        </BrowserRouter>
    }
}

fn mount_root() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn link_count(root: &Element) -> u32 {
    root.query_selector_all(".mobile-menu-link").unwrap().length()
}

fn click(root: &Element, selector: &str) {
    root.query_selector(selector)
        .unwrap()
        .expect("element not found")
        .unchecked_into::<HtmlElement>()
        .click();
}

#[wasm_bindgen_test]
async fn closed_menu_exposes_no_entries() {
    let root = mount_root();
    let _handle = yew::Renderer::<MenuHarness>::with_root_and_props(
        root.clone(),
        MenuHarnessProps {
            entries: test_entries(),
        },
    )
    .render();
    TimeoutFuture::new(50).await;

    assert_eq!(link_count(&root), 0);
    assert!(root.query_selector(".mobile-menu-panel").unwrap().is_none());
    let icon = root
        .query_selector(".mobile-menu-toggle i")
        .unwrap()
        .expect("toggle icon");
    assert!(icon.class_name().contains("fa-bars"));
}

#[wasm_bindgen_test]
async fn toggling_exposes_entries_in_order() {
    let root = mount_root();
    let _handle = yew::Renderer::<MenuHarness>::with_root_and_props(
        root.clone(),
        MenuHarnessProps {
            entries: test_entries(),
        },
    )
    .render();
    TimeoutFuture::new(50).await;

    click(&root, ".mobile-menu-toggle");
    TimeoutFuture::new(50).await;

    let links = root.query_selector_all(".mobile-menu-link").unwrap();
    assert_eq!(links.length(), 2);
    let first = links.get(0).unwrap().text_content().unwrap();
    let second = links.get(1).unwrap().text_content().unwrap();
    assert!(first.contains("Features"));
    assert!(second.contains("Videos"));

    let icon = root
        .query_selector(".mobile-menu-toggle i")
        .unwrap()
        .expect("toggle icon");
    assert!(icon.class_name().contains("fa-xmark"));
}

#[wasm_bindgen_test]
async fn double_toggle_returns_to_closed() {
    let root = mount_root();
    let _handle = yew::Renderer::<MenuHarness>::with_root_and_props(
        root.clone(),
        MenuHarnessProps {
            entries: test_entries(),
        },
    )
    .render();
    TimeoutFuture::new(50).await;

    click(&root, ".mobile-menu-toggle");
    TimeoutFuture::new(50).await;
    click(&root, ".mobile-menu-toggle");
    TimeoutFuture::new(50).await;

    assert_eq!(link_count(&root), 0);
}

#[wasm_bindgen_test]
async fn selecting_an_entry_dismisses_the_panel() {
    let root = mount_root();
    let _handle = yew::Renderer::<MenuHarness>::with_root_and_props(
        root.clone(),
        MenuHarnessProps {
            entries: test_entries(),
        },
    )
    .render();
    TimeoutFuture::new(50).await;

    click(&root, ".mobile-menu-toggle");
    TimeoutFuture::new(50).await;
    assert_eq!(link_count(&root), 2);

    click(&root, ".mobile-menu-link");
    TimeoutFuture::new(50).await;

    assert_eq!(link_count(&root), 0);
}

#[wasm_bindgen_test]
async fn unmounted_navigation_ignores_scroll_events() {
    let root = mount_root();
    let handle = yew::Renderer::<NavHarness>::with_root(root.clone()).render();
    TimeoutFuture::new(50).await;
    assert!(root.query_selector(".navbar").unwrap().is_some());

    handle.destroy();
    TimeoutFuture::new(50).await;
    assert!(root.query_selector(".navbar").unwrap().is_none());

    // The scroll listener is removed with the component; dispatching a scroll
    // afterwards must not touch the torn-down tree.
    let window = web_sys::window().unwrap();
    let event = Event::new("scroll").unwrap();
    window.dispatch_event(&event).unwrap();
    TimeoutFuture::new(50).await;

    assert!(root.query_selector(".navbar").unwrap().is_none());
    assert_eq!(root.child_element_count(), 0);
}
