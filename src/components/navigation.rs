use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::mobile_menu::MobileMenu;
use crate::Route;

/// Scroll offset above which the bar gets its translucent backdrop.
pub const SCROLL_BACKDROP_THRESHOLD: f64 = 20.0;

/// Strictly greater-than: an offset of exactly 20 keeps the bar transparent.
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_BACKDROP_THRESHOLD
}

/// One navigable item: same-page anchor target, display label and an
/// optional Font Awesome glyph class. The list is built once and shared
/// with the mobile menu, so both render the same entries.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuEntry {
    pub target: AttrValue,
    pub label: AttrValue,
    pub icon: Option<AttrValue>,
}

impl MenuEntry {
    pub fn new(target: &'static str, label: &'static str, icon: Option<&'static str>) -> Self {
        Self {
            target: AttrValue::Static(target),
            label: AttrValue::Static(label),
            icon: icon.map(AttrValue::Static),
        }
    }
}

/// Which entry currently shows the underline indicator, if any.
///
/// Clearing is keyed by target: leaving entry A only clears the indicator
/// if A is still the hovered one. A fast pointer move from A to B can
/// deliver A's mouseleave after B's mouseenter, and an unconditional clear
/// would wipe B's freshly set indicator.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct HoverState(Option<AttrValue>);

impl HoverState {
    pub fn enter(&self, target: &AttrValue) -> Self {
        Self(Some(target.clone()))
    }

    pub fn leave(&self, target: &AttrValue) -> Self {
        if self.0.as_ref() == Some(target) {
            Self(None)
        } else {
            self.clone()
        }
    }

    pub fn is_hovered(&self, target: &AttrValue) -> bool {
        self.0.as_ref() == Some(target)
    }
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let scrolled = use_state(|| false);
    let hovered = use_state(HoverState::default);

    // Scroll listener lives exactly as long as the component: registered on
    // mount, removed in the effect destructor on unmount.
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scrolled = scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(offset) = win.scroll_y() {
                                    scrolled.set(is_scrolled(offset));
                                }
                            }
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    // Initial call so a page restored mid-scroll renders correctly.
                    if let Ok(offset) = window.scroll_y() {
                        scrolled.set(is_scrolled(offset));
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let entries: Rc<Vec<MenuEntry>> = use_memo(
        |_| {
            vec![
                MenuEntry::new("#features", "Features", Some("fas fa-code")),
                MenuEntry::new("#videos", "Videos", Some("fas fa-video")),
                MenuEntry::new("#users", "Users", Some("fas fa-circle-user")),
                MenuEntry::new("#blog", "Blog", Some("fas fa-book-open")),
                MenuEntry::new("#community", "Community", Some("fas fa-comments")),
            ]
        },
        (),
    );

    let nav_css = r#"
        .navbar {
            position: fixed;
            top: 0;
            left: 0;
            width: 100%;
            z-index: 50;
            background: transparent;
            transition: background 0.3s ease, box-shadow 0.3s ease;
        }
        .navbar.scrolled {
            background: rgba(0, 0, 0, 0.8);
            backdrop-filter: blur(16px);
            -webkit-backdrop-filter: blur(16px);
            box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
        }
        .navbar-inner {
            max-width: 1200px;
            margin: 0 auto;
            padding: 0 1rem;
            height: 5rem;
            display: flex;
            align-items: center;
            justify-content: space-between;
        }
        .nav-logo {
            font-size: 2rem;
            font-weight: 700;
            background: linear-gradient(45deg, #3b82f6, #9333ea);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .nav-links {
            display: none;
            align-items: center;
            gap: 2.5rem;
        }
        .nav-item {
            position: relative;
        }
        .nav-link {
            display: flex;
            align-items: center;
            gap: 0.5rem;
            padding: 0.75rem 1rem;
            font-size: 1.1rem;
            color: #d1d5db;
            border-radius: 0.5rem;
            transition: color 0.2s ease, background 0.2s ease;
        }
        .nav-link:hover {
            color: #ffffff;
            background: rgba(255, 255, 255, 0.05);
        }
        .nav-link i {
            color: #3b82f6;
        }
        .nav-underline {
            position: absolute;
            bottom: 0;
            left: 0;
            right: 0;
            height: 2px;
            background: linear-gradient(to right, #3b82f6, #9333ea);
            animation: underline-in 0.15s ease-out;
        }
        @keyframes underline-in {
            from {
                opacity: 0;
                transform: translateY(4px);
            }
            to {
                opacity: 1;
                transform: translateY(0);
            }
        }
        .nav-signin {
            display: none;
            position: relative;
            padding: 0.75rem 2rem;
            font-size: 1.1rem;
            font-weight: 500;
            color: #ffffff;
            border-radius: 0.5rem;
            background: linear-gradient(to right, #3b82f6, #a855f7);
            transition: transform 0.3s ease, filter 0.3s ease;
        }
        .nav-signin:hover {
            transform: scale(1.05);
            filter: brightness(1.1);
        }
        @media (min-width: 768px) {
            .nav-links {
                display: flex;
            }
            .nav-signin {
                display: inline-block;
            }
        }
    "#;

    html! {
        <nav class={if *scrolled { "navbar scrolled" } else { "navbar" }}>
            <style>{nav_css}</style>
            <div class="navbar-inner">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"OpenSox"}
                </Link<Route>>
                <div class="nav-links">
                    {
                        for entries.iter().map(|entry| {
                            let onmouseenter = {
                                let hovered = hovered.clone();
                                let target = entry.target.clone();
                                Callback::from(move |_: MouseEvent| {
                                    hovered.set(hovered.enter(&target));
                                })
                            };
                            let onmouseleave = {
                                let hovered = hovered.clone();
                                let target = entry.target.clone();
                                Callback::from(move |_: MouseEvent| {
                                    hovered.set(hovered.leave(&target));
                                })
                            };
                            html! {
                                <div class="nav-item" {onmouseenter} {onmouseleave}>
                                    <a href={entry.target.clone()} class="nav-link">
                                        if let Some(icon) = entry.icon.clone() {
                                            <i class={icon.to_string()}></i>
                                        }
                                        <span>{ entry.label.clone() }</span>
                                    </a>
                                    if hovered.is_hovered(&entry.target) {
                                        <div class="nav-underline"></div>
                                    }
                                </div>
                            }
                        })
                    }
                </div>
                <Link<Route> to={Route::SignIn} classes="nav-signin">
                    {"Sign In"}
                </Link<Route>>
                <MobileMenu entries={entries.clone()} />
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_requires_offset_strictly_above_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.1));
        assert!(is_scrolled(500.0));
    }

    #[test]
    fn entering_an_entry_marks_only_that_entry() {
        let a = AttrValue::Static("#features");
        let b = AttrValue::Static("#videos");
        let state = HoverState::default().enter(&a);
        assert!(state.is_hovered(&a));
        assert!(!state.is_hovered(&b));
    }

    #[test]
    fn moving_between_entries_never_leaves_two_hovered() {
        let a = AttrValue::Static("#features");
        let b = AttrValue::Static("#videos");
        let state = HoverState::default().enter(&a).enter(&b);
        assert!(!state.is_hovered(&a));
        assert!(state.is_hovered(&b));
    }

    #[test]
    fn leave_is_keyed_to_the_hovered_entry() {
        let a = AttrValue::Static("#features");
        let b = AttrValue::Static("#videos");
        // Fast pointer move: A's leave arrives after B's enter. B stays hovered.
        let state = HoverState::default().enter(&a).enter(&b).leave(&a);
        assert!(state.is_hovered(&b));
        // Leaving the entry that is actually hovered clears it.
        let state = state.leave(&b);
        assert!(!state.is_hovered(&a));
        assert!(!state.is_hovered(&b));
    }

    #[test]
    fn leave_without_hover_is_a_no_op() {
        let a = AttrValue::Static("#features");
        let state = HoverState::default().leave(&a);
        assert_eq!(state, HoverState::default());
    }

    #[test]
    fn entries_without_icon_are_representable() {
        let entry = MenuEntry::new("#blog", "Blog", None);
        assert!(entry.icon.is_none());
    }
}
