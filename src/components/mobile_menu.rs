use std::rc::Rc;

use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::navigation::MenuEntry;
use crate::Route;

/// Disclosure panel state. The toggle glyph is derived from this, never
/// tracked on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Selecting a destination always dismisses the panel.
    pub fn dismissed(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn toggle_icon(self) -> &'static str {
        match self {
            MenuState::Closed => "fas fa-bars",
            MenuState::Open => "fas fa-xmark",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    /// Same list the desktop bar renders, shared by reference.
    pub entries: Rc<Vec<MenuEntry>>,
}

#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    let state = use_state(MenuState::default);

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let next = state.toggled();
            debug!("mobile menu -> {:?}", next);
            state.set(next);
        })
    };
    let on_select = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.set(state.dismissed());
        })
    };

    let menu_css = r#"
        .mobile-menu {
            display: block;
        }
        @media (min-width: 768px) {
            .mobile-menu {
                display: none;
            }
        }
        .mobile-menu-toggle {
            background: none;
            border: none;
            padding: 0.5rem;
            font-size: 1.5rem;
            color: #d1d5db;
            cursor: pointer;
            transition: color 0.2s ease;
        }
        .mobile-menu-toggle:hover {
            color: #ffffff;
        }
        .mobile-menu-panel {
            position: absolute;
            top: 5rem;
            left: 0;
            right: 0;
            background: rgba(0, 0, 0, 0.95);
            backdrop-filter: blur(4px);
            -webkit-backdrop-filter: blur(4px);
            padding: 1rem;
            display: flex;
            flex-direction: column;
            gap: 1rem;
            animation: panel-in 0.2s ease-out;
        }
        @keyframes panel-in {
            from {
                opacity: 0;
                transform: translateY(-20px);
            }
            to {
                opacity: 1;
                transform: translateY(0);
            }
        }
        .mobile-menu-link {
            display: flex;
            align-items: center;
            gap: 0.5rem;
            color: #d1d5db;
            transition: color 0.2s ease;
        }
        .mobile-menu-link:hover {
            color: #ffffff;
        }
        .mobile-menu-link i {
            color: #3b82f6;
        }
        .mobile-menu-actions {
            display: flex;
            flex-direction: column;
            gap: 0.5rem;
            padding-top: 1rem;
            border-top: 1px solid #1f2937;
        }
        .mobile-signin {
            color: #d1d5db;
            text-align: left;
            transition: color 0.2s ease;
        }
        .mobile-signin:hover {
            color: #ffffff;
        }
        .mobile-get-started {
            background: #2563eb;
            color: #ffffff;
            padding: 0.5rem 1rem;
            border-radius: 9999px;
            font-size: 0.9rem;
            font-weight: 600;
            text-align: center;
            transition: background 0.2s ease;
        }
        .mobile-get-started:hover {
            background: #1d4ed8;
        }
    "#;

    html! {
        <div class="mobile-menu">
            <style>{menu_css}</style>
            <button
                class="mobile-menu-toggle"
                onclick={on_toggle}
                aria-expanded={state.is_open().to_string()}
                aria-label="Toggle menu"
            >
                <i class={state.toggle_icon()}></i>
            </button>
            // The panel is absent from the tree while closed, not hidden.
            if state.is_open() {
                <div class="mobile-menu-panel">
                    {
                        for props.entries.iter().map(|entry| html! {
                            <a
                                href={entry.target.clone()}
                                class="mobile-menu-link"
                                onclick={on_select.clone()}
                            >
                                if let Some(icon) = entry.icon.clone() {
                                    <i class={icon.to_string()}></i>
                                }
                                <span>{ entry.label.clone() }</span>
                            </a>
                        })
                    }
                    <div class="mobile-menu-actions">
                        <Link<Route> to={Route::SignIn} classes="mobile-signin">
                            {"Sign In"}
                        </Link<Route>>
                        <Link<Route> to={Route::SignIn} classes="mobile-get-started">
                            {"Get Started"}
                        </Link<Route>>
                    </div>
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
        assert_eq!(MenuState::Closed.toggled().toggled(), MenuState::Closed);

        // Even toggle counts always land back on Closed.
        let mut state = MenuState::Closed;
        for _ in 0..6 {
            state = state.toggled();
        }
        assert_eq!(state, MenuState::Closed);
    }

    #[test]
    fn selection_dismisses_from_any_state() {
        assert_eq!(MenuState::Open.dismissed(), MenuState::Closed);
        assert_eq!(MenuState::Closed.dismissed(), MenuState::Closed);
    }

    #[test]
    fn toggle_icon_follows_state() {
        assert_eq!(MenuState::Closed.toggle_icon(), "fas fa-bars");
        assert_eq!(MenuState::Open.toggle_icon(), "fas fa-xmark");
    }
}
