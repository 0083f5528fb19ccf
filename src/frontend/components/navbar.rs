//! Fixed top navigation with section tracking and the theme toggle.

use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::frontend::anim::EventHook;
use crate::frontend::router::Route;
use crate::store::ThemeMode;

const SECTION_IDS: [&str; 6] = [
    "hero",
    "about",
    "skills",
    "projects",
    "certifications",
    "contact",
];
/// Navbar condenses past this scroll offset.
const SCROLL_THRESHOLD: f64 = 50.0;
/// A section is "active" while it straddles this line below the top edge.
const ACTIVE_LINE: f64 = 100.0;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub theme: ThemeMode,
    pub on_toggle: Callback<()>,
}

fn active_section() -> Option<&'static str> {
    let document = window()?.document()?;
    SECTION_IDS.into_iter().find(|id| {
        document
            .get_element_by_id(id)
            .map(|element| {
                let rect = element.get_bounding_client_rect();
                rect.top() <= ACTIVE_LINE && rect.bottom() >= ACTIVE_LINE
            })
            .unwrap_or(false)
    })
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state_eq(|| false);
    let scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| "hero");

    {
        let scrolled = scrolled.clone();
        let active = active.clone();
        use_effect_with((), move |_| {
            let on_scroll = {
                let scrolled = scrolled.clone();
                let active = active.clone();
                move || {
                    let y = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    scrolled.set(y > SCROLL_THRESHOLD);
                    if let Some(section) = active_section() {
                        active.set(section);
                    }
                }
            };
            on_scroll();

            let hook = window().map(|w| {
                EventHook::listen(w.as_ref(), "scroll", move |_| on_scroll())
            });
            move || drop(hook)
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };
    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_| on_toggle.emit(()))
    };

    let nav_items = [
        ("Home", "#hero"),
        ("About", "#about"),
        ("Skills", "#skills"),
        ("Projects", "#projects"),
        ("Certifications", "#certifications"),
        ("Contact", "#contact"),
    ];

    html! {
        <header class={classes!("site-header", (*scrolled).then_some("is-scrolled"))}>
            <div class="site-header-inner">
                <Link<Route> classes="logo-link" to={Route::Home}>
                    <span class="logo">{"HS"}</span>
                </Link<Route>>

                <nav
                    class={classes!("site-nav", (*menu_open).then_some("is-open"))}
                    aria-label="Primary"
                >
                    <ul class="nav-items">
                        { for nav_items.iter().map(|(label, href)| {
                            let is_active = *active == &href[1..];
                            html! {
                                <li>
                                    <a
                                        class={classes!("nav-link", is_active.then_some("is-active"))}
                                        href={*href}
                                        onclick={close_menu.clone()}
                                    >
                                        {*label}
                                    </a>
                                </li>
                            }
                        }) }
                    </ul>
                </nav>

                <div class="header-actions">
                    <button
                        class="theme-toggle"
                        type="button"
                        aria-label={props.theme.toggle_label()}
                        aria-pressed={props.theme.pressed().to_string()}
                        onclick={on_toggle}
                    >
                        <span aria-hidden="true">{props.theme.icon()}</span>
                    </button>
                    <button
                        class="menu-toggle"
                        type="button"
                        aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                        aria-expanded={menu_open.to_string()}
                        onclick={toggle_menu}
                    >
                        <span aria-hidden="true">{if *menu_open { "✕" } else { "☰" }}</span>
                    </button>
                </div>
            </div>
        </header>
    }
}
