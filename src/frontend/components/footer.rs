use yew::prelude::*;
use yew_router::prelude::*;

use super::ExternalLink;
use crate::frontend::router::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <div class="footer-brand">
                    <span class="logo">{"HS"}</span>
                    <p class="footer-tagline">{"Building for the web, end to end."}</p>
                </div>

                <nav class="footer-nav" aria-label="Footer">
                    <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                    <Link<Route> to={Route::About}>{"About"}</Link<Route>>
                    <Link<Route> to={Route::Projects}>{"Projects"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                </nav>

                <div class="footer-social">
                    <ExternalLink
                        href="https://github.com/HarshShandilya16"
                        label="GitHub"
                    />
                    <ExternalLink
                        href="https://www.linkedin.com/in/harsh-shandilya-b63b87358"
                        label="LinkedIn"
                    />
                </div>
            </div>
            <p class="footer-copyright">
                {format!("© {year} Harsh Shandilya. All rights reserved.")}
            </p>
        </footer>
    }
}
