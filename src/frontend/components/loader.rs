use yew::prelude::*;

/// Initial splash shown while the app "boots". Skipped entirely for users
/// who prefer reduced motion.
#[function_component(Loader)]
pub fn loader() -> Html {
    html! {
        <div class="loader" role="status" aria-label="Loading">
            <div class="loader-mark">
                <span class="loader-logo">{"HS"}</span>
                <div class="loader-ring" aria-hidden="true"></div>
            </div>
        </div>
    }
}
