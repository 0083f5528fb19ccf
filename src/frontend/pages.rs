//! Route bodies: thin compositions of the section components.

use yew::prelude::*;
use yew_router::prelude::*;

use super::components::about::AboutSection;
use super::components::certifications::CertificationsSection;
use super::components::contact::ContactSection;
use super::components::hero::Hero;
use super::components::projects::ProjectsSection;
use super::components::skills::SkillsSection;
use super::router::Route;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <>
            <Hero />
            <AboutSection />
            <SkillsSection />
            <ProjectsSection />
            <CertificationsSection />
            <ContactSection />
        </>
    }
}

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <>
            <AboutSection />
            <SkillsSection />
            <CertificationsSection />
        </>
    }
}

#[function_component(ProjectsPage)]
pub fn projects_page() -> Html {
    html! { <ProjectsSection /> }
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    html! { <ContactSection /> }
}

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="section not-found">
            <div class="container">
                <h1 class="not-found-code">{"404"}</h1>
                <p class="not-found-text">{"This page drifted out of bounds."}</p>
                <Link<Route> classes="btn btn-primary" to={Route::Home}>
                    {"Back to home"}
                </Link<Route>>
            </div>
        </section>
    }
}
