use yew::prelude::*;

use crate::frontend::anim::reveal::Reveal;

struct Certification {
    title: &'static str,
    issuer: &'static str,
    date: &'static str,
    image: &'static str,
}

const CERTIFICATIONS: [Certification; 5] = [
    Certification {
        title: "Intel Unnati Industrial Training Program",
        issuer: "Intel",
        date: "July 2024",
        image: "/images/certs/intel.svg",
    },
    Certification {
        title: "AWS Cloud Architecture",
        issuer: "AWS",
        date: "December 2024",
        image: "/images/certs/aws.svg",
    },
    Certification {
        title: "AWS Cloud Foundations",
        issuer: "AWS",
        date: "November 2024",
        image: "/images/certs/aws.svg",
    },
    Certification {
        title: "AICTE Virtual Internship",
        issuer: "AICTE",
        date: "December 2024",
        image: "/images/certs/aicte.svg",
    },
    Certification {
        title: "Snowflake Certification",
        issuer: "Udemy",
        date: "February 2025",
        image: "/images/certs/udemy.svg",
    },
];

#[function_component(CertificationsSection)]
pub fn certifications_section() -> Html {
    let active = use_state_eq(|| 0usize);
    let count = CERTIFICATIONS.len();

    let on_prev = {
        let active = active.clone();
        Callback::from(move |_| active.set((*active + count - 1) % count))
    };
    let on_next = {
        let active = active.clone();
        Callback::from(move |_| active.set((*active + 1) % count))
    };

    let featured = &CERTIFICATIONS[*active];

    html! {
        <section id="certifications" class="section certifications">
            <div class="container">
                <Reveal>
                    <header class="section-header">
                        <h2 class="section-title">{"Certifications"}</h2>
                        <p class="section-subtitle">{"Credentials and trainings"}</p>
                    </header>
                </Reveal>

                <Reveal delay_ms={150}>
                    <div class="cert-carousel">
                        <button
                            class="cert-nav"
                            type="button"
                            aria-label="Previous certification"
                            onclick={on_prev}
                        >
                            <span aria-hidden="true">{"‹"}</span>
                        </button>

                        <figure class="cert-featured">
                            <img src={featured.image} alt={featured.title} loading="lazy" />
                            <figcaption>
                                <h3 class="cert-title">{featured.title}</h3>
                                <p class="cert-meta">
                                    <span class="cert-issuer">{featured.issuer}</span>
                                    <span class="cert-date">{featured.date}</span>
                                </p>
                            </figcaption>
                        </figure>

                        <button
                            class="cert-nav"
                            type="button"
                            aria-label="Next certification"
                            onclick={on_next}
                        >
                            <span aria-hidden="true">{"›"}</span>
                        </button>
                    </div>
                </Reveal>

                <div class="cert-grid">
                    { for CERTIFICATIONS.iter().enumerate().map(|(index, cert)| {
                        let is_active = *active == index;
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_| active.set(index))
                        };
                        html! {
                            <Reveal key={index} delay_ms={(index as u32) * 100}>
                                <button
                                    class={classes!("cert-card", is_active.then_some("is-active"))}
                                    type="button"
                                    onclick={onclick}
                                >
                                    <span class="cert-card-title">{cert.title}</span>
                                    <span class="cert-card-issuer">{cert.issuer}</span>
                                </button>
                            </Reveal>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
