use yew::prelude::*;

use crate::frontend::anim::reveal::{Reveal, RevealDirection, RevealStyle};

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let highlights = [
        ("B.Tech CSE", "KIIT University, Bhubaneswar"),
        ("Full Stack", "React, Node.js, PHP, MySQL"),
        ("Focus", "Performance and user satisfaction"),
    ];

    html! {
        <section id="about" class="section about">
            <div class="container">
                <Reveal>
                    <header class="section-header">
                        <h2 class="section-title">{"About Me"}</h2>
                        <p class="section-subtitle">{"A quick introduction"}</p>
                    </header>
                </Reveal>

                <div class="about-grid">
                    <Reveal direction={RevealDirection::Left} delay_ms={150}>
                        <figure class="about-portrait">
                            <img
                                src="/images/profile.svg"
                                alt="Portrait of Harsh Shandilya"
                                loading="lazy"
                            />
                        </figure>
                    </Reveal>

                    <Reveal direction={RevealDirection::Right} delay_ms={300}>
                        <div class="about-copy">
                            <p>
                                {"I'm a Computer Science undergraduate at KIIT University who \
                                  enjoys building things for the web end to end: interfaces \
                                  people actually like using, and the services behind them."}
                            </p>
                            <p>
                                {"Most of my recent work pairs React frontends with PHP or \
                                  Node.js backends over MySQL, with a side interest in applied \
                                  machine learning. When I'm not shipping coursework or side \
                                  projects, I'm usually picking apart how something on the web \
                                  was made."}
                            </p>
                            <ul class="about-highlights">
                                { for highlights.iter().map(|(title, detail)| html! {
                                    <li>
                                        <span class="highlight-title">{*title}</span>
                                        <span class="highlight-detail">{*detail}</span>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    </Reveal>
                </div>

                <Reveal delay_ms={450} style={RevealStyle::default().with_scale()}>
                    <div class="about-metric">
                        <p class="metric-value">{"2026"}</p>
                        <p class="metric-label">{"expected graduation year"}</p>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
