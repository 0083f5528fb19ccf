use yew::prelude::*;

use super::ExternalLink;
use crate::frontend::anim::reveal::{Reveal, RevealStyle};

struct Project {
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    github: &'static str,
    image: &'static str,
}

const PROJECTS: [Project; 6] = [
    Project {
        title: "KIIT-HUB",
        description: "A peer-to-peer marketplace for KIIT University students and faculty, \
                      enabling easy buying and selling of items within the campus community.",
        tags: &["React", "Node.js", "MongoDB"],
        github: "https://github.com/HarshShandilya16/KIIT-HUB",
        image: "/images/projects/kiit-hub.svg",
    },
    Project {
        title: "Donate-Blood",
        description: "A platform to connect blood donors with recipients in need. Built with \
                      PHP for backend functionality.",
        tags: &["PHP", "MySQL", "Bootstrap"],
        github: "https://github.com/HarshShandilya16/Donate-Blood",
        image: "/images/projects/donate-blood.svg",
    },
    Project {
        title: "Detecting-Pixelated-Image",
        description: "An AI-based tool for detecting and correcting pixelated images.",
        tags: &["Python", "Scikit-Learn", "NumPy"],
        github: "https://github.com/HarshShandilya16/Detecting-Pixelated-Image-Correcting-it",
        image: "/images/projects/pixelated.svg",
    },
    Project {
        title: "Pong Game",
        description: "A classic Pong game recreation using JavaScript.",
        tags: &["JavaScript", "Canvas"],
        github: "https://github.com/HarshShandilya16/Pong-game",
        image: "/images/projects/pong.svg",
    },
    Project {
        title: "PlayTime-Planer",
        description: "A scheduling application for planning activities and play time.",
        tags: &["JavaScript", "HTML", "CSS"],
        github: "https://github.com/HarshShandilya16/PlayTime-Planer",
        image: "/images/projects/playtime.svg",
    },
    Project {
        title: "Nurturing-Intellect",
        description: "Aims to provide quality education and facilities to underprivileged \
                      children through financial support.",
        tags: &["PHP", "MySQL", "jQuery"],
        github: "https://github.com/HarshShandilya16/Nurturing-Intellect",
        image: "/images/projects/nurturing.svg",
    },
];

#[function_component(ProjectsSection)]
pub fn projects_section() -> Html {
    html! {
        <section id="projects" class="section projects">
            <div class="container">
                <Reveal>
                    <header class="section-header">
                        <h2 class="section-title">{"My Projects"}</h2>
                        <p class="section-subtitle">{"Things I've built"}</p>
                    </header>
                </Reveal>

                <div class="project-grid">
                    { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                        <Reveal
                            key={project.title}
                            delay_ms={(index as u32 % 3) * 120}
                            style={RevealStyle::default().with_scale()}
                        >
                            <article class="project-card">
                                <div class="project-media">
                                    <img src={project.image} alt={project.title} loading="lazy" />
                                </div>
                                <div class="project-body">
                                    <h3 class="project-title">{project.title}</h3>
                                    <p class="project-description">{project.description}</p>
                                    <ul class="project-tags">
                                        { for project.tags.iter().map(|tag| html! {
                                            <li class="project-tag">{*tag}</li>
                                        }) }
                                    </ul>
                                    <ExternalLink
                                        class="project-link"
                                        href={project.github}
                                        label="View on GitHub"
                                    />
                                </div>
                            </article>
                        </Reveal>
                    }) }
                </div>

                <Reveal delay_ms={200}>
                    <p class="projects-more">
                        <ExternalLink
                            href="https://github.com/HarshShandilya16"
                            label="More on GitHub"
                        />
                    </p>
                </Reveal>
            </div>
        </section>
    }
}
