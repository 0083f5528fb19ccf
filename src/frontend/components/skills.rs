use yew::prelude::*;

use crate::frontend::anim::reveal::Reveal;

struct Skill {
    name: &'static str,
    level: u8,
    color: &'static str,
}

struct SkillCategory {
    name: &'static str,
    skills: &'static [Skill],
}

const CATEGORIES: [SkillCategory; 5] = [
    SkillCategory {
        name: "Languages",
        skills: &[
            Skill { name: "C++", level: 90, color: "#00599C" },
            Skill { name: "C", level: 85, color: "#283593" },
            Skill { name: "Java", level: 80, color: "#f89820" },
            Skill { name: "Python", level: 75, color: "#306998" },
            Skill { name: "JavaScript", level: 85, color: "#F0DB4F" },
            Skill { name: "HTML/CSS", level: 90, color: "#E34F26" },
        ],
    },
    SkillCategory {
        name: "Frontend",
        skills: &[
            Skill { name: "React", level: 85, color: "#61DAFB" },
            Skill { name: "Tailwind CSS", level: 80, color: "#38B2AC" },
            Skill { name: "Bootstrap", level: 85, color: "#7952B3" },
            Skill { name: "jQuery", level: 75, color: "#0769AD" },
            Skill { name: "Responsive Design", level: 90, color: "#FF6B6B" },
            Skill { name: "CSS3 Animations", level: 80, color: "#FF9A8B" },
        ],
    },
    SkillCategory {
        name: "Backend",
        skills: &[
            Skill { name: "Node.js", level: 75, color: "#68A063" },
            Skill { name: "Express.js", level: 70, color: "#444444" },
            Skill { name: "PHP", level: 80, color: "#8993BE" },
            Skill { name: "RESTful APIs", level: 85, color: "#FF6B6B" },
            Skill { name: "Session Management", level: 75, color: "#7952B3" },
            Skill { name: "Computer Networks", level: 80, color: "#0078D7" },
        ],
    },
    SkillCategory {
        name: "Database",
        skills: &[
            Skill { name: "MySQL", level: 85, color: "#4479A1" },
            Skill { name: "MongoDB", level: 80, color: "#4DB33D" },
            Skill { name: "Database Design", level: 75, color: "#FF9A8B" },
            Skill { name: "SQL Queries", level: 85, color: "#FF6B6B" },
            Skill { name: "Data Modeling", level: 70, color: "#38B2AC" },
            Skill { name: "CRUD Operations", level: 90, color: "#7952B3" },
        ],
    },
    SkillCategory {
        name: "Tools & Others",
        skills: &[
            Skill { name: "Git & GitHub", level: 90, color: "#F05032" },
            Skill { name: "AWS Services", level: 75, color: "#FF9900" },
            Skill { name: "NumPy", level: 65, color: "#4DABCF" },
            Skill { name: "Scikit-Learn", level: 60, color: "#F89939" },
            Skill { name: "DSA", level: 85, color: "#0078D7" },
            Skill { name: "Problem Solving", level: 90, color: "#FF6B6B" },
        ],
    },
];

#[function_component(SkillsSection)]
pub fn skills_section() -> Html {
    let active = use_state_eq(|| 0usize);

    html! {
        <section id="skills" class="section skills">
            <div class="container">
                <Reveal>
                    <header class="section-header">
                        <h2 class="section-title">{"My Skills"}</h2>
                        <p class="section-subtitle">{"Technologies I work with"}</p>
                    </header>
                </Reveal>

                <Reveal delay_ms={150}>
                    <div class="skill-tabs" role="tablist" aria-label="Skill categories">
                        { for CATEGORIES.iter().enumerate().map(|(index, category)| {
                            let is_active = *active == index;
                            let onclick = {
                                let active = active.clone();
                                Callback::from(move |_| active.set(index))
                            };
                            html! {
                                <button
                                    class={classes!("skill-tab", is_active.then_some("is-active"))}
                                    type="button"
                                    role="tab"
                                    aria-selected={is_active.to_string()}
                                    onclick={onclick}
                                >
                                    {category.name}
                                </button>
                            }
                        }) }
                    </div>
                </Reveal>

                <div class="skill-bars" role="tabpanel">
                    { for CATEGORIES[*active].skills.iter().enumerate().map(|(index, skill)| html! {
                        <Reveal key={skill.name} delay_ms={(index as u32) * 80}>
                            <div class="skill-bar">
                                <div class="skill-bar-head">
                                    <span class="skill-name">{skill.name}</span>
                                    <span class="skill-percent">{format!("{}%", skill.level)}</span>
                                </div>
                                <div class="skill-track">
                                    <div
                                        class="skill-fill"
                                        style={format!(
                                            "width: {}%; background-color: {};",
                                            skill.level, skill.color,
                                        )}
                                    ></div>
                                </div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
