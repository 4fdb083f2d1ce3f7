//! Resume sections below the hero. Colors come from the theme's CSS
//! variables, so none of these take the mode as a prop.

use dioxus::prelude::*;
use shared_types::resume;

pub const ABOUT_ID: &str = "about";

/// Anchor ids in page order.
pub const SECTION_IDS: [&str; 6] = [
    ABOUT_ID,
    "education",
    "experience",
    "projects",
    "publications",
    "skills",
];

const EXTERNAL_REL: &str = "noopener noreferrer";

#[component]
pub fn ResumeSections() -> Element {
    rsx! {
        About {}
        Education {}
        Experience {}
        Projects {}
        Publications {}
        Skills {}
    }
}

#[component]
pub fn About() -> Element {
    let about = &resume().about;

    rsx! {
        section { id: ABOUT_ID, class: "resume-section",
            h2 { class: "section-title", "About" }
            p { class: "section-body", "{about}" }
        }
    }
}

#[component]
pub fn Education() -> Element {
    let education = &resume().education;

    rsx! {
        section { id: "education", class: "resume-section",
            h2 { class: "section-title", "Education" }
            div { class: "entry-list",
                for (i, edu) in education.iter().enumerate() {
                    div { key: "{i}",
                        h3 { class: "entry-title", "{edu.institution}" }
                        p { class: "entry-subtitle", "{edu.degree}" }
                        span { class: "entry-date", "{edu.date}" }
                        if let Some(details) = &edu.details {
                            ul { class: "entry-details",
                                for (j, detail) in details.iter().enumerate() {
                                    li { key: "{j}", "{detail}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Experience() -> Element {
    let experience = &resume().experience;

    rsx! {
        section { id: "experience", class: "resume-section",
            h2 { class: "section-title", "Experience" }
            div { class: "entry-list",
                for (i, exp) in experience.iter().enumerate() {
                    div { key: "{i}",
                        h3 { class: "entry-title",
                            if let Some(link) = &exp.link {
                                a {
                                    class: "entry-link",
                                    href: "{link}",
                                    target: "_blank",
                                    rel: EXTERNAL_REL,
                                    "{exp.title}"
                                }
                            } else {
                                "{exp.title}"
                            }
                        }
                        div { class: "entry-meta",
                            span { class: "entry-date", "{exp.date}" }
                            if let Some(location) = &exp.location {
                                span { class: "entry-location", "{location}" }
                            }
                        }
                        ul { class: "entry-details",
                            for (j, detail) in exp.details.iter().enumerate() {
                                li { key: "{j}", "{detail}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let projects = &resume().projects;

    rsx! {
        section { id: "projects", class: "resume-section",
            h2 { class: "section-title", "Projects" }
            div { class: "entry-list",
                for (i, project) in projects.iter().enumerate() {
                    div { key: "{i}",
                        h3 { class: "entry-title",
                            if let Some(link) = &project.link {
                                a {
                                    class: "entry-link",
                                    href: "{link}",
                                    target: "_blank",
                                    rel: EXTERNAL_REL,
                                    "{project.name}"
                                    ExternalLinkIcon {}
                                }
                            } else {
                                "{project.name}"
                            }
                        }
                        p { class: "entry-tech", "{project.tech}" }
                        p { class: "entry-description", "{project.description}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Publications() -> Element {
    let publications = &resume().publications;

    rsx! {
        section { id: "publications", class: "resume-section",
            h2 { class: "section-title", "Publications" }
            div { class: "entry-list",
                for (i, publication) in publications.iter().enumerate() {
                    div { key: "{i}", class: "publication-card",
                        h3 { class: "entry-title",
                            a {
                                class: "entry-link",
                                href: "{publication.link}",
                                target: "_blank",
                                rel: EXTERNAL_REL,
                                "{publication.title}"
                            }
                        }
                        p { class: "publication-authors", "{publication.authors}" }
                        div { class: "entry-meta",
                            span { class: "publication-venue", "{publication.conference}" }
                            span { class: "entry-date", "{publication.date}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    let skills = &resume().skills;

    rsx! {
        section { id: "skills", class: "resume-section",
            h2 { class: "section-title", "Skills" }
            div { class: "skill-list",
                for (i, skill) in skills.iter().enumerate() {
                    span { key: "{i}", class: "skill-pill", "{skill}" }
                }
            }
        }
    }
}

#[component]
fn ExternalLinkIcon() -> Element {
    rsx! {
        svg {
            width: "16",
            height: "16",
            fill: "currentColor",
            view_box: "0 0 20 20",
            xmlns: "http://www.w3.org/2000/svg",
            path { d: "M11 3a1 1 0 100 2h2.586l-6.293 6.293a1 1 0 101.414 1.414L15 6.414V9a1 1 0 102 0V4a1 1 0 00-1-1h-5z" }
            path { d: "M5 5a2 2 0 00-2 2v8a2 2 0 002 2h8a2 2 0 002-2v-3a1 1 0 10-2 0v3H5V7h3a1 1 0 000-2H5z" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_anchors_are_unique_and_start_with_about() {
        let unique: HashSet<_> = SECTION_IDS.iter().collect();
        assert_eq!(unique.len(), SECTION_IDS.len());
        assert_eq!(SECTION_IDS[0], ABOUT_ID);
    }

    #[test]
    fn every_section_has_content_to_render() {
        let resume = resume();
        assert!(!resume.about.is_empty());
        assert!(!resume.education.is_empty());
        assert!(!resume.experience.is_empty());
        assert!(!resume.projects.is_empty());
        assert!(!resume.publications.is_empty());
        assert!(!resume.skills.is_empty());
    }
}
