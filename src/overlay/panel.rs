//! Projection of `(active section, language)` onto the overlay panel.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::content::translations::{CvLink, Degree, Translations};
use crate::scene::deck::CardId;

/// Glyph on the mail link.
const MAIL_ICON: &str = "✉";
/// Glyph on the profile links.
const PROFILE_ICON: &str = "◈";

/// Top bar: who the site is about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderView {
    /// Owner's name.
    pub name: String,
    /// Role line.
    pub role: String,
}

/// Bottom bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterView {
    /// Credit line.
    pub made: String,
    /// Technology line.
    pub tech: String,
}

/// Titled skill list of the about block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCard {
    /// Heading.
    pub title: String,
    /// Entries.
    pub items: Vec<String>,
}

/// One outgoing link of the contact block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    /// Leading glyph.
    pub icon: String,
    /// Visible text.
    pub label: String,
    /// Target URL.
    pub href: String,
}

/// Body of the open panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "section", rename_all = "lowercase")]
pub enum PanelContent {
    /// Biography and skills.
    About {
        /// Heading.
        title: String,
        /// Introductory paragraph.
        intro: String,
        /// Skill groups in display order.
        skills: Vec<SkillCard>,
    },
    /// Education and CV.
    Formations {
        /// Heading.
        title: String,
        /// Lead paragraph.
        description: String,
        /// Degrees, most recent first.
        degrees: Vec<Degree>,
        /// CV download.
        cv: CvLink,
    },
    /// Mail and profile links.
    Contact {
        /// Heading.
        title: String,
        /// Lead paragraph.
        description: String,
        /// Mail, GitHub, LinkedIn.
        links: Vec<ContactLink>,
    },
}

impl PanelContent {
    /// Content block of `id` in the language of `t`.
    pub fn for_section(id: CardId, t: &Translations) -> Self {
        match id {
            CardId::About => Self::About {
                title: t.about.title.clone(),
                intro: t.about.intro.clone(),
                skills: t
                    .about
                    .skills
                    .groups()
                    .into_iter()
                    .map(|g| SkillCard {
                        title: g.title.clone(),
                        items: g.items.clone(),
                    })
                    .collect(),
            },
            CardId::Formations => Self::Formations {
                title: t.formations.title.clone(),
                description: t.formations.description.clone(),
                degrees: t.formations.degrees.clone(),
                cv: t.formations.cv.clone(),
            },
            CardId::Contact => {
                let c = &t.contact;
                Self::Contact {
                    title: c.title.clone(),
                    description: c.description.clone(),
                    links: vec![
                        ContactLink {
                            icon: MAIL_ICON.to_owned(),
                            label: c.email.clone(),
                            href: format!("mailto:{}", c.email),
                        },
                        ContactLink {
                            icon: PROFILE_ICON.to_owned(),
                            label: c.github.clone(),
                            href: c.github_url.clone(),
                        },
                        ContactLink {
                            icon: PROFILE_ICON.to_owned(),
                            label: c.linkedin.clone(),
                            href: c.linkedin_url.clone(),
                        },
                    ],
                }
            }
        }
    }

    /// Heading of the block.
    pub fn title(&self) -> &str {
        match self {
            Self::About { title, .. }
            | Self::Formations { title, .. }
            | Self::Contact { title, .. } => title,
        }
    }
}

/// Everything the overlay shows for one `(active section, language)` pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelView {
    /// Always shown.
    pub header: HeaderView,
    /// Always shown.
    pub footer: FooterView,
    /// Modal body; `None` while the modal is hidden.
    pub content: Option<PanelContent>,
}

impl PanelView {
    /// Project the overlay state.
    pub fn project(active: Option<CardId>, t: &Translations) -> Self {
        Self {
            header: HeaderView {
                name: t.hero.name.clone(),
                role: t.hero.title.clone(),
            },
            footer: FooterView {
                made: t.footer.made.clone(),
                tech: t.footer.tech.clone(),
            },
            content: active.map(|id| PanelContent::for_section(id, t)),
        }
    }

    /// `true` when the modal is visible.
    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    /// Plain-text rendition for terminals.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "{} · {}", self.header.name, self.header.role)?;
        writeln!(out)?;
        match &self.content {
            None => {}
            Some(PanelContent::About {
                title,
                intro,
                skills,
            }) => {
                write_heading(out, title)?;
                writeln!(out, "{intro}")?;
                for group in skills {
                    writeln!(out)?;
                    writeln!(out, "  {}", group.title)?;
                    for item in &group.items {
                        writeln!(out, "    - {item}")?;
                    }
                }
                writeln!(out)?;
            }
            Some(PanelContent::Formations {
                title,
                description,
                degrees,
                cv,
            }) => {
                write_heading(out, title)?;
                writeln!(out, "{description}")?;
                for d in degrees {
                    writeln!(out)?;
                    writeln!(out, "  {}  {} · {}", d.period, d.school, d.location)?;
                    writeln!(out, "  {}", d.title)?;
                    for h in &d.highlights {
                        writeln!(out, "    - {h}")?;
                    }
                }
                writeln!(out)?;
                writeln!(out, "↓ {} ({})", cv.label, cv.file_name)?;
                writeln!(out)?;
            }
            Some(PanelContent::Contact {
                title,
                description,
                links,
            }) => {
                write_heading(out, title)?;
                writeln!(out, "{description}")?;
                writeln!(out)?;
                for l in links {
                    writeln!(out, "  {} {}  <{}>", l.icon, l.label, l.href)?;
                }
                writeln!(out)?;
            }
        }
        writeln!(out, "{} · {}", self.footer.made, self.footer.tech)
    }
}

fn write_heading(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "─".repeat(title.chars().count().max(3)))
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/panel.rs"]
mod tests;
