use serde::{Deserialize, Serialize};

use crate::foundation::error::{TarotError, TarotResult};

const EMBEDDED: &str = include_str!("translations.json");

/// Display languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// French.
    Fr,
    /// English.
    En,
}

impl Language {
    /// Language used when neither a stored preference nor a usable locale exists.
    pub const DEFAULT: Language = Language::En;

    /// BCP 47 primary subtag.
    pub fn code(self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
        }
    }

    /// Parse an exact language code (`"fr"` or `"en"`, case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "fr" => Some(Self::Fr),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Map a host locale (`fr-CA`, `fr_FR.UTF-8`, `en-US`, ...) onto a display language.
    ///
    /// Only the primary subtag is considered; anything that is not French reads as English.
    pub fn from_locale(locale: &str) -> Self {
        let primary = locale
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default();
        if primary.eq_ignore_ascii_case("fr") {
            Self::Fr
        } else {
            Self::En
        }
    }

    /// The other language.
    pub fn toggled(self) -> Self {
        match self {
            Self::Fr => Self::En,
            Self::En => Self::Fr,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = TarotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
            .ok_or_else(|| TarotError::validation(format!("unknown language \"{s}\"")))
    }
}

/// Both language tables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    /// French content.
    pub fr: Translations,
    /// English content.
    pub en: Translations,
}

impl Dictionary {
    /// The dictionary compiled into the crate.
    pub fn embedded() -> TarotResult<Self> {
        Self::from_json(EMBEDDED)
    }

    /// Parse and validate a dictionary from JSON.
    pub fn from_json(json: &str) -> TarotResult<Self> {
        let dict: Self = serde_json::from_str(json)
            .map_err(|e| TarotError::serde(format!("parse translations: {e}")))?;
        dict.validate()?;
        Ok(dict)
    }

    /// Table for `lang`.
    pub fn get(&self, lang: Language) -> &Translations {
        match lang {
            Language::Fr => &self.fr,
            Language::En => &self.en,
        }
    }

    fn validate(&self) -> TarotResult<()> {
        for lang in [Language::Fr, Language::En] {
            let t = self.get(lang);
            for (what, s) in [
                ("about.title", &t.about.title),
                ("formations.title", &t.formations.title),
                ("contact.title", &t.contact.title),
                ("hero.name", &t.hero.name),
            ] {
                if s.trim().is_empty() {
                    return Err(TarotError::content(format!("{lang}: {what} is empty")));
                }
            }
        }
        Ok(())
    }
}

/// All localized strings of one language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translations {
    /// Header identity.
    pub hero: Hero,
    /// Biography block.
    pub about: About,
    /// Education block.
    pub formations: Formations,
    /// Work history.
    pub experiences: Experiences,
    /// Contact block.
    pub contact: Contact,
    /// Footer strings.
    pub footer: Footer,
}

/// Header identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Site owner's name.
    pub name: String,
    /// Role line.
    pub title: String,
}

/// Biography block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    /// Section title, also the label printed on the card.
    pub title: String,
    /// Introductory paragraph.
    pub intro: String,
    /// Skill groups.
    pub skills: Skills,
}

/// The four skill groups, in display order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    /// Personal strengths.
    pub atouts: SkillGroup,
    /// Technical stack.
    pub tech: SkillGroup,
    /// Professional skills.
    pub competences: SkillGroup,
    /// Hobbies.
    pub interests: SkillGroup,
}

impl Skills {
    /// Groups in display order.
    pub fn groups(&self) -> [&SkillGroup; 4] {
        [&self.atouts, &self.tech, &self.competences, &self.interests]
    }
}

/// A titled list of skills.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    /// Group heading.
    pub title: String,
    /// Entries.
    pub items: Vec<String>,
}

/// Education block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formations {
    /// Section title.
    pub title: String,
    /// Lead paragraph.
    pub description: String,
    /// Degrees, most recent first.
    pub degrees: Vec<Degree>,
    /// CV download link.
    pub cv: CvLink,
}

/// One degree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degree {
    /// Degree name.
    pub title: String,
    /// Human-readable period.
    pub period: String,
    /// Institution.
    pub school: String,
    /// City and country.
    pub location: String,
    /// Bullet points.
    pub highlights: Vec<String>,
}

/// Static CV download.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvLink {
    /// Button label.
    pub label: String,
    /// Site-relative path of the PDF.
    pub file_name: String,
}

/// Work history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experiences {
    /// Section title.
    pub title: String,
    /// Lead paragraph.
    pub description: String,
    /// Jobs, most recent first.
    pub jobs: Vec<Job>,
}

/// One job.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Position.
    pub title: String,
    /// Human-readable period.
    pub period: String,
    /// Employer.
    pub company: String,
    /// City and country.
    pub location: String,
    /// Bullet points.
    pub highlights: Vec<String>,
}

/// Contact block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Section title.
    pub title: String,
    /// Lead paragraph.
    pub description: String,
    /// Email address.
    pub email: String,
    /// GitHub handle.
    pub github: String,
    /// GitHub profile URL.
    pub github_url: String,
    /// LinkedIn handle.
    pub linkedin: String,
    /// LinkedIn profile URL.
    pub linkedin_url: String,
}

/// Footer strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    /// Credit line.
    pub made: String,
    /// Technology line.
    pub tech: String,
}

#[cfg(test)]
#[path = "../../tests/unit/content/translations.rs"]
mod tests;
