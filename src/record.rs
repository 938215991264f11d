use serde::Deserialize;

/// The structured resume data rendered into a PDF. The record is assembled
/// and validated by the caller (typically a web form layer) and is read-only
/// for the duration of one render.
///
/// Every field has a rendering fallback, so a default (all-empty) record
/// still renders a complete document with placeholder text in each section.
/// An empty string or empty list counts as "not provided".
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub summary: String,
    pub university: String,
    pub degree: String,
    pub grad_year: String,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub activities: Vec<Activity>,
    pub awards: Vec<String>,
}

/// A single project entry: a title line and a free-text description
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
}

/// A club or extracurricular activity entry
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Activity {
    pub name: String,
    pub role: String,
    pub description: String,
}

pub(crate) fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

impl ResumeRecord {
    pub fn display_name(&self) -> &str {
        or_placeholder(&self.name, "Name")
    }

    pub fn display_email(&self) -> &str {
        or_placeholder(&self.email, "Email")
    }

    pub fn display_phone(&self) -> &str {
        or_placeholder(&self.phone, "Phone")
    }

    pub fn display_summary(&self) -> &str {
        or_placeholder(&self.summary, "A highly motivated Computer Science student...")
    }

    pub fn display_university(&self) -> &str {
        or_placeholder(&self.university, "University Name")
    }

    pub fn display_degree(&self) -> &str {
        or_placeholder(&self.degree, "B.Sc. in Computer Science")
    }

    pub fn display_grad_year(&self) -> &str {
        or_placeholder(&self.grad_year, "Expected Graduation 20XX")
    }
}

impl Project {
    pub fn display_title(&self) -> &str {
        or_placeholder(&self.title, "Project Title")
    }
}

impl Activity {
    pub fn display_name(&self) -> &str {
        or_placeholder(&self.name, "Activity")
    }
}
