//! Presentation-ready view of a selected item.

use marquee_model::{ItemDetail, ItemId};

/// Display model for the detail panel.
///
/// List fields are decoded here so malformed payloads show up as empty
/// sections rather than errors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailView {
    pub id: ItemId,
    pub title: String,
    pub description: Option<String>,
    pub release_date: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub duration: Option<String>,
    pub genres: Vec<String>,
    pub actors: Vec<String>,
    pub directors: Vec<String>,
    /// Thumbnail when present, otherwise the full image.
    pub artwork_url: Option<String>,
}

impl DetailView {
    pub fn from_detail(detail: &ItemDetail) -> Self {
        Self {
            id: detail.id,
            title: detail.name.clone(),
            description: detail.description.clone(),
            release_date: detail.release_date.clone(),
            year: detail.year,
            rating: detail.rating,
            duration: detail.duration.clone(),
            genres: detail.genres(),
            actors: detail.actors(),
            directors: detail.directors(),
            artwork_url: detail
                .thumbnail_url
                .clone()
                .or_else(|| detail.image_url.clone()),
        }
    }

    /// One-line summary such as `1999 · 8.7 · 136 min`.
    pub fn subtitle(&self) -> Option<String> {
        let parts: Vec<String> = [
            self.year.map(|year| year.to_string()),
            self.rating.map(|rating| format!("{rating:.1}")),
            self.duration.clone(),
        ]
        .into_iter()
        .flatten()
        .collect();

        (!parts.is_empty()).then(|| parts.join(" · "))
    }

    /// Plain-text rendering used by the console front end.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = vec![self.title.clone()];
        if let Some(subtitle) = self.subtitle() {
            lines.push(subtitle);
        }
        if let Some(date) = &self.release_date {
            lines.push(format!("Released: {date}"));
        }
        for (label, values) in [
            ("Genres", &self.genres),
            ("Directors", &self.directors),
            ("Cast", &self.actors),
        ] {
            if !values.is_empty() {
                lines.push(format!("{label}: {}", values.join(", ")));
            }
        }
        if let Some(description) = &self.description {
            lines.push(String::new());
            lines.push(description.clone());
        }
        if let Some(url) = &self.artwork_url {
            lines.push(format!("Artwork: {url}"));
        }
        lines
    }
}

impl From<&ItemDetail> for DetailView {
    fn from(detail: &ItemDetail) -> Self {
        Self::from_detail(detail)
    }
}
