use crate::ids::ItemId;

/// Lightweight record rendered in the suggestion dropdown.
///
/// Also the unit stored in the recently-selected cache, so it is kept as
/// small as the dropdown needs and nothing more.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ItemSuggestion {
    pub id: ItemId,
    pub name: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub thumbnail_url: Option<String>,
}

impl ItemSuggestion {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            thumbnail_url: None,
        }
    }

    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }
}

/// Full record for a single item as returned by the detail endpoint.
///
/// `genres`, `actors` and `directors` arrive as JSON-encoded string lists
/// inside plain strings; use the accessors to get decoded sequences.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ItemDetail {
    pub id: ItemId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub release_date: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub year: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub genres: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub actors: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub directors: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image_url: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub thumbnail_url: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: Option<String>,
}

impl ItemDetail {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Drop everything the dropdown does not render.
    pub fn to_suggestion(&self) -> ItemSuggestion {
        ItemSuggestion {
            id: self.id,
            name: self.name.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
        }
    }

    #[cfg(feature = "serde")]
    pub fn genres(&self) -> Vec<String> {
        crate::list_field::decode_list_field(self.genres.as_deref())
    }

    #[cfg(feature = "serde")]
    pub fn actors(&self) -> Vec<String> {
        crate::list_field::decode_list_field(self.actors.as_deref())
    }

    #[cfg(feature = "serde")]
    pub fn directors(&self) -> Vec<String> {
        crate::list_field::decode_list_field(self.directors.as_deref())
    }
}

impl From<ItemDetail> for ItemSuggestion {
    fn from(detail: ItemDetail) -> Self {
        ItemSuggestion {
            id: detail.id,
            name: detail.name,
            thumbnail_url: detail.thumbnail_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_suggestion_keeps_only_list_fields() {
        let detail = ItemDetail {
            thumbnail_url: Some("thumb.jpg".into()),
            image_url: Some("poster.jpg".into()),
            description: Some("A hacker learns the truth.".into()),
            ..ItemDetail::new(5, "The Matrix")
        };

        let suggestion = detail.to_suggestion();
        assert_eq!(suggestion.id, ItemId(5));
        assert_eq!(suggestion.name, "The Matrix");
        assert_eq!(suggestion.thumbnail_url.as_deref(), Some("thumb.jpg"));
        assert_eq!(ItemSuggestion::from(detail), suggestion);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn detail_deserializes_camel_case_payload() {
        let raw = r#"{
            "id": 42,
            "name": "Heat",
            "releaseDate": "1995-12-15",
            "year": 1995,
            "genres": "[\"Crime\",\"Thriller\"]",
            "actors": "not json",
            "thumbnailUrl": "heat.jpg",
            "rating": 8.3
        }"#;

        let detail: ItemDetail = serde_json::from_str(raw).expect("detail");
        assert_eq!(detail.id, ItemId(42));
        assert_eq!(detail.release_date.as_deref(), Some("1995-12-15"));
        assert_eq!(detail.genres(), vec!["Crime", "Thriller"]);
        assert!(detail.actors().is_empty());
        assert!(detail.directors().is_empty());
        assert_eq!(detail.rating, Some(8.3));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn suggestion_omits_missing_thumbnail_when_serialized() {
        let json = serde_json::to_string(&ItemSuggestion::new(1, "Alien"))
            .expect("serialize");
        assert_eq!(json, r#"{"id":1,"name":"Alien"}"#);
    }
}
