use serde::{Deserialize, Serialize};

use crate::model::ids::ArtistId;

/// A band or solo performer from the upstream catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,

    /// Member names in the order the catalog lists them.
    pub members: Vec<String>,

    /// Year the artist or band was formed.
    pub formation_year: i32,

    /// Free-form first-release date, usually `dd-mm-yyyy`.
    pub first_release: String,

    /// URL of the artist image.
    pub image_url: String,
}

impl Artist {
    #[must_use]
    pub fn new(id: impl Into<ArtistId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            members: Vec::new(),
            formation_year: 0,
            first_release: String::new(),
            image_url: String::new(),
        }
    }

    #[must_use]
    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members = members.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_formation_year(mut self, year: i32) -> Self {
        self.formation_year = year;
        self
    }

    #[must_use]
    pub fn with_first_release(mut self, date: impl Into<String>) -> Self {
        self.first_release = date.into();
        self
    }

    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Label shown in suggestion lists: `Name (Member, Member)`, or just the
    /// name for an artist without listed members.
    pub fn display_label(&self) -> String {
        if self.members.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.members.join(", "))
        }
    }
}
