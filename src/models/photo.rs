// src/models/photo.rs
// DOCUMENTATION: Photo entity and the value objects it owns
// PURPOSE: Map flat photo rows onto nested, serializable structures

use super::{Country, DataRow, ModelError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Where a photo was taken
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoCoordinates {
    pub id: i64,
    pub photo_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    /// Map zoom level the position was placed at
    pub accuracy: i64,
}

impl GeoCoordinates {
    pub fn from_row(row: &DataRow) -> Result<Self, ModelError> {
        let latitude = row.float("latitude")?;
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ModelError::invalid("latitude", latitude, "latitude"));
        }
        let longitude = row.float("longitude")?;
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ModelError::invalid("longitude", longitude, "longitude"));
        }

        Ok(GeoCoordinates {
            id: row.int("geo_id")?,
            photo_id: row.int("photo_id")?,
            latitude,
            longitude,
            accuracy: row.int("accuracy")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
    Square,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Square => "square",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
    pub orientation: Orientation,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        let orientation = match width.cmp(&height) {
            std::cmp::Ordering::Greater => Orientation::Landscape,
            std::cmp::Ordering::Less => Orientation::Portrait,
            std::cmp::Ordering::Equal => Orientation::Square,
        };
        Dimensions {
            width,
            height,
            orientation,
        }
    }

    pub fn from_row(row: &DataRow) -> Result<Self, ModelError> {
        Ok(Dimensions::new(row.unsigned("width")?, row.unsigned("height")?))
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

/// Search ranking of a photo
/// c_score: full-text match score, p_score: popularity (fave count)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Relevance {
    pub c_score: i64,
    pub p_score: i64,
}

impl Relevance {
    pub fn from_row(row: &DataRow) -> Result<Self, ModelError> {
        Ok(Relevance {
            c_score: row.optional_int("c_score")?.unwrap_or(0),
            p_score: row.optional_int("p_score")?.unwrap_or(0),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Photo {
    pub id: i64,
    pub uuid: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub town: Option<String>,
    pub date_taken: Option<DateTime<Utc>>,
    pub country: Country,
    pub geo_coordinates: GeoCoordinates,
    pub dimensions: Dimensions,
    pub relevance: Relevance,
}

impl Photo {
    pub fn from_row(row: &DataRow) -> Result<Self, ModelError> {
        Ok(Photo {
            id: row.int("photo_id")?,
            uuid: row.uuid("uuid")?,
            title: row.string("title")?,
            description: row.optional_string("description"),
            town: row.optional_string("town"),
            date_taken: row.optional_datetime("date_taken")?,
            country: Country::from_row(row)?,
            geo_coordinates: GeoCoordinates::from_row(row)?,
            dimensions: Dimensions::from_row(row)?,
            relevance: Relevance::from_row(row)?,
        })
    }

    /// URL-friendly title: lowercase ASCII alphanumerics joined by '-'
    pub fn url_slug(&self) -> String {
        slugify(&self.title)
    }
}

/// The two renditions stored for every photo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    Full,
    Thumbnail,
}

impl ImageSize {
    /// Last path segment of the image route
    pub fn segment(self) -> &'static str {
        match self {
            ImageSize::Full => "image",
            ImageSize::Thumbnail => "thumbnail",
        }
    }

    pub fn url(self, uuid: &Uuid) -> String {
        format!("/photo/{}/{}", uuid, self.segment())
    }

    /// {root}/{uuid}.jpg or {root}/thumbnails/{uuid}.jpg
    pub fn file_path(self, root: &Path, uuid: &Uuid) -> PathBuf {
        let file = format!("{}.jpg", uuid);
        match self {
            ImageSize::Full => root.join(file),
            ImageSize::Thumbnail => root.join("thumbnails").join(file),
        }
    }
}

pub(crate) fn slugify(text: &str) -> String {
    text.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
pub(crate) fn photo_row() -> DataRow {
    DataRow::from_pairs([
        ("photo_id", Some("7")),
        ("uuid", Some("5f1e2a3b-8c4d-4e6f-a7b8-c9d0e1f2a3b4")),
        ("title", Some("Pont Neuf at dusk")),
        ("description", Some("River Seine, late summer")),
        ("town", Some("Paris")),
        ("date_taken", Some("2021-08-30 20:15:00")),
        ("country_id", Some("45")),
        ("country_name", Some("France")),
        ("two_char_code", Some("FR")),
        ("three_char_code", Some("FRA")),
        ("geo_id", Some("3")),
        ("latitude", Some("48.8572")),
        ("longitude", Some("2.3414")),
        ("accuracy", Some("14")),
        ("width", Some("1200")),
        ("height", Some("800")),
        ("c_score", Some("87")),
        ("p_score", Some("4")),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_urls_and_files() {
        let uuid = Uuid::parse_str("5f1e2a3b-8c4d-4e6f-a7b8-c9d0e1f2a3b4").unwrap();
        assert_eq!(
            ImageSize::Thumbnail.url(&uuid),
            "/photo/5f1e2a3b-8c4d-4e6f-a7b8-c9d0e1f2a3b4/thumbnail"
        );
        assert_eq!(
            ImageSize::Full.file_path(Path::new("/srv/photos"), &uuid),
            PathBuf::from("/srv/photos/5f1e2a3b-8c4d-4e6f-a7b8-c9d0e1f2a3b4.jpg")
        );
        assert_eq!(
            ImageSize::Thumbnail.file_path(Path::new("/srv/photos"), &uuid),
            PathBuf::from("/srv/photos/thumbnails/5f1e2a3b-8c4d-4e6f-a7b8-c9d0e1f2a3b4.jpg")
        );
    }

    #[test]
    fn test_photo_from_row() {
        let photo = Photo::from_row(&photo_row()).unwrap();
        assert_eq!(photo.id, 7);
        assert_eq!(photo.country.name, "France");
        assert_eq!(photo.geo_coordinates.accuracy, 14);
        assert_eq!(photo.dimensions.orientation(), Orientation::Landscape);
        assert_eq!(photo.relevance, Relevance { c_score: 87, p_score: 4 });
        assert_eq!(photo.url_slug(), "pont-neuf-at-dusk");
    }

    #[test]
    fn test_photo_serializes_nested() {
        let photo = Photo::from_row(&photo_row()).unwrap();
        let json = serde_json::to_value(&photo).unwrap();
        assert_eq!(json["uuid"], "5f1e2a3b-8c4d-4e6f-a7b8-c9d0e1f2a3b4");
        assert_eq!(json["country"]["two_char_code"], "FR");
        assert_eq!(json["dimensions"]["orientation"], "landscape");
        assert_eq!(json["geo_coordinates"]["latitude"], 48.8572);
        assert_eq!(json["relevance"]["p_score"], 4);
    }

    #[test]
    fn test_relevance_defaults_to_zero() {
        let mut row = photo_row();
        row.insert("c_score", None);
        row.insert("p_score", None);
        let photo = Photo::from_row(&row).unwrap();
        assert_eq!(photo.relevance, Relevance::default());
    }

    #[test]
    fn test_out_of_range_latitude() {
        let mut row = photo_row();
        row.insert("latitude", Some("91.0".to_string()));
        assert!(matches!(
            Photo::from_row(&row),
            Err(ModelError::InvalidValue { expected: "latitude", .. })
        ));
    }

    #[test]
    fn test_orientation() {
        assert_eq!(Dimensions::new(600, 900).orientation(), Orientation::Portrait);
        assert_eq!(Dimensions::new(500, 500).orientation(), Orientation::Square);
    }

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("  Café -- au   lait! "), "caf-au-lait");
        assert_eq!(slugify("???"), "");
    }
}
