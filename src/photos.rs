//! Photos API surface: fetch a photo by id and upload a new photo attached
//! to a checkin, tip, or venue.
//!
//! See https://developer.foursquare.com/docs/photos/photos.html

use reqwest::multipart;
use serde_json::Value;

use crate::client::Client;
use crate::errors::{ApiError, ApiResult};
use crate::response;

/// A photo record as returned by the API. The shape is owned by the remote
/// service; this crate passes it through without validating fields.
pub type Photo = Value;

/// Association parameters for a photo upload. All fields are optional; the
/// API expects exactly one of checkin, tip, or venue to identify the target,
/// but that is the caller's responsibility and is not enforced here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoOptions {
    /// The id of a checkin owned by the acting user.
    pub checkin_id: Option<String>,
    /// The id of a tip owned by the acting user.
    pub tip_id: Option<String>,
    /// The id of a venue, for a public venue photo.
    pub venue_id: Option<String>,
    /// Whether to broadcast this photo to linked social accounts
    /// ("twitter", "facebook", or "twitter,facebook").
    pub broadcast: Option<String>,
    /// Latitude and longitude of the user's location ("lat,lng").
    pub ll: Option<String>,
    /// Accuracy of ll, in meters.
    pub ll_acc: Option<f64>,
    /// Altitude of the user's location, in meters.
    pub alt: Option<f64>,
    /// Vertical accuracy of alt, in meters.
    pub alt_acc: Option<f64>,
}

impl PhotoOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checkin(mut self, id: &str) -> Self {
        self.checkin_id = Some(id.to_string());
        self
    }

    pub fn tip(mut self, id: &str) -> Self {
        self.tip_id = Some(id.to_string());
        self
    }

    pub fn venue(mut self, id: &str) -> Self {
        self.venue_id = Some(id.to_string());
        self
    }

    pub fn broadcast(mut self, target: &str) -> Self {
        self.broadcast = Some(target.to_string());
        self
    }

    pub fn location(mut self, ll: &str) -> Self {
        self.ll = Some(ll.to_string());
        self
    }

    pub fn location_accuracy(mut self, meters: f64) -> Self {
        self.ll_acc = Some(meters);
        self
    }

    pub fn altitude(mut self, meters: f64) -> Self {
        self.alt = Some(meters);
        self
    }

    pub fn altitude_accuracy(mut self, meters: f64) -> Self {
        self.alt_acc = Some(meters);
        self
    }

    /// Convert the set fields to wire parameter names.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();

        if let Some(id) = &self.checkin_id {
            fields.push(("checkinId", id.clone()));
        }
        if let Some(id) = &self.tip_id {
            fields.push(("tipId", id.clone()));
        }
        if let Some(id) = &self.venue_id {
            fields.push(("venueId", id.clone()));
        }
        if let Some(broadcast) = &self.broadcast {
            fields.push(("broadcast", broadcast.clone()));
        }
        if let Some(ll) = &self.ll {
            fields.push(("ll", ll.clone()));
        }
        if let Some(ll_acc) = self.ll_acc {
            fields.push(("llAcc", ll_acc.to_string()));
        }
        if let Some(alt) = self.alt {
            fields.push(("alt", alt.to_string()));
        }
        if let Some(alt_acc) = self.alt_acc {
            fields.push(("altAcc", alt_acc.to_string()));
        }

        fields
    }
}

// The API was built against this exact file labeling, so uploads always
// declare image/jpeg and image.jpg no matter what the source file is.
const UPLOAD_MIME_TYPE: &str = "image/jpeg";
const UPLOAD_FILENAME: &str = "image.jpg";

impl Client {
    /// Get details of a photo.
    ///
    /// Requires an acting user.
    pub async fn photo(&self, id: &str) -> ApiResult<Photo> {
        let response = self.get(&format!("photos/{}", id), &[]).await?;
        response::take_field(response, "photo")
    }

    /// Add a new photo to a checkin, tip, or venue. Returns the photo that
    /// was just created.
    ///
    /// The source file is read once per call; its handle is released before
    /// the request is sent, on success and failure alike.
    pub async fn add_photo(&self, file_path: &str, options: &PhotoOptions) -> ApiResult<Photo> {
        let bytes = tokio::fs::read(file_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ApiError::file_not_found(file_path)
            } else {
                ApiError::Io(e)
            }
        })?;

        let part = multipart::Part::bytes(bytes)
            .file_name(UPLOAD_FILENAME)
            .mime_str(UPLOAD_MIME_TYPE)?;

        let mut form = multipart::Form::new()
            .part("file", part)
            .text("oauth_token", self.access_token().to_string());
        for (name, value) in options.fields() {
            form = form.text(name, value);
        }

        let url = self.url_for("photos/add");
        log::debug!("POST {} ({})", url, file_path);

        let resp = self.http().post(&url).multipart(form).send().await?;
        let response = self.dispatch(resp).await?;
        response::take_field(response, "photo")
    }
}
