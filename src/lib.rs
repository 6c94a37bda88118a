//! Client library for the Foursquare v2 API photo endpoints.
//!
//! Covers fetching a photo by id and uploading a new photo attached to a
//! checkin, tip, or venue. The caller supplies the endpoint and a ready
//! OAuth access token; token acquisition is out of scope.
//!
//! ```no_run
//! use foursquare_client::{Client, PhotoOptions};
//!
//! # async fn example() -> foursquare_client::ApiResult<()> {
//! let client = Client::default_endpoint("ACCESS_TOKEN")?;
//!
//! let photo = client.photo("4d0fb8162d39a093892ea52c").await?;
//! println!("fetched: {}", photo);
//!
//! let options = PhotoOptions::new().venue("4ab7e57cf964a5205f7b20e3");
//! let created = client.add_photo("/tmp/shot.jpg", &options).await?;
//! println!("created: {}", created);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod errors;
pub mod photos;
pub mod response;

pub use client::{Client, DEFAULT_ENDPOINT};
pub use errors::{ApiError, ApiResult};
pub use photos::{Photo, PhotoOptions};
