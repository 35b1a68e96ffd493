pub mod artwork;
pub mod asset;
pub mod auth;
pub mod error;
pub mod library;
pub mod options;
pub mod store;

/// Opaque identifier naming a single asset in the device media library.
/// Supplied by the caller, never generated here.
pub type AssetId = String;

pub use artwork::Artwork;
pub use asset::{Asset, MediaKind, PlayerItem};
pub use auth::{AccessLevel, AuthorizationStatus};
pub use error::{AuthorizationError, QueryError};
pub use library::MediaLibrary;
pub use options::{
    ContentMode, DeliveryMode, ImageRequestOptions, ResizeMode, TargetSize, VideoRequestOptions,
    VideoVersion,
};
pub use store::{
    ImageResponse, MediaStore, PendingImage, PendingPlayerItem, PlayerItemResponse, RequestId,
    ResponseInfo,
};
