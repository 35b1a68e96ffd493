use async_trait::async_trait;
use image::DynamicImage;
use tokio::sync::oneshot;

use crate::{
    asset::{Asset, PlayerItem},
    auth::{AccessLevel, AuthorizationStatus},
    options::{ContentMode, ImageRequestOptions, TargetSize, VideoRequestOptions},
    AssetId,
};

/// Opaque handle the store issues for an in-flight request. Only meaningful
/// when passed back to `cancel_request` on the store that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(i32);

impl RequestId {
    pub fn new(raw: i32) -> Self {
        Self(raw)
    }
}

/// Side-band details accompanying a completion, mirroring the
/// result-plus-info shape platform stores report with.
#[derive(Debug, Default)]
pub struct ResponseInfo {
    /// Opaque store failure; forwarded to the caller unchanged.
    pub error: Option<anyhow::Error>,
    /// Set when the payload is a lower-quality intermediate. Synchronous
    /// requests only ever deliver the final result, so the facade ignores it.
    pub degraded: bool,
}

#[derive(Debug, Default)]
pub struct ImageResponse {
    pub image: Option<DynamicImage>,
    pub info: ResponseInfo,
}

#[derive(Debug, Default)]
pub struct PlayerItemResponse {
    pub item: Option<PlayerItem>,
    pub info: ResponseInfo,
}

pub type PendingImage = (RequestId, oneshot::Receiver<ImageResponse>);
pub type PendingPlayerItem = (RequestId, oneshot::Receiver<PlayerItemResponse>);

/// The external media store: authorization prompts, identifier lookup, and
/// the caching/decoding machinery behind image and player item requests all
/// live on the other side of this seam.
///
/// Request methods hand back the store's handle together with a one-shot
/// completion. An implementation that is asked to cancel stops work and
/// drops the sender without sending; the facade surfaces that to the caller
/// as a cancelled fetch rather than a payload or store error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Prompt for (or report) the user's permission at the given level.
    async fn request_authorization(&self, access_level: AccessLevel) -> AuthorizationStatus;

    /// Resolve identifiers to asset records. Unknown identifiers are simply
    /// absent from the result.
    fn fetch_assets(&self, ids: &[AssetId]) -> Vec<Asset>;

    fn request_image(
        &self,
        asset: &Asset,
        target_size: TargetSize,
        content_mode: ContentMode,
        options: &ImageRequestOptions,
    ) -> PendingImage;

    fn request_player_item(&self, asset: &Asset, options: &VideoRequestOptions)
        -> PendingPlayerItem;

    fn cancel_request(&self, request: RequestId);
}
