use std::collections::HashMap;

use chrono::Utc;
use colored::Colorize;
use image::DynamicImage;
use tokio::sync::Mutex;

use crate::{
    asset::{Asset, PlayerItem},
    auth::{AccessLevel, AuthorizationStatus},
    error::{AuthorizationError, QueryError},
    options::{ContentMode, ImageRequestOptions, TargetSize, VideoRequestOptions},
    store::{MediaStore, RequestId, ResponseInfo},
    Artwork, AssetId,
};

/// Facade over the device media library. Owns no media machinery of its own:
/// authorization, lookup, caching and decoding are all delegated to the
/// injected store, and the facade tracks just the authorization status and
/// the handles of in-flight requests.
///
/// Construct one per store and share it behind an `Arc`; all methods take
/// `&self`.
pub struct MediaLibrary<S> {
    store: S,
    authorization_status: Mutex<AuthorizationStatus>,
    active_requests: Mutex<HashMap<AssetId, RequestId>>,
}

impl<S: MediaStore> MediaLibrary<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            authorization_status: Mutex::new(AuthorizationStatus::NotDetermined),
            active_requests: Mutex::new(HashMap::new()),
        }
    }

    /// Ask the store to prompt for (or report) library permission at the
    /// given level. Granted and limited access both succeed; denied,
    /// undetermined and restricted all collapse into the single
    /// `RestrictedAccess` condition. Statuses this crate does not know about
    /// are treated as granted.
    pub async fn request_authorization(
        &self,
        access_level: AccessLevel,
    ) -> Result<(), AuthorizationError> {
        let status = self.store.request_authorization(access_level).await;
        *self.authorization_status.lock().await = status;

        if status.is_granted() {
            Ok(())
        } else {
            Err(AuthorizationError::RestrictedAccess)
        }
    }

    /// Resolve an identifier to a decoded image. Exactly one outcome per
    /// call: the image, or a single error.
    pub async fn fetch_image(
        &self,
        asset_id: &AssetId,
        target_size: TargetSize,
        content_mode: ContentMode,
    ) -> Result<DynamicImage, QueryError> {
        let started_at = Utc::now().timestamp_millis();
        let asset = self.lookup(asset_id)?;

        let options = ImageRequestOptions::opportunistic();
        let (request, completion) =
            self.store
                .request_image(&asset, target_size, content_mode, &options);
        self.track(asset_id, request).await;

        let response = completion.await;
        self.untrack(asset_id, request).await;

        let response = response.map_err(|_| QueryError::Cancelled)?;
        check_info(response.info)?;
        let image = response.image.ok_or(QueryError::AssetNotFound)?;

        println!(
            "{} image id='{}' latency_ms={}",
            "[fetched]".green(),
            asset_id,
            Utc::now().timestamp_millis() - started_at
        );
        Ok(image)
    }

    /// Resolve an identifier to a playable item. The sizing parameters are
    /// accepted for parity with `fetch_image`; player item requests carry no
    /// sizing controls, so they are not forwarded.
    pub async fn fetch_video(
        &self,
        asset_id: &AssetId,
        _target_size: TargetSize,
        _content_mode: ContentMode,
    ) -> Result<PlayerItem, QueryError> {
        let started_at = Utc::now().timestamp_millis();
        let asset = self.lookup(asset_id)?;

        let options = VideoRequestOptions::automatic();
        let (request, completion) = self.store.request_player_item(&asset, &options);
        self.track(asset_id, request).await;

        let response = completion.await;
        self.untrack(asset_id, request).await;

        let response = response.map_err(|_| QueryError::Cancelled)?;
        check_info(response.info)?;
        let item = response.item.ok_or(QueryError::AssetNotFound)?;

        println!(
            "{} video id='{}' latency_ms={}",
            "[fetched]".green(),
            asset_id,
            Utc::now().timestamp_millis() - started_at
        );
        Ok(item)
    }

    /// Fetch an image and encode it as a base64 PNG string.
    pub async fn fetch_artwork(
        &self,
        asset_id: &AssetId,
        target_size: TargetSize,
    ) -> Result<Artwork, QueryError> {
        let image = self
            .fetch_image(asset_id, target_size, ContentMode::default())
            .await?;
        Artwork::from_image(&image).map_err(QueryError::Underlying)
    }

    /// Cancel the in-flight request recorded for an identifier, if any. The
    /// interrupted fetch resolves with `QueryError::Cancelled` and never
    /// delivers a payload afterwards. Cancelling an identifier with no
    /// active request does nothing.
    pub async fn cancel(&self, asset_id: &AssetId) {
        let recorded = self.active_requests.lock().await.remove(asset_id);
        if let Some(request) = recorded {
            self.store.cancel_request(request);
        }
    }

    pub async fn authorization_status(&self) -> AuthorizationStatus {
        *self.authorization_status.lock().await
    }

    pub async fn has_active_request(&self, asset_id: &AssetId) -> bool {
        self.active_requests.lock().await.contains_key(asset_id)
    }

    fn lookup(&self, asset_id: &AssetId) -> Result<Asset, QueryError> {
        self.store
            .fetch_assets(std::slice::from_ref(asset_id))
            .into_iter()
            .next()
            .ok_or(QueryError::AssetNotFound)
    }

    async fn track(&self, asset_id: &AssetId, request: RequestId) {
        self.active_requests
            .lock()
            .await
            .insert(asset_id.clone(), request);
    }

    // Concurrent fetches for the same identifier are not coalesced; the table
    // keeps the most recent handle, so completion only removes the entry if
    // it still holds this fetch's own handle.
    async fn untrack(&self, asset_id: &AssetId, request: RequestId) {
        let mut active = self.active_requests.lock().await;
        if active.get(asset_id) == Some(&request) {
            active.remove(asset_id);
        }
    }
}

fn check_info(info: ResponseInfo) -> Result<(), QueryError> {
    match info.error {
        Some(error) => Err(QueryError::Underlying(error)),
        None => Ok(()),
    }
}
