use serde::Serialize;
use url::Url;

use crate::AssetId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

/// Metadata record for a single library asset. This is the reference handed
/// back by the store's lookup, not the media payload itself.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Asset {
    pub id: AssetId,
    pub kind: MediaKind,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

impl Asset {
    pub fn new(id: AssetId, kind: MediaKind) -> Self {
        Self {
            id,
            kind,
            pixel_width: 0,
            pixel_height: 0,
        }
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.pixel_width = width;
        self.pixel_height = height;
        self
    }
}

/// A playable video item resolved by the store. The URL points at whatever
/// the store materialized for playback, local file or remote stream alike.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerItem {
    asset_id: AssetId,
    url: Url,
}

impl PlayerItem {
    pub fn new(asset_id: AssetId, url: Url) -> Self {
        Self { asset_id, url }
    }

    pub fn get_asset_id(&self) -> &AssetId {
        &self.asset_id
    }

    pub fn get_url(&self) -> &Url {
        &self.url
    }
}
