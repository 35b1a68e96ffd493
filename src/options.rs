/// Target dimensions for a decoded image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    /// Ask the store for the largest representation it has.
    pub const MAXIMUM: TargetSize = TargetSize {
        width: u32::MAX,
        height: u32::MAX,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for TargetSize {
    fn default() -> Self {
        TargetSize::MAXIMUM
    }
}

/// How the decoded image should be fitted into the target size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentMode {
    #[default]
    AspectFit,
    AspectFill,
}

/// Delivery behaviour for store requests. `Opportunistic` applies to image
/// requests, `Automatic` to player item requests; the quality modes are
/// shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    Automatic,
    Opportunistic,
    HighQuality,
    Fast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeMode {
    None,
    Fast,
    Exact,
}

/// Which recorded version of a video to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoVersion {
    Current,
    Original,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequestOptions {
    pub delivery_mode: DeliveryMode,
    pub resize_mode: ResizeMode,
    pub network_access_allowed: bool,
    pub synchronous: bool,
}

impl ImageRequestOptions {
    /// The configuration every image fetch issues: best-effort progressive
    /// delivery, fast approximate resizing, network fetch permitted, and the
    /// final result delivered in one shot.
    pub fn opportunistic() -> Self {
        Self {
            delivery_mode: DeliveryMode::Opportunistic,
            resize_mode: ResizeMode::Fast,
            network_access_allowed: true,
            synchronous: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRequestOptions {
    pub version: VideoVersion,
    pub network_access_allowed: bool,
    pub delivery_mode: DeliveryMode,
}

impl VideoRequestOptions {
    pub fn automatic() -> Self {
        Self {
            version: VideoVersion::Current,
            network_access_allowed: true,
            delivery_mode: DeliveryMode::Automatic,
        }
    }
}
