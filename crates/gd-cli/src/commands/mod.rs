pub mod clusters;
pub mod dispatch;
pub mod entries;
pub mod export;
pub mod format;
pub mod shared;
pub mod taxonomy;
pub mod zodiac;
