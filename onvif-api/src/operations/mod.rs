//! ONVIF operations grouped by service

pub mod device;
pub mod media;
pub mod ptz;
