//! Domain types for one camera's cached state

mod capabilities;
mod date_time;
mod information;
mod media;
mod network;
mod probe;
mod profile;
mod ptz;
mod user;

pub use capabilities::Capabilities;
pub use date_time::{to_wire_utc, DeviceDateTime};
pub use information::{Information, Scopes};
pub use media::{
    AddressFamily, AudioCodec, AudioConfig, AudioEncoderConfig, AudioEncoderOptions,
    AudioSourceConfig, Bounds, CodecRanges, EncoderConfig, EncoderConfigs, EncoderOptions,
    H264Profile, MediaConfig, Multicast, Range, Resolution, SourceConfig, StreamUri, VideoCodec,
    VideoConfig,
};
pub use network::{Duplex, Ipv4Address, NetworkInterface, NetworkInterfaces};
pub use probe::ProbeData;
pub use profile::{MetadataConfig, Profile, ProfileColumns, Profiles};
pub use ptz::{Bounds1D, HomePosition, PtzConfig, PtzState, SpaceRange};
pub use user::{User, UserLevel, Users};
