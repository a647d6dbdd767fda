//! Device management service operations
//!
//! Identity, clock, capabilities, scopes, network interfaces, accounts and
//! maintenance commands.

mod get_capabilities;
mod get_device_information;
mod get_network_interfaces;
mod get_scopes;
mod get_system_date_and_time;
mod get_users;
mod set_scopes;
mod set_system_date_and_time;
mod set_system_factory_default;
mod system_reboot;

pub use get_capabilities::*;
pub use get_device_information::*;
pub use get_network_interfaces::*;
pub use get_scopes::*;
pub use get_system_date_and_time::*;
pub use get_users::*;
pub use set_scopes::*;
pub use set_system_date_and_time::*;
pub use set_system_factory_default::*;
pub use system_reboot::*;
