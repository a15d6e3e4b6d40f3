//! Application identity constants.

pub const APP_NAME: &str = "DaVinci Bridge";
pub const APP_DESCRIPTION: &str = "A DApp for DaVinci Bridge Multichain Route transfers";
pub const APP_URL: &str = "https://davinci-bridge.vercel.app";
