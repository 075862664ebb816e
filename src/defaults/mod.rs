//! Built-in constants shared across the checker

/// User agent presented to Maven mirrors
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Season used to select year specific system libraries when none is given
pub const DEFAULT_YEAR: &str = "2019";

/// Platform of the primary deployment target; every descriptor is expected to ship it
pub const DEPLOYMENT_PLATFORM: &str = "linuxathena";

/// 32-bit Windows platform; missing artifacts for it are only a warning
pub const LEGACY_WINDOWS_PLATFORM: &str = "windowsx86";

/// Mangled-name prefixes of the first-party core library namespace (`frc::`)
pub const RESERVED_SYMBOL_PREFIXES: &[&str] = &["_ZN3frc", "_ZNK3frc"];

/// Entry extensions that count as C/C++ sources inside a sources archive
pub const SOURCE_EXTENSIONS: &[&str] = &[".c", ".cpp", ".cc", ".C"];

/// Entry extensions that count as headers inside a headers archive
pub const HEADER_EXTENSIONS: &[&str] = &[".h", ".hpp", ".hh", ".H"];
