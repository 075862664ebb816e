//! Libraries a vendor binary may link against without being reported
//!
//! Anything a shared library imports that is not covered here is surfaced as an additional requirement,
//! since end users would have to ship it themselves.

use std::collections::HashSet;

const LINUX_SYSTEM_LIBS: &[&str] = &[
    "libcscorejni.so",
    "libntcorejni.so",
    "libwpiHaljni.so",
    "libdl.so.2",
    "libatomic.so.1",
    "libstdc++.so.6",
    "libm.so.6",
    "libgcc_s.so.1",
    "libpthread.so.0",
    "libc.so.6",
    "librt.so.1",
];

/// WPILib libraries that always ship next to vendor binaries
const WPILIB_LIBS: &[&str] = &[
    "wpilibc",
    "cameraserver",
    "cscore",
    "ntcore",
    "wpiHal",
    "wpiutil",
    "wpimath",
    "wpinet",
];

/// roboRIO image libraries, per season
const ATHENA_SYSTEM_LIBS: &[(&str, &[&str])] = &[(
    "2019",
    &[
        "libNiFpga.so.13",
        "libNiFpgaLv.so.13",
        "libniriodevenum.so.1",
        "libniriosession.so.1",
        "libNiRioSrv.so.13",
        "libRoboRIO_FRC_ChipObject.so.19",
        "libvisa.so",
        "libFRC_NetworkCommunication.so.19",
    ],
)];

const LINUX_PREFIXES: &[&str] = &["libopencv_"];

const WINDOWS_SYSTEM_LIBS: &[&str] = &[
    "cscorejni.dll",
    "ntcorejni.dll",
    "wpiHaljni.dll",
    "KERNEL32.dll",
    "api-ms-win-crt-runtime-l1-1-0.dll",
    "api-ms-win-crt-heap-l1-1-0.dll",
    "api-ms-win-crt-utility-l1-1-0.dll",
    "api-ms-win-crt-convert-l1-1-0.dll",
];

/// The MSVC runtime is linked in its debug flavor by debug builds too
const WINDOWS_RUNTIME_LIBS: &[&str] = &["MSVCP140", "VCRUNTIME140", "ucrtbase"];

#[derive(Debug, Clone)]
pub struct AllowList {
    names: HashSet<String>,
    prefixes: &'static [&'static str],
    case_insensitive: bool,
}

impl AllowList {
    pub fn linux(arch: &str, is_debug: bool, year: &str) -> Self {
        let suffix = if is_debug { "d" } else { "" };
        let mut names: HashSet<String> = LINUX_SYSTEM_LIBS.iter().map(|s| s.to_string()).collect();
        names.extend(WPILIB_LIBS.iter().map(|lib| format!("lib{lib}{suffix}.so")));
        if arch == "athena" {
            if let Some((_, libs)) = ATHENA_SYSTEM_LIBS.iter().find(|(y, _)| *y == year) {
                names.extend(libs.iter().map(|s| s.to_string()));
            }
        }
        Self {
            names,
            prefixes: LINUX_PREFIXES,
            case_insensitive: false,
        }
    }

    pub fn windows(is_debug: bool) -> Self {
        let suffix = if is_debug { "d" } else { "" };
        let mut names: HashSet<String> = WINDOWS_SYSTEM_LIBS
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        names.extend(
            WPILIB_LIBS
                .iter()
                .chain(WINDOWS_RUNTIME_LIBS)
                .map(|lib| format!("{lib}{suffix}.dll").to_lowercase()),
        );
        Self {
            names,
            prefixes: &[],
            case_insensitive: true,
        }
    }

    pub fn permits(&self, library: &str) -> bool {
        let library = if self.case_insensitive {
            library.to_lowercase()
        } else {
            library.to_string()
        };
        self.names.contains(&library) || self.prefixes.iter().any(|p| library.starts_with(p))
    }

    /// Imports not covered by the list, in their original order and spelling
    pub fn unexpected<'a>(&self, libraries: impl IntoIterator<Item = &'a String>) -> Vec<String> {
        libraries
            .into_iter()
            .filter(|lib| !self.permits(lib))
            .cloned()
            .collect()
    }
}
