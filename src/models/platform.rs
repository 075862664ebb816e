use std::fmt;

/// Operating system component of a platform key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetOs {
    Linux,
    Windows,
    Osx,
}

impl TargetOs {
    pub fn as_str(self) -> &'static str {
        match self {
            TargetOs::Linux => "linux",
            TargetOs::Windows => "windows",
            TargetOs::Osx => "osx",
        }
    }

    pub fn library_prefix(self) -> &'static str {
        match self {
            TargetOs::Linux | TargetOs::Osx => "lib",
            TargetOs::Windows => "",
        }
    }

    pub fn library_extension(self, variant: BuildVariant) -> &'static str {
        match (self, variant.is_static()) {
            (TargetOs::Linux | TargetOs::Osx, true) => ".a",
            (TargetOs::Windows, true) => ".lib",
            (TargetOs::Linux, false) => ".so",
            (TargetOs::Windows, false) => ".dll",
            (TargetOs::Osx, false) => ".dylib",
        }
    }
}

impl fmt::Display for TargetOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A binary platform key such as `linuxathena` or `windowsx86-64`, split into OS and architecture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    key: String,
    os: TargetOs,
    arch: String,
}

impl Platform {
    /// Split a platform key by its OS prefix. Returns `None` for keys with an unknown OS.
    pub fn parse(key: &str) -> Option<Self> {
        let (os, arch) = [TargetOs::Linux, TargetOs::Windows, TargetOs::Osx]
            .into_iter()
            .find_map(|os| key.strip_prefix(os.as_str()).map(|arch| (os, arch)))?;
        Some(Self {
            key: key.to_string(),
            os,
            arch: arch.to_string(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn os(&self) -> TargetOs {
        self.os
    }

    pub fn arch(&self) -> &str {
        &self.arch
    }

    /// Directory inside a binary archive that holds the libraries of a build variant
    pub fn library_dir(&self, variant: BuildVariant) -> String {
        format!("{}/{}/{}", self.os, self.arch, variant.directory())
    }

    /// Platform specific file names for a library and its separate debug symbols
    pub fn library_file(&self, lib_name: &str, variant: BuildVariant, debug_suffix: bool) -> LibraryFile {
        let mut base = lib_name.to_string();
        if variant.is_debug() && debug_suffix {
            base.push('d');
        }
        let name = format!(
            "{}{}{}",
            self.os.library_prefix(),
            base,
            self.os.library_extension(variant)
        );
        let debug_symbols = (self.os == TargetOs::Linux && !variant.is_static())
            .then(|| format!("{name}.debug"));
        LibraryFile {
            name,
            debug_symbols,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryFile {
    pub name: String,
    /// Companion debug symbol file, only split out for Linux shared builds
    pub debug_symbols: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildVariant {
    Shared,
    SharedDebug,
    Static,
    StaticDebug,
}

impl BuildVariant {
    pub const ALL: [BuildVariant; 4] = [
        BuildVariant::Shared,
        BuildVariant::SharedDebug,
        BuildVariant::Static,
        BuildVariant::StaticDebug,
    ];

    /// Appended to the platform key to form the Maven classifier
    pub fn classifier_suffix(self) -> &'static str {
        match self {
            BuildVariant::Shared => "",
            BuildVariant::SharedDebug => "debug",
            BuildVariant::Static => "static",
            BuildVariant::StaticDebug => "staticdebug",
        }
    }

    pub fn is_static(self) -> bool {
        matches!(self, BuildVariant::Static | BuildVariant::StaticDebug)
    }

    pub fn is_debug(self) -> bool {
        matches!(self, BuildVariant::SharedDebug | BuildVariant::StaticDebug)
    }

    pub fn directory(self) -> &'static str {
        if self.is_static() { "static" } else { "shared" }
    }
}

impl fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BuildVariant::Shared => "shared",
            BuildVariant::SharedDebug => "shared-debug",
            BuildVariant::Static => "static",
            BuildVariant::StaticDebug => "static-debug",
        })
    }
}
