pub mod descriptor;
pub mod platform;
pub mod settings;

// Re-export commonly used types
pub use descriptor::{
    ConflictingDescriptor, CppDependency, Descriptor, JavaDependency, JniDependency,
    RequiredDescriptor,
};
pub use platform::{BuildVariant, LibraryFile, Platform, TargetOs};
pub use settings::CheckSettings;
