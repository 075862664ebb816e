use std::io::{Cursor, Read};
use zip::ZipArchive;
use zip::result::ZipResult;

use super::DependencyContext;
use crate::diagnostics::Report;
use crate::models::{BuildVariant, Platform};

pub(super) type Archive<'b> = ZipArchive<Cursor<&'b [u8]>>;

pub(super) fn open(bytes: &[u8]) -> ZipResult<Archive<'_>> {
    ZipArchive::new(Cursor::new(bytes))
}

pub(super) fn has_entry_with_extension(archive: &Archive<'_>, extensions: &[&str]) -> bool {
    archive
        .file_names()
        .any(|name| extensions.iter().any(|ext| name.ends_with(ext)))
}

fn read_entry(archive: &mut Archive<'_>, name: &str) -> ZipResult<Vec<u8>> {
    let mut entry = archive.by_name(name)?;
    let mut bytes = Vec::new();
    entry.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Where a binary archive is expected to hold its library
pub(super) struct BinaryCheck<'c> {
    pub platform: &'c str,
    /// Base library name, or `None` to take it from the archive contents
    pub lib_name: Option<&'c str>,
    pub variant: BuildVariant,
    /// A missing library is only informational
    pub optional: bool,
}

/// Locate the library of one platform/variant in an archive and inspect it when it is a shared build
pub(super) fn check_binary(
    archive: &mut Archive<'_>,
    check: &BinaryCheck<'_>,
    ctx: &DependencyContext<'_>,
    report: &mut Report,
) {
    let Some(platform) = Platform::parse(check.platform) else {
        report.error(format!("unknown platform {}", check.platform));
        return;
    };
    let variant = check.variant;

    let (library, debug_symbols) = match check.lib_name {
        Some(lib_name) => {
            let debug_suffix = ctx.file_config.debug_suffix(report.context());
            let file = platform.library_file(lib_name, variant, debug_suffix);
            (file.name, file.debug_symbols)
        }
        None => {
            let extension = platform.os().library_extension(variant);
            let discovered = archive
                .file_names()
                .filter(|name| name.ends_with(extension))
                .last()
                .and_then(|name| name.rsplit('/').next())
                .map(str::to_string);
            match discovered {
                Some(name) => (name, None),
                None => {
                    report.error(format!("no {extension} library found in archive"));
                    return;
                }
            }
        }
    };

    let directory = platform.library_dir(variant);
    let library_path = format!("{directory}/{library}");
    if archive.index_for_name(&library_path).is_none() {
        let message = format!("library {library_path} not found");
        if check.optional {
            report.info(message);
        } else {
            report.error(message);
        }
    } else if !variant.is_static() {
        match read_entry(archive, &library_path) {
            Ok(bytes) => {
                let mut scope = report.scope(library.clone());
                ctx.inspector
                    .inspect_shared_library(&bytes, &platform, variant.is_debug(), &mut scope);
            }
            Err(e) => report.error(format!("could not read {library_path}: {e}")),
        }
    }

    if let Some(debug_symbols) = debug_symbols {
        let debug_path = format!("{directory}/{debug_symbols}");
        if archive.index_for_name(&debug_path).is_none() {
            report.info(format!("debug symbols file {debug_path} not found"));
        }
    }
}
