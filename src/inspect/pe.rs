use object::pe::{ImageNtHeaders32, ImageNtHeaders64};
use object::read::pe::{ImageNtHeaders, PeFile};
use object::{FileKind, LittleEndian};

use super::allowlist::AllowList;
use super::error::InspectError;
use crate::diagnostics::Report;

/// DLL names from the import directory of a PE image
pub fn imported_dlls(data: &[u8]) -> Result<Vec<String>, InspectError> {
    match FileKind::parse(data)? {
        FileKind::Pe32 => imports::<ImageNtHeaders32>(data),
        FileKind::Pe64 => imports::<ImageNtHeaders64>(data),
        other => Err(InspectError::UnexpectedFormat {
            expected: "PE",
            found: format!("{other:?}"),
        }),
    }
}

fn imports<Pe: ImageNtHeaders>(data: &[u8]) -> Result<Vec<String>, InspectError> {
    let file = PeFile::<Pe>::parse(data)?;
    let mut dlls = Vec::new();
    let Some(table) = file.import_table()? else {
        return Ok(dlls);
    };
    let mut descriptors = table.descriptors()?;
    while let Some(descriptor) = descriptors.next()? {
        let name = table.name(descriptor.name.get(LittleEndian))?;
        dlls.push(String::from_utf8_lossy(name).into_owned());
    }
    Ok(dlls)
}

/// Windows images only have their imports checked
pub fn check(dlls: &[String], is_debug: bool, report: &mut Report) {
    let extra = AllowList::windows(is_debug).unexpected(dlls);
    if !extra.is_empty() {
        report.info(format!("additional libs required: {}", extra.join(", ")));
    }
}
