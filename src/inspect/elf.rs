use object::elf;
use object::read::elf::{Dyn, FileHeader, SectionHeader, Sym};
use object::{Endianness, FileKind};
use tracing::debug;

use super::allowlist::AllowList;
use super::error::InspectError;
use crate::defaults::RESERVED_SYMBOL_PREFIXES;
use crate::diagnostics::Report;

const EF_ARM_ABI_FLOAT_SOFT: u32 = 0x200;
const EF_ARM_ABI_FLOAT_HARD: u32 = 0x400;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicSymbol {
    pub name: String,
    pub global: bool,
    pub defined: bool,
}

/// The parts of an ELF shared library that the linkage policy looks at
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElfSummary {
    pub machine: u16,
    pub flags: u32,
    pub needed: Vec<String>,
    pub symbols: Vec<DynamicSymbol>,
}

impl ElfSummary {
    pub fn parse(data: &[u8]) -> Result<Self, InspectError> {
        match FileKind::parse(data)? {
            FileKind::Elf32 => parse_elf::<elf::FileHeader32<Endianness>>(data),
            FileKind::Elf64 => parse_elf::<elf::FileHeader64<Endianness>>(data),
            other => Err(InspectError::UnexpectedFormat {
                expected: "ELF",
                found: format!("{other:?}"),
            }),
        }
    }
}

fn parse_elf<Elf: FileHeader<Endian = Endianness>>(data: &[u8]) -> Result<ElfSummary, InspectError> {
    let header = Elf::parse(data)?;
    let endian = header.endian()?;
    let sections = header.sections(endian, data)?;

    let mut needed = Vec::new();
    for section in sections.iter() {
        let Some((entries, link)) = section.dynamic(endian, data)? else {
            continue;
        };
        let strings = sections.strings(endian, data, link)?;
        for entry in entries {
            if entry.tag32(endian) == Some(elf::DT_NEEDED) {
                let name = entry.string(endian, strings)?;
                needed.push(utf8(name, "DT_NEEDED entry")?);
            }
        }
    }

    let symtab = sections.symbols(endian, data, elf::SHT_DYNSYM)?;
    let mut symbols = Vec::new();
    for symbol in symtab.iter() {
        let name = symbol.name(endian, symtab.strings())?;
        if name.is_empty() {
            continue;
        }
        symbols.push(DynamicSymbol {
            name: utf8(name, "symbol name")?,
            global: symbol.st_bind() == elf::STB_GLOBAL,
            defined: symbol.st_shndx(endian) != elf::SHN_UNDEF,
        });
    }

    Ok(ElfSummary {
        machine: header.e_machine(endian),
        flags: header.e_flags(endian),
        needed,
        symbols,
    })
}

fn utf8(bytes: &[u8], what: &'static str) -> Result<String, InspectError> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|_| InspectError::Encoding(what))
}

fn machine_name(machine: u16) -> String {
    match machine {
        elf::EM_386 => "EM_386".to_string(),
        elf::EM_X86_64 => "EM_X86_64".to_string(),
        elf::EM_ARM => "EM_ARM".to_string(),
        elf::EM_AARCH64 => "EM_AARCH64".to_string(),
        other => format!("EM_{other}"),
    }
}

#[derive(Debug, Clone, Copy)]
enum FloatAbi {
    Soft,
    Hard,
}

/// Expected machine (and ARM float ABI) for the architectures we know about
fn expected_machine(arch: &str) -> Option<(u16, Option<FloatAbi>)> {
    match arch {
        "x86" => Some((elf::EM_386, None)),
        "x86-64" => Some((elf::EM_X86_64, None)),
        "athena" => Some((elf::EM_ARM, Some(FloatAbi::Soft))),
        "raspbian" | "arm32" => Some((elf::EM_ARM, Some(FloatAbi::Hard))),
        "arm64" => Some((elf::EM_AARCH64, None)),
        _ => None,
    }
}

/// Apply the Linux linkage policy to a parsed library
pub fn check(summary: &ElfSummary, arch: &str, is_debug: bool, year: &str, report: &mut Report) {
    match expected_machine(arch) {
        Some((machine, _)) if summary.machine != machine => {
            report.error(format!(
                "arch mismatch, expected {}, got {}",
                machine_name(machine),
                machine_name(summary.machine)
            ));
        }
        Some((_, Some(FloatAbi::Soft))) if summary.flags & EF_ARM_ABI_FLOAT_SOFT == 0 => {
            report.error("expected soft float");
        }
        Some((_, Some(FloatAbi::Hard))) if summary.flags & EF_ARM_ABI_FLOAT_HARD == 0 => {
            report.error("expected hard float");
        }
        Some(_) => {}
        None => debug!("no machine check for arch {arch}"),
    }

    let extra = AllowList::linux(arch, is_debug, year).unexpected(&summary.needed);
    if !extra.is_empty() {
        report.info(format!("additional libs required: {}", extra.join(", ")));
    }

    for symbol in &summary.symbols {
        if !symbol.global || !symbol.defined {
            continue;
        }
        if RESERVED_SYMBOL_PREFIXES
            .iter()
            .any(|prefix| symbol.name.starts_with(prefix))
        {
            report.error(format!("symbol defined in frc namespace: {}", symbol.name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;

    fn symbol(name: &str, global: bool, defined: bool) -> DynamicSymbol {
        DynamicSymbol {
            name: name.to_string(),
            global,
            defined,
        }
    }

    fn summary(machine: u16, flags: u32) -> ElfSummary {
        ElfSummary {
            machine,
            flags,
            ..Default::default()
        }
    }

    #[test]
    fn test_arch_mismatch_is_one_error() {
        let mut report = Report::new();
        check(&summary(elf::EM_ARM, EF_ARM_ABI_FLOAT_HARD), "x86-64", false, "2019", &mut report);

        assert_eq!(report.errors(), 1);
        assert_eq!(
            report.diagnostics()[0].message,
            "arch mismatch, expected EM_X86_64, got EM_ARM"
        );
    }

    #[test]
    fn test_float_abi_checked_only_on_matching_machine() {
        let mut report = Report::new();
        check(&summary(elf::EM_ARM, EF_ARM_ABI_FLOAT_HARD), "athena", false, "2019", &mut report);
        assert_eq!(report.matching(Severity::Error, "expected soft float").count(), 1);

        let mut report = Report::new();
        check(&summary(elf::EM_ARM, EF_ARM_ABI_FLOAT_SOFT), "raspbian", false, "2019", &mut report);
        assert_eq!(report.matching(Severity::Error, "expected hard float").count(), 1);

        let mut report = Report::new();
        check(&summary(elf::EM_AARCH64, 0), "athena", false, "2019", &mut report);
        assert_eq!(report.errors(), 1);
        assert_eq!(report.matching(Severity::Error, "float").count(), 0);

        let mut report = Report::new();
        check(&summary(elf::EM_ARM, EF_ARM_ABI_FLOAT_SOFT), "athena", false, "2019", &mut report);
        assert_eq!(report.errors(), 0);
    }

    #[test]
    fn test_unknown_arch_skips_machine_check() {
        let mut report = Report::new();
        check(&summary(elf::EM_386, 0), "mips", false, "2019", &mut report);
        assert_eq!(report.errors(), 0);
    }

    #[test]
    fn test_reserved_namespace_symbols() {
        let mut elf_summary = summary(elf::EM_X86_64, 0);
        elf_summary.symbols = vec![
            symbol("_ZN3frc6Joystick4getXEv", true, true),
            symbol("_ZNK3frc5Timer3GetEv", true, true),
            symbol("_ZN3frc9RobotBaseC2Ev", true, false),
            symbol("_ZN3frc7private5thingEv", false, true),
            symbol("_ZN6vendor6Device4initEv", true, true),
        ];

        let mut report = Report::new();
        check(&elf_summary, "x86-64", false, "2019", &mut report);

        assert_eq!(report.errors(), 2);
        assert_eq!(
            report
                .matching(Severity::Error, "symbol defined in frc namespace: _ZNK3frc5Timer3GetEv")
                .count(),
            1
        );
    }

    #[test]
    fn test_additional_libs_are_informational() {
        let mut elf_summary = summary(elf::EM_ARM, EF_ARM_ABI_FLOAT_SOFT);
        elf_summary.needed = vec![
            "libc.so.6".to_string(),
            "libwpiHald.so".to_string(),
            "libNiFpga.so.13".to_string(),
            "libusb-1.0.so.0".to_string(),
            "libphoenix.so".to_string(),
        ];

        let mut report = Report::new();
        check(&elf_summary, "athena", true, "2019", &mut report);

        assert_eq!(report.errors(), 0);
        assert_eq!(report.warnings(), 0);
        assert_eq!(
            report.diagnostics()[0].message,
            "additional libs required: libusb-1.0.so.0, libphoenix.so"
        );
    }

    #[test]
    fn test_parse_rejects_non_elf() {
        assert!(ElfSummary::parse(b"definitely not a library").is_err());
    }
}
