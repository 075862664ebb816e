//! Fixture builders shared by the integration tests
#![allow(dead_code)]

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub const EM_386: u16 = 3;
pub const EM_ARM: u16 = 40;
pub const EM_X86_64: u16 = 62;
pub const EF_ARM_SOFT_FLOAT: u32 = 0x0500_0200;
pub const EF_ARM_HARD_FLOAT: u32 = 0x0500_0400;

pub struct FixtureSymbol<'a> {
    pub name: &'a str,
    pub global: bool,
    pub defined: bool,
}

pub fn global(name: &str) -> FixtureSymbol<'_> {
    FixtureSymbol {
        name,
        global: true,
        defined: true,
    }
}

pub fn undefined(name: &str) -> FixtureSymbol<'_> {
    FixtureSymbol {
        name,
        global: true,
        defined: false,
    }
}

fn put_u16(buf: &mut [u8], at: usize, value: u16) {
    buf[at..at + 2].copy_from_slice(&value.to_le_bytes());
}

fn put_u32(buf: &mut [u8], at: usize, value: u32) {
    buf[at..at + 4].copy_from_slice(&value.to_le_bytes());
}

fn put_u64(buf: &mut [u8], at: usize, value: u64) {
    buf[at..at + 8].copy_from_slice(&value.to_le_bytes());
}

fn align8(buf: &mut Vec<u8>) {
    while buf.len() % 8 != 0 {
        buf.push(0);
    }
}

/// A little-endian ELF64 shared object with a dynamic section and dynamic symbol table
pub fn elf64(machine: u16, flags: u32, needed: &[&str], symbols: &[FixtureSymbol<'_>]) -> Vec<u8> {
    // .dynstr
    let mut dynstr = vec![0u8];
    let mut add_string = |s: &str| {
        let offset = dynstr.len() as u32;
        dynstr.extend_from_slice(s.as_bytes());
        dynstr.push(0);
        offset
    };
    let needed_offsets: Vec<u32> = needed.iter().map(|s| add_string(s)).collect();
    let symbol_offsets: Vec<u32> = symbols.iter().map(|s| add_string(s.name)).collect();

    // .dynsym, starting with the null symbol
    let mut dynsym = vec![0u8; 24];
    for (symbol, name) in symbols.iter().zip(&symbol_offsets) {
        let mut entry = [0u8; 24];
        put_u32(&mut entry, 0, *name);
        let bind: u8 = if symbol.global { 1 } else { 0 };
        entry[4] = (bind << 4) | 2;
        put_u16(&mut entry, 6, if symbol.defined { 1 } else { 0 });
        dynsym.extend_from_slice(&entry);
    }

    // .dynamic, terminated by DT_NULL
    let mut dynamic = Vec::new();
    for offset in &needed_offsets {
        dynamic.extend_from_slice(&1u64.to_le_bytes());
        dynamic.extend_from_slice(&u64::from(*offset).to_le_bytes());
    }
    dynamic.extend_from_slice(&[0u8; 16]);

    let shstrtab = b"\0.dynstr\0.dynsym\0.dynamic\0.shstrtab\0";

    let mut out = vec![0u8; 64];
    let dynstr_offset = out.len();
    out.extend_from_slice(&dynstr);
    align8(&mut out);
    let dynsym_offset = out.len();
    out.extend_from_slice(&dynsym);
    let dynamic_offset = out.len();
    out.extend_from_slice(&dynamic);
    let shstrtab_offset = out.len();
    out.extend_from_slice(shstrtab);
    align8(&mut out);
    let section_headers_offset = out.len();

    // (name, type, offset, size, link, info, entsize)
    let sections: [(u32, u32, usize, usize, u32, u32, u64); 5] = [
        (0, 0, 0, 0, 0, 0, 0),
        (1, 3, dynstr_offset, dynstr.len(), 0, 0, 0),
        (9, 11, dynsym_offset, dynsym.len(), 1, 1, 24),
        (17, 6, dynamic_offset, dynamic.len(), 1, 0, 16),
        (26, 3, shstrtab_offset, shstrtab.len(), 0, 0, 0),
    ];
    for (name, kind, offset, size, link, info, entsize) in sections {
        let mut header = [0u8; 64];
        put_u32(&mut header, 0, name);
        put_u32(&mut header, 4, kind);
        put_u64(&mut header, 24, offset as u64);
        put_u64(&mut header, 32, size as u64);
        put_u32(&mut header, 40, link);
        put_u32(&mut header, 44, info);
        put_u64(&mut header, 48, if kind == 0 { 0 } else { 8 });
        put_u64(&mut header, 56, entsize);
        out.extend_from_slice(&header);
    }

    out[0..4].copy_from_slice(b"\x7fELF");
    out[4] = 2; // ELFCLASS64
    out[5] = 1; // little endian
    out[6] = 1; // EV_CURRENT
    put_u16(&mut out, 16, 3); // ET_DYN
    put_u16(&mut out, 18, machine);
    put_u32(&mut out, 20, 1);
    put_u64(&mut out, 40, section_headers_offset as u64);
    put_u32(&mut out, 48, flags);
    put_u16(&mut out, 52, 64);
    put_u16(&mut out, 54, 56);
    put_u16(&mut out, 58, 64);
    put_u16(&mut out, 60, sections.len() as u16);
    put_u16(&mut out, 62, 4);
    out
}

/// A PE32+ image with a single `.idata` section importing the given DLLs
pub fn pe64(dlls: &[&str]) -> Vec<u8> {
    const NT: usize = 0x40;
    const OPTIONAL: usize = NT + 4 + 20;
    const SECTION_TABLE: usize = OPTIONAL + 240;
    const RAW: usize = 0x200;
    const RVA: u32 = 0x1000;

    let mut out = vec![0u8; 0x400];
    out[0..2].copy_from_slice(b"MZ");
    put_u32(&mut out, 0x3c, NT as u32);
    out[NT..NT + 4].copy_from_slice(b"PE\0\0");

    put_u16(&mut out, NT + 4, 0x8664);
    put_u16(&mut out, NT + 6, 1);
    put_u16(&mut out, NT + 20, 240);
    put_u16(&mut out, NT + 22, 0x2022);

    put_u16(&mut out, OPTIONAL, 0x20b);
    put_u32(&mut out, OPTIONAL + 32, 0x1000);
    put_u32(&mut out, OPTIONAL + 36, 0x200);
    put_u32(&mut out, OPTIONAL + 56, 0x2000);
    put_u32(&mut out, OPTIONAL + 60, 0x200);
    put_u16(&mut out, OPTIONAL + 68, 3);
    put_u32(&mut out, OPTIONAL + 108, 16);
    let descriptors_size = 20 * (dlls.len() + 1);
    put_u32(&mut out, OPTIONAL + 120, RVA);
    put_u32(&mut out, OPTIONAL + 124, descriptors_size as u32);

    out[SECTION_TABLE..SECTION_TABLE + 6].copy_from_slice(b".idata");
    put_u32(&mut out, SECTION_TABLE + 8, 0x200);
    put_u32(&mut out, SECTION_TABLE + 12, RVA);
    put_u32(&mut out, SECTION_TABLE + 16, 0x200);
    put_u32(&mut out, SECTION_TABLE + 20, RAW as u32);
    put_u32(&mut out, SECTION_TABLE + 36, 0xC000_0040);

    let mut name_offset = descriptors_size;
    for (i, dll) in dlls.iter().enumerate() {
        let descriptor = RAW + 20 * i;
        put_u32(&mut out, descriptor + 12, RVA + name_offset as u32);
        let start = RAW + name_offset;
        out[start..start + dll.len()].copy_from_slice(dll.as_bytes());
        name_offset += dll.len() + 1;
    }
    out
}

pub fn zip_with(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, bytes) in entries {
        writer.start_file(*name, SimpleFileOptions::default()).unwrap();
        writer.write_all(bytes).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Place an artifact in a Maven-layout directory
pub fn publish(root: &Path, group: &str, artifact: &str, version: &str, file: &str, bytes: &[u8]) {
    let mut dir = root.to_path_buf();
    for part in group.split('.') {
        dir.push(part);
    }
    dir.push(artifact);
    dir.push(version);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file), bytes).unwrap();
}
