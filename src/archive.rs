use anyhow::{anyhow, Context, Result};
use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipArchive;

/// One non-descriptor file from the source archive, in the order it was
/// encountered. The order matters: name collisions in the output tree
/// resolve last-wins.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    pub name: String,
    pub bytes: Vec<u8>,
}

pub fn read_project_file(input: &Path) -> Result<(String, Vec<ArchiveEntry>)> {
    let bytes =
        fs::read(input).with_context(|| format!("Failed to open '{}'.", input.display()))?;
    read_project_archive(&bytes)
        .with_context(|| format!("Failed to read '{}'.", input.display()))
}

/// Opens the archive and returns the descriptor text plus every other
/// non-directory entry's raw bytes in archive order.
pub fn read_project_archive(bytes: &[u8]) -> Result<(String, Vec<ArchiveEntry>)> {
    let mut zip = ZipArchive::new(Cursor::new(bytes))
        .map_err(|_| anyhow!("Input is not a valid zip/.sb3 archive."))?;

    let mut descriptor = String::new();
    {
        let mut entry = zip
            .by_name("project.json")
            .map_err(|_| anyhow!("project.json not found in the archive."))?;
        entry
            .read_to_string(&mut descriptor)
            .context("Failed reading project.json from the archive.")?;
    }

    let mut assets = Vec::new();
    for i in 0..zip.len() {
        let mut entry = zip.by_index(i)?;
        let name = entry.name().to_string();
        if name == "project.json" || name.ends_with('/') {
            continue;
        }
        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes)?;
        assets.push(ArchiveEntry { name, bytes });
    }

    Ok((descriptor, assets))
}

pub fn build_zip_bytes<'a, I>(entries: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    let mut buffer = Cursor::new(Vec::<u8>::new());
    let mut zip = zip::ZipWriter::new(&mut buffer);
    let opts = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for (name, bytes) in entries {
        zip.start_file(name, opts)?;
        zip.write_all(bytes)?;
    }
    zip.finish()?;
    Ok(buffer.into_inner())
}
