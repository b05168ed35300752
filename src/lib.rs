pub mod archive;
pub mod assemble;
pub mod classify;
pub mod descriptor;
pub mod script;
pub mod translate;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;

#[cfg(all(target_arch = "wasm32", feature = "wasm-bindings"))]
pub mod wasm;

use anyhow::{Context, Result};
use assemble::UnityProject;
use descriptor::ProjectDescriptor;
use script::{GeneratedScript, UnhandledOpcode};
use std::path::{Path, PathBuf};

/// Everything one conversion run produces. Built fresh per call; nothing
/// is shared or mutated across runs.
#[derive(Debug, Clone)]
pub struct ConvertOutcome {
    pub scripts: Vec<GeneratedScript>,
    pub report: String,
    pub project: UnityProject,
    pub unhandled: Vec<UnhandledOpcode>,
}

pub fn convert_sb3_bytes(bytes: &[u8]) -> Result<ConvertOutcome> {
    let (descriptor_text, assets) = archive::read_project_archive(bytes)?;
    let descriptor = ProjectDescriptor::parse(&descriptor_text)?;
    let (scripts, unhandled) = build_scripts(&descriptor);
    let report = script::render_report(&scripts);
    let project = assemble::assemble_project(&assets, &scripts);
    Ok(ConvertOutcome {
        scripts,
        report,
        project,
        unhandled,
    })
}

pub fn convert_entry(input: &Path) -> Result<ConvertOutcome> {
    let input = canonicalize_file(input)?;
    let bytes = std::fs::read(&input)
        .with_context(|| format!("Failed to open '{}'.", input.display()))?;
    convert_sb3_bytes(&bytes)
        .with_context(|| format!("Failed to convert '{}'.", input.display()))
}

fn build_scripts(descriptor: &ProjectDescriptor) -> (Vec<GeneratedScript>, Vec<UnhandledOpcode>) {
    let mut scripts = Vec::with_capacity(descriptor.targets.len());
    let mut unhandled = Vec::new();
    for target in &descriptor.targets {
        let (generated, mut misses) = script::build_script(target);
        scripts.push(generated);
        unhandled.append(&mut misses);
    }
    (scripts, unhandled)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn run_cli(args: &cli::Args) -> Result<()> {
    let total_stages = 5 + usize::from(args.emit_script.is_some());
    let progress = CliProgress::new("Convert", total_stages);
    let mut stage = 0usize;

    stage += 1;
    progress.emit(stage, "Resolving input path");
    let input = canonicalize_file(&args.input)?;

    stage += 1;
    progress.emit(stage, "Reading project archive");
    let (descriptor_text, assets) = archive::read_project_file(&input)?;
    let descriptor = ProjectDescriptor::parse(&descriptor_text)?;

    stage += 1;
    progress.emit(stage, "Translating sprite scripts");
    let (scripts, unhandled) = build_scripts(&descriptor);
    let report = script::render_report(&scripts);

    stage += 1;
    progress.emit(stage, "Assembling Unity project");
    let project = assemble::assemble_project(&assets, &scripts);

    if let Some(script_path) = &args.emit_script {
        stage += 1;
        progress.emit(stage, "Writing script report");
        std::fs::write(script_path, report.as_bytes())
            .with_context(|| format!("Failed to write '{}'.", script_path.display()))?;
    }

    stage += 1;
    progress.emit(stage, "Writing project archive");
    let output = resolve_output_path(&input, args.output.as_deref());
    let zip_bytes = project.to_zip_bytes()?;
    std::fs::write(&output, zip_bytes)
        .with_context(|| format!("Failed to write '{}'.", output.display()))?;

    if report.is_empty() {
        eprintln!("No recognizable blocks found.");
    }
    if !unhandled.is_empty() {
        if args.list_unhandled {
            for miss in &unhandled {
                eprintln!(
                    "unhandled opcode '{}' (sprite '{}', block '{}')",
                    miss.opcode, miss.sprite, miss.block_id
                );
            }
        } else {
            eprintln!(
                "{} block(s) used opcodes with no translation rule; re-run with --list-unhandled to see them.",
                unhandled.len()
            );
        }
    }

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn resolve_output_path(input: &Path, output: Option<&Path>) -> PathBuf {
    match output {
        Some(path) => {
            if path.extension().is_none() {
                path.with_extension("zip")
            } else {
                path.to_path_buf()
            }
        }
        None => input
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("UnityProject.zip"),
    }
}

pub fn canonicalize_file(path: &Path) -> Result<PathBuf> {
    if !path.exists() || !path.is_file() {
        return Err(anyhow::anyhow!(
            "Input file not found: '{}'.",
            path.display()
        ));
    }
    Ok(path.canonicalize()?)
}

#[cfg(not(target_arch = "wasm32"))]
struct CliProgress {
    prefix: &'static str,
    total: usize,
}

#[cfg(not(target_arch = "wasm32"))]
impl CliProgress {
    fn new(prefix: &'static str, total: usize) -> Self {
        Self {
            prefix,
            total: total.max(1),
        }
    }

    fn emit(&self, step: usize, label: &str) {
        let step = step.clamp(1, self.total);
        let bar = render_progress_bar(step, self.total, 14);
        eprintln!(
            "[{}] {}... ({}/{}) {}",
            self.prefix, label, step, self.total, bar
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn render_progress_bar(step: usize, total: usize, width: usize) -> String {
    let width = width.max(1);
    let filled = ((step * width) + (total / 2)) / total;
    let mut s = String::with_capacity(width + 2);
    s.push('[');
    for i in 0..width {
        s.push(if i < filled { '=' } else { '-' });
    }
    s.push(']');
    s
}
