use crate::archive::{self, ArchiveEntry};
use crate::classify::{base_name, classify, AssetKind};
use crate::script::GeneratedScript;
use anyhow::Result;
use std::collections::{BTreeMap, HashSet};

/// Fixed placeholder scene, identical every run and not derived from the
/// input project.
pub const MAIN_SCENE_UNITY: &str = r"%YAML 1.1
%TAG !u! tag:unity3d.com,2011:
--- !u!1 &100000
GameObject:
  m_Name: MainScene
  m_Component:
  - component: {fileID: 10001}
  m_Transform:
    m_LocalPosition: {x: 0, y: 0, z: 0}
  m_Script:
    m_Script: {fileID: 11500000, guid: 0000000000000000a000000000000000, type: 3}
";

/// The assembled output tree, path to content. Built fresh for every run
/// and returned by value, so no state survives between runs.
#[derive(Debug, Clone)]
pub struct UnityProject {
    entries: BTreeMap<String, Vec<u8>>,
}

impl UnityProject {
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.entries.get(path).map(Vec::as_slice)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &[u8])> + '_ {
        self.entries
            .iter()
            .map(|(path, bytes)| (path.as_str(), bytes.as_slice()))
    }

    /// Serializes the tree in sorted-path order, so byte-identical input
    /// yields byte-identical archives.
    pub fn to_zip_bytes(&self) -> Result<Vec<u8>> {
        archive::build_zip_bytes(self.entries())
    }
}

/// Routes each classified asset into its folder (as-encountered order,
/// last-wins on colliding base names), adds one script file per target
/// and the fixed scene document.
pub fn assemble_project(assets: &[ArchiveEntry], scripts: &[GeneratedScript]) -> UnityProject {
    let mut entries = BTreeMap::new();

    for asset in assets {
        let folder = match classify(&asset.name) {
            AssetKind::Sprite => "Assets/Sprites",
            AssetKind::Sound => "Assets/Sounds",
            AssetKind::Ignored => continue,
        };
        let path = format!("{}/{}", folder, base_name(&asset.name));
        if entries.insert(path.clone(), asset.bytes.clone()).is_some() {
            log::warn!("duplicate asset name '{}', keeping the later entry", path);
        }
    }

    let mut used = HashSet::new();
    for script in scripts {
        let file_name = unique_script_filename(&script.class_name, &mut used);
        entries.insert(
            format!("Assets/Scripts/{}", file_name),
            script.text.clone().into_bytes(),
        );
    }

    entries.insert(
        "Assets/Scenes/MainScene.unity".to_string(),
        MAIN_SCENE_UNITY.as_bytes().to_vec(),
    );

    UnityProject { entries }
}

fn unique_script_filename(class_name: &str, used: &mut HashSet<String>) -> String {
    let mut base = sanitize_filename(class_name);
    if base.is_empty() {
        base = "sprite".to_string();
    }
    let mut candidate = format!("{}.cs", base);
    let mut index = 2usize;
    while !used.insert(candidate.to_lowercase()) {
        candidate = format!("{}_{}.cs", base, index);
        index += 1;
    }
    candidate
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim_matches('_')
        .to_string()
}
