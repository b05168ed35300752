use crate::descriptor::Target;
use crate::translate::{translate, Translation};

/// One generated C# skeleton per target. Created during the translation
/// pass and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct GeneratedScript {
    pub sprite_name: String,
    pub class_name: String,
    pub text: String,
}

/// A block whose opcode had no translation rule. Recorded so coverage
/// gaps stay observable instead of vanishing silently.
#[derive(Debug, Clone)]
pub struct UnhandledOpcode {
    pub sprite: String,
    pub block_id: String,
    pub opcode: String,
}

/// Emits the fixed class header, every block's translated lines in stored
/// order, and the fixed footer. Blocks are flattened into one linear body;
/// no nesting is reconstructed.
pub fn build_script(target: &Target) -> (GeneratedScript, Vec<UnhandledOpcode>) {
    let class_name = format!("{}Controller", target.name);
    let mut lines = vec![
        "using UnityEngine;".to_string(),
        String::new(),
        format!("public class {} : MonoBehaviour {{", class_name),
    ];
    let mut unhandled = Vec::new();
    for block in &target.blocks {
        match translate(block) {
            Translation::Lines(mut emitted) => lines.append(&mut emitted),
            Translation::Unhandled => {
                log::debug!(
                    "unhandled opcode '{}' (block '{}', sprite '{}')",
                    block.opcode,
                    block.id,
                    target.name
                );
                unhandled.push(UnhandledOpcode {
                    sprite: target.name.clone(),
                    block_id: block.id.clone(),
                    opcode: block.opcode.clone(),
                });
            }
        }
    }
    lines.push("  }".to_string());
    lines.push("}".to_string());
    let script = GeneratedScript {
        sprite_name: target.name.clone(),
        class_name,
        text: lines.join("\n"),
    };
    (script, unhandled)
}

/// Concatenated download text: every script preceded by its sprite marker.
pub fn render_report(scripts: &[GeneratedScript]) -> String {
    let mut out = String::new();
    for script in scripts {
        out.push_str(&format!(
            "\n// Sprite: {}\n{}\n",
            script.sprite_name, script.text
        ));
    }
    out
}
