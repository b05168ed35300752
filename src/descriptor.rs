use anyhow::{anyhow, Context, Result};
use serde_json::{Map, Value};

/// Decoded `project.json` root document. Parsed once per run and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct ProjectDescriptor {
    pub targets: Vec<Target>,
}

/// One sprite (or the stage) and its block program.
#[derive(Debug, Clone)]
pub struct Target {
    pub name: String,
    pub blocks: Vec<Block>,
}

/// A single visual-program instruction. The raw `fields` and `inputs`
/// maps are kept as JSON values; the accessors below extract the literal
/// operands and never fail, so callers substitute their documented
/// defaults on `None`.
#[derive(Debug, Clone)]
pub struct Block {
    pub id: String,
    pub opcode: String,
    fields: Map<String, Value>,
    inputs: Map<String, Value>,
}

impl ProjectDescriptor {
    pub fn parse(json: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(json).context("Invalid project.json.")?;
        let raw_targets = root
            .get("targets")
            .and_then(Value::as_array)
            .ok_or_else(|| anyhow!("Invalid project.json: missing 'targets' array."))?;
        let mut targets = Vec::with_capacity(raw_targets.len());
        for target in raw_targets {
            targets.push(Target::from_value(target)?);
        }
        Ok(Self { targets })
    }
}

impl Target {
    fn from_value(value: &Value) -> Result<Self> {
        let name = value
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow!("Target missing 'name'."))?
            .to_string();
        let blocks_obj = value
            .get("blocks")
            .and_then(Value::as_object)
            .ok_or_else(|| anyhow!("Target '{}' missing blocks object.", name))?;
        // Map iteration is sorted by block id, which is the documented
        // deterministic stand-in for the document's storage order.
        let mut blocks = Vec::with_capacity(blocks_obj.len());
        for (id, block) in blocks_obj {
            blocks.push(Block::from_value(id, block));
        }
        Ok(Self { name, blocks })
    }
}

impl Block {
    pub fn from_value(id: &str, value: &Value) -> Self {
        let opcode = value
            .get("opcode")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let fields = value
            .get("fields")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        let inputs = value
            .get("inputs")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        Self {
            id: id.to_string(),
            opcode,
            fields,
            inputs,
        }
    }

    /// First element of `fields[name]`, the human-readable value (a bare
    /// string value is accepted too).
    pub fn field_first(&self, name: &str) -> Option<String> {
        let value = self.fields.get(name)?;
        if let Some(s) = value.as_str() {
            return Some(s.to_string());
        }
        value.as_array()?.first()?.as_str().map(ToString::to_string)
    }

    pub fn field_first_or(&self, name: &str, default: &str) -> String {
        self.field_first(name)
            .unwrap_or_else(|| default.to_string())
    }

    /// Literal operand at `inputs[name][1][1]`. A bare string at `[1]` is
    /// a block reference, not a literal, and an empty string is treated
    /// as absent; both resolve to `None`.
    pub fn input_literal(&self, name: &str) -> Option<String> {
        let input = self.inputs.get(name)?.as_array()?;
        let literal = input.get(1)?.as_array()?;
        render_scalar(literal.get(1)?)
    }

    pub fn input_literal_or(&self, name: &str, default: &str) -> String {
        self.input_literal(name)
            .unwrap_or_else(|| default.to_string())
    }
}

fn render_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
