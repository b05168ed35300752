use crate::descriptor::Block;

/// Outcome of translating one block. An opcode outside the handler table
/// contributes nothing to the script; callers record the gap instead of
/// erroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Lines(Vec<String>),
    Unhandled,
}

type Handler = fn(&Block) -> Vec<String>;

pub fn translate(block: &Block) -> Translation {
    match handler_for(&block.opcode) {
        Some(handler) => Translation::Lines(handler(block)),
        None => Translation::Unhandled,
    }
}

/// Opcode-to-handler table. Operand extraction never fails; every handler
/// substitutes its documented default when a field or input is absent or
/// holds something other than a literal.
pub fn handler_for(opcode: &str) -> Option<Handler> {
    let handler: Handler = match opcode {
        "event_whenflagclicked" => when_flag_clicked,
        "event_whenkeypressed" => when_key_pressed,
        "motion_movesteps" => move_steps,
        "motion_turnright" => turn_right,
        "motion_turnleft" => turn_left,
        "motion_goto" => go_to,
        "motion_glideto" => glide_to,
        "looks_say" | "looks_sayforsecs" => say,
        "looks_hide" => hide,
        "looks_show" => show,
        "sound_play" | "sound_playuntildone" => play_sound,
        "sound_stopallsounds" => stop_all_sounds,
        "control_repeat" => repeat,
        "control_forever" => forever,
        "control_if" => if_skeleton,
        "control_if_else" => if_else_skeleton,
        "control_wait" => wait,
        "sensing_keypressed" => key_pressed_poll,
        "sensing_touchingobject" => touching_object,
        "operator_add" | "operator_subtract" | "operator_multiply" | "operator_divide" => math_op,
        "operator_equals" => equals_skeleton,
        "operator_not" => not_skeleton,
        "data_setvariableto" => set_variable,
        "data_changevariableby" => change_variable,
        "pen_clear" => pen_clear,
        "pen_penDown" => pen_down,
        "pen_penUp" => pen_up,
        "pen_setPenColorToColor" => pen_set_color,
        "pen_setPenSizeTo" => pen_set_size,
        _ => return None,
    };
    Some(handler)
}

fn fixed(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| (*line).to_string()).collect()
}

// Start() stays open; the shared class footer supplies the closing braces.
fn when_flag_clicked(_block: &Block) -> Vec<String> {
    fixed(&["  void Start() {"])
}

fn when_key_pressed(block: &Block) -> Vec<String> {
    let key = block.field_first_or("KEY_OPTION", "space").to_uppercase();
    vec![
        "  void Update() {".to_string(),
        format!("    if (Input.GetKeyDown(KeyCode.{})) {{", key),
        "      // action".to_string(),
        "    }".to_string(),
        "  }".to_string(),
    ]
}

fn move_steps(block: &Block) -> Vec<String> {
    let steps = block.input_literal_or("STEPS", "10");
    vec![format!(
        "    transform.Translate(Vector3.right * {} * Time.deltaTime);",
        steps
    )]
}

fn turn_right(block: &Block) -> Vec<String> {
    turn(block, '+')
}

fn turn_left(block: &Block) -> Vec<String> {
    turn(block, '-')
}

fn turn(block: &Block, sign: char) -> Vec<String> {
    let degrees = block.input_literal_or("DEGREES", "15");
    vec![format!(
        "    transform.Rotate(Vector3.forward * {}{});",
        sign, degrees
    )]
}

fn go_to(_block: &Block) -> Vec<String> {
    fixed(&["    // Motion: go to target"])
}

fn glide_to(_block: &Block) -> Vec<String> {
    fixed(&["    // Motion: glide to position"])
}

fn say(block: &Block) -> Vec<String> {
    let message = block.input_literal_or("MESSAGE", "Hello!");
    vec![format!("    Debug.Log(\"{}\");", message)]
}

fn hide(_block: &Block) -> Vec<String> {
    fixed(&["    gameObject.SetActive(false);"])
}

fn show(_block: &Block) -> Vec<String> {
    fixed(&["    gameObject.SetActive(true);"])
}

fn play_sound(_block: &Block) -> Vec<String> {
    fixed(&["    // Sound: play sound"])
}

fn stop_all_sounds(_block: &Block) -> Vec<String> {
    fixed(&["    // Sound: stop all sounds"])
}

fn repeat(block: &Block) -> Vec<String> {
    let times = block.input_literal_or("TIMES", "10");
    vec![
        format!("    for (int i = 0; i < {}; i++) {{", times),
        "      // repeat logic".to_string(),
        "    }".to_string(),
    ]
}

fn forever(_block: &Block) -> Vec<String> {
    fixed(&["    while (true) {", "      // forever loop", "    }"])
}

fn if_skeleton(_block: &Block) -> Vec<String> {
    fixed(&["    if (/* condition */) {", "      // if logic", "    }"])
}

fn if_else_skeleton(_block: &Block) -> Vec<String> {
    fixed(&[
        "    if (/* condition */) {",
        "      // if logic",
        "    } else {",
        "      // else logic",
        "    }",
    ])
}

fn wait(block: &Block) -> Vec<String> {
    let seconds = block.input_literal_or("DURATION", "1");
    vec![format!("    yield return new WaitForSeconds({});", seconds)]
}

fn key_pressed_poll(_block: &Block) -> Vec<String> {
    fixed(&["    if (Input.anyKeyDown) {", "      // key pressed", "    }"])
}

fn touching_object(_block: &Block) -> Vec<String> {
    fixed(&["    // Sensing: check collision"])
}

fn math_op(_block: &Block) -> Vec<String> {
    fixed(&["    // Operator: math operation"])
}

fn equals_skeleton(_block: &Block) -> Vec<String> {
    fixed(&["    if (a == b) {", "      // equals", "    }"])
}

fn not_skeleton(_block: &Block) -> Vec<String> {
    fixed(&["    if (!condition) {", "      // not", "    }"])
}

fn set_variable(block: &Block) -> Vec<String> {
    let name = block.field_first_or("VARIABLE", "myVar");
    let value = block.input_literal_or("VALUE", "0");
    vec![format!("    {} = {};", name, value)]
}

// The name is resolved from this block's own fields; siblings never share
// a captured name.
fn change_variable(block: &Block) -> Vec<String> {
    let name = block.field_first_or("VARIABLE", "myVar");
    let delta = block.input_literal_or("VALUE", "1");
    vec![format!("    {} += {};", name, delta)]
}

fn pen_clear(_block: &Block) -> Vec<String> {
    fixed(&["    // Pen: Clear drawing"])
}

fn pen_down(_block: &Block) -> Vec<String> {
    fixed(&["    // Pen: Start drawing"])
}

fn pen_up(_block: &Block) -> Vec<String> {
    fixed(&["    // Pen: Stop drawing"])
}

fn pen_set_color(block: &Block) -> Vec<String> {
    let color = block.input_literal_or("COLOR", "#000000");
    vec![format!("    // Pen: Set color to {}", color)]
}

fn pen_set_size(block: &Block) -> Vec<String> {
    let size = block.input_literal_or("SIZE", "1");
    vec![format!("    // Pen: Set size to {}", size)]
}
