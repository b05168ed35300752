use sb2unity_rs_core::descriptor::Block;
use sb2unity_rs_core::translate::{translate, Translation};
use serde_json::json;

fn lines_for(value: serde_json::Value) -> Vec<String> {
    let block = Block::from_value("blk", &value);
    match translate(&block) {
        Translation::Lines(lines) => lines,
        Translation::Unhandled => panic!("expected a translation rule for {}", value),
    }
}

#[test]
fn flag_clicked_opens_entry_point() {
    let lines = lines_for(json!({ "opcode": "event_whenflagclicked" }));
    assert_eq!(lines, vec!["  void Start() {"]);
}

#[test]
fn key_press_uppercases_key_name() {
    let lines = lines_for(json!({
        "opcode": "event_whenkeypressed",
        "fields": { "KEY_OPTION": ["a", null] }
    }));
    assert_eq!(lines[1], "    if (Input.GetKeyDown(KeyCode.A)) {");
    assert_eq!(lines.len(), 5);
}

#[test]
fn key_press_defaults_to_space() {
    let lines = lines_for(json!({ "opcode": "event_whenkeypressed" }));
    assert_eq!(lines[1], "    if (Input.GetKeyDown(KeyCode.SPACE)) {");
}

#[test]
fn move_steps_substitutes_literal() {
    let lines = lines_for(json!({
        "opcode": "motion_movesteps",
        "inputs": { "STEPS": [1, [4, "42"]] }
    }));
    assert_eq!(
        lines,
        vec!["    transform.Translate(Vector3.right * 42 * Time.deltaTime);"]
    );
}

#[test]
fn move_steps_defaults_to_ten() {
    let lines = lines_for(json!({ "opcode": "motion_movesteps" }));
    assert_eq!(
        lines,
        vec!["    transform.Translate(Vector3.right * 10 * Time.deltaTime);"]
    );
}

#[test]
fn empty_string_literal_takes_the_default() {
    let lines = lines_for(json!({
        "opcode": "motion_movesteps",
        "inputs": { "STEPS": [1, [4, ""]] }
    }));
    assert_eq!(
        lines,
        vec!["    transform.Translate(Vector3.right * 10 * Time.deltaTime);"]
    );
}

#[test]
fn block_reference_input_takes_the_default() {
    // Position [1] holds a block id, not a literal array.
    let lines = lines_for(json!({
        "opcode": "motion_movesteps",
        "inputs": { "STEPS": [3, "someOtherBlock", [4, "99"]] }
    }));
    assert_eq!(
        lines,
        vec!["    transform.Translate(Vector3.right * 10 * Time.deltaTime);"]
    );
}

#[test]
fn numeric_json_literal_renders_as_text() {
    let lines = lines_for(json!({
        "opcode": "motion_movesteps",
        "inputs": { "STEPS": [1, [4, 42]] }
    }));
    assert_eq!(
        lines,
        vec!["    transform.Translate(Vector3.right * 42 * Time.deltaTime);"]
    );
}

#[test]
fn turn_directions_flip_the_sign() {
    let right = lines_for(json!({
        "opcode": "motion_turnright",
        "inputs": { "DEGREES": [1, [4, "30"]] }
    }));
    assert_eq!(right, vec!["    transform.Rotate(Vector3.forward * +30);"]);

    let left = lines_for(json!({ "opcode": "motion_turnleft" }));
    assert_eq!(left, vec!["    transform.Rotate(Vector3.forward * -15);"]);
}

#[test]
fn say_substitutes_message_and_defaults_to_hello() {
    let with_message = lines_for(json!({
        "opcode": "looks_say",
        "inputs": { "MESSAGE": [1, [10, "Meow"]] }
    }));
    assert_eq!(with_message, vec!["    Debug.Log(\"Meow\");"]);

    let without = lines_for(json!({ "opcode": "looks_sayforsecs" }));
    assert_eq!(without, vec!["    Debug.Log(\"Hello!\");"]);
}

#[test]
fn visibility_toggles_are_fixed() {
    assert_eq!(
        lines_for(json!({ "opcode": "looks_hide" })),
        vec!["    gameObject.SetActive(false);"]
    );
    assert_eq!(
        lines_for(json!({ "opcode": "looks_show" })),
        vec!["    gameObject.SetActive(true);"]
    );
}

#[test]
fn repeat_emits_counted_loop_skeleton() {
    let lines = lines_for(json!({
        "opcode": "control_repeat",
        "inputs": { "TIMES": [1, [6, "3"]] }
    }));
    assert_eq!(
        lines,
        vec![
            "    for (int i = 0; i < 3; i++) {",
            "      // repeat logic",
            "    }",
        ]
    );
}

#[test]
fn forever_emits_unconditional_loop_skeleton() {
    let lines = lines_for(json!({ "opcode": "control_forever" }));
    assert_eq!(
        lines,
        vec!["    while (true) {", "      // forever loop", "    }"]
    );
}

#[test]
fn wait_emits_timed_suspension() {
    let lines = lines_for(json!({
        "opcode": "control_wait",
        "inputs": { "DURATION": [1, [5, "2.5"]] }
    }));
    assert_eq!(lines, vec!["    yield return new WaitForSeconds(2.5);"]);

    let default = lines_for(json!({ "opcode": "control_wait" }));
    assert_eq!(default, vec!["    yield return new WaitForSeconds(1);"]);
}

#[test]
fn set_variable_assigns_named_variable() {
    let lines = lines_for(json!({
        "opcode": "data_setvariableto",
        "fields": { "VARIABLE": ["score", "score-id"] },
        "inputs": { "VALUE": [1, [10, "5"]] }
    }));
    assert_eq!(lines, vec!["    score = 5;"]);

    let defaults = lines_for(json!({ "opcode": "data_setvariableto" }));
    assert_eq!(defaults, vec!["    myVar = 0;"]);
}

#[test]
fn change_variable_resolves_name_from_its_own_fields() {
    let lines = lines_for(json!({
        "opcode": "data_changevariableby",
        "fields": { "VARIABLE": ["lives", "lives-id"] }
    }));
    assert_eq!(lines, vec!["    lives += 1;"]);

    let defaults = lines_for(json!({ "opcode": "data_changevariableby" }));
    assert_eq!(defaults, vec!["    myVar += 1;"]);
}

#[test]
fn pen_color_and_size_substitute_literals() {
    let color = lines_for(json!({
        "opcode": "pen_setPenColorToColor",
        "inputs": { "COLOR": [1, [9, "#ff00aa"]] }
    }));
    assert_eq!(color, vec!["    // Pen: Set color to #ff00aa"]);

    let color_default = lines_for(json!({ "opcode": "pen_setPenColorToColor" }));
    assert_eq!(color_default, vec!["    // Pen: Set color to #000000"]);

    let size = lines_for(json!({
        "opcode": "pen_setPenSizeTo",
        "inputs": { "SIZE": [1, [4, "7"]] }
    }));
    assert_eq!(size, vec!["    // Pen: Set size to 7"]);
}

#[test]
fn unrecognized_opcode_is_unhandled_not_an_error() {
    let block = Block::from_value("blk", &json!({ "opcode": "looks_changesizeby" }));
    assert_eq!(translate(&block), Translation::Unhandled);
}
