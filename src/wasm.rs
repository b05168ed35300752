use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn convert_sb3_to_script(bytes: &[u8]) -> Result<String, JsValue> {
    crate::convert_sb3_bytes(bytes)
        .map(|outcome| outcome.report)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn convert_sb3_to_project_zip(bytes: &[u8]) -> Result<Vec<u8>, JsValue> {
    let outcome =
        crate::convert_sb3_bytes(bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;
    outcome
        .project
        .to_zip_bytes()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
