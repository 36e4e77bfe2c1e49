//! WebAssembly bindings for storeddl
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { generateDdl, WasmModel } from 'storeddl';
//!
//! await init();
//!
//! const model = new WasmModel();
//! model.loadFromJson({
//!   entitySets: [
//!     { name: 'Customer', keyMembers: ['Id'], properties: [
//!       { name: 'Id', kind: 'Int32', nullable: false, storeGenerated: 'Identity' },
//!     ]},
//!   ],
//! });
//!
//! const result = generateDdl(model, '3.0');
//! if (result.success) {
//!   console.log(result.ddl);
//! } else {
//!   console.error(result.error);
//! }
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::ddl::{DdlConfig, DdlGenerator};
use crate::dialect::SqlDialect;
use crate::schema::SchemaModel;

/// Helper to serialize values as plain JS objects (not Maps)
fn to_js_value<T: Serialize>(value: &T) -> JsValue {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value.serialize(&serializer).unwrap_or(JsValue::NULL)
}

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Store model for WASM
#[wasm_bindgen]
pub struct WasmModel {
    inner: SchemaModel,
}

#[wasm_bindgen]
impl WasmModel {
    /// Create a new empty model
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmModel {
        WasmModel {
            inner: SchemaModel::new(),
        }
    }

    /// Replace the model with one deserialized from a JS object
    #[wasm_bindgen(js_name = loadFromJson)]
    pub fn load_from_json(&mut self, model_json: JsValue) -> Result<(), JsValue> {
        self.inner = serde_wasm_bindgen::from_value(model_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid model: {}", e)))?;
        Ok(())
    }

    /// Check if an entity set exists in the model
    #[wasm_bindgen(js_name = hasEntitySet)]
    pub fn has_entity_set(&self, name: &str) -> bool {
        self.inner.entity_set(name).is_some()
    }

    /// Get list of entity set names
    #[wasm_bindgen(js_name = getEntitySetNames)]
    pub fn get_entity_set_names(&self) -> JsValue {
        let names: Vec<&str> = self.inner.entity_sets.iter().map(|s| s.name.as_str()).collect();
        to_js_value(&names)
    }
}

impl Default for WasmModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate the annotated DDL script for a model
///
/// `manifest_token` is the target server version (`"2.5"`, `"3.0"`, `"4.0"`).
#[wasm_bindgen(js_name = generateDdl)]
pub fn generate_ddl(model: &WasmModel, manifest_token: &str) -> JsValue {
    let Some(dialect) = SqlDialect::from_manifest_token(manifest_token) else {
        return to_js_value(&serde_json::json!({
            "success": false,
            "error": format!("Unknown manifest token '{}'. Use '2.5', '3.0' or '4.0'.", manifest_token),
        }));
    };

    let generator = DdlGenerator::new(DdlConfig::default().with_dialect(dialect));
    let result = match generator.transform(Some(&model.inner)) {
        Ok(ddl) => serde_json::json!({
            "success": true,
            "ddl": ddl,
        }),
        Err(e) => serde_json::json!({
            "success": false,
            "error": e.to_string(),
        }),
    };
    to_js_value(&result)
}
