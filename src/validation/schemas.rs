use serde_json::Value;

// Embed the OSI schema at compile time
const OSI_SCHEMA: &str = include_str!("../../core-spec/osi-schema.json");

/// Name of the embedded schema in error messages
pub const BUNDLED_SCHEMA_NAME: &str = "<bundled>/core-spec/osi-schema.json";

/// The OSI schema shipped inside the binary
pub fn bundled_schema() -> Result<Value, serde_json::Error> {
    serde_json::from_str(OSI_SCHEMA)
}
