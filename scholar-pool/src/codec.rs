//! Structured encodings of program records.
//!
//! JSON is the wire format the front-end consumes; YAML is offered for
//! hand-inspected dumps. Content hashes are SHA-256 over canonical JSON.

use sha2::{Digest, Sha256};

use crate::config::{ExportConfig, ExportFormat};
use crate::types::Program;

/// Error types for encoding and decoding.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// JSON encoding or decoding failed
    #[error("JSON codec failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encoding or decoding failed
    #[error("YAML codec failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Encode one program as compact JSON.
pub fn program_to_json(program: &Program) -> Result<String, CodecError> {
    Ok(serde_json::to_string(program)?)
}

/// Decode one program from JSON.
pub fn program_from_json(json: &str) -> Result<Program, CodecError> {
    Ok(serde_json::from_str(json)?)
}

/// Encode a program sequence as JSON.
pub fn programs_to_json(programs: &[Program], pretty: bool) -> Result<String, CodecError> {
    let json = if pretty {
        serde_json::to_string_pretty(programs)?
    } else {
        serde_json::to_string(programs)?
    };
    Ok(json)
}

/// Decode a program sequence from JSON.
pub fn programs_from_json(json: &str) -> Result<Vec<Program>, CodecError> {
    Ok(serde_json::from_str(json)?)
}

/// Encode a program sequence as YAML.
pub fn programs_to_yaml(programs: &[Program]) -> Result<String, CodecError> {
    Ok(serde_yaml::to_string(programs)?)
}

/// Decode a program sequence from YAML.
pub fn programs_from_yaml(yaml: &str) -> Result<Vec<Program>, CodecError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Encode programs using the configured format.
pub fn export(programs: &[Program], config: &ExportConfig) -> Result<String, CodecError> {
    let output = match config.format {
        ExportFormat::Json => programs_to_json(programs, config.pretty)?,
        ExportFormat::Yaml => programs_to_yaml(programs)?,
    };

    tracing::debug!(
        count = programs.len(),
        format = ?config.format,
        bytes = output.len(),
        "Exported programs"
    );

    Ok(output)
}

/// Compute SHA256 hash of content.
pub fn compute_hash(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

/// Compute hash of a program's canonical JSON.
pub fn hash_program(program: &Program) -> Result<String, CodecError> {
    let json = program_to_json(program)?;
    Ok(compute_hash(json.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::programs::{default_providers, GatesCambridgeProgram, ProgramProvider};

    #[test]
    fn test_compute_hash() {
        let hash1 = compute_hash(b"hello");
        let hash2 = compute_hash(b"hello");
        let hash3 = compute_hash(b"world");

        assert_eq!(hash1, hash2);
        assert_ne!(hash1, hash3);
        assert_eq!(hash1.len(), 64); // SHA256 = 32 bytes = 64 hex chars
    }

    #[test]
    fn test_wire_field_names() {
        let program = GatesCambridgeProgram.program();
        let value: serde_json::Value =
            serde_json::from_str(&program_to_json(&program).unwrap()).unwrap();

        assert_eq!(value["type"], "Fully Funded");
        assert_eq!(value["matchScore"], 96);
        assert_eq!(value["tier"], "mythic");
        assert_eq!(value["domain"], "SCHOLAR");
        assert!(value["organizerLogo"].is_string());
        assert!(value["dossierRequirementKeys"].is_array());
        assert!(value["shadowProtocol"]["docBriefs"].is_array());
        assert_eq!(value["checklist"], serde_json::json!([]));
        assert_eq!(value["intel"]["timeline"], serde_json::json!({}));
        assert!(value.get("curriculum").is_none());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let programs: Vec<Program> = default_providers().iter().map(|p| p.program()).collect();
        let yaml = programs_to_yaml(&programs).unwrap();
        assert_eq!(programs_from_yaml(&yaml).unwrap(), programs);
    }

    #[test]
    fn test_export_respects_format() {
        let programs = vec![GatesCambridgeProgram.program()];

        let compact = export(
            &programs,
            &ExportConfig {
                format: ExportFormat::Json,
                pretty: false,
            },
        )
        .unwrap();
        assert!(!compact.contains('\n'));

        let yaml = export(
            &programs,
            &ExportConfig {
                format: ExportFormat::Yaml,
                pretty: true,
            },
        )
        .unwrap();
        assert!(yaml.contains("id: gates-cambridge-2025"));
    }

    #[test]
    fn test_decode_rejects_unknown_tier() {
        let mut value = serde_json::to_value(GatesCambridgeProgram.program()).unwrap();
        value["tier"] = serde_json::json!("unobtainium");
        assert!(matches!(
            program_from_json(&value.to_string()),
            Err(CodecError::Json(_))
        ));
    }
}
