//! Variable extraction across collections and modes.

use crate::document::DesignDocument;
use crate::error::TokenResult;
use crate::normalize::resolve_variable_value;
use crate::token::VariableToken;

/// Collect one record per variable, in collection order then declaration
/// order, with values resolved per mode.
///
/// Variables are an optional host capability: a document without a
/// variable registry yields an empty sequence rather than an error. Ids a
/// collection references but the registry cannot resolve are skipped.
///
/// # Errors
///
/// Returns [`crate::TokenError::Serialization`] if a pass-through value
/// cannot be represented as JSON.
pub fn extract_variables(document: &DesignDocument) -> TokenResult<Vec<VariableToken>> {
    let Some(registry) = &document.variables else {
        return Ok(Vec::new());
    };

    let mut tokens = Vec::new();
    for collection in &registry.collections {
        for id in &collection.variable_ids {
            let Some(variable) = registry.variable(id) else {
                tracing::debug!(id, collection = %collection.name, "skipping unresolved variable id");
                continue;
            };

            let mut modes = serde_json::Map::new();
            for mode_value in &variable.values_by_mode {
                let mode_name = collection.mode_name(&mode_value.mode_id);
                let resolved =
                    resolve_variable_value(mode_value.value.as_ref(), variable.resolved_type)?;
                modes.insert(mode_name.to_string(), resolved);
            }

            tokens.push(VariableToken {
                name: variable.name.clone(),
                collection: collection.name.clone(),
                resolved_type: variable.resolved_type,
                modes,
            });
        }
    }

    Ok(tokens)
}
